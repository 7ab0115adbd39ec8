#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wm() -> Command {
    cargo_bin_cmd!("workmanager")
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workmanager.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A test environment: its own config file and document.
pub struct TestEnv {
    pub config: String,
    pub doc: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        Self {
            config: temp_out(name, "conf"),
            doc: temp_out(name, "json"),
        }
    }

    /// `workmanager --config <cfg> --file <doc> <args>`
    pub fn run(&self) -> Command {
        let mut cmd = wm();
        cmd.args(["--config", &self.config, "--file", &self.doc]);
        cmd
    }

    /// Create the document for `year` and remember it in the config.
    pub fn init(&self, year: i32) {
        wm().args([
            "--config",
            &self.config,
            "new",
            &self.doc,
            "--year",
            &year.to_string(),
        ])
        .assert()
        .success();
    }

    pub fn add(&self, args: &[&str]) {
        self.run().arg("add").args(args).assert().success();
    }

    pub fn document(&self) -> serde_json::Value {
        let content = fs::read_to_string(&self.doc).expect("read document");
        serde_json::from_str(&content).expect("document is json")
    }
}

/// Two sessions in May 2024 and one in June.
pub fn env_with_data(name: &str) -> TestEnv {
    let env = TestEnv::new(name);
    env.init(2024);
    env.add(&["--date", "2024-05-02", "--start", "08:00", "--duration", "4h", "--desc", "Analýza"]);
    env.add(&["--date", "2024-05-09", "--start", "1300", "--duration", "2,5h", "--desc", "Review"]);
    env.add(&["--date", "2024-06-03", "--start", "9", "--duration", "90", "--desc", "Deploy"]);
    env
}
