use predicates::str::contains;
use std::fs::{self, File};
use std::io::Read;

mod common;
use common::{env_with_data, temp_out};

fn zip_entry(path: &str, name: &str) -> String {
    let file = File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut entry = archive.by_name(name).expect("entry exists");
    let mut out = String::new();
    entry.read_to_string(&mut out).expect("entry is text");
    out
}

#[test]
fn test_export_xlsx_month_range() {
    let env = env_with_data("export_range");
    let out = temp_out("export_range", "xlsx");

    env.run()
        .args(["export", &out, "--months", "5-6"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let workbook = zip_entry(&out, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Květen""#));
    assert!(workbook.contains(r#"name="Červen""#));
    assert!(!workbook.contains(r#"name="Duben""#));

    let strings = zip_entry(&out, "xl/sharedStrings.xml");
    for text in ["Datum", "Začátek práce", "Hodiny", "Popis práce", "Celkový počet hodin:"] {
        assert!(strings.contains(text), "missing {text}");
    }
    assert!(strings.contains("2. 5. 2024"));
    assert!(strings.contains("13:00"));

    let may = zip_entry(&out, "xl/worksheets/sheet1.xml");
    assert!(may.contains("SUM(C3:C4)"));
    assert!(may.contains("<v>2.5</v>"));

    let june = zip_entry(&out, "xl/worksheets/sheet2.xml");
    assert!(june.contains("SUM(C3:C3)"));
    assert!(june.contains("<v>1.5</v>"));
}

#[test]
fn test_export_whole_year_by_default() {
    let env = env_with_data("export_year");
    let out = temp_out("export_year", "xlsx");

    env.run().args(["export", &out]).assert().success();

    let workbook = zip_entry(&out, "xl/workbook.xml");
    assert_eq!(workbook.matches("<sheet ").count(), 12);
    assert!(workbook.contains(r#"name="Leden""#));
    assert!(workbook.contains(r#"name="Prosinec""#));
}

#[test]
fn test_export_invalid_range() {
    let env = env_with_data("export_invalid_range");
    let out = temp_out("export_invalid_range", "xlsx");

    for range in ["0-3", "6-2", "13", "x"] {
        env.run()
            .args(["export", &out, "--months", range])
            .assert()
            .failure()
            .stderr(contains("Invalid month range"));
    }
    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let env = env_with_data("export_existing");
    let out = temp_out("export_existing", "xlsx");
    fs::write(&out, "keep me").unwrap();

    env.run()
        .args(["export", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    env.run().args(["export", &out, "--force"]).assert().success();
    assert!(zip_entry(&out, "xl/workbook.xml").contains("Leden"));
}
