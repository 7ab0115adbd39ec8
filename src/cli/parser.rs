use clap::{Parser, Subcommand};

/// Command-line interface definition for workmanager
/// CLI application to record work sessions and estimate the monthly wage
#[derive(Parser)]
#[command(
    name = "workmanager",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work sessions per month, estimate gross/net wage and export to XLSX",
    long_about = None
)]
pub struct Cli {
    /// Work on this document instead of the last opened one
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Use an alternative configuration file (useful for tests)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new, empty document
    New {
        /// Where to create it (a temporary file when omitted)
        path: Option<String>,

        #[arg(
            long,
            value_parser = clap::value_parser!(i32).range(1..),
            help = "Year of the document (default: current year)"
        )]
        year: Option<i32>,
    },

    /// Open a document, check it and correct inconsistent data
    Open {
        path: String,

        #[arg(
            long,
            value_parser = clap::value_parser!(i32).range(1..),
            help = "Year to use when the document has none"
        )]
        year: Option<i32>,
    },

    /// Save the current document under a new name
    SaveAs { path: String },

    /// Add a work session; unset fields follow the previous row of the month
    Add {
        #[arg(long, short, help = "Month 1-12 (default: month of --date, or the current one)")]
        month: Option<u32>,

        #[arg(long, short, help = "Date (YYYY-MM-DD or d. M. yyyy)")]
        date: Option<String>,

        #[arg(long = "start", short = 's', help = "Start time (HH:MM, HHMM or HH)")]
        start: Option<String>,

        #[arg(long = "duration", short = 't', help = "Duration (150, 2h, 2,5h)")]
        duration: Option<String>,

        #[arg(long = "desc", help = "Description of the work")]
        description: Option<String>,
    },

    /// Edit a work session field by field
    Edit {
        month: u32,

        /// Row number as shown by `list`
        row: usize,

        #[arg(long, short)]
        date: Option<String>,

        #[arg(long = "start", short = 's')]
        start: Option<String>,

        #[arg(long = "duration", short = 't')]
        duration: Option<String>,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long, help = "Do not touch the date")]
        fast: bool,

        #[arg(
            long,
            short,
            help = "Ask for every field (empty input keeps the value, 'q' cancels)"
        )]
        interactive: bool,
    },

    /// Delete a work session
    Del {
        month: u32,

        /// Row number as shown by `list`
        row: usize,
    },

    /// Remove all sessions of a month, or of the whole year
    Clear {
        #[arg(long, short, help = "Month to clear (default: the whole year)")]
        month: Option<u32>,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List sessions and monthly totals
    List {
        #[arg(long, short, help = "Show only this month")]
        month: Option<u32>,
    },

    /// Estimate the gross and net wage of a month
    Wage {
        month: u32,

        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Hourly wage to use instead of the stored one"
        )]
        wage: Option<String>,
    },

    /// Store the hourly wage of a month
    SetWage {
        month: u32,

        #[arg(allow_hyphen_values = true)]
        wage: String,
    },

    /// Export months to an XLSX workbook
    Export {
        path: String,

        #[arg(
            long,
            value_name = "RANGE",
            default_value = "1-12",
            help = "Months to export, e.g. 5 or 3-6"
        )]
        months: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },
}

impl Commands {
    /// Commands that work on the current document and need it loaded first.
    pub fn needs_document(&self) -> bool {
        !matches!(
            self,
            Commands::New { .. } | Commands::Open { .. } | Commands::Config { .. }
        )
    }
}
