use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog2jira
/// Pushes Daily Time App exports to Jira/Tempo worklogs
#[derive(Parser)]
#[command(
    name = "worklog2jira",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pushes Daily Time App (https://dailytimeapp.com) CSV exports to Jira",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple accounts)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Verbose diagnostics on stderr (same as RUST_LOG=debug)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that endpoint, token and author are set")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Push a CSV export to Jira
    ///
    /// Example:
    ///   worklog2jira push "Daily Export (29:01:16 - 29:01:16).csv"
    ///   cat export.csv | worklog2jira push
    Push {
        /// CSV export; read from stdin when omitted
        file: Option<String>,

        /// Don't ask for confirmation (default when stdin is not a terminal)
        #[arg(long, short = 'q', conflicts_with = "confirm")]
        quiet: bool,

        /// Always ask for confirmation, even when stdin is not a terminal
        #[arg(long, requires = "file")]
        confirm: bool,

        /// Delimiter used for the CSV (defaults to the configured one, ",")
        #[arg(long, short = 'd', value_name = "CHAR")]
        delimiter: Option<String>,

        /// Parse and validate only, print the worklog, send nothing
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Push a timesheet workbook (xlsx, xls, ods) to Jira
    Sheet {
        /// Workbook file
        file: String,

        /// Sheet name (default: first sheet)
        #[arg(long = "sheet", value_name = "NAME")]
        sheet: Option<String>,

        /// Don't ask for confirmation
        #[arg(long, short = 'q')]
        quiet: bool,

        /// Print issue numbers, descriptions and total hours, send nothing
        #[arg(long, conflicts_with = "dry_run")]
        extract: bool,

        /// Validate only, print the worklog, send nothing
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Watch a folder and push every new export automatically
    Watch {
        /// Folder to watch (default: watch_dir from the configuration)
        dir: Option<String>,

        /// Polling interval in seconds
        #[arg(long, default_value_t = 2)]
        interval: u64,

        /// Delimiter used for the CSV
        #[arg(long, short = 'd', value_name = "CHAR")]
        delimiter: Option<String>,

        /// Process the files currently in the folder, then exit
        #[arg(long)]
        once: bool,
    },
}
