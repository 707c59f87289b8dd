use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for telopcsv
#[derive(Parser)]
#[command(
    name = "telopcsv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn timed telop rows (HH:MM-HH:MM,caption,...) into a CSV with duration, character count and rate",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Disable ANSI colors in messages and tables
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Rewrite the configuration file with missing fields set to defaults"
        )]
        migrate: bool,

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

    /// Process telop rows, show the result table and export it
    Process {
        /// Input file; omit or use "-" to read from stdin
        input: Option<String>,

        /// Output directory (default: `output_dir` from config)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Output file name (default: <file_prefix>_YYYYMMDD_HHMMSS.<ext>)
        #[arg(long, value_name = "NAME")]
        file: Option<String>,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Row numbers (1-based) to drop before exporting, e.g. --delete 2,5
        #[arg(long, value_delimiter = ',', value_name = "ROWS")]
        delete: Vec<usize>,

        /// Only show the table, do not write any file
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive session: load, process, select/delete rows and save
    Edit {
        /// Input file loaded (and processed) at start
        input: Option<String>,

        /// Output directory (default: `output_dir` from config)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,
    },
}
