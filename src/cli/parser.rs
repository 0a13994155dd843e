use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tilang
/// CLI application to record traffic-violation entries with SQLite
#[derive(Parser)]
#[command(
    name = "tilang",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple violation logging CLI: record traffic-violation entries and export them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new violation entry
    Add {
        /// Full name of the offender
        name: String,

        /// Age in years (0-99); defaults to the configured value
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=99))]
        age: Option<u8>,

        /// Gender: male or female (also m/f); defaults to male
        #[arg(long)]
        gender: Option<String>,

        /// Incident date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Free-text description of the violation
        #[arg(long)]
        detail: Option<String>,
    },

    /// Show all recorded entries
    List,

    /// Export the displayed entries to a file
    Export {
        /// Export format: csv or json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show information about this application
    About,
}
