use clap::{Parser, Subcommand};

/// Command-line interface definition for weekfill
#[derive(Parser)]
#[command(
    name = "weekfill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile a local weekly time log against a remote timesheet and emit the field writes that fill it",
    long_about = None
)]
pub struct Cli {
    /// Booking input file: canonical array or alternate export object
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Pretend today is a different date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit the ordered write script for the current week (dry run)
    Plan {
        /// JSON file with the scraped row label cells (flat array of
        /// strings, two cells per logical row). Without it, every booking
        /// gets a row in list order.
        #[arg(long = "rows", value_name = "FILE")]
        rows: Option<String>,

        /// Write the script as JSON to FILE instead of printing it
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,
    },

    /// Convert an alternate time-log export into canonical booking JSON
    Convert {
        /// Output file (default: stdout)
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the resolved configuration")]
        print_config: bool,
    },
}
