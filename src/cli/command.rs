use clap::{Parser, Subcommand};

use crate::domain::record::{MAX_ID, MIN_ID};
use crate::storage::{DEFAULT_STORAGE_PATH, StorageMediums};

#[derive(Parser, Debug)]
#[command(
    name = "rusty-records",
    version,
    about = "Simple customer record book",
    long_about = "Simple customer record book.\n\
        Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    /// File holding the saved customer list
    #[arg(long, env = "RECORDS_FILE", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub file: String,

    /// Storage format of the file (bin, json)
    #[arg(long, env = "RECORDS_FORMAT", value_enum, default_value_t = StorageMediums::Bin)]
    pub format: StorageMediums,

    /// Diagnostic log filter written to stderr, e.g. "debug"
    #[arg(long, env = "RUST_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
/// Each one loads the file, applies a single change and saves it back
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List saved customers
    List,

    /// Add a new customer
    Add {
        /// Customer ID (1 to 10000)
        #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_ID as i64..=MAX_ID as i64))]
        id: u32,

        /// Customer name
        #[arg(long)]
        name: String,
    },

    /// Remove a customer by ID
    Remove {
        /// ID of the customer to remove
        #[arg(long)]
        id: u32,
    },

    /// Import customers from a .csv file with ID,Name columns
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export customers to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
