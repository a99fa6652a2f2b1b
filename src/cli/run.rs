use crate::{
    domain::outcome::describe,
    prelude::{
        AppError, Collection, add,
        command::{Cli, Commands},
        display_record, remove,
        session::Session,
    },
    storage::{self, RecordStore, parse_storage_type, port},
};
use clap::Parser;
use dotenv::dotenv;
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run_app() -> Result<(), AppError> {
    // .env values must be in the environment before clap reads its env fallbacks
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level);
    debug!(file = %cli.file, format = cli.format.is_which(), "starting");

    let store = parse_storage_type(cli.format, &cli.file);

    let Some(command) = cli.command else {
        let stdin = io::stdin();
        let mut session =
            Session::new(stdin.lock(), io::stdout(), store, StdRng::from_os_rng());
        return session.run();
    };

    match command {
        Commands::List => {
            let records = load_for_reading(store.as_ref());

            if records.is_empty() {
                println!("No customers yet");
                return Ok(());
            }

            for record in &records {
                println!("{}", display_record(record));
            }
            Ok(())
        }

        Commands::Add { id, name } => {
            let records = load_for_writing(store.as_ref())?;
            let (records, outcome) = add(records, id, &name);
            println!("{}", outcome?);

            println!("{}", storage::save(store.as_ref(), &records)?);
            Ok(())
        }

        Commands::Remove { id } => {
            let records = load_for_writing(store.as_ref())?;
            let (records, outcome) = remove(records, id);
            println!("{}", outcome?);

            println!("{}", storage::save(store.as_ref(), &records)?);
            Ok(())
        }

        // Import customers into storage from .csv file
        Commands::Import { src } => {
            let records = load_for_writing(store.as_ref())?;
            let (records, outcome) = port::import_records_from_csv(records, src.as_deref());
            println!("{}", outcome?);

            println!("{}", storage::save(store.as_ref(), &records)?);
            Ok(())
        }

        Commands::Export { des } => {
            let records = load_for_reading(store.as_ref());
            println!("{}", port::export_records_to_csv(&records, des.as_deref())?);
            Ok(())
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (tests driving run_app twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Load for display: a missing or unreadable file shows up as an empty list.
fn load_for_reading(store: &dyn RecordStore) -> Collection {
    let (records, outcome) = storage::load(store);
    if let Err(err) = &outcome
        && !matches!(err, AppError::NotFound(_))
    {
        eprintln!("{}", describe(&outcome));
    }
    records
}

/// Load before a change that gets saved straight back. Only a missing file
/// counts as an empty start; anything else would overwrite data we could not read.
fn load_for_writing(store: &dyn RecordStore) -> Result<Collection, AppError> {
    let (records, outcome) = storage::load(store);
    match outcome {
        Ok(_) | Err(AppError::NotFound(_)) => Ok(records),
        Err(err) => Err(err),
    }
}
