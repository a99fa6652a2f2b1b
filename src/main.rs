use rusty_records::prelude::run_app;
use std::process::exit;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
