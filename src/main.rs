use std::io;
use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rusty_teller::run;

fn main() {
    // Diagnostics go to stderr so they never mix into the session transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())?;
    Ok(())
}
