use std::process;

use anyhow::Result;
use tokio::io::BufReader;

use rusty_teller::run_async;

#[tokio::main]
async fn main() {
    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    run_async(BufReader::new(tokio::io::stdin()), std::io::stdout()).await?;
    Ok(())
}
