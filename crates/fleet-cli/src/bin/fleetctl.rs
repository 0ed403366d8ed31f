use anyhow::Result;
use clap::Parser;
use fleet_cli::{run, Args};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    run(args).await
}
