use clap::Parser;
use pony_cli::{init_tracing, run_cli, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_cli(cli).await
}
