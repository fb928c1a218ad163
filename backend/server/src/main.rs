use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Port to listen on, overrides RUST_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Presidents CSV, overrides PRESIDENTS_CSV
    #[arg(long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    presidents::start_server(args.port, args.data).await
}
