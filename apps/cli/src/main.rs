use aniracetam_cli::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = aniracetam_cli::run(cli).await {
        aniracetam_cli::report(&e);
        std::process::exit(1);
    }
}
