mod cli;
mod commands;
mod common;
mod log;
mod utils;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    log::init();
    cli::start().await
}
