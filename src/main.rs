use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::clipboard::SystemClipboard;
use crate::domain::Appearance;
use crate::ngs::{NgsClient, new_client};
use crate::presentation::{PlainPresenter, Presenter, ThemedPresenter};
use crate::session::{Session, SessionError};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;

mod app_config;
mod app_state;
mod calculate;
mod cli;
mod clipboard;
mod domain;
mod extensions;
mod ngs;
mod presentation;
mod session;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // Logs go to stderr, stdout belongs to the presenter
    tracing_subscriber::fmt()
        .with_max_level(config.logging().level())
        .with_writer(io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let lookup = NgsClient::new(new_client()?, &config);
    let appearance = Appearance::from(cli.appearance.unwrap_or(config.display().appearance()));
    let input = io::stdin().lock();

    let result = if cli.plain {
        let presenter = PlainPresenter::new(io::stdout());
        run(&cli, Session::new(input, presenter, SystemClipboard::new(), lookup, appearance)).await
    } else {
        let presenter = ThemedPresenter::new(io::stdout(), appearance);
        run(&cli, Session::new(input, presenter, SystemClipboard::new(), lookup, appearance)).await
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already shown to the user
        Err(SessionError::Lookup(_)) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}

async fn run<R, P>(cli: &Cli, mut session: Session<R, P, SystemClipboard, NgsClient>) -> Result<(), SessionError>
where
    R: io::BufRead,
    P: Presenter,
{
    match cli.coordinates() {
        Some((latitude, longitude)) => session.run_once(latitude, longitude, cli.copy).await,
        None => session.run().await,
    }
}
