//! The `aniracetam` terminal trainer.
//!
//! Wires the stores, translator and prompts in this crate to the review
//! scheduler in `aniracetam_core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod header;
pub mod prompt;
pub mod store;
pub mod translate;

use std::io::IsTerminal;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::prompt::{Prompt, TerminalPrompt, Tone};
use crate::translate::GoogleTranslator;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let data_dir = config::data_dir()?;
    let mut config = AppConfig::load(&data_dir);
    tracing::debug!(dir = %data_dir.display(), storage = config.storage.as_str(), "loaded configuration");

    let store = store::open_store(config.storage, &data_dir)
        .with_context(|| format!("opening collection in {}", data_dir.display()))?;
    let store = store.as_ref();
    let translator = GoogleTranslator::new(config.translate_url());
    let mut prompt = TerminalPrompt::stdio(!cli.no_color && std::io::stdout().is_terminal());

    match cli.command {
        None => {
            commands::menu::run(store, &translator, &mut prompt, &mut config, &data_dir).await?;
        }
        Some(Command::Add { sentence }) => {
            if let Some(language) = commands::language::ensure(&mut config, &data_dir, &mut prompt)? {
                commands::add::run(store, &translator, &mut prompt, &language, sentence).await?;
            }
        }
        Some(Command::Review) => {
            commands::review::run(store, &mut prompt, Utc::now())?;
        }
        Some(Command::Due { json }) => {
            commands::due::run(store, &mut prompt, Utc::now(), json)?;
        }
        Some(Command::Stats { json }) => {
            commands::stats::run(store, &mut prompt, Utc::now(), json)?;
        }
        Some(Command::Language { code }) => {
            commands::language::run(&mut config, &data_dir, &mut prompt, code)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    // Keeps an already installed subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Print an error the way the rest of the interface reports problems.
pub fn report(err: &anyhow::Error) {
    let mut prompt = TerminalPrompt::new(
        std::io::empty(),
        std::io::stderr(),
        std::io::stderr().is_terminal(),
    );
    if prompt.say(Tone::Error, &format!("error: {err:#}")).is_err() {
        eprintln!("error: {err:#}");
    }
}
