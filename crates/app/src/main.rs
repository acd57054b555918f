use std::io::Write;

use clap::{Parser, Subcommand};
use engine::{Engine, Formula, FsVault, JsonSettingsStore};

use crate::error::Result;

mod config;
mod error;
mod i18n;
mod present;

#[derive(Parser, Debug)]
#[command(name = "commodity")]
#[command(about = "Estimate what your notes are worth and keep a running wallet")]
struct Cli {
    #[command(flatten)]
    overrides: config::Overrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the vault value with the legacy formula.
    Value,
    /// Calculate the vault value with the reworked formula.
    Reworked,
    /// Show the accumulated wallet.
    Wallet,
    /// Show or change the display settings.
    Settings {
        /// Currency code, e.g. EUR.
        #[arg(long)]
        currency: Option<String>,
        /// Language tag, e.g. de-CH.
        #[arg(long)]
        language: Option<String>,
    },
    /// List the supported currencies.
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli.overrides)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "commodity={level},engine={level}",
            level = config.level
        ))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Value => appraise(&open(&config).await?, Formula::Legacy).await,
        Command::Reworked => appraise(&open(&config).await?, Formula::Reworked).await,
        Command::Wallet => show(&present::wallet(&open(&config).await?.wallet().await)),
        Command::Settings { currency, language } => {
            let engine = open(&config).await?;
            if let Some(currency) = currency {
                engine.set_currency(&currency).await?;
            }
            if let Some(language) = language {
                engine.set_language(&language).await?;
            }
            show(&present::settings(&engine.settings().await))
        }
        Command::Currencies => show(&present::currencies()),
    }
}

type VaultEngine = Engine<FsVault, JsonSettingsStore>;

async fn open(config: &config::AppConfig) -> Result<VaultEngine> {
    let vault = FsVault::new(&config.vault).with_config_dir(&config.config_dir);
    let store = JsonSettingsStore::new(config.settings_path());
    tracing::debug!(
        "opening vault at {}, settings at {}",
        vault.root().display(),
        store.path().display()
    );

    let engine = Engine::builder()
        .source(vault)
        .settings_store(store)
        .scan_policy(config.scan_policy())
        .build()
        .await?;
    Ok(engine)
}

async fn appraise(engine: &VaultEngine, formula: Formula) -> Result<()> {
    let language = engine.settings().await.language;
    show(present::notice(formula, &language))?;

    let appraisal = engine.appraise(formula).await?;
    show(&present::appraisal(&appraisal))
}

fn show(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
