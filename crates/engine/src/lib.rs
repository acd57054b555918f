//! Appraisal engine for note vaults.
//!
//! The [`Engine`] ties the pieces together: it scans a [`DocumentSource`],
//! measures the age of the vault, evaluates a [`Formula`], formats the result
//! and adds the raw value to the [`Wallet`].
//!
//! ```rust,no_run
//! use engine::{Engine, Formula, FsVault, JsonSettingsStore};
//!
//! # async fn run() -> Result<(), engine::EngineError> {
//! let engine = Engine::builder()
//!     .source(FsVault::new("/home/me/notes"))
//!     .settings_store(JsonSettingsStore::new("/home/me/notes/.obsidian/plugins/commodity/data.json"))
//!     .build()
//!     .await?;
//! let appraisal = engine.appraise(Formula::Reworked).await?;
//! println!("{}", appraisal.display);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

use chrono::Utc;

pub use age::{SENTINEL_FILE, vault_age_days};
pub use currency::{Currency, multiplier_for, symbol_for};
pub use error::EngineError;
pub use format::{abbreviate, format_value, group_digits};
pub use formula::{Formula, FormulaParams, Valuation};
pub use settings::{JsonSettingsStore, MemorySettingsStore, Settings, SettingsStore};
pub use source::{
    DEFAULT_CONFIG_DIR, Document, DocumentSource, FileKind, FileStat, FsVault, MemoryVault,
};
pub use stats::{ScanPolicy, ScanReport, VaultStats, scan};
pub use wallet::Wallet;

mod age;
mod currency;
mod error;
mod format;
mod formula;
mod settings;
mod source;
mod stats;
mod wallet;

type ResultEngine<T> = Result<T, EngineError>;

/// Outcome of one appraisal.
#[derive(Clone, Debug, PartialEq)]
pub struct Appraisal {
    pub formula: Formula,
    pub stats: VaultStats,
    /// Documents left out because they could not be read.
    pub skipped: Vec<PathBuf>,
    pub age_days: f64,
    pub valuation: Valuation,
    /// Currency and language the value was formatted with.
    pub currency: String,
    pub language: String,
    /// Converted value, ready to show.
    pub display: String,
    /// Wallet total after this appraisal was added.
    pub wallet_value: f64,
    /// Time spent scanning and computing.
    pub elapsed: Duration,
}

/// Wallet total as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletSummary {
    pub raw: f64,
    pub converted: f64,
    pub currency: String,
    pub language: String,
    pub display: String,
}

#[derive(Debug)]
pub struct Engine<S, P> {
    source: S,
    wallet: Wallet<P>,
    policy: ScanPolicy,
}

impl<S, P> Engine<S, P>
where
    S: DocumentSource,
    P: SettingsStore,
{
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder<S, P> {
        EngineBuilder::default()
    }

    /// Scans the vault with the configured policy.
    pub async fn stats(&self) -> ResultEngine<ScanReport> {
        scan(&self.source, self.policy).await
    }

    /// Values the vault with `formula` and adds the raw value to the wallet.
    ///
    /// The display currency and language are read once, before the scan.
    pub async fn appraise(&self, formula: Formula) -> ResultEngine<Appraisal> {
        let settings = self.wallet.settings().await;
        let started = std::time::Instant::now();

        let report = self.stats().await?;
        let age_days = vault_age_days(&self.source, Utc::now()).await;
        let valuation = formula.evaluate(&report.stats, age_days, &settings.currency);
        let shown = format_value(valuation.converted, &settings.currency, &settings.language);
        let elapsed = started.elapsed();

        let wallet_value = self.wallet.deposit(valuation.raw).await?;
        tracing::info!(
            "{formula} appraisal: {shown} (raw {}, {} files, age {age_days:.2} days)",
            valuation.raw,
            report.stats.total_files
        );

        Ok(Appraisal {
            formula,
            stats: report.stats,
            skipped: report.skipped,
            age_days,
            valuation,
            currency: settings.currency,
            language: settings.language,
            display: shown,
            wallet_value,
            elapsed,
        })
    }

    /// Current wallet total converted to the display currency.
    pub async fn wallet(&self) -> WalletSummary {
        let settings = self.wallet.settings().await;
        let converted = settings.wallet_value * multiplier_for(&settings.currency);
        WalletSummary {
            raw: settings.wallet_value,
            converted,
            display: format_value(converted, &settings.currency, &settings.language),
            currency: settings.currency,
            language: settings.language,
        }
    }

    pub async fn settings(&self) -> Settings {
        self.wallet.settings().await
    }

    /// Changes the display currency. Codes missing from the table are kept
    /// but display with the default symbol and multiplier.
    pub async fn set_currency(&self, code: &str) -> ResultEngine<Settings> {
        let code = match Currency::from_code(code) {
            Some(currency) => currency.code().to_string(),
            None => {
                tracing::warn!("unknown currency {code}, values will not be converted");
                code.trim().to_string()
            }
        };
        self.wallet
            .update(move |settings| settings.currency = code)
            .await
    }

    /// Changes the display language.
    pub async fn set_language(&self, language: &str) -> ResultEngine<Settings> {
        let language = language.trim().to_string();
        self.wallet
            .update(move |settings| settings.language = language)
            .await
    }
}

pub struct EngineBuilder<S, P> {
    source: Option<S>,
    settings_store: Option<P>,
    policy: ScanPolicy,
}

impl<S, P> Default for EngineBuilder<S, P> {
    fn default() -> Self {
        Self {
            source: None,
            settings_store: None,
            policy: ScanPolicy::default(),
        }
    }
}

impl<S, P> EngineBuilder<S, P>
where
    S: DocumentSource,
    P: SettingsStore,
{
    /// Pass the vault to appraise
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Pass where settings and wallet are persisted
    pub fn settings_store(mut self, store: P) -> Self {
        self.settings_store = Some(store);
        self
    }

    pub fn scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Construct `Engine`, loading the persisted settings.
    pub async fn build(self) -> ResultEngine<Engine<S, P>> {
        let source = self
            .source
            .ok_or(EngineError::MissingCollaborator("document source"))?;
        let store = self
            .settings_store
            .ok_or(EngineError::MissingCollaborator("settings store"))?;

        Ok(Engine {
            source,
            wallet: Wallet::open(store).await?,
            policy: self.policy,
        })
    }
}
