//! Persisted user settings.
//!
//! The settings object is small: the display currency, the display language
//! and the accumulated wallet. It is loaded once and saved after every
//! change through a [`SettingsStore`].

use std::{
    future::Future,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Currency code, kept verbatim even when unknown to the table.
    pub currency: String,
    pub language: String,
    /// Sum of every raw value computed so far, in dollars.
    pub wallet_value: f64,
    /// Keys this crate does not model, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            language: "en".to_string(),
            wallet_value: 0.0,
            extra: Map::new(),
        }
    }
}

/// Collaborator persisting [`Settings`].
pub trait SettingsStore: Send + Sync {
    /// Loads the stored settings merged over the defaults.
    fn load(&self) -> impl Future<Output = ResultEngine<Settings>> + Send;

    fn save(&self, settings: &Settings) -> impl Future<Output = ResultEngine<()>> + Send;
}

/// Settings stored as a JSON document on disk.
///
/// A missing file loads as the defaults; missing keys are defaulted and
/// unknown keys kept as they are.
#[derive(Clone, Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: io::Error) -> EngineError {
        EngineError::Settings(format!("{}: {err}", self.path.display()))
    }
}

impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> ResultEngine<Settings> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no settings at {}, using defaults", self.path.display());
                return Ok(Settings::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, settings: &Settings) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| self.io_error(err))?;
        }
        let payload = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, payload)
            .await
            .map_err(|err| self.io_error(err))
    }
}

/// Settings kept in memory. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySettingsStore {
    inner: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    settings: Settings,
    saves: usize,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryState { settings, saves: 0 })),
        }
    }

    /// Last saved settings.
    pub fn snapshot(&self) -> Settings {
        self.state().settings.clone()
    }

    /// Number of completed saves.
    pub fn saves(&self) -> usize {
        self.state().saves
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> ResultEngine<Settings> {
        Ok(self.snapshot())
    }

    async fn save(&self, settings: &Settings) -> ResultEngine<()> {
        let mut state = self.state();
        state.settings = settings.clone();
        state.saves += 1;
        Ok(())
    }
}
