//! Read-only access to the documents of a vault.
//!
//! The engine never touches storage directly: everything it needs goes
//! through [`DocumentSource`]. [`FsVault`] walks a directory on disk,
//! [`MemoryVault`] keeps everything in memory and is handy in tests.

use std::{
    collections::BTreeMap,
    future::Future,
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use walkdir::{DirEntry, WalkDir};

use crate::{EngineError, ResultEngine};

/// Folder holding the host application's configuration, relative to the
/// vault root.
pub const DEFAULT_CONFIG_DIR: &str = ".obsidian";

/// Handle to a markdown document, relative to the vault root.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Document {
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    File,
    Folder,
}

/// Result of looking a path up in the vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    /// `None` when the platform does not record creation times.
    pub created: Option<DateTime<Utc>>,
}

/// Collaborator exposing the documents of a vault.
pub trait DocumentSource: Send + Sync {
    /// Name of the configuration folder, relative to the vault root.
    fn config_dir(&self) -> &str;

    /// Lists every markdown document of the vault.
    fn documents(&self) -> impl Future<Output = ResultEngine<Vec<Document>>> + Send;

    /// Reads the full content of `document`.
    fn read(&self, document: &Document) -> impl Future<Output = ResultEngine<String>> + Send;

    /// Looks `path` up, `Ok(None)` when nothing exists there.
    fn lookup(&self, path: &str) -> impl Future<Output = ResultEngine<Option<FileStat>>> + Send;
}

/// A vault stored as a directory tree.
///
/// Only files with the `md` extension are documents. Hidden entries (names
/// starting with `.`) are skipped, which also keeps the configuration folder
/// out of the scan. Content that is not valid UTF-8 is decoded lossily.
#[derive(Clone, Debug)]
pub struct FsVault {
    root: PathBuf,
    config_dir: String,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
        }
    }

    /// Overrides the configuration folder name.
    pub fn with_config_dir(mut self, config_dir: impl Into<String>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn list_markdown(root: &Path) -> ResultEngine<Vec<Document>> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut documents = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                return Err(EngineError::lookup(path, io::Error::from(err)));
            }
        };
        // Symlinked notes count; their target is resolved on read.
        if entry.file_type().is_dir() || entry.path().extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        documents.push(Document { path: relative });
    }

    tracing::debug!("found {} documents under {}", documents.len(), root.display());
    Ok(documents)
}

impl DocumentSource for FsVault {
    fn config_dir(&self) -> &str {
        &self.config_dir
    }

    async fn documents(&self) -> ResultEngine<Vec<Document>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || list_markdown(&root))
            .await
            .map_err(|err| EngineError::Task(err.to_string()))?
    }

    async fn read(&self, document: &Document) -> ResultEngine<String> {
        let bytes = tokio::fs::read(self.root.join(&document.path))
            .await
            .map_err(|err| EngineError::read(&document.path, err))?;
        // Invalid sequences become U+FFFD instead of failing the read.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn lookup(&self, path: &str) -> ResultEngine<Option<FileStat>> {
        let metadata = match tokio::fs::metadata(self.root.join(path)).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(EngineError::lookup(path, err)),
        };
        let kind = if metadata.is_dir() {
            FileKind::Folder
        } else {
            FileKind::File
        };
        Ok(Some(FileStat {
            kind,
            created: metadata.created().ok().map(DateTime::<Utc>::from),
        }))
    }
}

/// A vault held entirely in memory.
#[derive(Clone, Debug)]
pub struct MemoryVault {
    config_dir: String,
    // `None` marks a document whose read fails.
    notes: BTreeMap<PathBuf, Option<String>>,
    entries: BTreeMap<String, FileStat>,
    broken_lookup: bool,
}

impl Default for MemoryVault {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVault {
    pub fn new() -> Self {
        Self {
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            notes: BTreeMap::new(),
            entries: BTreeMap::new(),
            broken_lookup: false,
        }
    }

    pub fn with_note(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.notes.insert(path.into(), Some(content.into()));
        self
    }

    /// Adds a document that is listed but cannot be read.
    pub fn with_unreadable_note(mut self, path: impl Into<PathBuf>) -> Self {
        self.notes.insert(path.into(), None);
        self
    }

    /// Registers a non-document entry returned by [`DocumentSource::lookup`].
    pub fn with_entry(mut self, path: impl Into<String>, stat: FileStat) -> Self {
        self.entries.insert(path.into(), stat);
        self
    }

    /// Makes every lookup fail with an I/O error.
    pub fn with_broken_lookup(mut self) -> Self {
        self.broken_lookup = true;
        self
    }
}

impl DocumentSource for MemoryVault {
    fn config_dir(&self) -> &str {
        &self.config_dir
    }

    async fn documents(&self) -> ResultEngine<Vec<Document>> {
        Ok(self
            .notes
            .keys()
            .map(|path| Document { path: path.clone() })
            .collect())
    }

    async fn read(&self, document: &Document) -> ResultEngine<String> {
        match self.notes.get(&document.path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(EngineError::read(
                &document.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "unreadable document"),
            )),
            None => Err(EngineError::read(
                &document.path,
                io::Error::from(io::ErrorKind::NotFound),
            )),
        }
    }

    async fn lookup(&self, path: &str) -> ResultEngine<Option<FileStat>> {
        if self.broken_lookup {
            return Err(EngineError::lookup(
                path,
                io::Error::other("lookup failed"),
            ));
        }
        Ok(self.entries.get(path).copied())
    }
}
