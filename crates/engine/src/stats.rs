//! Text statistics of a vault.
//!
//! The counters mirror what the host application reports for a string:
//! lengths are measured in UTF-16 code units and words come from a naive
//! split on whitespace runs, so an empty note still counts as one word.

use std::path::PathBuf;

use crate::{DocumentSource, ResultEngine};

/// Aggregate counts over every document of a vault.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VaultStats {
    pub total_characters: u64,
    pub total_words: u64,
    pub total_files: u64,
    pub total_sentences: u64,
}

impl VaultStats {
    /// Adds the counts of a single document.
    pub fn record(&mut self, content: &str) {
        self.total_files += 1;
        self.total_characters += character_count(content);
        self.total_words += word_count(content);
        self.total_sentences += sentence_count(content);
    }
}

/// What to do when a document cannot be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Abort the scan with the read error.
    #[default]
    Strict,
    /// Leave the document out of every total and report it.
    SkipUnreadable,
}

/// Statistics plus the documents left out of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub stats: VaultStats,
    pub skipped: Vec<PathBuf>,
}

/// Length of `content` as UTF-16 code units.
pub fn character_count(content: &str) -> u64 {
    content.encode_utf16().count() as u64
}

/// Number of pieces produced by splitting `content` on whitespace runs.
///
/// Leading and trailing whitespace each yield an empty piece, and an empty
/// string yields a single empty piece.
pub fn word_count(content: &str) -> u64 {
    let mut pieces = 1;
    let mut in_run = false;
    for ch in content.chars() {
        if is_separator(ch) {
            if !in_run {
                pieces += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    pieces
}

// The host also splits on the byte order mark but not on NEL.
fn is_separator(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Number of maximal runs of `.`, `!` or `?`.
pub fn sentence_count(content: &str) -> u64 {
    let mut runs = 0;
    let mut in_run = false;
    for ch in content.chars() {
        if matches!(ch, '.' | '!' | '?') {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs
}

/// Reads every document of `source` in order and aggregates its counts.
pub async fn scan<S: DocumentSource>(source: &S, policy: ScanPolicy) -> ResultEngine<ScanReport> {
    let documents = source.documents().await?;
    let mut report = ScanReport::default();

    for document in &documents {
        match source.read(document).await {
            Ok(content) => report.stats.record(&content),
            Err(err) if policy == ScanPolicy::SkipUnreadable => {
                tracing::warn!("skipping unreadable document: {err}");
                report.skipped.push(document.path.clone());
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        "scanned {} documents ({} skipped)",
        report.stats.total_files,
        report.skipped.len()
    );
    Ok(report)
}
