//! Age of a vault, measured from the creation of its configuration file.

use chrono::{DateTime, Utc};

use crate::{DocumentSource, FileKind, ResultEngine};

/// File inside the configuration folder whose creation marks the birth of the
/// vault.
pub const SENTINEL_FILE: &str = "app.json";

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Fractional days elapsed between the creation of the sentinel file and
/// `now`.
///
/// Never fails: a missing sentinel, a folder in its place, a missing creation
/// time or a lookup error all yield `0`. A creation time after `now` also
/// yields `0`.
pub async fn vault_age_days<S: DocumentSource>(source: &S, now: DateTime<Utc>) -> f64 {
    match created_at(source).await {
        Ok(Some(created)) => {
            let elapsed = now.signed_duration_since(created).num_milliseconds() as f64;
            (elapsed / MILLIS_PER_DAY).max(0.0)
        }
        Ok(None) => 0.0,
        Err(err) => {
            tracing::error!("error fetching vault creation date: {err}");
            0.0
        }
    }
}

async fn created_at<S: DocumentSource>(source: &S) -> ResultEngine<Option<DateTime<Utc>>> {
    let path = format!("{}/{SENTINEL_FILE}", source.config_dir());

    let Some(stat) = source.lookup(&path).await? else {
        tracing::warn!("vault creation date file not found, using 0");
        return Ok(None);
    };
    if stat.kind != FileKind::File {
        tracing::warn!("vault creation date file {path} is not a file, using 0");
        return Ok(None);
    }
    if stat.created.is_none() {
        tracing::warn!("could not retrieve vault creation date, using 0");
    }
    Ok(stat.created)
}
