//! Loading settings and elicitation data from disk.
//!
//! Both file kinds are JSON. A missing comparison config is not an error:
//! callers pass `None` and get [`CompareConfig::default`].

use std::path::Path;

use kovol_core::{records_from_rows, CompareConfig, ElicitationRow, Ingested};

use crate::error::{Error, Result};
use crate::tracing::prefix;

/// Load comparison settings, falling back to defaults when no path is given
pub fn load_compare_config(path: Option<&Path>) -> Result<CompareConfig> {
    let Some(path) = path else {
        return Ok(CompareConfig::default());
    };

    let text = std::fs::read_to_string(path)?;
    let config: CompareConfig = serde_json::from_str(&text)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    ::tracing::debug!(
        "{} loaded compare config from {} (marker {:?}, {} slots)",
        prefix::LOAD,
        path.display(),
        config.uncertain_marker,
        config.marker_slots.len()
    );
    Ok(config)
}

/// Load elicitation rows from a JSON array
pub fn load_rows(path: &Path) -> Result<Vec<ElicitationRow>> {
    let text = std::fs::read_to_string(path)?;
    let rows: Vec<ElicitationRow> = serde_json::from_str(&text)?;
    ::tracing::debug!("{} read {} rows from {}", prefix::LOAD, rows.len(), path.display());
    Ok(rows)
}

/// Load elicitation rows and group them into attested records.
/// Rows that cannot be routed come back in [`Ingested::skipped`].
pub fn load_records(path: &Path) -> Result<Ingested> {
    let rows = load_rows(path)?;
    Ok(records_from_rows(&rows))
}
