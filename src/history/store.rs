//! File-backed persistence for calculation history.
//!
//! The store is append-only: each completed calculation becomes one durable
//! record at the end of the backing file, and `load` replays the file in
//! original append order. Two layouts are supported — newline-delimited JSON
//! for readability and length-prefixed bincode for compactness.

use super::error::StoreError;
use super::{Calculation, CalculationLog};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// On-disk layout of history records.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StoreFormat {
    /// One compact JSON object per line
    #[default]
    Json,
    /// u32 little-endian length prefix followed by a bincode record
    Binary,
}

/// Append-only store of calculation records backed by a single file.
///
/// Appends are durable before `append` returns success, and concurrent
/// appends are serialized through an internal lock so records are never
/// interleaved. Loading a path with no backing file yet returns an empty
/// log.
///
/// # Example
///
/// ```rust,no_run
/// use reckon::core::{Expression, Token};
/// use reckon::history::{Calculation, HistoryStore};
///
/// let store = HistoryStore::new("history.log");
///
/// let expression = Expression::new().push(Token::Number(5.0));
/// store.append(&Calculation::new(expression, 5.0))?;
///
/// let log = store.load()?;
/// assert_eq!(log.latest().unwrap().result, 5.0);
/// # Ok::<(), reckon::history::StoreError>(())
/// ```
pub struct HistoryStore {
    path: PathBuf,
    format: StoreFormat,
    write_lock: Mutex<()>,
}

impl HistoryStore {
    /// Create a store over `path` using the default JSON-lines layout.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_format(path, StoreFormat::default())
    }

    /// Create a store over `path` with an explicit layout.
    ///
    /// The layout must match whatever the file was written with; records in
    /// one layout do not decode under the other.
    pub fn with_format(path: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            path: path.into(),
            format,
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably append one calculation record.
    ///
    /// The record is encoded, written, and synced to disk before this
    /// returns `Ok`. Writers are serialized: a concurrent `append` waits
    /// rather than interleaving bytes.
    pub fn append(&self, calculation: &Calculation) -> Result<(), StoreError> {
        let encoded = self.encode(calculation)?;

        let guard = self.write_lock.lock();
        // A poisoned lock means another writer panicked mid-append; the file
        // itself is still consistent because each record is one write.
        let _guard = match guard {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&encoded)?;
        file.sync_all()?;

        debug!(
            path = %self.path.display(),
            result = calculation.result,
            "appended calculation record"
        );
        Ok(())
    }

    /// Load every record in original append order.
    ///
    /// A path with no backing file yet (fresh install) loads as an empty
    /// log. Undecodable data is a [`StoreError::Corrupt`].
    pub fn load(&self) -> Result<CalculationLog, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no history file yet, starting empty");
            return Ok(CalculationLog::new());
        }

        let bytes = fs::read(&self.path)?;
        let log = match self.format {
            StoreFormat::Json => decode_json_lines(&bytes)?,
            StoreFormat::Binary => decode_length_prefixed(&bytes)?,
        };

        debug!(
            path = %self.path.display(),
            records = log.len(),
            "loaded calculation history"
        );
        Ok(log)
    }

    fn encode(&self, calculation: &Calculation) -> Result<Vec<u8>, StoreError> {
        match self.format {
            StoreFormat::Json => {
                let mut line = serde_json::to_vec(calculation)
                    .map_err(|e| StoreError::Encode(e.to_string()))?;
                line.push(b'\n');
                Ok(line)
            }
            StoreFormat::Binary => {
                let payload =
                    bincode::serialize(calculation).map_err(|e| StoreError::Encode(e.to_string()))?;
                let mut record = Vec::with_capacity(4 + payload.len());
                record.extend_from_slice(&(payload.len() as u32).to_le_bytes());
                record.extend_from_slice(&payload);
                Ok(record)
            }
        }
    }

    // Test-only access to the raw file for corruption scenarios.
    #[cfg(test)]
    fn truncate_backing_file(&self, len: u64) -> std::io::Result<()> {
        let file = OpenOptions::new().write(true).open(&self.path)?;
        file.set_len(len)
    }
}

fn decode_json_lines(bytes: &[u8]) -> Result<CalculationLog, StoreError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| StoreError::Corrupt(format!("history file is not UTF-8: {e}")))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line)
                .map_err(|e| StoreError::Corrupt(format!("line {}: {e}", number + 1)))
        })
        .collect()
}

fn decode_length_prefixed(mut bytes: &[u8]) -> Result<CalculationLog, StoreError> {
    let mut log = CalculationLog::new();

    while !bytes.is_empty() {
        if bytes.len() < 4 {
            return Err(StoreError::Corrupt("truncated length prefix".to_string()));
        }
        let (prefix, rest) = bytes.split_at(4);
        let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
        if rest.len() < len {
            return Err(StoreError::Corrupt(format!(
                "record claims {len} bytes, only {} remain",
                rest.len()
            )));
        }
        let (payload, remaining) = rest.split_at(len);
        let calculation: Calculation =
            bincode::deserialize(payload).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        log = log.record(calculation);
        bytes = remaining;
    }

    Ok(log)
}
