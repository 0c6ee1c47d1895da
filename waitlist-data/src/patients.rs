//! JSON patient batches.
//!
//! A batch is a top-level array of patient objects:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Ada",
//!     "age": 64,
//!     "location": {"latitude": 40.71, "longitude": -74.0},
//!     "acceptedOffers": 18,
//!     "canceledOffers": 4,
//!     "averageReplyTime": 420
//!   }
//! ]
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use waitlist_core::{PatientRecord, PatientSource};

use crate::{DecodeError, LoadError};

/// Decode and validate a JSON patient batch.
///
/// Each element is decoded on its own so errors name the offending record.
///
/// # Errors
/// Returns [`DecodeError`] for invalid JSON, a non-array document, or the
/// first malformed or out-of-range record.
///
/// # Examples
/// ```
/// use waitlist_data::parse_patients;
///
/// let json = br#"[{"id": "p-1", "name": "Ada", "age": 64,
///     "location": {"latitude": 40.71, "longitude": -74.0},
///     "acceptedOffers": 18, "canceledOffers": 4, "averageReplyTime": 420}]"#;
/// let patients = parse_patients(json).expect("valid batch");
/// assert_eq!(patients[0].interaction_count(), 22);
/// ```
pub fn parse_patients(bytes: &[u8]) -> Result<Vec<PatientRecord>, DecodeError> {
    let document: serde_json::Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;
    let serde_json::Value::Array(entries) = document else {
        return Err(DecodeError::NotAnArray);
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_record(index, entry))
        .collect()
}

fn decode_record(index: usize, entry: serde_json::Value) -> Result<PatientRecord, DecodeError> {
    let record: PatientRecord = serde_json::from_value(entry)
        .map_err(|source| DecodeError::MalformedRecord { index, source })?;
    record
        .validate()
        .map_err(|source| DecodeError::InvalidRecord {
            index,
            id: record.id.clone(),
            source,
        })?;
    Ok(record)
}

/// Load a JSON patient batch from `path`.
///
/// # Errors
/// Returns [`LoadError::Read`] when the file cannot be read and
/// [`LoadError::Decode`] when its contents are not a valid batch.
pub fn load_patients(path: &Utf8Path) -> Result<Vec<PatientRecord>, LoadError> {
    let bytes = waitlist_fs::read_utf8_file(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_file(path, &bytes)
}

/// Load a JSON patient batch from `path` without blocking the runtime.
///
/// The whole file is read before decoding starts; scoring is left to the
/// caller once the batch is in memory.
///
/// # Errors
/// As for [`load_patients`].
pub async fn load_patients_async(path: &Utf8Path) -> Result<Vec<PatientRecord>, LoadError> {
    let bytes = tokio::fs::read(path.as_std_path())
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    decode_file(path, &bytes)
}

fn decode_file(path: &Utf8Path, bytes: &[u8]) -> Result<Vec<PatientRecord>, LoadError> {
    let patients = parse_patients(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} patient records from {path}", patients.len());
    Ok(patients)
}

/// [`PatientSource`] backed by a JSON file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPatientFile {
    path: Utf8PathBuf,
}

impl JsonPatientFile {
    /// Create a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Borrow the file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PatientSource for JsonPatientFile {
    type Error = LoadError;

    fn load(&self) -> Result<Vec<PatientRecord>, Self::Error> {
        load_patients(&self.path)
    }
}
