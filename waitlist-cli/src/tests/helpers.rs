//! Test helpers for writing patient batches and scoring configuration.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Facility latitude shared by CLI fixtures.
pub(super) const FACILITY_LATITUDE: f64 = 40.7128;
/// Facility longitude shared by CLI fixtures.
pub(super) const FACILITY_LONGITUDE: f64 = -74.006;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A scratch directory holding a patient batch.
pub(super) struct ScoringWorkspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) patients: Utf8PathBuf,
}

impl ScoringWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let patients = root.join("patients.json");
        Self {
            _dir: dir,
            root,
            patients,
        }
    }

    /// Write a batch with one veteran at the facility and one newcomer.
    pub(super) fn write_default_batch(&self) {
        let batch = json!([
            patient(1, 70, 90, 95),
            patient(2, 30, 5, 3),
        ]);
        write_utf8(&self.patients, batch.to_string().as_bytes());
    }

    pub(super) fn write_config(&self, name: &str, config: &Value) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, config.to_string().as_bytes());
        path
    }
}

fn patient(id: u64, age: u32, accepted: u32, canceled: u32) -> Value {
    json!({
        "id": id,
        "name": format!("patient-{id}"),
        "age": age,
        "location": {"latitude": FACILITY_LATITUDE, "longitude": FACILITY_LONGITUDE},
        "acceptedOffers": accepted,
        "canceledOffers": canceled,
        "averageReplyTime": 10
    })
}
