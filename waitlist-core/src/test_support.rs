//! Test-only patient sources and record builders used by unit and behaviour
//! tests.

use std::convert::Infallible;

use geo::Coord;

use crate::{PatientRecord, PatientSource};

/// In-memory `PatientSource` returning a fixed batch.
#[derive(Default, Debug, Clone)]
pub struct MemorySource {
    patients: Vec<PatientRecord>,
}

impl MemorySource {
    /// Create a source from a collection of patient records.
    #[must_use]
    pub fn with_patients<I>(patients: I) -> Self
    where
        I: IntoIterator<Item = PatientRecord>,
    {
        Self {
            patients: patients.into_iter().collect(),
        }
    }
}

impl PatientSource for MemorySource {
    type Error = Infallible;

    fn load(&self) -> Result<Vec<PatientRecord>, Self::Error> {
        Ok(self.patients.clone())
    }
}

/// Build a patient with enough history to pass the sufficiency gate.
///
/// The patient is 40 years old, has 15 accepted and 5 cancelled offers, and
/// replies in ten minutes on average.
#[must_use]
pub fn seasoned_patient(id: u64, location: Coord<f64>) -> PatientRecord {
    PatientRecord::new(id, format!("patient-{id}"), location)
        .with_age(40)
        .with_history(15, 5)
        .with_reply_time(600.0)
}

/// Build a patient whose history falls short of the sufficiency gate.
#[must_use]
pub fn newcomer_patient(id: u64, location: Coord<f64>) -> PatientRecord {
    PatientRecord::new(id, format!("patient-{id}"), location)
        .with_age(30)
        .with_history(5, 3)
        .with_reply_time(120.0)
}
