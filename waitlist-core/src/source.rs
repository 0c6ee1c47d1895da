//! Seam for the collaborator that loads a batch of patient records.

use crate::PatientRecord;

/// Resolve a batch of patient records from some backing store.
///
/// Loading completes before scoring begins; the scoring engine only ever
/// sees the fully resolved batch.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use waitlist_core::{PatientRecord, PatientSource, coord};
///
/// struct SinglePatient;
///
/// impl PatientSource for SinglePatient {
///     type Error = Infallible;
///
///     fn load(&self) -> Result<Vec<PatientRecord>, Self::Error> {
///         Ok(vec![PatientRecord::new(1_u64, "Ada", coord(0.0, 0.0))])
///     }
/// }
///
/// let batch = SinglePatient.load()?;
/// assert_eq!(batch.len(), 1);
/// # Ok::<(), Infallible>(())
/// ```
pub trait PatientSource {
    /// Failure raised while resolving the batch.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every patient record, preserving source order.
    ///
    /// # Errors
    /// Implementations return [`Self::Error`] when the batch cannot be read
    /// or decoded in full.
    fn load(&self) -> Result<Vec<PatientRecord>, Self::Error>;
}
