//! Data-sufficiency gate applied before a patient is scored.

use waitlist_core::PatientRecord;

/// Minimum combined accepted and cancelled offers required for scoring.
pub const SUFFICIENCY_THRESHOLD: u64 = 20;

/// Report whether `record` has enough offer history to be scored.
///
/// # Examples
/// ```
/// use waitlist_core::{PatientRecord, coord};
/// use waitlist_scorer::has_sufficient_history;
///
/// let origin = coord(0.0, 0.0);
/// let sparse = PatientRecord::new(1_u64, "Ada", origin).with_history(5, 3);
/// let seasoned = PatientRecord::new(2_u64, "Bo", origin).with_history(10, 10);
/// assert!(!has_sufficient_history(&sparse));
/// assert!(has_sufficient_history(&seasoned));
/// ```
#[must_use]
pub fn has_sufficient_history(record: &PatientRecord) -> bool {
    record.interaction_count() >= SUFFICIENCY_THRESHOLD
}
