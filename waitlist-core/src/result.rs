//! Scoring output: per-patient results partitioned by data sufficiency.

use crate::PatientId;

/// Marker written in place of a score for patients with too little history.
pub const INSUFFICIENT_DATA_MARKER: &str = "need more data";

/// A patient's likelihood score, or the insufficient-data marker.
///
/// Serialises as a JSON number, or as the string
/// [`INSUFFICIENT_DATA_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Weighted total across every feature.
    Value(f64),
    /// The patient failed the sufficiency gate and was not scored.
    InsufficientData,
}

impl Score {
    /// Return the numeric score, if one was computed.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(total) => Some(total),
            Self::InsufficientData => None,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(total) => write!(f, "{total}"),
            Self::InsufficientData => f.write_str(INSUFFICIENT_DATA_MARKER),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Score {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(total) => serializer.serialize_f64(*total),
            Self::InsufficientData => serializer.serialize_str(INSUFFICIENT_DATA_MARKER),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Score {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Value(f64),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Value(total) => Ok(Self::Value(total)),
            Raw::Marker(marker) if marker == INSUFFICIENT_DATA_MARKER => Ok(Self::InsufficientData),
            Raw::Marker(other) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{INSUFFICIENT_DATA_MARKER}\", found \"{other}\""
            ))),
        }
    }
}

/// Score assigned to one patient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredResult {
    /// Identifier copied from the input record.
    pub id: PatientId,
    /// Name copied from the input record.
    pub name: String,
    /// Computed score or insufficient-data marker.
    pub score: Score,
}

/// Results for a batch, split into scored and insufficient-data patients.
///
/// Within each partition results keep the relative order of the input.
///
/// # Examples
/// ```
/// use waitlist_core::{ResultSet, Score, ScoredResult};
///
/// let mut results = ResultSet::default();
/// results.push(ScoredResult { id: 1_u64.into(), name: "Ada".into(), score: Score::Value(6.2) });
/// results.push(ScoredResult { id: 2_u64.into(), name: "Bo".into(), score: Score::InsufficientData });
///
/// assert_eq!(results.sufficient_data().len(), 1);
/// assert_eq!(results.insufficient_data().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ResultSet {
    sufficient_data: Vec<ScoredResult>,
    insufficient_data: Vec<ScoredResult>,
}

impl ResultSet {
    /// Create an empty result set with room for `capacity` scored patients.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sufficient_data: Vec::with_capacity(capacity),
            insufficient_data: Vec::new(),
        }
    }

    /// Append a result to the partition matching its score.
    pub fn push(&mut self, result: ScoredResult) {
        match result.score {
            Score::Value(_) => self.sufficient_data.push(result),
            Score::InsufficientData => self.insufficient_data.push(result),
        }
    }

    /// Patients that passed the sufficiency gate, in input order.
    #[must_use]
    pub fn sufficient_data(&self) -> &[ScoredResult] {
        &self.sufficient_data
    }

    /// Patients with too little history to score, in input order.
    #[must_use]
    pub fn insufficient_data(&self) -> &[ScoredResult] {
        &self.insufficient_data
    }

    /// Total number of patients across both partitions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sufficient_data.len() + self.insufficient_data.len()
    }

    /// Report whether both partitions are empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sufficient_data.is_empty() && self.insufficient_data.is_empty()
    }

    /// Consume the set and return `(sufficient, insufficient)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ScoredResult>, Vec<ScoredResult>) {
        (self.sufficient_data, self.insufficient_data)
    }
}

impl Extend<ScoredResult> for ResultSet {
    fn extend<I: IntoIterator<Item = ScoredResult>>(&mut self, iter: I) {
        for result in iter {
            self.push(result);
        }
    }
}

impl FromIterator<ScoredResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ScoredResult>>(iter: I) -> Self {
        let mut results = Self::default();
        results.extend(iter);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn result(id: u64, score: Score) -> ScoredResult {
        ScoredResult {
            id: id.into(),
            name: format!("patient-{id}"),
            score,
        }
    }

    #[rstest]
    fn partitions_preserve_input_order() {
        let results: ResultSet = [
            result(1, Score::Value(3.0)),
            result(2, Score::InsufficientData),
            result(3, Score::Value(5.0)),
            result(4, Score::InsufficientData),
        ]
        .into_iter()
        .collect();

        let scored: Vec<_> = results.sufficient_data().iter().map(|r| r.id.clone()).collect();
        let unscored: Vec<_> = results
            .insufficient_data()
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(scored, vec![PatientId::Number(1), PatientId::Number(3)]);
        assert_eq!(unscored, vec![PatientId::Number(2), PatientId::Number(4)]);
        assert_eq!(results.len(), 4);
    }

    #[rstest]
    fn empty_set_reports_empty() {
        assert!(ResultSet::with_capacity(8).is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_marker_and_camel_case_keys() {
        let results: ResultSet = [result(1, Score::Value(8.5)), result(2, Score::InsufficientData)]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["sufficientData"][0]["score"], serde_json::json!(8.5));
        assert_eq!(
            json["insufficientData"][0]["score"],
            serde_json::json!(INSUFFICIENT_DATA_MARKER)
        );
        let decoded: ResultSet = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, results);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn rejects_unknown_score_marker() {
        let err = serde_json::from_str::<Score>("\"pending\"").unwrap_err();
        assert!(err.to_string().contains("need more data"));
    }
}
