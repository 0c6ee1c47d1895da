//! Batch scoring over validated configuration.

use log::{debug, trace};
use waitlist_core::{
    BaselineBuckets, FacilityLocation, Feature, PatientRecord, PatientSource, PerFeature,
    PolarityOverrides, ResultSet, Score, ScoredResult, WeightTable, great_circle_distance,
    validate_coordinate,
};

use crate::{
    FeatureContribution, ScoreBreakdown, ScoreError, SourceScoreError, has_sufficient_history,
};

/// Outcome of scoring a single patient.
#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    /// The patient has too little history to be scored.
    InsufficientData,
    /// The patient was scored; the breakdown carries every contribution.
    Scored(ScoreBreakdown),
}

impl Assessment {
    /// Collapse the assessment into the score written to the result set.
    #[must_use]
    pub const fn score(&self) -> Score {
        match self {
            Self::InsufficientData => Score::InsufficientData,
            Self::Scored(breakdown) => Score::Value(breakdown.total()),
        }
    }
}

/// Scores patients against a facility using baseline buckets and weights.
///
/// The engine holds only immutable configuration, so one instance can
/// score any number of batches, concurrently if shared by reference.
///
/// # Examples
/// ```
/// use waitlist_core::{PatientRecord, coord};
/// use waitlist_scorer::ScoringEngine;
///
/// # fn main() -> Result<(), waitlist_scorer::ScoreError> {
/// let facility = coord(40.71, -74.0);
/// let patients = [
///     PatientRecord::new(1_u64, "Ada", facility).with_history(5, 3),
///     PatientRecord::new(2_u64, "Bo", facility)
///         .with_age(70)
///         .with_history(90, 95)
///         .with_reply_time(10.0),
/// ];
///
/// let results = ScoringEngine::default().score(facility, &patients)?;
/// assert_eq!(results.insufficient_data().len(), 1);
/// let total = results.sufficient_data()[0].score.value().unwrap_or_default();
/// assert!((total - 9.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    buckets: BaselineBuckets,
    weights: WeightTable,
    polarity: PolarityOverrides,
}

impl ScoringEngine {
    /// Create an engine from validated tables with standard polarity.
    #[must_use]
    pub fn new(buckets: BaselineBuckets, weights: WeightTable) -> Self {
        Self {
            buckets,
            weights,
            polarity: PolarityOverrides::default(),
        }
    }

    /// Build an engine from raw `(feature, thresholds)` and
    /// `(feature, weight)` pairs.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidConfiguration`] when a feature lacks a
    /// table or weight, a table is empty, or a value is not finite.
    pub fn from_tables<B, W>(buckets: B, weights: W) -> Result<Self, ScoreError>
    where
        B: IntoIterator<Item = (Feature, Vec<f64>)>,
        W: IntoIterator<Item = (Feature, f64)>,
    {
        Ok(Self::new(
            BaselineBuckets::new(buckets)?,
            WeightTable::new(weights)?,
        ))
    }

    /// Replace the polarity overrides while returning `self`.
    #[must_use]
    pub fn with_polarity(mut self, polarity: PolarityOverrides) -> Self {
        self.polarity = polarity;
        self
    }

    /// Borrow the baseline bucket tables.
    #[must_use]
    pub const fn buckets(&self) -> &BaselineBuckets {
        &self.buckets
    }

    /// Borrow the weight table.
    #[must_use]
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Borrow the polarity overrides.
    #[must_use]
    pub const fn polarity(&self) -> &PolarityOverrides {
        &self.polarity
    }

    /// Score a batch, partitioning results by data sufficiency.
    ///
    /// Every record is validated before any is scored, so a malformed record
    /// anywhere in the batch yields an error and no partial results.
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidFacility`] for an out-of-range facility
    /// and [`ScoreError::MalformedRecord`] for the first invalid record.
    pub fn score(
        &self,
        facility: FacilityLocation,
        patients: &[PatientRecord],
    ) -> Result<ResultSet, ScoreError> {
        validate_coordinate(facility).map_err(ScoreError::InvalidFacility)?;
        for (index, record) in patients.iter().enumerate() {
            record
                .validate()
                .map_err(|source| ScoreError::MalformedRecord {
                    index,
                    id: record.id.clone(),
                    source,
                })?;
        }

        let mut results = ResultSet::with_capacity(patients.len());
        results.extend(patients.iter().map(|record| ScoredResult {
            id: record.id.clone(),
            name: record.name.clone(),
            score: self.assess(facility, record).score(),
        }));
        debug!(
            "scored {} of {} patients; {} need more data",
            results.sufficient_data().len(),
            patients.len(),
            results.insufficient_data().len()
        );
        Ok(results)
    }

    /// Load a batch from `source` and score it.
    ///
    /// The source is read in full before scoring starts.
    ///
    /// # Errors
    /// Returns [`SourceScoreError::Load`] when the source fails and
    /// [`SourceScoreError::Score`] for any [`ScoringEngine::score`] failure.
    pub fn score_source<S>(
        &self,
        facility: FacilityLocation,
        source: &S,
    ) -> Result<ResultSet, SourceScoreError<S::Error>>
    where
        S: PatientSource,
    {
        let patients = source.load().map_err(SourceScoreError::Load)?;
        Ok(self.score(facility, &patients)?)
    }

    /// Score one patient without validating the record.
    #[must_use]
    pub fn assess(&self, facility: FacilityLocation, record: &PatientRecord) -> Assessment {
        if !has_sufficient_history(record) {
            trace!(
                "patient {} has {} offers on record; need more data",
                record.id,
                record.interaction_count()
            );
            return Assessment::InsufficientData;
        }

        let contributions = PerFeature::from_fn(|feature| {
            let table = self.buckets.table(feature);
            let raw_value = raw_value(feature, record, facility);
            let rank = table.rank(raw_value);
            let effective_rank = self
                .polarity
                .polarity(feature)
                .apply(rank, table.max_rank());
            FeatureContribution::new(
                feature,
                raw_value,
                rank,
                effective_rank,
                self.weights.weight(feature),
            )
        });
        let breakdown = ScoreBreakdown::new(contributions);
        trace!("patient {} scored {}", record.id, breakdown.total());
        Assessment::Scored(breakdown)
    }
}

fn raw_value(feature: Feature, record: &PatientRecord, facility: FacilityLocation) -> f64 {
    match feature {
        Feature::Age => f64::from(record.age),
        Feature::DistanceToFacility => great_circle_distance(record.location, facility),
        Feature::AcceptedOffers => f64::from(record.accepted_offers),
        Feature::CanceledOffers => f64::from(record.canceled_offers),
        Feature::AverageReplyTime => record.average_reply_time,
    }
}

/// Score `patients` against `facility` with the given tables.
///
/// # Errors
/// Propagates [`ScoringEngine::score`] failures.
pub fn score_patients(
    facility: FacilityLocation,
    patients: &[PatientRecord],
    buckets: &BaselineBuckets,
    weights: &WeightTable,
) -> Result<ResultSet, ScoreError> {
    ScoringEngine::new(buckets.clone(), weights.clone()).score(facility, patients)
}

