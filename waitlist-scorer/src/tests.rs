//! Unit coverage for the scoring engine.
#![forbid(unsafe_code)]

use rstest::{fixture, rstest};
use waitlist_core::test_support::{MemorySource, newcomer_patient, seasoned_patient};
use waitlist_core::{
    BaselineBuckets, ConfigurationError, CoordinateError, FacilityLocation, Feature, PatientId,
    PatientRecord, PatientRecordError, PatientSource, PolarityOverrides, Score, WeightTable, coord,
};

use crate::{
    Assessment, ScoreBreakdown, ScoreError, ScoringEngine, SourceScoreError, score_patients,
};

#[derive(Debug, thiserror::Error)]
#[error("patient feed unavailable")]
struct FeedUnavailable;

struct UnavailableSource;

impl PatientSource for UnavailableSource {
    type Error = FeedUnavailable;

    fn load(&self) -> Result<Vec<PatientRecord>, Self::Error> {
        Err(FeedUnavailable)
    }
}

#[fixture]
fn facility() -> FacilityLocation {
    coord(40.7128, -74.006)
}

#[fixture]
fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

fn breakdown(assessment: Assessment) -> ScoreBreakdown {
    match assessment {
        Assessment::Scored(breakdown) => breakdown,
        Assessment::InsufficientData => panic!("expected a scored assessment"),
    }
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test compares totals within a tolerance"
)]
fn veteran_at_facility_scores_nine(engine: ScoringEngine, facility: FacilityLocation) {
    let patient = PatientRecord::new(1_u64, "Ada", facility)
        .with_age(70)
        .with_history(90, 95)
        .with_reply_time(10.0);

    let scored = breakdown(engine.assess(facility, &patient));

    let ranks: Vec<_> = scored.iter().map(|(_, part)| part.rank).collect();
    assert_eq!(ranks, vec![6, 1, 11, 11, 1]);
    assert_eq!(scored.contribution(Feature::DistanceToFacility).raw_value, 0.0);
    assert!((scored.total() - 9.0).abs() < 1e-9, "total {}", scored.total());
}

#[rstest]
#[case(5, 3)]
#[case(19, 0)]
#[case(0, 19)]
fn sparse_history_needs_more_data(
    engine: ScoringEngine,
    facility: FacilityLocation,
    #[case] accepted: u32,
    #[case] canceled: u32,
) {
    let patient = PatientRecord::new(2_u64, "Bo", facility)
        .with_age(99)
        .with_history(accepted, canceled)
        .with_reply_time(5_000.0);

    assert_eq!(engine.assess(facility, &patient), Assessment::InsufficientData);
}

#[rstest]
fn twenty_offers_pass_the_gate(engine: ScoringEngine, facility: FacilityLocation) {
    let patient = PatientRecord::new(3_u64, "Cy", facility).with_history(12, 8);
    assert!(matches!(
        engine.assess(facility, &patient),
        Assessment::Scored(_)
    ));
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test compares contributions within a tolerance"
)]
fn distant_patients_saturate_at_lowest_multiplier(engine: ScoringEngine, facility: FacilityLocation) {
    let far_away = seasoned_patient(4, coord(41.5, -74.006));

    let scored = breakdown(engine.assess(facility, &far_away));
    let distance = scored.contribution(Feature::DistanceToFacility);

    assert_eq!(distance.rank, 6);
    assert!((distance.contribution - 0.2).abs() < 1e-12);
}

#[rstest]
fn inverted_polarity_mirrors_rank(facility: FacilityLocation) {
    let engine = ScoringEngine::default()
        .with_polarity(PolarityOverrides::inverting([Feature::CanceledOffers]));
    let patient = PatientRecord::new(5_u64, "Di", facility).with_history(10, 95);

    let scored = breakdown(engine.assess(facility, &patient));
    let canceled = scored.contribution(Feature::CanceledOffers);

    assert_eq!(canceled.rank, 11);
    assert_eq!(canceled.effective_rank, 1);
    assert_eq!(scored.contribution(Feature::AcceptedOffers).effective_rank, 2);
}

#[rstest]
fn batch_preserves_order_within_partitions(engine: ScoringEngine, facility: FacilityLocation) {
    let patients = [
        seasoned_patient(1, facility),
        newcomer_patient(2, facility),
        seasoned_patient(3, facility),
        newcomer_patient(4, facility),
    ];

    let results = engine.score(facility, &patients).expect("batch should score");

    let scored: Vec<_> = results.sufficient_data().iter().map(|r| r.id.clone()).collect();
    let unscored: Vec<_> = results
        .insufficient_data()
        .iter()
        .map(|r| (r.id.clone(), r.score))
        .collect();
    assert_eq!(scored, vec![PatientId::Number(1), PatientId::Number(3)]);
    assert_eq!(
        unscored,
        vec![
            (PatientId::Number(2), Score::InsufficientData),
            (PatientId::Number(4), Score::InsufficientData),
        ]
    );
}

#[rstest]
fn malformed_record_fails_whole_batch(engine: ScoringEngine, facility: FacilityLocation) {
    let patients = [
        seasoned_patient(1, facility),
        seasoned_patient(2, facility).with_reply_time(f64::NAN),
        seasoned_patient(3, coord(95.0, 0.0)),
    ];

    let err = engine.score(facility, &patients).unwrap_err();

    assert!(matches!(
        err,
        ScoreError::MalformedRecord {
            index: 1,
            id: PatientId::Number(2),
            source: PatientRecordError::InvalidReplyTime(_),
        }
    ));
}

#[rstest]
fn invalid_facility_is_rejected(engine: ScoringEngine) {
    let err = engine.score(coord(0.0, 200.0), &[]).unwrap_err();
    assert_eq!(
        err,
        ScoreError::InvalidFacility(CoordinateError::InvalidLongitude(200.0))
    );
}

#[rstest]
fn empty_batch_yields_empty_results(engine: ScoringEngine, facility: FacilityLocation) {
    let results = engine.score(facility, &[]).expect("empty batch scores");
    assert!(results.is_empty());
}

#[rstest]
fn missing_weight_is_invalid_configuration() {
    let tables = Feature::ALL.map(|feature| (feature, vec![0.0, 1.0]));
    let weights = [(Feature::Age, 1.0)];

    let err = ScoringEngine::from_tables(tables, weights).unwrap_err();

    assert_eq!(
        err,
        ScoreError::InvalidConfiguration(ConfigurationError::MissingWeight {
            feature: Feature::DistanceToFacility
        })
    );
}

#[rstest]
fn free_function_matches_engine(engine: ScoringEngine, facility: FacilityLocation) {
    let patients = [seasoned_patient(1, facility), newcomer_patient(2, facility)];

    let direct = score_patients(
        facility,
        &patients,
        &BaselineBuckets::default(),
        &WeightTable::default(),
    )
    .expect("free function scores");
    let via_engine = engine.score(facility, &patients).expect("engine scores");

    assert_eq!(direct, via_engine);
}

#[rstest]
fn scores_batch_loaded_from_source(engine: ScoringEngine, facility: FacilityLocation) {
    let source = MemorySource::with_patients([
        newcomer_patient(1, facility),
        seasoned_patient(2, facility),
        newcomer_patient(3, facility),
    ]);

    let (scored, unscored) = engine
        .score_source(facility, &source)
        .expect("memory source scores")
        .into_parts();

    let scored_ids: Vec<_> = scored.into_iter().map(|result| result.id).collect();
    let unscored_ids: Vec<_> = unscored.into_iter().map(|result| result.id).collect();
    assert_eq!(scored_ids, vec![PatientId::Number(2)]);
    assert_eq!(
        unscored_ids,
        vec![PatientId::Number(1), PatientId::Number(3)]
    );
}

#[rstest]
fn source_failure_is_reported_as_load_error(engine: ScoringEngine, facility: FacilityLocation) {
    let err = engine
        .score_source(facility, &UnavailableSource)
        .expect_err("unavailable source should fail");

    assert!(matches!(err, SourceScoreError::Load(FeedUnavailable)));
}

#[rstest]
fn source_batch_is_validated_before_scoring(engine: ScoringEngine, facility: FacilityLocation) {
    let mut broken = seasoned_patient(2, facility);
    broken.average_reply_time = f64::NAN;
    let source = MemorySource::with_patients([seasoned_patient(1, facility), broken]);

    let err = engine
        .score_source(facility, &source)
        .expect_err("invalid record should fail");

    assert!(matches!(
        err,
        SourceScoreError::Score(ScoreError::MalformedRecord { index: 1, .. })
    ));
}
