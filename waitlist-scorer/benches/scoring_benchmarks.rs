//! Criterion benchmarks for batch scoring.
//!
//! Measures scoring time across batch sizes to track regressions in the
//! per-patient classification and distance maths.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package waitlist-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use waitlist_core::test_support::{newcomer_patient, seasoned_patient};
use waitlist_core::{FacilityLocation, PatientRecord, coord};
use waitlist_scorer::ScoringEngine;

/// Batch sizes to benchmark.
const BATCH_SIZES: &[u64] = &[100, 1_000, 10_000];

/// Facility used for every benchmark batch.
const FACILITY: FacilityLocation = coord(40.7128, -74.006);

/// Build a deterministic batch where one patient in four lacks history.
///
/// Patients are spread along a meridian so their distances cover every
/// distance bucket.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::integer_division_remainder_used,
    reason = "benchmark fixtures offset latitudes by patient index"
)]
fn build_batch(size: u64) -> Vec<PatientRecord> {
    (0..size)
        .map(|id| {
            let home = coord(40.7128 + (id % 200) as f64 * 0.001, -74.006);
            if id % 4 == 0 {
                newcomer_patient(id, home)
            } else {
                seasoned_patient(id, home)
            }
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let mut group = c.benchmark_group("score_batch");

    for &size in BATCH_SIZES {
        let patients = build_batch(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &patients, |b, batch| {
            b.iter(|| engine.score(FACILITY, batch));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
