//! Tests for the layered result filter

use packlens_application::{FilterThresholds, ResultFilter};

use crate::test_utils::hit;

fn similarities(filter: &ResultFilter, raw: &[f64]) -> Vec<f64> {
    let hits = raw
        .iter()
        .enumerate()
        .map(|(i, &s)| hit(&format!("item-{i}"), s))
        .collect();
    filter
        .apply(hits)
        .hits()
        .iter()
        .map(|h| h.similarity)
        .collect()
}

#[test]
fn test_relative_gap_and_floor_keep_top_two() {
    let filter = ResultFilter::default();
    assert_eq!(similarities(&filter, &[0.96, 0.93, 0.80]), vec![0.96, 0.93]);
}

#[test]
fn test_best_below_gate_is_empty_even_with_many_candidates() {
    let filter = ResultFilter::default();
    assert!(similarities(&filter, &[0.89, 0.88, 0.87, 0.86, 0.85]).is_empty());
}

#[test]
fn test_best_exactly_at_gate_passes() {
    let filter = ResultFilter::default();
    assert_eq!(similarities(&filter, &[0.90]), vec![0.90]);
}

#[test]
fn test_gate_absorbs_f32_rounding() {
    let filter = ResultFilter::default();
    // 0.90 stored as f32 and widened again
    let widened = f64::from(0.9f32);
    assert!(widened < 0.90);

    assert_eq!(similarities(&filter, &[widened]), vec![widened]);
    assert!(similarities(&filter, &[0.8999]).is_empty());
}

#[test]
fn test_everything_below_floor_is_empty() {
    let filter = ResultFilter::default();
    assert!(similarities(&filter, &[0.70, 0.60]).is_empty());
    assert!(similarities(&filter, &[]).is_empty());
}

#[test]
fn test_result_is_capped_and_ordered() {
    let filter = ResultFilter::default();
    let kept = similarities(&filter, &[0.91, 0.99, 0.95, 0.97, 0.93]);

    assert_eq!(kept, vec![0.99, 0.97, 0.95]);
}

#[test]
fn test_relative_gap_drops_distant_runner_up() {
    // Floor lowered so only the relative gap decides
    let filter = ResultFilter::new(FilterThresholds {
        similarity_floor: 0.5,
        ..FilterThresholds::default()
    });

    // 0.99 * 0.9 = 0.891
    assert_eq!(similarities(&filter, &[0.99, 0.892, 0.89]), vec![0.99, 0.892]);
}

#[test]
fn test_non_finite_similarity_never_passes() {
    let filter = ResultFilter::default();
    assert_eq!(similarities(&filter, &[f64::NAN, 0.95]), vec![0.95]);
}

#[test]
fn test_every_result_satisfies_thresholds() {
    let filter = ResultFilter::default();
    let t = filter.thresholds();
    let inputs: [&[f64]; 4] = [
        &[0.99, 0.98, 0.97, 0.96],
        &[0.92, 0.86, 0.84],
        &[0.95, 0.855, 0.851],
        &[0.90, 0.90, 0.90, 0.90],
    ];

    for raw in inputs {
        let kept = similarities(&filter, raw);
        assert!(kept.len() <= t.max_results);
        if let Some(&best) = kept.first() {
            assert!(best >= t.best_match_gate);
            for s in &kept {
                assert!(*s >= t.similarity_floor);
                assert!(*s >= best * t.relative_gap);
            }
        }
        assert!(kept.windows(2).all(|w| w[0] >= w[1]));
    }
}
