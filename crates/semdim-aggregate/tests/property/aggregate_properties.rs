//! Property tests for cross-run summaries and neighbor tallies.

use proptest::prelude::*;

use semdim_aggregate::{AggregateSummary, MetricKey, MetricKind, NeighborEnd, NeighborTally};
use semdim_core::models::RunId;
use semdim_space::Neighbor;

const WINDOWS: [u16; 3] = [1980, 1983, 1986];

fn summary(values: &[(usize, f64)]) -> AggregateSummary {
    let mut s = AggregateSummary::new(MetricKey::new(MetricKind::HoldoutAccuracyPercent, "danger"));
    for (i, &(w, v)) in values.iter().enumerate() {
        s.push(RunId::new(WINDOWS[w % WINDOWS.len()], i as u32), v);
    }
    s
}

proptest! {
    #[test]
    fn prop_mean_lies_within_range(values in prop::collection::vec((0usize..3, -1.0f64..1.0), 1..40)) {
        let s = summary(&values);
        let (mean, min, max) = (s.mean().unwrap(), s.min().unwrap(), s.max().unwrap());
        prop_assert!(min - 1e-12 <= mean && mean <= max + 1e-12);
        let std = s.std_dev().unwrap();
        prop_assert!(std >= 0.0);
        prop_assert!(std <= (max - min) + 1e-12);
    }

    #[test]
    fn prop_constant_values_have_zero_spread(v in -1.0f64..1.0, n in 1usize..30) {
        let values: Vec<(usize, f64)> = (0..n).map(|i| (i, v)).collect();
        let s = summary(&values);
        prop_assert!(s.std_dev().unwrap().abs() < 1e-12);
    }

    #[test]
    fn prop_shift_moves_mean_not_spread(
        values in prop::collection::vec((0usize..3, -1.0f64..1.0), 1..30),
        shift in -5.0f64..5.0,
    ) {
        let shifted: Vec<(usize, f64)> = values.iter().map(|&(w, v)| (w, v + shift)).collect();
        let a = summary(&values);
        let b = summary(&shifted);
        prop_assert!((b.mean().unwrap() - a.mean().unwrap() - shift).abs() < 1e-9);
        prop_assert!((b.std_dev().unwrap() - a.std_dev().unwrap()).abs() < 1e-9);
    }

    #[test]
    fn prop_windows_partition_the_combined_values(
        values in prop::collection::vec((0usize..3, -1.0f64..1.0), 0..40),
    ) {
        let s = summary(&values);
        let per_window: usize = WINDOWS.iter().map(|&w| s.for_window(w).count()).sum();
        prop_assert_eq!(per_window, s.count());
    }

    #[test]
    fn prop_tally_occurrences_match_inputs(
        lists in prop::collection::vec(prop::collection::vec(0usize..6, 0..5), 0..10),
    ) {
        let mut tally = NeighborTally::new("danger", NeighborEnd::Most);
        for list in &lists {
            let neighbors: Vec<Neighbor> = list
                .iter()
                .map(|&i| Neighbor { term: format!("t{i}"), similarity: i as f64 / 10.0 })
                .collect();
            tally.add_run(&neighbors);
        }
        let ranked = tally.ranked();
        let total: usize = ranked.iter().map(|e| e.occurrences).sum();
        prop_assert_eq!(total, lists.iter().map(Vec::len).sum::<usize>());
        prop_assert_eq!(tally.runs, lists.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].occurrences >= pair[1].occurrences);
        }
        // Every occurrence of a term has the same similarity here.
        for e in &ranked {
            let i: f64 = e.term[1..].parse().unwrap();
            prop_assert!((e.mean_similarity - i / 10.0).abs() < 1e-12);
        }
    }
}
