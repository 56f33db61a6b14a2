use std::cell::Cell;
use std::rc::Rc;

use acqmax::{
    AcquisitionFunction, AcquisitionMaximizer, BudgetContext, Challengers, EvaluationHistory,
    LocalSearch, Neighborhood, Origin, SearchSpace, SharedRng,
};

/// A bounded one-dimensional integer space. Neighbors are the adjacent grid
/// points; the neighborhood seed decides which side is enumerated first.
#[derive(Debug)]
struct LineSpace {
    lo: i64,
    hi: i64,
    draw_counter: Cell<u64>,
}

impl LineSpace {
    fn new(lo: i64, hi: i64) -> Self {
        Self {
            lo,
            hi,
            draw_counter: Cell::new(0),
        }
    }
}

impl SearchSpace for LineSpace {
    type Config = i64;

    fn sample(&self, size: usize) -> acqmax::Result<Vec<i64>> {
        let span = (self.hi - self.lo + 1) as u64;
        Ok((0..size)
            .map(|_| {
                let counter = self.draw_counter.get();
                self.draw_counter.set(counter + 1);
                self.lo + ((counter * 17) % span) as i64
            })
            .collect())
    }

    fn neighborhood<'a>(&'a self, base: &i64, seed: u64) -> Neighborhood<'a, i64> {
        let base = *base;
        let mut neighbors = Vec::new();
        if base > self.lo {
            neighbors.push(base - 1);
        }
        if base < self.hi {
            neighbors.push(base + 1);
        }
        if seed % 2 == 1 {
            neighbors.reverse();
        }
        Box::new(neighbors.into_iter())
    }
}

/// Quadratic peak: the unique maximum sits at `peak` with value 0.
struct PeakAcquisition {
    peak: i64,
}

impl AcquisitionFunction<i64> for PeakAcquisition {
    fn evaluate(&self, configs: &[i64]) -> acqmax::Result<Vec<f64>> {
        Ok(configs
            .iter()
            .map(|&c| -(((c - self.peak) * (c - self.peak)) as f64))
            .collect())
    }
}

struct RecordedHistory(Vec<i64>);

impl EvaluationHistory<i64> for RecordedHistory {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn evaluated_configurations(&self) -> Vec<i64> {
        self.0.clone()
    }
}

#[test]
fn test_climbs_reach_the_peak() {
    let space = Rc::new(LineSpace::new(0, 20));
    let acquisition = Rc::new(PeakAcquisition { peak: 7 });
    let search = LocalSearch::new(acquisition, space, Some(SharedRng::from_seed(5)));

    let ranked = search
        .rank(
            &RecordedHistory(vec![3, 12, 13]),
            &BudgetContext::default(),
            2,
        )
        .unwrap();

    // Both seeds hill-climb to the unique maximum.
    assert_eq!(ranked.len(), 2);
    for result in &ranked {
        assert_eq!(result.config, 7);
        assert_eq!(result.acq_value, 0.0);
        assert_eq!(result.origin, Origin::LocalSearch);
    }
}

#[test]
fn test_maximize_orders_by_promise() {
    let space = Rc::new(LineSpace::new(0, 20));
    let acquisition = Rc::new(PeakAcquisition { peak: 7 });
    // A step cap short enough that distant seeds cannot reach the peak.
    let search = LocalSearch::with_limits(
        acquisition,
        space,
        Some(SharedRng::from_seed(5)),
        Some(2),
        10,
    )
    .unwrap();

    let challengers = search
        .maximize(
            &RecordedHistory(vec![6, 18]),
            &BudgetContext::default(),
            2,
        )
        .unwrap();

    let produced: Vec<_> = match challengers {
        Challengers::Ranked(candidates) => candidates.collect(),
        Challengers::Interleaved(_) => panic!("expected the ranked variant"),
    };

    // The climb that started next to the peak ends on it; the one capped far
    // away ranks behind it.
    assert_eq!(produced.len(), 2);
    assert_eq!(produced[0].config, 7);
    assert_eq!(produced[1].config, 16);
}

#[test]
fn test_empty_history_draws_seeds_from_space() {
    let space = Rc::new(LineSpace::new(0, 20));
    let acquisition = Rc::new(PeakAcquisition { peak: 7 });
    let search = LocalSearch::new(acquisition, space, Some(SharedRng::from_seed(5)));

    let ranked = search
        .rank(&RecordedHistory(Vec::new()), &BudgetContext::default(), 4)
        .unwrap();

    // Seeds came from sampling, and every climb still ends on the peak
    // because the landscape is unimodal.
    assert_eq!(ranked.len(), 4);
    assert!(ranked.iter().all(|r| r.config == 7));
}

#[test]
fn test_dominant_history_point_is_a_seed() {
    let space = Rc::new(LineSpace::new(0, 200));
    let acquisition = Rc::new(PeakAcquisition { peak: 40 });
    // No neighbors can be scanned past the cap, so the returned incumbents
    // stay close to their seeds and reveal which seeds were chosen.
    let search = LocalSearch::with_limits(
        acquisition,
        space,
        Some(SharedRng::from_seed(5)),
        Some(1),
        10,
    )
    .unwrap();

    let ranked = search
        .rank(
            &RecordedHistory(vec![180, 41, 120, 150]),
            &BudgetContext::default(),
            1,
        )
        .unwrap();

    // 41 strictly dominates the rest of the history, so the single climb
    // starts there and one capped step lands on the peak itself.
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].config, 40);
}
