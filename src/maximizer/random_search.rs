//! # Random Search
//!
//! Candidate solutions via uniform random sampling of the search space,
//! optionally ranked by acquisition value.

use super::AcquisitionMaximizer;
use crate::acquisition::AcquisitionFunction;
use crate::candidate::{Origin, ScoredCandidate};
use crate::error::Result;
use crate::history::{BudgetContext, EvaluationHistory};
use crate::rng::SharedRng;
use crate::space::SearchSpace;
use std::rc::Rc;

/// Maximizes the acquisition function by sampling uniformly at random.
///
/// Without ranking, the drawn configurations come back in draw order with a
/// placeholder score of 0; the score is not an estimate. With ranking
/// enabled, the draws are scored in one batch and sorted with the shared
/// tie-break sort.
pub struct RandomSearch<S, A> {
    acquisition: Rc<A>,
    space: Rc<S>,
    rng: SharedRng,
    ranked: bool,
}

impl<S, A> RandomSearch<S, A>
where
    S: SearchSpace,
    A: AcquisitionFunction<S::Config>,
{
    /// Creates an unranked random search.
    pub fn new(acquisition: Rc<A>, space: Rc<S>, rng: Option<SharedRng>) -> Self {
        Self {
            acquisition,
            space,
            rng: SharedRng::or_default_seed(rng),
            ranked: false,
        }
    }

    /// Ranks the drawn configurations by acquisition value before returning
    /// them.
    pub fn with_ranking(mut self) -> Self {
        self.ranked = true;
        self
    }
}

impl<S, A> AcquisitionMaximizer<S, A> for RandomSearch<S, A>
where
    S: SearchSpace,
    A: AcquisitionFunction<S::Config>,
{
    fn acquisition(&self) -> &A {
        &self.acquisition
    }

    fn rng(&self) -> &SharedRng {
        &self.rng
    }

    fn rank<H>(
        &self,
        _history: &H,
        _budget: &BudgetContext,
        num_points: usize,
    ) -> Result<Vec<ScoredCandidate<S::Config>>>
    where
        H: EvaluationHistory<S::Config>,
    {
        // A request for one point (or fewer) is still a single draw.
        let drawn = if num_points > 1 {
            self.space.sample(num_points)?
        } else {
            self.space.sample(1)?
        };

        if self.ranked {
            let ranked = self.sort_by_acquisition_value(drawn)?;
            Ok(ranked
                .into_iter()
                .map(|(acq_value, config)| {
                    ScoredCandidate::new(acq_value, config, Origin::SortedRandomSearch)
                })
                .collect())
        } else {
            Ok(drawn
                .into_iter()
                .map(|config| ScoredCandidate::new(0.0, config, Origin::RandomSearch))
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Neighborhood;
    use std::cell::Cell;

    #[derive(Debug)]
    struct SequenceSpace {
        next: Cell<i64>,
        sample_calls: Cell<usize>,
    }

    impl SequenceSpace {
        fn new() -> Self {
            Self {
                next: Cell::new(0),
                sample_calls: Cell::new(0),
            }
        }
    }

    impl SearchSpace for SequenceSpace {
        type Config = i64;

        fn sample(&self, size: usize) -> Result<Vec<i64>> {
            self.sample_calls.set(self.sample_calls.get() + 1);
            Ok((0..size)
                .map(|_| {
                    let value = self.next.get();
                    self.next.set(value + 1);
                    value
                })
                .collect())
        }

        fn neighborhood<'a>(&'a self, _base: &i64, _seed: u64) -> Neighborhood<'a, i64> {
            Box::new(std::iter::empty())
        }
    }

    #[derive(Debug)]
    struct IdentityAcquisition;

    impl AcquisitionFunction<i64> for IdentityAcquisition {
        fn evaluate(&self, configs: &[i64]) -> Result<Vec<f64>> {
            Ok(configs.iter().map(|&c| c as f64).collect())
        }
    }

    struct EmptyHistory;

    impl EvaluationHistory<i64> for EmptyHistory {
        fn is_empty(&self) -> bool {
            true
        }

        fn evaluated_configurations(&self) -> Vec<i64> {
            Vec::new()
        }
    }

    #[test]
    fn test_single_point_draw() {
        let space = Rc::new(SequenceSpace::new());
        let search = RandomSearch::new(
            Rc::new(IdentityAcquisition),
            space,
            Some(SharedRng::from_seed(1)),
        );

        let ranked = search
            .rank(&EmptyHistory, &BudgetContext::default(), 1)
            .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].acq_value, 0.0);
        assert_eq!(ranked[0].origin, Origin::RandomSearch);
    }

    #[test]
    fn test_zero_points_still_draws_one() {
        let space = Rc::new(SequenceSpace::new());
        let search = RandomSearch::new(
            Rc::new(IdentityAcquisition),
            space,
            Some(SharedRng::from_seed(1)),
        );

        let ranked = search
            .rank(&EmptyHistory, &BudgetContext::default(), 0)
            .unwrap();

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_batched_draw_preserves_order_unranked() {
        let space = Rc::new(SequenceSpace::new());
        let search = RandomSearch::new(
            Rc::new(IdentityAcquisition),
            space.clone(),
            Some(SharedRng::from_seed(1)),
        );

        let ranked = search
            .rank(&EmptyHistory, &BudgetContext::default(), 5)
            .unwrap();

        assert_eq!(ranked.len(), 5);
        // One batched sample call, results in draw order, placeholder scores.
        assert_eq!(space.sample_calls.get(), 1);
        let configs: Vec<i64> = ranked.iter().map(|r| r.config).collect();
        assert_eq!(configs, vec![0, 1, 2, 3, 4]);
        assert!(ranked.iter().all(|r| r.acq_value == 0.0));
        assert!(ranked.iter().all(|r| r.origin == Origin::RandomSearch));
    }

    #[test]
    fn test_ranked_draw_sorts_descending() {
        let space = Rc::new(SequenceSpace::new());
        let search = RandomSearch::new(
            Rc::new(IdentityAcquisition),
            space,
            Some(SharedRng::from_seed(1)),
        )
        .with_ranking();

        let ranked = search
            .rank(&EmptyHistory, &BudgetContext::default(), 5)
            .unwrap();

        assert_eq!(ranked.len(), 5);
        let configs: Vec<i64> = ranked.iter().map(|r| r.config).collect();
        assert_eq!(configs, vec![4, 3, 2, 1, 0]);
        assert!(ranked
            .iter()
            .all(|r| r.origin == Origin::SortedRandomSearch));
        for pair in ranked.windows(2) {
            assert!(pair[0].acq_value >= pair[1].acq_value);
        }
    }
}
