//! # Acquisition Maximizers
//!
//! This module provides the strategies that turn an acquisition function into
//! an ordered list of candidate configurations: hill-climbing local search,
//! uniform random search, and the interleaving composite that is the default
//! for a surrogate-guided optimization loop.
//!
//! All strategies implement [`AcquisitionMaximizer`], which supplies ranking
//! and the shared random-tie-break sort on top of a single required
//! primitive.

use crate::acquisition::AcquisitionFunction;
use crate::candidate::ScoredCandidate;
use crate::error::{MaximizerError, Result};
use crate::history::{BudgetContext, EvaluationHistory};
use crate::rng::SharedRng;
use crate::space::SearchSpace;
use std::cmp::Ordering;

pub mod challengers;
pub mod interleaved;
pub mod local_search;
pub mod random_search;

// Re-export key types for convenience
pub use challengers::{ChallengerSequence, Challengers};
pub use interleaved::{InterleavedSearch, LOCAL_SEARCH_SEEDS};
pub use local_search::LocalSearch;
pub use random_search::RandomSearch;

/// Orders two scores for a descending sort, pushing NaN to the end.
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    let cmp = a.partial_cmp(&b).unwrap_or_else(|| {
        if a.is_nan() {
            Ordering::Less
        } else if b.is_nan() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    cmp.reverse()
}

/// A strategy for maximizing an acquisition function over a search space.
///
/// Implementors provide the ranking primitive [`rank`](Self::rank); the
/// higher-level [`maximize`](Self::maximize) and the shared tie-break sort
/// come for free. Composite strategies that cannot rank (they only compose
/// other strategies' rankings) return [`MaximizerError::Unsupported`] from
/// `rank`; that is a contract violation by the caller, not a runtime fault.
///
/// Every concrete strategy is constructed from an acquisition function, a
/// search-space collaborator, and an optional [`SharedRng`]; when the
/// generator is omitted, a fixed default seed is used and a diagnostic is
/// emitted.
pub trait AcquisitionMaximizer<S, A>
where
    S: SearchSpace,
    A: AcquisitionFunction<S::Config>,
{
    /// The acquisition function this strategy maximizes.
    fn acquisition(&self) -> &A;

    /// The random generator handle shared with any owned sub-strategies.
    fn rng(&self) -> &SharedRng;

    /// Ranks up to `num_points` configurations by descending acquisition
    /// value.
    ///
    /// In contrast to [`maximize`](Self::maximize), the result keeps the
    /// acquisition values, which lets strategies be plugged together.
    fn rank<H>(
        &self,
        history: &H,
        budget: &BudgetContext,
        num_points: usize,
    ) -> Result<Vec<ScoredCandidate<S::Config>>>
    where
        H: EvaluationHistory<S::Config>;

    /// Returns up to `num_points` configurations ordered by descending
    /// estimated promise, consumable exactly once.
    fn maximize<H>(
        &self,
        history: &H,
        budget: &BudgetContext,
        num_points: usize,
    ) -> Result<Challengers<S>>
    where
        H: EvaluationHistory<S::Config>,
    {
        let ranked = self.rank(history, budget, num_points)?;
        Ok(Challengers::ranked(
            ranked
                .into_iter()
                .map(ScoredCandidate::into_candidate)
                .collect(),
        ))
    }

    /// Scores `configs` in one batch call and sorts them by descending
    /// acquisition value.
    ///
    /// Ties are broken by attaching an independent uniform draw per
    /// configuration as the secondary sort key, so equal-scoring
    /// configurations come back in an order that is random yet reproducible
    /// for a fixed seed. This is the only place randomness enters the
    /// ranking of an already-known configuration set.
    fn sort_by_acquisition_value(
        &self,
        configs: Vec<S::Config>,
    ) -> Result<Vec<(f64, S::Config)>> {
        if configs.is_empty() {
            return Ok(Vec::new());
        }

        let scores = self.acquisition().evaluate(&configs)?;
        if scores.len() != configs.len() {
            return Err(MaximizerError::ScoreCountMismatch {
                expected: configs.len(),
                actual: scores.len(),
            });
        }

        let tie_breaks = self.rng().fetch_uniform(0.0, 1.0, configs.len());
        let mut scored: Vec<(f64, f64, S::Config)> = scores
            .into_iter()
            .zip(tie_breaks)
            .zip(configs)
            .map(|((score, tie), config)| (score, f64::from(tie), config))
            .collect();

        scored.sort_by(|a, b| match descending(a.0, b.0) {
            Ordering::Equal => descending(a.1, b.1),
            ord => ord,
        });

        Ok(scored
            .into_iter()
            .map(|(score, _, config)| (score, config))
            .collect())
    }
}
