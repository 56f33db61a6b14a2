//! # Interleaved Search
//!
//! The default maximization strategy: local search from the best evaluated
//! configurations, ranked random samples to keep exploring, and a challenger
//! sequence that injects fresh random draws between the ranked candidates.

use super::challengers::{ChallengerSequence, Challengers};
use super::local_search::LocalSearch;
use super::random_search::RandomSearch;
use super::{descending, AcquisitionMaximizer};
use crate::acquisition::AcquisitionFunction;
use crate::candidate::ScoredCandidate;
use crate::error::{MaximizerError, Result};
use crate::history::{BudgetContext, EvaluationHistory};
use crate::rng::SharedRng;
use crate::space::SearchSpace;
use std::rc::Rc;

/// Number of local-search climbs per maximization round, independent of how
/// many candidates the caller asks for.
pub const LOCAL_SEARCH_SEEDS: usize = 10;

/// Composes [`LocalSearch`] and a ranking [`RandomSearch`] into one strategy.
///
/// Both sub-strategies are handed clones of the same collaborator handles and
/// the same shared generator at construction, so a full round is reproducible
/// from one top-level seed. The merged ranking is wrapped in a
/// [`ChallengerSequence`]; this composite has no ranking primitive of its own
/// and `rank` fails with [`MaximizerError::Unsupported`].
pub struct InterleavedSearch<S, A> {
    acquisition: Rc<A>,
    space: Rc<S>,
    rng: SharedRng,
    local_search: LocalSearch<S, A>,
    random_search: RandomSearch<S, A>,
}

impl<S, A> InterleavedSearch<S, A>
where
    S: SearchSpace,
    A: AcquisitionFunction<S::Config>,
{
    /// Creates the default interleaving strategy.
    pub fn new(acquisition: Rc<A>, space: Rc<S>, rng: Option<SharedRng>) -> Self {
        let rng = SharedRng::or_default_seed(rng);
        let local_search = LocalSearch::new(
            Rc::clone(&acquisition),
            Rc::clone(&space),
            Some(rng.clone()),
        );
        let random_search = RandomSearch::new(
            Rc::clone(&acquisition),
            Rc::clone(&space),
            Some(rng.clone()),
        )
        .with_ranking();

        Self {
            acquisition,
            space,
            rng,
            local_search,
            random_search,
        }
    }

    /// Creates the strategy with explicit limits on the owned local search.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is set to 0.
    pub fn with_local_search_limits(
        acquisition: Rc<A>,
        space: Rc<S>,
        rng: Option<SharedRng>,
        max_iterations: Option<usize>,
        n_steps_plateau_walk: usize,
    ) -> Result<Self> {
        let rng = SharedRng::or_default_seed(rng);
        let local_search = LocalSearch::with_limits(
            Rc::clone(&acquisition),
            Rc::clone(&space),
            Some(rng.clone()),
            max_iterations,
            n_steps_plateau_walk,
        )?;
        let random_search = RandomSearch::new(
            Rc::clone(&acquisition),
            Rc::clone(&space),
            Some(rng.clone()),
        )
        .with_ranking();

        Ok(Self {
            acquisition,
            space,
            rng,
            local_search,
            random_search,
        })
    }
}

impl<S, A> AcquisitionMaximizer<S, A> for InterleavedSearch<S, A>
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

    /// This composite only composes other strategies' rankings.
    fn rank<H>(
        &self,
        _history: &H,
        _budget: &BudgetContext,
        _num_points: usize,
    ) -> Result<Vec<ScoredCandidate<S::Config>>>
    where
        H: EvaluationHistory<S::Config>,
    {
        Err(MaximizerError::Unsupported(
            "InterleavedSearch does not implement ranking; call maximize".to_string(),
        ))
    }

    fn maximize<H>(
        &self,
        history: &H,
        budget: &BudgetContext,
        num_points: usize,
    ) -> Result<Challengers<S>>
    where
        H: EvaluationHistory<S::Config>,
    {
        let by_local_search = self
            .local_search
            .rank(history, budget, LOCAL_SEARCH_SEEDS)?;

        let by_random_search = self.random_search.rank(
            history,
            budget,
            num_points.saturating_sub(by_local_search.len()),
        )?;

        // Random-search candidates go first so that, early on, while the
        // surrogate still scores everything the same, the stable sort leaves
        // them ahead of the local-search candidates among ties.
        let mut merged = by_random_search;
        merged.extend(by_local_search);
        merged.sort_by(|a, b| descending(a.acq_value, b.acq_value));

        let preview: Vec<(f64, String)> = merged
            .iter()
            .take(10)
            .map(|c| (c.acq_value, c.origin.to_string()))
            .collect();
        tracing::debug!("first 10 acquisition values of selected candidates: {preview:?}");

        let candidates = merged
            .into_iter()
            .map(ScoredCandidate::into_candidate)
            .collect();

        Ok(Challengers::interleaved(ChallengerSequence::new(
            candidates,
            Rc::clone(&self.space),
        )))
    }
}
