//! # Local Search
//!
//! Hill climbing over the one-exchange neighborhood graph, restarted from
//! multiple seed points. Once the outer loop has evaluation history, climbs
//! restart from the best-known configurations rather than random points, so
//! the search keeps refining the most promising region of the space.

use super::{descending, AcquisitionMaximizer};
use crate::acquisition::AcquisitionFunction;
use crate::candidate::{Origin, ScoredCandidate};
use crate::error::{MaximizerError, Result};
use crate::history::{BudgetContext, EvaluationHistory};
use crate::rng::SharedRng;
use crate::space::SearchSpace;
use std::rc::Rc;
use tracing::{debug, warn};

/// Default number of equal-score moves a climb may take to cross a plateau.
pub const DEFAULT_PLATEAU_WALK_STEPS: usize = 10;

/// Climb steps between advisory stuck-loop warnings.
const STUCK_WARNING_INTERVAL: usize = 1000;

/// Maximizes the acquisition function by hill climbing from several seeds.
///
/// Each climb adopts the first strictly improving neighbor it scans (greedy
/// first-improvement), records equal-scoring neighbors as plateau candidates,
/// and may take up to `n_steps_plateau_walk` moves across a plateau before
/// giving up. An optional `max_iterations` bounds the number of
/// neighborhood-expansion steps per climb; there is no internal timeout
/// beyond that.
pub struct LocalSearch<S, A> {
    acquisition: Rc<A>,
    space: Rc<S>,
    rng: SharedRng,
    max_iterations: Option<usize>,
    n_steps_plateau_walk: usize,
}

impl<S, A> LocalSearch<S, A>
where
    S: SearchSpace,
    A: AcquisitionFunction<S::Config>,
{
    /// Creates a local search with no step cap and the default plateau walk.
    pub fn new(acquisition: Rc<A>, space: Rc<S>, rng: Option<SharedRng>) -> Self {
        Self {
            acquisition,
            space,
            rng: SharedRng::or_default_seed(rng),
            max_iterations: None,
            n_steps_plateau_walk: DEFAULT_PLATEAU_WALK_STEPS,
        }
    }

    /// Creates a local search with explicit climb limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is set to 0.
    pub fn with_limits(
        acquisition: Rc<A>,
        space: Rc<S>,
        rng: Option<SharedRng>,
        max_iterations: Option<usize>,
        n_steps_plateau_walk: usize,
    ) -> Result<Self> {
        if max_iterations == Some(0) {
            return Err(MaximizerError::Configuration(
                "Maximum iterations must be greater than 0 when set".to_string(),
            ));
        }
        Ok(Self {
            acquisition,
            space,
            rng: SharedRng::or_default_seed(rng),
            max_iterations,
            n_steps_plateau_walk,
        })
    }

    /// Picks the configurations the climbs start from.
    ///
    /// With no history, seeds are drawn uniformly from the space. Otherwise
    /// the previously evaluated configurations are ranked and the best
    /// `min(num_points, history len)` become seeds.
    fn initial_points<H>(&self, history: &H, num_points: usize) -> Result<Vec<S::Config>>
    where
        H: EvaluationHistory<S::Config>,
    {
        if history.is_empty() {
            return self.space.sample(num_points);
        }

        let previous = history.evaluated_configurations();
        let count = num_points.min(previous.len());
        let ranked = self.sort_by_acquisition_value(previous)?;
        Ok(ranked
            .into_iter()
            .take(count)
            .map(|(_, config)| config)
            .collect())
    }

    /// Climbs from `seed` until no permitted move remains, returning the
    /// incumbent and its acquisition value.
    fn climb(&self, seed: S::Config) -> Result<(f64, S::Config)> {
        let mut incumbent = seed;
        let mut incumbent_value = self.acquisition.evaluate_one(&incumbent)?;

        let mut steps = 0usize;
        let mut neighbors_evaluated = 0usize;
        let mut plateau_moves = 0usize;

        loop {
            steps += 1;
            if steps % STUCK_WARNING_INTERVAL == 0 {
                warn!(
                    "local search climb has already taken {steps} steps; \
                     it may be stuck in an infinite loop"
                );
            }

            let mut moved = false;
            let mut plateau: Vec<S::Config> = Vec::new();

            // A fresh neighborhood each step, seeded from the shared
            // generator so the walk order is reproducible per run.
            let neighborhood_seed = self.rng.next_seed();
            for neighbor in self.space.neighborhood(&incumbent, neighborhood_seed) {
                let value = self.acquisition.evaluate_one(&neighbor)?;
                neighbors_evaluated += 1;

                if value > incumbent_value {
                    debug!("switching to an improving neighbor");
                    incumbent = neighbor;
                    incumbent_value = value;
                    moved = true;
                    break;
                }
                if value == incumbent_value {
                    plateau.push(neighbor);
                }
            }

            // No strict improvement: walk onto the first plateau candidate
            // seen, as long as the plateau budget allows.
            if !moved && plateau_moves < self.n_steps_plateau_walk {
                if let Some(first) = plateau.into_iter().next() {
                    plateau_moves += 1;
                    incumbent = first;
                    moved = true;
                }
            }

            let step_cap_reached = self.max_iterations.is_some_and(|cap| steps >= cap);
            if !moved || step_cap_reached {
                debug!(
                    "local search finished after {steps} steps and \
                     {neighbors_evaluated} neighbor evaluations"
                );
                break;
            }
        }

        Ok((incumbent_value, incumbent))
    }
}

impl<S, A> AcquisitionMaximizer<S, A> for LocalSearch<S, A>
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
        history: &H,
        _budget: &BudgetContext,
        num_points: usize,
    ) -> Result<Vec<ScoredCandidate<S::Config>>>
    where
        H: EvaluationHistory<S::Config>,
    {
        let seeds = self.initial_points(history, num_points)?;

        let mut results = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let (acq_value, incumbent) = self.climb(seed)?;
            results.push(ScoredCandidate::new(
                acq_value,
                incumbent,
                Origin::LocalSearch,
            ));
        }

        // Shuffle before the stable sort so equal-scoring climbs come back
        // in a random rather than seed-dependent order.
        self.rng.shuffle(&mut results);
        results.sort_by(|a, b| descending(a.acq_value, b.acq_value));

        Ok(results)
    }
}
