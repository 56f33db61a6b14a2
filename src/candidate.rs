//! # Candidate Types
//!
//! Value types produced by the maximization strategies: the provenance label,
//! the labeled candidate handed to the outer optimization loop, and the
//! scored candidate used while ranking.

use std::fmt;

/// Identifies which strategy produced a candidate configuration.
///
/// The label travels with every proposed configuration and is only used for
/// diagnostics; no strategy changes behavior based on it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Produced by a hill-climbing local search.
    LocalSearch,
    /// Drawn uniformly at random, returned in draw order.
    RandomSearch,
    /// Drawn uniformly at random, then ranked by acquisition value.
    SortedRandomSearch,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::LocalSearch => write!(f, "Local Search"),
            Origin::RandomSearch => write!(f, "Random Search"),
            Origin::SortedRandomSearch => write!(f, "Random Search (sorted)"),
        }
    }
}

/// A configuration proposed for evaluation, tagged with its provenance.
///
/// Provenance is carried on this wrapper instead of a mutable field on the
/// configuration itself, so a configuration referenced from several places
/// (the history, a seed list) is never relabeled behind anyone's back.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<C> {
    pub config: C,
    pub origin: Origin,
}

impl<C> Candidate<C> {
    pub fn new(config: C, origin: Origin) -> Self {
        Self { config, origin }
    }
}

/// A candidate paired with the acquisition value it was ranked under.
///
/// Transient output of the ranking primitive. Within any ranked sequence the
/// acquisition values are non-increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<C> {
    pub acq_value: f64,
    pub config: C,
    pub origin: Origin,
}

impl<C> ScoredCandidate<C> {
    pub fn new(acq_value: f64, config: C, origin: Origin) -> Self {
        Self {
            acq_value,
            config,
            origin,
        }
    }

    /// Drops the score, keeping the configuration and its label.
    pub fn into_candidate(self) -> Candidate<C> {
        Candidate::new(self.config, self.origin)
    }
}
