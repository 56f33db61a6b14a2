//! # Search Space Contract
//!
//! The maximization strategies never hold coordinates themselves; they drive
//! a space collaborator that can draw uniform samples and enumerate the
//! one-exchange neighborhood of a point.

use crate::error::Result;
use std::fmt::Debug;

/// A lazy, finite enumeration of the configurations one exchange away from a
/// base point. Consumed at most once per local-search step.
pub type Neighborhood<'a, C> = Box<dyn Iterator<Item = C> + 'a>;

/// A bounded, possibly mixed continuous/discrete/categorical search space.
pub trait SearchSpace {
    /// A point in the space.
    type Config: Clone + Debug + PartialEq;

    /// Draws `size` configurations uniformly at random. The with-or-without
    /// replacement policy is the implementation's own.
    fn sample(&self, size: usize) -> Result<Vec<Self::Config>>;

    /// Enumerates all configurations differing from `base` in exactly one
    /// coordinate. Order and content are determined by `seed`, so a climb
    /// re-seeded identically walks the same neighbors in the same order.
    ///
    /// The returned iterator may borrow the space but not `base`;
    /// implementations clone whatever they need from the base point.
    fn neighborhood<'a>(&'a self, base: &Self::Config, seed: u64) -> Neighborhood<'a, Self::Config>;
}
