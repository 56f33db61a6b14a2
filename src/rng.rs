//! # Random Number Generation
//!
//! The `RandomNumberGenerator` struct provides a simple interface for
//! generating random numbers within a specified range using the `rand` crate.
//! The `SharedRng` handle wraps one generator so that a maximizer and the
//! sub-strategies it owns all advance the same state; a full search run is
//! reproducible from a single top-level seed.
//!
//! ## Example
//!
//! ```rust
//! use acqmax::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let random_numbers = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! for number in random_numbers {
//!     println!("Random Number: {}", number);
//! }
//! ```
//!
//! ## Shared handle
//!
//! ```rust
//! use acqmax::rng::SharedRng;
//!
//! let rng = SharedRng::from_seed(42);
//! let handle = rng.clone();
//!
//! // Both handles drive the same underlying generator state.
//! let _ = rng.next_seed();
//! let _ = handle.next_seed();
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::debug;

/// Seed used when a strategy is constructed without an explicit generator.
pub const DEFAULT_SEED: u64 = 1;

/// A wrapper around the `rand` crate's `StdRng` that provides methods for
/// generating random numbers within a specified range.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is what makes search runs reproducible: every draw a maximizer
    /// makes (neighborhood seeds, tie-break values, result shuffles) comes
    /// from this one sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a specified number of random floating-point numbers within
    /// the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    ///
    /// # Returns
    ///
    /// A `VecDeque` containing the generated random numbers.
    pub fn fetch_uniform(&mut self, from: f32, to: f32, num: usize) -> VecDeque<f32> {
        let mut uniform_numbers = VecDeque::new();
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }

    /// Draws a fresh `u64`, used to seed neighborhood enumeration.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A cheaply clonable handle to one `RandomNumberGenerator`.
///
/// Cloning the handle shares the underlying state rather than copying it:
/// draws made through one clone advance the sequence seen by all others. A
/// composite maximizer hands clones of its handle to the strategies it owns,
/// which makes the draw order across strategies part of the reproducibility
/// contract. The maximization subsystem is single-threaded, so the handle is
/// deliberately `Rc`-based and not `Send`.
#[derive(Clone)]
pub struct SharedRng {
    inner: Rc<RefCell<RandomNumberGenerator>>,
}

impl SharedRng {
    /// Creates a handle around a generator seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_generator(RandomNumberGenerator::from_seed(seed))
    }

    /// Creates a handle seeded from the system entropy.
    pub fn from_entropy() -> Self {
        Self::from_generator(RandomNumberGenerator::new())
    }

    /// Wraps an existing generator in a shared handle.
    pub fn from_generator(generator: RandomNumberGenerator) -> Self {
        Self {
            inner: Rc::new(RefCell::new(generator)),
        }
    }

    /// Resolves an optional handle, falling back to [`DEFAULT_SEED`].
    ///
    /// The fallback is diagnostic-worthy but not an error: a run without an
    /// explicit seed is still deterministic, just always the same.
    pub fn or_default_seed(rng: Option<SharedRng>) -> Self {
        rng.unwrap_or_else(|| {
            debug!("no random generator supplied, using default seed {DEFAULT_SEED}");
            Self::from_seed(DEFAULT_SEED)
        })
    }

    /// Draws a fresh `u64`, used to seed neighborhood enumeration.
    pub fn next_seed(&self) -> u64 {
        self.inner.borrow_mut().next_seed()
    }

    /// Generates `num` random floating-point numbers in `[from, to)`.
    pub fn fetch_uniform(&self, from: f32, to: f32, num: usize) -> VecDeque<f32> {
        self.inner.borrow_mut().fetch_uniform(from, to, num)
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        self.inner.borrow_mut().shuffle(items);
    }
}
