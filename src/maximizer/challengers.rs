//! # Challenger Sequences
//!
//! The output side of the maximizers: a lazy, single-pass sequence that
//! interleaves a freshly drawn random configuration after every ranked
//! candidate it yields. Interleaving lazily means the outer loop only pays
//! for the random draws it actually consumes, instead of sampling hundreds
//! of configurations up front that are never looked at.

use crate::candidate::{Candidate, Origin};
use crate::error::{MaximizerError, Result};
use crate::space::SearchSpace;
use std::rc::Rc;

/// A single-pass sequence over a ranked candidate list that yields one fresh
/// random draw after every list element.
///
/// For a list of length N the sequence produces exactly 2N elements,
/// alternating list element and random draw, and ends with the random draw
/// that follows the final list element. The ranked list is never mutated;
/// the sequence owns only its cursor and flag, and is restartable only by
/// constructing a new instance.
pub struct ChallengerSequence<S: SearchSpace> {
    challengers: Vec<Candidate<S::Config>>,
    space: Rc<S>,
    cursor: usize,
    next_is_random: bool,
}

impl<S: SearchSpace> ChallengerSequence<S> {
    pub fn new(challengers: Vec<Candidate<S::Config>>, space: Rc<S>) -> Self {
        Self {
            challengers,
            space,
            cursor: 0,
            next_is_random: false,
        }
    }

    /// Number of ranked candidates backing the sequence.
    pub fn ranked_len(&self) -> usize {
        self.challengers.len()
    }

    /// Pulls the next challenger, or `None` once the sequence is exhausted.
    ///
    /// Errors from the space collaborator propagate; the sequence state is
    /// unchanged by a failed draw.
    pub fn next_challenger(&mut self) -> Result<Option<Candidate<S::Config>>> {
        if self.cursor == self.challengers.len() && !self.next_is_random {
            return Ok(None);
        }

        if self.next_is_random {
            let config = self
                .space
                .sample(1)?
                .into_iter()
                .next()
                .ok_or_else(|| {
                    MaximizerError::Space("sample(1) returned no configurations".to_string())
                })?;
            self.next_is_random = false;
            return Ok(Some(Candidate::new(config, Origin::RandomSearch)));
        }

        let candidate = self.challengers[self.cursor].clone();
        self.cursor += 1;
        self.next_is_random = true;
        Ok(Some(candidate))
    }
}

impl<S: SearchSpace> Iterator for ChallengerSequence<S> {
    type Item = Result<Candidate<S::Config>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_challenger().transpose()
    }
}

/// The candidates produced by a maximizer, consumable exactly once.
///
/// Plain strategies return the `Ranked` variant, a finite ordered list. The
/// interleaving composite returns `Interleaved`, which keeps drawing fresh
/// random configurations between ranked candidates.
pub enum Challengers<S: SearchSpace> {
    Ranked(std::vec::IntoIter<Candidate<S::Config>>),
    Interleaved(ChallengerSequence<S>),
}

impl<S: SearchSpace> Challengers<S> {
    pub fn ranked(candidates: Vec<Candidate<S::Config>>) -> Self {
        Challengers::Ranked(candidates.into_iter())
    }

    pub fn interleaved(sequence: ChallengerSequence<S>) -> Self {
        Challengers::Interleaved(sequence)
    }
}

impl<S: SearchSpace> Iterator for Challengers<S> {
    type Item = Result<Candidate<S::Config>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Challengers::Ranked(candidates) => candidates.next().map(Ok),
            Challengers::Interleaved(sequence) => sequence.next(),
        }
    }
}
