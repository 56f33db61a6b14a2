pub mod acquisition;
pub mod candidate;
pub mod error;
pub mod history;
pub mod maximizer;
pub mod rng;
pub mod space;

// Re-export commonly used types for convenience
pub use acquisition::AcquisitionFunction;
pub use candidate::{Candidate, Origin, ScoredCandidate};
pub use error::{MaximizerError, Result, ResultExt};
pub use history::{BudgetContext, EvaluationHistory};
pub use maximizer::{
    AcquisitionMaximizer, ChallengerSequence, Challengers, InterleavedSearch, LocalSearch,
    RandomSearch,
};
pub use rng::{RandomNumberGenerator, SharedRng};
pub use space::{Neighborhood, SearchSpace};
