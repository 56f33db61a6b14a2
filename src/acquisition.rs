use crate::error::{MaximizerError, Result};

/// Scores how promising untested configurations are to evaluate next.
///
/// Implementations must return exactly one score per input configuration, in
/// input order, and must accept any batch size from one upward. Evaluations
/// are assumed side-effect-free; failures propagate to the caller unmodified.
pub trait AcquisitionFunction<C> {
    fn evaluate(&self, configs: &[C]) -> Result<Vec<f64>>;

    /// Scores a single configuration through a batch of one.
    fn evaluate_one(&self, config: &C) -> Result<f64> {
        let scores = self.evaluate(std::slice::from_ref(config))?;
        match scores.as_slice() {
            [score] => Ok(*score),
            _ => Err(MaximizerError::ScoreCountMismatch {
                expected: 1,
                actual: scores.len(),
            }),
        }
    }
}
