//! # Optimization Loop Collaborators
//!
//! The history of past objective evaluations and the budget bookkeeping both
//! belong to the outer optimization loop. The maximizers read the history to
//! pick local-search seeds and forward the budget context untouched.

/// Read access to the configurations the outer loop has already evaluated.
pub trait EvaluationHistory<C> {
    fn is_empty(&self) -> bool;

    /// All previously evaluated configurations, in no particular order.
    fn evaluated_configurations(&self) -> Vec<C>;
}

/// Evaluation-budget bookkeeping, owned and maintained by the outer loop.
///
/// The maximization strategies forward this to one another but never inspect
/// it; it exists so the ranking signature matches what the loop passes down.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetContext {
    /// Objective evaluations performed so far.
    pub evaluations: usize,
    /// Optional cap on total objective evaluations.
    pub max_evaluations: Option<usize>,
}

impl BudgetContext {
    pub fn new(evaluations: usize, max_evaluations: Option<usize>) -> Self {
        Self {
            evaluations,
            max_evaluations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_context_defaults() {
        let budget = BudgetContext::default();
        assert_eq!(budget.evaluations, 0);
        assert_eq!(budget.max_evaluations, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_budget_context_serde_round_trip() {
        let budget = BudgetContext::new(12, Some(100));
        let json = serde_json::to_string(&budget).unwrap();
        let back: BudgetContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, budget);
    }
}
