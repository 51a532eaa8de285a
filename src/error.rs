use thiserror::Error;

/// Errors raised while assembling a grammar
///
/// Matching itself never errors: a matcher either matches or it does not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("repetition range {min}..{end} admits no count")]
    EmptyRepetition { min: usize, end: usize },
}
