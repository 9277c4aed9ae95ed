/// Errors raised by a language processor.
///
/// A lookup that finds nothing is not an error; it is an
/// [`AnalysisResult`](crate::morphology::AnalysisResult) with `not_found` set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(InputProblem),
}

impl EngineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_))
    }
}

impl From<InputProblem> for EngineError {
    fn from(problem: InputProblem) -> Self {
        EngineError::InvalidInput(problem)
    }
}

/// Why a piece of input text was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputProblem {
    #[error("text is empty")]
    Empty,

    #[error("text is {length} characters long, the limit is {max}")]
    TooLong { length: usize, max: usize },

    #[error("text contains control character {0:?}")]
    ControlCharacter(char),
}
