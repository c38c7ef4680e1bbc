/// Failure deriving attributes from externally supplied randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    InvalidRandomWordsLength { expected: usize, actual: usize },
}

impl std::fmt::Display for RollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRandomWordsLength { expected, actual } => {
                write!(f, "invalid random words length: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for RollError {}
