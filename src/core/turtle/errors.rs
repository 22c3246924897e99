use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurtleError {
    /// A pop with no matching push. `index` is the offending symbol's
    /// position when the whole sequence was known.
    UnbalancedState { index: Option<usize> },
}

impl fmt::Display for TurtleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedState { index: Some(index) } => {
                write!(f, "state pop at symbol {} has no matching push", index)
            }
            Self::UnbalancedState { index: None } => {
                write!(f, "state pop has no matching push")
            }
        }
    }
}

impl Error for TurtleError {}
