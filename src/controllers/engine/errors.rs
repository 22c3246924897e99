use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use crate::core::actions::expand_sequence::expand_sequence::ExpandSequenceError;
use crate::core::actions::prepare_curve::PrepareCurveError;
use crate::core::curves::errors::CurveError;
use crate::core::curves::grammar::GrammarError;
use crate::core::data::iteration_count::IterationCountError;
use crate::core::turtle::errors::TurtleError;

/// Everything the engine boundary can reject a request with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The id is not in the registry.
    UnknownFractalKind { id: String },
    /// Non-numeric or negative iteration input.
    InvalidIterationCount(IterationCountError),
    /// Some generation would exceed the configured length ceiling.
    IterationTooLarge {
        iterations: u32,
        peak_len: u128,
        max_len: usize,
    },
    /// A grammar pops more states than it pushes. Grammar defect.
    UnbalancedState(TurtleError),
    /// A grammar uses a symbol with neither rule nor command. Grammar defect.
    InvalidGrammar(GrammarError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFractalKind { id } => write!(f, "unknown fractal kind {:?}", id),
            Self::InvalidIterationCount(err) => write!(f, "invalid iteration count: {}", err),
            Self::IterationTooLarge {
                iterations,
                peak_len,
                max_len,
            } => write!(
                f,
                "{} iterations is too many: {} symbols exceeds the limit of {}",
                iterations, peak_len, max_len
            ),
            Self::UnbalancedState(err) => write!(f, "unbalanced grammar: {}", err),
            Self::InvalidGrammar(err) => write!(f, "invalid grammar: {}", err),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIterationCount(err) => Some(err),
            Self::UnbalancedState(err) => Some(err),
            Self::InvalidGrammar(err) => Some(err),
            Self::UnknownFractalKind { .. } | Self::IterationTooLarge { .. } => None,
        }
    }
}

impl From<CurveError> for EngineError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::UnknownFractalKind { id } => Self::UnknownFractalKind { id },
        }
    }
}

impl From<IterationCountError> for EngineError {
    fn from(err: IterationCountError) -> Self {
        Self::InvalidIterationCount(err)
    }
}

impl From<PrepareCurveError> for EngineError {
    fn from(err: PrepareCurveError) -> Self {
        match err {
            PrepareCurveError::Grammar(err) => Self::InvalidGrammar(err),
            PrepareCurveError::Expand(ExpandSequenceError::IterationTooLarge {
                iterations,
                peak_len,
                max_len,
            }) => Self::IterationTooLarge {
                iterations,
                peak_len,
                max_len,
            },
            PrepareCurveError::Turtle(err) => Self::UnbalancedState(err),
        }
    }
}

impl From<TurtleError> for EngineError {
    fn from(err: TurtleError) -> Self {
        Self::UnbalancedState(err)
    }
}

// lets `u32` and `IterationCount` flow through the same generic entry points
impl From<Infallible> for EngineError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
