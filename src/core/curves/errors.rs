use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    UnknownFractalKind { id: String },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFractalKind { id } => write!(f, "unknown fractal kind {:?}", id),
        }
    }
}

impl Error for CurveError {}
