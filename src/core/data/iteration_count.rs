use std::error::Error;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationCountError {
    Malformed { input: String },
    Negative { input: String },
}

impl fmt::Display for IterationCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => {
                write!(f, "iteration count must be a whole number, got {:?}", input)
            }
            Self::Negative { input } => {
                write!(f, "iteration count must not be negative, got {}", input)
            }
        }
    }
}

impl Error for IterationCountError {}

/// Number of rewriting generations to apply to a curve's axiom.
///
/// Values above `u32::MAX` saturate; the expander rejects them against its
/// length ceiling long before that matters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct IterationCount(u32);

impl IterationCount {
    #[must_use]
    pub const fn new(iterations: u32) -> Self {
        Self(iterations)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for IterationCount {
    fn from(iterations: u32) -> Self {
        Self(iterations)
    }
}

impl TryFrom<i64> for IterationCount {
    type Error = IterationCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(IterationCountError::Negative {
                input: value.to_string(),
            });
        }

        Ok(Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }
}

impl TryFrom<i32> for IterationCount {
    type Error = IterationCountError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl FromStr for IterationCount {
    type Err = IterationCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.parse::<i64>() {
            Ok(value) => Self::try_from(value).map_err(|_| IterationCountError::Negative {
                input: trimmed.to_string(),
            }),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(Self(u32::MAX)),
                IntErrorKind::NegOverflow => Err(IterationCountError::Negative {
                    input: trimmed.to_string(),
                }),
                _ => Err(IterationCountError::Malformed {
                    input: s.to_string(),
                }),
            },
        }
    }
}

impl TryFrom<&str> for IterationCount {
    type Error = IterationCountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
