//! Production rule sets: the symbolic grammar behind each curve and how its
//! symbols map onto turtle commands.

use std::error::Error;
use std::fmt;

use crate::core::data::position::Position;
use crate::core::turtle::state::normalise_heading;

/// A grammar symbol. Grammars use single ASCII characters such as `F`, `+`, `-`.
pub type Symbol = char;

/// The fixed turtle vocabulary every grammar symbol is interpreted as.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// Move by the step length along the heading, drawing when the pen is down.
    Forward,
    /// Add the grammar's turn angle to the heading.
    TurnLeft,
    /// Subtract the grammar's turn angle from the heading.
    TurnRight,
    /// Turn counter-clockwise by an explicit number of degrees.
    Turn(f64),
    PushState,
    PopState,
    PenUp,
    PenDown,
    NoOp,
}

/// `F` forward, `+` left, `-` right, `[` / `]` save and restore the pose.
pub const STANDARD_COMMANDS: &[(Symbol, Command)] = &[
    ('F', Command::Forward),
    ('+', Command::TurnLeft),
    ('-', Command::TurnRight),
    ('[', Command::PushState),
    (']', Command::PopState),
];

/// How the forward step shrinks as generations are added, so the curve keeps
/// roughly the same extent at every iteration count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepScaling {
    pub base_length: f64,
    pub growth_factor: f64,
}

impl StepScaling {
    #[must_use]
    pub fn step_length(&self, iterations: u32) -> f64 {
        self.base_length / self.growth_factor.powf(f64::from(iterations))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A symbol used in the axiom or a rule has neither a rule nor a command.
    UndefinedSymbol { symbol: Symbol },
    /// The same symbol has two rule entries.
    DuplicateRule { symbol: Symbol },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedSymbol { symbol } => {
                write!(f, "symbol {:?} has neither a rule nor a turtle command", symbol)
            }
            Self::DuplicateRule { symbol } => {
                write!(f, "symbol {:?} has more than one rule", symbol)
            }
        }
    }
}

impl Error for GrammarError {}

/// An immutable L-system together with its turtle interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub axiom: &'static str,
    pub rules: &'static [(Symbol, &'static str)],
    pub commands: &'static [(Symbol, Command)],
    /// Degrees applied by `TurnLeft` / `TurnRight`.
    pub turn_angle: f64,
    /// Heading in degrees at iteration 0.
    pub initial_heading: f64,
    /// Added to the initial heading once per iteration, for curves whose end
    /// point rotates with each generation.
    pub heading_per_iteration: f64,
    /// Start position in drawing space.
    pub start: Position,
    pub step: StepScaling,
}

impl Grammar {
    #[must_use]
    pub fn axiom_symbols(&self) -> Vec<Symbol> {
        self.axiom.chars().collect()
    }

    /// The replacement for `symbol`, or `None` for symbols copied through unchanged.
    #[must_use]
    pub fn rule(&self, symbol: Symbol) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, replacement)| *replacement)
    }

    /// The turtle command for `symbol`. Symbols that only exist for rewriting are no-ops.
    #[must_use]
    pub fn command(&self, symbol: Symbol) -> Command {
        self.commands
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(Command::NoOp, |(_, command)| *command)
    }

    #[must_use]
    pub fn step_length(&self, iterations: u32) -> f64 {
        self.step.step_length(iterations)
    }

    #[must_use]
    pub fn starting_heading(&self, iterations: u32) -> f64 {
        normalise_heading(self.initial_heading + self.heading_per_iteration * f64::from(iterations))
    }

    /// Checks that every symbol reachable from the axiom is either rewritten
    /// or interpreted, and that no symbol has two rules.
    pub fn validate(&self) -> Result<(), GrammarError> {
        for (i, (symbol, _)) in self.rules.iter().enumerate() {
            if self.rules[..i].iter().any(|(s, _)| s == symbol) {
                return Err(GrammarError::DuplicateRule { symbol: *symbol });
            }
        }

        let is_defined = |symbol: Symbol| {
            self.rule(symbol).is_some() || self.commands.iter().any(|(s, _)| *s == symbol)
        };

        let used = self
            .axiom
            .chars()
            .chain(self.rules.iter().flat_map(|(_, replacement)| replacement.chars()));

        for symbol in used {
            if !is_defined(symbol) {
                return Err(GrammarError::UndefinedSymbol { symbol });
            }
        }

        Ok(())
    }
}
