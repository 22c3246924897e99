use std::error::Error;
use std::fmt;

use crate::core::actions::expand_sequence::expand_sequence::{
    ExpandSequenceError, expand_sequence, predict_len,
};
use crate::core::actions::expand_sequence::expand_sequence_rayon::expand_sequence_rayon;
use crate::core::config::EngineConfig;
use crate::core::curves::grammar::{Grammar, GrammarError, Symbol};
use crate::core::turtle::errors::TurtleError;
use crate::core::turtle::interpreter::{TurtleInterpreter, check_state_balance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareCurveError {
    Grammar(GrammarError),
    Expand(ExpandSequenceError),
    Turtle(TurtleError),
}

impl fmt::Display for PrepareCurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar(err) => write!(f, "grammar error: {}", err),
            Self::Expand(err) => write!(f, "expansion error: {}", err),
            Self::Turtle(err) => write!(f, "turtle error: {}", err),
        }
    }
}

impl Error for PrepareCurveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grammar(err) => Some(err),
            Self::Expand(err) => Some(err),
            Self::Turtle(err) => Some(err),
        }
    }
}

impl From<GrammarError> for PrepareCurveError {
    fn from(err: GrammarError) -> Self {
        Self::Grammar(err)
    }
}

impl From<ExpandSequenceError> for PrepareCurveError {
    fn from(err: ExpandSequenceError) -> Self {
        Self::Expand(err)
    }
}

impl From<TurtleError> for PrepareCurveError {
    fn from(err: TurtleError) -> Self {
        Self::Turtle(err)
    }
}

/// An expanded, fully validated curve, ready to be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCurve {
    pub grammar: Grammar,
    pub iterations: u32,
    pub sequence: Vec<Symbol>,
}

impl PreparedCurve {
    #[must_use]
    pub fn interpreter(&self) -> TurtleInterpreter {
        TurtleInterpreter::new(&self.grammar, self.iterations)
    }
}

/// Validates `grammar`, expands it and checks stack discipline, in that
/// order. Nothing is drawn until all of it has passed.
pub fn prepare_curve(
    grammar: &Grammar,
    iterations: u32,
    config: &EngineConfig,
) -> Result<PreparedCurve, PrepareCurveError> {
    grammar.validate()?;

    let predicted = predict_len(grammar, iterations);
    let sequence = if predicted.peak_len >= config.parallel_expansion_threshold as u128 {
        expand_sequence_rayon(grammar, iterations, config.max_sequence_len)?
    } else {
        expand_sequence(grammar, iterations, config.max_sequence_len)?
    };

    check_state_balance(grammar, &sequence)?;

    Ok(PreparedCurve {
        grammar: grammar.clone(),
        iterations,
        sequence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curves::curve_kinds::FractalKind;
    use crate::core::curves::grammar::{Command, StepScaling};
    use crate::core::data::position::Position;

    fn unbalanced_grammar() -> Grammar {
        Grammar {
            axiom: "F]",
            rules: &[('F', "FF")],
            commands: &[('F', Command::Forward), (']', Command::PopState)],
            turn_angle: 90.0,
            initial_heading: 0.0,
            heading_per_iteration: 0.0,
            start: Position::ORIGIN,
            step: StepScaling {
                base_length: 1.0,
                growth_factor: 2.0,
            },
        }
    }

    #[test]
    fn test_prepare_expands_registered_curve() {
        let grammar = FractalKind::LevyCCurve.grammar();

        let prepared = prepare_curve(&grammar, 2, &EngineConfig::default()).unwrap();

        assert_eq!(prepared.sequence.iter().collect::<String>(), "++F--F+--+F--F++");
        assert_eq!(prepared.iterations, 2);
    }

    #[test]
    fn test_parallel_and_sequential_paths_agree() {
        let grammar = FractalKind::Terdragon.grammar();
        let sequential = EngineConfig {
            parallel_expansion_threshold: usize::MAX,
            ..EngineConfig::default()
        };
        let parallel = EngineConfig {
            parallel_expansion_threshold: 0,
            ..EngineConfig::default()
        };

        assert_eq!(
            prepare_curve(&grammar, 6, &sequential).unwrap(),
            prepare_curve(&grammar, 6, &parallel).unwrap()
        );
    }

    #[test]
    fn test_prepare_rejects_invalid_grammar() {
        let mut grammar = unbalanced_grammar();
        grammar.axiom = "G";

        assert_eq!(
            prepare_curve(&grammar, 1, &EngineConfig::default()),
            Err(PrepareCurveError::Grammar(GrammarError::UndefinedSymbol { symbol: 'G' }))
        );
    }

    #[test]
    fn test_prepare_rejects_unbalanced_sequence() {
        let result = prepare_curve(&unbalanced_grammar(), 2, &EngineConfig::default());

        assert_eq!(
            result,
            Err(PrepareCurveError::Turtle(TurtleError::UnbalancedState { index: Some(4) }))
        );
    }

    #[test]
    fn test_prepare_rejects_too_many_iterations() {
        let config = EngineConfig {
            max_sequence_len: 100,
            ..EngineConfig::default()
        };

        assert!(matches!(
            prepare_curve(&FractalKind::KochCurve.grammar(), 3, &config),
            Err(PrepareCurveError::Expand(ExpandSequenceError::IterationTooLarge { .. }))
        ));
    }
}
