use crate::core::curves::grammar::{Command, Grammar, Symbol};
use crate::core::data::segment::Segment;
use crate::core::turtle::errors::TurtleError;
use crate::core::turtle::state::{SavedPose, TurtleState};

/// Checks that every `PopState` in `sequence` has an earlier matching
/// `PushState`. Unclosed pushes are allowed.
pub fn check_state_balance(grammar: &Grammar, sequence: &[Symbol]) -> Result<(), TurtleError> {
    check_balance_from_depth(grammar, sequence, 0)
}

fn check_balance_from_depth(
    grammar: &Grammar,
    sequence: &[Symbol],
    mut depth: usize,
) -> Result<(), TurtleError> {
    for (index, &symbol) in sequence.iter().enumerate() {
        match grammar.command(symbol) {
            Command::PushState => depth += 1,
            Command::PopState => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(TurtleError::UnbalancedState { index: Some(index) })?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Turns grammar symbols into line segments, one symbol at a time.
///
/// Segments are in drawing space. The interpreter owns its turtle state
/// exclusively; interpreting the next symbol is the only way it changes.
#[derive(Debug, Clone)]
pub struct TurtleInterpreter {
    grammar: Grammar,
    step_length: f64,
    state: TurtleState,
    saved: Vec<SavedPose>,
}

impl TurtleInterpreter {
    /// A turtle at the grammar's start pose, scaled for `iterations` generations.
    #[must_use]
    pub fn new(grammar: &Grammar, iterations: u32) -> Self {
        Self::with_state(
            grammar,
            grammar.step_length(iterations),
            TurtleState::new(grammar.start, grammar.starting_heading(iterations)),
        )
    }

    #[must_use]
    pub fn with_state(grammar: &Grammar, step_length: f64, state: TurtleState) -> Self {
        Self {
            grammar: grammar.clone(),
            step_length,
            state,
            saved: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Number of poses currently saved by `PushState`.
    #[must_use]
    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn execute(&mut self, command: Command) -> Result<Option<Segment>, TurtleError> {
        match command {
            Command::Forward => {
                let from = self.state.position;
                let to = from.advanced(self.state.heading, self.step_length);
                self.state.position = to;

                return Ok(self.state.pen_down.then_some(Segment::new(from, to)));
            }
            Command::TurnLeft => self.state.turn(self.grammar.turn_angle),
            Command::TurnRight => self.state.turn(-self.grammar.turn_angle),
            Command::Turn(degrees) => self.state.turn(degrees),
            Command::PushState => self.saved.push(SavedPose {
                position: self.state.position,
                heading: self.state.heading,
            }),
            Command::PopState => {
                let pose = self
                    .saved
                    .pop()
                    .ok_or(TurtleError::UnbalancedState { index: None })?;
                self.state.position = pose.position;
                self.state.heading = pose.heading;
            }
            Command::PenUp => self.state.pen_down = false,
            Command::PenDown => self.state.pen_down = true,
            Command::NoOp => {}
        }

        Ok(None)
    }

    /// Interprets one symbol, returning the segment it drew, if any.
    pub fn step(&mut self, symbol: Symbol) -> Result<Option<Segment>, TurtleError> {
        let command = self.grammar.command(symbol);

        self.execute(command)
    }

    /// Interprets a whole sequence and collects every drawn segment.
    ///
    /// The sequence is checked for stack balance first, so on failure no
    /// symbol has been interpreted and the turtle is unchanged.
    pub fn run_all(&mut self, sequence: &[Symbol]) -> Result<Vec<Segment>, TurtleError> {
        self.check_balance_from_here(sequence)?;

        let mut segments = Vec::new();

        for &symbol in sequence {
            if let Some(segment) = self.step(symbol)? {
                segments.push(segment);
            }
        }

        Ok(segments)
    }

    /// Like [`check_state_balance`], but counting poses this turtle already saved.
    pub fn check_balance_from_here(&self, sequence: &[Symbol]) -> Result<(), TurtleError> {
        check_balance_from_depth(&self.grammar, sequence, self.saved.len())
    }
}
