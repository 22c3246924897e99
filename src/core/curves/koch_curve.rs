use crate::core::curves::grammar::{Grammar, STANDARD_COMMANDS, StepScaling};
use crate::core::data::position::Position;

/// Koch curve: each segment becomes four segments a third as long, with a
/// 60° spike in the middle. Runs from (-0.5, 0) to (0.5, 0).
#[must_use]
pub fn grammar() -> Grammar {
    Grammar {
        axiom: "F",
        rules: &[('F', "F+F--F+F")],
        commands: STANDARD_COMMANDS,
        turn_angle: 60.0,
        initial_heading: 0.0,
        heading_per_iteration: 0.0,
        start: Position::new(-0.5, 0.0),
        step: StepScaling {
            base_length: 1.0,
            growth_factor: 3.0,
        },
    }
}
