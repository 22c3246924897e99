use std::f64::consts::SQRT_2;

use crate::core::curves::grammar::{Grammar, STANDARD_COMMANDS, StepScaling};
use crate::core::data::position::Position;

/// Lévy C curve: each segment is replaced by the two legs of a right
/// isosceles triangle built on it.
#[must_use]
pub fn grammar() -> Grammar {
    Grammar {
        axiom: "F",
        rules: &[('F', "+F--F+")],
        commands: STANDARD_COMMANDS,
        turn_angle: 45.0,
        initial_heading: 0.0,
        heading_per_iteration: 0.0,
        start: Position::new(-0.5, 0.0),
        step: StepScaling {
            base_length: 1.0,
            growth_factor: SQRT_2,
        },
    }
}
