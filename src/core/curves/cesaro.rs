use crate::core::curves::grammar::{Command, Grammar, StepScaling, Symbol};
use crate::core::data::position::Position;

/// Angle of the tear cut into every segment.
pub(crate) const TEAR_ANGLE: f64 = 85.0;

/// A segment of length `l` torn at `TEAR_ANGLE` spans `l * (2 + 2cos(angle))`
/// horizontally when built from four pieces of length `l`.
pub(crate) fn tear_growth_factor() -> f64 {
    2.0 + 2.0 * TEAR_ANGLE.to_radians().cos()
}

const COMMANDS: &[(Symbol, Command)] = &[
    ('F', Command::Forward),
    ('+', Command::TurnLeft),
    ('-', Command::TurnRight),
    ('Q', Command::Turn(90.0)),
];

/// Cesàro "torn square": a unit square, traversed counter-clockwise, whose
/// sides are repeatedly torn inwards.
#[must_use]
pub fn grammar() -> Grammar {
    Grammar {
        axiom: "FQFQFQFQ",
        rules: &[('F', "F+F--F+F")],
        commands: COMMANDS,
        turn_angle: TEAR_ANGLE,
        initial_heading: 0.0,
        heading_per_iteration: 0.0,
        start: Position::new(-0.5, -0.5),
        step: StepScaling {
            base_length: 1.0,
            growth_factor: tear_growth_factor(),
        },
    }
}
