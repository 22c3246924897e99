use crate::core::curves::cesaro::{TEAR_ANGLE, tear_growth_factor};
use crate::core::curves::grammar::{Command, Grammar, StepScaling, Symbol};
use crate::core::data::position::Position;

const COMMANDS: &[(Symbol, Command)] = &[
    ('F', Command::Forward),
    ('+', Command::TurnLeft),
    ('-', Command::TurnRight),
    ('Q', Command::Turn(120.0)),
];

/// Cesàro tears applied to a unit equilateral triangle centred on the origin.
#[must_use]
pub fn grammar() -> Grammar {
    Grammar {
        axiom: "FQFQFQ",
        rules: &[('F', "F+F--F+F")],
        commands: COMMANDS,
        turn_angle: TEAR_ANGLE,
        initial_heading: 0.0,
        heading_per_iteration: 0.0,
        start: Position::new(-0.5, -(3.0_f64.sqrt()) / 6.0),
        step: StepScaling {
            base_length: 1.0,
            growth_factor: tear_growth_factor(),
        },
    }
}
