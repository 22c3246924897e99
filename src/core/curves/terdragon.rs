use crate::core::curves::grammar::{Grammar, STANDARD_COMMANDS, StepScaling};
use crate::core::data::position::Position;

/// Terdragon: three segments per segment with 120° turns. The chord grows by
/// √3 and rotates 30° per generation.
#[must_use]
pub fn grammar() -> Grammar {
    Grammar {
        axiom: "F",
        rules: &[('F', "F+F-F")],
        commands: STANDARD_COMMANDS,
        turn_angle: 120.0,
        initial_heading: 0.0,
        heading_per_iteration: -30.0,
        start: Position::new(-0.5, 0.0),
        step: StepScaling {
            base_length: 1.0,
            growth_factor: 3.0_f64.sqrt(),
        },
    }
}
