use std::f64::consts::SQRT_2;

use crate::core::curves::grammar::{Grammar, STANDARD_COMMANDS, StepScaling};
use crate::core::data::position::Position;

/// Heighway dragon.
///
/// Every generation rotates the end point 45° counter-clockwise and stretches
/// the chord by √2, so the starting heading is wound back by 45° per
/// iteration to keep the end points fixed at (±0.5, 0).
#[must_use]
pub fn grammar() -> Grammar {
    Grammar {
        axiom: "FX",
        rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
        commands: STANDARD_COMMANDS,
        turn_angle: 90.0,
        initial_heading: 0.0,
        heading_per_iteration: -45.0,
        start: Position::new(-0.5, 0.0),
        step: StepScaling {
            base_length: 1.0,
            growth_factor: SQRT_2,
        },
    }
}
