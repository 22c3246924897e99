use crate::core::data::position::Position;

/// Pose and pen of a turtle. Headings are degrees in `[0, 360)`, counter-clockwise
/// from the positive X axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TurtleState {
    pub position: Position,
    pub heading: f64,
    pub pen_down: bool,
}

/// Folds `degrees` into `[0, 360)`. `rem_euclid` rounds tiny negative
/// angles up to exactly 360.
pub(crate) fn normalise_heading(degrees: f64) -> f64 {
    let heading = degrees.rem_euclid(360.0);
    if heading >= 360.0 { 0.0 } else { heading }
}

impl TurtleState {
    #[must_use]
    pub fn new(position: Position, heading: f64) -> Self {
        Self {
            position,
            heading: normalise_heading(heading),
            pen_down: true,
        }
    }

    pub(crate) fn turn(&mut self, degrees: f64) {
        self.heading = normalise_heading(self.heading + degrees);
    }
}

impl Default for TurtleState {
    fn default() -> Self {
        Self::new(Position::ORIGIN, 0.0)
    }
}

/// What `PushState` saves and `PopState` restores.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct SavedPose {
    pub position: Position,
    pub heading: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turtle_has_pen_down() {
        assert!(TurtleState::default().pen_down);
    }

    #[test]
    fn test_heading_is_normalised() {
        assert_eq!(TurtleState::new(Position::ORIGIN, -90.0).heading, 270.0);
        assert_eq!(TurtleState::new(Position::ORIGIN, 450.0).heading, 90.0);
    }

    #[test]
    fn test_tiny_negative_heading_folds_to_zero() {
        let state = TurtleState::new(Position::ORIGIN, -1e-15);

        assert_eq!(state.heading, 0.0);
    }

    #[test]
    fn test_turn_by_tiny_negative_angle_stays_below_full_circle() {
        let mut state = TurtleState::new(Position::ORIGIN, 0.0);

        state.turn(-1e-15);

        assert!((0.0..360.0).contains(&state.heading), "heading {}", state.heading);
    }

    #[test]
    fn test_turn_wraps_both_ways() {
        let mut state = TurtleState::new(Position::ORIGIN, 350.0);

        state.turn(20.0);
        assert_eq!(state.heading, 10.0);

        state.turn(-30.0);
        assert_eq!(state.heading, 340.0);
    }
}
