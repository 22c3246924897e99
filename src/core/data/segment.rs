use crate::core::data::position::Position;

/// One straight stroke produced by a single forward move of the turtle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
}

impl Segment {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    /// Applies `transform` to both end points.
    #[must_use]
    pub fn map(self, transform: impl Fn(Position) -> Position) -> Self {
        Self {
            from: transform(self.from),
            to: transform(self.to),
        }
    }
}
