use crate::core::data::position::Position;

/// Direction the drawing-space Y axis points on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum YAxis {
    /// Mathematical orientation: increasing Y moves towards the top of the canvas.
    #[default]
    Up,
    /// Pixel orientation: increasing Y moves towards the bottom of the canvas.
    Down,
}

/// Placement of the turtle's drawing space on a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawingSpace {
    /// Where the drawing-space origin lands, in canvas-local pixels.
    pub origin: Position,
    /// How many pixels one drawing-space unit covers.
    pub pixels_per_unit: f64,
    pub y_axis: YAxis,
}

impl DrawingSpace {
    /// Origin at the canvas centre, Y up, one unit equal to half the canvas width.
    ///
    /// Curves are laid out on a unit-sized frame around the origin, so this
    /// keeps them within the middle half of the canvas horizontally. Widths
    /// below one pixel are treated as one pixel to keep the scale non-zero.
    #[must_use]
    pub fn centred(width: f64, height: f64) -> Self {
        Self {
            origin: Position::new(width / 2.0, height / 2.0),
            pixels_per_unit: width.max(1.0) / 2.0,
            y_axis: YAxis::Up,
        }
    }

    fn y_sign(&self) -> f64 {
        match self.y_axis {
            YAxis::Up => -1.0,
            YAxis::Down => 1.0,
        }
    }
}

/// Pixel geometry of a host canvas: its size, where it sits on the page, and
/// how the drawing space maps onto it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    /// Top-left corner of the canvas in page (screen) pixels.
    pub offset: Position,
    pub space: DrawingSpace,
}

impl CanvasGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            width,
            height,
            offset: Position::new(offset_x, offset_y),
            space: DrawingSpace::centred(width, height),
        }
    }

    #[must_use]
    pub fn with_drawing_space(self, space: DrawingSpace) -> Self {
        Self { space, ..self }
    }

    /// Drawing-space position to canvas-local pixels.
    #[must_use]
    pub fn drawing_to_canvas(&self, position: Position) -> Position {
        Position {
            x: self.space.origin.x + position.x * self.space.pixels_per_unit,
            y: self.space.origin.y + self.space.y_sign() * position.y * self.space.pixels_per_unit,
        }
    }

    /// Drawing-space position to page pixels.
    #[must_use]
    pub fn drawing_to_screen(&self, position: Position) -> Position {
        self.offset + self.drawing_to_canvas(position)
    }

    /// Canvas-local pixels to drawing space.
    #[must_use]
    pub fn canvas_to_drawing(&self, position: Position) -> Position {
        let relative = position - self.space.origin;

        Position {
            x: relative.x / self.space.pixels_per_unit,
            y: self.space.y_sign() * relative.y / self.space.pixels_per_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_centred_space_maps_origin_to_canvas_centre() {
        let canvas = CanvasGeometry::new(800.0, 600.0, 0.0, 0.0);

        assert_eq!(canvas.drawing_to_canvas(Position::ORIGIN), Position::new(400.0, 300.0));
    }

    #[test]
    fn test_unit_curve_spans_middle_half_of_canvas() {
        let canvas = CanvasGeometry::new(800.0, 600.0, 0.0, 0.0);

        let start = canvas.drawing_to_canvas(Position::new(-0.5, 0.0));
        let end = canvas.drawing_to_canvas(Position::new(0.5, 0.0));

        assert_eq!(start, Position::new(200.0, 300.0));
        assert_eq!(end, Position::new(600.0, 300.0));
    }

    #[test]
    fn test_y_up_moves_towards_top_of_canvas() {
        let canvas = CanvasGeometry::new(800.0, 600.0, 0.0, 0.0);

        let above = canvas.drawing_to_canvas(Position::new(0.0, 0.25));

        assert_eq!(above.y, 200.0);
    }

    #[test]
    fn test_y_down_keeps_pixel_orientation() {
        let canvas = CanvasGeometry::new(100.0, 100.0, 0.0, 0.0).with_drawing_space(DrawingSpace {
            origin: Position::ORIGIN,
            pixels_per_unit: 10.0,
            y_axis: YAxis::Down,
        });

        assert_eq!(canvas.drawing_to_canvas(Position::new(1.0, 2.0)), Position::new(10.0, 20.0));
    }

    #[test]
    fn test_drawing_to_screen_adds_page_offset() {
        let canvas = CanvasGeometry::new(800.0, 600.0, 15.0, 40.0);

        assert_eq!(canvas.drawing_to_screen(Position::ORIGIN), Position::new(415.0, 340.0));
    }

    #[test]
    fn test_canvas_to_drawing_inverts_drawing_to_canvas() {
        let canvas = CanvasGeometry::new(640.0, 480.0, 0.0, 0.0);
        let p = Position::new(0.3125, -0.7);

        let back = canvas.canvas_to_drawing(canvas.drawing_to_canvas(p));

        assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_width_canvas_keeps_finite_scale() {
        let space = DrawingSpace::centred(0.0, 0.0);

        assert_eq!(space.pixels_per_unit, 0.5);
    }
}
