use crate::core::data::canvas_geometry::CanvasGeometry;
use crate::core::data::position::Position;

/// Maps a page (screen) pixel position onto the turtle's drawing space.
///
/// Positions outside the canvas are mapped like any other; pointer positions
/// beyond the drawing area are legitimate.
#[must_use]
pub fn screen_to_drawing(canvas: &CanvasGeometry, screen: Position) -> Position {
    canvas.canvas_to_drawing(screen - canvas.offset)
}
