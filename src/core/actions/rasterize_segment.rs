use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::data::position::Position;
use crate::core::data::segment::Segment;

const PIXEL_HALF_EXTENT: f64 = 0.49;

/// Clips `segment` to the rectangle `[min, max]` (Liang–Barsky). Returns
/// `None` when nothing of it lies inside.
fn clip(segment: Segment, min: Position, max: Position) -> Option<Segment> {
    let d = segment.to - segment.from;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    let edges = [
        (-d.x, segment.from.x - min.x),
        (d.x, max.x - segment.from.x),
        (-d.y, segment.from.y - min.y),
        (d.y, max.y - segment.from.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }

        if t0 > t1 {
            return None;
        }
    }

    Some(Segment::new(
        Position::new(segment.from.x + t0 * d.x, segment.from.y + t0 * d.y),
        Position::new(segment.from.x + t1 * d.x, segment.from.y + t1 * d.y),
    ))
}

/// Draws a segment given in canvas pixels into `buffer` with Bresenham's
/// algorithm. Parts outside the buffer, and segments with non-finite end
/// points, are dropped.
pub fn rasterize_segment(
    buffer: &mut PixelBuffer,
    segment: Segment,
    colour: Colour,
) -> Result<(), PixelBufferError> {
    let rect = buffer.pixel_rect();
    // pixel centres sit on integers; keep clipped end points rounding inside
    let min = Position::new(
        f64::from(rect.top_left().x) - PIXEL_HALF_EXTENT,
        f64::from(rect.top_left().y) - PIXEL_HALF_EXTENT,
    );
    let max = Position::new(
        f64::from(rect.bottom_right().x) + PIXEL_HALF_EXTENT,
        f64::from(rect.bottom_right().y) + PIXEL_HALF_EXTENT,
    );

    if !(segment.from.x.is_finite()
        && segment.from.y.is_finite()
        && segment.to.x.is_finite()
        && segment.to.y.is_finite())
    {
        return Ok(());
    }

    let Some(clipped) = clip(segment, min, max) else {
        return Ok(());
    };

    let (mut x0, mut y0) = (clipped.from.x.round() as i32, clipped.from.y.round() as i32);
    let (x1, y1) = (clipped.to.x.round() as i32, clipped.to.y.round() as i32);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        buffer.set_pixel(Point { x: x0, y: y0 }, colour)?;

        if x0 == x1 && y0 == y1 {
            return Ok(());
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
