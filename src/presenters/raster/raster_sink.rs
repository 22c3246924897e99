use crate::core::actions::rasterize_segment::rasterize_segment;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::segment::Segment;
use crate::core::ports::segment_sink::SegmentSink;

/// Draws segments, given in canvas pixels, into an RGB buffer.
#[derive(Debug, Clone)]
pub struct RasterSink {
    buffer: PixelBuffer,
    line_colour: Colour,
    segments_drawn: usize,
    last_error: Option<PixelBufferError>,
}

impl RasterSink {
    /// Black lines on a white canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Ok(Self::with_colours(
            PixelRect::from_size(width, height)?,
            Colour::WHITE,
            Colour::BLACK,
        ))
    }

    #[must_use]
    pub fn with_colours(pixel_rect: PixelRect, background: Colour, line_colour: Colour) -> Self {
        Self {
            buffer: PixelBuffer::filled(pixel_rect, background),
            line_colour,
            segments_drawn: 0,
            last_error: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn segments_drawn(&self) -> usize {
        self.segments_drawn
    }

    /// The most recent rasterisation failure, if any segment failed.
    #[must_use]
    pub fn last_error(&self) -> Option<&PixelBufferError> {
        self.last_error.as_ref()
    }
}

impl SegmentSink for RasterSink {
    fn draw_segment(&mut self, segment: Segment) {
        match rasterize_segment(&mut self.buffer, segment, self.line_colour) {
            Ok(()) => self.segments_drawn += 1,
            Err(err) => self.last_error = Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::data::position::Position;

    #[test]
    fn test_new_sink_is_white() {
        let sink = RasterSink::new(3, 2).unwrap();

        assert!(sink.buffer().buffer().iter().all(|&b| b == 255));
        assert_eq!(sink.segments_drawn(), 0);
    }

    #[test]
    fn test_zero_sized_sink_is_rejected() {
        assert!(RasterSink::new(0, 10).is_err());
    }

    #[test]
    fn test_single_pixel_sink_draws_through_its_pixel() {
        let mut sink = RasterSink::new(1, 1).unwrap();

        sink.draw_segment(Segment::new(Position::new(-5.0, 0.0), Position::new(5.0, 0.0)));

        assert_eq!(sink.buffer().pixel(Point { x: 0, y: 0 }), Ok(Colour::BLACK));
        assert!(sink.last_error().is_none());
    }

    #[test]
    fn test_drawn_segment_turns_pixels_black() {
        let mut sink = RasterSink::new(8, 8).unwrap();

        sink.draw_segment(Segment::new(Position::new(0.0, 4.0), Position::new(7.0, 4.0)));

        for x in 0..8 {
            assert_eq!(sink.buffer().pixel(Point { x, y: 4 }), Ok(Colour::BLACK));
        }
        assert_eq!(sink.buffer().pixel(Point { x: 0, y: 0 }), Ok(Colour::WHITE));
        assert_eq!(sink.segments_drawn(), 1);
        assert!(sink.last_error().is_none());
    }

    #[test]
    fn test_off_canvas_segment_is_dropped_quietly() {
        let mut sink = RasterSink::new(8, 8).unwrap();

        sink.draw_segment(Segment::new(Position::new(-50.0, -50.0), Position::new(-20.0, -5.0)));

        assert!(sink.buffer().buffer().iter().all(|&b| b == 255));
        assert!(sink.last_error().is_none());
    }
}
