use crate::core::data::segment::Segment;

/// Receives segments as soon as they are drawn. Implemented by whatever
/// owns the canvas.
pub trait SegmentSink {
    fn draw_segment(&mut self, segment: Segment);
}

impl SegmentSink for Vec<Segment> {
    #[inline]
    fn draw_segment(&mut self, segment: Segment) {
        self.push(segment);
    }
}

impl<F> SegmentSink for F
where
    F: FnMut(Segment),
{
    #[inline]
    fn draw_segment(&mut self, segment: Segment) {
        self(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::position::Position;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let first = Segment::new(Position::ORIGIN, Position::new(1.0, 0.0));
        let second = Segment::new(Position::new(1.0, 0.0), Position::new(1.0, 1.0));
        let mut sink: Vec<Segment> = Vec::new();

        sink.draw_segment(first);
        sink.draw_segment(second);

        assert_eq!(sink, vec![first, second]);
    }

    #[test]
    fn test_closure_sink_receives_segments() {
        let mut total_length = 0.0;
        let mut sink = |segment: Segment| total_length += segment.length();

        sink.draw_segment(Segment::new(Position::ORIGIN, Position::new(3.0, 4.0)));

        assert_eq!(total_length, 5.0);
    }
}
