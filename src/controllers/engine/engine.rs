use crate::controllers::engine::errors::EngineError;
use crate::core::actions::prepare_curve::{PreparedCurve, prepare_curve};
use crate::core::animation::driver::AnimationHandle;
use crate::core::config::EngineConfig;
use crate::core::curves::curve_kinds::{FractalDescriptor, FractalKind, lookup};
use crate::core::curves::grammar::Grammar;
use crate::core::data::canvas_geometry::CanvasGeometry;
use crate::core::data::iteration_count::IterationCount;
use crate::core::data::position::Position;
use crate::core::data::segment::Segment;
use crate::core::ports::segment_sink::SegmentSink;
use crate::core::util::screen_to_drawing_coords::screen_to_drawing;

/// The engine boundary a UI layer talks to.
///
/// Every operation validates its whole request (id, iteration count, length
/// ceiling, grammar, state balance) before the first segment is produced.
/// Segments leave the engine in canvas-local pixels.
#[derive(Debug, Clone, Default)]
pub struct CurveEngine {
    config: EngineConfig,
}

impl CurveEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registry entries for every curve, in a stable order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<FractalDescriptor> {
        FractalKind::ALL.iter().map(|kind| kind.descriptor()).collect()
    }

    pub fn get_grammar(&self, fractal_id: &str) -> Result<Grammar, EngineError> {
        Ok(lookup(fractal_id)?)
    }

    fn prepare<I>(&self, fractal_id: &str, iterations: I) -> Result<PreparedCurve, EngineError>
    where
        I: TryInto<IterationCount>,
        EngineError: From<I::Error>,
    {
        let grammar = self.get_grammar(fractal_id)?;
        let iterations: IterationCount = iterations.try_into()?;

        Ok(prepare_curve(&grammar, iterations.get(), &self.config)?)
    }

    /// Draws the whole curve into `sink` and returns how many segments it drew.
    pub fn render_static_into<I, S>(
        &self,
        fractal_id: &str,
        iterations: I,
        canvas: &CanvasGeometry,
        sink: &mut S,
    ) -> Result<usize, EngineError>
    where
        I: TryInto<IterationCount>,
        EngineError: From<I::Error>,
        S: SegmentSink + ?Sized,
    {
        let curve = self.prepare(fractal_id, iterations)?;
        let mut interpreter = curve.interpreter();
        let mut drawn = 0;

        for &symbol in &curve.sequence {
            if let Some(segment) = interpreter.step(symbol)? {
                sink.draw_segment(segment.map(|p| canvas.drawing_to_canvas(p)));
                drawn += 1;
            }
        }

        Ok(drawn)
    }

    /// The whole curve as canvas-pixel segments, in drawing order.
    pub fn render_static<I>(
        &self,
        fractal_id: &str,
        iterations: I,
        canvas: &CanvasGeometry,
    ) -> Result<Vec<Segment>, EngineError>
    where
        I: TryInto<IterationCount>,
        EngineError: From<I::Error>,
    {
        let mut segments = Vec::new();
        self.render_static_into(fractal_id, iterations, canvas, &mut segments)?;

        Ok(segments)
    }

    /// A fresh handle in the Ready phase. Callers replace whatever handle they
    /// held for the same canvas; see `AnimationSlot`.
    pub fn start_animation<I>(
        &self,
        fractal_id: &str,
        iterations: I,
        canvas: &CanvasGeometry,
    ) -> Result<AnimationHandle, EngineError>
    where
        I: TryInto<IterationCount>,
        EngineError: From<I::Error>,
    {
        let curve = self.prepare(fractal_id, iterations)?;

        Ok(AnimationHandle::new(curve, *canvas, self.config.stride))
    }

    pub fn advance<S: SegmentSink + ?Sized>(&self, handle: &mut AnimationHandle, sink: &mut S) -> bool {
        handle.advance(sink)
    }

    #[must_use]
    pub fn screen_to_drawing(&self, canvas: &CanvasGeometry, x: f64, y: f64) -> (f64, f64) {
        let drawing = screen_to_drawing(canvas, Position::new(x, y));

        (drawing.x, drawing.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::expand_sequence::expand_sequence::expand_sequence;
    use crate::core::animation::driver::AnimationPhase;
    use crate::core::animation::slot::AnimationSlot;
    use crate::core::config::AdvanceStride;
    use crate::core::data::canvas_geometry::{DrawingSpace, YAxis};
    use crate::core::data::iteration_count::IterationCountError;
    use approx::assert_abs_diff_eq;

    fn canvas() -> CanvasGeometry {
        CanvasGeometry::new(800.0, 600.0, 0.0, 0.0)
    }

    #[test]
    fn test_descriptors_cover_registry() {
        let ids: Vec<&str> = CurveEngine::new().descriptors().iter().map(|d| d.id).collect();

        assert_eq!(
            ids,
            vec!["cesaro", "cesarotri", "dragon", "kochcurve", "levyccurve", "terdragon"]
        );
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let engine = CurveEngine::new();

        assert_eq!(
            engine.render_static("hilbert", 2u32, &canvas()),
            Err(EngineError::UnknownFractalKind {
                id: "hilbert".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_and_negative_iterations_are_rejected() {
        let engine = CurveEngine::new();

        assert_eq!(
            engine.render_static("dragon", "abc", &canvas()),
            Err(EngineError::InvalidIterationCount(IterationCountError::Malformed {
                input: "abc".to_string()
            }))
        );
        assert!(matches!(
            engine.render_static("dragon", -1i32, &canvas()),
            Err(EngineError::InvalidIterationCount(IterationCountError::Negative { .. }))
        ));
    }

    #[test]
    fn test_too_many_iterations_draws_nothing() {
        let engine = CurveEngine::new();
        let mut sink: Vec<Segment> = Vec::new();

        let result = engine.render_static_into("kochcurve", 40u32, &canvas(), &mut sink);

        assert!(matches!(result, Err(EngineError::IterationTooLarge { iterations: 40, .. })));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_koch_end_to_end() {
        let engine = CurveEngine::new();
        let grammar = engine.get_grammar("kochcurve").unwrap();

        let generation_1: String = expand_sequence(&grammar, 1, usize::MAX).unwrap().into_iter().collect();
        let generation_2: String = expand_sequence(&grammar, 2, usize::MAX).unwrap().into_iter().collect();
        assert_eq!(generation_1, "F+F--F+F");
        assert_eq!(generation_2, generation_1.replace('F', "F+F--F+F"));
        assert_eq!(generation_2.chars().filter(|&c| c == 'F').count(), 16);

        let segments = engine.render_static("kochcurve", "2", &canvas()).unwrap();

        assert_eq!(segments.len(), 16);
        assert_abs_diff_eq!(segments[0].from.x, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segments[0].from.y, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segments[15].to.x, 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segments[15].to.y, 300.0, epsilon = 1e-9);
        for segment in &segments {
            assert_abs_diff_eq!(segment.length(), 400.0 / 9.0, epsilon = 1e-9);
        }
        for pair in segments.windows(2) {
            assert_abs_diff_eq!(pair[0].to.x, pair[1].from.x, epsilon = 1e-9);
            assert_abs_diff_eq!(pair[0].to.y, pair[1].from.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_render_is_deterministic_for_every_curve() {
        let engine = CurveEngine::new();

        for descriptor in engine.descriptors() {
            for iterations in 0..5u32 {
                assert_eq!(
                    engine.render_static(descriptor.id, iterations, &canvas()),
                    engine.render_static(descriptor.id, iterations, &canvas()),
                    "{} at {}",
                    descriptor.id,
                    iterations
                );
            }
        }
    }

    #[test]
    fn test_animation_matches_static_render() {
        let engine = CurveEngine::new();
        let static_segments = engine.render_static("levyccurve", 5u32, &canvas()).unwrap();
        let mut handle = engine.start_animation("levyccurve", 5u32, &canvas()).unwrap();
        let mut animated: Vec<Segment> = Vec::new();

        assert_eq!(handle.phase(), AnimationPhase::Ready);
        while engine.advance(&mut handle, &mut animated) {}

        assert_eq!(animated, static_segments);
        assert!(!engine.advance(&mut handle, &mut animated));
    }

    #[test]
    fn test_configured_stride_reaches_handles() {
        let engine = CurveEngine::with_config(EngineConfig {
            stride: AdvanceStride::Segments(2),
            ..EngineConfig::default()
        });
        let mut handle = engine.start_animation("kochcurve", 1u32, &canvas()).unwrap();
        let mut sink: Vec<Segment> = Vec::new();

        engine.advance(&mut handle, &mut sink);

        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_restart_supersedes_running_animation() {
        let engine = CurveEngine::new();
        let mut slot = AnimationSlot::new();
        let mut sink: Vec<Segment> = Vec::new();

        slot.restart(engine.start_animation("dragon", 8u32, &canvas()).unwrap());
        slot.advance(&mut sink);
        slot.advance(&mut sink);
        let drawn_by_old = sink.len();

        slot.restart(engine.start_animation("kochcurve", 0u32, &canvas()).unwrap());
        while slot.advance(&mut sink) {}

        assert_eq!(sink.len(), drawn_by_old + 1);
        assert_eq!(
            sink.last().copied(),
            Some(Segment::new(Position::new(200.0, 300.0), Position::new(600.0, 300.0)))
        );
    }

    #[test]
    fn test_screen_to_drawing_inverts_page_offset() {
        let engine = CurveEngine::new();
        let geometry = CanvasGeometry::new(100.0, 100.0, 10.0, 20.0).with_drawing_space(DrawingSpace {
            origin: Position::ORIGIN,
            pixels_per_unit: 1.0,
            y_axis: YAxis::Down,
        });

        assert_eq!(engine.screen_to_drawing(&geometry, 10.0, 20.0), (0.0, 0.0));
        assert_eq!(engine.screen_to_drawing(&geometry, -5.0, 120.0), (-15.0, 100.0));
    }
}
