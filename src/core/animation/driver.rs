use crate::core::actions::prepare_curve::{PrepareCurveError, PreparedCurve, prepare_curve};
use crate::core::config::{AdvanceStride, EngineConfig};
use crate::core::curves::grammar::{Grammar, Symbol};
use crate::core::data::canvas_geometry::CanvasGeometry;
use crate::core::ports::segment_sink::SegmentSink;
use crate::core::turtle::interpreter::TurtleInterpreter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Nothing interpreted yet.
    Ready,
    Advancing,
    /// Every symbol interpreted; further advances are no-ops.
    Done,
}

/// Incremental rendering of one curve onto one canvas.
///
/// Each [`advance`](Self::advance) interprets the next few symbols and hands
/// the resulting segments, in canvas pixels, straight to the sink. The
/// handle owns its turtle and sequence; dropping it is all it takes to stop
/// the animation.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    interpreter: TurtleInterpreter,
    sequence: Vec<Symbol>,
    cursor: usize,
    canvas: CanvasGeometry,
    stride: AdvanceStride,
}

impl AnimationHandle {
    #[must_use]
    pub fn new(curve: PreparedCurve, canvas: CanvasGeometry, stride: AdvanceStride) -> Self {
        Self {
            interpreter: curve.interpreter(),
            sequence: curve.sequence,
            cursor: 0,
            canvas,
            stride,
        }
    }

    /// Prepares `grammar` and returns a handle in the Ready phase, stepping
    /// with the configured stride.
    pub fn start(
        grammar: &Grammar,
        iterations: u32,
        canvas: CanvasGeometry,
        config: &EngineConfig,
    ) -> Result<Self, PrepareCurveError> {
        let curve = prepare_curve(grammar, iterations, config)?;

        Ok(Self::new(curve, canvas, config.stride))
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        if self.cursor >= self.sequence.len() {
            AnimationPhase::Done
        } else if self.cursor == 0 {
            AnimationPhase::Ready
        } else {
            AnimationPhase::Advancing
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase() == AnimationPhase::Done
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }

    #[must_use]
    pub fn canvas(&self) -> &CanvasGeometry {
        &self.canvas
    }

    #[must_use]
    pub fn interpreter(&self) -> &TurtleInterpreter {
        &self.interpreter
    }

    /// Interprets the next stride of symbols. Returns `true` while symbols remain.
    pub fn advance<S: SegmentSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        match self.stride {
            AdvanceStride::Symbols(count) => {
                for _ in 0..count.max(1) {
                    if self.is_done() {
                        break;
                    }
                    self.interpret_next(sink);
                }
            }
            AdvanceStride::Segments(count) => {
                let mut drawn = 0;
                while drawn < count.max(1) && !self.is_done() {
                    if self.interpret_next(sink) {
                        drawn += 1;
                    }
                }
            }
        }

        !self.is_done()
    }

    /// Returns whether a segment was drawn.
    fn interpret_next<S: SegmentSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        let Some(&symbol) = self.sequence.get(self.cursor) else {
            return false;
        };
        self.cursor += 1;

        match self.interpreter.step(symbol) {
            Ok(Some(segment)) => {
                let canvas = self.canvas;
                sink.draw_segment(segment.map(|p| canvas.drawing_to_canvas(p)));
                true
            }
            Ok(None) => false,
            // prepared sequences are balance-checked; a failing pop ends the animation
            Err(_) => {
                self.cursor = self.sequence.len();
                false
            }
        }
    }
}
