mod controllers;
mod core;
mod presenters;

pub use controllers::cli::args::{CliArgs, CliCommand, RenderArgs};
pub use controllers::cli::render_curve::{CliRenderController, frame_path};
pub use controllers::engine::engine::CurveEngine;
pub use controllers::engine::errors::EngineError;
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::expand_sequence::expand_sequence::{
    ExpandSequenceError, LengthPrediction, expand_sequence, expanded_len, predict_len,
};
pub use crate::core::actions::expand_sequence::expand_sequence_rayon::expand_sequence_rayon;
pub use crate::core::actions::prepare_curve::{PrepareCurveError, PreparedCurve, prepare_curve};
pub use crate::core::actions::rasterize_segment::rasterize_segment;
pub use crate::core::animation::driver::{AnimationHandle, AnimationPhase};
pub use crate::core::animation::slot::AnimationSlot;
pub use crate::core::config::{AdvanceStride, EngineConfig};
pub use crate::core::curves::curve_kinds::{FractalDescriptor, FractalKind, ParameterDescriptor, lookup};
pub use crate::core::curves::errors::CurveError;
pub use crate::core::curves::grammar::{Command, Grammar, GrammarError, StepScaling, Symbol};
pub use crate::core::data::canvas_geometry::{CanvasGeometry, DrawingSpace, YAxis};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::iteration_count::{IterationCount, IterationCountError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::position::Position;
pub use crate::core::data::segment::Segment;
pub use crate::core::ports::segment_sink::SegmentSink;
pub use crate::core::turtle::errors::TurtleError;
pub use crate::core::turtle::interpreter::{TurtleInterpreter, check_state_balance};
pub use crate::core::turtle::state::TurtleState;
pub use crate::core::util::screen_to_drawing_coords::screen_to_drawing;
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use presenters::raster::raster_sink::RasterSink;
