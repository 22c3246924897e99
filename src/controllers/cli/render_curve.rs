use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::controllers::cli::args::RenderArgs;
use crate::controllers::engine::engine::CurveEngine;
use crate::controllers::engine::errors::EngineError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::expand_sequence::expand_sequence::expanded_len;
use crate::core::animation::slot::AnimationSlot;
use crate::core::config::{AdvanceStride, EngineConfig};
use crate::core::data::canvas_geometry::CanvasGeometry;
use crate::core::data::iteration_count::IterationCount;
use crate::presenters::raster::raster_sink::RasterSink;

/// `output/dragon.ppm`, frame 3 -> `output/dragon_0003.ppm`
#[must_use]
pub fn frame_path(output: &Path, frame: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());

    output.with_file_name(format!("{}_{:04}.ppm", stem, frame))
}

/// Renders curves to image files for the command line.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: EngineConfig,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: EngineConfig) -> Self {
        Self { presenter, config }
    }

    /// One `id<TAB>display name` line per registered curve.
    pub fn list(&self) -> Vec<String> {
        CurveEngine::with_config(self.config)
            .descriptors()
            .iter()
            .map(|descriptor| format!("{}\t{}", descriptor.id, descriptor.display_name))
            .collect()
    }

    /// Writes the static render or the animation frames, returning the paths written.
    pub fn run(&self, args: &RenderArgs) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        if args.animate {
            self.render_frames(args)
        } else {
            Ok(vec![self.render_static(args)?])
        }
    }

    pub fn render_static(&self, args: &RenderArgs) -> Result<PathBuf, Box<dyn Error>> {
        let engine = CurveEngine::with_config(self.config);
        let canvas = CanvasGeometry::new(f64::from(args.width), f64::from(args.height), 0.0, 0.0);
        let mut sink = RasterSink::new(args.width, args.height)?;

        log::info!(
            "Rendering {} with {} iterations at {}x{}",
            args.curve,
            args.iterations,
            args.width,
            args.height
        );

        let start = Instant::now();
        let drawn = engine.render_static_into(&args.curve, args.iterations.as_str(), &canvas, &mut sink)?;
        log::debug!("Drew {} segments in {:?}", drawn, start.elapsed());

        if let Some(err) = sink.last_error() {
            return Err(err.clone().into());
        }

        self.presenter.present(sink.buffer(), &args.output)?;
        log::info!("Saved to {}", args.output.display());

        Ok(args.output.clone())
    }

    fn animation_stride(&self, args: &RenderArgs) -> Result<AdvanceStride, EngineError> {
        if let Some(lines) = args.stride_lines {
            return Ok(AdvanceStride::Segments(lines));
        }

        let grammar = CurveEngine::with_config(self.config).get_grammar(&args.curve)?;
        let iterations: IterationCount = args.iterations.parse()?;
        let len = expanded_len(&grammar, iterations.get());
        let frames = args.frames.max(1) as u128;
        let per_frame = len.div_ceil(frames).max(1);

        Ok(AdvanceStride::Symbols(usize::try_from(per_frame).unwrap_or(usize::MAX)))
    }

    /// Writes one frame per `advance` until the curve is complete or the
    /// frame budget is spent. Without `--stride-lines` the symbols are spread
    /// evenly over the frames, so the last frame shows the finished curve.
    pub fn render_frames(&self, args: &RenderArgs) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let stride = self.animation_stride(args)?;
        let engine = CurveEngine::with_config(EngineConfig { stride, ..self.config });
        let canvas = CanvasGeometry::new(f64::from(args.width), f64::from(args.height), 0.0, 0.0);
        let mut sink = RasterSink::new(args.width, args.height)?;
        let mut slot = AnimationSlot::new();

        let handle = engine.start_animation(&args.curve, args.iterations.as_str(), &canvas)?;
        log::info!(
            "Animating {} with {} iterations: {} symbols, {:?} per frame",
            args.curve,
            args.iterations,
            handle.len(),
            stride
        );
        slot.restart(handle);

        let mut written = Vec::new();
        for frame in 1..=args.frames {
            let more = slot.advance(&mut sink);
            if let Some(err) = sink.last_error() {
                return Err(err.clone().into());
            }

            let path = frame_path(&args.output, frame);
            self.presenter.present(sink.buffer(), &path)?;
            log::debug!("Saved frame {} to {}", frame, path.display());
            written.push(path);

            if !more {
                break;
            }
        }

        log::info!("Saved {} frames", written.len());

        Ok(written)
    }
}
