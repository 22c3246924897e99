use std::path::PathBuf;

use clap::Parser;

/// Command line of the `fractal-curves` binary.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "fractal-curves", version, about = "Renders L-system turtle curves to PPM images.")]
pub struct CliArgs {
    /// Print the registered curve ids and names, then exit.
    #[arg(long, exclusive = true)]
    pub list: bool,

    /// Curve id, one of those printed by --list.
    #[arg(required_unless_present = "list")]
    pub curve: Option<String>,

    /// Number of rewriting generations.
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    pub iterations: Option<String>,

    /// Write numbered frames showing the curve being drawn.
    #[arg(long)]
    pub animate: bool,

    /// Number of frames written with --animate.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Image path; animation frames get a `_NNNN` suffix. Defaults to `output/<curve>.ppm`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Segments added per animation frame, instead of spreading the curve over --frames.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub stride_lines: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    pub curve: String,
    /// Left as text; the engine decides whether it is a valid count.
    pub iterations: String,
    pub animate: bool,
    pub frames: usize,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub stride_lines: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    List,
    Render(RenderArgs),
}

impl CliArgs {
    #[must_use]
    pub fn into_command(self) -> CliCommand {
        let (Some(curve), Some(iterations)) = (self.curve, self.iterations) else {
            return CliCommand::List;
        };
        let output = self
            .output
            .unwrap_or_else(|| PathBuf::from("output").join(format!("{}.ppm", curve)));

        CliCommand::Render(RenderArgs {
            curve,
            iterations,
            animate: self.animate,
            frames: self.frames as usize,
            width: self.width,
            height: self.height,
            output,
            stride_lines: self.stride_lines.map(|lines| lines as usize),
        })
    }
}
