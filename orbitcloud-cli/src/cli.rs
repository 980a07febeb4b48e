use crate::config::{AppConfig, OutputKind};
use clap::Parser;
use std::path::PathBuf;

/// Generate the three-ring colored point cloud scene.
#[derive(Parser, Debug, Default)]
#[command(name = "orbitcloud", version, about)]
pub struct Args {
    /// Config file path.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Circle radius.
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Samples around the circle.
    #[arg(short = 's', long)]
    pub steps: Option<usize>,

    /// Opacity of every sphere, 0 to 1.
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Leave out the reference axes.
    #[arg(long)]
    pub no_axes: bool,

    /// Half-length of the reference axes.
    #[arg(long)]
    pub axes_length: Option<f64>,

    /// Output kind; inferred from --output when omitted.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputKind>,

    /// Output file path.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Overlay command line values on top of file configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(radius) = self.radius {
            config.generator.radius = radius;
        }
        if let Some(steps) = self.steps {
            config.generator.steps = steps;
        }
        if let Some(alpha) = self.alpha {
            config.generator.alpha = alpha;
        }
        if self.no_axes {
            config.axes.enabled = false;
        }
        if let Some(length) = self.axes_length {
            config.axes.length = length;
        }
        if let Some(format) = self.format {
            config.output.format = Some(format);
        }
        if let Some(ref path) = self.output {
            config.output.path = Some(path.clone());
            // a new path without a format should pick its own format
            if self.format.is_none() {
                config.output.format = None;
            }
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
