//! orbitcloud command line tool
//!
//! Builds the three-ring point cloud scene (plus reference axes) and hands
//! it to a file sink or to the logging summary sink.

mod cli;
mod config;
mod summary;

use anyhow::Context;
use config::{AppConfig, OutputTarget};
use orbitcloud_algorithms::orbit_scene;
use orbitcloud_core::SceneSink;
use summary::SummarySink;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "orbitcloud=info";

fn init_logging(directive: Option<&str>) {
    // an explicit --log-level wins over RUST_LOG
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: cli::Args) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(ref path) => config::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    args.apply(&mut config);
    config.validate().context("invalid settings")?;

    let scene = orbit_scene(config.generator, config.axes.params())
        .context("building scene")?;
    tracing::info!(
        markers = scene.len(),
        points = scene.total_points(),
        "scene generated"
    );

    let mut sink: Box<dyn SceneSink> = match config.output.resolve()? {
        OutputTarget::File { format, path } => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            tracing::info!("writing {format} scene to {}", path.display());
            orbitcloud_io::create_sink(format, path)
        }
        OutputTarget::Summary => Box::new(SummarySink::new()),
    };

    scene.present(&mut sink).context("presenting scene")?;
    Ok(())
}

fn main() {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!("orbitcloud v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
