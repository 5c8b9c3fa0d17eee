use clap::{Parser, ValueEnum};
use log::LevelFilter;
use spherepath::scene::ScenePreset;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Scene names accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    /// Diffuse and metal spheres on a yellow ground
    Materials,
    /// Hollow glass bubble next to diffuse and mirror spheres
    Glass,
    /// Random small spheres around three large ones
    Cover,
}

impl From<SceneArg> for ScenePreset {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::Materials => ScenePreset::MaterialShowcase,
            SceneArg::Glass => ScenePreset::GlassShowcase,
            SceneArg::Cover => ScenePreset::RandomSpheres,
        }
    }
}

/// Accepts `16:9` style ratios as well as plain decimals.
fn parse_aspect_ratio(s: &str) -> Result<f64, String> {
    let ratio = match s.split_once(':') {
        Some((w, h)) => {
            let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
            let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
            w / h
        }
        None => s.trim().parse().map_err(|e| format!("bad aspect ratio '{s}': {e}"))?,
    };
    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("aspect ratio must be positive, got '{s}'"))
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "spherepath")]
#[command(about = "A Monte Carlo path tracer for sphere scenes")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Aspect ratio as W:H or a decimal; the height is derived from it
    #[arg(long, default_value = "16:9", value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, short = 'd', default_value = "50")]
    pub max_depth: u32,

    /// Seed for all random sampling
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Scene to render
    #[arg(long, value_enum, default_value = "materials")]
    pub scene: SceneArg,

    /// Override the scene's vertical field of view (degrees)
    #[arg(long)]
    pub vfov: Option<f64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Output file path (.ppm, .png, .jpg or .bmp)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,
}
