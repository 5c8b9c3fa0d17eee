use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spherepath::camera::{Camera, CameraSettings};
use spherepath::output::save_image;
use spherepath::render::{RenderSettings, Renderer};
use spherepath::scene::ScenePreset;
use spherepath::RenderError;

fn run(args: &Args) -> Result<(), RenderError> {
    let settings = RenderSettings {
        image_width: args.width,
        aspect_ratio: args.aspect_ratio,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        seed: args.seed,
        show_progress: !args.quiet,
    };
    settings.validate()?;

    let preset = ScenePreset::from(args.scene);
    let world = preset.build(args.seed);
    info!("Scene {:?}: {} spheres", preset, world.len());

    let camera_settings = CameraSettings {
        vfov: args.vfov.unwrap_or(preset.camera().vfov),
        ..preset.camera()
    };
    let camera = Camera::new(&camera_settings, settings.aspect_ratio)?;

    let renderer = Renderer::new(settings, camera, &world)?;
    let image = renderer.render();
    save_image(&image, &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("SpherePath {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
