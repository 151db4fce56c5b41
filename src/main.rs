use clap::Parser;
use log::{debug, error, info};

use raycanvas::config::{RenderSetup, SceneConfig};
use raycanvas::output::{save_image_as_png, send_image_to_tev};
use raycanvas::{Canvas, ConfigError};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Load the scene file (or the built-in showcase) and apply CLI overrides.
fn load_setup(args: &Args) -> Result<RenderSetup, ConfigError> {
    let config = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => {
            info!("No scene file given, using the built-in showcase scene");
            SceneConfig::showcase()?
        }
    };

    let mut setup = config.build()?;
    if args.width.is_some() || args.height.is_some() {
        setup.canvas = Canvas::new(
            args.width.unwrap_or(setup.canvas.width()),
            args.height.unwrap_or(setup.canvas.height()),
        )?;
    }
    if let Some(depth) = args.depth {
        setup.camera.max_depth = depth;
    }
    setup.camera.show_progress = !args.no_progress;

    Ok(setup)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Raycanvas - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let setup = match load_setup(&args) {
        Ok(setup) => setup,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let RenderSetup {
        scene,
        camera,
        canvas,
    } = setup;

    debug!(
        "{} spheres, {} triangles, {} lights, camera at {:?}",
        scene.spheres().count(),
        scene.triangles().count(),
        scene.lights().len(),
        camera.position
    );

    let mut image = canvas.image();
    camera.render(&scene, &canvas, &mut image);

    // Send image to TEV if requested
    if args.tev || args.tev_address.is_some() {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost");
        send_image_to_tev(&image, tev_address);
    }

    if let Err(e) = save_image_as_png(&image, &args.output) {
        error!("Failed to save image to {}: {}", args.output.display(), e);
        std::process::exit(1);
    }
}
