//! Diamond Collector
//!
//! Steer the ship with the cursor, fly with W/S or the arrow keys and
//! collect all three diamonds. R restarts.
//!
//! This binary runs the game headless with a scripted pilot and a logging
//! render backend. Pass a `.toml` or `.ron` config path as the first
//! argument to override the defaults; set `RUST_LOG=debug` for detail.

mod assets;
mod config;
mod headless;
mod hud;

use arcade_core::foundation::logging;
use arcade_core::game::Game;
use arcade_core::input::Viewport;
use arcade_core::render::RenderResources;
use assets::GameAssets;
use config::GameConfig;
use headless::{Autopilot, LogBackend};
use std::path::PathBuf;

const MAX_FRAMES: u32 = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref())?;
    log::info!(
        "Starting {} ({}x{})",
        config.window.title,
        config.window.width,
        config.window.height
    );

    let mut resources = RenderResources::new();
    let assets = GameAssets::register(&config.assets, &mut resources);
    let viewport = Viewport::new(config.window.width as f32, config.window.height as f32);
    let mut game = Game::new(&config.gameplay, viewport, assets.ship, assets.pickup);

    let mut backend = LogBackend::default();
    let mut pilot = Autopilot::new();
    let (hud, frames) = headless::run(&mut game, &mut pilot, &mut backend, &resources, MAX_FRAMES)?;

    log::info!("Finished after {frames} frames, {} draw calls", backend.draw_calls());
    for line in hud::overlay_lines(&hud) {
        println!("{line}");
    }
    Ok(())
}
