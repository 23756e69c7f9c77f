//! Text-mode slideshow demo
//!
//! Drives the engine through three slides with scripted input: a fade
//! to the bullet slide, a push to the outro, then a scripted escape.

mod backend;
mod slides;

use backend::{ScriptedInput, TextGridRenderer};
use stagecraft::input::KeyCode;
use stagecraft::{GameLoop, GameLoopConfig};
use std::time::Duration;

// Safety net in case the scripted escape never lands.
const MAX_ITERATIONS: u32 = 50_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting slideshow demo");

    let mut game_loop = GameLoop::new(GameLoopConfig {
        render_step: Duration::from_millis(100),
        sleep_time: Duration::from_millis(5),
    });
    slides::build_scenes(&mut game_loop.scenes)?;
    game_loop.scenes.switch_to("title")?;

    let mut renderer = TextGridRenderer::new(64, 18);
    let mut input = ScriptedInput::new([
        (Duration::from_millis(800), KeyCode::Space),
        (Duration::from_millis(2000), KeyCode::Space),
        (Duration::from_millis(3200), KeyCode::Escape),
    ]);

    let mut budget = MAX_ITERATIONS;
    let result = game_loop.run_while(&mut renderer, &mut input, || {
        if budget == 0 {
            return false;
        }
        budget -= 1;
        true
    });

    match result {
        Ok(()) => {
            log::info!("Slideshow finished");
            Ok(())
        }
        Err(e) => {
            log::error!("Slideshow failed: {}", e);
            Err(e.into())
        }
    }
}
