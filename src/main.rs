use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod autoplay;
mod carousel;
mod config;
mod constants;
mod controls;
mod deck;
mod engine;
mod error;
mod gesture;
mod layout;
mod navigator;
mod ring;
mod slide;
mod state;
mod texture_loader;
mod transition;

use crate::config::ShowConfig;
use crate::constants::*;
use crate::engine::{CarouselEngine, Engine};

#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
#[command(about = "Full-window image carousel that loops endlessly in both directions")]
struct Args {
    /// Slide manifest (.toml) or a directory of images
    source: PathBuf,

    /// Autoplay interval in milliseconds, 0 or less disables autoplay
    #[arg(long, allow_negative_numbers = true)]
    autoplay_ms: Option<i64>,

    /// Duration of one slide transition in seconds
    #[arg(long)]
    transition_secs: Option<f32>,
}

fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {}", message), 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(5));
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = ShowConfig::load(&args.source)
        .with_context(|| format!("Failed to load slides from {}", args.source.display()))?;
    if let Some(autoplay_ms) = args.autoplay_ms {
        config.autoplay_ms = autoplay_ms;
    }
    if let Some(transition_secs) = args.transition_secs {
        config.transition_secs = transition_secs.max(0.0);
    }
    info!(
        slides = config.slides.len(),
        autoplay_ms = config.autoplay_ms,
        transition_secs = config.transition_secs,
        "loaded slide list"
    );

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Slide Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = CarouselEngine::new(&config);
    if let Err(e) = engine.initialize(&mut rl, &thread, config.slides) {
        show_error(&mut rl, &thread, &e.to_string());
        return Err(e).context("No slides could be shown");
    }

    let mut framebuffer = rl.load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        engine.render_frame(dt, &mut rl, &thread, &mut framebuffer);

        // Scale the fixed size framebuffer to the window (render textures are stored upside down)
        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE
        );
    }

    // Release timers, input capture and textures while the window still exists
    engine.unmount();
    Ok(())
}
