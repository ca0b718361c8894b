use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod constants;
mod deck;
mod input;
mod navigation;
mod progress;
mod render;
mod reveal;
mod session;
mod slides;
mod tween;

use crate::constants::*;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "presenter", version, about = "Keyboard and pointer driven slide deck")]
struct Args {
    /// Slide to start on (0-based, clamped to the deck)
    #[arg(long, default_value_t = 0)]
    start: i64,

    /// Open fullscreen instead of windowed
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let deck = slides::deck();
    info!("deck loaded: {} slides", deck.len());

    // --- Window & framebuffer ---
    let mut builder = raylib::init();
    builder
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("AI Coding @ Palfinger")
        .vsync()
        .resizable();
    if args.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!(e))
        .context("Failed to create render texture")?;

    let mut session = Session::new(deck);
    if args.start != 0 {
        session.jump_to(args.start as isize);
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt_ms = rl.get_frame_time() * 1000.0;

        // 1. Translate this frame's input into at most one navigation action
        let hit_markers = progress::markers(session.current_index(), session.total());
        let back_control = (session.current_index() > 0).then(render::back_control_area);
        if let Some(action) = input::poll(&rl, &hit_markers, back_control) {
            session.handle(action);
        }

        // 2. Advance the mounted slide's reveal schedule and counters
        session.update(dt_ms);

        // 3. Render into the fixed size framebuffer
        let markers = progress::markers(session.current_index(), session.total());
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            render::draw_slide(&mut d, &session);
            render::draw_chrome(&mut d, &session, &markers);
        });

        // Stretch the framebuffer over the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(
                0.0,
                0.0,
                framebuffer.width() as f32,
                -(framebuffer.height() as f32),
            ),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
