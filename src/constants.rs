pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TWEEN_TICK_MS: f32 = 16.0;            // Fixed tick period for counter animations
pub const STAT_TWEEN_DURATION_MS: f32 = 1000.0; // Duration of a stat count-up

pub const REVEAL_BASE_DELAY_MS: u32 = 200;    // First staged block of a slide
pub const REVEAL_STEP_DELAY_MS: u32 = 150;    // Stagger between staged blocks
