pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: f32 = 1.6;     // Slide transition (seconds)
pub const DEFAULT_AUTOPLAY_MS: i64 = 4000;    // Autoplay interval (milliseconds)
pub const INNER_STRETCH: f32 = 2.0;           // scaleX of the inner image at the far end of a transition

pub const DRAG_TOLERANCE: f32 = 10.0;         // Pointer travel before a drag counts (pixels)

pub const CONTROL_SIZE: f32 = 48.0;           // Diameter of the prev/next buttons
pub const CONTROL_GAP: f32 = 16.0;
pub const CONTROL_MARGIN: f32 = 32.0;         // Distance from the bottom-right corner

pub const CAPTION_FONT_SIZE: i32 = 48;
