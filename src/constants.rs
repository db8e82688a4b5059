pub const WINDOW_WIDTH: i32 = 960;              // Initial window width
pub const WINDOW_HEIGHT: i32 = 1080;            // Initial window height (portrait 3:4 viewport plus controls)
pub const FPS: u32 = 60;                        // Frames per second
pub const FADE_DURATION: f32 = 0.3;             // Fade-in of a newly loaded image (seconds)
pub const NOTICE_DURATION: f32 = 4.0;           // How long a load failure stays on screen (seconds)

pub const MIN_INTERVAL_MINUTES: f64 = 0.5;      // Shortest auto-play period (30 seconds)
pub const MAX_INTERVAL_MINUTES: f64 = 60.0;     // Longest auto-play period
pub const DEFAULT_INTERVAL_MINUTES: f64 = 1.0;  // Auto-play period on startup
pub const INTERVAL_STEP_MINUTES: f64 = 1.0;     // Settings panel increase/decrease step

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

pub const CONFIG_DIR_NAME: &str = "gallery";
pub const CONFIG_FILE_NAME: &str = "gallery.toml";
