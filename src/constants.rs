// Browser-side tuning constants. Geometry and motion defaults live in
// `core::constants`; these cover the camera, frame budget and DOM timings.

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;

// Frame cost above which a warning is logged (ms); half a 30 Hz interval
pub const FRAME_BUDGET_MS: f64 = 16.0;

// Timers (ms)
pub const RESIZE_DEBOUNCE_MS: i32 = 250;
pub const PRELOADER_HIDE_DELAY_MS: i32 = 100;
pub const NAV_SCROLL_THROTTLE_MS: i32 = 16;
pub const ORIENTATION_SETTLE_MS: i32 = 300;

// Below this viewport width a click outside the open menu closes it
pub const MOBILE_NAV_MAX_WIDTH: f64 = 768.0;

// Scroll reveal
pub const REVEAL_SELECTOR: &str =
    ".section-header, .stat-card, .problem-card, .feature-card, .pipeline-step";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: f64 = 30.0;

// Lazy sections
pub const LAZY_SECTION_SELECTOR: &str = "section:not(#home)";
pub const LAZY_SECTION_THRESHOLD: f64 = 0.2;
pub const LAZY_SECTION_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Custom cursor smoothing (fraction of the gap closed per frame)
pub const CURSOR_DOT_SMOOTHING: f32 = 0.1;
pub const CURSOR_FOLLOWER_SMOOTHING: f32 = 0.05;
pub const CURSOR_DOT_HALF_PX: f32 = 10.0;
pub const CURSOR_FOLLOWER_HALF_PX: f32 = 4.0;
pub const CURSOR_HOVER_SELECTOR: &str = "a, button, .btn, .nav-link, .card";
pub const CURSOR_REST_BACKGROUND: &str = "var(--gradient-accent)";
pub const CURSOR_HOVER_BACKGROUND: &str = "var(--gradient-secondary)";

pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
