// Shared tuning constants for the interaction layer.

// Cursor follower
pub const CURSOR_SMOOTHING: f64 = 0.18; // fraction of remaining distance closed per frame
pub const HALO_TRAIL: f64 = 0.6; // halo follows scale changes at a damped rate
pub const BASE_SCALE: f64 = 1.0;
pub const HOVER_SCALE: f64 = 1.8; // over links/buttons/inputs
pub const PRESS_SCALE: f64 = 0.85;

/// Elements that make the cursor grow while hovered.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, input, textarea, .btn, .nav-link, .project-link, .social-link";

// Ripple pool
pub const RIPPLE_POOL_SIZE: usize = 10;
pub const MOVE_RIPPLE_INTERVAL_MS: f64 = 90.0;
pub const MOVE_RIPPLE_SIZE: f64 = 26.0;
pub const MOVE_RIPPLE_DURATION_MS: f64 = 650.0;
pub const PRESS_RIPPLE_SIZE: f64 = 80.0;
pub const PRESS_RIPPLE_DURATION_MS: f64 = 900.0;

// Navigation
pub const NAV_CONDENSE_AT_PX: f64 = 50.0; // navbar switches to its scrolled style
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0; // look-ahead when picking the active section

// Hero
pub const TYPE_START_DELAY_MS: i32 = 1500;
pub const TYPE_CHAR_INTERVAL_MS: i32 = 100;
pub const CARET_BLINK_MS: i32 = 500;
pub const PARALLAX_SPEED: f64 = 0.5;
pub const CODE_CARD_FLOAT_PERIOD_MS: i32 = 4000;
pub const CODE_CARD_FLOAT_HOLD_MS: i32 = 2000;

// Loader
pub const LOADER_HOLD_MS: i32 = 1000;
pub const LOADER_FADE_MS: i32 = 500;

// Notifications
pub const TOAST_ENTER_DELAY_MS: i32 = 100;
pub const TOAST_VISIBLE_MS: i32 = 4000;
pub const TOAST_EXIT_MS: i32 = 300;

// Easter egg
pub const EASTER_EGG_HOLD_MS: i32 = 2000; // hue-rotate stays on this long

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
