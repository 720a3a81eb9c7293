
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const CONTACT_EMAIL: &str = "hello@harborline.estate";
pub const CONTACT_PHONE: &str = "+1 (415) 555-0142";

// Viewport watching
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";
pub const REVEAL_STAGGER_MS: u64 = 120;
pub const REVEAL_OFFSET_PX: f64 = 30.0;

// Slideshows
pub const HERO_INTERVAL_MS: u64 = 6000;
pub const TESTIMONIAL_INTERVAL_MS: u64 = 4000;
pub const SLIDE_SETTLE_MS: u64 = 1000;
pub const PROGRESS_TICK_MS: u64 = 50;

// Counters
pub const COUNTER_DURATION_MS: u64 = 2000;
pub const COUNTER_STEPS: u32 = 60;

// Pointer effects
pub const TILT_MAX_DEGREES: f64 = 8.0;
pub const MAGNETIC_STRENGTH: f64 = 0.3;
pub const PARALLAX_SPEED: f64 = 0.4;
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Navigation gets its solid background past this scroll offset
pub const NAV_SCROLL_THRESHOLD: i32 = 80;

pub const STATUS_DISMISS_MS: u32 = 5000;
