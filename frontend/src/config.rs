use log::Level;

/// Scroll offset (px) past which the navigation bar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Repeating counter ticks per second.
pub const TICK_RATE: f64 = 60.0;

pub const DEFAULT_COUNTER_DURATION_SECS: f64 = 2.0;

pub const ROW_STAGGER_SECS: f64 = 0.15;
pub const COLUMN_STAGGER_SECS: f64 = 0.1;
/// Delay between consecutive service cards.
pub const CARD_STAGGER_SECS: f64 = 0.15;

// Section transition durations
pub const HEADER_DURATION_SECS: f64 = 0.8;
pub const BRICK_DURATION_SECS: f64 = 0.7;
pub const CARD_DURATION_SECS: f64 = 0.7;

/// Viewport margins (px) used to pre-trigger entry animations. Negative shrinks the viewport.
pub const SECTION_MARGIN_PX: i32 = -100;
pub const BRICK_MARGIN_PX: i32 = -50;

/// Hero parallax: image scale over the whole hero region, copy opacity over its first 80%.
pub const HERO_SCALE_DOMAIN: (f64, f64) = (0.0, 1.0);
pub const HERO_SCALE_RANGE: (f64, f64) = (1.15, 1.0);
pub const HERO_OPACITY_DOMAIN: (f64, f64) = (0.0, 0.8);
pub const HERO_OPACITY_RANGE: (f64, f64) = (1.0, 0.0);

pub fn tick_interval_ms() -> u32 {
    (1000.0 / TICK_RATE) as u32
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose lifecycle logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
