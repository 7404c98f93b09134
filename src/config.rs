#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

/// Navbar switches to its compact style past this many pixels.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
/// Height of the fixed navbar, subtracted from anchor scroll targets.
pub const NAV_HEIGHT: i32 = 80;
/// Look-ahead used when deciding which section is "current".
pub const ACTIVE_SECTION_LOOKAHEAD: f64 = 100.0;

pub const BANNER_HIDE_MS: u32 = 5_000;

pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_VISIBLE_THRESHOLD: f64 = 0.5;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const PARALLAX_FACTOR: f64 = 0.5;
