#[cfg(debug_assertions)]
pub fn get_collector_url() -> &'static str {
    "http://localhost:8787"  // wrangler dev default when running the worker locally
}

#[cfg(not(debug_assertions))]
pub fn get_collector_url() -> &'static str {
    "https://contact-form-handler.shamuonhennawi05.workers.dev"
}

/// Where people can still reach us when the form itself fails.
pub const FALLBACK_CONTACT_EMAIL: &str = "hello@pythonwebcourse.com";

// Navbar
pub const NAVBAR_ELEVATE_AFTER_PX: f64 = 100.0;
pub const NAVBAR_HIDE_AFTER_PX: f64 = 200.0;
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

// Timings (milliseconds)
pub const FOCUS_FIELD_DELAY_MS: u32 = 800;
pub const MODAL_BACKDROP_ARM_MS: u32 = 100;
pub const FAQ_RESIZE_DEBOUNCE_MS: u32 = 250;
pub const SCROLL_DEPTH_DEBOUNCE_MS: u32 = 500;
pub const TIME_ON_PAGE_TICK_MS: u32 = 1_000;

pub const SCROLL_DEPTH_MARKERS: [u32; 5] = [25, 50, 75, 90, 100];
pub const TIME_ON_PAGE_REPORT_EVERY_SECS: u64 = 30;

// Scroll reveal
pub const REVEAL_SELECTORS: &str = ".week-card, .pricing-card, .testimonial-card, .problem-card, .feature";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
