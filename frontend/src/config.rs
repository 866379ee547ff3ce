
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Upper bound on any single call to the backend.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// How often the testimonial rotator moves on by itself.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

pub const BLOG_LIST_LIMIT: u32 = 6;

pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;
