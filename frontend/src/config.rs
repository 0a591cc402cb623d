#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Flask dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const ANALYZE_PATH: &str = "/analyze_prescription";

pub fn analyze_url() -> String {
    format!("{}{}", get_backend_url(), ANALYZE_PATH)
}

// Hero typing effect
pub const TYPING_START_DELAY_MS: u32 = 1_000;
pub const TYPING_INTERVAL_MS: u32 = 50;

// Hero banners move at half the scroll speed, upwards
pub const PARALLAX_RATE: f64 = -0.5;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
