/// Lead relay that receives a copy of every inquiry.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/mgoowpgo";

pub const GITHUB_API_URL: &str = "https://api.github.com";

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Applied to every outbound request.
pub const REQUEST_TIMEOUT_MS: u32 = 20_000;

/// localStorage tops out around 5 MB per origin, and every thumbnail lives there.
pub const MAX_THUMBNAIL_BYTES: usize = 1_500_000;

/// Name of the array the legacy source-file format assigns the references to.
pub const REFERENCES_DECLARATION: &str = "INITIAL_REFERENCES";

pub const ADMIN_USERNAME: &str = "entervibecre";
pub const ADMIN_PASSWORD: &str = "PLMokn12#$";

/// Channels the stats banner aggregates over.
pub const TRACKED_CHANNELS: &[&str] = &[
    "@entervibecre",
    "@entervibe_shorts",
    "@vibe_review",
    "@daily_trend_vibe",
    "@vibe_documentary",
];

/// Baked in at build time; the stats banner shows baseline numbers without it.
pub fn gemini_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

pub fn gemini_model() -> &'static str {
    option_env!("GEMINI_MODEL").unwrap_or("gemini-2.0-flash")
}

pub mod keys {
    pub const SETTINGS: &str = "evc_settings";
    pub const SOLUTIONS: &str = "evc_solutions";
    pub const REFERENCES: &str = "evc_references";
    pub const INQUIRIES: &str = "evc_inquiries";
    // remember-me flag in localStorage
    pub const AUTH: &str = "evc_auth";
    // cleared when the browser session ends
    pub const ADMIN_SESSION: &str = "evc_admin_session";
    pub const SYNC_TARGET: &str = "evc_sync_target";
    pub const STATS: &str = "evc_stats";
    pub const STATS_DATE: &str = "evc_stats_date";
}
