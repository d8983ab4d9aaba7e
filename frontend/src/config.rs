/// Root of the REST backend. Every data-access call is relative to it.
pub const API_BASE_URL: &str = "http://localhost:8080";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 5_000;
