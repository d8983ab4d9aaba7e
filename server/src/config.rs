pub const HOST: &str = "127.0.0.1";

/// The REST backend owns 8080.
pub const PORT: u16 = 3000;

/// Open the default browser on the app once the server is up.
pub const OPEN_BROWSER: bool = true;

pub const BROWSER_DELAY_MS: u64 = 500;
