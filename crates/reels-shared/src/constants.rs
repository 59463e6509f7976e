/// Application name
pub const APP_NAME: &str = "TheReelsApp";

/// Key the persisted session blob is stored under
pub const PERSIST_KEY: &str = "thereelsapp-data";

/// The one credential pair the mock login accepts
pub const DEMO_EMAIL: &str = "demo@thereelsapp.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Artificial latency of each mock service operation, in milliseconds
pub const LOGIN_DELAY_MS: u64 = 1000;
pub const SIGNUP_DELAY_MS: u64 = 1200;
pub const UPLOAD_DELAY_MS: u64 = 2000;
pub const PROCESS_DELAY_MS: u64 = 500;
pub const CONNECT_DELAY_MS: u64 = 1500;
pub const ANALYTICS_DELAY_MS: u64 = 800;

/// Progress value at which a simulated AI run is complete
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Tick interval and per-tick step bound of the creator-flow simulation
pub const CREATOR_TICK_MS: u64 = 1000;
pub const CREATOR_MAX_STEP: f64 = 15.0;

/// Tick interval and per-tick step bound of the tools-flow simulation
pub const TOOLS_TICK_MS: u64 = 1500;
pub const TOOLS_MAX_STEP: f64 = 20.0;

/// Number of `gradient-N` thumbnail variants
pub const THUMBNAIL_VARIANTS: u32 = 6;

/// Mock upload duration range: `MIN..MIN + SPAN` seconds
pub const MIN_DURATION_SECS: u32 = 30;
pub const DURATION_SPAN_SECS: u32 = 300;

/// Capacity of the store's snapshot broadcast channel
pub const STORE_CHANNEL_CAPACITY: usize = 64;
