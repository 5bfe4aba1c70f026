// src/config/consts.rs

// Input
pub const DEFAULT_DATA_FILE: &str = "ipl_data.csv";
pub const DATA_ENV_VAR: &str = "IPL_DATA";

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Display
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DATA_FILTERED: &str = "No data available for the selected filters.";
pub const NO_DATA_SOURCE: &str = "No data available. Please check your data source.";
pub const HOME_AWAY_UNDEFINED: &str =
    "Home and away performance cannot be compared for the selected filters.";
pub const TILE_MAX_CHARS: usize = 15;

// Window
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 800.0;
