use std::{env, path::PathBuf};

use dirs;
use url::Url;

/// Default base URL for the AKM API
pub const DEFAULT_API_BASE_URL: &str = "https://api.7parkdata.com/";

/// Portal where AKM API client credentials are issued
pub const AKM_KEY_PORTAL_URL: &str = "https://account.7parkdata.com/#/akm_key/";

/// Default configuration directory name under user's config directory
pub const CONFIG_DIR_NAME: &str = "akm";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config";

/// Width of the dash delimiter printed around handler output
pub const DELIMITER_WIDTH: usize = 40;

/// Parsed form of [`DEFAULT_API_BASE_URL`]
pub fn default_api_base_url() -> Url {
    Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is a valid URL")
}

/// Get the config file path
/// Respects AKM_CONFIG_FILE environment variable if set
pub fn get_config_path() -> Option<PathBuf> {
    // Check environment variable first
    if let Ok(path) = env::var("AKM_CONFIG_FILE") {
        return Some(PathBuf::from(path));
    }

    // Always use home directory with .config, regardless of platform
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    })
}
