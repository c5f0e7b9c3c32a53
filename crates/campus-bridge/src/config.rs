use serde::{Deserialize, Serialize};

/// Configuration for reaching the backend HTTP API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash. When unset,
    /// the backend serves built-in seeded data instead of fetching.
    pub base_url: Option<String>,
}

/// Identity of the signed-in administrator shown in the profile menu.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Display name rendered next to the avatar.
    pub display_name: String,
    /// Account email rendered in the profile menu header.
    pub email: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: "John Doe".to_string(),
            email: "admin@school.edu".to_string(),
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Configuration for the backend API endpoint.
    pub api_config: ApiConfig,
    /// Identity of the signed-in administrator.
    pub profile_config: ProfileConfig,
}
