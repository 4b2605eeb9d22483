use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:4000".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Loads the config file, falling back to defaults when absent.
    /// `SURVEY_API_BASE_URL` overrides whatever the file says.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = {
            let config_path = Self::config_path();
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path)?;
                toml::from_str(&content)?
            } else {
                Self::default()
            }
        };

        if let Ok(base_url) = std::env::var("SURVEY_API_BASE_URL") {
            if !base_url.is_empty() {
                config.api.base_url = base_url;
            }
        }

        Ok(config)
    }

    fn config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".config").join("survey-desktop").join("desktop.toml")
        } else {
            PathBuf::from("./survey-desktop.toml")
        }
    }
}
