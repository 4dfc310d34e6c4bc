use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One scrapeable restaurant: display name plus its menu page URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_db_path() -> PathBuf {
    PathBuf::from("lunchbox.db")
}

/// Startup configuration. Loaded once and passed by reference into every
/// component; nothing in the core mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub places: Vec<Place>,
    pub groups: Vec<String>,
    pub times: Vec<String>,
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            places: Vec::new(),
            groups: vec!["default".into()],
            times: vec!["11:00".into(), "11:30".into(), "12:00".into(), "12:30".into()],
            db_path: default_db_path(),
            fetch_timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn known_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn known_time(&self, time: &str) -> bool {
        self.times.iter().any(|t| t == time)
    }

    pub fn known_place(&self, name: &str) -> bool {
        self.places.iter().any(|p| p.name == name)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))
    }
}
