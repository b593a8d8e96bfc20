use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::driver::TimingProfile;
use crate::ui::messages;

/// Remote-session settings. Only the login/navigation shim consumes these;
/// the reconciliation core is handed an already-authenticated driver and an
/// explicit input value instead of reading config.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_write_retries")]
    pub write_retries: u32,
}

fn default_write_retries() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            username: String::new(),
            password: String::new(),
            write_retries: default_write_retries(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("weekfill")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".weekfill")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("weekfill.conf")
    }

    /// Load configuration from file (defaults if not found), then apply
    /// environment overrides: WEEKFILL_ENDPOINT, WEEKFILL_USER, WEEKFILL_PWD.
    pub fn load() -> Self {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    messages::warning(format!("Could not parse {path:?}: {e}"));
                    Config::default()
                }),
                Err(e) => {
                    messages::warning(format!("Could not read {path:?}: {e}"));
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        if let Ok(v) = env::var("WEEKFILL_ENDPOINT") {
            cfg.endpoint = v;
        }
        if let Ok(v) = env::var("WEEKFILL_USER") {
            cfg.username = v;
        }
        if let Ok(v) = env::var("WEEKFILL_PWD") {
            cfg.password = v;
        }

        cfg
    }

    /// Timing profile a live driver should run with: the defaults, with the
    /// configured write-retry count applied.
    pub fn timing_profile(&self) -> TimingProfile {
        TimingProfile {
            write_retries: self.write_retries,
            ..TimingProfile::default()
        }
    }
}
