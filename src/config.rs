//! Service configuration
//!
//! Configuration is collected once at startup from environment variables
//! and passed down explicitly; nothing reads the environment afterwards.

use std::env;
use std::path::PathBuf;

/// Default listen port
const DEFAULT_PORT: u16 = 9000;

/// Default directory holding the per-level word lists
const DEFAULT_LEVEL_DATA_DIR: &str = "data";

/// Default lexicon file path
const DEFAULT_LEXICON_PATH: &str = "data/lexicon.jsonl";

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on (`PORT`)
    pub port: u16,
    /// Directory containing `a1.csv` … `c1.csv` (`LEVEL_DATA_DIR`)
    pub level_data_dir: PathBuf,
    /// Path of the JSON-lines lexicon file (`LEXICON_PATH`)
    pub lexicon_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("invalid PORT value '{}', using {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let level_data_dir = env::var("LEVEL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEVEL_DATA_DIR));

        let lexicon_path = env::var("LEXICON_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LEXICON_PATH));

        Self {
            port,
            level_data_dir,
            lexicon_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            level_data_dir: PathBuf::from(DEFAULT_LEVEL_DATA_DIR),
            lexicon_path: PathBuf::from(DEFAULT_LEXICON_PATH),
        }
    }
}
