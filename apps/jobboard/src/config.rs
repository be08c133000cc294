use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare invocation works against a
/// backend on localhost.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job-board backend.
    pub api_url: String,
    /// Path of the local JSON store (profile, applied jobs).
    pub data_file: PathBuf,
    /// Author name stamped onto comments posted from this machine.
    pub author: String,
    pub rust_log: String,
}

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_DATA_FILE: &str = "jobboard-data.json";
const DEFAULT_AUTHOR: &str = "Current User";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: env_or("JOBBOARD_API_URL", DEFAULT_API_URL),
            data_file: PathBuf::from(env_or("JOBBOARD_DATA_FILE", DEFAULT_DATA_FILE)),
            author: env_or("JOBBOARD_AUTHOR", DEFAULT_AUTHOR),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
