//! Runtime configuration.
//!
//! Everything has a compiled-in default matching the original deployment;
//! the environment (optionally via a local `.env`) can override the endpoint,
//! the API key and where the data files live.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://lawfeat.com/aj/api/public/category/getAll";
const DEFAULT_API_KEY: &str = "acejobberpublicsecret";

pub const CATALOG_FILE: &str = "lawfeat_services.json";
pub const PROJECTION_FILE: &str = "extracted_services.json";
pub const POSTINGS_FILE: &str = "posted_jobs.json";
pub const LOG_FILE: &str = "jobber.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = env::var_os("JOBBER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            api_url: env::var("JOBBER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: env::var("JOBBER_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            request_timeout: Duration::from_secs(10),
            data_dir,
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    pub fn projection_path(&self) -> PathBuf {
        self.data_dir.join(PROJECTION_FILE)
    }

    pub fn postings_path(&self) -> PathBuf {
        self.data_dir.join(POSTINGS_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}
