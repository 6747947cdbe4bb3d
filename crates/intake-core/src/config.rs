//! Configuration module
//!
//! Environment-driven configuration for the intake client and its development
//! server. `.env` files are honoured through `dotenvy`.

use std::env;
use std::time::Duration;

use crate::error::IntakeError;

/// Port used by the development server when none (or garbage) is configured
pub const DEFAULT_DEV_PORT: u16 = 5173;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_UPLOAD_PATH: &str = "/files";
const DEFAULT_RECORDS_PATH: &str = "/files";
const DEFAULT_UPLOAD_FIELD: &str = "files";
const DEFAULT_PREVIEW_CHARS: usize = 200;
const DEFAULT_PREVIEW_BASE: &str = "/previews";

#[derive(Clone, Debug)]
pub struct IntakeConfig {
    /// Base URL of the remote file-collection service
    pub api_url: String,
    /// Path receiving the multipart batch
    pub upload_path: String,
    /// Path listing stored records
    pub records_path: String,
    /// Multipart field every file is attached under
    pub upload_field: String,
    /// Number of characters kept from a text file
    pub preview_chars: usize,
    /// Prefix of allocated preview URLs
    pub preview_base: String,
    pub http_timeout: Option<Duration>,
    pub dev_port: u16,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            records_path: DEFAULT_RECORDS_PATH.to_string(),
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            preview_base: DEFAULT_PREVIEW_BASE.to_string(),
            http_timeout: None,
            dev_port: DEFAULT_DEV_PORT,
        }
    }
}

/// Resolve the development server port.
///
/// Absent, non-numeric and zero values all fall back to [`DEFAULT_DEV_PORT`].
pub fn parse_dev_port(raw: Option<&str>) -> u16 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u16>().ok())
        .filter(|&port| port > 0)
        .unwrap_or(DEFAULT_DEV_PORT)
}

/// Value of the first variable in `names` that is set.
fn first_set(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env::var(name).ok())
}

impl IntakeConfig {
    pub fn from_env() -> Result<Self, IntakeError> {
        dotenvy::dotenv().ok();

        let raw_port = first_set(&["INTAKE_DEV_PORT", "VITE_PORT"]);
        tracing::debug!(raw = ?raw_port, "Loaded dev server port from environment");

        let config = IntakeConfig {
            api_url: first_set(&["INTAKE_API_URL", "API_URL"])
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            upload_path: env::var("INTAKE_UPLOAD_PATH")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_PATH.to_string()),
            records_path: env::var("INTAKE_RECORDS_PATH")
                .unwrap_or_else(|_| DEFAULT_RECORDS_PATH.to_string()),
            upload_field: env::var("INTAKE_UPLOAD_FIELD")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FIELD.to_string()),
            preview_chars: env::var("INTAKE_PREVIEW_CHARS")
                .unwrap_or_else(|_| DEFAULT_PREVIEW_CHARS.to_string())
                .parse()
                .unwrap_or(DEFAULT_PREVIEW_CHARS),
            preview_base: env::var("INTAKE_PREVIEW_BASE")
                .unwrap_or_else(|_| DEFAULT_PREVIEW_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            http_timeout: env::var("INTAKE_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs),
            dev_port: parse_dev_port(raw_port.as_deref()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IntakeError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(IntakeError::Config(format!(
                "INTAKE_API_URL must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        for (name, path) in [
            ("INTAKE_UPLOAD_PATH", &self.upload_path),
            ("INTAKE_RECORDS_PATH", &self.records_path),
        ] {
            if !path.starts_with('/') {
                return Err(IntakeError::Config(format!(
                    "{} must start with '/', got '{}'",
                    name, path
                )));
            }
        }

        if !self.preview_base.starts_with('/') {
            return Err(IntakeError::Config(format!(
                "INTAKE_PREVIEW_BASE must start with '/', got '{}'",
                self.preview_base
            )));
        }

        if self.upload_field.trim().is_empty() {
            return Err(IntakeError::Config(
                "INTAKE_UPLOAD_FIELD cannot be empty".to_string(),
            ));
        }

        if self.preview_chars == 0 {
            return Err(IntakeError::Config(
                "INTAKE_PREVIEW_CHARS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL of the upload endpoint
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.api_url, self.upload_path)
    }

    /// Full URL of the record listing endpoint
    pub fn records_url(&self) -> String {
        format!("{}{}", self.api_url, self.records_path)
    }
}
