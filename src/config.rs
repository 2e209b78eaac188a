//! Runtime settings for recording registrations.
//!
//! The CLI fills [`AppConfig`] from flags, falling back to the
//! `IDVERIFY_REGISTRATIONS` and `IDVERIFY_UPLOAD_DIR` environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::VerifyError;

pub const DEFAULT_REGISTRATIONS_PATH: &str = "registrations.json";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON array file that registrations are appended to
    pub registrations_path: PathBuf,
    /// Directory uploaded card images are filed under
    pub upload_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            registrations_path: PathBuf::from(DEFAULT_REGISTRATIONS_PATH),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.registrations_path.as_os_str().is_empty() {
            return Err(VerifyError::Config("registrations path is empty".to_string()));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(VerifyError::Config("upload directory is empty".to_string()));
        }
        Ok(())
    }

    /// Where an uploaded image with the given stored name lives.
    pub fn upload_path(&self, stored_name: &str) -> PathBuf {
        self.upload_dir.join(stored_name)
    }
}
