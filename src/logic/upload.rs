//! Upload validation
//!
//! Runs before detection: file type, size, then the simulated "is this a
//! crop photo" check.

use std::time::Duration;

use thiserror::Error;

use crate::logic::detection::{Delay, RandomSource};

pub const ACCEPTED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const DEFAULT_CONTENT_CHECK_DELAY: Duration = Duration::from_millis(1500);

pub const CROP_KEYWORDS: [&str; 22] = [
    "crop", "plant", "leaf", "leaves", "corn", "wheat", "tomato", "potato",
    "rice", "soybean", "pest", "disease", "agriculture", "farm", "maize",
    "bean", "pea", "cotton", "sugarcane", "barley", "vegetable", "fruit",
];

/// Draw must exceed this when the file name looks crop-related
pub const KEYWORD_ACCEPT_THRESHOLD: f64 = 0.1;
/// Draw must exceed this otherwise
pub const DEFAULT_ACCEPT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. Please upload a JPG, PNG, or WebP image.")]
    UnsupportedFileType(String),

    #[error("File size too large. Maximum size is {} MB.", mib(.max))]
    FileTooLarge { size: u64, max: u64 },

    #[error("The provided image does not contain a recognizable crop or plant.")]
    NotACropImage,
}

fn mib(bytes: &u64) -> u64 {
    bytes / (1024 * 1024)
}

/// Static checks on the upload metadata
pub fn validate_file(content_type: &str, size_bytes: u64, max_bytes: u64) -> Result<(), UploadError> {
    let content_type = content_type.trim().to_ascii_lowercase();
    if !ACCEPTED_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(UploadError::UnsupportedFileType(content_type));
    }

    if size_bytes > max_bytes {
        return Err(UploadError::FileTooLarge {
            size: size_bytes,
            max: max_bytes,
        });
    }

    Ok(())
}

pub fn has_crop_keyword(file_name: &str) -> bool {
    let name = file_name.to_lowercase();
    CROP_KEYWORDS.iter().any(|k| name.contains(k))
}

/// Simulated content classifier. Keyword file names are accepted ~90% of
/// the time, anything else ~40%.
#[derive(Debug, Clone)]
pub struct ContentValidator<R, D> {
    rng: R,
    delay: D,
    latency: Duration,
}

impl<R: RandomSource, D: Delay> ContentValidator<R, D> {
    pub fn with_parts(rng: R, delay: D, latency: Duration) -> Self {
        Self { rng, delay, latency }
    }

    pub async fn check(&self, file_name: &str) -> Result<(), UploadError> {
        self.delay.wait(self.latency).await;

        let threshold = if has_crop_keyword(file_name) {
            KEYWORD_ACCEPT_THRESHOLD
        } else {
            DEFAULT_ACCEPT_THRESHOLD
        };

        if self.rng.next_f64() > threshold {
            Ok(())
        } else {
            tracing::info!("Content check rejected '{}'", file_name);
            Err(UploadError::NotACropImage)
        }
    }
}
