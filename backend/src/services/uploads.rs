//! Uploaded food image handling

use crate::error::ApiError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Accepted image types, matched against both the file extension and the
/// MIME type
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// An image received from a multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl ImageUpload {
    /// Lower-cased extension of the client-side file name, without the dot
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    /// Check the declared type; needs only the part headers
    pub fn validate_type(&self) -> Result<(), ApiError> {
        let matches_allowed =
            |value: &str| ALLOWED_IMAGE_TYPES.iter().any(|allowed| value.contains(allowed));

        let ext_ok = self.extension().as_deref().is_some_and(matches_allowed);
        let mime_ok = self.content_type.as_deref().is_some_and(matches_allowed);
        if !(ext_ok && mime_ok) {
            return Err(ApiError::Upload("Only image files are allowed!".to_string()));
        }
        Ok(())
    }

    /// Check type and size before anything is written
    pub fn validate(&self, max_bytes: usize) -> Result<(), ApiError> {
        self.validate_type()?;

        if self.body.len() > max_bytes {
            return Err(file_too_large());
        }

        Ok(())
    }
}

pub fn file_too_large() -> ApiError {
    ApiError::Upload("File too large".to_string())
}

/// Where accepted images are kept
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the image and return the file name it is served under
    async fn save(&self, upload: &ImageUpload) -> Result<String>;
}

/// Writes images to a directory on local disk
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `food-<unix millis>-<random>.<ext>`
    fn unique_file_name(extension: Option<&str>) -> String {
        let suffix = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            rand::thread_rng().gen_range(0..1_000_000_000u32)
        );
        match extension {
            Some(ext) => format!("food-{}.{}", suffix, ext),
            None => format!("food-{}", suffix),
        }
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, upload: &ImageUpload) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create upload dir {}", self.dir.display()))?;

        let file_name = Self::unique_file_name(upload.extension().as_deref());
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, &upload.body)
            .await
            .with_context(|| format!("write upload {}", path.display()))?;

        debug!(file_name = %file_name, bytes = upload.body.len(), "Stored uploaded image");
        Ok(file_name)
    }
}
