//! Food image analysis
//!
//! The only classifier shipped is [`PlaceholderClassifier`], which does not
//! look at the image at all: it waits a fixed delay and returns a random
//! catalog food. Real recognition plugs in through [`FoodClassifier`].

use super::uploads::{ImageStore, ImageUpload};
use crate::error::ApiError;
use anyhow::Result;
use async_trait::async_trait;
use nutriai_shared::catalog::pick_random_food;
use nutriai_shared::FoodRecord;
use std::time::Duration;
use tracing::info;

/// Identifies the food shown in an image
#[async_trait]
pub trait FoodClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<FoodRecord>;
}

/// Random catalog pick standing in for a vision model
#[derive(Debug, Clone)]
pub struct PlaceholderClassifier {
    delay: Duration,
}

impl PlaceholderClassifier {
    /// `delay` simulates inference latency; it only suspends this request
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl FoodClassifier for PlaceholderClassifier {
    async fn classify(&self, _image: &[u8]) -> Result<FoodRecord> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(pick_random_food(&mut rand::thread_rng()))
    }
}

/// Outcome of analyzing one upload
#[derive(Debug, Clone)]
pub struct AnalyzedImage {
    pub food: FoodRecord,
    pub image_url: String,
}

/// Analysis service
pub struct AnalysisService;

impl AnalysisService {
    /// Validate, store and classify an uploaded image
    pub async fn analyze_upload(
        images: &dyn ImageStore,
        classifier: &dyn FoodClassifier,
        upload: ImageUpload,
        max_bytes: usize,
        public_path: &str,
    ) -> Result<AnalyzedImage, ApiError> {
        upload.validate(max_bytes)?;

        let file_name = images.save(&upload).await?;
        let food = classifier.classify(&upload.body).await?;

        info!(file_name = %file_name, food = %food.name, "Analyzed food image");

        Ok(AnalyzedImage {
            food,
            image_url: format!("{}/{}", public_path.trim_end_matches('/'), file_name),
        })
    }
}
