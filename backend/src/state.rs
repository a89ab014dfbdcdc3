//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The log store, image store and classifier are trait objects so a
//! persistent store or a real vision model can be swapped in without
//! touching the handlers.

use crate::config::AppConfig;
use crate::repositories::{InMemoryLogStore, LogIdGenerator, LogStore};
use crate::services::{FoodClassifier, ImageStore, LocalImageStore, PlaceholderClassifier};
use std::sync::Arc;

/// Shared application state
///
/// All fields are `Arc`s, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn LogStore>,
    pub ids: Arc<LogIdGenerator>,
    pub images: Arc<dyn ImageStore>,
    pub classifier: Arc<dyn FoodClassifier>,
}

impl AppState {
    /// Build the default wiring: in-memory logs, local-disk images and the
    /// placeholder classifier
    pub fn new(config: AppConfig) -> Self {
        let images = LocalImageStore::new(config.uploads.dir.clone());
        let classifier = PlaceholderClassifier::new(config.analysis.simulated_delay());

        Self::with_components(
            config,
            Arc::new(InMemoryLogStore::new()),
            Arc::new(images),
            Arc::new(classifier),
        )
    }

    /// Build state from explicit components
    pub fn with_components(
        config: AppConfig,
        store: Arc<dyn LogStore>,
        images: Arc<dyn ImageStore>,
        classifier: Arc<dyn FoodClassifier>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            ids: Arc::new(LogIdGenerator::new()),
            images,
            classifier,
        }
    }

    /// Get a reference to the log store
    #[inline]
    pub fn store(&self) -> &dyn LogStore {
        self.store.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
