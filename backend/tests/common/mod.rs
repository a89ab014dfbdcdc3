//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests. Every
//! [`TestApp`] gets its own in-memory log store and a temporary upload
//! directory, so tests never share state.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nutriai_backend::{
    config::AppConfig,
    repositories::InMemoryLogStore,
    routes,
    services::{LocalImageStore, PlaceholderClassifier},
    state::AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "nutriai-test-boundary";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub upload_dir: TempDir,
}

/// One part of a multipart request
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub body: &'a [u8],
}

impl<'a> Part<'a> {
    /// Image field as sent by the browser upload form
    pub fn image(file_name: &'a str, content_type: &'a str, body: &'a [u8]) -> Self {
        Self {
            name: "image",
            file_name: Some(file_name),
            content_type: Some(content_type),
            body,
        }
    }
}

impl TestApp {
    /// Create a new test application with no simulated analysis delay
    pub fn new() -> Self {
        Self::with_max_file_bytes(AppConfig::default().uploads.max_file_bytes)
    }

    pub fn with_max_file_bytes(max_file_bytes: usize) -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let mut config = AppConfig::default();
        config.server.port = 0;
        config.uploads.dir = upload_dir.path().to_path_buf();
        config.uploads.max_file_bytes = max_file_bytes;
        config.analysis.simulated_delay_ms = 0;

        let state = AppState::with_components(
            config,
            Arc::new(InMemoryLogStore::new()),
            Arc::new(LocalImageStore::new(upload_dir.path())),
            Arc::new(PlaceholderClassifier::new(Duration::ZERO)),
        );
        let app = routes::create_router(state);

        Self { app, upload_dir }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with a multipart/form-data body
    pub async fn post_multipart(&self, path: &str, parts: &[Part<'_>]) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        self.send(request).await
    }

    /// GET returning raw bytes, for served files
    pub async fn get_bytes(&self, path: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, body.to_vec())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Files currently in the upload directory
    pub fn uploaded_files(&self) -> Vec<String> {
        std::fs::read_dir(self.upload_dir.path())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let disposition = match part.file_name {
            Some(file_name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, file_name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name),
        };
        body.extend_from_slice(disposition.as_bytes());
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.body);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Parse a response body as JSON
pub fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("Response body is not JSON")
}
