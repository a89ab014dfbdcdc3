//! Typed HTTP client for the NutriAI API

use chrono::{DateTime, Utc};
use nutriai_shared::types::{
    AnalyzeFoodResponse, CalculateBmrRequest, CalculateBmrResponse, ChatHistoryResponse,
    ChatRequest, ChatResponse, DailyFoodResponse, DailyMotivationResponse, ErrorResponse,
    FoodLogsResponse, LogEntryResponse, LogFoodRequest, LogWorkoutRequest, WorkoutLogsResponse,
};
use nutriai_shared::{FoodLogEntry, WorkoutEntry, DEFAULT_USER_ID};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Where the API lives during local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

const FALLBACK_ERROR: &str = "API request failed";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `message` is the server's `error` field
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Health endpoint body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// NutriAI API client
#[derive(Debug, Clone)]
pub struct NutriApiClient {
    http_client: Client,
    base_url: String,
}

impl Default for NutriApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl NutriApiClient {
    /// `base_url` includes the `/api` prefix
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            error!("API Error: {}", e);
            ClientError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| FALLBACK_ERROR.to_string());
            error!(status = status.as_u16(), "API Error: {}", message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        debug!(endpoint, "GET");
        self.send(self.http_client.get(self.url(endpoint))).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(endpoint, "POST");
        self.send(self.http_client.post(self.url(endpoint)).json(body))
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get("/health").await
    }

    pub async fn calculate_bmr(
        &self,
        request: &CalculateBmrRequest,
    ) -> Result<CalculateBmrResponse, ClientError> {
        self.post("/calculate-bmr", request).await
    }

    /// Upload an image as the `image` form field
    pub async fn analyze_food_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalyzeFoodResponse, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        self.send(
            self.http_client
                .post(self.url("/analyze-food"))
                .multipart(form),
        )
        .await
    }

    /// Ask the coach; without a user id the exchange is filed as anonymous
    pub async fn chat(
        &self,
        message: &str,
        user_id: Option<&str>,
    ) -> Result<ChatResponse, ClientError> {
        let request = ChatRequest {
            message: Some(message.to_string()),
            user_id: Some(user_id.unwrap_or(DEFAULT_USER_ID).to_string()),
        };
        self.post("/chat", &request).await
    }

    pub async fn get_chat_history(&self, user_id: &str) -> Result<ChatHistoryResponse, ClientError> {
        self.get(&format!("/chat-history/{}", user_id)).await
    }

    pub async fn log_food(
        &self,
        request: &LogFoodRequest,
    ) -> Result<LogEntryResponse<FoodLogEntry>, ClientError> {
        self.post("/log-food", request).await
    }

    pub async fn log_workout(
        &self,
        request: &LogWorkoutRequest,
    ) -> Result<LogEntryResponse<WorkoutEntry>, ClientError> {
        self.post("/log-workout", request).await
    }

    pub async fn get_food_logs(&self, user_id: &str) -> Result<FoodLogsResponse, ClientError> {
        self.get(&format!("/food-logs/{}", user_id)).await
    }

    pub async fn get_workout_logs(&self, user_id: &str) -> Result<WorkoutLogsResponse, ClientError> {
        self.get(&format!("/workout-logs/{}", user_id)).await
    }

    pub async fn get_daily_food(&self) -> Result<DailyFoodResponse, ClientError> {
        self.get("/daily-food").await
    }

    pub async fn get_daily_motivation(&self) -> Result<DailyMotivationResponse, ClientError> {
        self.get("/daily-motivation").await
    }
}
