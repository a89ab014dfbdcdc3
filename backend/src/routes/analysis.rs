//! Food image analysis route

use crate::error::{ApiError, ApiResult};
use crate::services::analysis::AnalysisService;
use crate::services::uploads::{file_too_large, ImageUpload};
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::BytesMut;
use nutriai_shared::types::AnalyzeFoodResponse;
use tracing::warn;

/// Multipart field carrying the image
const IMAGE_FIELD: &str = "image";

/// POST /api/analyze-food - Store an uploaded image and identify the food
pub async fn analyze_food(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<AnalyzeFoodResponse>> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Analyze request without multipart body: {}", rejection);
        no_image()
    })?;

    let uploads = &state.config().uploads;
    let upload = read_image_field(&mut multipart, uploads.max_file_bytes)
        .await?
        .ok_or_else(no_image)?;

    let analyzed = AnalysisService::analyze_upload(
        state.images.as_ref(),
        state.classifier.as_ref(),
        upload,
        uploads.max_file_bytes,
        &uploads.public_path,
    )
    .await?;

    Ok(Json(AnalyzeFoodResponse {
        success: true,
        food: analyzed.food,
        image_url: analyzed.image_url,
    }))
}

fn no_image() -> ApiError {
    ApiError::Validation("No image file provided".to_string())
}

/// Length-limit failures surface as the upload size error
fn read_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        file_too_large()
    } else {
        ApiError::Upload(err.body_text())
    }
}

/// First file sent under the image field; other fields are skipped
///
/// The type is checked from the part headers before the body is read, and
/// reading stops as soon as the body grows past `max_bytes`.
async fn read_image_field(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> ApiResult<Option<ImageUpload>> {
    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let mut upload = ImageUpload {
            file_name: Some(file_name),
            content_type: field.content_type().map(str::to_string),
            body: Default::default(),
        };
        upload.validate_type()?;
        upload.body = read_capped(field, max_bytes).await?;

        return Ok(Some(upload));
    }
    Ok(None)
}

async fn read_capped(mut field: Field<'_>, max_bytes: usize) -> ApiResult<bytes::Bytes> {
    let mut body = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(read_error)? {
        if body.len() + chunk.len() > max_bytes {
            return Err(file_too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}
