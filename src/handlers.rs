use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, multipart::MultipartRejection},
};
use uuid::Uuid;

use crate::{analysis::DeepfakeAnalyzer, error::ApiError, models::AnalysisResult};

/// Multipart field that carries the upload.
pub const IMAGE_FIELD: &str = "image";

/// `POST /analyze`
pub async fn analyze_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let upload_id = Uuid::new_v4();

    let image = match find_image(multipart).await {
        Some(bytes) => bytes,
        None => {
            tracing::info!("📭 Upload {} has no `{}` file", upload_id, IMAGE_FIELD);
            return Err(ApiError::MissingImage);
        }
    };

    tracing::info!("📥 Received image upload {} ({} bytes)", upload_id, image.len());

    match DeepfakeAnalyzer::new().analyze(upload_id, image).await {
        Ok(result) => {
            tracing::info!("✅ Analysis complete: {}", result.result);
            Ok(Json(result))
        }
        Err(e) => {
            tracing::error!("❌ Analysis failed for {}: {}", upload_id, e);
            Err(e)
        }
    }
}

/// Walk the form until a file part named [`IMAGE_FIELD`] turns up.
///
/// A body that is not multipart, or whose framing breaks anywhere up to the end
/// of the image part, counts as having no upload.
async fn find_image(multipart: Result<Multipart, MultipartRejection>) -> Option<Bytes> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::warn!("Request is not a readable multipart form: {}", e);
            return None;
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Malformed multipart body: {}", e);
                return None;
            }
        };

        // Plain text fields are not uploads, even under the right name.
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            continue;
        }

        return match field.bytes().await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("Image part ended early: {}", e);
                None
            }
        };
    }
}
