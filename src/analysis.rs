use std::{io::Cursor, time::Instant};

use axum::body::Bytes;
use image::ImageReader;
use rand::Rng;
use uuid::Uuid;

use crate::{
    error::ApiError,
    models::{AnalysisResult, MAX_CONFIDENCE},
};

/// Scores uploaded images.
///
/// The image header is read only to prove it is one; the pixels never reach the
/// scorer, which draws a uniform integer in `0..=100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepfakeAnalyzer;

impl DeepfakeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Open the upload, then score and classify it.
    pub async fn analyze(&self, upload_id: Uuid, image: Bytes) -> Result<AnalysisResult, ApiError> {
        let start = Instant::now();

        tracing::info!("🔍 Opening upload {} ({} bytes)", upload_id, image.len());

        tokio::task::spawn_blocking(move || validate_image(&image))
            .await
            .map_err(|e| ApiError::Processing(e.to_string()))?
            .map_err(|e| ApiError::Processing(e.to_string()))?;

        let confidence = score(&mut rand::rng());
        let result = AnalysisResult::from_confidence(confidence);

        tracing::info!(
            "📊 Upload {} scored {} ({}) in {}ms",
            upload_id,
            result.confidence,
            result.result,
            start.elapsed().as_millis()
        );

        Ok(result)
    }
}

/// Succeeds when `bytes` open as an image in a format the `image` crate recognises.
///
/// Only the header is read; pixel data past it is never decoded.
pub fn validate_image(bytes: &[u8]) -> Result<(), image::ImageError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    tracing::debug!("Opened {}x{} image", width, height);
    Ok(())
}

/// Placeholder confidence score, independent of the image content.
pub fn score<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(0..=MAX_CONFIDENCE)
}
