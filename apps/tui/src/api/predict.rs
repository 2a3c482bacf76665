use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: String,
    pub confidence: f64,
}

impl PredictionResult {
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    prediction: String,
    confidence: f64,
}

pub fn parse_prediction(body: &str) -> Result<PredictionResult, ApiError> {
    let raw: RawPrediction = serde_json::from_str(body)?;
    if !raw.confidence.is_finite() {
        return Err(ApiError::malformed("confidence is not a number"));
    }
    Ok(PredictionResult {
        label: raw.prediction,
        confidence: raw.confidence.clamp(0.0, 1.0),
    })
}

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    url: String,
}

impl PredictClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Copies `path` to a scratch file and uploads that copy as `file`.
    pub async fn classify(&self, path: &Path) -> Result<PredictionResult, ApiError> {
        let (bytes, file_name) = stage_audio(path).await?;

        info!(file = %path.display(), %file_name, bytes = bytes.len(), "uploading audio");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("audio/wav")?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "prediction request failed");
            return Err(ApiError::from_status(status));
        }

        let body = response.text().await?;
        parse_prediction(&body)
    }
}

/// Returns the staged bytes and the scratch file's name.
async fn stage_audio(path: &Path) -> Result<(Vec<u8>, String), ApiError> {
    let file_error = |source| ApiError::File {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(file_error)?;
    if !metadata.is_file() {
        return Err(file_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    let staged = tempfile::Builder::new()
        .prefix("audio")
        .suffix(".wav")
        .tempfile()
        .map_err(file_error)?;
    let staged_path: PathBuf = staged.path().to_path_buf();

    tokio::fs::copy(path, &staged_path)
        .await
        .map_err(file_error)?;
    debug!(staged = %staged_path.display(), "audio staged");

    let file_name = staged_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("audio.wav")
        .to_string();
    let bytes = tokio::fs::read(&staged_path).await.map_err(file_error)?;
    Ok((bytes, file_name))
}
