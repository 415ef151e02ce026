use chrono::Utc;
use prescripto_primitives::error::ApiError;
use prescripto_primitives::models::app_state::cloudinary_details::CloudinaryInfo;
use prescripto_primitives::models::dtos::profile_dto::ImageUpload;
use prescripto_primitives::models::dtos::providers::cloudinary::{
    CloudinaryErrorResponse, CloudinaryUploadResponse,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{error, warn};

#[derive(Clone)]
pub struct CloudinaryClient {
    http: Client,
    base_url: Url,
    cloud_name: String,
    api_key: String,
    api_secret: SecretString,
}

impl CloudinaryClient {
    pub fn new(http: Client, details: &CloudinaryInfo) -> Result<Self, ApiError> {
        let base_url = Url::parse(&details.api_url)
            .map_err(|_| ApiError::Internal("Invalid Cloudinary base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            cloud_name: details.cloud_name.clone(),
            api_key: details.api_key.clone(),
            api_secret: details.api_secret.clone(),
        })
    }

    /// Signs the upload parameters: every signed parameter in `key=value`
    /// form, sorted and joined by `&`, followed by the API secret.
    pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
        let mut sorted = params.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Uploads an image and returns its HTTPS URL.
    pub async fn upload_image(&self, image: ImageUpload) -> Result<String, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal("Invalid Cloudinary URL path".into()))?
            .pop_if_empty()
            .extend(["v1_1", self.cloud_name.as_str(), "image", "upload"]);

        let timestamp = Utc::now().timestamp().to_string();
        let signature = Self::sign(
            &[("timestamp", timestamp.as_str())],
            self.api_secret.expose_secret(),
        );

        let mut file = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            file = file
                .mime_str(content_type)
                .map_err(|_| ApiError::BadRequest("Unsupported image type".into()))?;
        }

        let form = Form::new()
            .part("file", file)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let resp = self
            .http
            .post(url)
            .timeout(Duration::from_secs(30))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach Cloudinary");
                ApiError::Internal("Image upload failed".into())
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<CloudinaryErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.chars().take(200).collect());
            warn!(
                http_status = status.as_u16(),
                cloudinary_message = %message,
                "Cloudinary upload failed"
            );
            return Err(ApiError::Internal("Image upload failed".into()));
        }

        serde_json::from_str::<CloudinaryUploadResponse>(&body)
            .map(|uploaded| uploaded.secure_url)
            .map_err(|e| {
                error!(error = %e, "Invalid Cloudinary upload response");
                ApiError::Internal("Image upload failed".into())
            })
    }
}
