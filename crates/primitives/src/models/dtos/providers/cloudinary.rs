use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CloudinaryUploadResponse {
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CloudinaryErrorResponse {
    pub error: CloudinaryErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct CloudinaryErrorDetail {
    pub message: String,
}
