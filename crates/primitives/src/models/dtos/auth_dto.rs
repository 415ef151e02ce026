use crate::error::ApiError;
use crate::utility::{is_blank, normalize_email, validate_password};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,

    #[serde(default)]
    #[schema(example = "alice@example.com")]
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    #[serde(default)]
    #[schema(example = "P@ssw0rd123", format = "password")]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl RegisterRequest {
    /// Missing fields are reported before any format check.
    pub fn ensure_present(&self) -> Result<(), ApiError> {
        if is_blank(Some(&self.name)) || is_blank(Some(&self.email)) || self.password.is_empty() {
            return Err(ApiError::BadRequest("Missing Details".into()));
        }
        Ok(())
    }

    pub fn normalize(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = normalize_email(&self.email);
        self
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "P@ssw0rd123", format = "password")]
    pub password: String,
}

impl LoginRequest {
    pub fn normalize(mut self) -> Self {
        self.email = normalize_email(&self.email);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

impl AuthResponse {
    pub fn new(token: String) -> Self {
        Self {
            success: true,
            token,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Appointment Booked")]
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// --- Health ---

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
