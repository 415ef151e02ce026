use crate::error::ApiError;
use crate::models::entities::address::Address;
use crate::models::entities::user::User;
use crate::utility::is_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user as the client sees it; the password hash never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: String,
    pub phone: String,
    pub address: Address,
    pub gender: String,
    pub dob: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
            phone: user.phone.clone(),
            address: Address::from_value(&user.address),
            gender: user.gender.clone(),
            dob: user.dob.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(rename = "userData")]
    pub user_data: UserProfile,
}

/// An uploaded file pulled out of a multipart body.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Text parts of the profile form, gathered by the handler.
#[derive(Debug, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub image: Option<ImageUpload>,
}

impl UpdateProfileRequest {
    pub fn ensure_present(&self) -> Result<(), ApiError> {
        let required = [&self.name, &self.phone, &self.dob, &self.gender];
        if required.iter().any(|field| is_blank(field.as_deref())) {
            return Err(ApiError::BadRequest("Data Missing".into()));
        }
        Ok(())
    }

    /// `address` travels as a JSON string; absent or empty means an empty
    /// address.
    pub fn parsed_address(&self) -> Result<Address, ApiError> {
        match self.address.as_deref().map(str::trim) {
            None | Some("") => Ok(Address::default()),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|_| ApiError::BadRequest("Invalid address".into())),
        }
    }
}

/// OpenAPI shape of the multipart profile form.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UpdateProfileForm {
    pub name: String,
    pub phone: String,
    #[schema(example = r#"{"line1":"57th Cross","line2":"Richmond"}"#)]
    pub address: Option<String>,
    pub dob: String,
    pub gender: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
