use axum::extract::multipart::MultipartRejection;
use axum::extract::{Extension, Multipart, State};
use axum::Json;
use prescripto_core::services::profile_service::ProfileService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ApiError, ErrorBody, SoftError};
use prescripto_primitives::models::dtos::auth_dto::MessageResponse;
use prescripto_primitives::models::dtos::profile_dto::{
    ImageUpload, UpdateProfileForm, UpdateProfileRequest,
};
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    post,
    path = "/api/user/update-profile",
    request_body(content = UpdateProfileForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "`Profile Updated`, or `success: false` when a field is missing", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error or image upload failure", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "User"
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, SoftError> {
    let user_id = claims.user_id()?;
    let payload = read_form(multipart?).await?;

    ProfileService::update_profile(&state, user_id, payload).await?;

    Ok(Json(MessageResponse::ok("Profile Updated")))
}

async fn read_form(mut multipart: Multipart) -> Result<UpdateProfileRequest, ApiError> {
    let mut form = UpdateProfileRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid form data: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "image" {
            let file_name = field.file_name().unwrap_or("profile").to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Invalid image upload: {}", e)))?;

            if !bytes.is_empty() {
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid form data: {}", e)))?;

        match name.as_str() {
            "name" => form.name = Some(value),
            "phone" => form.phone = Some(value),
            "address" => form.address = Some(value),
            "dob" => form.dob = Some(value),
            "gender" => form.gender = Some(value),
            other => debug!(field = %other, "ignoring unknown profile field"),
        }
    }

    Ok(form)
}
