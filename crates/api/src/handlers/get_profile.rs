use axum::extract::{Extension, State};
use axum::Json;
use prescripto_core::services::profile_service::ProfileService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::profile_dto::ProfileResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/user/get-profile",
    responses(
        (status = 200, description = "Profile of the authenticated user", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "User"
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ProfileResponse>, SoftError> {
    let user_id = claims.user_id()?;
    let user_data = ProfileService::get_profile(&state, user_id).await?;

    Ok(Json(ProfileResponse {
        success: true,
        user_data,
    }))
}
