use axum::extract::{Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::admin_service::AdminService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::auth_dto::{AuthResponse, LoginRequest};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin token, or `success: false` on invalid credentials", body = AuthResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(()),
    tag = "Admin"
)]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    SoftJson(payload): SoftJson<LoginRequest>,
) -> Result<Json<AuthResponse>, SoftError> {
    let response = AdminService::login(&state, payload).await?;
    Ok(Json(response))
}
