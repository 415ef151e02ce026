use axum::extract::{Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::admin_service::AdminService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::auth_dto::MessageResponse;
use prescripto_primitives::models::dtos::doctor_dto::AddDoctorRequest;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/admin/add-doctor",
    request_body = AddDoctorRequest,
    responses(
        (status = 200, description = "`Doctor Added`, or `success: false` with the validation failure", body = MessageResponse),
        (status = 401, description = "Missing or non-admin token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn add_doctor(
    State(state): State<Arc<AppState>>,
    SoftJson(payload): SoftJson<AddDoctorRequest>,
) -> Result<Json<MessageResponse>, SoftError> {
    AdminService::add_doctor(&state, payload).await?;
    Ok(Json(MessageResponse::ok("Doctor Added")))
}
