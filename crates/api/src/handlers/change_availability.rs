use axum::extract::{Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::admin_service::AdminService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::auth_dto::MessageResponse;
use prescripto_primitives::models::dtos::doctor_dto::ChangeAvailabilityRequest;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/admin/change-availability",
    request_body = ChangeAvailabilityRequest,
    responses(
        (status = 200, description = "`Availability Changed`, or `success: false` when the doctor is unknown", body = MessageResponse),
        (status = 401, description = "Missing or non-admin token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn change_availability(
    State(state): State<Arc<AppState>>,
    SoftJson(payload): SoftJson<ChangeAvailabilityRequest>,
) -> Result<Json<MessageResponse>, SoftError> {
    AdminService::change_availability(&state, &payload.doc_id).await?;
    Ok(Json(MessageResponse::ok("Availability Changed")))
}
