use axum::extract::{Extension, Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::appointment_service::AppointmentService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::appointment_dto::AppointmentIdRequest;
use prescripto_primitives::models::dtos::auth_dto::MessageResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/user/cancel-appointment",
    request_body = AppointmentIdRequest,
    responses(
        (status = 200, description = "`Appointment cancelled`, or `success: false` with \
                                      `Appointment not found` / `Unauthorized action`", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Appointments"
)]
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    SoftJson(payload): SoftJson<AppointmentIdRequest>,
) -> Result<Json<MessageResponse>, SoftError> {
    let user_id = claims.user_id()?;
    AppointmentService::cancel(&state, user_id, &payload.appointment_id).await?;

    Ok(Json(MessageResponse::ok("Appointment cancelled")))
}
