use axum::extract::{Extension, Json, State};
use crate::extractors::SoftJson;
use prescripto_core::services::appointment_service::AppointmentService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::appointment_dto::BookAppointmentRequest;
use prescripto_primitives::models::dtos::auth_dto::MessageResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/user/book-appointment",
    request_body = BookAppointmentRequest,
    responses(
        (status = 200, description = "`Appointment Booked`, or `success: false` with `Slot not available`, \
                                      `Doctor not available` or `Doctor not found`", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Appointments"
)]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    SoftJson(payload): SoftJson<BookAppointmentRequest>,
) -> Result<Json<MessageResponse>, SoftError> {
    let user_id = claims.user_id()?;
    AppointmentService::book(&state, user_id, payload).await?;

    Ok(Json(MessageResponse::ok("Appointment Booked")))
}
