use axum::extract::{Extension, State};
use axum::Json;
use prescripto_core::services::appointment_service::AppointmentService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::appointment_dto::AppointmentsResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/user/appointments",
    responses(
        (status = 200, description = "The user's appointments, newest booking first", body = AppointmentsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Appointments"
)]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<AppointmentsResponse>, SoftError> {
    let user_id = claims.user_id()?;
    let appointments = AppointmentService::list(&state, user_id).await?;

    Ok(Json(AppointmentsResponse {
        success: true,
        appointments,
    }))
}
