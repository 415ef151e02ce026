use axum::extract::State;
use axum::Json;
use prescripto_core::services::doctor_service::DoctorService;
use prescripto_core::AppState;
use prescripto_primitives::error::{ErrorBody, SoftError};
use prescripto_primitives::models::dtos::doctor_dto::DoctorListResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/doctor/list",
    responses(
        (status = 200, description = "All doctors with their booked slots", body = DoctorListResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(()),
    tag = "Doctors"
)]
pub async fn doctor_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DoctorListResponse>, SoftError> {
    let doctors = DoctorService::list(&state).await?;

    Ok(Json(DoctorListResponse {
        success: true,
        doctors,
    }))
}
