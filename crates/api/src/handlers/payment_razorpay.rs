use axum::extract::{Extension, Json, State};
use crate::extractors::AppJson;
use prescripto_core::services::payment_service::PaymentService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ApiError, ErrorBody};
use prescripto_primitives::models::dtos::appointment_dto::AppointmentIdRequest;
use prescripto_primitives::models::dtos::payment_dto::PaymentOrderResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/user/payment-razorpay",
    request_body = AppointmentIdRequest,
    responses(
        (status = 200, description = "Razorpay order created for the appointment fee", body = PaymentOrderResponse),
        (status = 400, description = "Appointment cancelled, already paid or has an invalid amount", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Appointment belongs to another user", body = ErrorBody),
        (status = 404, description = "Appointment not found", body = ErrorBody),
        (status = 500, description = "Payment gateway not initialized", body = ErrorBody),
        (status = 502, description = "Razorpay rejected the order", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn payment_razorpay(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<AppointmentIdRequest>,
) -> Result<Json<PaymentOrderResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let order = PaymentService::create_order(&state, user_id, &payload.appointment_id).await?;

    Ok(Json(PaymentOrderResponse {
        success: true,
        order,
    }))
}
