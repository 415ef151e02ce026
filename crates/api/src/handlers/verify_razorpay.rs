use axum::extract::{Extension, Json, State};
use crate::extractors::AppJson;
use prescripto_core::services::payment_service::PaymentService;
use prescripto_core::{AppState, Claims};
use prescripto_primitives::error::{ApiError, ErrorBody};
use prescripto_primitives::models::dtos::auth_dto::MessageResponse;
use prescripto_primitives::models::dtos::payment_dto::VerifyPaymentRequest;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/user/verify-razorpay",
    request_body = VerifyPaymentRequest,
    responses(
        (status = 200, description = "Payment Successful", body = MessageResponse),
        (status = 400, description = "Missing details, payment not completed, amount mismatch, \
                                      or the appointment is cancelled or already paid", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Appointment belongs to another user", body = ErrorBody),
        (status = 404, description = "Order or appointment not found", body = ErrorBody),
        (status = 500, description = "Payment gateway not initialized", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn verify_razorpay(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<VerifyPaymentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = claims.user_id()?;
    PaymentService::verify(&state, user_id, payload).await?;

    Ok(Json(MessageResponse::ok("Payment Successful")))
}
