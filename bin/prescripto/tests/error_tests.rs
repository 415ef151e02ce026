use axum::body::to_bytes;
use axum::response::IntoResponse;
use http::StatusCode;
use prescripto_primitives::error::{ApiError, AuthError, PaymentError, SoftError};
use serde_json::Value;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_status_codes() {
    let cases = [
        (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
        (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
        (ApiError::Forbidden("x".into()), StatusCode::FORBIDDEN),
        (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
        (ApiError::DoctorUnavailable, StatusCode::CONFLICT),
        (ApiError::Auth(AuthError::MissingHeader), StatusCode::UNAUTHORIZED),
        (ApiError::Auth(AuthError::DuplicateEmail), StatusCode::CONFLICT),
        (ApiError::Payment(PaymentError::MissingFields), StatusCode::BAD_REQUEST),
        (ApiError::Payment(PaymentError::OrderNotFound), StatusCode::NOT_FOUND),
        (
            ApiError::Payment(PaymentError::NotConfigured),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ApiError::Payment(PaymentError::Gateway("down".into())),
            StatusCode::BAD_GATEWAY,
        ),
        (
            ApiError::DatabaseConnection("pool".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (err, expected) in cases {
        assert_eq!(err.status_code(), expected, "{}", err);
    }
}

#[test]
fn test_client_messages_hide_storage_details() {
    let err = ApiError::DatabaseConnection("connection refused on 10.0.0.5".into());
    assert_eq!(err.client_message(), "Something went wrong, please try again");

    let err = ApiError::Database(diesel::result::Error::RollbackTransaction);
    assert!(!err.client_message().contains("Rollback"));

    assert_eq!(
        ApiError::Auth(AuthError::InvalidFormat).client_message(),
        "Not Authorized, Login Again"
    );
    assert_eq!(
        ApiError::Auth(AuthError::InvalidToken("exp".into())).client_message(),
        "Invalid or Expired Token"
    );
    assert_eq!(
        ApiError::DoctorUnavailable.client_message(),
        "Doctor not available"
    );
    assert_eq!(
        ApiError::Payment(PaymentError::NotConfigured).client_message(),
        "Payment gateway not initialized"
    );
}

#[tokio::test]
async fn test_api_error_response_keeps_status() {
    let response = ApiError::Payment(PaymentError::MissingFields).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing payment verification details");
}

#[tokio::test]
async fn test_soft_error_answers_ok_for_domain_failures() {
    let response = SoftError(ApiError::Conflict("Slot not available".into())).into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Slot not available");
}

#[tokio::test]
async fn test_soft_error_keeps_server_failures() {
    let response = SoftError(ApiError::DatabaseConnection("down".into())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}
