use axum::extract::FromRequest;
use prescripto_primitives::error::{ApiError, SoftError};

/// JSON body for the payment routes; a bad body is a 400 with the usual
/// `{success, message}` envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// JSON body for the routes answering failures with `200 OK`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(SoftError))]
pub struct SoftJson<T>(pub T);
