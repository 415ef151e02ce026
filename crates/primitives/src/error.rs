use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use http::StatusCode;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error};
use utoipa::ToSchema;

const GENERIC_FAILURE: &str = "Something went wrong, please try again";

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
    InvalidCredentials,
    DuplicateEmail,
    InsufficientRole,
    NotConfigured,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingHeader | AuthError::InvalidFormat | AuthError::InsufficientRole => {
                write!(f, "Not Authorized, Login Again")
            }
            AuthError::InvalidToken(_) => write!(f, "Invalid or Expired Token"),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::DuplicateEmail => write!(f, "User already exists"),
            AuthError::NotConfigured => write!(f, "Admin access is not configured"),
        }
    }
}

/// Failures of the appointment payment flow.
#[derive(Debug)]
pub enum PaymentError {
    MissingFields,
    AlreadyCancelled,
    AlreadyPaid,
    InvalidAmount,
    NotCompleted,
    OrderNotFound,
    OrderMismatch,
    AmountMismatch,
    NotConfigured,
    Gateway(String),
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentError::MissingFields => write!(f, "Missing payment verification details"),
            PaymentError::AlreadyCancelled => {
                write!(f, "Cannot process payment for cancelled appointment")
            }
            PaymentError::AlreadyPaid => write!(f, "Payment already completed"),
            PaymentError::InvalidAmount => write!(f, "Invalid appointment amount"),
            PaymentError::NotCompleted => write!(f, "Payment not completed"),
            PaymentError::OrderNotFound => write!(f, "Order not found"),
            PaymentError::OrderMismatch => write!(f, "Order does not match appointment"),
            PaymentError::AmountMismatch => write!(f, "Paid amount does not match appointment"),
            PaymentError::NotConfigured => write!(f, "Payment gateway not initialized"),
            PaymentError::Gateway(msg) => write!(f, "Payment provider error: {}", msg),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Validation(validator::ValidationErrors),
    BadRequest(String),
    Auth(AuthError),
    NotFound(String),
    Forbidden(String),
    Conflict(String),
    DoctorUnavailable,
    Payment(PaymentError),
    Token(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::DoctorUnavailable => write!(f, "Doctor not available"),
            ApiError::Payment(e) => write!(f, "Payment error: {}", e),
            ApiError::Token(e) => write!(f, "Token error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => StatusCode::NOT_FOUND,
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::DatabaseConnection(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::DuplicateEmail) => StatusCode::CONFLICT,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) | ApiError::DoctorUnavailable => StatusCode::CONFLICT,
            ApiError::Payment(e) => match e {
                PaymentError::OrderNotFound => StatusCode::NOT_FOUND,
                PaymentError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
                PaymentError::Gateway(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::Token(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to API clients. Storage and token failures are
    /// reduced to a generic message; the detail only goes to the logs.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => "Resource not found".to_string(),
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => "Resource already exists".to_string(),
                _ => GENERIC_FAILURE.to_string(),
            },
            ApiError::DatabaseConnection(_) | ApiError::Token(_) => GENERIC_FAILURE.to_string(),
            ApiError::Validation(errors) => first_validation_message(errors),
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::Auth(e) => e.to_string(),
            ApiError::DoctorUnavailable => self.to_string(),
            ApiError::Payment(e) => e.to_string(),
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }
    }
}

/// Picks a stable message out of a validation report: fields are visited in
/// name order and the first explicit message (or error code) wins.
pub fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .filter_map(|field| field_errors.get(field).and_then(|list| list.first()))
        .map(|err| {
            err.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string())
        })
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

impl From<r2d2::PoolError> for ApiError {
    fn from(err: r2d2::PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError::Payment(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "request body rejected");
        ApiError::BadRequest("Invalid request body".into())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        debug!(error = %rejection.body_text(), "multipart body rejected");
        ApiError::BadRequest("Invalid form data".into())
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        (err.status_code(), err.client_message())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Slot not available")]
    pub message: String,
}

impl ErrorBody {
    fn from_error(err: &ApiError) -> Self {
        Self {
            success: false,
            message: err.client_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.log(status);
        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}

/// Error wrapper for the endpoints whose client reads the `success` flag
/// instead of the status code: domain and validation failures are answered
/// with `200 OK`, internal failures keep their 5xx status.
#[derive(Debug)]
pub struct SoftError(pub ApiError);

impl From<ApiError> for SoftError {
    fn from(err: ApiError) -> Self {
        SoftError(err)
    }
}

impl From<JsonRejection> for SoftError {
    fn from(rejection: JsonRejection) -> Self {
        SoftError(rejection.into())
    }
}

impl From<MultipartRejection> for SoftError {
    fn from(rejection: MultipartRejection) -> Self {
        SoftError(rejection.into())
    }
}

impl IntoResponse for SoftError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        self.0.log(status);

        let status = if status.is_server_error() {
            status
        } else {
            StatusCode::OK
        };

        (status, Json(ErrorBody::from_error(&self.0))).into_response()
    }
}
