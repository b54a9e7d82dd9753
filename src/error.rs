use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Every failure the API can surface, mapped to a status code and a
/// `{"error": ...}` JSON body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("You have already sent a proposal for this request")]
    DuplicateProposal,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Incorrect verification code")]
    InvalidCode,

    #[error("Incorrect credentials or inactive account")]
    InvalidCredentials,

    #[error("Account is locked")]
    AccountLocked,

    #[error("Request already has a hired worker")]
    AlreadyHired,

    #[error("Database unavailable")]
    StoreUnavailable,

    #[error("Payment session error: {0}")]
    PaymentSession(String),

    #[error("Database error: {0}")]
    Database(sea_orm::DbErr),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            // An unreachable store is a 503, not a generic 500.
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                ApiError::StoreUnavailable
            }
            _ => ApiError::Database(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::DuplicateEmail
            | ApiError::DuplicateProposal
            | ApiError::InvalidCode
            | ApiError::PaymentSession(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::AccountLocked => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AlreadyHired => StatusCode::CONFLICT,
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) | ApiError::Hash(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
