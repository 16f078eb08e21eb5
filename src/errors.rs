use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum AppError {
    #[display(fmt = "could not reach the database: {}", reason)]
    ConnectionFailure { reason: String },

    #[display(fmt = "{}", message)]
    DuplicateKey { message: String },

    #[display(fmt = "database error: {}", reason)]
    ForeignKeyViolation { reason: String },

    #[display(fmt = "{}", message)]
    ValidationFailure { message: String },

    #[display(fmt = "database error: {}", reason)]
    Database { reason: String },

    #[display(fmt = "unauthorized")]
    Unauthorized,

    #[display(fmt = "session error: {}", reason)]
    Session { reason: String },

    #[display(fmt = "configuration error: {}", reason)]
    Config { reason: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationFailure { message: message.into() }
    }

    /// Errors the user can fix by changing the submitted form.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::DuplicateKey { .. } | AppError::ValidationFailure { .. })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::DuplicateKey {
                message: db_err.message().to_string(),
            },
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::ForeignKeyViolation {
                    reason: db_err.message().to_string(),
                }
            }
            sqlx::Error::Configuration(_)
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::ConnectionFailure {
                reason: err.to_string(),
            },
            _ => AppError::Database {
                reason: err.to_string(),
            },
        }
    }
}

impl error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AppError::ConnectionFailure { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DuplicateKey { .. } => StatusCode::CONFLICT,
            AppError::ForeignKeyViolation { .. } => StatusCode::CONFLICT,
            AppError::ValidationFailure { .. } => StatusCode::BAD_REQUEST,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Session { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
