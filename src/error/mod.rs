//! Error types for the recipebox core.
//!
//! Domain failures are typed enums grouped by area (recipes, engagement, labels, users,
//! configuration) and aggregated into [`Error`]. Every error maps onto one
//! [`ErrorKind`] and implements `IntoResponse` so a presentation layer built on Axum can
//! return it directly.

pub mod config;
pub mod engagement;
pub mod label;
pub mod recipe;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        config::ConfigError, engagement::EngagementError, label::LabelError, recipe::RecipeError,
        user::UserError,
    },
    model::api::ErrorDto,
};

/// Category of a failure, independent of the domain that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced recipe, rating, favorite, label, ingredient or user does not exist.
    NotFound,
    /// The acting user does not own the recipe being mutated.
    Unauthorized,
    /// A uniqueness or business rule would be violated.
    Conflict,
    /// The request carried a value the domain rejects.
    InvalidArgument,
    /// Storage, configuration or programming failure.
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Main error type for the recipebox core.
///
/// Aggregates the domain error enums and external library errors. `#[from]` conversions
/// let services use `?` on repository calls directly; database errors are carried through
/// unmodified.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Recipe lookup, ownership or ingredient error.
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// Favorite, rating or view error.
    #[error(transparent)]
    EngagementError(#[from] EngagementError),
    /// Label validation or association error.
    #[error(transparent)]
    LabelError(#[from] LabelError),
    /// User lookup error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Internal error indicating a bug in recipebox's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RecipeError(err) => err.kind(),
            Self::EngagementError(err) => err.kind(),
            Self::LabelError(err) => err.kind(),
            Self::UserError(err) => err.kind(),
            Self::ConfigError(_) | Self::InternalError(_) | Self::DbErr(_) => ErrorKind::Internal,
        }
    }
}

/// Converts core errors into HTTP responses.
///
/// Domain errors produce their own status code and message; everything else becomes a
/// 500 with the detail logged and withheld from the body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            Self::EngagementError(err) => err.into_response(),
            Self::LabelError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the response for a client-facing domain error.
///
/// The error is logged at debug level, since it describes a rejected request rather
/// than a fault.
pub(crate) fn domain_error_response<E: std::fmt::Display>(kind: ErrorKind, err: E) -> Response {
    tracing::debug!("{}", err);

    (
        kind.status_code(),
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
