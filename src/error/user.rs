use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::{domain_error_response, ErrorKind};

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found with id: {0}")]
    NotFound(i32),
}

impl UserError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        domain_error_response(self.kind(), self)
    }
}
