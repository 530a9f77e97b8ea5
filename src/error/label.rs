use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::{domain_error_response, ErrorKind};

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Label not found with id: {0}")]
    NotFound(i32),
    #[error("Label name cannot be empty or whitespace only")]
    BlankName,
    #[error("Labels list cannot be empty")]
    EmptyLabelList,
    #[error("Label {label_id} is not associated with recipe {recipe_id}")]
    NotAttached { label_id: i32, recipe_id: i32 },
}

impl LabelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::BlankName | Self::EmptyLabelList | Self::NotAttached { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl IntoResponse for LabelError {
    fn into_response(self) -> Response {
        domain_error_response(self.kind(), self)
    }
}
