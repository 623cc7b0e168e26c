// src/error.rs
use crate::segment::SegmentField;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentError {
    /// A required attribute was absent when building a [`Segment`](crate::Segment).
    #[error("{}", .0.requirement_message())]
    MissingField(SegmentField),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SegmentError {
    /// The field that triggered a `MissingField` error, if that is what this is.
    pub fn missing_field(&self) -> Option<SegmentField> {
        match self {
            SegmentError::MissingField(field) => Some(*field),
            SegmentError::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SegmentError>;
