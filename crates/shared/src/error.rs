use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a point generation request.
///
/// The display strings are part of the wire contract; clients match on
/// them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("num_points is required")]
    MissingNumPoints,
    #[error("num_points must be a positive integer")]
    InvalidNumPoints,
}

/// JSON body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(value: RequestError) -> Self {
        Self {
            error: value.to_string(),
        }
    }
}
