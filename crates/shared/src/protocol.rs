use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{domain::Point, error::RequestError};

/// Body of `POST /generatePoints`.
///
/// `num_points` stays untyped until [`Self::num_points`] runs: a missing
/// field and a mistyped one are reported with different messages, which a
/// typed integer field would collapse into a single deserialization
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratePointsRequest {
    #[serde(default)]
    pub num_points: Option<Value>,
}

impl GeneratePointsRequest {
    /// Resolves the requested total, enforcing presence and positivity.
    pub fn num_points(&self) -> Result<u64, RequestError> {
        let raw = match &self.num_points {
            None | Some(Value::Null) => return Err(RequestError::MissingNumPoints),
            Some(raw) => raw,
        };
        match raw.as_u64() {
            Some(n) if n > 0 => Ok(n),
            _ => Err(RequestError::InvalidNumPoints),
        }
    }
}

/// Totals carried by the `start` and `end` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamTotals {
    pub total_points: u64,
}

/// One bounded chunk of generated points plus the cumulative count of
/// points sent so far across the whole stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPayload {
    pub points: Vec<Point>,
    pub points_sent: u64,
}

/// A single unit of the framed point stream.
///
/// A stream is exactly one `Start`, then one or more `Batch` frames, then
/// exactly one `End`, in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamFrame {
    Start(StreamTotals),
    Batch(BatchPayload),
    End(StreamTotals),
}

impl StreamFrame {
    /// SSE event label for this frame.
    pub fn event_name(&self) -> &'static str {
        match self {
            StreamFrame::Start(_) => "start",
            StreamFrame::Batch(_) => "batch",
            StreamFrame::End(_) => "end",
        }
    }
}
