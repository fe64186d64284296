//! Response envelopes.
//!
//! The backend wraps every payload in a named field (`{"sensors": [...],
//! "total": n}`, `{"alert": {...}}`, ...) and reports failures as
//! `{"error": "..."}`. Each resource module defines its own named envelopes;
//! the ones shared by all groups live here.

use serde::{Deserialize, Serialize};

/// Error body returned with any non-2xx status
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The most specific user-facing text in the body, if any
    pub fn text(&self) -> Option<&str> {
        fn non_empty(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.error).or_else(|| non_empty(&self.message))
    }
}

/// Plain acknowledgement (`DELETE` endpoints)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
