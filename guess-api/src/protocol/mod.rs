use std::fmt;

use serde::Deserialize;

pub mod countries;
pub mod identity;
pub mod nationality;

/// Error body shared well enough by all three services: nationalize sends
/// `{"error"}`, the reference service `{"status", "message"}` and the identity
/// provider `{"__type", "message"}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct ServiceError {
    #[serde(alias = "error")]
    pub message: String,
    #[serde(rename = "__type", default)]
    pub kind: Option<String>,
}
impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{}: {}", kind, self.message),
            None => f.write_str(&self.message),
        }
    }
}
