use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warning")]
    Warning,
}

/// A single finding from the upstream draft validator.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ValidationWarning {
    /// Index into the draft's stop list; tour-level findings carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_index: Option<usize>,
    pub severity: Severity,
    pub message: String,
}
