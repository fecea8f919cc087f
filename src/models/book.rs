use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub pages: u32,
    /// Hours read inside the current day window.
    pub time_today: f64,
    /// Lifetime hours; grows when a day boundary folds `time_today` forward.
    pub total_time: f64,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw form fields as submitted by the log-entry screen.
/// Numeric fields arrive as strings and are parsed leniently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub name: String,
    pub pages: String,
    pub time: String,
    pub rating: String,
}

/// Raw form fields from the detail/edit screen. The name is fixed at
/// creation; only the numeric fields are editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub pages: String,
    pub time: String,
    pub rating: String,
}
