use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A daily goal. At most one goal has `show_on_home` set (the main goal).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub is_done: bool,
    pub show_on_home: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
