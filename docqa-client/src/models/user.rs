use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub clerk_id: String,
    pub email: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Aggregate usage counters, computed server-side.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub document_count: i64,
    pub question_count: i64,
    pub total_storage_used: f64,
    pub storage_unit: String,
}
