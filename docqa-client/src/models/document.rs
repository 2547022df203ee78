use crate::models::question::QuestionWithAnswer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document record as returned by the backend. Identity and timestamps are
/// authoritative server-side; the client never derives them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentResponse {
    pub id: i64,
    pub user_id: String,
    pub title: Option<String>,
    pub filename: String,
    pub file_url: String,
    pub file_key: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

/// Single-document view, including the questions asked against it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DocumentWithDetails {
    pub id: i64,
    pub user_id: String,
    pub title: Option<String>,
    pub filename: String,
    pub file_url: String,
    pub file_key: String,
    pub file_size: i64,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub questions: Vec<QuestionWithAnswer>,
}

/// Body of a successful `POST /upload`. The upload method hands back the raw
/// response; callers decode into this when they want the typed result.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub document_id: i64,
    pub file_url: String,
    pub key: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
}
