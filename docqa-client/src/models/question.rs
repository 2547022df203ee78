use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Question with its answer, when one has been produced. Answer presence is
/// the only completion signal the backend exposes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuestionWithAnswer {
    pub id: i64,
    pub content: String,
    pub document_id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub answer: Option<AnswerResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnswerResponse {
    pub id: i64,
    pub content: String,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskRequest {
    pub content: String,
    pub document_id: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub success: bool,
    pub question_id: i64,
    pub answer: String,
}
