//! Authenticated client for the document Q&A backend.
//!
//! Every method gates on the session provider (readiness, signed-in, token)
//! before any network I/O, attaches the bearer token, and maps non-success
//! responses through the backend's `detail` error payload. There is no retry,
//! caching, or deduplication here; a caller that wants to try again calls
//! again.

use crate::auth::SessionProvider;
use crate::config::ApiSettings;
use crate::error::ApiError;
use crate::models::document::{DocumentResponse, DocumentWithDetails, UploadResponse};
use crate::models::question::{AskRequest, AskResponse, QuestionWithAnswer};
use crate::models::user::{UserResponse, UserStats};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub struct ApiClient {
    http: Client,
    settings: ApiSettings,
    session: Arc<dyn SessionProvider>,
}

impl ApiClient {
    pub fn new(settings: ApiSettings, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            http: Client::new(),
            settings,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// List the caller's documents.
    pub async fn list_documents(&self) -> Result<Vec<DocumentResponse>, ApiError> {
        self.get_json("/documents", "Failed to fetch documents").await
    }

    /// Fetch one document with its questions.
    pub async fn get_document(&self, id: i64) -> Result<DocumentWithDetails, ApiError> {
        self.get_json(&format!("/documents/{id}"), "Failed to fetch document")
            .await
    }

    /// Delete a document. The backend's acknowledgement body has no fixed
    /// schema, so it is returned as raw JSON.
    pub async fn delete_document(&self, id: i64) -> Result<serde_json::Value, ApiError> {
        let response = self
            .authorized(Method::DELETE, &format!("/documents/{id}"))
            .await?
            .send()
            .await?;
        Self::decode(response, "Failed to delete document").await
    }

    /// Upload a file as multipart field `file`. Content-type of the request
    /// is left to the transport so the multipart boundary is computed.
    ///
    /// This is the one method that returns the raw response for the caller
    /// to interpret; see [`decode_upload`](Self::decode_upload).
    pub async fn upload_file(
        &self,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<Response, ApiError> {
        let part = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .authorized(Method::POST, "/upload")
            .await?
            .multipart(form)
            .send()
            .await?;
        Ok(response)
    }

    /// Decode an upload response for callers that want the typed result.
    pub async fn decode_upload(response: Response) -> Result<UploadResponse, ApiError> {
        Self::decode(response, "Failed to upload file").await
    }

    /// List questions asked against a document, each with its answer when
    /// one has been produced.
    pub async fn document_questions(
        &self,
        document_id: i64,
    ) -> Result<Vec<QuestionWithAnswer>, ApiError> {
        self.get_json(
            &format!("/questions/{document_id}"),
            "Failed to fetch questions",
        )
        .await
    }

    /// Ask a question about a document.
    pub async fn ask_question(
        &self,
        content: &str,
        document_id: i64,
    ) -> Result<AskResponse, ApiError> {
        let body = AskRequest {
            content: content.to_string(),
            document_id,
        };
        let response = self
            .authorized(Method::POST, "/ask")
            .await?
            .json(&body)
            .send()
            .await?;
        Self::decode(response, "Failed to ask question").await
    }

    /// Aggregate usage statistics for the signed-in user.
    pub async fn user_stats(&self) -> Result<UserStats, ApiError> {
        self.get_json("/stats", "Failed to fetch user stats").await
    }

    /// Profile of the signed-in user.
    pub async fn user_profile(&self) -> Result<UserResponse, ApiError> {
        self.get_json("/user", "Failed to fetch user profile").await
    }

    /// Gate on the session and produce a bearer-authenticated request
    /// builder. Fails without touching the network when no usable session
    /// exists; the readiness wait is bounded by `auth_ready_timeout`.
    async fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let ready =
            tokio::time::timeout(self.settings.auth_ready_timeout(), self.session.loaded()).await;
        if ready.is_err() {
            tracing::warn!(path, "session provider did not finish loading in time");
            return Err(ApiError::unauthenticated("session state not loaded in time"));
        }

        if !self.session.signed_in() {
            return Err(ApiError::unauthenticated("no signed-in session"));
        }

        let token = self
            .session
            .bearer_token()
            .await
            .ok_or_else(|| ApiError::unauthenticated("no bearer token available"))?;

        let url = format!("{}{}", self.settings.base_url, path);
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token.expose_secret()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &'static str,
    ) -> Result<T, ApiError> {
        let response = self.authorized(Method::GET, path).await?.send().await?;
        Self::decode(response, fallback).await
    }

    /// Map a response to its decoded JSON body, or to [`ApiError`].
    async fn decode<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            // Best effort: an unreadable or unparseable error body must not
            // mask the failed status.
            let body = response.bytes().await.unwrap_or_default();
            tracing::warn!(%status, "backend request failed");
            return Err(ApiError::from_error_body(status, &body, fallback));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::ParseFailed { source })
    }
}
