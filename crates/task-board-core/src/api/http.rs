//! Typed HTTP client for the task service.
//!
//! Routes, relative to the configured base URL:
//! - `GET /`             list
//! - `POST /`            create
//! - `PATCH /{id}`       title/description
//! - `DELETE /{id}`      delete
//! - `PATCH /{id}/status` status

use async_trait::async_trait;
use serde::Serialize;

use super::config::ApiConfig;
use super::traits::TaskApi;
use crate::domain::{DomainError, DomainResult, Task, TaskDraft, TaskId, TaskStatus};

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

/// reqwest-backed [`TaskApi`]
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpTaskApi {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(&self, endpoint: &str, request: reqwest::RequestBuilder) -> DomainResult<reqwest::Response> {
        tracing::debug!(endpoint, "sending request");
        let resp = request.send().await.map_err(|e| DomainError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }
        Ok(resp)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> DomainResult<Vec<Task>> {
        let endpoint = "GET /";
        let url = self.config.base_url().clone();
        let resp = self.send(endpoint, self.http.get(url)).await?;
        resp.json().await.map_err(|e| DomainError::Decode {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    async fn create(&self, draft: &TaskDraft) -> DomainResult<Task> {
        let endpoint = "POST /";
        let url = self.config.base_url().clone();
        let resp = self.send(endpoint, self.http.post(url).json(draft)).await?;
        resp.json().await.map_err(|e| DomainError::Decode {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> DomainResult<()> {
        let endpoint = format!("PATCH /{id}");
        let url = self.config.endpoint(&id.to_string())?;
        self.send(&endpoint, self.http.patch(url).json(draft)).await?;
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> DomainResult<()> {
        let endpoint = format!("DELETE /{id}");
        let url = self.config.endpoint(&id.to_string())?;
        self.send(&endpoint, self.http.delete(url)).await?;
        Ok(())
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> DomainResult<()> {
        let endpoint = format!("PATCH /{id}/status");
        let url = self.config.endpoint(&format!("{id}/status"))?;
        self.send(&endpoint, self.http.patch(url).json(&StatusBody { status }))
            .await?;
        Ok(())
    }
}
