//! Remote user store client

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::models::{User, UserDraft, UserId};

/// The four operations of the remote user collection
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetch every record, in server order
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;

    /// Create a record; the server assigns its id
    async fn create_user(&self, draft: &UserDraft) -> anyhow::Result<User>;

    /// Replace the record `id`, returning what the server stored
    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> anyhow::Result<User>;

    async fn delete_user(&self, id: &UserId) -> anyhow::Result<()>;
}

/// [`UserApi`] over a JSON REST collection at `base_url`
#[derive(Clone, Debug)]
pub struct HttpUserApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpUserApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, base_url, timeout))
    }

    /// Use a preconfigured client; `timeout` is only used in error messages
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        HttpUserApi {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single record
    pub fn user_url(&self, id: &UserId) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }

    fn describe(&self, e: reqwest::Error) -> anyhow::Error {
        if e.is_timeout() {
            anyhow!("Request timed out ({}s)", self.timeout.as_secs())
        } else if e.is_connect() {
            anyhow!("Connection failed: {}", e)
        } else {
            anyhow!("Request failed: {}", e)
        }
    }

    /// Send, reject non-2xx statuses, return the raw response
    async fn send(&self, req: reqwest::RequestBuilder) -> anyhow::Result<reqwest::Response> {
        let resp = req.send().await.map_err(|e| self.describe(e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("Server responded with {}", status));
        }
        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> anyhow::Result<T> {
        let resp = self.send(req).await?;
        let body = resp.text().await.map_err(|e| self.describe(e))?;
        serde_json::from_str(&body).map_err(|e| anyhow!("Invalid response body: {}", e))
    }
}

/// Servers either echo the stored record or only confirm the write.
///
/// Anything other than a JSON object carrying an `id` counts as a
/// confirmation, and the record is rebuilt from what was sent.
fn decode_updated(body: &str, id: &UserId, draft: &UserDraft) -> anyhow::Result<User> {
    let echoed = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .filter(|value| value.get("id").is_some());
    match echoed {
        Some(value) => {
            serde_json::from_value(value).map_err(|e| anyhow!("Invalid response body: {}", e))
        }
        None => Ok(User::from_draft(id.clone(), draft.clone())),
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        self.send_json(self.client.get(&self.base_url)).await
    }

    async fn create_user(&self, draft: &UserDraft) -> anyhow::Result<User> {
        self.send_json(self.client.post(&self.base_url).json(draft)).await
    }

    async fn update_user(&self, id: &UserId, draft: &UserDraft) -> anyhow::Result<User> {
        let resp = self.send(self.client.put(self.user_url(id)).json(draft)).await?;
        let body = resp.text().await.map_err(|e| self.describe(e))?;
        decode_updated(&body, id, draft)
    }

    async fn delete_user(&self, id: &UserId) -> anyhow::Result<()> {
        self.send(self.client.delete(self.user_url(id))).await?;
        Ok(())
    }
}
