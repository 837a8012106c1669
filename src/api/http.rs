//! reqwest-backed implementation of [`UserApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::api::{ApiError, UserApi};
use crate::config::ApiConfig;
use crate::constants::{APP_NAME, USERS_PATH, VERSION};
use crate::models::{CreatedUser, RemoteUser, UserPayload};

/// HTTP client for a JSON user collection at `<base_url>/users`.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    collection_url: String,
}

impl HttpUserApi {
    /// Build a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("{APP_NAME}/{VERSION}"))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            collection_url: format!("{}/{USERS_PATH}", config.base_url.trim_end_matches('/')),
        })
    }

    /// Address of the collection resource.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/{id}", self.collection_url)
    }
}

/// Turn a non-2xx response into [`ApiError::Status`], keeping the body for logs.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<no body>".to_string());
    Err(ApiError::Status { status, body })
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> Result<Vec<RemoteUser>, ApiError> {
        debug!(url = %self.collection_url, "GET users");
        let response = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(transport)?;
        let response = check_status(response).await?;
        response
            .json::<Vec<RemoteUser>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<u64, ApiError> {
        debug!(url = %self.collection_url, "POST user");
        let response = self
            .client
            .post(&self.collection_url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        let response = check_status(response).await?;
        let created = response
            .json::<CreatedUser>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(created.id)
    }

    async fn update_user(&self, id: u64, payload: &UserPayload) -> Result<(), ApiError> {
        let url = self.record_url(id);
        debug!(%url, "PUT user");
        let response = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let url = self.record_url(id);
        debug!(%url, "DELETE user");
        let response = self.client.delete(&url).send().await.map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpUserApi {
        HttpUserApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn builds_collection_and_record_urls() {
        let client = api("https://jsonplaceholder.typicode.com");
        assert_eq!(
            client.collection_url(),
            "https://jsonplaceholder.typicode.com/users"
        );
        assert_eq!(
            client.record_url(7),
            "https://jsonplaceholder.typicode.com/users/7"
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let client = api("http://localhost:3000/");
        assert_eq!(client.collection_url(), "http://localhost:3000/users");
    }
}
