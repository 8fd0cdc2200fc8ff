//! # Directory sources
//!
//! A [`DirectorySource`] produces a batch of user records in one request. The
//! directory view fetches once on mount and never asks again; "load more" only
//! reveals more of that batch.
//!
//! [`RandomUserSource`] is the production source. It issues
//! `GET <endpoint>?results=<count>` and decodes the body described in
//! [`crate::models::random_user`].

use store::{SourceConfig, UserRecord};

use crate::error::FetchError;
use crate::models::RandomUserResponse;

/// Async trait for fetching a batch of user records.
pub trait DirectorySource {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<UserRecord>, FetchError>;
}

/// Fetches generated users from randomuser.me (or a compatible endpoint).
#[derive(Clone, Debug)]
pub struct RandomUserSource {
    client: reqwest::Client,
    endpoint: String,
}

impl RandomUserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DirectorySource for RandomUserSource {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<UserRecord>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("results", count)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let decoded: RandomUserResponse = serde_json::from_str(&body)?;
        Ok(decoded.into_records())
    }
}
