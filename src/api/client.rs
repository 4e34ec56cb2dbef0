use reqwest::{Client, Response};
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::types::{Drink, DrinkDraft, DrinkId};
use crate::config::ApiConfig;

/// The remote operations the lifecycle controller needs.
///
/// [`DrinksApi`] is the real implementation; tests substitute their own to
/// observe call order without a server.
pub trait DrinkService {
    /// Read the entire collection.
    async fn list(&self) -> Result<Vec<Drink>, ApiError>;
    /// Insert a new record.
    async fn create(&self, draft: &DrinkDraft) -> Result<(), ApiError>;
    /// Replace the fields of the record addressed by `id`.
    async fn update(&self, id: &DrinkId, draft: &DrinkDraft) -> Result<(), ApiError>;
    /// Remove the record addressed by `id`.
    async fn delete(&self, id: &DrinkId) -> Result<(), ApiError>;
}

/// HTTP client for the drinks collection endpoint.
pub struct DrinksApi {
    client: Client,
    base_url: String,
}

impl DrinksApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/drinks", self.base_url)
    }

    fn record_url(&self, id: &DrinkId) -> String {
        format!("{}/drinks/{}", self.base_url, id)
    }
}

impl DrinkService for DrinksApi {
    async fn list(&self) -> Result<Vec<Drink>, ApiError> {
        let resp = self.client.get(self.collection_url()).send().await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    async fn create(&self, draft: &DrinkDraft) -> Result<(), ApiError> {
        // The created record in the response body is unused beyond the
        // success signal; the list is refetched afterwards anyway.
        let resp = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }

    async fn update(&self, id: &DrinkId, draft: &DrinkDraft) -> Result<(), ApiError> {
        let resp = self
            .client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }

    async fn delete(&self, id: &DrinkId) -> Result<(), ApiError> {
        let resp = self.client.delete(self.record_url(id)).send().await?;
        check_status(resp)?;
        Ok(())
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> DrinksApi {
        DrinksApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            connect_timeout_seconds: 1,
        })
        .unwrap()
    }

    #[test]
    fn collection_url_joins_base() {
        assert_eq!(
            api("http://localhost:3000").collection_url(),
            "http://localhost:3000/drinks"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        assert_eq!(
            api("http://localhost:3000/").collection_url(),
            "http://localhost:3000/drinks"
        );
    }

    #[test]
    fn record_url_addresses_by_id() {
        assert_eq!(
            api("https://drinks.example").record_url(&DrinkId::new("7")),
            "https://drinks.example/drinks/7"
        );
    }
}
