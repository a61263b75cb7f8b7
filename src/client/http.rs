//! HTTP implementation of the records API

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::RecordsApi;
use crate::config::ApiConfig;
use crate::error::{RecordsError, RecordsResult};
use crate::model::{NewRecord, Record, RecordPatch};

/// reqwest-backed records API client
#[derive(Debug, Clone)]
pub struct RecordsClient {
    client: Client,
    base_url: String,
}

impl RecordsClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url)
    }

    /// Normalized base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn records_url(&self) -> String {
        format!("{}/records", self.base_url)
    }

    pub fn record_url(&self, id: i64) -> String {
        format!("{}/records/{}", self.base_url, id)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/records/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    /// Turn a non-success status into an API error
    async fn check(response: Response) -> RecordsResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            Err(RecordsError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn fetch_records(&self, url: &str) -> RecordsResult<Vec<Record>> {
        tracing::debug!(url = %url, "Fetching records");

        let response = self.client.get(url).send().await?;
        let body = Self::check(response).await?.text().await?;
        let records: Vec<Record> = serde_json::from_str(&body)?;

        tracing::debug!(count = records.len(), "Fetched records");
        Ok(records)
    }
}

#[async_trait(?Send)]
impl RecordsApi for RecordsClient {
    async fn list(&self) -> RecordsResult<Vec<Record>> {
        self.fetch_records(&self.records_url()).await
    }

    async fn search(&self, query: &str) -> RecordsResult<Vec<Record>> {
        self.fetch_records(&self.search_url(query)).await
    }

    async fn create(&self, record: &NewRecord) -> RecordsResult<()> {
        let response = self
            .client
            .post(self.records_url())
            .json(record)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, id: i64, patch: &RecordPatch) -> RecordsResult<()> {
        let response = self
            .client
            .patch(self.record_url(id))
            .json(patch)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> RecordsResult<()> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = RecordsClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.records_url(), "http://localhost:8000/records");
        assert_eq!(client.record_url(42), "http://localhost:8000/records/42");
    }

    #[test]
    fn test_search_query_is_encoded() {
        let client = RecordsClient::new("http://api");
        assert_eq!(
            client.search_url("blade runner & co"),
            "http://api/records/search?query=blade%20runner%20%26%20co"
        );
        assert_eq!(client.search_url(""), "http://api/records/search?query=");
    }
}
