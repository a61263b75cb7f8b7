//! Records API Client
//!
//! The [`RecordsApi`] trait is the seam between view logic and the network.
//! [`RecordsClient`] implements it over HTTP with reqwest, which runs both
//! natively and in the browser.
//!
//! Futures are not required to be `Send`: in the browser everything runs on
//! the single UI thread.

mod http;

pub use http::RecordsClient;

use async_trait::async_trait;

use crate::error::RecordsResult;
use crate::model::{NewRecord, Record, RecordPatch};

/// Operations offered by the records backend
#[async_trait(?Send)]
pub trait RecordsApi {
    /// `GET /records`
    async fn list(&self) -> RecordsResult<Vec<Record>>;

    /// `GET /records/search?query=<text>`
    async fn search(&self, query: &str) -> RecordsResult<Vec<Record>>;

    /// `POST /records`
    async fn create(&self, record: &NewRecord) -> RecordsResult<()>;

    /// `PATCH /records/{id}`
    async fn update(&self, id: i64, patch: &RecordPatch) -> RecordsResult<()>;

    /// `DELETE /records/{id}`
    async fn delete(&self, id: i64) -> RecordsResult<()>;
}
