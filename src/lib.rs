//! # Reelbase
//!
//! Client library for browsing, searching, creating, editing and deleting
//! film records held by a remote REST API. The `reelbase-ui` crate renders it
//! in the browser with Leptos.
//!
//! ## Modules
//!
//! - [`model`]: records and their normalized metadata
//! - [`client`]: the records API trait and its reqwest implementation
//! - [`view`]: record view state, create form, and the controller that ties
//!   them to the API
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use reelbase::client::RecordsClient;
//! use reelbase::view::{RecordViewState, RecordsController, ViewStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let client = RecordsClient::new("http://localhost:8000");
//!     let state = Rc::new(RefCell::new(RecordViewState::new()));
//!     let controller = RecordsController::new(client, state.clone());
//!
//!     controller.load().await;
//!
//!     let count = controller.store().read(|s| s.records().len());
//!     println!("{:?} records", count);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod view;

pub use client::{RecordsApi, RecordsClient};
pub use config::{Config, ConfigError, ConfigOverrides, DEFAULT_API_BASE};
pub use error::{DraftError, RecordsError, RecordsResult};
pub use model::{Metadata, MetadataEntry, NewRecord, Record, RecordPatch};
pub use view::{
    CreateDraft, CreateField, CreateForm, EditField, EditSession, Expansion, ListingOutcome,
    RecordViewState, RecordsController, ViewStore,
};
