//! Record View
//!
//! The record list/editor and the create form, independent of any UI
//! toolkit.
//!
//! - [`RecordViewState`]: records, search query, expand and edit selections
//! - [`RecordsController`]: load, search, save, delete and create against a
//!   [`RecordsApi`](crate::client::RecordsApi)
//! - [`CreateForm`]: the create-record draft and its submission status

mod controller;
mod draft;
mod state;

pub use controller::{ListingOutcome, RecordsController, ViewStore};
pub use draft::{CreateDraft, CreateField, CreateForm, EditDraft, EditField, FormStatus};
pub use state::{EditSession, Expansion, ListingTicket, RecordViewState};
