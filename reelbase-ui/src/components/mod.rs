//! UI Components
//!
//! Leptos components for the record page.

pub mod create_form;
pub mod loading;
pub mod record_table;
pub mod search_bar;
pub mod toast;

pub use create_form::CreateRecordForm;
pub use loading::InlineLoading;
pub use record_table::RecordTable;
pub use search_bar::SearchBar;
pub use toast::Toast;
