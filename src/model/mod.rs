//! Data model
//!
//! - `Record`: a film record as served by the API
//! - `NewRecord` / `RecordPatch`: create and partial-update bodies
//! - `Metadata`: normalized optional side information

mod metadata;
mod record;

pub use metadata::{display_value, Metadata, MetadataEntry};
pub use record::{NewRecord, Record, RecordPatch};
