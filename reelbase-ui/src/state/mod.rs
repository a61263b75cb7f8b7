//! State Management
//!
//! Global toast/sync state and the signal-backed record view store.

pub mod global;
pub mod store;

pub use global::{provide_global_state, GlobalState};
pub use store::{provide_controller, use_controller, Controller, SignalStore};
