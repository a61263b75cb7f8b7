//! Record view controller
//!
//! Drives the network side of the record view: each operation calls the
//! API, then folds the outcome into the view state. Failures are logged and
//! swallowed; only `create` reports back to the caller for user feedback.
//!
//! State is reached through [`ViewStore`] and never borrowed across an
//! `.await`, so operations may interleave freely on the UI thread. The
//! sequencing rules in [`RecordViewState`] decide which results stick.

use std::cell::RefCell;
use std::rc::Rc;

use super::state::{ListingTicket, RecordViewState};
use crate::client::RecordsApi;
use crate::error::RecordsResult;
use crate::model::{NewRecord, Record};

/// Shared access to a [`RecordViewState`]
///
/// Both methods return `None` once the state is gone (the view was
/// unmounted while a request was in flight).
pub trait ViewStore: Clone {
    fn read<R>(&self, f: impl FnOnce(&RecordViewState) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut RecordViewState) -> R) -> Option<R>;
}

impl ViewStore for Rc<RefCell<RecordViewState>> {
    fn read<R>(&self, f: impl FnOnce(&RecordViewState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write<R>(&self, f: impl FnOnce(&mut RecordViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// What happened to a listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The collection now holds this many records
    Applied(usize),
    /// A newer listing had already been applied
    Superseded,
    /// The request failed; the collection is unchanged
    Failed,
    /// The view state no longer exists
    Detached,
}

enum Listing {
    All,
    Search(String),
}

/// Record view operations against a records API
pub struct RecordsController<A, S> {
    api: Rc<A>,
    store: S,
}

impl<A, S: Clone> Clone for RecordsController<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
        }
    }
}

impl<A: RecordsApi, S: ViewStore> RecordsController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api: Rc::new(api),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full list, replacing the collection
    pub async fn load(&self) -> ListingOutcome {
        self.run_listing(Listing::All).await
    }

    /// Search with the current query, replacing the collection
    pub async fn search(&self) -> ListingOutcome {
        let Some(query) = self.store.read(|s| s.search_query().to_string()) else {
            return ListingOutcome::Detached;
        };
        self.run_listing(Listing::Search(query)).await
    }

    async fn run_listing(&self, listing: Listing) -> ListingOutcome {
        let Some(ticket) = self.store.write(|s| s.issue_listing()) else {
            return ListingOutcome::Detached;
        };

        let result = match &listing {
            Listing::All => self.api.list().await,
            Listing::Search(query) => self.api.search(query).await,
        };

        match result {
            Ok(records) => self.apply(ticket, records),
            Err(e) => {
                match &listing {
                    Listing::All => tracing::error!(error = %e, "Error fetching records"),
                    Listing::Search(query) => {
                        tracing::error!(error = %e, query = %query, "Error searching records")
                    }
                }
                match self.store.write(|s| s.listing_failed(ticket)) {
                    Some(()) => ListingOutcome::Failed,
                    None => ListingOutcome::Detached,
                }
            }
        }
    }

    fn apply(&self, ticket: ListingTicket, records: Vec<Record>) -> ListingOutcome {
        let count = records.len();
        match self.store.write(|s| s.apply_listing(ticket, records)) {
            Some(true) => ListingOutcome::Applied(count),
            Some(false) => ListingOutcome::Superseded,
            None => ListingOutcome::Detached,
        }
    }

    /// Send the current edit as a partial update, then resynchronize
    ///
    /// The list is re-fetched and edit mode cleared whether or not the update
    /// succeeded. Returns `None` when no record was being edited.
    pub async fn save(&self) -> Option<RecordsResult<()>> {
        let (id, patch) = self.store.write(|s| s.begin_save()).flatten()?;

        let result = self.api.update(id, &patch).await;
        if let Err(e) = &result {
            tracing::error!(record_id = id, error = %e, "Error saving changes");
        }

        self.load().await;
        self.store.write(|s| s.finish_save(id));
        Some(result)
    }

    /// Delete a record; on success it disappears from the collection
    pub async fn delete(&self, id: i64) -> RecordsResult<()> {
        match self.api.delete(id).await {
            Ok(()) => {
                self.store.write(|s| s.remove_record(id));
                tracing::debug!(record_id = id, "Record deleted");
                Ok(())
            }
            Err(e) => {
                tracing::error!(record_id = id, error = %e, "Error deleting record");
                Err(e)
            }
        }
    }

    /// Create a record
    ///
    /// Returns as soon as the backend has answered the create. The caller
    /// confirms to the user and then calls [`load`](Self::load) to bring the
    /// new record into the list.
    pub async fn create(&self, record: &NewRecord) -> RecordsResult<()> {
        match self.api.create(record).await {
            Ok(()) => {
                tracing::info!(imdb_id = %record.imdb_id, "Record created");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating record");
                Err(e)
            }
        }
    }
}
