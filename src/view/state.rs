//! Record view state
//!
//! Everything the record list/editor shows, plus the bookkeeping that keeps
//! overlapping requests from clobbering each other.
//!
//! ## Sequencing
//!
//! Every listing (load, search, post-save and post-create refresh) takes a
//! ticket from a single monotonically increasing counter when it is issued.
//! A listing response is applied only if its ticket is newer than the last
//! applied one, so a slow, older response can never overwrite a newer list.
//!
//! A successful delete is stamped from the same counter. When a listing that
//! was issued before the delete lands afterwards, its copy of the deleted
//! record is dropped instead of resurrecting the row.

use super::draft::{EditDraft, EditField};
use crate::model::{Record, RecordPatch};

/// Which record, if any, has its metadata row expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    /// Keyed by `imdb_id`
    Expanded(String),
}

/// Which record, if any, is being edited inline
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { id: i64, draft: EditDraft },
    /// The update request is in flight
    Saving { id: i64, draft: EditDraft },
}

impl EditSession {
    pub fn record_id(&self) -> Option<i64> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { id, .. } | EditSession::Saving { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing { draft, .. } | EditSession::Saving { draft, .. } => Some(draft),
        }
    }
}

/// Handle for one issued listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListingTicket(u64);

/// State of the record list/editor view
#[derive(Debug, Clone, Default)]
pub struct RecordViewState {
    records: Vec<Record>,
    search_query: String,
    expansion: Expansion,
    edit: EditSession,
    /// Last value handed out by the sequence counter
    sequence: u64,
    /// Ticket of the newest listing applied so far
    applied_listing: u64,
    /// Listings issued but not yet settled
    pending_listings: usize,
    /// `(sequence, record id)` of deletes newer than the applied listing
    tombstones: Vec<(u64, i64)>,
}

impl RecordViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Records ============

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether any listing request is still outstanding
    pub fn is_loading(&self) -> bool {
        self.pending_listings > 0
    }

    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    /// Register a new listing request
    pub fn issue_listing(&mut self) -> ListingTicket {
        self.pending_listings += 1;
        ListingTicket(self.next_sequence())
    }

    /// Replace the collection with a listing response
    ///
    /// Returns `false` when a newer listing has already been applied and this
    /// response was discarded.
    pub fn apply_listing(&mut self, ticket: ListingTicket, mut records: Vec<Record>) -> bool {
        self.settle_listing();

        if ticket.0 <= self.applied_listing {
            tracing::debug!(ticket = ticket.0, "Discarding superseded listing");
            return false;
        }

        let issued = ticket.0;
        records.retain(|record| {
            !self
                .tombstones
                .iter()
                .any(|(deleted_at, id)| *deleted_at > issued && *id == record.id)
        });
        self.tombstones.retain(|(deleted_at, _)| *deleted_at > issued);

        self.applied_listing = issued;
        self.records = records;
        true
    }

    /// Ticket of the newest listing applied so far
    pub fn last_listing(&self) -> Option<ListingTicket> {
        (self.applied_listing > 0).then_some(ListingTicket(self.applied_listing))
    }

    /// Settle a listing request that failed; the collection is left as is
    pub fn listing_failed(&mut self, _ticket: ListingTicket) {
        self.settle_listing();
    }

    fn settle_listing(&mut self) {
        self.pending_listings = self.pending_listings.saturating_sub(1);
    }

    /// Drop a record after the API confirmed its deletion
    ///
    /// Clears an expand or edit selection pointing at it.
    pub fn remove_record(&mut self, id: i64) -> bool {
        let stamp = self.next_sequence();
        self.tombstones.push((stamp, id));

        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        let removed = self.records.remove(index);

        if self.expansion == Expansion::Expanded(removed.imdb_id.clone()) {
            self.expansion = Expansion::Collapsed;
        }
        if self.edit.record_id() == Some(id) {
            self.edit = EditSession::Idle;
        }
        true
    }

    // ============ Search ============

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    // ============ Expand / collapse ============

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn is_expanded(&self, imdb_id: &str) -> bool {
        matches!(&self.expansion, Expansion::Expanded(current) if current == imdb_id)
    }

    /// Expand the row, or collapse it if it is already expanded
    ///
    /// Expanding one row collapses any other.
    pub fn toggle_expanded(&mut self, imdb_id: &str) {
        self.expansion = if self.is_expanded(imdb_id) {
            Expansion::Collapsed
        } else {
            Expansion::Expanded(imdb_id.to_string())
        };
    }

    /// The record whose metadata row is open, if it is in the collection
    pub fn expanded_record(&self) -> Option<&Record> {
        match &self.expansion {
            Expansion::Collapsed => None,
            Expansion::Expanded(imdb_id) => self.records.iter().find(|r| &r.imdb_id == imdb_id),
        }
    }

    // ============ Inline edit ============

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.edit.record_id() == Some(id)
    }

    pub fn is_saving(&self, id: i64) -> bool {
        matches!(self.edit, EditSession::Saving { id: saving, .. } if saving == id)
    }

    /// Put a record into edit mode, abandoning any other edit
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(record) = self.record(id) else {
            return false;
        };
        let draft = EditDraft::from_record(record);
        self.edit = EditSession::Editing { id, draft };
        true
    }

    /// Change one field of the draft being edited
    pub fn update_edit(&mut self, change: EditField) -> bool {
        match &mut self.edit {
            EditSession::Editing { draft, .. } => {
                draft.apply(change);
                true
            }
            _ => false,
        }
    }

    /// Move the edit into the saving state and hand back what to send
    pub fn begin_save(&mut self) -> Option<(i64, RecordPatch)> {
        match std::mem::take(&mut self.edit) {
            EditSession::Editing { id, draft } => {
                let patch = draft.to_patch();
                self.edit = EditSession::Saving { id, draft };
                Some((id, patch))
            }
            other => {
                self.edit = other;
                None
            }
        }
    }

    /// Leave edit mode once a save has settled
    ///
    /// An edit started on another record in the meantime is kept.
    pub fn finish_save(&mut self, id: i64) {
        if self.is_saving(id) {
            self.edit = EditSession::Idle;
        }
    }
}
