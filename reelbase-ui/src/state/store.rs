//! Signal-backed record view state

use leptos::*;
use reelbase::client::RecordsClient;
use reelbase::view::{RecordViewState, RecordsController, ViewStore};

/// Record view controller as used by the page and its components
pub type Controller = RecordsController<RecordsClient, SignalStore>;

/// [`RecordViewState`] held in a Leptos signal
///
/// Reads through the store are untracked; components that need to react to
/// changes read [`SignalStore::signal`] directly.
#[derive(Clone, Copy)]
pub struct SignalStore(RwSignal<RecordViewState>);

impl SignalStore {
    pub fn new() -> Self {
        Self(create_rw_signal(RecordViewState::new()))
    }

    pub fn signal(&self) -> RwSignal<RecordViewState> {
        self.0
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&RecordViewState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut RecordViewState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Create the controller for a record page and provide it to its children
pub fn provide_controller(client: RecordsClient) -> Controller {
    let controller = RecordsController::new(client, SignalStore::new());
    provide_context(controller.clone());
    controller
}

/// Controller provided by the enclosing record page
pub fn use_controller() -> Controller {
    use_context::<Controller>().expect("RecordsController not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_store_reads_and_writes() {
        let runtime = create_runtime();

        let store = SignalStore::new();
        store.write(|s| s.set_search_query("heat"));
        assert_eq!(
            store.read(|s| s.search_query().to_string()),
            Some("heat".to_string())
        );
        assert_eq!(store.signal().with_untracked(|s| s.records().len()), 0);

        runtime.dispose();
    }

    #[test]
    fn test_default_store_starts_empty() {
        let runtime = create_runtime();

        let store = SignalStore::default();
        assert_eq!(store.read(|s| s.records().len()), Some(0));
        assert_eq!(store.read(|s| s.is_loading()), Some(false));

        runtime.dispose();
    }
}
