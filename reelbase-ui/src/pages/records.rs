//! Records Page
//!
//! Search bar, record table and create form over one shared controller.

use leptos::*;

use crate::components::{CreateRecordForm, RecordTable, SearchBar};
use crate::state::{use_controller, GlobalState};

/// Records page component
#[component]
pub fn RecordsPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let controller = use_controller();
    let view_state = controller.store().signal();

    // Fetch the full list on mount
    create_effect(move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.load().await;
        });
    });

    let last_listing = create_memo(move |_| view_state.with(|s| s.last_listing()));
    create_effect(move |_| {
        if last_listing.get().is_some() {
            state.mark_synced();
        }
    });

    view! {
        <div class="records-page">
            <SearchBar />
            <RecordTable />
            <CreateRecordForm />
        </div>
    }
}
