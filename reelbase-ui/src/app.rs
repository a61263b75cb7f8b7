//! App Root Component
//!
//! Application shell and global providers.

use leptos::*;
use reelbase::client::RecordsClient;
use reelbase::config::Config;

use crate::components::{InlineLoading, Toast};
use crate::pages::RecordsPage;
use crate::state::{provide_controller, provide_global_state, use_controller, GlobalState};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_controller(RecordsClient::from_config(&config.api));
    provide_context(config);
    provide_global_state();

    view! {
        <div class="app">
            <header>
                <h1>"Records API"</h1>
            </header>

            <main>
                <RecordsPage />
            </main>

            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer showing when the record list was last refreshed
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let view_state = use_controller().store().signal();

    view! {
        <footer>
            <div class="last-sync">
                {move || {
                    state.last_sync.get()
                        .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                        .map(|dt| format!("Last sync: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "Not synced".to_string())
                }}
            </div>

            {move || view_state.with(|s| s.is_loading()).then(|| view! { <InlineLoading /> })}
        </footer>
    }
}
