//! Search Bar Component

use leptos::*;

use crate::state::use_controller;

/// Free-text search over the record list
#[component]
pub fn SearchBar() -> impl IntoView {
    let controller = use_controller();
    let view_state = controller.store().signal();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let controller = controller.clone();
        spawn_local(async move {
            controller.search().await;
        });
    };

    view! {
        <form class="search" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search..."
                prop:value=move || view_state.with(|s| s.search_query().to_string())
                on:input=move |ev| {
                    view_state.update(|s| s.set_search_query(event_target_value(&ev)));
                }
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
