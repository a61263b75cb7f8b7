//! Loading Component

use leptos::*;

/// Inline indicator shown while a listing request is outstanding
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="loading" aria-busy="true">"Loading..."</span>
    }
}
