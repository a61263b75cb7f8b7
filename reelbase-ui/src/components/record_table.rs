//! Record Table Component
//!
//! One row per record, with inline editing and a metadata detail row
//! injected below the expanded record.

use leptos::*;
use reelbase::model::{Metadata, Record};
use reelbase::view::{EditField, RecordViewState};

use crate::state::use_controller;

/// Table of all records in the view
#[component]
pub fn RecordTable() -> impl IntoView {
    let view_state = use_controller().store().signal();

    view! {
        <table class="records">
            <thead>
                <tr>
                    // Expand/collapse column
                    <th></th>
                    <th>"Title"</th>
                    <th>"Release Year"</th>
                    <th>"IMDB ID"</th>
                    <th>"Images"</th>
                    <th>"Metadata"</th>
                    // Edit/Save column
                    <th></th>
                    // Delete column
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || view_state.with(|s| {
                        s.records()
                            .iter()
                            .map(|r| (r.id, r.imdb_id.clone()))
                            .collect::<Vec<_>>()
                    })
                    key=|(_, imdb_id)| imdb_id.clone()
                    children=move |(id, _)| view! { <RecordRow id=id /> }
                />
            </tbody>
        </table>
    }
}

/// A record row, plus its metadata row when expanded
#[component]
fn RecordRow(id: i64) -> impl IntoView {
    let controller = use_controller();
    let view_state = controller.store().signal();

    let record = create_memo(move |_| view_state.with(|s| s.record(id).cloned()));
    let editing = create_memo(move |_| view_state.with(|s| s.is_editing(id)));
    let saving = create_memo(move |_| view_state.with(|s| s.is_saving(id)));
    let expanded = expansion_memo(view_state, record);

    move || {
        record.get().map(|record| {
            let toggle = record.metadata.is_present().then(|| {
                let imdb_id = record.imdb_id.clone();
                view! {
                    <button
                        type="button"
                        on:click=move |_| view_state.update(|s| s.toggle_expanded(&imdb_id))
                    >
                        "Toggle metadata"
                    </button>
                }
            });

            let title = record.title.clone();
            let year = record.release_year;
            let shown_imdb_id = record.imdb_id.clone();
            let metadata = record.metadata.clone();

            let save_controller = controller.clone();
            let delete_controller = controller.clone();

            view! {
                <tr>
                    <td>{toggle}</td>
                    <td>
                        {move || if editing.get() {
                            view! {
                                <input
                                    type="text"
                                    disabled=move || saving.get()
                                    prop:value=move || view_state.with(|s| {
                                        s.edit_session()
                                            .draft()
                                            .and_then(|d| d.title.clone())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| view_state.update(|s| {
                                        s.update_edit(EditField::Title(event_target_value(&ev)));
                                    })
                                />
                            }.into_view()
                        } else {
                            title.clone().into_view()
                        }}
                    </td>
                    <td>
                        {move || if editing.get() {
                            view! {
                                <input
                                    type="number"
                                    disabled=move || saving.get()
                                    prop:value=move || view_state.with(|s| {
                                        s.edit_session()
                                            .draft()
                                            .and_then(|d| d.release_year)
                                            .map(|y| y.to_string())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| view_state.update(|s| {
                                        s.update_edit(EditField::release_year_input(&event_target_value(&ev)));
                                    })
                                />
                            }.into_view()
                        } else {
                            year.into_view()
                        }}
                    </td>
                    <td>
                        {move || if editing.get() {
                            view! {
                                <input
                                    type="text"
                                    disabled=move || saving.get()
                                    prop:value=move || view_state.with(|s| {
                                        s.edit_session()
                                            .draft()
                                            .and_then(|d| d.imdb_id.clone())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| view_state.update(|s| {
                                        s.update_edit(EditField::ImdbId(event_target_value(&ev)));
                                    })
                                />
                            }.into_view()
                        } else {
                            shown_imdb_id.clone().into_view()
                        }}
                    </td>
                    <td>
                        <img src=record.images.clone() alt=record.title.clone() height="100" />
                    </td>
                    <td>"Metadata " {record.metadata.availability()}</td>
                    <td>
                        {move || if editing.get() {
                            let controller = save_controller.clone();
                            view! {
                                <button
                                    type="button"
                                    disabled=move || saving.get()
                                    on:click=move |_| {
                                        let controller = controller.clone();
                                        spawn_local(async move {
                                            controller.save().await;
                                        });
                                    }
                                >
                                    "Save"
                                </button>
                            }.into_view()
                        } else {
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| view_state.update(|s| {
                                        s.begin_edit(id);
                                    })
                                >
                                    "Edit"
                                </button>
                            }.into_view()
                        }}
                    </td>
                    <td>
                        <button
                            type="button"
                            class="danger"
                            on:click=move |_| {
                                let controller = delete_controller.clone();
                                spawn_local(async move {
                                    let _ = controller.delete(id).await;
                                });
                            }
                        >
                            "Delete"
                        </button>
                    </td>
                </tr>
                {move || expanded.get().then(|| view! { <MetadataRow metadata=metadata.clone() /> })}
            }
        })
    }
}

/// Whether the row's metadata is expanded, keyed by the record's current
/// `imdb_id`
fn expansion_memo(
    view_state: RwSignal<RecordViewState>,
    record: Memo<Option<Record>>,
) -> Memo<bool> {
    let imdb_id = create_memo(move |_| {
        record.with(|r| r.as_ref().map(|r| r.imdb_id.clone()).unwrap_or_default())
    });
    create_memo(move |_| imdb_id.with(|imdb_id| view_state.with(|s| s.is_expanded(imdb_id))))
}

/// Detail row listing a record's metadata
#[component]
fn MetadataRow(metadata: Metadata) -> impl IntoView {
    let lines = match &metadata {
        Metadata::Malformed { raw, reason } => view! {
            <tr>
                <td><strong>"Unreadable metadata:"</strong></td>
                <td>{reason.clone()}</td>
            </tr>
            <tr>
                <td><strong>"Raw:"</strong></td>
                <td><code>{raw.clone()}</code></td>
            </tr>
        }
        .into_view(),
        _ => metadata
            .entries()
            .into_iter()
            .map(|entry| view! {
                <tr>
                    <td><strong>{entry.key}":"</strong></td>
                    <td>{entry.value}</td>
                </tr>
            })
            .collect_view(),
    };

    view! {
        <tr class="metadata">
            <td colspan="8">
                <table class="metadata-entries">
                    <tbody>{lines}</tbody>
                </table>
            </td>
        </tr>
    }
}
