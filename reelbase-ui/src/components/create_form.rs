//! Create Record Form
//!
//! Form for adding a new record. On success the form is cleared and the list
//! re-fetched.

use leptos::*;
use reelbase::view::{CreateField, CreateForm};

use crate::state::{use_controller, GlobalState};

const CREATED_MESSAGE: &str = "Record created successfully!";
const CREATE_FAILED_MESSAGE: &str = "Error creating record. Please check your input.";

/// Create-record form component
#[component]
pub fn CreateRecordForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let controller = use_controller();

    let form = create_rw_signal(CreateForm::default());
    let submitting = create_memo(move |_| form.with(|f| f.is_submitting()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(record)) => {
                let controller = controller.clone();
                spawn_local(async move {
                    let created = controller.create(&record).await.is_ok();
                    form.try_update(|f| f.finish_submit(created));

                    if created {
                        state.show_success(CREATED_MESSAGE);
                        controller.load().await;
                    } else {
                        state.show_error(CREATE_FAILED_MESSAGE);
                    }
                });
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Create form rejected");
                state.show_error(CREATE_FAILED_MESSAGE);
            }
            None => {}
        }
    };

    view! {
        <section class="create-record">
            <h2>"Create Record"</h2>

            <form on:submit=on_submit>
                <FormField label="Title" name="title" field=CreateField::Title form=form />
                <FormField
                    label="Release Year"
                    name="release_year"
                    input_type="number"
                    field=CreateField::ReleaseYear
                    form=form
                />
                <FormField label="IMDB ID" name="imdb_id" field=CreateField::ImdbId form=form />
                <FormField
                    label="Images"
                    name="images"
                    placeholder="Image URL"
                    field=CreateField::Images
                    form=form
                />

                <button type="submit" disabled=move || submitting.get()>
                    "Create Record"
                </button>
            </form>
        </section>
    }
}

/// Labelled input bound to one field of the create draft
#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    field: CreateField,
    form: RwSignal<CreateForm>,
) -> impl IntoView {
    view! {
        <label>
            {label}
            <input
                type=input_type
                name=name
                placeholder=placeholder
                disabled=move || form.with(|f| f.is_submitting())
                prop:value=move || form.with(|f| f.draft.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}
