//! Todo Form Component
//!
//! Input for adding a new item or updating the one being edited.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let state = use_app_store();

    let is_editing = move || state.editing().get().is_some();

    view! {
        <section class="add-todo">
            <h2>"Add a Todo"</h2>
            <div class="add-todo-row">
                <input
                    type="text"
                    required
                    placeholder="Enter your todo..."
                    aria-label="Todo input"
                    prop:value=move || state.draft().get()
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ctx.submit();
                        }
                    }
                />
                <button
                    class="primary-btn"
                    aria-label=move || if is_editing() { "Update todo" } else { "Add todo" }
                    on:click=move |_| ctx.submit()
                >
                    {move || if is_editing() { "Update" } else { "Add" }}
                </button>
                <Show when=is_editing>
                    <button class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "Cancel"
                    </button>
                </Show>
            </div>
            {move || state.validation_message().get().map(|message| view! {
                <p class="validation-message">{message}</p>
            })}
        </section>
    }
}
