//! Todo Row Component

use leptos::prelude::*;
use todo_store::TodoItem;

use crate::context::use_todo_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::viewport::{DELETE, EDIT};

/// A single item with edit and delete actions
#[component]
pub fn TodoRow(item: TodoItem, is_narrow: ReadSignal<bool>) -> impl IntoView {
    let ctx = use_todo_context();
    let state = use_app_store();

    let id = item.id;
    let is_editing = move || state.editing().get() == Some(id);
    let edit_label = format!("Edit todo: {}", item.text);
    let delete_label = format!("Delete todo: {}", item.text);

    view! {
        <div class=move || if is_editing() { "todo editing" } else { "todo" }>
            <div class="text">{item.text}</div>
            <div class="buttons">
                <button class="edit-btn" aria-label=edit_label on:click=move |_| ctx.begin_edit(id)>
                    {move || EDIT.pick(is_narrow.get())}
                </button>
                <button class="danger-btn" aria-label=delete_label on:click=move |_| ctx.delete(id)>
                    {move || DELETE.pick(is_narrow.get())}
                </button>
            </div>
        </div>
    }
}
