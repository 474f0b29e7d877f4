//! Todo List Component
//!
//! Header with item count and bulk delete, then one row per item.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::viewport::DELETE_ALL;

#[component]
pub fn TodoList(is_narrow: ReadSignal<bool>) -> impl IntoView {
    let ctx = use_todo_context();
    let state = use_app_store();

    let count = move || state.todos().with(|todos| todos.len());

    view! {
        <section class="todo-list">
            <div class="todo-list-header">
                <div class="todo-list-title">
                    <h2>"Your ToDos"</h2>
                    <span class="count-badge">{count}</span>
                </div>
                <Show when=move || { count() > 0 }>
                    <button
                        class="danger-btn"
                        aria-label="Delete all todos"
                        on:click=move |_| ctx.delete_all()
                    >
                        {move || DELETE_ALL.pick(is_narrow.get())}
                    </button>
                </Show>
            </div>

            <Show
                when=move || { count() > 0 }
                fallback=|| view! { <div class="empty-state">"No todos yet. Add one above!"</div> }
            >
                <div class="todos">
                    <For
                        each=move || state.todos().get()
                        // Text is part of the key so an edited row re-renders
                        key=|item| (item.id, item.text.clone())
                        children=move |item| view! { <TodoRow item=item is_narrow=is_narrow /> }
                    />
                </div>
            </Show>
        </section>
    }
}
