//! TaskChanger Frontend App
//!
//! Root component: wires the store, reactive state, and viewport signal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Navbar, StorageNotice, TodoForm, TodoList};
use crate::config::load_config;
use crate::context::TodoContext;
use crate::storage;
use crate::store::{store_apply_snapshot, AppState};
use crate::viewport::use_narrow_viewport;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Reactive mirror of the store, fed by snapshots
    let app_store = Store::new(AppState::default());
    provide_context(app_store);

    let mut todos = storage::open_todo_store(config.store.clone());
    todos.subscribe(move |snapshot| store_apply_snapshot(&app_store, snapshot));
    log::info!("mounted with {} todos", todos.len());
    provide_context(TodoContext::new(todos));

    let is_narrow = use_narrow_viewport(config.ui.narrow_breakpoint_px);

    view! {
        <Navbar brand=config.ui.brand.clone() is_narrow=is_narrow />
        <main class="todo-panel">
            <StorageNotice />
            <TodoForm />
            <TodoList is_narrow=is_narrow />
        </main>
    }
}
