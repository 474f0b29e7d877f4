//! Storage Notice Component
//!
//! Banner shown while changes could not be written to browser storage.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StorageNotice() -> impl IntoView {
    let ctx = use_todo_context();
    let state = use_app_store();

    move || {
        state.storage_notice().get().map(|notice| view! {
            <div class="storage-notice" role="alert">
                <span>{notice}</span>
                <button class="retry-btn" on:click=move |_| ctx.retry_persist()>"Retry"</button>
            </div>
        })
    }
}
