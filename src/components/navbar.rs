//! Navigation Bar Component

use leptos::prelude::*;

use crate::viewport::{HOME, YOUR_TASKS};

/// Brand and navigation links; links shrink to icons on narrow viewports
#[component]
pub fn Navbar(
    #[prop(into)] brand: String,
    is_narrow: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="logo">
                <span class="brand">{brand}</span>
            </div>
            <ul class="nav-links">
                <li class="nav-link">{move || HOME.pick(is_narrow.get())}</li>
                <li class="nav-link">{move || YOUR_TASKS.pick(is_narrow.get())}</li>
            </ul>
        </nav>
    }
}
