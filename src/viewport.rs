//! Viewport
//!
//! Narrow-viewport signal and the icon/text labels it selects.

use leptos::prelude::*;

/// Button or link caption with a compact icon form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub icon: &'static str,
    pub text: &'static str,
}

impl Label {
    pub const fn new(icon: &'static str, text: &'static str) -> Self {
        Self { icon, text }
    }

    pub fn pick(&self, narrow: bool) -> &'static str {
        if narrow {
            self.icon
        } else {
            self.text
        }
    }
}

pub const HOME: Label = Label::new("🏠", "Home");
pub const YOUR_TASKS: Label = Label::new("📝", "Your Tasks");
pub const EDIT: Label = Label::new("✏️", "Edit");
pub const DELETE: Label = Label::new("🗑️", "Delete");
pub const DELETE_ALL: Label = Label::new("🗑️ All", "Delete All");

pub fn is_narrow(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

fn current_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Signal that tracks `window.innerWidth < breakpoint` across resizes
pub fn use_narrow_viewport(breakpoint: f64) -> ReadSignal<bool> {
    let initial = current_width().is_some_and(|width| is_narrow(width, breakpoint));
    let (narrow, set_narrow) = signal(initial);

    // Lives as long as the app; never removed.
    let _listener = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = current_width() {
            let next = is_narrow(width, breakpoint);
            if narrow.get_untracked() != next {
                set_narrow.set(next);
            }
        }
    });

    narrow
}
