//! UI Components
//!
//! Leptos components for the to-do page.

mod navbar;
mod storage_notice;
mod todo_form;
mod todo_list;
mod todo_row;

pub use navbar::Navbar;
pub use storage_notice::StorageNotice;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
