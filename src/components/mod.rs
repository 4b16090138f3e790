//! UI Components
//!
//! Reusable Leptos components.

mod entry_row;
mod upload_form;

pub use entry_row::EntryRow;
pub use upload_form::MenuUploadForm;
