//! HTML rendering of the dashboard state.

pub mod document;
pub mod html;

pub use html::render_document;
