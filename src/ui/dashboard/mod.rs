//! Terminal dashboard
//!
//! Split into a renderer and one module per screen component

pub mod components;
pub mod renderer;
pub mod utils;

pub use renderer::render_dashboard;
pub use utils::modal_area;
