pub mod handlers;
pub mod render;

pub use render::{escape_html, render_preview};
