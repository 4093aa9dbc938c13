//! Renderer module — fragment text, member bodies and the Markdown document.

pub mod docs;
pub mod markdown;
pub mod text;
