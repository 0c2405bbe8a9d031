/// Rendering Infrastructure
pub mod dot_renderer;

pub use dot_renderer::*;
