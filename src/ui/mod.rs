//! Terminal output for the `xyxyx` binary.

pub mod render;
mod renderer;
pub mod settings;

pub use render::RenderSink;
pub use renderer::Renderer;
