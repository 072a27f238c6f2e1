// Rendering exports
pub mod context;
pub mod engine;

pub use context::DisplayContext;
pub use engine::{RenderError, TemplateEngine};
