// Model exports
pub mod forms;

pub use forms::{ContactForm, PredictionForm};
