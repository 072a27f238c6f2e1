//! Houseprice Web - Server-rendered front end for the London House Price Predictor
//!
//! This library provides the page router, template engine, and configuration
//! used by the web front end. Pages are rendered from Jinja-style templates
//! with a fixed set of display values injected into every render.

pub mod config;
pub mod models;
pub mod render;
pub mod routes;

// Re-export commonly used types
pub use config::Settings;
pub use models::{ContactForm, PredictionForm};
pub use render::{DisplayContext, RenderError, TemplateEngine};
pub use routes::pages::AppState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let settings = Settings::default();
        let display = DisplayContext::from_settings(&settings);
        assert_eq!(display.app_name, settings.site.name);
    }
}
