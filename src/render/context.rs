use crate::config::Settings;
use chrono::{Datelike, Utc};
use serde::Serialize;

/// Constant display values injected into every template render
///
/// Fixed at startup and never mutated afterwards; handlers only add
/// per-request values on top of these.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayContext {
    pub app_name: String,
    pub app_version: String,
    pub current_year: i32,
}

impl DisplayContext {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            app_name: settings.site.name.clone(),
            app_version: settings.display_version(),
            current_year: Utc::now().year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_context_from_settings() {
        let settings = Settings::default();
        let ctx = DisplayContext::from_settings(&settings);
        assert_eq!(ctx.app_name, "London House Price Predictor");
        assert_eq!(ctx.app_version, env!("CARGO_PKG_VERSION"));
        assert!(ctx.current_year >= 2025);
    }
}
