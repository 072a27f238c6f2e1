use crate::render::DisplayContext;
use minijinja::{path_loader, Environment, Value};
use minijinja_autoreload::AutoReloader;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering a page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// HTML template engine
///
/// Wraps a minijinja environment rooted at the template directory. The
/// global display values are installed once so every template sees them
/// without per-handler plumbing. With auto-reload enabled (the development
/// default), templates are re-read from disk whenever they change.
pub struct TemplateEngine {
    inner: EngineInner,
}

enum EngineInner {
    Static(Environment<'static>),
    Reloading(AutoReloader),
}

impl TemplateEngine {
    pub fn new(template_dir: impl Into<PathBuf>, display: &DisplayContext, auto_reload: bool) -> Self {
        let dir = template_dir.into();
        let inner = if auto_reload {
            let display = display.clone();
            EngineInner::Reloading(AutoReloader::new(move |notifier| {
                notifier.watch_path(&dir, true);
                Ok(build_environment(&dir, &display))
            }))
        } else {
            EngineInner::Static(build_environment(&dir, display))
        };

        Self { inner }
    }

    /// Render a named template with the given per-request context
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, RenderError> {
        let html = match &self.inner {
            EngineInner::Static(env) => env.get_template(name)?.render(ctx)?,
            EngineInner::Reloading(reloader) => {
                let env = reloader.acquire_env()?;
                env.get_template(name)?.render(ctx)?
            }
        };
        Ok(html)
    }
}

fn build_environment(dir: &PathBuf, display: &DisplayContext) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(dir));
    env.add_global("app_name", Value::from(display.app_name.clone()));
    env.add_global("app_version", Value::from(display.app_version.clone()));
    env.add_global("current_year", Value::from(display.current_year));
    env
}
