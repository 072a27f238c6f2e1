use actix_web::dev::ServiceResponse;
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{error, web, HttpResponse, Responder};
use minijinja::context;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{ContactForm, PredictionForm};
use crate::render::{RenderError, TemplateEngine};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TemplateEngine>,
}

impl AppState {
    /// Render a page template to a 200 response
    fn page<S: Serialize>(&self, name: &str, ctx: S) -> Result<HttpResponse, PageError> {
        let html = self.engine.render(name, ctx)?;
        Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
    }
}

/// Error raised when a page fails to render
///
/// Surfaces as a 500 response; the error-handler middleware rewrites the
/// body to the home page content before it reaches the client.
#[derive(Debug, Error)]
#[error("Page render failed: {0}")]
pub struct PageError(#[from] RenderError);

impl error::ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Configure all page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/predict", web::get().to(predict))
        .route("/predict", web::post().to(predict_submit))
        .route("/recent", web::get().to(recent))
        .route("/about", web::get().to(about))
        .route("/contact", web::get().to(contact))
        .route("/contact", web::post().to(contact_submit));
}

/// Home page: hero section, project overview, features
async fn home(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    state.page("home.html", context! {})
}

/// Prediction form, empty
async fn predict(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    state.page("predict.html", context! {})
}

/// Prediction form submission
///
/// The submitted fields are echoed back into the same template for display.
/// No validation, inference, or storage happens here.
async fn predict_submit(
    state: web::Data<AppState>,
    form: web::Form<PredictionForm>,
) -> Result<HttpResponse, PageError> {
    let form = form.into_inner();
    tracing::info!(
        fields = form.fields().iter().filter(|(_, v)| v.is_some()).count(),
        "prediction form submitted"
    );
    state.page("predict.html", context! { form_data => form })
}

/// Recent predictions page; static, no data is fetched
async fn recent(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    state.page("recent.html", context! {})
}

/// About page: how the estimation model would work
async fn about(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    state.page("about.html", context! {})
}

/// Contact form, empty
async fn contact(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    state.page("contact.html", context! {})
}

/// Contact form submission
///
/// The fields are collected and discarded; the page re-renders with no new
/// parameters. No mail is sent and nothing is stored.
async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> Result<HttpResponse, PageError> {
    let form = form.into_inner();
    tracing::debug!(
        fields = form.fields().iter().filter(|(_, v)| v.is_some()).count(),
        "contact form submitted and discarded"
    );
    state.page("contact.html", context! {})
}

/// Fallback for unmatched paths: home page content under status 404
pub async fn not_found(state: web::Data<AppState>) -> impl Responder {
    match state.engine.render("home.html", context! {}) {
        Ok(html) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            tracing::error!("Failed to render 404 fallback: {}", e);
            HttpResponse::NotFound()
                .content_type(ContentType::html())
                .body(FALLBACK_HOME)
        }
    }
}

/// Rewrite any 500 response to home page content under status 500
pub fn render_server_fault<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let html = res
        .request()
        .app_data::<web::Data<AppState>>()
        .and_then(|state| state.engine.render("home.html", context! {}).ok())
        .unwrap_or_else(|| FALLBACK_HOME.to_string());

    let (req, res) = res.into_parts();
    let mut res = res.set_body(html);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=utf-8"),
    );

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

// Served when the template engine itself is unavailable
const FALLBACK_HOME: &str =
    "<!DOCTYPE html><html><body><h1>London House Price Predictor</h1></body></html>";
