//! # Bill Splitter Backend
//!
//! Splits the household light and water bills between Iara and Rodrigo and
//! exports the result as a PDF.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML forms)
//!     ↓
//! IO Layer (Axum handlers, HTML templates)
//!     ↓
//! Domain Layer (split rule, currency codec, report model)
//!     ↓
//! Rendering Layer (external HTML to PDF tool)
//! ```
//!
//! The application holds no mutable state. [`AppState`] is built once at startup
//! from [`config::ServerConfig`] and cloned into every request.

pub mod config;
pub mod domain;
pub mod io;
pub mod rendering;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::domain::{BillSplitService, CurrencyCodec, ReportService};
use crate::rendering::{PdfOptions, PdfRenderer, WkhtmltopdfRenderer};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub bill_split_service: BillSplitService,
    pub report_service: ReportService,
    /// `None` when no PDF tool was found at startup
    pub pdf_renderer: Option<Arc<dyn PdfRenderer>>,
}

impl AppState {
    pub fn new(pdf_renderer: Option<Arc<dyn PdfRenderer>>) -> Self {
        let codec = CurrencyCodec::new();
        Self {
            bill_split_service: BillSplitService::new(codec.clone()),
            report_service: ReportService::new(codec),
            pdf_renderer,
        }
    }

    pub fn pdf_available(&self) -> bool {
        self.pdf_renderer.is_some()
    }
}

/// Initialize the backend with all required services.
///
/// A missing or broken PDF tool is not fatal: the export is disabled and the
/// form keeps working.
pub async fn initialize_backend(config: &ServerConfig) -> AppState {
    let binary = config.wkhtmltopdf_binary();
    info!("Probing PDF tool at {:?}", binary);

    let pdf_renderer: Option<Arc<dyn PdfRenderer>> =
        match WkhtmltopdfRenderer::probe(binary, PdfOptions::default()).await {
            Ok(renderer) => Some(Arc::new(renderer)),
            Err(e) => {
                warn!("PDF export disabled: {}", e);
                None
            }
        };

    info!("Setting up application state");
    AppState::new(pdf_renderer)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(io::show_form).post(io::split_bills))
        .route("/download_pdf", post(io::download_pdf))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
