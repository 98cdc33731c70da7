//! # REST API for PDF Export
//!
//! `POST /download_pdf` turns the six displayed shares into a PDF attachment.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use chrono::Local;
use shared::ExportPdfRequest;
use tracing::{error, info, warn};

use crate::io::templates::render_report_document;
use crate::AppState;

pub const PDF_UNAVAILABLE_MESSAGE: &str =
    "Serviço de PDF não disponível. Contate o administrador.";
pub const PDF_FAILURE_MESSAGE: &str = "Erro ao gerar PDF. Tente novamente mais tarde.";

/// Render the submitted shares into a PDF download
pub async fn download_pdf(
    State(state): State<AppState>,
    Form(request): Form<ExportPdfRequest>,
) -> impl IntoResponse {
    info!("POST /download_pdf - request: {:?}", request);

    let Some(renderer) = state.pdf_renderer.as_ref() else {
        warn!("PDF export requested but no PDF tool is configured");
        return (StatusCode::SERVICE_UNAVAILABLE, PDF_UNAVAILABLE_MESSAGE).into_response();
    };

    let report = state.report_service.build_report(&request, Local::now());
    let html = render_report_document(&report);

    match renderer.render(&html).await {
        Ok(pdf) => {
            info!("Generated {} ({} bytes)", report.filename, pdf.len());
            let disposition = format!("attachment; filename={}", report.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                pdf,
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to generate PDF: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, PDF_FAILURE_MESSAGE).into_response()
        }
    }
}
