//! # REST API for Bill Splitting
//!
//! `GET /` shows the empty form, `POST /` splits the submitted bills.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};
use shared::SplitBillRequest;
use tracing::info;

use crate::io::templates::{render_index_page, IndexPage};
use crate::AppState;

/// Show the empty form
pub async fn show_form(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /");

    Html(render_index_page(&IndexPage {
        pdf_available: state.pdf_available(),
        ..IndexPage::default()
    }))
}

/// Split the submitted light and water bills
pub async fn split_bills(
    State(state): State<AppState>,
    Form(request): Form<SplitBillRequest>,
) -> impl IntoResponse {
    info!("POST / - request: {:?}", request);

    let light_input = request.luz.unwrap_or_default();
    let water_input = request.agua.unwrap_or_default();

    let outcome = state
        .bill_split_service
        .split_from_text(&light_input, &water_input);
    let notice = state.bill_split_service.rejection_notice(&outcome.rejected);

    info!(
        "Split done: Iara {} / Rodrigo {}",
        outcome.formatted.total_iara, outcome.formatted.total_rodrigo
    );

    Html(render_index_page(&IndexPage {
        light_input,
        water_input,
        shares: Some(outcome.formatted),
        notice,
        pdf_available: state.pdf_available(),
    }))
}
