//! Quote request handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    error::Result,
    models::{ApiResponse, PaginatedResult, Pagination, QuoteRequestResponse, SubmitQuoteRequest},
    services::AppState,
};

// =====================================
// Submit quote request
// =====================================
/// Accepts a quote request from the marketing site's form.
///
/// Schema validation runs here, before the submission service is invoked;
/// the service trusts its input. The response body is always the structured
/// submission result the form expects:
///
/// - 201 with `{"success":true,"requestNumber":"QR-..."}`
/// - 500 with `{"success":false,"error":"Failed to submit quote request"}`
///   when persistence fails (detail stays in the server log)
/// - 422 with field errors when validation fails, without reaching the
///   submission service
///
/// # Endpoint
/// `POST /api/quotes`
pub async fn submit_quote(
    State(state): State<AppState>,
    Json(request): Json<SubmitQuoteRequest>,
) -> Result<impl IntoResponse> {
    request.validate()?;

    let result = state.quote_service.submit(request).await;

    let status = if result.is_accepted() {
        StatusCode::CREATED
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, Json(result)))
}

// =====================================
// Get quote request
// =====================================
/// Fetches a single quote request by its request number.
///
/// # Endpoint
/// `GET /api/quotes/:request_number`
pub async fn get_quote(
    State(state): State<AppState>,
    Path(request_number): Path<String>,
) -> Result<Json<ApiResponse<QuoteRequestResponse>>> {
    let quote = state
        .quote_service
        .find_by_request_number(&request_number)
        .await?;

    Ok(Json(ApiResponse::success(quote)))
}

// =====================================
// List quote requests
// =====================================
/// Paginated list of quote requests, newest first.
///
/// # Endpoint
/// `GET /api/quotes?page=1&per_page=20`
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<ApiResponse<PaginatedResult<QuoteRequestResponse>>>> {
    let page = state.quote_service.list(pagination).await?;

    Ok(Json(ApiResponse::success(page)))
}
