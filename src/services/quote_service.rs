//! Quote request business logic.

use tracing::{error, info, instrument};

use crate::{
    database::{QuoteRepository, Repository},
    error::{AppError, Result},
    models::{
        Id, NewQuoteRequest, PaginatedResult, Pagination, QuoteRequestResponse,
        SubmissionResult, SubmitQuoteRequest,
    },
    utils::{self, RequestNumberGenerator},
};

use super::Service;

// =====================================
// Quote service
// =====================================
/// Handles quote request submissions and lookups.
pub struct QuoteService {
    repo: QuoteRepository,
    generator: RequestNumberGenerator,
}

impl Service for QuoteService {}

impl QuoteService {
    /// Builds the service over the real clock and RNG.
    #[must_use]
    pub fn new(repo: QuoteRepository) -> Self {
        Self::with_generator(repo, RequestNumberGenerator::default())
    }

    /// Builds the service with an explicit generator; tests use this to pin
    /// clock and randomness.
    #[must_use]
    pub fn with_generator(repo: QuoteRepository, generator: RequestNumberGenerator) -> Self {
        Self { repo, generator }
    }

    /// Submits a quote request.
    ///
    /// The input is assumed already validated by the HTTP layer; this method
    /// does not re-validate. It generates a request number, coalesces blank
    /// optional fields to NULL, and inserts exactly one row. Persistence
    /// failures are logged with full detail and reported to the caller only
    /// as the fixed generic message; they never propagate as an error. No
    /// retry and no de-duplication: submitting the same input twice creates
    /// two rows with two distinct request numbers.
    #[instrument(skip(self, request), fields(company = %request.company_name))]
    pub async fn submit(&self, request: SubmitQuoteRequest) -> SubmissionResult {
        let request_number = self.generator.generate();

        let new_quote = NewQuoteRequest {
            id: Id::new().into_string(),
            request_number: request_number.clone(),
            company_name: request.company_name,
            contact_name: request.contact_name,
            email: request.email,
            phone: request.phone,
            city: request.city,
            facility_type: request.facility_type,
            area: utils::normalize_optional(request.area),
            service_type: request.service_type,
            message: utils::normalize_optional(request.message),
        };

        match self.repo.insert(&new_quote).await {
            Ok(_) => {
                info!(request_number = %request_number, "Quote request submitted");
                SubmissionResult::accepted(request_number)
            }
            Err(e) => {
                error!(error = %e, "Failed to submit quote request");
                SubmissionResult::rejected()
            }
        }
    }

    /// Fetches a quote request by its request number.
    ///
    /// # Errors
    /// `NotFound` when no such request exists.
    #[instrument(skip(self), fields(request_number = %request_number))]
    pub async fn find_by_request_number(
        &self,
        request_number: &str,
    ) -> Result<QuoteRequestResponse> {
        let quote = self
            .repo
            .find_by_request_number(request_number)
            .await?
            .ok_or_else(|| AppError::quote_not_found(request_number))?;

        Ok(quote.into())
    }

    /// Lists quote requests, newest first.
    #[instrument(skip(self), fields(page = pagination.page, per_page = pagination.per_page))]
    pub async fn list(&self, pagination: Pagination) -> Result<PaginatedResult<QuoteRequestResponse>> {
        let quotes = self.repo.list(&pagination).await?;
        let total = self.repo.count().await?;

        let data = quotes.into_iter().map(QuoteRequestResponse::from).collect();

        Ok(PaginatedResult::new(data, &pagination, total as u64))
    }
}
