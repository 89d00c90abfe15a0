//! Repository pattern over the quote request store.

use async_trait::async_trait;
use chrono::Utc;

use super::Database;
use crate::error::Result;
use crate::models::{NewQuoteRequest, Pagination, QuoteRequest};

// =====================================
// Base repository trait
// =====================================
/// Common shape for repositories.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Send + Sync;
    type Id: Send + Sync;

    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Entity>>;

    async fn count(&self) -> Result<i64>;
}

// =====================================
// Quote repository
// =====================================
/// Data access for quote requests.
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    db: Database,
}

impl QuoteRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts a new quote request and returns the stored row.
    ///
    /// # Errors
    /// Any store-level failure (connectivity, constraint violation such as a
    /// colliding request number) surfaces as a database error.
    pub async fn insert(&self, new_quote: &NewQuoteRequest) -> Result<QuoteRequest> {
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO quote_requests
                (id, request_number, company_name, contact_name, email, phone,
                 city, facility_type, area, service_type, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_quote.id)
        .bind(&new_quote.request_number)
        .bind(&new_quote.company_name)
        .bind(&new_quote.contact_name)
        .bind(&new_quote.email)
        .bind(&new_quote.phone)
        .bind(&new_quote.city)
        .bind(&new_quote.facility_type)
        .bind(&new_quote.area)
        .bind(&new_quote.service_type)
        .bind(&new_quote.message)
        .bind(created_at)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&new_quote.id).await?.ok_or_else(|| {
            crate::error::AppError::Internal("Failed to read back inserted quote request".to_string())
        })
    }

    /// Looks a quote request up by its request number.
    pub async fn find_by_request_number(
        &self,
        request_number: &str,
    ) -> Result<Option<QuoteRequest>> {
        let quote = sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, request_number, company_name, contact_name, email, phone,
                   city, facility_type, area, service_type, message, created_at
            FROM quote_requests
            WHERE request_number = ?
            "#,
        )
        .bind(request_number)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(quote)
    }

    /// Lists quote requests, newest first.
    pub async fn list(&self, pagination: &Pagination) -> Result<Vec<QuoteRequest>> {
        let quotes = sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, request_number, company_name, contact_name, email, phone,
                   city, facility_type, area, service_type, message, created_at
            FROM quote_requests
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(self.db.pool())
        .await?;

        Ok(quotes)
    }
}

#[async_trait]
impl Repository for QuoteRepository {
    type Entity = QuoteRequest;
    type Id = String;

    async fn find_by_id(&self, id: &String) -> Result<Option<QuoteRequest>> {
        let quote = sqlx::query_as::<_, QuoteRequest>(
            r#"
            SELECT id, request_number, company_name, contact_name, email, phone,
                   city, facility_type, area, service_type, message, created_at
            FROM quote_requests
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(quote)
    }

    async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quote_requests")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count.0)
    }
}
