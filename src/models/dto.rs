//! Generic API response DTOs.

use serde::{Deserialize, Serialize};

// =====================================
// Generic API responses
// =====================================
/// Standard success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// =====================================
// Health check
// =====================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_ok,
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert!(response.success);
        assert_eq!(response.data, 42);
    }

    #[test]
    fn test_health_response_status() {
        assert_eq!(HealthResponse::healthy(true).status, "healthy");
        assert_eq!(HealthResponse::healthy(false).status, "degraded");
    }
}
