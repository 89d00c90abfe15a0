//! Quote request entity and its DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::utils;

// =====================================
// Entity
// =====================================
/// A persisted quote request.
///
/// Created exactly once at submission time; this service never mutates or
/// deletes a row. `request_number` is the human-facing tracking token and is
/// unique at the store level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuoteRequest {
    pub id: String,
    pub request_number: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub facility_type: String,
    pub area: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =====================================
// Internal create DTO
// =====================================
/// Data handed to the repository for insertion.
///
/// Optional fields are already coalesced: blank or absent form values arrive
/// here as `None` and persist as SQL NULL.
#[derive(Debug, Clone)]
pub struct NewQuoteRequest {
    pub id: String,
    pub request_number: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub facility_type: String,
    pub area: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
}

// =====================================
// API request DTO
// =====================================
/// Raw form input from the marketing site's quote dialog.
///
/// Validation here mirrors the form's schema: it runs in the HTTP layer
/// before the submission service is invoked, and the service trusts it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuoteRequest {
    #[validate(length(min = 2, max = 200, message = "Company name must be at least 2 characters"))]
    pub company_name: String,

    #[validate(length(min = 2, max = 200, message = "Contact name must be at least 2 characters"))]
    pub contact_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 9, max = 20, message = "Phone must be at least 9 characters"))]
    pub phone: String,

    #[validate(custom(function = validate_city))]
    pub city: String,

    #[validate(custom(function = validate_facility_type))]
    pub facility_type: String,

    #[serde(default)]
    pub area: Option<String>,

    #[validate(custom(function = validate_service_type))]
    pub service_type: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Message is too long"))]
    pub message: Option<String>,
}

fn validate_city(city: &str) -> Result<(), ValidationError> {
    if utils::is_supported_city(city) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_city"))
    }
}

fn validate_facility_type(facility_type: &str) -> Result<(), ValidationError> {
    if utils::is_supported_facility_type(facility_type) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_facility_type"))
    }
}

fn validate_service_type(service_type: &str) -> Result<(), ValidationError> {
    if utils::is_supported_service_type(service_type) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_service_type"))
    }
}

// =====================================
// Submission result
// =====================================
/// Outcome of a submission, in the exact shape the form expects.
///
/// Serializes to `{"success":true,"requestNumber":"QR-..."}` or
/// `{"success":false,"error":"..."}`. A rejected result never carries the
/// underlying store error; callers get the fixed generic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionResult {
    Accepted {
        success: bool,
        #[serde(rename = "requestNumber")]
        request_number: String,
    },
    Rejected {
        success: bool,
        error: String,
    },
}

/// Message surfaced to callers when persistence fails.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit quote request";

impl SubmissionResult {
    #[must_use]
    pub fn accepted(request_number: impl Into<String>) -> Self {
        Self::Accepted {
            success: true,
            request_number: request_number.into(),
        }
    }

    #[must_use]
    pub fn rejected() -> Self {
        Self::Rejected {
            success: false,
            error: SUBMIT_FAILURE_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The generated request number, when accepted.
    #[must_use]
    pub fn request_number(&self) -> Option<&str> {
        match self {
            Self::Accepted { request_number, .. } => Some(request_number),
            Self::Rejected { .. } => None,
        }
    }
}

// =====================================
// API response DTO
// =====================================
/// Read-side view of a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestResponse {
    pub request_number: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub facility_type: String,
    pub area: Option<String>,
    pub service_type: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<QuoteRequest> for QuoteRequestResponse {
    fn from(quote: QuoteRequest) -> Self {
        Self {
            request_number: quote.request_number,
            company_name: quote.company_name,
            contact_name: quote.contact_name,
            email: quote.email,
            phone: quote.phone,
            city: quote.city,
            facility_type: quote.facility_type,
            area: quote.area,
            service_type: quote.service_type,
            message: quote.message,
            created_at: quote.created_at,
        }
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitQuoteRequest {
        SubmitQuoteRequest {
            company_name: "Acme Co".to_string(),
            contact_name: "Jane Doe".to_string(),
            email: "jane@acme.com".to_string(),
            phone: "0500000000".to_string(),
            city: "riyadh".to_string(),
            facility_type: "mall".to_string(),
            area: None,
            service_type: "installation".to_string(),
            message: None,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_names_fail_validation() {
        let mut request = valid_request();
        request.company_name = "A".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.contact_name = "J".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_email_fails_validation() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_phone_fails_validation() {
        let mut request = valid_request();
        request.phone = "12345".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_enum_values_fail_validation() {
        let mut request = valid_request();
        request.city = "paris".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.facility_type = "stadium".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.service_type = "demolition".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{
            "companyName": "Acme Co",
            "contactName": "Jane Doe",
            "email": "jane@acme.com",
            "phone": "0500000000",
            "city": "riyadh",
            "facilityType": "mall",
            "serviceType": "installation"
        }"#;

        let request: SubmitQuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.company_name, "Acme Co");
        assert_eq!(request.area, None);
        assert_eq!(request.message, None);
    }

    #[test]
    fn test_accepted_result_wire_shape() {
        let result = SubmissionResult::accepted("QR-YA-AAAA");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["requestNumber"], "QR-YA-AAAA");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_rejected_result_wire_shape() {
        let result = SubmissionResult::rejected();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], SUBMIT_FAILURE_MESSAGE);
        assert!(json.get("requestNumber").is_none());
    }
}
