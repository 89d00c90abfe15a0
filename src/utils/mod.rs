//! Helper functions and constants shared across the service.
//!
//! The most important piece here is the request-number generator. Every
//! accepted quote request is labeled with a human-readable token of the form
//! `QR-<base36 millis>-<4 base36 chars>`, e.g. `QR-LKJ3F2A8-X4Q9`. The
//! timestamp half makes numbers roughly sortable by submission time; the
//! random half disambiguates submissions landing in the same millisecond.
//!
//! The suffix carries about 20 bits of entropy per millisecond bucket, so
//! collisions are statistically negligible for a lead form but possible in
//! principle. These tokens are tracking labels, not security identifiers.
//!
//! Clock and randomness are behind small traits so tests can pin both and
//! assert exact output.

use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

// =====================================
// Constants
// =====================================
/// Prefix on every request number.
pub const REQUEST_NUMBER_PREFIX: &str = "QR";

/// Length of the random suffix.
pub const RANDOM_SUFFIX_LENGTH: usize = 4;

/// Base36 digit table, uppercase. Index == digit value.
pub const BASE36_CHARS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Cities the quote form accepts.
pub const CITIES: &[&str] = &[
    "riyadh", "jeddah", "makkah", "madinah", "dammam", "khobar", "jubail",
    "other",
];

/// Facility types the quote form accepts.
pub const FACILITY_TYPES: &[&str] = &[
    "mall", "hospital", "school", "hotel", "office", "warehouse", "factory",
    "residential", "other",
];

/// Service types the quote form accepts.
pub const SERVICE_TYPES: &[&str] = &[
    "installation", "maintenance", "inspection", "consultation", "upgrade",
];

// =====================================
// Lazy statics
// =====================================
/// Shape of a well-formed request number.
pub static REQUEST_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^QR-[0-9A-Z]+-[0-9A-Z]{4}$").expect("Invalid regex pattern")
});

// =====================================
// Clock / randomness sources
// =====================================
/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// Production code uses [`SystemClock`]; tests plug in a fixed value.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// A source of uniform random numbers below a bound.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..bound`.
    fn next_below(&self, bound: u32) -> u32;
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRandom;

impl RandomSource for ThreadRngRandom {
    fn next_below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

// =====================================
// Request number generation
// =====================================
/// Generator for quote request numbers.
///
/// Pure apart from reading its clock and randomness source; never fails.
///
/// # Example
/// ```rust
/// use firequote::utils::{RequestNumberGenerator, is_valid_request_number};
///
/// let number = RequestNumberGenerator::default().generate();
/// assert!(is_valid_request_number(&number));
/// ```
pub struct RequestNumberGenerator {
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
}

impl Default for RequestNumberGenerator {
    fn default() -> Self {
        Self::new(SystemClock, ThreadRngRandom)
    }
}

impl RequestNumberGenerator {
    /// Builds a generator over the given time and randomness sources.
    pub fn new(clock: impl Clock + 'static, random: impl RandomSource + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            random: Box::new(random),
        }
    }

    /// Produces the next request number.
    #[must_use]
    pub fn generate(&self) -> String {
        let timestamp = encode_base36(self.clock.now_millis());

        let suffix: String = (0..RANDOM_SUFFIX_LENGTH)
            .map(|_| {
                let idx = self.random.next_below(BASE36_CHARS.len() as u32);
                BASE36_CHARS[idx as usize] as char
            })
            .collect();

        format!("{REQUEST_NUMBER_PREFIX}-{timestamp}-{suffix}")
    }
}

/// Generates a request number from the real clock and RNG.
#[must_use]
pub fn generate_request_number() -> String {
    RequestNumberGenerator::default().generate()
}

/// Encodes a value as uppercase base36.
///
/// # Example
/// ```rust
/// use firequote::utils::encode_base36;
///
/// assert_eq!(encode_base36(0), "0");
/// assert_eq!(encode_base36(35), "Z");
/// assert_eq!(encode_base36(36), "10");
/// ```
#[must_use]
pub fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_CHARS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    // The table only holds ASCII.
    String::from_utf8(digits).expect("base36 digits are ASCII")
}

// =====================================
// Validation helpers
// =====================================
/// Checks a request number against the expected shape.
#[must_use]
pub fn is_valid_request_number(number: &str) -> bool {
    REQUEST_NUMBER_PATTERN.is_match(number)
}

/// Membership check against the city set.
#[must_use]
pub fn is_supported_city(city: &str) -> bool {
    CITIES.contains(&city)
}

/// Membership check against the facility type set.
#[must_use]
pub fn is_supported_facility_type(facility_type: &str) -> bool {
    FACILITY_TYPES.contains(&facility_type)
}

/// Membership check against the service type set.
#[must_use]
pub fn is_supported_service_type(service_type: &str) -> bool {
    SERVICE_TYPES.contains(&service_type)
}

// =====================================
// String helpers
// =====================================
/// Collapses an optional form field to `None` when absent or blank.
///
/// The original form treated empty strings as "not provided" and persisted
/// NULL for them; kept here so both shapes store the same way.
#[must_use]
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
