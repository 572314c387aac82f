//! Travel route constants and validation functions.
//!
//! The itinerary engine trusts its input; these checks run at the store
//! boundary so that only well-formed codes and non-negative prices are
//! ever persisted.

use crate::types::Price;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Location codes are three-letter airport-style identifiers (e.g. "GRU").
pub const LOCATION_CODE_LENGTH: usize = 3;

/// Upper bound on a single leg price; matches the `INTEGER` column.
pub const MAX_LEG_PRICE: Price = i32::MAX as Price;

/// Legs present in a freshly migrated database.
pub const SEED_LEGS: &[(&str, &str, Price)] = &[
    ("GRU", "BRC", 10),
    ("BRC", "SCL", 5),
    ("GRU", "CDG", 75),
    ("GRU", "SCL", 20),
    ("GRU", "ORL", 56),
    ("ORL", "CDG", 5),
    ("SCL", "ORL", 20),
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Trim and upper-case a location code, then check it is exactly
/// [`LOCATION_CODE_LENGTH`] ASCII letters.
pub fn normalize_location_code(code: &str) -> Result<String, String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Err("Location code cannot be empty".to_string());
    }
    if normalized.len() != LOCATION_CODE_LENGTH
        || !normalized.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return Err(format!(
            "Invalid location code '{code}'. Must be {LOCATION_CODE_LENGTH} ASCII letters"
        ));
    }
    Ok(normalized)
}

/// Validate a leg price: non-negative and within the storable range.
pub fn validate_price(price: Price) -> Result<(), String> {
    if price < 0 {
        return Err(format!("Price must not be negative, got {price}"));
    }
    if price > MAX_LEG_PRICE {
        return Err(format!("Price exceeds maximum of {MAX_LEG_PRICE}"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
