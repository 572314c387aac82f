//! Travel route domain logic.
//!
//! Pure, synchronous building blocks shared by the store and the HTTP layer:
//! the cheapest-itinerary engine, travel route validation, shared type
//! aliases and the domain error type.

pub mod error;
pub mod itinerary;
pub mod travel_route;
pub mod types;
