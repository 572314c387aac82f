//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod travel_route_repo;

pub use travel_route_repo::TravelRouteRepo;
