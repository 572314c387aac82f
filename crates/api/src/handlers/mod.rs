//! Request handlers.
//!
//! Handlers validate input with `travelroute_core`, delegate persistence to
//! the [`RouteStore`](travelroute_db::store::RouteStore) in [`AppState`](crate::state::AppState)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod travel_route;
