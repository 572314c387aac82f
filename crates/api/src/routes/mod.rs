pub mod health;
pub mod travel_route;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /travel-routes                                   list, create, update price
/// /travel-routes/{origin}/{destination}            get, delete
/// /travel-routes/best/{origin}/{destination}       cheapest itinerary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/travel-routes", travel_route::router())
}
