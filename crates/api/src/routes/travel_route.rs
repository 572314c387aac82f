//! Route definitions for the `/travel-routes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::travel_route;
use crate::state::AppState;

/// Travel route routes mounted at `/travel-routes`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// PUT    /                               -> update (price, addressed by pair in body)
/// GET    /{origin}/{destination}         -> get_by_pair
/// DELETE /{origin}/{destination}         -> delete
/// GET    /best/{origin}/{destination}    -> best_route
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(travel_route::list)
                .post(travel_route::create)
                .put(travel_route::update),
        )
        .route(
            "/{origin}/{destination}",
            get(travel_route::get_by_pair).delete(travel_route::delete),
        )
        .route("/best/{origin}/{destination}", get(travel_route::best_route))
}
