//! Handlers for the `/travel-routes` resource.
//!
//! Routes are addressed by their (origin, destination) pair. The best-route
//! endpoint reads a fresh snapshot of every stored leg and runs the
//! cheapest-itinerary engine over it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};
use travelroute_core::error::CoreError;
use travelroute_core::itinerary::{find_cheapest_route, Itinerary, Leg};
use travelroute_core::travel_route::{normalize_location_code, validate_price};
use travelroute_core::types::Price;
use travelroute_db::models::travel_route::{CreateTravelRoute, TravelRoute};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "TravelRoute";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of POST and PUT: a route addressed by its pair, with a price.
///
/// The price is read at full width so that out-of-range values reach
/// [`validate_price`] instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct TravelRouteInput {
    pub origin: String,
    pub destination: String,
    pub price: Price,
}

impl TravelRouteInput {
    /// Normalize both codes and check the price fits a stored route.
    fn validate(self) -> AppResult<CreateTravelRoute> {
        let (origin, destination) = pair(&self.origin, &self.destination)?;
        Ok(CreateTravelRoute {
            origin,
            destination,
            price: price(self.price)?,
        })
    }
}

/// Cheapest itinerary between two locations.
#[derive(Debug, Serialize)]
pub struct BestRouteResponse {
    pub stops: Vec<String>,
    pub total_price: Price,
    /// Display form, e.g. `GRU - BRC - CDG at a cost of $40`.
    pub description: String,
}

impl From<Itinerary> for BestRouteResponse {
    fn from(itinerary: Itinerary) -> Self {
        let description = describe_itinerary(&itinerary);
        Self {
            stops: itinerary.stops,
            total_price: itinerary.total_price,
            description,
        }
    }
}

/// Render an itinerary as `A - B - C at a cost of $N`.
pub fn describe_itinerary(itinerary: &Itinerary) -> String {
    format!(
        "{} at a cost of ${}",
        itinerary.stops.join(" - "),
        itinerary.total_price
    )
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn location_code(raw: &str) -> AppResult<String> {
    normalize_location_code(raw).map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}

fn price(raw: Price) -> AppResult<i32> {
    validate_price(raw).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    i32::try_from(raw).map_err(|e| AppError::Core(CoreError::Internal(e.to_string())))
}

fn pair(origin: &str, destination: &str) -> AppResult<(String, String)> {
    Ok((location_code(origin)?, location_code(destination)?))
}

fn not_found(origin: &str, destination: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY,
        key: format!("{origin} -> {destination}"),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/travel-routes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TravelRoute>>>> {
    let routes = state.store.list().await?;
    Ok(Json(DataResponse { data: routes }))
}

/// POST /api/v1/travel-routes
///
/// Rejects a pair that already exists with 409. Bodies that are not valid
/// JSON for [`TravelRouteInput`] get 400 `BAD_REQUEST`.
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<TravelRouteInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<TravelRoute>>)> {
    let Json(input) = input?;
    let input = input.validate()?;

    if state
        .store
        .find(&input.origin, &input.destination)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Route from {} to {} already exists",
            input.origin, input.destination
        ))));
    }

    let route = state.store.insert(&input).await?;

    tracing::info!(
        route_id = route.id,
        origin = %route.origin,
        destination = %route.destination,
        price = route.price,
        "Travel route created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: route })))
}

/// GET /api/v1/travel-routes/{origin}/{destination}
pub async fn get_by_pair(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<TravelRoute>>> {
    let (origin, destination) = pair(&origin, &destination)?;
    let route = state
        .store
        .find(&origin, &destination)
        .await?
        .ok_or_else(|| not_found(&origin, &destination))?;
    Ok(Json(DataResponse { data: route }))
}

/// PUT /api/v1/travel-routes
///
/// Changes the price of the route identified by the body's pair.
pub async fn update(
    State(state): State<AppState>,
    input: Result<Json<TravelRouteInput>, JsonRejection>,
) -> AppResult<Json<DataResponse<TravelRoute>>> {
    let Json(input) = input?;
    let CreateTravelRoute {
        origin,
        destination,
        price,
    } = input.validate()?;

    let route = state
        .store
        .update_price(&origin, &destination, price)
        .await?
        .ok_or_else(|| not_found(&origin, &destination))?;

    tracing::info!(
        route_id = route.id,
        origin = %route.origin,
        destination = %route.destination,
        price = route.price,
        "Travel route price updated"
    );

    Ok(Json(DataResponse { data: route }))
}

/// DELETE /api/v1/travel-routes/{origin}/{destination}
pub async fn delete(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let (origin, destination) = pair(&origin, &destination)?;
    if state.store.delete(&origin, &destination).await? {
        tracing::info!(%origin, %destination, "Travel route deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&origin, &destination))
    }
}

/// GET /api/v1/travel-routes/best/{origin}/{destination}
///
/// Cheapest itinerary over the current set of stored routes.
pub async fn best_route(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<BestRouteResponse>>> {
    let (origin, destination) = pair(&origin, &destination)?;

    let legs: Vec<Leg> = state
        .store
        .list()
        .await?
        .iter()
        .map(TravelRoute::to_leg)
        .collect();

    tracing::debug!(%origin, %destination, legs = legs.len(), "Searching cheapest itinerary");

    let itinerary = find_cheapest_route(&legs, &origin, &destination)?
        .into_itinerary()
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Itinerary",
                key: format!("{origin} -> {destination}"),
            })
        })?;

    Ok(Json(DataResponse {
        data: itinerary.into(),
    }))
}
