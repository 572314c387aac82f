//! Travel route entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use travelroute_core::itinerary::Leg;
use travelroute_core::types::{DbId, Timestamp};

/// A row from the `travel_routes` table: one directed, priced leg.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TravelRoute {
    pub id: DbId,
    pub origin: String,
    pub destination: String,
    pub price: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TravelRoute {
    /// The leg this row contributes to the itinerary graph.
    pub fn to_leg(&self) -> Leg {
        Leg::new(
            self.origin.clone(),
            self.destination.clone(),
            i64::from(self.price),
        )
    }
}

/// DTO for inserting a travel route with already-normalized codes.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTravelRoute {
    pub origin: String,
    pub destination: String,
    pub price: i32,
}
