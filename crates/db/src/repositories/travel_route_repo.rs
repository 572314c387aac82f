//! Repository for the `travel_routes` table.
//!
//! Rows are addressed by their (origin, destination) pair, which the
//! `uq_travel_routes_origin_destination` constraint keeps unique.

use sqlx::PgPool;

use crate::models::travel_route::{CreateTravelRoute, TravelRoute};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, origin, destination, price, created_at, updated_at";

/// Provides CRUD operations for travel routes.
pub struct TravelRouteRepo;

impl TravelRouteRepo {
    /// List every route, ordered by origin then destination.
    pub async fn list(pool: &PgPool) -> Result<Vec<TravelRoute>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM travel_routes ORDER BY origin, destination");
        sqlx::query_as::<_, TravelRoute>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the route for a given pair.
    pub async fn find_by_pair(
        pool: &PgPool,
        origin: &str,
        destination: &str,
    ) -> Result<Option<TravelRoute>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM travel_routes WHERE origin = $1 AND destination = $2");
        sqlx::query_as::<_, TravelRoute>(&query)
            .bind(origin)
            .bind(destination)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new route, returning the created row.
    ///
    /// A duplicate pair fails with the `uq_travel_routes_origin_destination`
    /// unique violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTravelRoute,
    ) -> Result<TravelRoute, sqlx::Error> {
        let query = format!(
            "INSERT INTO travel_routes (origin, destination, price) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TravelRoute>(&query)
            .bind(&input.origin)
            .bind(&input.destination)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Set the price of an existing route.
    ///
    /// Returns `None` if no row with the given pair exists.
    pub async fn update_price(
        pool: &PgPool,
        origin: &str,
        destination: &str,
        price: i32,
    ) -> Result<Option<TravelRoute>, sqlx::Error> {
        let query = format!(
            "UPDATE travel_routes SET price = $3 \
             WHERE origin = $1 AND destination = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TravelRoute>(&query)
            .bind(origin)
            .bind(destination)
            .bind(price)
            .fetch_optional(pool)
            .await
    }

    /// Delete the route for a pair. Returns `true` if a row was deleted.
    pub async fn delete_by_pair(
        pool: &PgPool,
        origin: &str,
        destination: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM travel_routes WHERE origin = $1 AND destination = $2")
            .bind(origin)
            .bind(destination)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
