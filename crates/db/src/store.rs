//! Route Store: the collaborator that owns travel routes and hands the
//! itinerary engine a fresh snapshot of every leg on demand.
//!
//! [`PgRouteStore`] backs production; [`InMemoryRouteStore`] serves local
//! development without a database and the HTTP test suites.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use travelroute_core::travel_route::SEED_LEGS;
use travelroute_core::types::DbId;

use crate::models::travel_route::{CreateTravelRoute, TravelRoute};
use crate::repositories::TravelRouteRepo;
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Route from {origin} to {destination} already exists")]
    Duplicate { origin: String, destination: String },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD over travel routes keyed by (origin, destination).
///
/// Codes are expected to be normalized by the caller; stores compare them
/// byte-for-byte.
#[async_trait]
pub trait RouteStore: Send + Sync {
    /// Every stored route, ordered by origin then destination.
    async fn list(&self) -> StoreResult<Vec<TravelRoute>>;

    async fn find(&self, origin: &str, destination: &str) -> StoreResult<Option<TravelRoute>>;

    /// Insert a route. Fails with [`StoreError::Duplicate`] if the pair exists.
    async fn insert(&self, input: &CreateTravelRoute) -> StoreResult<TravelRoute>;

    /// Returns `None` if the pair does not exist.
    async fn update_price(
        &self,
        origin: &str,
        destination: &str,
        price: i32,
    ) -> StoreResult<Option<TravelRoute>>;

    /// Returns `true` if a route was removed.
    async fn delete(&self, origin: &str, destination: &str) -> StoreResult<bool>;

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`RouteStore`] over the `travel_routes` table.
pub struct PgRouteStore {
    pool: DbPool,
}

impl PgRouteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteStore for PgRouteStore {
    async fn list(&self) -> StoreResult<Vec<TravelRoute>> {
        Ok(TravelRouteRepo::list(&self.pool).await?)
    }

    async fn find(&self, origin: &str, destination: &str) -> StoreResult<Option<TravelRoute>> {
        Ok(TravelRouteRepo::find_by_pair(&self.pool, origin, destination).await?)
    }

    async fn insert(&self, input: &CreateTravelRoute) -> StoreResult<TravelRoute> {
        TravelRouteRepo::create(&self.pool, input)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    StoreError::Duplicate {
                        origin: input.origin.clone(),
                        destination: input.destination.clone(),
                    }
                }
                other => StoreError::Database(other),
            })
    }

    async fn update_price(
        &self,
        origin: &str,
        destination: &str,
        price: i32,
    ) -> StoreResult<Option<TravelRoute>> {
        Ok(TravelRouteRepo::update_price(&self.pool, origin, destination, price).await?)
    }

    async fn delete(&self, origin: &str, destination: &str) -> StoreResult<bool> {
        Ok(TravelRouteRepo::delete_by_pair(&self.pool, origin, destination).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryTable {
    next_id: DbId,
    routes: Vec<TravelRoute>,
}

/// [`RouteStore`] held in process memory. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryRouteStore {
    table: RwLock<MemoryTable>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the same legs the initial migration seeds.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let routes: Vec<TravelRoute> = SEED_LEGS
            .iter()
            .zip(1..)
            .map(|(&(origin, destination, price), id)| TravelRoute {
                id,
                origin: origin.to_string(),
                destination: destination.to_string(),
                price: price as i32,
                created_at: now,
                updated_at: now,
            })
            .collect();

        Self {
            table: RwLock::new(MemoryTable {
                next_id: routes.len() as DbId,
                routes,
            }),
        }
    }
}

fn sorted(mut routes: Vec<TravelRoute>) -> Vec<TravelRoute> {
    routes.sort_by(|a, b| (&a.origin, &a.destination).cmp(&(&b.origin, &b.destination)));
    routes
}

#[async_trait]
impl RouteStore for InMemoryRouteStore {
    async fn list(&self) -> StoreResult<Vec<TravelRoute>> {
        let table = self.table.read().await;
        Ok(sorted(table.routes.clone()))
    }

    async fn find(&self, origin: &str, destination: &str) -> StoreResult<Option<TravelRoute>> {
        let table = self.table.read().await;
        Ok(table
            .routes
            .iter()
            .find(|r| r.origin == origin && r.destination == destination)
            .cloned())
    }

    async fn insert(&self, input: &CreateTravelRoute) -> StoreResult<TravelRoute> {
        let mut table = self.table.write().await;
        if table
            .routes
            .iter()
            .any(|r| r.origin == input.origin && r.destination == input.destination)
        {
            return Err(StoreError::Duplicate {
                origin: input.origin.clone(),
                destination: input.destination.clone(),
            });
        }

        table.next_id += 1;
        let now = Utc::now();
        let route = TravelRoute {
            id: table.next_id,
            origin: input.origin.clone(),
            destination: input.destination.clone(),
            price: input.price,
            created_at: now,
            updated_at: now,
        };
        table.routes.push(route.clone());
        tracing::debug!(id = route.id, "In-memory route inserted");
        Ok(route)
    }

    async fn update_price(
        &self,
        origin: &str,
        destination: &str,
        price: i32,
    ) -> StoreResult<Option<TravelRoute>> {
        let mut table = self.table.write().await;
        let updated = table
            .routes
            .iter_mut()
            .find(|r| r.origin == origin && r.destination == destination)
            .map(|route| {
                route.price = price;
                route.updated_at = Utc::now();
                route.clone()
            });
        Ok(updated)
    }

    async fn delete(&self, origin: &str, destination: &str) -> StoreResult<bool> {
        let mut table = self.table.write().await;
        let before = table.routes.len();
        table
            .routes
            .retain(|r| !(r.origin == origin && r.destination == destination));
        Ok(table.routes.len() < before)
    }
}
