//! Adjacency construction from a flat list of priced legs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// One directly-flyable, directed connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub origin: String,
    pub destination: String,
    pub price: Price,
}

impl Leg {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, price: Price) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            price,
        }
    }
}

/// Outgoing `(destination, price)` pairs keyed by origin code.
///
/// Parallel legs between the same pair are all retained, in input order.
/// Codes that only ever appear as a destination have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    edges: HashMap<String, Vec<(String, Price)>>,
}

impl AdjacencyMap {
    /// Group `legs` by origin. No validation: codes and prices pass through as-is.
    pub fn build<'a, I>(legs: I) -> Self
    where
        I: IntoIterator<Item = &'a Leg>,
    {
        let mut edges: HashMap<String, Vec<(String, Price)>> = HashMap::new();
        for leg in legs {
            edges
                .entry(leg.origin.clone())
                .or_default()
                .push((leg.destination.clone(), leg.price));
        }
        Self { edges }
    }

    /// Legs leaving `code`, or `None` if it has no outgoing entry.
    pub fn neighbors(&self, code: &str) -> Option<&[(String, Price)]> {
        self.edges.get(code).map(Vec::as_slice)
    }

    pub fn has_outgoing(&self, code: &str) -> bool {
        self.edges.contains_key(code)
    }
}

impl<'a> FromIterator<&'a Leg> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = &'a Leg>>(iter: I) -> Self {
        Self::build(iter)
    }
}
