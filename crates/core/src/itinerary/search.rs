//! Cheapest-path search over an [`AdjacencyMap`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::CoreError;
use crate::itinerary::graph::{AdjacencyMap, Leg};
use crate::types::Price;

/// A lowest-cost path, origin first and destination last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub stops: Vec<String>,
    pub total_price: Price,
}

/// Outcome of a cheapest-path query. `NotFound` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    Found(Itinerary),
    NotFound,
}

impl PathResult {
    pub fn into_itinerary(self) -> Option<Itinerary> {
        match self {
            PathResult::Found(itinerary) => Some(itinerary),
            PathResult::NotFound => None,
        }
    }
}

/// Build the adjacency for `legs` and search it in one call.
pub fn find_cheapest_route(
    legs: &[Leg],
    origin: &str,
    destination: &str,
) -> Result<PathResult, CoreError> {
    let adjacency = AdjacencyMap::build(legs);
    find_cheapest(&adjacency, origin, destination)
}

/// Find the cheapest path from `origin` to `destination`.
///
/// The frontier pops the smallest accumulated price first and, among equal
/// prices, the lexicographically smaller location code. That secondary key
/// decides which of several equal-cost paths is returned.
///
/// An origin without outgoing legs yields [`PathResult::NotFound`], even when
/// it equals the destination. An origin that does have outgoing legs and
/// equals the destination yields a single-stop itinerary at price zero.
///
/// Stale frontier entries (pushed before a cheaper price was recorded) are
/// skipped when popped instead of being removed eagerly.
///
/// Returns [`CoreError::Internal`] only if the predecessor chain is broken,
/// which cannot happen for non-negative prices.
pub fn find_cheapest<'a>(
    adjacency: &'a AdjacencyMap,
    origin: &'a str,
    destination: &str,
) -> Result<PathResult, CoreError> {
    if !adjacency.has_outgoing(origin) {
        return Ok(PathResult::NotFound);
    }

    let mut best_price: HashMap<&'a str, Price> = HashMap::new();
    let mut predecessor: HashMap<&'a str, &'a str> = HashMap::new();
    let mut frontier: BinaryHeap<Reverse<(Price, &'a str)>> = BinaryHeap::new();

    best_price.insert(origin, 0);
    frontier.push(Reverse((0, origin)));

    while let Some(Reverse((price, node))) = frontier.pop() {
        if best_price.get(node).is_some_and(|&known| price > known) {
            continue;
        }
        if node == destination {
            break;
        }
        let Some(neighbors) = adjacency.neighbors(node) else {
            continue;
        };

        for (next, leg_price) in neighbors {
            let candidate = price.saturating_add(*leg_price);
            let improves = match best_price.get(next.as_str()) {
                Some(&known) => candidate < known,
                None => true,
            };
            if improves {
                best_price.insert(next.as_str(), candidate);
                predecessor.insert(next.as_str(), node);
                frontier.push(Reverse((candidate, next.as_str())));
            }
        }
    }

    let Some(&total_price) = best_price.get(destination) else {
        return Ok(PathResult::NotFound);
    };
    let stops = reconstruct(&predecessor, origin, destination)?;

    Ok(PathResult::Found(Itinerary { stops, total_price }))
}

/// Walk predecessor links back from `destination` and reverse the walk.
fn reconstruct(
    predecessor: &HashMap<&str, &str>,
    origin: &str,
    destination: &str,
) -> Result<Vec<String>, CoreError> {
    let mut stops = vec![destination.to_string()];
    let mut current = destination;

    while current != origin {
        // A walk longer than the predecessor table means a cycle.
        if stops.len() > predecessor.len() + 1 {
            return Err(CoreError::Internal(format!(
                "Predecessor chain from {destination} loops without reaching {origin}"
            )));
        }
        current = predecessor.get(current).copied().ok_or_else(|| {
            CoreError::Internal(format!(
                "Missing predecessor for {current} while rebuilding path {origin} -> {destination}"
            ))
        })?;
        stops.push(current.to_string());
    }

    stops.reverse();
    Ok(stops)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn legs(raw: &[(&str, &str, Price)]) -> Vec<Leg> {
        raw.iter()
            .map(|&(origin, destination, price)| Leg::new(origin, destination, price))
            .collect()
    }

    fn seeded_legs() -> Vec<Leg> {
        legs(&[
            ("GRU", "BRC", 10),
            ("BRC", "SCL", 5),
            ("GRU", "CDG", 75),
            ("GRU", "SCL", 20),
            ("GRU", "ORL", 56),
            ("ORL", "CDG", 5),
            ("SCL", "ORL", 20),
        ])
    }

    fn found(result: PathResult) -> Itinerary {
        match result {
            PathResult::Found(itinerary) => itinerary,
            PathResult::NotFound => panic!("expected a path, got NotFound"),
        }
    }

    /// Sum of the cheapest leg between each consecutive pair of stops.
    fn priced_walk(legs: &[Leg], stops: &[String]) -> Option<Price> {
        stops.windows(2).try_fold(0, |acc, pair| {
            legs.iter()
                .filter(|leg| leg.origin == pair[0] && leg.destination == pair[1])
                .map(|leg| leg.price)
                .min()
                .map(|price| acc + price)
        })
    }

    /// Cheapest simple-path cost by exhaustive enumeration.
    fn brute_force_cost(legs: &[Leg], origin: &str, destination: &str) -> Option<Price> {
        fn walk(
            legs: &[Leg],
            at: &str,
            destination: &str,
            visited: &mut Vec<String>,
            cost: Price,
            best: &mut Option<Price>,
        ) {
            if at == destination {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            for leg in legs.iter().filter(|leg| leg.origin == at) {
                if visited.contains(&leg.destination) {
                    continue;
                }
                visited.push(leg.destination.clone());
                walk(legs, &leg.destination, destination, visited, cost + leg.price, best);
                visited.pop();
            }
        }

        let mut best = None;
        walk(legs, origin, destination, &mut vec![origin.to_string()], 0, &mut best);
        best
    }

    #[test]
    fn seeded_network_prefers_multi_hop_route() {
        let itinerary = found(find_cheapest_route(&seeded_legs(), "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "BRC", "SCL", "ORL", "CDG"]);
        assert_eq!(itinerary.total_price, 40);
    }

    #[test]
    fn single_direct_leg() {
        let itinerary =
            found(find_cheapest_route(&legs(&[("GRU", "CDG", 50)]), "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "CDG"]);
        assert_eq!(itinerary.total_price, 50);
    }

    #[test]
    fn equal_cost_tie_goes_to_smaller_code() {
        let input = legs(&[
            ("GRU", "BRC", 10),
            ("BRC", "CDG", 30),
            ("GRU", "SCL", 10),
            ("SCL", "CDG", 30),
        ]);
        let itinerary = found(find_cheapest_route(&input, "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "BRC", "CDG"]);
        assert_eq!(itinerary.total_price, 40);
    }

    #[test]
    fn tie_break_ignores_input_order() {
        let input = legs(&[
            ("SCL", "CDG", 30),
            ("GRU", "SCL", 10),
            ("BRC", "CDG", 30),
            ("GRU", "BRC", 10),
        ]);
        let itinerary = found(find_cheapest_route(&input, "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "BRC", "CDG"]);
    }

    #[test]
    fn empty_leg_list_has_no_route() {
        assert_eq!(find_cheapest_route(&[], "XYZ", "ABC").unwrap(), PathResult::NotFound);
    }

    #[test]
    fn unknown_destination_has_no_route() {
        let result = find_cheapest_route(&seeded_legs(), "GRU", "JFK").unwrap();
        assert_matches!(result, PathResult::NotFound);
    }

    #[test]
    fn origin_without_outgoing_legs_has_no_route() {
        // CDG is only ever a destination.
        let result = find_cheapest_route(&seeded_legs(), "CDG", "GRU").unwrap();
        assert_matches!(result, PathResult::NotFound);
    }

    #[test]
    fn disconnected_component_has_no_route() {
        let input = legs(&[("GRU", "BRC", 10), ("MIA", "JFK", 5)]);
        let result = find_cheapest_route(&input, "GRU", "JFK").unwrap();
        assert_matches!(result, PathResult::NotFound);
    }

    #[test]
    fn legs_are_directed() {
        let input = legs(&[("GRU", "CDG", 50)]);
        assert_matches!(
            find_cheapest_route(&input, "CDG", "GRU").unwrap(),
            PathResult::NotFound
        );
    }

    #[test]
    fn same_origin_and_destination_is_a_free_trip() {
        let itinerary = found(find_cheapest_route(&seeded_legs(), "GRU", "GRU").unwrap());
        assert_eq!(itinerary.stops, ["GRU"]);
        assert_eq!(itinerary.total_price, 0);
    }

    #[test]
    fn same_origin_and_destination_with_self_loop_is_still_free() {
        let input = legs(&[("GRU", "GRU", 15)]);
        let itinerary = found(find_cheapest_route(&input, "GRU", "GRU").unwrap());
        assert_eq!(itinerary.stops, ["GRU"]);
        assert_eq!(itinerary.total_price, 0);
    }

    #[test]
    fn same_origin_and_destination_without_outgoing_legs_has_no_route() {
        let result = find_cheapest_route(&seeded_legs(), "CDG", "CDG").unwrap();
        assert_matches!(result, PathResult::NotFound);
    }

    #[test]
    fn cheaper_parallel_leg_wins() {
        let input = legs(&[("GRU", "CDG", 80), ("GRU", "CDG", 45), ("GRU", "CDG", 60)]);
        let itinerary = found(find_cheapest_route(&input, "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "CDG"]);
        assert_eq!(itinerary.total_price, 45);
    }

    #[test]
    fn cycles_terminate() {
        let input = legs(&[
            ("GRU", "BRC", 1),
            ("BRC", "SCL", 1),
            ("SCL", "GRU", 1),
            ("SCL", "CDG", 7),
        ]);
        let itinerary = found(find_cheapest_route(&input, "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "BRC", "SCL", "CDG"]);
        assert_eq!(itinerary.total_price, 9);
    }

    #[test]
    fn zero_priced_legs_are_followed() {
        let input = legs(&[("GRU", "BRC", 0), ("BRC", "CDG", 0), ("GRU", "CDG", 1)]);
        let itinerary = found(find_cheapest_route(&input, "GRU", "CDG").unwrap());
        assert_eq!(itinerary.stops, ["GRU", "BRC", "CDG"]);
        assert_eq!(itinerary.total_price, 0);
    }

    #[test]
    fn repeated_queries_return_identical_results() {
        let input = seeded_legs();
        let adjacency = AdjacencyMap::build(&input);
        let first = find_cheapest(&adjacency, "GRU", "CDG").unwrap();
        let second = find_cheapest(&adjacency, "GRU", "CDG").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn found_paths_are_consistent_and_optimal() {
        let input = legs(&[
            ("AAA", "BBB", 4),
            ("AAA", "CCC", 1),
            ("CCC", "BBB", 2),
            ("BBB", "DDD", 5),
            ("CCC", "DDD", 8),
            ("DDD", "EEE", 3),
            ("BBB", "EEE", 9),
            ("EEE", "AAA", 2),
            ("CCC", "EEE", 12),
        ]);
        let codes = ["AAA", "BBB", "CCC", "DDD", "EEE", "ZZZ"];

        for origin in codes {
            for destination in codes {
                let result = find_cheapest_route(&input, origin, destination).unwrap();
                let expected = if AdjacencyMap::build(&input).has_outgoing(origin) {
                    brute_force_cost(&input, origin, destination)
                } else {
                    None
                };

                match result {
                    PathResult::Found(itinerary) => {
                        assert_eq!(itinerary.stops.first().unwrap(), origin);
                        assert_eq!(itinerary.stops.last().unwrap(), destination);
                        assert_eq!(
                            priced_walk(&input, &itinerary.stops),
                            Some(itinerary.total_price),
                            "{origin} -> {destination}"
                        );
                        assert_eq!(Some(itinerary.total_price), expected, "{origin} -> {destination}");
                    }
                    PathResult::NotFound => {
                        assert_eq!(expected, None, "{origin} -> {destination}");
                    }
                }
            }
        }
    }

    #[test]
    fn broken_predecessor_chain_is_an_internal_error() {
        let predecessor = HashMap::from([("CDG", "ORL")]);
        let err = reconstruct(&predecessor, "GRU", "CDG").unwrap_err();
        assert_matches!(err, CoreError::Internal(_));
    }

    #[test]
    fn looping_predecessor_chain_is_an_internal_error() {
        let predecessor = HashMap::from([("CDG", "ORL"), ("ORL", "CDG")]);
        let err = reconstruct(&predecessor, "GRU", "CDG").unwrap_err();
        assert_matches!(err, CoreError::Internal(_));
    }
}
