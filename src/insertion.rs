//! Cheapest insertion of meal stops into a constructed tour.
//!
//! Meals go in one at a time (breakfast, lunch, dinner, then generic). Each
//! lands where detour distance plus timing and adjacency penalties is lowest.

use crate::cost::{temporal_penalty, MealSlot};
use crate::meal::{classify_meal, is_must_visit_meal, MealKind};
use crate::model::Stop;
use crate::solver::SolveOptions;
use crate::tour::two_opt;

/// Insert `meals` (indices into `stops` and `matrix`) into `tour`.
///
/// With no meals the tour comes back untouched. Otherwise a final 2-opt pass
/// shortens the path without moving any meal.
pub fn insert_meals(
    tour: Vec<usize>,
    meals: &[usize],
    stops: &[Stop],
    matrix: &[Vec<f64>],
    options: &SolveOptions,
) -> Vec<usize> {
    if meals.is_empty() {
        return tour;
    }

    let mut queue: Vec<(MealKind, usize)> = meals
        .iter()
        .map(|&meal| (classify_meal(&stops[meal]).unwrap_or(MealKind::Generic), meal))
        .collect();
    queue.sort_by_key(|(kind, _)| *kind);

    let count = queue.len();
    let mut route = tour;
    route.reserve(count);

    for (rank, (kind, meal)) in queue.into_iter().enumerate() {
        let position = best_position(&route, meal, kind, MealSlot { rank, count }, stops, matrix, options);
        tracing::trace!(meal = %stops[meal].name, ?kind, position, "meal inserted");
        route.insert(position, meal);
    }

    two_opt(&mut route, matrix, options, |node| stops[node].is_meal());
    route
}

fn best_position(
    route: &[usize],
    meal: usize,
    kind: MealKind,
    meal_slot: MealSlot,
    stops: &[Stop],
    matrix: &[Vec<f64>],
    options: &SolveOptions,
) -> usize {
    let len = route.len() + 1;
    let travel_weight = if is_must_visit_meal(&stops[meal]) {
        options.must_visit_travel_weight
    } else {
        options.default_travel_weight
    };

    let mut best_position = 0;
    let mut best_score = f64::INFINITY;

    for position in 0..=route.len() {
        let prev = position.checked_sub(1).map(|p| route[p]);
        let next = route.get(position).copied();

        let detour = match (prev, next) {
            (Some(p), Some(n)) => matrix[p][meal] + matrix[meal][n] - matrix[p][n],
            (Some(p), None) => matrix[p][meal],
            (None, Some(n)) => matrix[meal][n],
            (None, None) => 0.0,
        };

        let beside_meal = prev.is_some_and(|p| stops[p].is_meal()) || next.is_some_and(|n| stops[n].is_meal());
        let adjacency = if beside_meal {
            options.insertion_adjacency_penalty
        } else {
            0.0
        };

        let score = detour * travel_weight
            + temporal_penalty(kind, position, len, meal_slot, &options.penalties)
            + adjacency;

        if score < best_score {
            best_score = score;
            best_position = position;
        }
    }

    best_position
}
