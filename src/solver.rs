//! Day route optimizer.
//!
//! Pure function of its input: located stops are reordered, unlocated stops
//! follow in their original order, and every stop gets a dense `order`.

use rayon::prelude::*;

use crate::cost::{route_cost, route_cost_with_temporal_penalty, temporal_cost, PenaltyWeights};
use crate::haversine::HaversineMatrix;
use crate::insertion::insert_meals;
use crate::model::{Coordinate, DayPlan, Stop, TravelPlan};
use crate::tour::{construct_tour, path_cost};
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Meal-timing penalty coefficients.
    pub penalties: PenaltyWeights,
    /// Detour multiplier for meals worth going out of the way for.
    pub must_visit_travel_weight: f64,
    /// Detour multiplier for ordinary meals.
    pub default_travel_weight: f64,
    /// Charged once when an inserted meal would touch another meal.
    pub insertion_adjacency_penalty: f64,
    /// Minimum gain (km) for a 2-opt move to count.
    pub improvement_epsilon_km: f64,
    /// Upper bound on full 2-opt passes.
    pub max_two_opt_passes: usize,
    /// Seed nearest-neighbor from every stop instead of only the first.
    pub multi_start: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            penalties: PenaltyWeights::default(),
            must_visit_travel_weight: 1.2,
            default_travel_weight: 2.8,
            insertion_adjacency_penalty: 16.0,
            improvement_epsilon_km: 0.001,
            max_two_opt_passes: 100,
            multi_start: true,
        }
    }
}

/// Optimize one day with haversine distances and default options.
pub fn optimize_day(stops: &[Stop]) -> Vec<Stop> {
    optimize_day_with(stops, &HaversineMatrix, &SolveOptions::default())
}

pub fn optimize_day_with<M>(stops: &[Stop], matrix_provider: &M, options: &SolveOptions) -> Vec<Stop>
where
    M: DistanceMatrixProvider,
{
    if stops.len() <= 2 {
        return stamp_order(stops.to_vec());
    }

    let (located, unlocated): (Vec<Stop>, Vec<Stop>) =
        stops.iter().cloned().partition(|stop| stop.has_coordinate());

    let located = if located.len() <= 2 {
        located
    } else {
        order_located(located, matrix_provider, options)
    };

    tracing::debug!(
        stops = stops.len(),
        located = located.len(),
        unlocated = unlocated.len(),
        distance_km = route_cost(&located),
        penalized_cost = route_cost_with_temporal_penalty(&located, &options.penalties),
        "day route optimized"
    );

    let mut ordered = located;
    ordered.extend(unlocated);
    stamp_order(ordered)
}

fn order_located<M>(located: Vec<Stop>, matrix_provider: &M, options: &SolveOptions) -> Vec<Stop>
where
    M: DistanceMatrixProvider,
{
    let coords: Vec<Coordinate> = located.iter().filter_map(|stop| stop.coordinate).collect();
    let matrix = matrix_provider.matrix_for(&coords);

    let n = coords.len();
    if matrix.len() != n || matrix.iter().any(|row| row.len() != n) {
        tracing::warn!(
            expected = n,
            rows = matrix.len(),
            "distance matrix has the wrong shape, keeping input order"
        );
        return located;
    }

    let (meals, others): (Vec<usize>, Vec<usize>) = (0..n).partition(|&i| located[i].is_meal());

    let tour = construct_tour(&others, &matrix, options);
    let route = insert_meals(tour, &meals, &located, &matrix, options);
    let ordered: Vec<Stop> = route.iter().map(|&i| located[i].clone()).collect();

    // the incoming order stands unless the new one is no longer and no worse
    // once meal timing is counted
    let incoming: Vec<usize> = (0..n).collect();
    let incoming_km = path_cost(&incoming, &matrix);
    let route_km = path_cost(&route, &matrix);
    let incoming_total = incoming_km + temporal_cost(&located, &options.penalties);
    let route_total = route_km + temporal_cost(&ordered, &options.penalties);

    if route_km > incoming_km + options.improvement_epsilon_km || route_total > incoming_total {
        tracing::debug!(
            incoming_km,
            route_km,
            incoming_total,
            route_total,
            "incoming order is already as good, keeping it"
        );
        return located;
    }
    ordered
}

fn stamp_order(mut stops: Vec<Stop>) -> Vec<Stop> {
    for (index, stop) in stops.iter_mut().enumerate() {
        stop.order = Some(index);
    }
    stops
}

/// Optimize every day of a plan independently.
///
/// Days run in parallel and come back in their original order.
pub fn optimize_plan<M>(plan: &TravelPlan, matrix_provider: &M, options: &SolveOptions) -> TravelPlan
where
    M: DistanceMatrixProvider + Sync,
{
    let days = plan
        .days
        .par_iter()
        .map(|day| DayPlan {
            day: day.day,
            stops: optimize_day_with(&day.stops, matrix_provider, options),
        })
        .collect();

    TravelPlan {
        title: plan.title.clone(),
        destination: plan.destination.clone(),
        days,
    }
}
