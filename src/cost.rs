//! Route cost: travelled distance plus meal-timing penalties.

use crate::haversine::distance_km;
use crate::meal::{classify_meal, MealKind};
use crate::model::Stop;

/// Coefficients for the meal-timing penalty.
///
/// Only the relative ordering matters: a dinner before the 60% mark costs the
/// most, a late breakfast next, lunch drift and adjacent meals the least.
#[derive(Debug, Clone)]
pub struct PenaltyWeights {
    /// Breakfast is free up to `round(fraction * n)`.
    pub breakfast_cutoff_fraction: f64,
    pub breakfast_late_per_step: f64,
    /// Lunch is free at `round(fraction * n)`.
    pub lunch_center_fraction: f64,
    pub lunch_early_per_step: f64,
    pub lunch_late_per_step: f64,
    /// Dinner is free from `round(fraction * n)` on.
    pub dinner_threshold_fraction: f64,
    pub dinner_early_per_step: f64,
    /// Flat extra when a dinner lands in the first two slots.
    pub dinner_opening_penalty: f64,
    pub generic_per_step: f64,
    /// Per pair of back-to-back meals.
    pub adjacent_meal_penalty: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            breakfast_cutoff_fraction: 0.3,
            breakfast_late_per_step: 10.0,
            lunch_center_fraction: 0.45,
            lunch_early_per_step: 6.0,
            lunch_late_per_step: 4.0,
            dinner_threshold_fraction: 0.6,
            dinner_early_per_step: 18.0,
            dinner_opening_penalty: 45.0,
            generic_per_step: 8.0,
            adjacent_meal_penalty: 12.0,
        }
    }
}

/// Where a meal sits among the meals of its day; only used for `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealSlot {
    pub rank: usize,
    pub count: usize,
}

fn slot(fraction: f64, len: usize) -> f64 {
    (fraction * len as f64).round()
}

/// Timing penalty for a meal of `kind` at `position` in a sequence of `len`.
pub fn temporal_penalty(
    kind: MealKind,
    position: usize,
    len: usize,
    meal_slot: MealSlot,
    weights: &PenaltyWeights,
) -> f64 {
    let position = position as f64;

    match kind {
        MealKind::Breakfast => {
            let cutoff = slot(weights.breakfast_cutoff_fraction, len);
            (position - cutoff).max(0.0) * weights.breakfast_late_per_step
        }
        MealKind::Lunch => {
            let center = slot(weights.lunch_center_fraction, len);
            if position < center {
                (center - position) * weights.lunch_early_per_step
            } else {
                (position - center) * weights.lunch_late_per_step
            }
        }
        MealKind::Dinner => {
            let threshold = slot(weights.dinner_threshold_fraction, len);
            let mut penalty = (threshold - position).max(0.0) * weights.dinner_early_per_step;
            if position < 2.0 {
                penalty += weights.dinner_opening_penalty;
            }
            penalty
        }
        MealKind::Generic => {
            let span = len.saturating_sub(1) as f64;
            let expected =
                ((meal_slot.rank + 1) as f64 * span / (meal_slot.count + 1) as f64).round();
            (position - expected).abs() * weights.generic_per_step
        }
    }
}

/// Sum of great-circle legs between consecutive located stops.
///
/// Stops without a coordinate are skipped rather than breaking the chain.
pub fn route_cost(stops: &[Stop]) -> f64 {
    let mut located = stops.iter().filter_map(|stop| stop.coordinate);
    let Some(mut prev) = located.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for next in located {
        total += distance_km(prev, next);
        prev = next;
    }
    total
}

/// `route_cost` plus the timing penalty of every meal and a charge for each
/// pair of adjacent meals.
pub fn route_cost_with_temporal_penalty(stops: &[Stop], weights: &PenaltyWeights) -> f64 {
    route_cost(stops) + temporal_cost(stops, weights)
}

/// The penalty part of `route_cost_with_temporal_penalty`, without distance.
pub fn temporal_cost(stops: &[Stop], weights: &PenaltyWeights) -> f64 {
    let len = stops.len();
    let meal_count = stops.iter().filter(|stop| stop.is_meal()).count();

    let mut penalty = 0.0;
    let mut rank = 0;
    for (position, stop) in stops.iter().enumerate() {
        let Some(kind) = classify_meal(stop) else {
            continue;
        };
        penalty += temporal_penalty(kind, position, len, MealSlot { rank, count: meal_count }, weights);
        rank += 1;
    }

    let adjacent_pairs = stops
        .windows(2)
        .filter(|pair| pair[0].is_meal() && pair[1].is_meal())
        .count();
    penalty += adjacent_pairs as f64 * weights.adjacent_meal_penalty;
    penalty
}
