//! Meal subtype inference from free text.
//!
//! Lexical only: the name and description are lower-cased and matched against
//! fixed keyword sets.

use crate::model::Stop;

pub const BREAKFAST_HINTS: &[&str] = &["breakfast", "brunch", "bakery", "coffee", "cafe", "morning", "아침"];

pub const LUNCH_HINTS: &[&str] = &["lunch", "bistro", "deli", "sandwich", "noodle", "ramen", "점심"];

pub const DINNER_HINTS: &[&str] = &[
    "dinner", "supper", "bbq", "grill", "steak", "izakaya", "bar", "wine", "fine dining", "night", "저녁",
];

pub const MUST_VISIT_HINTS: &[&str] = &["michelin", "famous", "signature", "iconic", "award", "must-visit"];

pub const MUST_VISIT_MIN_RATING: f64 = 4.7;
pub const MUST_VISIT_MIN_RATING_COUNT: u32 = 1200;

/// Time-of-day flavour of a meal stop.
///
/// Declaration order is insertion priority: breakfast first, generic last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
    Generic,
}

fn score(text: &str, hints: &[&str]) -> usize {
    hints.iter().filter(|hint| text.contains(*hint)).count()
}

/// Classify a meal stop. Returns `None` for non-meal categories.
///
/// Highest keyword score wins; on ties the later meal of the day wins
/// (dinner over lunch over breakfast). No hits at all gives `Generic`.
pub fn classify_meal(stop: &Stop) -> Option<MealKind> {
    if !stop.is_meal() {
        return None;
    }

    let text = stop.descriptive_text();
    let breakfast = score(&text, BREAKFAST_HINTS);
    let lunch = score(&text, LUNCH_HINTS);
    let dinner = score(&text, DINNER_HINTS);

    let kind = if breakfast == 0 && lunch == 0 && dinner == 0 {
        MealKind::Generic
    } else if dinner >= lunch && dinner >= breakfast {
        MealKind::Dinner
    } else if lunch >= breakfast {
        MealKind::Lunch
    } else {
        MealKind::Breakfast
    };

    Some(kind)
}

/// Whether a meal is worth a longer detour.
pub fn is_must_visit_meal(stop: &Stop) -> bool {
    if !stop.is_meal() {
        return false;
    }

    let text = stop.descriptive_text();
    if MUST_VISIT_HINTS.iter().any(|hint| text.contains(hint)) {
        return true;
    }

    matches!(
        (stop.rating, stop.user_rating_count),
        (Some(rating), Some(count)) if rating >= MUST_VISIT_MIN_RATING && count >= MUST_VISIT_MIN_RATING_COUNT
    )
}
