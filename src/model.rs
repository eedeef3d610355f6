//! Plan, day and stop records shared with the generation and places services.
//!
//! Field names on the wire follow the JSON the generation service emits
//! (`placeName`, `theme`, `places`, ...), so a plan round-trips unchanged.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Visit length assumed when a stop carries no usable duration.
pub const DEFAULT_DURATION_MINUTES: u32 = 90;

const MEAL_THEMES: &[&str] = &[
    "식사", "맛집", "음식", "카페", "식당", "meal", "food", "restaurant", "dining", "cafe",
    "breakfast", "brunch", "lunch", "dinner",
];

const ACTIVITY_THEMES: &[&str] = &[
    "액티비티", "체험", "쇼핑", "투어", "activity", "experience", "shopping", "tour",
];

/// A point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Activity category of a stop. Closed set; unknown themes fold into `Sightseeing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Category {
    Meal,
    #[default]
    Sightseeing,
    Activity,
}

impl Category {
    /// Normalize a free-form theme label ("식사", "Food & Drink", "activity").
    pub fn from_theme(theme: &str) -> Self {
        let theme = theme.trim().to_lowercase();
        if MEAL_THEMES.iter().any(|hint| theme.contains(hint)) {
            Category::Meal
        } else if ACTIVITY_THEMES.iter().any(|hint| theme.contains(hint)) {
            Category::Activity
        } else {
            Category::Sightseeing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meal => "meal",
            Category::Sightseeing => "sightseeing",
            Category::Activity => "activity",
        }
    }

    pub fn is_meal(&self) -> bool {
        matches!(self, Category::Meal)
    }
}

/// A missing or `null` theme reads as the default category.
impl From<Option<String>> for Category {
    fn from(theme: Option<String>) -> Self {
        theme.map_or_else(Category::default, |theme| Category::from_theme(&theme))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single place or activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    #[serde(rename = "placeName", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "theme", alias = "category", default)]
    pub category: Category,
    #[serde(rename = "location", default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Raw duration as generated; read through [`Stop::duration_minutes`].
    #[serde(
        rename = "durationMinutes",
        default,
        deserialize_with = "lenient_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_duration_minutes: Option<i64>,
    /// Position in the final visiting sequence, 0-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
    /// Estimated arrival, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approx_time: Option<String>,
}

impl Stop {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            coordinate: None,
            rating: None,
            user_rating_count: None,
            address: None,
            photo_url: None,
            raw_duration_minutes: None,
            order: None,
            approx_time: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.coordinate = Some(Coordinate::new(lat, lng));
        self
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.raw_duration_minutes = Some(minutes);
        self
    }

    pub fn with_rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = Some(rating);
        self.user_rating_count = Some(count);
        self
    }

    pub fn is_meal(&self) -> bool {
        self.category.is_meal()
    }

    pub fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }

    /// Visit length in minutes; missing, zero or negative values fall back to 90.
    pub fn duration_minutes(&self) -> u32 {
        match self.raw_duration_minutes {
            Some(minutes) if minutes > 0 => u32::try_from(minutes).unwrap_or(u32::MAX),
            _ => DEFAULT_DURATION_MINUTES,
        }
    }

    /// Name and description joined, lower-cased. Input to meal inference only.
    pub fn descriptive_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

/// Accepts integers, floats and numeric strings; anything else reads as absent.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|minutes| minutes.round() as i64)),
        Some(serde_json::Value::String(text)) => text.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// One day of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    #[serde(rename = "places", default)]
    pub stops: Vec<Stop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

#[derive(Debug)]
pub enum PlanError {
    Empty,
    Json(serde_json::Error),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Json(err)
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Empty => write!(f, "generated plan text is empty"),
            PlanError::Json(err) => write!(f, "generated plan is not valid JSON: {}", err),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Empty => None,
            PlanError::Json(err) => Some(err),
        }
    }
}

impl TravelPlan {
    /// Parse the raw text returned by the generation service.
    ///
    /// The model sometimes wraps its JSON in Markdown fences; those are removed
    /// before parsing.
    pub fn from_generated_text(text: &str) -> Result<Self, PlanError> {
        let cleaned = text.replace("```json", "").replace("```", "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Err(PlanError::Empty);
        }
        Ok(serde_json::from_str(cleaned)?)
    }
}
