//! itinerary-planner core
//!
//! Orders the stops of a single travel day into a visiting sequence.

pub mod model;
pub mod traits;
pub mod haversine;
pub mod meal;
pub mod cost;
pub mod tour;
pub mod insertion;
pub mod solver;
pub mod schedule;
pub mod places;
pub mod polyline;

pub use model::{Category, Coordinate, DayPlan, PlanError, Stop, TravelPlan};
pub use schedule::with_approx_times;
pub use solver::{optimize_day, optimize_day_with, optimize_plan, SolveOptions};
