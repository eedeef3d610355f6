//! Approximate arrival times along an ordered day.
//!
//! A virtual clock starts at the day start and advances by each stop's
//! duration plus a transfer estimate derived from straight-line distance.

use crate::haversine::distance_km;
use crate::model::Stop;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    /// Clock value of the first stop, minutes from midnight.
    pub day_start_minutes: u32,
    /// Transfer minutes per straight-line kilometer.
    pub minutes_per_km: f64,
    pub min_transfer_minutes: u32,
    pub max_transfer_minutes: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            day_start_minutes: 9 * 60,
            minutes_per_km: 6.0,
            min_transfer_minutes: 10,
            max_transfer_minutes: 35,
        }
    }
}

/// Stamp `approx_time` on every stop using default options.
pub fn with_approx_times(stops: &[Stop]) -> Vec<Stop> {
    assign_approx_times(stops, &ScheduleOptions::default())
}

pub fn assign_approx_times(stops: &[Stop], options: &ScheduleOptions) -> Vec<Stop> {
    // clock and every step stay below one day, so the sums cannot overflow
    let mut clock = options.day_start_minutes % MINUTES_PER_DAY;
    let mut timed = Vec::with_capacity(stops.len());

    for (index, stop) in stops.iter().enumerate() {
        let mut stop = stop.clone();
        stop.approx_time = Some(format_clock(clock));

        clock = (clock + stop.duration_minutes() % MINUTES_PER_DAY) % MINUTES_PER_DAY;
        if let Some(next) = stops.get(index + 1) {
            let transfer = transfer_minutes(&stop, next, options) % MINUTES_PER_DAY;
            clock = (clock + transfer) % MINUTES_PER_DAY;
        }

        timed.push(stop);
    }

    timed
}

/// Travel time between two consecutive stops.
///
/// When either side has no coordinate the minimum transfer is assumed.
pub fn transfer_minutes(from: &Stop, to: &Stop, options: &ScheduleOptions) -> u32 {
    let (Some(a), Some(b)) = (from.coordinate, to.coordinate) else {
        return options.min_transfer_minutes;
    };

    let minutes = (distance_km(a, b) * options.minutes_per_km).round();
    let minutes = minutes.clamp(
        options.min_transfer_minutes as f64,
        options.max_transfer_minutes as f64,
    );
    minutes as u32
}

/// `HH:MM`, 24-hour, wrapping past midnight.
pub fn format_clock(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
