//! Trip cards: status tone, dates, duration, budget.

use chrono::NaiveDate;
use nomadplan_shared::{Trip, TripStatus};

use crate::cards::format_usd;

/// Days per month in the duration approximation.
const DAYS_PER_MONTH: i64 = 30;

/// Display tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Blue.
    Info,
    /// Green.
    Success,
    /// Gray.
    Muted,
}

pub fn status_tone(status: TripStatus) -> StatusTone {
    match status {
        TripStatus::Planning => StatusTone::Info,
        TripStatus::Active => StatusTone::Success,
        TripStatus::Completed => StatusTone::Muted,
    }
}

/// `Mar 1, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Trip length as whole 30-day months plus remaining days.
///
/// Renders `"{m}m {d}d"` when there is at least one month, otherwise
/// `"{d} days"`. Months are a flat 30 days, so this drifts from the calendar
/// over long spans. Argument order does not matter.
pub fn format_duration(start: NaiveDate, end: NaiveDate) -> String {
    let days = (end - start).num_days().abs();
    let months = days / DAYS_PER_MONTH;
    let rest = days % DAYS_PER_MONTH;

    if months > 0 {
        format!("{months}m {rest}d")
    } else {
        format!("{rest} days")
    }
}

/// Everything a trip card shows, pre-formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct TripCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TripStatus,
    pub tone: StatusTone,
    pub starts: String,
    pub duration: String,
    pub budget: String,
    pub destinations: String,
}

impl From<&Trip> for TripCard {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.clone(),
            title: trip.title.clone(),
            description: trip.description.clone(),
            status: trip.status,
            tone: status_tone(trip.status),
            starts: format_date(trip.start_date),
            duration: format_duration(trip.start_date, trip.end_date),
            budget: format!("{} budget", format_usd(trip.budget)),
            destinations: format!("{} destinations", trip.destinations.len()),
        }
    }
}

/// Cards for every trip, in list order.
pub fn trip_cards(trips: &[Trip]) -> Vec<TripCard> {
    trips.iter().map(TripCard::from).collect()
}
