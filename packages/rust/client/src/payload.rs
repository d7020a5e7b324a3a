//! Request bodies for create and update calls.
//!
//! Create payloads leave out server-assigned fields (`id`, timestamps).
//! Patch payloads are partial: a `None` field is not serialized, so the
//! server keeps its current value.

use chrono::NaiveDate;
use nomadplan_shared::{
    Activity, Itinerary, Preferences, Trip, TripDestination, TripStatus, User, WorkType,
};
use serde::Serialize;

/// Body of `POST /trips`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destinations: Vec<TripDestination>,
    pub budget: u32,
    pub status: TripStatus,
}

impl From<&Trip> for NewTrip {
    fn from(trip: &Trip) -> Self {
        Self {
            user_id: trip.user_id.clone(),
            title: trip.title.clone(),
            description: trip.description.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            destinations: trip.destinations.clone(),
            budget: trip.budget,
            status: trip.status,
        }
    }
}

/// Body of `PUT /trips/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<TripDestination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    pub work_type: WorkType,
    pub budget: u32,
    pub preferences: Preferences,
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_type: Option<WorkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl UserPatch {
    /// Patch carrying every field of `after` that differs from `before`.
    pub fn diff(before: &User, after: &User) -> Self {
        fn changed<T: PartialEq + Clone>(a: &T, b: &T) -> Option<T> {
            (a != b).then(|| b.clone())
        }

        Self {
            name: changed(&before.name, &after.name),
            email: changed(&before.email, &after.email),
            avatar: changed(&before.avatar, &after.avatar),
            bio: changed(&before.bio, &after.bio),
            location: changed(&before.location, &after.location),
            work_type: changed(&before.work_type, &after.work_type),
            budget: changed(&before.budget, &after.budget),
            preferences: changed(&before.preferences, &after.preferences),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of `POST /itineraries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItinerary {
    pub trip_id: String,
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
}

impl From<&Itinerary> for NewItinerary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            trip_id: itinerary.trip_id.clone(),
            date: itinerary.date,
            activities: itinerary.activities.clone(),
        }
    }
}

/// Body of `PUT /itineraries/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
}
