//! Core domain types for the travel planner.
//!
//! Every type serializes with camelCase field names, which is the JSON shape
//! the REST API speaks. Identifiers are opaque strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NomadError;

/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date, read as
/// midnight UTC.
fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`")))
}

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

// ---------------------------------------------------------------------------
// Destination / CoworkingSpace
// ---------------------------------------------------------------------------

/// A city or region in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique within the collection.
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    /// 0 to 5 stars.
    pub rating: f64,
    /// USD per month.
    pub cost_of_living: u32,
    /// Mbps.
    pub internet_speed: u32,
    /// 1 to 10.
    pub weather_score: u8,
    /// 1 to 10.
    pub safety_score: u8,
    /// Free-text label such as `GMT+8`.
    pub timezone: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Destination {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A coworking space located in a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoworkingSpace {
    pub id: String,
    pub name: String,
    /// Owning destination. Not checked against the destination catalog.
    pub destination_id: String,
    pub address: String,
    pub description: String,
    pub image_url: String,
    pub rating: f64,
    /// USD.
    pub price_per_day: f64,
    /// USD.
    pub price_per_month: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Mbps.
    pub internet_speed: u32,
    pub opening_hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub coordinates: Coordinates,
}

// ---------------------------------------------------------------------------
// Trip
// ---------------------------------------------------------------------------

/// Lifecycle state of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Planning,
    Active,
    Completed,
}

impl TripStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = NomadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(NomadError::validation(format!(
                "unknown trip status '{other}': expected planning, active or completed"
            ))),
        }
    }
}

/// A destination leg inside a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDestination {
    pub destination_id: String,
    pub destination: Destination,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
    /// Coworking space identifiers.
    #[serde(default)]
    pub coworking_spaces: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// A planned, ongoing, or finished journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub destinations: Vec<TripDestination>,
    /// USD.
    pub budget: u32,
    pub status: TripStatus,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// User / Profile
// ---------------------------------------------------------------------------

/// The kind of work a user does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkType {
    #[serde(rename = "Software Developer")]
    SoftwareDeveloper,
    Designer,
    #[serde(rename = "Content Creator")]
    ContentCreator,
    Consultant,
    Freelancer,
    Entrepreneur,
}

impl WorkType {
    /// Every variant in display order.
    pub const ALL: [WorkType; 6] = [
        Self::SoftwareDeveloper,
        Self::Designer,
        Self::ContentCreator,
        Self::Consultant,
        Self::Freelancer,
        Self::Entrepreneur,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SoftwareDeveloper => "Software Developer",
            Self::Designer => "Designer",
            Self::ContentCreator => "Content Creator",
            Self::Consultant => "Consultant",
            Self::Freelancer => "Freelancer",
            Self::Entrepreneur => "Entrepreneur",
        }
    }

    /// The next variant, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous variant, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkType {
    type Err = NomadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| {
                w.label().eq_ignore_ascii_case(wanted)
                    || w.label().replace(' ', "-").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| NomadError::validation(format!("unknown work type '{wanted}'")))
    }
}

/// The three independent preference label sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceCategory {
    Climate,
    Activities,
    WorkingStyle,
}

impl PreferenceCategory {
    pub const ALL: [PreferenceCategory; 3] = [Self::Climate, Self::Activities, Self::WorkingStyle];

    pub fn label(self) -> &'static str {
        match self {
            Self::Climate => "Climate",
            Self::Activities => "Activities",
            Self::WorkingStyle => "Working Style",
        }
    }

    /// Values a user can pick from for this category.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Climate => &["tropical", "warm", "mild", "cool", "cold"],
            Self::Activities => &["surfing", "hiking", "coworking", "nightlife", "culture", "food"],
            Self::WorkingStyle => &["quiet", "collaborative", "flexible", "structured"],
        }
    }
}

impl fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PreferenceCategory {
    type Err = NomadError;

    /// Accepts `climate`, `activities`, and `working-style` (or `working_style`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "climate" => Ok(Self::Climate),
            "activities" => Ok(Self::Activities),
            "working-style" | "workingstyle" => Ok(Self::WorkingStyle),
            other => Err(NomadError::validation(format!(
                "unknown preference category '{other}': expected climate, activities or working-style"
            ))),
        }
    }
}

/// Travel preferences attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub climate: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub working_style: Vec<String>,
}

impl Preferences {
    pub fn get(&self, category: PreferenceCategory) -> &[String] {
        match category {
            PreferenceCategory::Climate => &self.climate,
            PreferenceCategory::Activities => &self.activities,
            PreferenceCategory::WorkingStyle => &self.working_style,
        }
    }

    pub fn get_mut(&mut self, category: PreferenceCategory) -> &mut Vec<String> {
        match category {
            PreferenceCategory::Climate => &mut self.climate,
            PreferenceCategory::Activities => &mut self.activities,
            PreferenceCategory::WorkingStyle => &mut self.working_style,
        }
    }
}

/// A registered user and their profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub work_type: WorkType,
    /// Monthly budget in USD.
    pub budget: u32,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Single-letter avatar fallback.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

// ---------------------------------------------------------------------------
// Itinerary / Activity
// ---------------------------------------------------------------------------

/// What an activity is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Work,
    Leisure,
    Travel,
    Meeting,
}

/// One entry in a day's itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// The plan for one day of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub trip_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Itinerary {
    /// Sum of the activities that carry a cost.
    pub fn total_cost(&self) -> f64 {
        self.activities.iter().filter_map(|a| a.cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/destination.fixture.json")
            .expect("read fixture");
        let parsed: Destination =
            serde_json::from_str(&fixture).expect("deserialize fixture destination");
        assert_eq!(parsed.name, "Lisbon");
        assert_eq!(parsed.cost_of_living, 1200);
        assert!(parsed.has_tag("startup-friendly"));
        assert!(!parsed.has_tag("surfing"));
    }

    #[test]
    fn trip_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/trip.fixture.json")
            .expect("read fixture");
        let parsed: Trip = serde_json::from_str(&fixture).expect("deserialize fixture trip");
        assert_eq!(parsed.status, TripStatus::Planning);
        assert_eq!(parsed.destinations.len(), 1);
        assert_eq!(parsed.destinations[0].destination.name, "Lisbon");
        assert_eq!(parsed.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn date_only_timestamps_read_as_midnight_utc() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/trip.fixture.json")
            .expect("read fixture");
        let mut value: serde_json::Value = serde_json::from_str(&fixture).expect("parse");
        value["createdAt"] = "2024-01-15".into();
        value["updatedAt"] = "2024-02-01T10:30:00+02:00".into();
        let parsed: Trip = serde_json::from_value(value.clone()).expect("deserialize trip");
        assert_eq!(parsed.created_at.to_rfc3339(), "2024-01-15T00:00:00+00:00");
        assert_eq!(parsed.updated_at.to_rfc3339(), "2024-02-01T08:30:00+00:00");

        value["createdAt"] = "January 15th".into();
        assert!(serde_json::from_value::<Trip>(value).is_err());
    }

    #[test]
    fn user_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/user.fixture.json")
            .expect("read fixture");
        let parsed: User = serde_json::from_str(&fixture).expect("deserialize fixture user");
        assert_eq!(parsed.work_type, WorkType::SoftwareDeveloper);
        assert_eq!(parsed.preferences.working_style, vec!["quiet", "collaborative"]);
        assert_eq!(parsed.initial(), 'A');
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let space = CoworkingSpace {
            id: "9".into(),
            name: "Hub".into(),
            destination_id: "1".into(),
            address: "Main St".into(),
            description: "desk".into(),
            image_url: "img".into(),
            rating: 4.0,
            price_per_day: 12.0,
            price_per_month: 90.0,
            amenities: vec![],
            internet_speed: 80,
            opening_hours: "24/7".into(),
            website: None,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        };
        let json = serde_json::to_value(&space).expect("serialize");
        assert_eq!(json["destinationId"], "1");
        assert_eq!(json["pricePerDay"], 12.0);
        assert!(json.get("website").is_none());
    }

    #[test]
    fn activity_type_field_is_named_type() {
        let json = r#"{"id":"a1","title":"Standup","description":"","startTime":"09:00",
            "endTime":"09:15","location":"Dojo","type":"meeting"}"#;
        let activity: Activity = serde_json::from_str(json).expect("deserialize");
        assert_eq!(activity.kind, ActivityType::Meeting);
        assert_eq!(activity.cost, None);
    }

    #[test]
    fn trip_status_parsing() {
        assert_eq!("Active".parse::<TripStatus>().unwrap(), TripStatus::Active);
        assert!("cancelled".parse::<TripStatus>().is_err());
        assert_eq!(TripStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn work_type_cycles_and_parses() {
        assert_eq!(WorkType::Entrepreneur.next(), WorkType::SoftwareDeveloper);
        assert_eq!(WorkType::SoftwareDeveloper.prev(), WorkType::Entrepreneur);
        assert_eq!("content-creator".parse::<WorkType>().unwrap(), WorkType::ContentCreator);
        assert_eq!("designer".parse::<WorkType>().unwrap(), WorkType::Designer);
    }

    #[test]
    fn preference_category_parsing() {
        assert_eq!(
            "working_style".parse::<PreferenceCategory>().unwrap(),
            PreferenceCategory::WorkingStyle
        );
        assert_eq!(
            "Climate".parse::<PreferenceCategory>().unwrap(),
            PreferenceCategory::Climate
        );
        assert!("food".parse::<PreferenceCategory>().is_err());
    }

    #[test]
    fn preferences_by_category() {
        let mut prefs = Preferences::default();
        prefs.get_mut(PreferenceCategory::Activities).push("hiking".into());
        assert_eq!(prefs.get(PreferenceCategory::Activities), ["hiking".to_string()]);
        assert!(prefs.get(PreferenceCategory::Climate).is_empty());
    }

    #[test]
    fn itinerary_total_cost_skips_free_activities() {
        let day = Itinerary {
            id: "i1".into(),
            trip_id: "1".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            activities: vec![
                Activity {
                    id: "a".into(),
                    title: "Desk".into(),
                    description: String::new(),
                    start_time: "09:00".into(),
                    end_time: "17:00".into(),
                    location: "Outsite".into(),
                    kind: ActivityType::Work,
                    cost: Some(25.0),
                },
                Activity {
                    id: "b".into(),
                    title: "Walk".into(),
                    description: String::new(),
                    start_time: "18:00".into(),
                    end_time: "19:00".into(),
                    location: "Alfama".into(),
                    kind: ActivityType::Leisure,
                    cost: None,
                },
            ],
        };
        assert_eq!(day.total_cost(), 25.0);
    }

    #[test]
    fn coordinates_display_four_decimals() {
        let c = Coordinates {
            lat: 38.7223,
            lng: -9.1393,
        };
        assert_eq!(c.to_string(), "38.7223, -9.1393");
    }
}
