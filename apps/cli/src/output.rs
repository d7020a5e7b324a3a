//! Plain-text rendering for CLI output.

use std::fmt::Write;

use nomadplan_core::cards::{
    amenity_preview, coworking_facts, day_rate, destination_facts, format_usd, tag_preview,
};
use nomadplan_core::home::HEADLINE_STATS;
use nomadplan_core::profile::profile_stats;
use nomadplan_core::trips::{StatusTone, TripCard};
use nomadplan_core::DestinationDetail;
use nomadplan_shared::{CoworkingSpace, Destination, PreferenceCategory, User};

pub(crate) fn home(featured: &[Destination]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Work from anywhere. Live everywhere.");
    let _ = writeln!(out);
    for (label, value) in HEADLINE_STATS {
        let _ = writeln!(out, "  {value:>6}  {label}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Featured destinations");
    for destination in featured {
        out.push_str(&destination_card(destination));
    }
    out
}

pub(crate) fn destination_card(d: &Destination) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  [{}] {}, {}  ★ {:.1}", d.id, d.name, d.country, d.rating);
    let _ = writeln!(out, "      {}", d.description);
    let _ = writeln!(out, "      {}", destination_facts(d).join(" · "));
    let tags = tag_preview(d);
    if !tags.is_empty() {
        let _ = writeln!(out, "      #{}", tags.join(" #"));
    }
    out
}

pub(crate) fn destination_detail(detail: &DestinationDetail<'_>) -> String {
    let d = detail.destination;
    let mut out = String::new();
    let _ = writeln!(out, "{}, {}  ★ {:.1}", d.name, d.country, d.rating);
    let _ = writeln!(out, "{}", d.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Cost of living  ${}/mo", d.cost_of_living);
    let _ = writeln!(out, "  Internet        {} Mbps", d.internet_speed);
    let _ = writeln!(out, "  Safety          {}/10", d.safety_score);
    let _ = writeln!(out, "  Weather         {}/10", d.weather_score);
    let _ = writeln!(out, "  Timezone        {}", d.timezone);
    let _ = writeln!(out, "  Coordinates     {}", d.coordinates);
    if !d.tags.is_empty() {
        let _ = writeln!(out, "  Tags            {}", d.tags.join(", "));
    }
    let _ = writeln!(out);

    if detail.spaces.is_empty() {
        let _ = writeln!(out, "No coworking spaces listed yet");
    } else {
        let _ = writeln!(out, "Coworking spaces in {}", d.name);
        for space in &detail.spaces {
            out.push_str(&coworking_card(space));
        }
    }
    out
}

pub(crate) fn coworking_card(s: &CoworkingSpace) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  [{}] {}  ★ {:.1}  {}", s.id, s.name, s.rating, day_rate(s));
    let _ = writeln!(out, "      {}", s.address);
    let _ = writeln!(out, "      {}", coworking_facts(s).join(" · "));
    let amenities = amenity_preview(s);
    if !amenities.is_empty() {
        let _ = writeln!(out, "      {}", amenities.join(", "));
    }
    if let Some(website) = &s.website {
        let _ = writeln!(out, "      {website}");
    }
    out
}

pub(crate) fn trip_card(card: &TripCard) -> String {
    let badge = match card.tone {
        StatusTone::Info => format!("({})", card.status),
        StatusTone::Success => format!("<{}>", card.status),
        StatusTone::Muted => format!("-{}-", card.status),
    };

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "  [{}] {}  {badge}", card.id, card.title);
    let _ = writeln!(out, "      {}", card.description);
    let _ = writeln!(
        out,
        "      Starts {} · {} · {} · {}",
        card.starts, card.duration, card.budget, card.destinations
    );
    out
}

pub(crate) fn profile(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "({}) {}", user.initial(), user.name);
    let _ = writeln!(out, "{} · {}", user.work_type, user.email);
    if let Some(location) = &user.location {
        let _ = writeln!(out, "{location}");
    }
    if let Some(bio) = &user.bio {
        let _ = writeln!(out);
        let _ = writeln!(out, "{bio}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Monthly budget  {}", format_usd(user.budget));
    for category in PreferenceCategory::ALL {
        let values = user.preferences.get(category);
        let shown = if values.is_empty() {
            "none".to_string()
        } else {
            values.join(", ")
        };
        let _ = writeln!(out, "{:<15} {shown}", category.label());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Stats");
    for (label, value) in profile_stats(user) {
        let _ = writeln!(out, "  {label:<18} {value}");
    }
    out
}
