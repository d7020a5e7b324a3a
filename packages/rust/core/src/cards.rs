//! Text for destination and coworking cards.

use nomadplan_shared::{CoworkingSpace, Destination};

/// Tags shown on a destination card.
pub const CARD_TAG_LIMIT: usize = 3;

/// Amenities shown on a coworking card before the `+N more` badge.
pub const CARD_AMENITY_LIMIT: usize = 4;

/// Whole-dollar amount with thousands separators, e.g. `$5,000`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A price at full precision without a trailing `.0`, e.g. `25` or `12.5`.
pub fn format_price(amount: f64) -> String {
    format!("{amount}")
}

/// Cost, internet, safety and weather facts.
pub fn destination_facts(d: &Destination) -> [String; 4] {
    [
        format!("${}/mo", d.cost_of_living),
        format!("{} Mbps", d.internet_speed),
        format!("Safety {}/10", d.safety_score),
        format!("Weather {}/10", d.weather_score),
    ]
}

/// The first tags of a destination card.
pub fn tag_preview(d: &Destination) -> &[String] {
    &d.tags[..d.tags.len().min(CARD_TAG_LIMIT)]
}

/// Internet, opening hours and monthly price.
pub fn coworking_facts(s: &CoworkingSpace) -> [String; 3] {
    [
        format!("{} Mbps", s.internet_speed),
        s.opening_hours.clone(),
        format!("${}/mo", format_price(s.price_per_month)),
    ]
}

/// Day-rate badge, e.g. `$25/day`.
pub fn day_rate(s: &CoworkingSpace) -> String {
    format!("${}/day", format_price(s.price_per_day))
}

/// The first amenities, plus a `+N more` entry when some are hidden.
pub fn amenity_preview(s: &CoworkingSpace) -> Vec<String> {
    let mut shown: Vec<String> = s
        .amenities
        .iter()
        .take(CARD_AMENITY_LIMIT)
        .cloned()
        .collect();
    let hidden = s.amenities.len().saturating_sub(CARD_AMENITY_LIMIT);
    if hidden > 0 {
        shown.push(format!("+{hidden} more"));
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn usd_thousands_separators() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(5000), "$5,000");
        assert_eq!(format_usd(1234567), "$1,234,567");
    }

    #[test]
    fn price_trims_zero_fraction() {
        assert_eq!(format_price(25.0), "25");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(9.99), "9.99");
        assert_eq!(format_price(12.999), "12.999");
        assert_eq!(format_price(0.005), "0.005");
    }

    #[test]
    fn lisbon_card() {
        let catalog = Catalog::mock().unwrap();
        let lisbon = &catalog.destinations[0];
        assert_eq!(
            destination_facts(lisbon),
            ["$1200/mo", "100 Mbps", "Safety 9/10", "Weather 8/10"]
        );
        assert_eq!(tag_preview(lisbon), ["beach", "history", "affordable"]);
    }

    #[test]
    fn dojo_card_collapses_amenities() {
        let catalog = Catalog::mock().unwrap();
        let dojo = &catalog.coworking_spaces[1];
        assert_eq!(day_rate(dojo), "$15/day");
        assert_eq!(coworking_facts(dojo), ["100 Mbps", "8:00 - 22:00", "$120/mo"]);
        assert_eq!(
            amenity_preview(dojo),
            ["High-speed WiFi", "Pool", "Cafe", "Events", "+1 more"]
        );
    }

    #[test]
    fn four_amenities_have_no_more_badge() {
        let catalog = Catalog::mock().unwrap();
        let outsite = &catalog.coworking_spaces[0];
        assert_eq!(amenity_preview(outsite).len(), 4);
    }
}
