//! Landing view content.

use nomadplan_shared::Destination;

use crate::Catalog;

/// Headline figures shown under the hero banner.
pub const HEADLINE_STATS: [(&str, &str); 3] = [
    ("Destinations", "500+"),
    ("Nomads", "10k+"),
    ("Trips Planned", "50k+"),
];

/// Destinations featured on the landing view.
pub fn featured(catalog: &Catalog) -> &[Destination] {
    &catalog.destinations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_lists_catalog_destinations() {
        let catalog = Catalog::mock().unwrap();
        let names: Vec<_> = featured(&catalog).iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Lisbon", "Canggu"]);
    }
}
