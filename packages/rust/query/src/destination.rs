//! Filter and sort options for the destination catalog.

use std::cmp::Ordering;

use nomadplan_shared::Destination;

use crate::{Choice, ItemFilter, ItemOrder, Queryable};

impl Queryable for Destination {
    type Filter = DestinationFilter;
    type Sort = DestinationSort;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [self.name.as_str(), self.country.as_str(), self.description.as_str()]
    }
}

/// Tag-membership filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DestinationFilter {
    #[default]
    All,
    Beach,
    Affordable,
    StartupFriendly,
    Tropical,
    History,
}

impl Choice for DestinationFilter {
    const OPTIONS: &'static [Self] = &[
        Self::All,
        Self::Beach,
        Self::Affordable,
        Self::StartupFriendly,
        Self::Tropical,
        Self::History,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Beach => "beach",
            Self::Affordable => "affordable",
            Self::StartupFriendly => "startup-friendly",
            Self::Tropical => "tropical",
            Self::History => "history",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Categories",
            Self::Beach => "Beach",
            Self::Affordable => "Affordable",
            Self::StartupFriendly => "Startup Friendly",
            Self::Tropical => "Tropical",
            Self::History => "Historical",
        }
    }

    fn fallback() -> Self {
        Self::All
    }
}

impl ItemFilter<Destination> for DestinationFilter {
    fn matches(&self, item: &Destination) -> bool {
        match self {
            Self::All => true,
            tag => item.has_tag(tag.key()),
        }
    }
}

/// Sort keys. Quality metrics sort descending, cost ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DestinationSort {
    #[default]
    Rating,
    Cost,
    Internet,
    Safety,
    /// Any unrecognized key: input order is kept.
    Unsorted,
}

impl Choice for DestinationSort {
    const OPTIONS: &'static [Self] = &[Self::Rating, Self::Cost, Self::Internet, Self::Safety];

    fn key(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Cost => "cost",
            Self::Internet => "internet",
            Self::Safety => "safety",
            Self::Unsorted => "none",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Rating => "Highest Rated",
            Self::Cost => "Lowest Cost",
            Self::Internet => "Best Internet",
            Self::Safety => "Safest",
            Self::Unsorted => "Unsorted",
        }
    }

    fn fallback() -> Self {
        Self::Unsorted
    }
}

impl ItemOrder<Destination> for DestinationSort {
    fn compare(&self, a: &Destination, b: &Destination) -> Ordering {
        match self {
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Cost => a.cost_of_living.cmp(&b.cost_of_living),
            Self::Internet => b.internet_speed.cmp(&a.internet_speed),
            Self::Safety => b.safety_score.cmp(&a.safety_score),
            Self::Unsorted => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::query;

    fn many() -> Vec<Destination> {
        let mut items = fixtures::destinations();
        let mut chiang = fixtures::destination("3", "Chiang Mai", "Thailand", 4.7);
        chiang.cost_of_living = 700;
        chiang.internet_speed = 60;
        chiang.safety_score = 8;
        chiang.tags = vec!["affordable".into(), "history".into()];
        let mut medellin = fixtures::destination("4", "Medellín", "Colombia", 4.6);
        medellin.cost_of_living = 900;
        medellin.internet_speed = 100;
        medellin.safety_score = 6;
        medellin.tags = vec!["startup-friendly".into()];
        items.push(chiang);
        items.push(medellin);
        items
    }

    #[test]
    fn rating_sort_is_non_increasing() {
        let out = query(&many(), "", &DestinationFilter::All, &DestinationSort::Rating);
        assert!(out.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn rating_ties_keep_input_order() {
        let out = query(&many(), "", &DestinationFilter::All, &DestinationSort::Rating);
        let tied: Vec<_> = out
            .iter()
            .filter(|d| d.rating == 4.6)
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(tied, ["2", "4"]);
    }

    #[test]
    fn cost_sort_is_non_decreasing() {
        let out = query(&many(), "", &DestinationFilter::All, &DestinationSort::Cost);
        assert!(out.windows(2).all(|w| w[0].cost_of_living <= w[1].cost_of_living));
        assert_eq!(out[0].name, "Chiang Mai");
    }

    #[test]
    fn internet_and_safety_sort_descending() {
        let out = query(&many(), "", &DestinationFilter::All, &DestinationSort::Internet);
        assert!(out.windows(2).all(|w| w[0].internet_speed >= w[1].internet_speed));

        let out = query(&many(), "", &DestinationFilter::All, &DestinationSort::Safety);
        assert!(out.windows(2).all(|w| w[0].safety_score >= w[1].safety_score));
        assert_eq!(out[0].name, "Lisbon");
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let items = many();
        let out = query(&items, "", &DestinationFilter::All, &DestinationSort::Unsorted);
        assert_eq!(out, items);
    }

    #[test]
    fn tag_filter_requires_membership() {
        let out = query(&many(), "", &DestinationFilter::Tropical, &DestinationSort::Rating);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Canggu");

        let out = query(&many(), "", &DestinationFilter::History, &DestinationSort::Cost);
        let names: Vec<_> = out.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Chiang Mai", "Lisbon"]);
    }

    #[test]
    fn search_and_filter_combine() {
        let out = query(&many(), "nomad", &DestinationFilter::Affordable, &DestinationSort::Rating);
        let names: Vec<_> = out.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Lisbon", "Canggu"]);
    }

    #[test]
    fn country_is_searched() {
        let out = query(&many(), "colombia", &DestinationFilter::All, &DestinationSort::Rating);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "4");
    }

    #[test]
    fn unknown_filter_key_means_all() {
        assert_eq!(DestinationFilter::from_key("volcano"), DestinationFilter::All);
        assert_eq!(DestinationFilter::from_key("startup-friendly"), DestinationFilter::StartupFriendly);
    }
}
