//! Collection query pipeline: free-text search, one categorical filter, and a
//! sort key applied to an in-memory collection.
//!
//! The pipeline is generic over [`Queryable`] items. This crate provides:
//! - [`query`] / [`Query`]: run the search → filter → sort chain
//! - [`Choice`]: closed, cyclable option sets parsed leniently from keys
//! - Destination options ([`DestinationFilter`], [`DestinationSort`])
//! - Coworking options ([`PriceRange`], [`CoworkingSort`])
//!
//! Nothing here fails. Unknown filter keys mean "all", unknown sort keys
//! leave the order untouched, and the input slice is never modified.

mod choice;
mod coworking;
mod destination;
mod search;

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

pub use choice::Choice;
pub use coworking::{CoworkingSort, PriceRange, spaces_for_destination};
pub use destination::{DestinationFilter, DestinationSort};
pub use search::matches_search;

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A predicate narrowing a collection.
pub trait ItemFilter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// A named ordering over a collection.
pub trait ItemOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// An entity the pipeline can run over.
pub trait Queryable: Clone {
    /// The entity's categorical/range filter.
    type Filter: Choice + ItemFilter<Self>;
    /// The entity's sort keys.
    type Sort: Choice + ItemOrder<Self>;

    /// Identifier, unique within a collection.
    fn id(&self) -> &str;

    /// String fields the free-text search looks into.
    fn search_fields(&self) -> [&str; 3];
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run search, filter, and sort over `items`, returning a new ordered vector.
pub fn query<T: Queryable>(items: &[T], search: &str, filter: &T::Filter, sort: &T::Sort) -> Vec<T> {
    let mut out: Vec<T> = items
        .iter()
        .filter(|item| matches_search(&item.search_fields(), search))
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();

    // `sort_by` is stable, so ties keep their input order.
    out.sort_by(|a, b| sort.compare(a, b));

    debug!(
        total = items.len(),
        matched = out.len(),
        search,
        filter = filter.key(),
        sort = sort.key(),
        "query applied"
    );
    out
}

/// Look up an item by identifier.
pub fn find_by_id<'a, T: Queryable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// The search text, filter and sort currently selected on a list view.
pub struct Query<T: Queryable> {
    pub search: String,
    pub filter: T::Filter,
    pub sort: T::Sort,
}

impl<T: Queryable> Query<T> {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            filter: T::Filter::default(),
            sort: T::Sort::default(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, filter: T::Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: T::Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Set the filter from a key; unknown keys select "all".
    pub fn with_filter_key(self, key: &str) -> Self {
        self.with_filter(T::Filter::from_key(key))
    }

    /// Set the sort from a key; unknown keys leave items in input order.
    pub fn with_sort_key(self, key: &str) -> Self {
        self.with_sort(T::Sort::from_key(key))
    }

    pub fn apply(&self, items: &[T]) -> Vec<T> {
        query(items, &self.search, &self.filter, &self.sort)
    }

    /// Clear the search text and reset the filter. The sort key is kept.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filter = T::Filter::default();
    }

    /// Whether search text or a non-default filter narrows the view.
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || self.filter != T::Filter::default()
    }
}

impl<T: Queryable> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Queryable> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            search: self.search.clone(),
            filter: self.filter,
            sort: self.sort,
        }
    }
}

impl<T: Queryable> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("search", &self.search)
            .field("filter", &self.filter.key())
            .field("sort", &self.sort.key())
            .finish()
    }
}

/// Heading such as `2 destinations found` or `1 coworking space found`.
pub fn results_heading(count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{plural} found")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use nomadplan_shared::{Coordinates, CoworkingSpace, Destination};

    pub(crate) fn destination(id: &str, name: &str, country: &str, rating: f64) -> Destination {
        Destination {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            description: format!("{name} for remote workers"),
            image_url: String::new(),
            rating,
            cost_of_living: 1000,
            internet_speed: 50,
            weather_score: 7,
            safety_score: 7,
            timezone: "GMT+0".into(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            tags: Vec::new(),
        }
    }

    /// Lisbon and Canggu as shipped in the demo catalog.
    pub(crate) fn destinations() -> Vec<Destination> {
        let mut lisbon = destination("1", "Lisbon", "Portugal", 4.8);
        lisbon.description =
            "Perfect blend of old-world charm and modern amenities for digital nomads.".into();
        lisbon.cost_of_living = 1200;
        lisbon.internet_speed = 100;
        lisbon.safety_score = 9;
        lisbon.tags = vec![
            "beach".into(),
            "history".into(),
            "affordable".into(),
            "startup-friendly".into(),
        ];

        let mut canggu = destination("2", "Canggu", "Indonesia", 4.6);
        canggu.description = "Tropical paradise with a thriving digital nomad community.".into();
        canggu.cost_of_living = 800;
        canggu.internet_speed = 50;
        canggu.safety_score = 7;
        canggu.tags = vec![
            "beach".into(),
            "surfing".into(),
            "tropical".into(),
            "affordable".into(),
        ];

        vec![lisbon, canggu]
    }

    pub(crate) fn space(id: &str, name: &str, price_per_day: f64, rating: f64) -> CoworkingSpace {
        CoworkingSpace {
            id: id.into(),
            name: name.into(),
            destination_id: "1".into(),
            address: format!("{name} street"),
            description: "desks".into(),
            image_url: String::new(),
            rating,
            price_per_day,
            price_per_month: price_per_day * 8.0,
            amenities: Vec::new(),
            internet_speed: 100,
            opening_hours: "24/7".into(),
            website: None,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        }
    }

    /// Outsite (25/day), Dojo (15/day), Second Home (30/day).
    pub(crate) fn spaces() -> Vec<CoworkingSpace> {
        let mut outsite = space("1", "Outsite Lisbon", 25.0, 4.7);
        outsite.address = "R. Rodrigues Sampaio 50, Lisboa".into();
        outsite.internet_speed = 200;
        let mut dojo = space("2", "Dojo Bali", 15.0, 4.8);
        dojo.destination_id = "2".into();
        dojo.address = "Jl. Batu Mejan, Canggu".into();
        dojo.internet_speed = 100;
        let mut second = space("3", "Second Home Lisboa", 30.0, 4.6);
        second.address = "Cais do Sodré, Lisboa".into();
        second.internet_speed = 150;
        vec![outsite, dojo, second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nomadplan_shared::{CoworkingSpace, Destination};

    fn ids<T: Queryable>(items: &[T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn search_for_lisbon_returns_only_lisbon() {
        let items = fixtures::destinations();
        let out = query(&items, "lisbon", &DestinationFilter::All, &DestinationSort::Rating);
        assert_eq!(ids(&out), ["1"]);
    }

    #[test]
    fn budget_tier_returns_only_cheap_space() {
        let items = fixtures::spaces();
        let out = query(&items, "", &PriceRange::Budget, &CoworkingSort::Rating);
        assert_eq!(ids(&out), ["2"]);
        assert_eq!(out[0].price_per_day, 15.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let items = fixtures::spaces();
        let before = items.clone();
        let _ = query(&items, "lisboa", &PriceRange::All, &CoworkingSort::Price);
        assert_eq!(items, before);
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = fixtures::destinations();
        for filter in DestinationFilter::OPTIONS {
            for text in ["", "a", "beach", "PORTUGAL", "nomad"] {
                let once = query(&items, text, filter, &DestinationSort::Rating);
                let twice = query(&once, text, filter, &DestinationSort::Rating);
                assert_eq!(once, twice, "filter={filter:?} text={text}");
            }
        }

        let spaces = fixtures::spaces();
        for filter in PriceRange::OPTIONS {
            let once = query(&spaces, "", filter, &CoworkingSort::Price);
            let twice = query(&once, "", filter, &CoworkingSort::Price);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn every_sort_is_a_permutation() {
        let items = fixtures::destinations();
        let mut expected = ids(&items);
        expected.sort();
        for sort in DestinationSort::OPTIONS.iter().chain([&DestinationSort::Unsorted]) {
            let mut got = ids(&query(&items, "", &DestinationFilter::All, sort));
            got.sort();
            assert_eq!(got, expected, "sort={sort:?}");
        }

        let spaces = fixtures::spaces();
        let mut expected = ids(&spaces);
        expected.sort();
        for sort in CoworkingSort::OPTIONS {
            let mut got = ids(&query(&spaces, "", &PriceRange::All, sort));
            got.sort();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn clearing_restores_unfiltered_view() {
        let items = fixtures::destinations();
        let mut q: Query<Destination> = Query::new()
            .with_search("canggu")
            .with_filter(DestinationFilter::Tropical)
            .with_sort(DestinationSort::Cost);
        assert_eq!(q.apply(&items).len(), 1);
        assert!(q.is_narrowed());

        q.clear_filters();
        assert!(!q.is_narrowed());
        assert_eq!(q.sort, DestinationSort::Cost);
        assert_eq!(
            q.apply(&items),
            query(&items, "", &DestinationFilter::All, &DestinationSort::Cost)
        );
        assert_eq!(q.apply(&items).len(), items.len());
    }

    #[test]
    fn unknown_keys_degrade_to_no_op() {
        let spaces = fixtures::spaces();
        let q: Query<CoworkingSpace> = Query::new()
            .with_filter_key("luxury")
            .with_sort_key("distance");
        assert_eq!(q.filter, PriceRange::All);
        assert_eq!(q.sort, CoworkingSort::Unsorted);
        assert_eq!(ids(&q.apply(&spaces)), ["1", "2", "3"]);
    }

    #[test]
    fn default_query_sorts_by_rating() {
        let spaces = fixtures::spaces();
        let q: Query<CoworkingSpace> = Query::default();
        assert_eq!(ids(&q.apply(&spaces)), ["2", "1", "3"]);
    }

    #[test]
    fn find_by_id_returns_none_for_missing() {
        let items = fixtures::destinations();
        assert_eq!(find_by_id(&items, "2").map(|d| d.name.as_str()), Some("Canggu"));
        assert!(find_by_id(&items, "99").is_none());
    }

    #[test]
    fn heading_pluralizes() {
        assert_eq!(results_heading(1, "destination"), "1 destination found");
        assert_eq!(results_heading(0, "coworking space"), "0 coworking spaces found");
        assert_eq!(results_heading(3, "coworking space"), "3 coworking spaces found");
    }
}
