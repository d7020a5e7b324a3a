//! Filter and sort options for coworking spaces.

use std::cmp::Ordering;

use nomadplan_shared::CoworkingSpace;

use crate::{Choice, ItemFilter, ItemOrder, Queryable};

/// Upper bound (inclusive) of the budget tier, USD per day.
const BUDGET_MAX_PER_DAY: f64 = 20.0;

/// Upper bound (inclusive) of the mid-range tier, USD per day.
const MID_MAX_PER_DAY: f64 = 40.0;

impl Queryable for CoworkingSpace {
    type Filter = PriceRange;
    type Sort = CoworkingSort;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> [&str; 3] {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Price tier on the day rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceRange {
    #[default]
    All,
    /// At most $20/day.
    Budget,
    /// Above $20 and at most $40/day.
    Mid,
    /// Above $40/day.
    Premium,
}

impl PriceRange {
    /// The tier a day rate falls into, or `None` for a NaN rate.
    pub fn of(price_per_day: f64) -> Option<Self> {
        if price_per_day.is_nan() {
            None
        } else if price_per_day <= BUDGET_MAX_PER_DAY {
            Some(Self::Budget)
        } else if price_per_day <= MID_MAX_PER_DAY {
            Some(Self::Mid)
        } else {
            Some(Self::Premium)
        }
    }
}

impl Choice for PriceRange {
    const OPTIONS: &'static [Self] = &[Self::All, Self::Budget, Self::Mid, Self::Premium];

    fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Budget => "budget",
            Self::Mid => "mid",
            Self::Premium => "premium",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::Budget => "Budget (≤$20/day)",
            Self::Mid => "Mid-range ($21-40/day)",
            Self::Premium => "Premium (>$40/day)",
        }
    }

    fn fallback() -> Self {
        Self::All
    }
}

impl ItemFilter<CoworkingSpace> for PriceRange {
    fn matches(&self, item: &CoworkingSpace) -> bool {
        match self {
            Self::All => true,
            tier => PriceRange::of(item.price_per_day) == Some(*tier),
        }
    }
}

/// Sort keys. Rating and internet sort descending, price ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoworkingSort {
    #[default]
    Rating,
    Price,
    Internet,
    /// Any unrecognized key: input order is kept.
    Unsorted,
}

impl Choice for CoworkingSort {
    const OPTIONS: &'static [Self] = &[Self::Rating, Self::Price, Self::Internet];

    fn key(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Price => "price",
            Self::Internet => "internet",
            Self::Unsorted => "none",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Rating => "Highest Rated",
            Self::Price => "Lowest Price",
            Self::Internet => "Best Internet",
            Self::Unsorted => "Unsorted",
        }
    }

    fn fallback() -> Self {
        Self::Unsorted
    }
}

impl ItemOrder<CoworkingSpace> for CoworkingSort {
    fn compare(&self, a: &CoworkingSpace, b: &CoworkingSpace) -> Ordering {
        match self {
            Self::Rating => b.rating.total_cmp(&a.rating),
            Self::Price => a.price_per_day.total_cmp(&b.price_per_day),
            Self::Internet => b.internet_speed.cmp(&a.internet_speed),
            Self::Unsorted => Ordering::Equal,
        }
    }
}

/// Spaces belonging to a destination, in catalog order.
pub fn spaces_for_destination<'a>(
    spaces: &'a [CoworkingSpace],
    destination_id: &str,
) -> Vec<&'a CoworkingSpace> {
    spaces
        .iter()
        .filter(|s| s.destination_id == destination_id)
        .collect()
}
