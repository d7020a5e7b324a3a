//! Destination detail lookup.

use nomadplan_query::{find_by_id, spaces_for_destination};
use nomadplan_shared::{CoworkingSpace, Destination};

use crate::Catalog;

/// A destination together with the coworking spaces located there.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDetail<'a> {
    pub destination: &'a Destination,
    pub spaces: Vec<&'a CoworkingSpace>,
}

/// Look up a destination by id. `None` is the not-found state, not an error.
pub fn destination_detail<'a>(catalog: &'a Catalog, id: &str) -> Option<DestinationDetail<'a>> {
    let destination = find_by_id(&catalog.destinations, id)?;
    let spaces = spaces_for_destination(&catalog.coworking_spaces, &destination.id);
    tracing::debug!(id, spaces = spaces.len(), "destination detail resolved");
    Some(DestinationDetail {
        destination,
        spaces,
    })
}
