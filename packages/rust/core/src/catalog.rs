//! The session's data: destinations, coworking spaces, trips, and the profile.
//!
//! By default the catalog is the bundled demo data. [`Catalog::fetch`] loads
//! the same shape from the REST API instead.

use nomadplan_client::ApiClient;
use nomadplan_shared::{CoworkingSpace, Destination, NomadError, Result, Trip, User};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Demo data bundled into the binary.
const MOCK_CATALOG: &str = include_str!("../data/mock_catalog.json");

/// Everything a session renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    pub coworking_spaces: Vec<CoworkingSpace>,
    pub trips: Vec<Trip>,
    pub profile: User,
}

impl Catalog {
    /// The bundled demo catalog.
    pub fn mock() -> Result<Self> {
        Self::from_json(MOCK_CATALOG)
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)
            .map_err(|e| NomadError::decode(format!("invalid catalog: {e}")))?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    /// Load the catalog for `user_id` from the API.
    ///
    /// There is no list-all endpoint for coworking spaces, so they are
    /// gathered per destination.
    #[instrument(skip_all, fields(base_url = client.base_url(), user_id))]
    pub async fn fetch(client: &ApiClient, user_id: &str) -> Result<Self> {
        let destinations = client.destinations().get_all().await?;

        let mut coworking_spaces = Vec::new();
        for destination in &destinations {
            let spaces = client.coworking().get_by_destination(&destination.id).await?;
            coworking_spaces.extend(spaces);
        }

        let trips = client.trips().get_all(user_id).await?;
        let profile = client.users().get_by_id(user_id).await?;

        let catalog = Self {
            destinations,
            coworking_spaces,
            trips,
            profile,
        };
        catalog.check_unique_ids()?;

        info!(
            destinations = catalog.destinations.len(),
            coworking_spaces = catalog.coworking_spaces.len(),
            trips = catalog.trips.len(),
            "catalog loaded from API"
        );
        Ok(catalog)
    }

    fn check_unique_ids(&self) -> Result<()> {
        check_unique("destination", self.destinations.iter().map(|d| d.id.as_str()))?;
        check_unique(
            "coworking space",
            self.coworking_spaces.iter().map(|s| s.id.as_str()),
        )?;
        check_unique("trip", self.trips.iter().map(|t| t.id.as_str()))
    }
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(NomadError::validation(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nomadplan_client::ClientOptions;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn mock_catalog_loads() {
        let catalog = Catalog::mock().expect("mock catalog");
        assert_eq!(catalog.destinations.len(), 2);
        assert_eq!(catalog.coworking_spaces.len(), 3);
        assert_eq!(catalog.trips.len(), 2);
        assert_eq!(catalog.profile.name, "Alex Johnson");
    }

    #[test]
    fn mock_prices_match_demo_tiers() {
        let catalog = Catalog::mock().unwrap();
        let prices: Vec<f64> = catalog
            .coworking_spaces
            .iter()
            .map(|s| s.price_per_day)
            .collect();
        assert_eq!(prices, [25.0, 15.0, 30.0]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut catalog = Catalog::mock().unwrap();
        let dup = catalog.destinations[0].clone();
        catalog.destinations.push(dup);
        let json = serde_json::to_string(&catalog).unwrap();
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate destination id '1'"));
    }

    #[tokio::test]
    async fn fetch_gathers_spaces_per_destination() {
        let server = MockServer::start().await;
        let mock = Catalog::mock().unwrap();

        Mock::given(method("GET"))
            .and(path("/destinations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock.destinations))
            .mount(&server)
            .await;
        for id in ["1", "2"] {
            let spaces: Vec<_> = mock
                .coworking_spaces
                .iter()
                .filter(|s| s.destination_id == id)
                .collect();
            Mock::given(method("GET"))
                .and(path("/coworking"))
                .and(query_param("destinationId", id))
                .respond_with(ResponseTemplate::new(200).set_body_json(&spaces))
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/trips"))
            .and(query_param("userId", "user1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock.trips))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/user1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock.profile))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let client = ApiClient::new(&url, &ClientOptions::default()).unwrap();
        let catalog = Catalog::fetch(&client, "user1").await.unwrap();

        assert_eq!(catalog.coworking_spaces.len(), 3);
        assert_eq!(catalog.profile, mock.profile);
        assert_eq!(catalog.trips, mock.trips);
    }

    #[tokio::test]
    async fn fetch_propagates_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/destinations"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let client = ApiClient::new(&url, &ClientOptions::default()).unwrap();
        let err = Catalog::fetch(&client, "user1").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
