//! Resource groups exposed by [`ApiClient`].

use nomadplan_shared::{CoworkingSpace, Destination, Itinerary, Result, Trip, User};
use reqwest::Method;

use crate::ApiClient;
use crate::payload::{ItineraryPatch, NewItinerary, NewTrip, NewUser, TripPatch, UserPatch};

// ---------------------------------------------------------------------------
// Destinations
// ---------------------------------------------------------------------------

/// `/destinations` endpoints.
pub struct DestinationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DestinationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Destination>> {
        self.client.get("/destinations", &[]).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Destination> {
        self.client.get(&format!("/destinations/{id}"), &[]).await
    }

    /// Server-side search. `filters` are sent as extra query parameters.
    pub async fn search(&self, query: &str, filters: &[(&str, &str)]) -> Result<Vec<Destination>> {
        let mut params = vec![("q", query)];
        params.extend_from_slice(filters);
        self.client.get("/destinations/search", &params).await
    }

    pub async fn featured(&self) -> Result<Vec<Destination>> {
        self.client.get("/destinations/featured", &[]).await
    }
}

// ---------------------------------------------------------------------------
// Coworking spaces
// ---------------------------------------------------------------------------

/// `/coworking` endpoints.
pub struct CoworkingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CoworkingApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_destination(&self, destination_id: &str) -> Result<Vec<CoworkingSpace>> {
        self.client
            .get("/coworking", &[("destinationId", destination_id)])
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<CoworkingSpace> {
        self.client.get(&format!("/coworking/{id}"), &[]).await
    }

    pub async fn search(
        &self,
        query: &str,
        destination_id: Option<&str>,
    ) -> Result<Vec<CoworkingSpace>> {
        let mut params = vec![("q", query)];
        if let Some(id) = destination_id {
            params.push(("destinationId", id));
        }
        self.client.get("/coworking/search", &params).await
    }
}

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

/// `/trips` endpoints.
pub struct TripsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TripsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, user_id: &str) -> Result<Vec<Trip>> {
        self.client.get("/trips", &[("userId", user_id)]).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Trip> {
        self.client.get(&format!("/trips/{id}"), &[]).await
    }

    pub async fn create(&self, trip: &NewTrip) -> Result<Trip> {
        self.client.send(Method::POST, "/trips", trip).await
    }

    pub async fn update(&self, id: &str, patch: &TripPatch) -> Result<Trip> {
        self.client
            .send(Method::PUT, &format!("/trips/{id}"), patch)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/trips/{id}")).await
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// `/users` endpoints.
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User> {
        self.client.get(&format!("/users/{id}"), &[]).await
    }

    pub async fn update(&self, id: &str, patch: &UserPatch) -> Result<User> {
        self.client
            .send(Method::PUT, &format!("/users/{id}"), patch)
            .await
    }

    pub async fn create(&self, user: &NewUser) -> Result<User> {
        self.client.send(Method::POST, "/users", user).await
    }
}

// ---------------------------------------------------------------------------
// Itineraries
// ---------------------------------------------------------------------------

/// `/itineraries` endpoints.
pub struct ItinerariesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ItinerariesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_by_trip(&self, trip_id: &str) -> Result<Vec<Itinerary>> {
        self.client.get("/itineraries", &[("tripId", trip_id)]).await
    }

    pub async fn create(&self, itinerary: &NewItinerary) -> Result<Itinerary> {
        self.client.send(Method::POST, "/itineraries", itinerary).await
    }

    pub async fn update(&self, id: &str, patch: &ItineraryPatch) -> Result<Itinerary> {
        self.client
            .send(Method::PUT, &format!("/itineraries/{id}"), patch)
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/itineraries/{id}")).await
    }
}
