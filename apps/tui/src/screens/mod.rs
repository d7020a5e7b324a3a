//! TUI screen definitions.
//!
//! Each screen corresponds to a tab in the TUI and encapsulates its
//! own state and rendering logic.

mod browser;
mod coworking;
mod destinations;
mod home;
mod profile;
mod trips;

use std::fmt;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyModifiers};
use nomadplan_core::{Catalog, home as home_view, trips as trip_view};
use nomadplan_shared::AppConfig;
use ratatui::prelude::*;

/// Screen identifiers, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScreenId {
    Home,
    Destinations,
    Coworking,
    Trips,
    Profile,
}

impl ScreenId {
    pub(crate) const ALL: [ScreenId; 5] = [
        Self::Home,
        Self::Destinations,
        Self::Coworking,
        Self::Trips,
        Self::Profile,
    ];
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "Home"),
            Self::Destinations => write!(f, "Destinations"),
            Self::Coworking => write!(f, "Coworking"),
            Self::Trips => write!(f, "Trips"),
            Self::Profile => write!(f, "Profile"),
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScreenAction {
    None,
    Status(String),
    /// Jump to the destinations tab with this destination open.
    OpenDestination(String),
}

impl From<Option<String>> for ScreenAction {
    fn from(status: Option<String>) -> Self {
        status.map_or(Self::None, Self::Status)
    }
}

/// State of every screen.
pub(crate) struct Screens {
    home: home::HomeScreen,
    destinations: destinations::DestinationsScreen,
    coworking: coworking::CoworkingScreen,
    trips: trips::TripsScreen,
    profile: profile::ProfileScreen,
}

impl Screens {
    pub(crate) fn new(catalog: Catalog, config: &AppConfig) -> Self {
        let catalog = Rc::new(catalog);
        Self {
            home: home::HomeScreen::new(home_view::featured(&catalog).to_vec()),
            destinations: destinations::DestinationsScreen::new(
                Rc::clone(&catalog),
                &config.defaults.destination_sort,
            ),
            coworking: coworking::CoworkingScreen::new(
                catalog.coworking_spaces.clone(),
                &config.defaults.coworking_sort,
            ),
            trips: trips::TripsScreen::new(trip_view::trip_cards(&catalog.trips)),
            profile: profile::ProfileScreen::new(catalog.profile.clone()),
        }
    }

    /// Whether the screen has an active text input field.
    pub(crate) fn is_editing(&self, id: ScreenId) -> bool {
        match id {
            ScreenId::Destinations => self.destinations.is_editing(),
            ScreenId::Coworking => self.coworking.is_editing(),
            ScreenId::Profile => self.profile.is_editing(),
            ScreenId::Home | ScreenId::Trips => false,
        }
    }

    pub(crate) fn draw(&self, id: ScreenId, f: &mut Frame, area: Rect) {
        match id {
            ScreenId::Home => self.home.draw(f, area),
            ScreenId::Destinations => self.destinations.draw(f, area),
            ScreenId::Coworking => self.coworking.draw(f, area),
            ScreenId::Trips => self.trips.draw(f, area),
            ScreenId::Profile => self.profile.draw(f, area),
        }
    }

    pub(crate) fn handle_key(
        &mut self,
        id: ScreenId,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> ScreenAction {
        match id {
            ScreenId::Home => match self.home.handle_key(code, modifiers) {
                Some(dest_id) => ScreenAction::OpenDestination(dest_id),
                None => ScreenAction::None,
            },
            ScreenId::Destinations => self.destinations.handle_key(code, modifiers).into(),
            ScreenId::Coworking => self.coworking.handle_key(code, modifiers).into(),
            ScreenId::Trips => {
                self.trips.handle_key(code, modifiers);
                ScreenAction::None
            }
            ScreenId::Profile => self.profile.handle_key(code, modifiers).into(),
        }
    }

    pub(crate) fn open_destination(&mut self, id: &str) {
        self.destinations.open(id);
    }
}
