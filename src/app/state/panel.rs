//! Panel-Zustände der drei Tabs.

use std::time::Duration;

use crate::core::{MapStyle, TravelMode};

use super::field::{FieldVariant, LocationField};

/// Zustand des Route-Tabs.
pub struct RoutePanelState {
    /// Reisemodus (Query-Parameter `m`)
    pub travel_mode: TravelMode,
    /// Kartenstil (Query-Parameter `t`)
    pub map_style: MapStyle,
    /// Startfeld
    pub from: LocationField,
    /// Zielfeld
    pub to: LocationField,
    /// Zuletzt berechnete URL (None = unvollständige Eingabe)
    pub result: Option<String>,
}

impl RoutePanelState {
    /// Erstellt den leeren Route-Zustand.
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            travel_mode: TravelMode::default(),
            map_style: MapStyle::default(),
            from: LocationField::new(
                FieldVariant::MyLocation,
                "Type a starting location",
                debounce_delay,
            ),
            to: LocationField::new(
                FieldVariant::MyLocation,
                "Type a destination location",
                debounce_delay,
            ),
            result: None,
        }
    }
}

/// Zustand des Address-Tabs.
pub struct LocationPanelState {
    /// Kartenstil (Query-Parameter `t`)
    pub map_style: MapStyle,
    /// Adressfeld
    pub address: LocationField,
    /// Zuletzt berechnete URL (None = unvollständige Eingabe)
    pub result: Option<String>,
}

impl LocationPanelState {
    /// Erstellt den leeren Address-Zustand.
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            map_style: MapStyle::default(),
            address: LocationField::new(
                FieldVariant::Plain,
                "Type a street address",
                debounce_delay,
            ),
            result: None,
        }
    }
}

/// Zustand des Place-Tabs (kein Stil-Selektor, die URL kommt fertig vom Server).
pub struct PlacePanelState {
    /// POI-Feld
    pub poi: LocationField,
    /// Zuletzt berechnete URL (None = unvollständige Eingabe)
    pub result: Option<String>,
}

impl PlacePanelState {
    /// Erstellt den leeren Place-Zustand.
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            poi: LocationField::new(
                FieldVariant::Place,
                "Type the name of a place of interest",
                debounce_delay,
            ),
            result: None,
        }
    }
}
