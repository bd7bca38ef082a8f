//! Hauptzustand der Anwendung.

use std::time::Instant;

use crate::app::CommandLog;
use crate::shared::BuilderOptions;

use super::field::{FieldId, LocationField};
use super::panel::{LocationPanelState, PlacePanelState, RoutePanelState};

/// Aktiver Tab des Builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Routen-Link (Standard-Tab)
    #[default]
    Route,
    /// Adress-Link
    Location,
    /// Place-of-Interest-Link
    Place,
}

impl Tab {
    /// Alle Tabs in Anzeige-Reihenfolge.
    pub const ALL: [Tab; 3] = [Tab::Route, Tab::Location, Tab::Place];

    /// Beschriftung in der Tab-Leiste.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Route => "Route",
            Tab::Location => "Address",
            Tab::Place => "Place of interest",
        }
    }
}

/// Ausgehender Request, vom Frame-Loop an den Such-Worker übergeben.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundRequest {
    /// Ortssuche für eine Query
    Search { field: FieldId, seq: u64, query: String },
    /// Detail-Request eines Place-Treffers
    PlaceDetail { field: FieldId, seq: u64, href: String },
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Tab
    pub active_tab: Tab,
    /// Route-Tab
    pub route: RoutePanelState,
    /// Address-Tab
    pub location: LocationPanelState,
    /// Place-Tab
    pub place: PlacePanelState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Endpunkte, Credentials, Debounce)
    pub options: BuilderOptions,
    /// Vom Frame-Loop abzuarbeitende ausgehende Requests
    pub outbox: Vec<OutboundRequest>,
    /// Feld, das im nächsten Frame den Fokus erhalten soll
    pub focus_request: Option<FieldId>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    /// Erstellt einen App-State mit den gegebenen Optionen.
    pub fn with_options(options: BuilderOptions) -> Self {
        let debounce_delay = options.debounce();
        Self {
            active_tab: Tab::default(),
            route: RoutePanelState::new(debounce_delay),
            location: LocationPanelState::new(debounce_delay),
            place: PlacePanelState::new(debounce_delay),
            command_log: CommandLog::new(),
            options,
            outbox: Vec::new(),
            focus_request: None,
            should_exit: false,
        }
    }

    /// Zugriff auf ein Feld über seine ID.
    pub fn field(&self, id: FieldId) -> &LocationField {
        match id {
            FieldId::RouteFrom => &self.route.from,
            FieldId::RouteTo => &self.route.to,
            FieldId::LocationAddress => &self.location.address,
            FieldId::PlacePoi => &self.place.poi,
        }
    }

    /// Mutabler Zugriff auf ein Feld über seine ID.
    pub fn field_mut(&mut self, id: FieldId) -> &mut LocationField {
        match id {
            FieldId::RouteFrom => &mut self.route.from,
            FieldId::RouteTo => &mut self.route.to,
            FieldId::LocationAddress => &mut self.location.address,
            FieldId::PlacePoi => &mut self.place.poi,
        }
    }

    /// Ergebnis-URL eines Tabs (None = unvollständige Eingabe).
    pub fn result(&self, tab: Tab) -> Option<&str> {
        match tab {
            Tab::Route => self.route.result.as_deref(),
            Tab::Location => self.location.result.as_deref(),
            Tab::Place => self.place.result.as_deref(),
        }
    }

    /// Sammelt die fälligen Debounce-Queries aller Felder ein.
    pub fn poll_due_searches(&mut self, now: Instant) -> Vec<(FieldId, String)> {
        let mut due = Vec::new();
        for id in FieldId::ALL {
            if let Some(query) = self.field_mut(id).debounce.poll(now) {
                due.push((id, query));
            }
        }
        due
    }

    /// Gibt `true` zurück, solange irgendein Debounce-Slot wartet.
    pub fn any_debounce_armed(&self) -> bool {
        FieldId::ALL.iter().any(|id| self.field(*id).debounce.is_armed())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
