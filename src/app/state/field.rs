//! Zustandsmaschine einer LocationBox.

use std::time::Duration;

use crate::core::{LocationHit, PlaceDetail, Segment};
use crate::search::Debounce;

use super::app_state::Tab;

/// Anzeigetext des synthetischen Standort-Eintrags im Popup.
pub const MY_LOCATION_ENTRY_TEXT: &str = "Use user's location";
/// Eingabetext nach Auswahl des Standort-Eintrags.
pub const MY_LOCATION_INPUT_TEXT: &str = "User's location";

/// Identifiziert eine LocationBox-Instanz über den gesamten Event-Fluss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Startfeld des Route-Tabs
    RouteFrom,
    /// Zielfeld des Route-Tabs
    RouteTo,
    /// Adressfeld des Address-Tabs
    LocationAddress,
    /// POI-Feld des Place-Tabs
    PlacePoi,
}

impl FieldId {
    /// Alle Feld-IDs (für Frame-weite Polls).
    pub const ALL: [FieldId; 4] = [
        FieldId::RouteFrom,
        FieldId::RouteTo,
        FieldId::LocationAddress,
        FieldId::PlacePoi,
    ];

    /// Tab, zu dem das Feld gehört.
    pub fn tab(self) -> Tab {
        match self {
            FieldId::RouteFrom | FieldId::RouteTo => Tab::Route,
            FieldId::LocationAddress => Tab::Location,
            FieldId::PlacePoi => Tab::Place,
        }
    }
}

/// Capability-Variante einer LocationBox, bei Konstruktion festgelegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVariant {
    /// Reine Ortssuche
    Plain,
    /// Ortssuche mit "Use user's location"-Eintrag
    MyLocation,
    /// Place-Suche mit Detail-Request nach der Auswahl
    Place,
}

/// Eintrag im Vorschlags-Popup.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionEntry {
    /// Synthetischer Eintrag für den symbolischen Nutzerstandort
    UseMyLocation,
    /// Regulärer Suchtreffer
    Hit(LocationHit),
}

/// Getroffene Auswahl eines Feldes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedHit {
    /// Treffer aus der Suchantwort
    pub hit: LocationHit,
    /// Anzeigetext zum Zeitpunkt der Auswahl (wird Segment-Titel)
    pub label: String,
}

/// Zustand einer LocationBox: Text, Vorschläge, Auswahl, Debounce.
///
/// Der Dreiklang {leer, Auswahl ausstehend, ready} steckt in `text`,
/// `selected` und `ready`; die Place-Variante hat zusätzlich die Phase
/// "Detail ausstehend" zwischen Auswahl und ready.
#[derive(Debug)]
pub struct LocationField {
    /// Capability-Variante
    pub variant: FieldVariant,
    /// Platzhaltertext des Eingabefelds
    pub placeholder: &'static str,
    /// Aktueller Eingabetext
    pub text: String,
    /// Aktueller Inhalt des Vorschlags-Popups
    pub suggestions: Vec<SuggestionEntry>,
    /// Ob das Popup gerade offen ist
    pub popup_open: bool,
    /// Getroffene Auswahl (None = keine)
    pub selected: Option<SelectedHit>,
    /// Ob das Feld eine verwertbare Auswahl hält
    pub ready: bool,
    /// Symbolischer Nutzerstandort gewählt (nur MyLocation-Variante)
    pub my_location: bool,
    /// Ob der synthetische Eintrag angeboten werden darf
    pub can_have_my_location: bool,
    /// Detail-Antwort (nur Place-Variante, nach dem zweiten Request)
    pub place: Option<PlaceDetail>,
    /// Single-Slot-Timer für die Suchanfrage
    pub debounce: Debounce,
    /// Fortlaufende Nummer des zuletzt abgeschickten Requests
    pub last_seq: u64,
}

impl LocationField {
    /// Erstellt ein leeres Feld mit der gegebenen Variante.
    pub fn new(variant: FieldVariant, placeholder: &'static str, debounce_delay: Duration) -> Self {
        Self {
            variant,
            placeholder,
            text: String::new(),
            suggestions: Vec::new(),
            popup_open: false,
            selected: None,
            ready: false,
            my_location: false,
            can_have_my_location: true,
            place: None,
            debounce: Debounce::new(debounce_delay),
            last_seq: 0,
        }
    }

    /// Setzt das Feld auf not-ready zurück und verwirft Auswahl und Detail.
    /// Der Eingabetext bleibt erhalten.
    pub fn invalidate(&mut self) {
        self.ready = false;
        self.selected = None;
        self.place = None;
    }

    /// Vergibt die nächste Request-Sequenznummer.
    pub fn next_seq(&mut self) -> u64 {
        self.last_seq += 1;
        self.last_seq
    }

    /// URL-Segment des Feldes, falls es ready ist.
    pub fn segment(&self) -> Option<Segment> {
        if !self.ready {
            return None;
        }
        if self.my_location {
            return Some(Segment::MyLocation);
        }
        self.selected.as_ref().map(|selected| Segment::Point {
            lat: selected.hit.position[0],
            lon: selected.hit.position[1],
            label: selected.label.clone(),
        })
    }

    /// Setzt das Feld vollständig auf den Leerzustand zurück.
    pub fn reset(&mut self) {
        self.text.clear();
        self.suggestions.clear();
        self.popup_open = false;
        self.my_location = false;
        self.debounce.cancel();
        self.invalidate();
    }
}
