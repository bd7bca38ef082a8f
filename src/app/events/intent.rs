use crate::app::state::{FieldId, Tab};
use crate::core::{MapStyle, TravelMode};
use crate::search::FetchOutcome;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Tab gewechselt
    TabSelected { tab: Tab },
    /// Tastatureingabe in einer LocationBox (jeder Anschlag)
    FieldTextEdited { field: FieldId, text: String },
    /// LocationBox hat den Fokus erhalten
    FieldFocused { field: FieldId },
    /// Vorschlags-Popup einer LocationBox geschlossen (Klick daneben / Escape)
    FieldPopupDismissed { field: FieldId },
    /// Suchtreffer im Popup angeklickt
    SuggestionPicked { field: FieldId, index: usize },
    /// Synthetischer "Use user's location"-Eintrag angeklickt
    MyLocationPicked { field: FieldId },
    /// Debounce abgelaufen: Suche für die Query starten
    SearchDue { field: FieldId, query: String },
    /// Antwort des Such-Workers eingetroffen
    SearchArrived { outcome: FetchOutcome },
    /// Reisemodus geändert (Route-Tab)
    TravelModeChanged { mode: TravelMode },
    /// Kartenstil geändert
    MapStyleChanged { tab: Tab, style: MapStyle },
    /// "Clear form" eines Tabs
    ResetRequested { tab: Tab },
    /// Anwendung beenden
    ExitRequested,
}
