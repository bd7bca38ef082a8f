use crate::app::state::{FieldId, Tab};
use crate::core::{MapStyle, TravelMode};
use crate::search::FetchOutcome;

/// Commands sind mutierende Operationen auf dem AppState.
/// Sie entstehen ausschließlich über das Intent->Command Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Aktiven Tab wechseln
    SwitchTab { tab: Tab },
    /// Eingabetext übernehmen: Auswahl invalidieren, Suche planen
    EditFieldText { field: FieldId, text: String },
    /// Fokus-Reaktion: Standort-Eintrag anbieten bzw. Popup erneut öffnen
    FocusField { field: FieldId },
    /// Vorschlags-Popup schließen
    ClosePopup { field: FieldId },
    /// Suchtreffer übernehmen (Index in der Vorschlagsliste)
    PickSuggestion { field: FieldId, index: usize },
    /// Synthetischen Standort-Eintrag übernehmen
    PickMyLocation { field: FieldId },
    /// Fällige Suche in die Outbox einreihen
    DispatchSearch { field: FieldId, query: String },
    /// Worker-Ergebnis auf das Feld anwenden
    ApplySearchOutcome { outcome: FetchOutcome },
    /// Reisemodus setzen (Route-Tab)
    SetTravelMode { mode: TravelMode },
    /// Kartenstil eines Panels setzen
    SetMapStyle { tab: Tab, style: MapStyle },
    /// Panel auf Standardzustand zurücksetzen
    ResetPanel { tab: Tab },
    /// Ergebnis-URL des Panels neu berechnen
    RecomputePanel { tab: Tab },
    /// Anwendung beenden
    RequestExit,
}
