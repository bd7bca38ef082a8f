//! Handler für Such-Dispatch und eintreffende Worker-Antworten.

use crate::app::state::{AppState, FieldId, OutboundRequest, SuggestionEntry};
use crate::search::{FetchOutcome, FetchPayload};

/// Reiht die fällige Suche in die Outbox ein.
pub fn dispatch_search(state: &mut AppState, field: FieldId, query: String) {
    let seq = state.field_mut(field).next_seq();
    state.outbox.push(OutboundRequest::Search { field, seq, query });
}

/// Wendet das Worker-Ergebnis auf das zugehörige Feld an.
///
/// Veraltete Antworten (Sequenznummer älter als der letzte Request) werden
/// erkannt und geloggt, aber trotzdem angewendet — Last-Callback-Wins, wie
/// im Altverhalten ohne Request-Abbruch.
pub fn apply_outcome(state: &mut AppState, outcome: FetchOutcome) {
    let FetchOutcome {
        field,
        seq,
        payload,
    } = outcome;

    let last_seq = state.field(field).last_seq;
    if seq < last_seq {
        log::debug!("Veraltete Antwort für {field:?} (seq {seq} < {last_seq})");
    }

    match payload {
        FetchPayload::Hits(hits) => {
            let f = state.field_mut(field);
            f.suggestions = hits.into_iter().map(SuggestionEntry::Hit).collect();
            f.popup_open = !f.ready && !f.suggestions.is_empty();
        }
        FetchPayload::Place(detail) => {
            let f = state.field_mut(field);
            // Ohne ausstehende Auswahl (Feld inzwischen geleert) verfällt das Detail
            if f.selected.is_some() {
                f.place = Some(detail);
                f.ready = true;
            }
        }
        FetchPayload::Failed(reason) => {
            // Kein Retry, keine UI-Fehlermeldung: das Feld bleibt in seinem
            // bisherigen Zustand, der Nutzer sieht schlicht keine Treffer
            log::warn!("Request für {field:?} fehlgeschlagen: {reason}");
        }
    }
}
