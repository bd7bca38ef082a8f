//! Handler für die LocationBox-Zustandsmaschine.

use std::time::Instant;

use crate::app::state::{
    AppState, FieldId, FieldVariant, LocationField, OutboundRequest, SelectedHit, SuggestionEntry,
    MY_LOCATION_INPUT_TEXT,
};

/// Übernimmt einen Tastenanschlag: invalidiert die Auswahl und plant die Suche.
///
/// Jeder Anschlag macht das Feld not-ready, verwirft die Auswahl und ersetzt
/// einen wartenden Debounce-Slot. Nur Queries oberhalb der Mindestlänge
/// werden geplant; ein geleertes Feld der MyLocation-Variante bietet wieder
/// den synthetischen Eintrag an.
pub fn edit_text(state: &mut AppState, field: FieldId, text: String) {
    let min_chars = state.options.min_query_chars;
    let mut my_location_released = false;

    {
        let f = state.field_mut(field);
        f.text = text;
        f.invalidate();
        if f.my_location {
            f.my_location = false;
            f.suggestions.clear();
            my_location_released = true;
        }

        f.debounce.cancel();
        if f.text.chars().count() > min_chars {
            let query = f.text.clone();
            f.debounce.schedule(Instant::now(), query);
        }

        if f.text.is_empty()
            && f.variant == FieldVariant::MyLocation
            && f.can_have_my_location
        {
            f.suggestions = vec![SuggestionEntry::UseMyLocation];
        }
        f.popup_open = !f.suggestions.is_empty();
    }

    if my_location_released {
        sync_my_location_exclusion(state);
    }
}

/// Reagiert auf Fokus: bietet den Standort-Eintrag an bzw. öffnet das Popup
/// erneut, solange das Feld noch keine Auswahl hält.
pub fn focus(state: &mut AppState, field: FieldId) {
    let f = state.field_mut(field);
    if f.variant == FieldVariant::MyLocation
        && !f.my_location
        && f.can_have_my_location
        && f.text.is_empty()
    {
        f.suggestions = vec![SuggestionEntry::UseMyLocation];
    }
    if !f.ready && !f.suggestions.is_empty() {
        f.popup_open = true;
    }
}

/// Schließt das Vorschlags-Popup.
pub fn close_popup(state: &mut AppState, field: FieldId) {
    state.field_mut(field).popup_open = false;
}

/// Übernimmt einen angeklickten Suchtreffer.
///
/// Plain/MyLocation-Felder werden sofort ready; die Place-Variante reiht
/// stattdessen den Detail-Request ein und bleibt bis zu dessen Antwort
/// unvollständig.
pub fn pick_suggestion(state: &mut AppState, field: FieldId, index: usize) {
    let entry = state.field(field).suggestions.get(index).cloned();
    let Some(SuggestionEntry::Hit(hit)) = entry else {
        log::warn!("Vorschlags-Index {index} für {field:?} existiert nicht");
        return;
    };

    let label = hit.display_label();
    let variant = state.field(field).variant;
    {
        let f = state.field_mut(field);
        f.text = label.clone();
        f.selected = Some(SelectedHit {
            hit: hit.clone(),
            label,
        });
        f.popup_open = false;
    }

    match variant {
        FieldVariant::Place => match hit.href {
            Some(href) => {
                let seq = state.field_mut(field).next_seq();
                state.outbox.push(OutboundRequest::PlaceDetail { field, seq, href });
            }
            None => {
                log::warn!("Place-Treffer ohne Detail-href, Feld bleibt unvollständig");
            }
        },
        FieldVariant::Plain | FieldVariant::MyLocation => {
            state.field_mut(field).ready = true;
            advance_focus(state, field);
        }
    }
}

/// Übernimmt den synthetischen Standort-Eintrag.
pub fn pick_my_location(state: &mut AppState, field: FieldId) {
    {
        let f = state.field_mut(field);
        if f.variant != FieldVariant::MyLocation || !f.can_have_my_location {
            log::warn!("Standort-Eintrag für {field:?} nicht verfügbar");
            return;
        }
        f.text = MY_LOCATION_INPUT_TEXT.to_string();
        f.suggestions.clear();
        f.popup_open = false;
        f.my_location = true;
        f.ready = true;
    }

    sync_my_location_exclusion(state);
    advance_focus(state, field);
}

/// Stellt die Exklusivität der Routen-Endpunkte her: höchstens ein Feld darf
/// den Nutzerstandort halten. Das jeweils andere Feld verliert den
/// synthetischen Eintrag samt Angebot, bis der Standort wieder frei ist.
pub fn sync_my_location_exclusion(state: &mut AppState) {
    let from_has = state.route.from.my_location;
    let to_has = state.route.to.my_location;
    apply_exclusion(&mut state.route.from, to_has);
    apply_exclusion(&mut state.route.to, from_has);
}

fn apply_exclusion(field: &mut LocationField, sibling_has_my_location: bool) {
    field.can_have_my_location = !sibling_has_my_location;
    if sibling_has_my_location {
        field.suggestions.clear();
        field.popup_open = false;
    }
}

/// Rückt den Fokus vom Start- auf das Zielfeld vor, sobald der Start ready ist.
fn advance_focus(state: &mut AppState, field: FieldId) {
    if field == FieldId::RouteFrom && !state.route.to.ready {
        state.focus_request = Some(FieldId::RouteTo);
    }
}
