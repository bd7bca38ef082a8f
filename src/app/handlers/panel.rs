//! Handler für Tab-Wechsel, Neuberechnung und Reset der Panels.

use crate::app::state::{AppState, Tab};
use crate::core::{link, MapStyle, TravelMode};

/// Wechselt den aktiven Tab.
pub fn switch_tab(state: &mut AppState, tab: Tab) {
    state.active_tab = tab;
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Setzt den Reisemodus des Route-Tabs.
pub fn set_travel_mode(state: &mut AppState, mode: TravelMode) {
    state.route.travel_mode = mode;
}

/// Setzt den Kartenstil des Panels.
pub fn set_map_style(state: &mut AppState, tab: Tab, style: MapStyle) {
    match tab {
        Tab::Route => state.route.map_style = style,
        Tab::Location => state.location.map_style = style,
        // Der Place-Tab hat keinen Stil-Selektor, die URL kommt fertig vom Server
        Tab::Place => {}
    }
}

/// Berechnet die Ergebnis-URL des Panels neu.
/// Unvollständige Eingaben ergeben `None`; der Result-Screen zeigt dann nichts.
pub fn recompute(state: &mut AppState, tab: Tab) {
    match tab {
        Tab::Route => {
            state.route.result = match (state.route.from.segment(), state.route.to.segment()) {
                (Some(from), Some(to)) => Some(link::route_url(
                    &state.options.share_url,
                    &from,
                    &to,
                    state.route.travel_mode,
                    state.route.map_style,
                )),
                _ => None,
            };
        }
        Tab::Location => {
            state.location.result = state.location.address.segment().map(|segment| {
                link::location_url(&state.options.share_url, &segment, state.location.map_style)
            });
        }
        Tab::Place => {
            let poi = &state.place.poi;
            state.place.result = if poi.ready {
                poi.place.as_ref().map(|detail| detail.view.clone())
            } else {
                None
            };
        }
    }
}

/// Setzt alle Felder/Selektoren des Panels auf den Standardzustand zurück.
pub fn reset(state: &mut AppState, tab: Tab) {
    match tab {
        Tab::Route => {
            state.route.travel_mode = TravelMode::default();
            state.route.map_style = MapStyle::default();
            state.route.from.reset();
            state.route.to.reset();
            // Reset gibt auch die Standort-Exklusivität wieder frei
            super::field::sync_my_location_exclusion(state);
        }
        Tab::Location => {
            state.location.map_style = MapStyle::default();
            state.location.address.reset();
        }
        Tab::Place => {
            state.place.poi.reset();
        }
    }
}
