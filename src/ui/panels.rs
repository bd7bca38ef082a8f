//! Panel-Formulare der drei Tabs.

use crate::app::{AppIntent, AppState, FieldId, Tab};

use super::{location_box, result_screen, selectors};

/// Rendert das Formular des aktiven Tabs und gibt erzeugte Events zurück.
pub fn render_active_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut focus_request = state.focus_request.take();

    {
        let state: &AppState = state;
        egui::CentralPanel::default().show(ctx, |ui| match state.active_tab {
            Tab::Route => render_route_panel(ui, state, &mut focus_request, &mut events),
            Tab::Location => render_location_panel(ui, state, &mut focus_request, &mut events),
            Tab::Place => render_place_panel(ui, state, &mut focus_request, &mut events),
        });
    }

    // Nicht eingelöste Fokus-Anforderung bleibt für den nächsten Frame stehen
    state.focus_request = focus_request;
    events
}

fn render_route_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    focus_request: &mut Option<FieldId>,
    events: &mut Vec<AppIntent>,
) {
    egui::Grid::new("route_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Travel mode:");
            selectors::render_travel_mode(ui, state.route.travel_mode, events);
            ui.end_row();

            ui.label("Map style:");
            selectors::render_map_style(ui, Tab::Route, state.route.map_style, events);
            ui.end_row();

            ui.label("From:");
            location_box::render_location_box(ui, state, FieldId::RouteFrom, focus_request, events);
            ui.end_row();

            ui.label("To:");
            location_box::render_location_box(ui, state, FieldId::RouteTo, focus_request, events);
            ui.end_row();
        });

    ui.add_space(12.0);
    result_screen::render(ui, Tab::Route, state.route.result.as_deref(), events);
}

fn render_location_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    focus_request: &mut Option<FieldId>,
    events: &mut Vec<AppIntent>,
) {
    egui::Grid::new("location_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Map style:");
            selectors::render_map_style(ui, Tab::Location, state.location.map_style, events);
            ui.end_row();

            ui.label("Address:");
            location_box::render_location_box(
                ui,
                state,
                FieldId::LocationAddress,
                focus_request,
                events,
            );
            ui.end_row();
        });

    ui.add_space(12.0);
    result_screen::render(ui, Tab::Location, state.location.result.as_deref(), events);
}

fn render_place_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    focus_request: &mut Option<FieldId>,
    events: &mut Vec<AppIntent>,
) {
    egui::Grid::new("place_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("POI:");
            location_box::render_location_box(ui, state, FieldId::PlacePoi, focus_request, events);
            ui.end_row();
        });

    ui.add_space(12.0);
    result_screen::render(ui, Tab::Place, state.place.result.as_deref(), events);
}
