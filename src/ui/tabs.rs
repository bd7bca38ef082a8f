//! Tab-Leiste über den drei Panels.

use crate::app::{AppIntent, AppState, Tab};

/// Rendert die Tab-Leiste und gibt erzeugte Events zurück.
pub fn render_tab_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let selected = state.active_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                    events.push(AppIntent::TabSelected { tab });
                }
            }
        });
    });

    events
}
