//! ComboBox-Wrapper für Reisemodus und Kartenstil.

use crate::app::{AppIntent, Tab};
use crate::core::{MapStyle, TravelMode};

/// Rendert die Reisemodus-Auswahl des Route-Tabs.
pub fn render_travel_mode(ui: &mut egui::Ui, current: TravelMode, events: &mut Vec<AppIntent>) {
    let mut selected = current;

    egui::ComboBox::from_id_salt("travel_mode")
        .selected_text(selected.label())
        .width(260.0)
        .show_ui(ui, |ui| {
            for mode in TravelMode::ALL {
                ui.selectable_value(&mut selected, mode, mode.label());
            }
        });

    if selected != current {
        events.push(AppIntent::TravelModeChanged { mode: selected });
    }
}

/// Rendert die Kartenstil-Auswahl eines Panels.
pub fn render_map_style(
    ui: &mut egui::Ui,
    tab: Tab,
    current: MapStyle,
    events: &mut Vec<AppIntent>,
) {
    let mut selected = current;

    egui::ComboBox::from_id_salt(("map_style", tab))
        .selected_text(selected.label())
        .width(260.0)
        .show_ui(ui, |ui| {
            for style in MapStyle::ALL {
                ui.selectable_value(&mut selected, style, style.label());
            }
        });

    if selected != current {
        events.push(AppIntent::MapStyleChanged { tab, style: selected });
    }
}
