//! LocationBox: Texteingabe mit Vorschlags-Popup.

use crate::app::{AppIntent, AppState, FieldId, SuggestionEntry};
use crate::app::state::MY_LOCATION_ENTRY_TEXT;

/// Rendert eine LocationBox samt Popup und gibt erzeugte Events zurück.
/// Eine anstehende Fokus-Anforderung wird hier eingelöst.
pub fn render_location_box(
    ui: &mut egui::Ui,
    state: &AppState,
    field_id: FieldId,
    focus_request: &mut Option<FieldId>,
    events: &mut Vec<AppIntent>,
) {
    let field = state.field(field_id);

    let mut text = field.text.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text(field.placeholder)
            .desired_width(260.0),
    );

    if *focus_request == Some(field_id) {
        response.request_focus();
        *focus_request = None;
    }

    if response.changed() {
        events.push(AppIntent::FieldTextEdited {
            field: field_id,
            text: text.clone(),
        });
    }
    if response.gained_focus() {
        events.push(AppIntent::FieldFocused { field: field_id });
    }

    if field.popup_open && !field.suggestions.is_empty() {
        render_suggestion_popup(ui, field_id, state, &response, events);
    }
}

/// Rendert das Vorschlags-Popup unter dem Eingabefeld.
fn render_suggestion_popup(
    ui: &mut egui::Ui,
    field_id: FieldId,
    state: &AppState,
    anchor: &egui::Response,
    events: &mut Vec<AppIntent>,
) {
    let field = state.field(field_id);

    let area = egui::Area::new(egui::Id::new(("suggestions", field_id)))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor.rect.left_bottom() + egui::vec2(0.0, 4.0));

    let inner = area.show(ui.ctx(), |ui| {
        egui::Frame::popup(ui.style()).show(ui, |ui| {
            ui.set_min_width(anchor.rect.width());
            for (index, entry) in field.suggestions.iter().enumerate() {
                let label = match entry {
                    SuggestionEntry::UseMyLocation => MY_LOCATION_ENTRY_TEXT.to_string(),
                    SuggestionEntry::Hit(hit) => hit.display_label(),
                };
                if ui.selectable_label(false, label).clicked() {
                    match entry {
                        SuggestionEntry::UseMyLocation => {
                            events.push(AppIntent::MyLocationPicked { field: field_id });
                        }
                        SuggestionEntry::Hit(_) => {
                            events.push(AppIntent::SuggestionPicked {
                                field: field_id,
                                index,
                            });
                        }
                    }
                }
            }
        });
    });

    // Ein Klick ins Popup nimmt dem Eingabefeld im selben Frame den Fokus —
    // der darf nicht als Schließen gewertet werden.
    let popup_hovered = inner.response.contains_pointer();
    let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
    if (anchor.lost_focus() && !popup_hovered) || escape {
        events.push(AppIntent::FieldPopupDismissed { field: field_id });
    }
}
