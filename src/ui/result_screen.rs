//! Anzeige der produzierten URL samt Markup, Copy, Preview und Clear.

use crate::app::{AppIntent, Tab};
use crate::core::link;

/// Rendert den Result-Bereich eines Panels.
/// Ohne URL bleiben die Screens leer und Copy/Preview deaktiviert.
pub fn render(ui: &mut egui::Ui, tab: Tab, url: Option<&str>, events: &mut Vec<AppIntent>) {
    ui.separator();

    egui::Grid::new(("result_screen", tab))
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("URL:");
            render_screen(ui, url.map(str::to_owned));
            ui.end_row();

            ui.label("Markup:");
            render_screen(ui, url.map(link::markup));
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Clear form").clicked() {
            events.push(AppIntent::ResetRequested { tab });
        }
        match url {
            Some(url) => {
                ui.hyperlink_to("Preview link", url.to_owned());
            }
            None => {
                ui.add_enabled(false, egui::Button::new("Preview link"));
            }
        }
    });
}

/// Read-only-Textfläche mit Copy-Button; ohne Inhalt leer und ohne Button.
fn render_screen(ui: &mut egui::Ui, content: Option<String>) {
    ui.horizontal(|ui| {
        let mut shown: &str = content.as_deref().unwrap_or("");
        ui.add(
            egui::TextEdit::multiline(&mut shown)
                .desired_rows(2)
                .desired_width(420.0),
        );
        if let Some(text) = content {
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(text);
            }
        }
    });
}
