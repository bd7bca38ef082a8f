//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Tabs & Anwendungssteuerung ===
            AppCommand::SwitchTab { tab } => handlers::panel::switch_tab(state, tab),
            AppCommand::RequestExit => handlers::panel::request_exit(state),

            // === LocationBox ===
            AppCommand::EditFieldText { field, text } => {
                handlers::field::edit_text(state, field, text)
            }
            AppCommand::FocusField { field } => handlers::field::focus(state, field),
            AppCommand::ClosePopup { field } => handlers::field::close_popup(state, field),
            AppCommand::PickSuggestion { field, index } => {
                handlers::field::pick_suggestion(state, field, index)
            }
            AppCommand::PickMyLocation { field } => {
                handlers::field::pick_my_location(state, field)
            }

            // === Suche ===
            AppCommand::DispatchSearch { field, query } => {
                handlers::search::dispatch_search(state, field, query)
            }
            AppCommand::ApplySearchOutcome { outcome } => {
                handlers::search::apply_outcome(state, outcome)
            }

            // === Selektoren & Panels ===
            AppCommand::SetTravelMode { mode } => handlers::panel::set_travel_mode(state, mode),
            AppCommand::SetMapStyle { tab, style } => {
                handlers::panel::set_map_style(state, tab, style)
            }
            AppCommand::ResetPanel { tab } => handlers::panel::reset(state, tab),
            AppCommand::RecomputePanel { tab } => handlers::panel::recompute(state, tab),
        }

        Ok(())
    }
}
