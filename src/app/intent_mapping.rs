//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Jeder mutierende Feld-/Selektor-Intent zieht ein `RecomputePanel` für das
//! besitzende Panel nach sich — das typisierte Gegenstück zu "das Panel hört
//! auf jedes Change-Event seiner Kinder".

use crate::search::FetchPayload;

use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::TabSelected { tab } => vec![AppCommand::SwitchTab { tab }],
        AppIntent::FieldTextEdited { field, text } => vec![
            AppCommand::EditFieldText { field, text },
            AppCommand::RecomputePanel { tab: field.tab() },
        ],
        AppIntent::FieldFocused { field } => vec![AppCommand::FocusField { field }],
        AppIntent::FieldPopupDismissed { field } => vec![AppCommand::ClosePopup { field }],
        AppIntent::SuggestionPicked { field, index } => vec![
            AppCommand::PickSuggestion { field, index },
            AppCommand::RecomputePanel { tab: field.tab() },
        ],
        AppIntent::MyLocationPicked { field } => vec![
            AppCommand::PickMyLocation { field },
            AppCommand::RecomputePanel { tab: field.tab() },
        ],
        AppIntent::SearchDue { field, query } => {
            vec![AppCommand::DispatchSearch { field, query }]
        }
        AppIntent::SearchArrived { outcome } => {
            let tab = outcome.field.tab();
            // Nur die Place-Detail-Antwort ändert die Readiness; eine
            // Trefferliste füllt bloß das Popup.
            let needs_recompute = matches!(outcome.payload, FetchPayload::Place(_));
            let mut commands = vec![AppCommand::ApplySearchOutcome { outcome }];
            if needs_recompute {
                commands.push(AppCommand::RecomputePanel { tab });
            }
            commands
        }
        AppIntent::TravelModeChanged { mode } => vec![
            AppCommand::SetTravelMode { mode },
            AppCommand::RecomputePanel {
                tab: super::state::Tab::Route,
            },
        ],
        AppIntent::MapStyleChanged { tab, style } => vec![
            AppCommand::SetMapStyle { tab, style },
            AppCommand::RecomputePanel { tab },
        ],
        AppIntent::ResetRequested { tab } => vec![
            AppCommand::ResetPanel { tab },
            AppCommand::RecomputePanel { tab },
        ],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
