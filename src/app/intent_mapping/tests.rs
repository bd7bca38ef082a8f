use crate::app::state::{FieldId, Tab};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::PlaceDetail;
use crate::search::{FetchOutcome, FetchPayload};

use super::map_intent_to_commands;

#[test]
fn test_text_edit_triggers_recompute_of_owning_panel() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::FieldTextEdited {
            field: FieldId::RouteFrom,
            text: "Bre".to_string(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::EditFieldText {
            field: FieldId::RouteFrom,
            ..
        }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::RecomputePanel { tab: Tab::Route }
    ));
}

#[test]
fn test_focus_does_not_recompute() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::FieldFocused {
            field: FieldId::LocationAddress,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::FocusField { .. }));
}

#[test]
fn test_search_hits_apply_without_recompute() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field: FieldId::RouteTo,
                seq: 1,
                payload: FetchPayload::Hits(Vec::new()),
            },
        },
    );

    assert_eq!(
        commands.len(),
        1,
        "Trefferlisten ändern keine Readiness und lösen kein Recompute aus"
    );
    assert!(matches!(commands[0], AppCommand::ApplySearchOutcome { .. }));
}

#[test]
fn test_place_detail_triggers_recompute() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field: FieldId::PlacePoi,
                seq: 1,
                payload: FetchPayload::Place(PlaceDetail {
                    view: "https://share.here.com/p/abc".to_string(),
                }),
            },
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[1],
        AppCommand::RecomputePanel { tab: Tab::Place }
    ));
}

#[test]
fn test_reset_recomputes_to_clear_result() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ResetRequested { tab: Tab::Location },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::ResetPanel { tab: Tab::Location }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::RecomputePanel { tab: Tab::Location }
    ));
}
