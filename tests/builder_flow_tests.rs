//! Intent-getriebene End-to-End-Szenarien: die Selenium-Suite des
//! Original-Widgets, gegen den Controller statt gegen den Browser gefahren.

use share_link_builder::{
    AppCommand, AppController, AppIntent, AppState, FieldId, FetchOutcome, FetchPayload,
    LocationHit, MapStyle, PlaceDetail, Tab, TravelMode,
};

const PLACE_VIEW_URL: &str = "https://share.here.com/p/s-YmI9MTMuMTE5MzglMkM1Mi4zNzYxNSUyQzEzLjY1ODAxJTJDNTIuNjYwNTg7Yz1jaXR5LXRvd24tdmlsbGFnZTtpZD0yNzZ1MzNkYi1mYmNmZmQyZTUyZjk0ZjU2YjZmNTU0YzBiYWEzM2YwNjtsYXQ9NTIuNTE2MDc7bG9uPTEzLjM3Njk4O249QmVybGluO25sYXQ9NTIuNTE2MDc7bmxvbj0xMy4zNzY5ODtoPTYwMWIzNw";

fn bremen() -> LocationHit {
    LocationHit {
        title: "Bremen".to_string(),
        vicinity: "Germany".to_string(),
        position: [53.0751, 8.80469],
        href: None,
    }
}

fn berlin() -> LocationHit {
    LocationHit {
        title: "Berlin".to_string(),
        vicinity: "Germany".to_string(),
        position: [52.51605, 13.37691],
        href: None,
    }
}

fn berlin_place() -> LocationHit {
    LocationHit {
        title: "Berlin".to_string(),
        vicinity: "Germany".to_string(),
        position: [52.51605, 13.37691],
        href: Some("https://places.api.here.com/places/v1/places/276u33db".to_string()),
    }
}

fn drive(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Simuliert Tippen, Suchantwort und Auswahl des ersten Treffers.
fn type_and_pick(
    controller: &mut AppController,
    state: &mut AppState,
    field: FieldId,
    typed: &str,
    hits: Vec<LocationHit>,
) {
    drive(
        controller,
        state,
        AppIntent::FieldTextEdited {
            field,
            text: typed.to_string(),
        },
    );
    let seq = state.field(field).last_seq;
    drive(
        controller,
        state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field,
                seq,
                payload: FetchPayload::Hits(hits),
            },
        },
    );
    drive(controller, state, AppIntent::SuggestionPicked { field, index: 0 });
}

#[test]
fn test_route_from_a_to_b_produces_share_url() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteFrom,
        "Bremen",
        vec![bremen()],
    );
    assert_eq!(
        state.route.result, None,
        "Ohne Zielfeld darf es keine URL geben"
    );
    assert_eq!(
        state.focus_request,
        Some(FieldId::RouteTo),
        "Ready-Start rückt den Fokus auf das Zielfeld vor"
    );

    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteTo,
        "Berlin",
        vec![berlin()],
    );

    assert_eq!(
        state.route.result.as_deref(),
        Some("https://share.here.com/r/53.0751,8.80469,Bremen%2C%20Germany/52.51605,13.37691,Berlin%2C%20Germany?m=d&t=normal")
    );
}

#[test]
fn test_route_from_my_location_to_b() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        AppIntent::MyLocationPicked {
            field: FieldId::RouteFrom,
        },
    );
    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteTo,
        "Berlin",
        vec![berlin()],
    );

    assert_eq!(
        state.route.result.as_deref(),
        Some("https://share.here.com/r/mylocation/52.51605,13.37691,Berlin%2C%20Germany?m=d&t=normal")
    );
}

#[test]
fn test_route_from_a_to_my_location() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteFrom,
        "Berlin",
        vec![berlin()],
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::MyLocationPicked {
            field: FieldId::RouteTo,
        },
    );

    assert_eq!(
        state.route.result.as_deref(),
        Some("https://share.here.com/r/52.51605,13.37691,Berlin%2C%20Germany/mylocation?m=d&t=normal")
    );
}

#[test]
fn test_travel_mode_change_preserves_segments() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        AppIntent::MyLocationPicked {
            field: FieldId::RouteFrom,
        },
    );
    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteTo,
        "Berlin",
        vec![berlin()],
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::TravelModeChanged {
            mode: TravelMode::PublicTransport,
        },
    );
    assert_eq!(
        state.route.result.as_deref(),
        Some("https://share.here.com/r/mylocation/52.51605,13.37691,Berlin%2C%20Germany?m=pt&t=normal")
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::TravelModeChanged {
            mode: TravelMode::Walk,
        },
    );
    assert_eq!(
        state.route.result.as_deref(),
        Some("https://share.here.com/r/mylocation/52.51605,13.37691,Berlin%2C%20Germany?m=w&t=normal")
    );
}

#[test]
fn test_map_style_change_preserves_segments() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        AppIntent::MyLocationPicked {
            field: FieldId::RouteFrom,
        },
    );
    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteTo,
        "Berlin",
        vec![berlin()],
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::MapStyleChanged {
            tab: Tab::Route,
            style: MapStyle::Terrain,
        },
    );

    assert_eq!(
        state.route.result.as_deref(),
        Some("https://share.here.com/r/mylocation/52.51605,13.37691,Berlin%2C%20Germany?m=d&t=terrain")
    );
}

#[test]
fn test_clearing_ready_field_invalidates_result() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteFrom,
        "Bremen",
        vec![bremen()],
    );
    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteTo,
        "Berlin",
        vec![berlin()],
    );
    assert!(state.route.result.is_some());

    drive(
        &mut controller,
        &mut state,
        AppIntent::FieldTextEdited {
            field: FieldId::RouteFrom,
            text: "Brem".to_string(),
        },
    );

    assert_eq!(
        state.route.result, None,
        "Ein Anschlag im Startfeld muss die URL sofort invalidieren"
    );
    assert!(state.route.to.ready, "Das Zielfeld bleibt davon unberührt");
}

#[test]
fn test_location_panel_generates_link() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::LocationAddress,
        "Berlin",
        vec![berlin()],
    );

    assert_eq!(
        state.location.result.as_deref(),
        Some("https://share.here.com/l/52.51605,13.37691,Berlin%2C%20Germany?t=normal")
    );

    drive(
        &mut controller,
        &mut state,
        AppIntent::MapStyleChanged {
            tab: Tab::Location,
            style: MapStyle::Terrain,
        },
    );
    assert_eq!(
        state.location.result.as_deref(),
        Some("https://share.here.com/l/52.51605,13.37691,Berlin%2C%20Germany?t=terrain")
    );
}

#[test]
fn test_place_result_waits_for_detail_fetch() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        AppIntent::FieldTextEdited {
            field: FieldId::PlacePoi,
            text: "Berlin".to_string(),
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field: FieldId::PlacePoi,
                seq: 0,
                payload: FetchPayload::Hits(vec![berlin_place()]),
            },
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::SuggestionPicked {
            field: FieldId::PlacePoi,
            index: 0,
        },
    );

    assert!(
        !state.place.poi.ready,
        "Vor der Detail-Antwort darf das Feld nicht ready sein"
    );
    assert_eq!(state.place.result, None);
    assert_eq!(
        state.outbox,
        vec![share_link_builder::OutboundRequest::PlaceDetail {
            field: FieldId::PlacePoi,
            seq: 1,
            href: "https://places.api.here.com/places/v1/places/276u33db".to_string(),
        }],
        "Die Auswahl muss den Detail-Request einreihen"
    );

    let seq = state.place.poi.last_seq;
    drive(
        &mut controller,
        &mut state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field: FieldId::PlacePoi,
                seq,
                payload: FetchPayload::Place(PlaceDetail {
                    view: PLACE_VIEW_URL.to_string(),
                }),
            },
        },
    );

    assert!(state.place.poi.ready);
    assert_eq!(
        state.place.result.as_deref(),
        Some(PLACE_VIEW_URL),
        "Das Ergebnis muss exakt der view-URL der Detail-Antwort entsprechen"
    );
}

#[test]
fn test_failed_detail_fetch_leaves_place_pending() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field: FieldId::PlacePoi,
                seq: 0,
                payload: FetchPayload::Hits(vec![berlin_place()]),
            },
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::SuggestionPicked {
            field: FieldId::PlacePoi,
            index: 0,
        },
    );
    drive(
        &mut controller,
        &mut state,
        AppIntent::SearchArrived {
            outcome: FetchOutcome {
                field: FieldId::PlacePoi,
                seq: 1,
                payload: FetchPayload::Failed("connection refused".to_string()),
            },
        },
    );

    assert!(!state.place.poi.ready, "Fehler lassen das Feld unverändert");
    assert_eq!(state.place.result, None);
}

#[test]
fn test_panel_results_are_independent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteFrom,
        "Bremen",
        vec![bremen()],
    );
    type_and_pick(
        &mut controller,
        &mut state,
        FieldId::RouteTo,
        "Berlin",
        vec![berlin()],
    );
    let route_url = state.route.result.clone();
    assert!(route_url.is_some());

    drive(
        &mut controller,
        &mut state,
        AppIntent::FieldTextEdited {
            field: FieldId::LocationAddress,
            text: "Ham".to_string(),
        },
    );

    assert_eq!(
        state.route.result, route_url,
        "Eingaben im Address-Tab dürfen das Route-Ergebnis nicht anfassen"
    );
}

#[test]
fn test_tab_switch_logs_command_and_changes_active_tab() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        AppIntent::TabSelected { tab: Tab::Location },
    );

    assert_eq!(state.active_tab, Tab::Location);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SwitchTab { tab: Tab::Location } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    drive(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);
}
