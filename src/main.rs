//! Share-Link-Builder.
//!
//! Desktop-Formular für share.here.com-Links: Route, Adresse und POI,
//! mit Autocomplete-Ortssuche über die Places-API.

use std::time::{Duration, Instant};

use eframe::egui;
use share_link_builder::search::{api, FetchJob, FetchKind, SearchClient};
use share_link_builder::{ui, AppController, AppIntent, AppState, BuilderOptions, OutboundRequest};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Share-Link-Builder v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([760.0, 520.0])
                .with_title("Share Link Builder"),
            ..Default::default()
        };

        eframe::run_native(
            "Share Link Builder",
            options,
            Box::new(|_cc| Ok(Box::new(BuilderApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct BuilderApp {
    state: AppState,
    controller: AppController,
    search: Option<SearchClient>,
    /// Anzahl abgeschickter, noch unbeantworteter Requests
    inflight: usize,
}

impl BuilderApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = BuilderOptions::config_path();
        let builder_options = BuilderOptions::load_from_file(&config_path);
        if builder_options.app_id.is_empty() {
            log::warn!("Keine app_id konfiguriert, Suchanfragen laufen ohne Credentials");
        }

        let search = match SearchClient::spawn() {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Such-Worker konnte nicht starten: {e:#}");
                None
            }
        };

        Self {
            state: AppState::with_options(builder_options),
            controller: AppController::new(),
            search,
            inflight: 0,
        }
    }
}

impl eframe::App for BuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);
        events.extend(self.collect_timer_events());
        events.extend(self.collect_search_events());

        let has_events = !events.is_empty();
        self.process_events(events);
        self.dispatch_outbox();
        self.maybe_request_repaint(ctx, has_events);
    }
}

impl BuilderApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = ui::render_tab_bar(ctx, &self.state);
        events.extend(ui::render_active_panel(ctx, &mut self.state));

        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            events.push(AppIntent::ExitRequested);
        }

        events
    }

    /// Übersetzt fällige Debounce-Slots in Such-Intents.
    fn collect_timer_events(&mut self) -> Vec<AppIntent> {
        self.state
            .poll_due_searches(Instant::now())
            .into_iter()
            .map(|(field, query)| AppIntent::SearchDue { field, query })
            .collect()
    }

    /// Holt eingetroffene Worker-Antworten ab.
    fn collect_search_events(&mut self) -> Vec<AppIntent> {
        let Some(search) = self.search.as_ref() else {
            return Vec::new();
        };
        let outcomes = search.drain();
        self.inflight = self.inflight.saturating_sub(outcomes.len());
        outcomes
            .into_iter()
            .map(|outcome| AppIntent::SearchArrived { outcome })
            .collect()
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Reicht ausstehende Requests aus der Outbox an den Such-Worker weiter.
    fn dispatch_outbox(&mut self) {
        if self.state.outbox.is_empty() {
            return;
        }
        let requests = std::mem::take(&mut self.state.outbox);

        let Some(search) = self.search.as_ref() else {
            log::warn!("Kein Such-Worker, {} Request(s) verworfen", requests.len());
            return;
        };

        for request in requests {
            let job = match request {
                OutboundRequest::Search { field, seq, query } => {
                    log::info!("Suche für {field:?}: {query:?}");
                    FetchJob {
                        field,
                        seq,
                        url: api::search_url(&self.state.options, &query),
                        kind: FetchKind::Search,
                    }
                }
                OutboundRequest::PlaceDetail { field, seq, href } => {
                    log::info!("Place-Detail für {field:?}");
                    FetchJob {
                        field,
                        seq,
                        url: href,
                        kind: FetchKind::PlaceDetail,
                    }
                }
            };
            search.submit(job);
            self.inflight += 1;
        }
    }

    /// Hält die Frame-Schleife am Laufen, solange Timer oder Requests warten.
    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if self.state.any_debounce_armed() || self.inflight > 0 {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if has_events {
            ctx.request_repaint();
        }
    }
}
