//! Such-Worker: blockierendes HTTP im Hintergrund-Thread, Kanäle zum UI-Thread.
//!
//! Der Worker besitzt den einzigen HTTP-Client. Aufträge laufen über einen
//! mpsc-Kanal hinein, Ergebnisse über einen zweiten heraus; der UI-Thread
//! holt sie einmal pro Frame nicht-blockierend ab. Laufende Requests werden
//! nicht abgebrochen — eine veraltete Antwort kann nach einem neueren
//! Tastenanschlag eintreffen (Last-Callback-Wins, siehe Handler).

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::app::state::FieldId;
use crate::core::{LocationHit, PlaceDetail};

use super::api;

/// Auftrag an den Such-Worker.
#[derive(Debug, Clone)]
pub struct FetchJob {
    /// Feld, für das der Request läuft
    pub field: FieldId,
    /// Request-Sequenznummer des Feldes
    pub seq: u64,
    /// Vollständige Request-URL
    pub url: String,
    /// Art des Requests
    pub kind: FetchKind,
}

/// Art eines Worker-Requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Ortssuche (`discover/search`)
    Search,
    /// Place-Detail (href eines Treffers)
    PlaceDetail,
}

/// Ergebnis eines Worker-Requests.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Feld, für das der Request lief
    pub field: FieldId,
    /// Request-Sequenznummer des Feldes
    pub seq: u64,
    /// Nutzlast
    pub payload: FetchPayload,
}

/// Nutzlast eines Worker-Ergebnisses.
#[derive(Debug, Clone)]
pub enum FetchPayload {
    /// Trefferliste der Ortssuche
    Hits(Vec<LocationHit>),
    /// Detail-Antwort eines Place-Treffers
    Place(PlaceDetail),
    /// Request fehlgeschlagen (Netz oder JSON); das Feld bleibt unverändert
    Failed(String),
}

/// Kanal-Endpunkte zum Such-Worker.
pub struct SearchClient {
    tx: Sender<FetchJob>,
    rx: Receiver<FetchOutcome>,
}

impl SearchClient {
    /// Startet den Worker-Thread mit eigenem blockierenden HTTP-Client.
    pub fn spawn() -> anyhow::Result<Self> {
        let (job_tx, job_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        thread::Builder::new()
            .name("place-search-worker".into())
            .spawn(move || run_worker(job_rx, outcome_tx))?;

        Ok(Self {
            tx: job_tx,
            rx: outcome_rx,
        })
    }

    /// Reicht einen Auftrag an den Worker weiter.
    pub fn submit(&self, job: FetchJob) {
        if self.tx.send(job).is_err() {
            log::warn!("Such-Worker nicht erreichbar, Request verworfen");
        }
    }

    /// Holt alle bisher eingetroffenen Ergebnisse ab (nicht blockierend).
    pub fn drain(&self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Such-Worker beendet, keine weiteren Antworten");
                    break;
                }
            }
        }
        outcomes
    }
}

fn run_worker(rx: Receiver<FetchJob>, tx: Sender<FetchOutcome>) {
    let client = match reqwest::blocking::Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            log::warn!("HTTP-Client konnte nicht erstellt werden: {e}");
            return;
        }
    };

    while let Ok(job) = rx.recv() {
        let payload = execute(&client, &job);
        let outcome = FetchOutcome {
            field: job.field,
            seq: job.seq,
            payload,
        };
        if tx.send(outcome).is_err() {
            return;
        }
    }
}

/// Führt einen Request aus; Fehler werden geloggt und als `Failed` gemeldet.
fn execute(client: &reqwest::blocking::Client, job: &FetchJob) -> FetchPayload {
    let response = client
        .get(&job.url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send();

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Request für {:?} fehlgeschlagen: {e}", job.field);
            return FetchPayload::Failed(e.to_string());
        }
    };

    match job.kind {
        FetchKind::Search => match response.json::<api::SearchResponseBody>() {
            Ok(body) => FetchPayload::Hits(api::hits_from_body(body)),
            Err(e) => {
                log::warn!("Suchantwort für {:?} nicht lesbar: {e}", job.field);
                FetchPayload::Failed(e.to_string())
            }
        },
        FetchKind::PlaceDetail => match response.json::<api::PlaceDetailBody>() {
            Ok(body) => FetchPayload::Place(PlaceDetail { view: body.view }),
            Err(e) => {
                log::warn!("Detail-Antwort für {:?} nicht lesbar: {e}", job.field);
                FetchPayload::Failed(e.to_string())
            }
        },
    }
}
