//! Share-Link-Builder Library.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod search;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, FieldId, FieldVariant, OutboundRequest,
    SuggestionEntry, Tab,
};
pub use crate::core::{
    location_url, markup, route_url, LocationHit, MapStyle, PlaceDetail, Segment, TravelMode,
};
pub use search::{Debounce, FetchOutcome, FetchPayload};
pub use shared::BuilderOptions;
