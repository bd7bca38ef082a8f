//! Application State: Tabs, Panels, Felder, Outbox.

mod app_state;
mod field;
mod panel;

pub use app_state::{AppState, OutboundRequest, Tab};
pub use field::{
    FieldId, FieldVariant, LocationField, SelectedHit, SuggestionEntry, MY_LOCATION_ENTRY_TEXT,
    MY_LOCATION_INPUT_TEXT,
};
pub use panel::{LocationPanelState, PlacePanelState, RoutePanelState};
