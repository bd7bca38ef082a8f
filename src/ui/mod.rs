//! UI-Komponenten: Tab-Leiste, Panels, LocationBox, Result-Screen.

mod location_box;
mod panels;
mod result_screen;
mod selectors;
mod tabs;

pub use panels::render_active_panel;
pub use tabs::render_tab_bar;
