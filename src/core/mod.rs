//! Kern-Datentypen: Orte, Modi, URL-Zusammenbau.

pub mod link;
pub mod location;
pub mod modes;

pub use link::{location_url, markup, route_url, Segment};
pub use location::{LocationHit, PlaceDetail};
pub use modes::{MapStyle, TravelMode};
