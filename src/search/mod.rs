//! Ortssuche: Debounce, Wire-Format, Worker-Client.

pub mod api;
pub mod client;
pub mod debounce;

pub use client::{FetchJob, FetchKind, FetchOutcome, FetchPayload, SearchClient};
pub use debounce::Debounce;
