//! Geteilte Konfiguration.

pub mod options;

pub use options::BuilderOptions;
