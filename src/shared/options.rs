//! Zentrale Konfiguration für den Share-Link-Builder.
//!
//! `BuilderOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Endpunkte ───────────────────────────────────────────────────────

/// Basis-URL der produzierten Share-Links.
pub const SHARE_URL: &str = "https://share.here.com/";
/// Basis-URL der Places-API.
pub const PLACES_API: &str = "https://places.api.here.com/places/v1/";

// ── Suche ───────────────────────────────────────────────────────────

/// Ruhezeit der Debounce in Millisekunden.
pub const DEBOUNCE_MS: u64 = 300;
/// Mindestlänge der Query (exklusiv), ab der gesucht wird.
pub const MIN_QUERY_CHARS: usize = 2;
/// Viewport-Bias der Suche: West-Lon, Süd-Lat, Ost-Lon, Nord-Lat.
pub const SEARCH_VIEWPORT: [f64; 4] = [-167.4317, -56.2974, -168.7692, 74.4081];

/// Alle zur Laufzeit änderbaren Builder-Optionen.
/// Wird als `share_link_builder.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuilderOptions {
    // ── Endpunkte ───────────────────────────────────────────────
    /// Basis-URL der produzierten Share-Links
    pub share_url: String,
    /// Basis-URL der Places-API
    pub places_api: String,

    // ── Credentials ─────────────────────────────────────────────
    /// App-ID für die Places-API
    pub app_id: String,
    /// App-Code für die Places-API
    pub app_code: String,

    // ── Suche ───────────────────────────────────────────────────
    /// Viewport-Bias der Suche (West-Lon, Süd-Lat, Ost-Lon, Nord-Lat)
    pub viewport: [f64; 4],
    /// Ruhezeit der Debounce in Millisekunden
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Mindestlänge der Query (exklusiv), ab der gesucht wird
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            share_url: SHARE_URL.to_string(),
            places_api: PLACES_API.to_string(),
            app_id: String::new(),
            app_code: String::new(),
            viewport: SEARCH_VIEWPORT,
            debounce_ms: DEBOUNCE_MS,
            min_query_chars: MIN_QUERY_CHARS,
        }
    }
}

/// Serde-Default für `debounce_ms` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_debounce_ms() -> u64 {
    DEBOUNCE_MS
}

/// Serde-Default für `min_query_chars` (Abwärtskompatibilität).
fn default_min_query_chars() -> usize {
    MIN_QUERY_CHARS
}

impl BuilderOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("share_link_builder"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("share_link_builder.toml")
    }

    /// Ruhezeit der Debounce als `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
