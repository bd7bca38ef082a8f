//! Wire-Format der Places-API und Aufbau der Request-URLs.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::core::LocationHit;
use crate::shared::BuilderOptions;

/// Antwort von `discover/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    /// Ergebnis-Container
    pub results: SearchResults,
}

/// Ergebnis-Container der Suchantwort.
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    /// Trefferliste
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// Einzelner Suchtreffer im Wire-Format.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    /// Titel des Treffers
    pub title: String,
    /// Umgebungsbeschreibung, Zeilenumbrüche als literales `<br/>`
    #[serde(default)]
    pub vicinity: String,
    /// Koordinaten als [lat, lon]
    pub position: [f64; 2],
    /// Detail-URL (nur bei der Place-Suche)
    #[serde(default)]
    pub href: Option<String>,
}

/// Antwort eines Place-Detail-Requests.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailBody {
    /// Fertige share.here.com-URL
    pub view: String,
}

fn br_tag() -> &'static Regex {
    static BR_TAG: OnceLock<Regex> = OnceLock::new();
    BR_TAG.get_or_init(|| Regex::new(r"<br\s*/?>").expect("BR-Tag-Regex ist gültig"))
}

/// Normalisiert Zeilenumbruch-Tags der Vicinity zu ", ".
pub fn normalize_vicinity(raw: &str) -> String {
    br_tag().replace_all(raw, ", ").into_owned()
}

/// Übersetzt die Suchantwort in normalisierte Treffer.
pub fn hits_from_body(body: SearchResponseBody) -> Vec<LocationHit> {
    body.results
        .items
        .into_iter()
        .map(|item| LocationHit {
            title: item.title,
            vicinity: normalize_vicinity(&item.vicinity),
            position: item.position,
            href: item.href,
        })
        .collect()
}

/// Baut die Such-URL aus Optionen und Query.
pub fn search_url(options: &BuilderOptions, query: &str) -> String {
    let viewport = options
        .viewport
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}discover/search?app_id={}&app_code={}&X-Map-Viewport={}&X-NOSE-nokiamaps-lookahead=1&q={}",
        options.places_api,
        options.app_id,
        options.app_code,
        viewport,
        urlencoding::encode(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_vicinity_replaces_br_tags() {
        assert_eq!(normalize_vicinity("Am Markt 1<br/>Bremen"), "Am Markt 1, Bremen");
        assert_eq!(normalize_vicinity("a<br />b<br>c"), "a, b, c");
        assert_eq!(normalize_vicinity("Germany"), "Germany");
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "results": {
                "items": [
                    {
                        "title": "Bremen",
                        "vicinity": "Germany",
                        "position": [53.0751, 8.80469],
                        "href": "https://places.api.here.com/places/v1/places/123"
                    },
                    {
                        "title": "Bremerhaven",
                        "position": [53.53957, 8.58084]
                    }
                ]
            }
        }"#;
        let body: SearchResponseBody =
            serde_json::from_str(json).expect("Beispielantwort muss parsebar sein");
        let hits = hits_from_body(body);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Bremen");
        assert_eq!(hits[0].position, [53.0751, 8.80469]);
        assert!(hits[0].href.is_some());
        assert_eq!(hits[1].vicinity, "");
        assert_eq!(hits[1].href, None);
    }

    #[test]
    fn test_search_url_carries_viewport_and_query() {
        let options = BuilderOptions {
            app_id: "id".to_string(),
            app_code: "code".to_string(),
            ..BuilderOptions::default()
        };
        let url = search_url(&options, "Brandenburger Tor");

        assert!(url.starts_with("https://places.api.here.com/places/v1/discover/search?"));
        assert!(url.contains("app_id=id&app_code=code"));
        assert!(url.contains("X-Map-Viewport=-167.4317,-56.2974,-168.7692,74.4081"));
        assert!(url.contains("X-NOSE-nokiamaps-lookahead=1"));
        assert!(url.ends_with("&q=Brandenburger%20Tor"));
    }
}
