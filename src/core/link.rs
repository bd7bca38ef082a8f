//! Zusammenbau der share.here.com-URLs und des Markup-Snippets.

use super::modes::{MapStyle, TravelMode};

/// URL-Pfadsegment für einen Ort.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Symbolischer Ort "Position des Nutzers"
    MyLocation,
    /// Konkreter Ort mit Koordinaten und Anzeigetitel
    Point { lat: f64, lon: f64, label: String },
}

impl Segment {
    /// Kodiert das Segment als URL-Pfadkomponente.
    /// Koordinaten-Segmente: `lat,lon,<urlencoded Titel>`.
    pub fn to_path(&self) -> String {
        match self {
            Segment::MyLocation => "mylocation".to_string(),
            Segment::Point { lat, lon, label } => {
                format!("{},{},{}", lat, lon, urlencoding::encode(label))
            }
        }
    }
}

/// Baut die Routen-URL: `<base>r/<from>/<to>?m=<mode>&t=<style>`.
pub fn route_url(
    base: &str,
    from: &Segment,
    to: &Segment,
    mode: TravelMode,
    style: MapStyle,
) -> String {
    let mut url = format!("{}r/{}/{}", base, from.to_path(), to.to_path());
    append_params(&mut url, &[("m", mode.value()), ("t", style.value())]);
    url
}

/// Baut die Orts-URL: `<base>l/<segment>?t=<style>`.
pub fn location_url(base: &str, segment: &Segment, style: MapStyle) -> String {
    let mut url = format!("{}l/{}", base, segment.to_path());
    append_params(&mut url, &[("t", style.value())]);
    url
}

/// HTML-Snippet für die produzierte URL.
pub fn markup(url: &str) -> String {
    format!("<a href=\"{url}\">Your text here</a>")
}

/// Hängt nicht-leere Parameter in fester Reihenfolge als Query-String an.
fn append_params(url: &mut String, params: &[(&str, &str)]) {
    let joined: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    if !joined.is_empty() {
        url.push('?');
        url.push_str(&joined.join("&"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://share.here.com/";

    fn bremen() -> Segment {
        Segment::Point {
            lat: 53.0751,
            lon: 8.80469,
            label: "Bremen, Germany".to_string(),
        }
    }

    fn berlin() -> Segment {
        Segment::Point {
            lat: 52.51605,
            lon: 13.37691,
            label: "Berlin, Germany".to_string(),
        }
    }

    #[test]
    fn test_point_segment_encodes_title() {
        assert_eq!(bremen().to_path(), "53.0751,8.80469,Bremen%2C%20Germany");
    }

    #[test]
    fn test_my_location_segment_is_literal() {
        assert_eq!(Segment::MyLocation.to_path(), "mylocation");
    }

    #[test]
    fn test_route_url_with_defaults() {
        let url = route_url(
            BASE,
            &bremen(),
            &berlin(),
            TravelMode::default(),
            MapStyle::default(),
        );
        assert_eq!(
            url,
            "https://share.here.com/r/53.0751,8.80469,Bremen%2C%20Germany/52.51605,13.37691,Berlin%2C%20Germany?m=d&t=normal"
        );
    }

    #[test]
    fn test_route_url_mode_before_style() {
        let url = route_url(
            BASE,
            &Segment::MyLocation,
            &berlin(),
            TravelMode::Walk,
            MapStyle::Terrain,
        );
        assert_eq!(
            url,
            "https://share.here.com/r/mylocation/52.51605,13.37691,Berlin%2C%20Germany?m=w&t=terrain"
        );
    }

    #[test]
    fn test_location_url_only_style_param() {
        let url = location_url(BASE, &berlin(), MapStyle::default());
        assert_eq!(
            url,
            "https://share.here.com/l/52.51605,13.37691,Berlin%2C%20Germany?t=normal"
        );
    }

    #[test]
    fn test_markup_wraps_url() {
        assert_eq!(
            markup("https://share.here.com/l/1,2,X?t=normal"),
            "<a href=\"https://share.here.com/l/1,2,X?t=normal\">Your text here</a>"
        );
    }
}
