//! Suchtreffer der Ortssuche und Place-Details.

/// Ein Treffer der Ortssuche.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationHit {
    /// Titel des Treffers (z.B. "Bremen")
    pub title: String,
    /// Umgebungsbeschreibung, bereits normalisiert (keine `<br/>`-Tags)
    pub vicinity: String,
    /// Koordinaten als [lat, lon]
    pub position: [f64; 2],
    /// Detail-URL (nur bei der Place-Suche vorhanden)
    pub href: Option<String>,
}

impl LocationHit {
    /// Anzeigetext im Vorschlags-Popup: "Titel, Vicinity".
    /// Wird bei Auswahl zum Eingabetext und damit zum Segment-Titel.
    pub fn display_label(&self) -> String {
        if self.vicinity.is_empty() {
            self.title.clone()
        } else {
            format!("{}, {}", self.title, self.vicinity)
        }
    }
}

/// Detail-Antwort eines Place-Treffers mit fertiger Share-URL.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    /// Fertige share.here.com-URL (`view`-Feld der Antwort)
    pub view: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_joins_title_and_vicinity() {
        let hit = LocationHit {
            title: "Bremen".to_string(),
            vicinity: "Germany".to_string(),
            position: [53.0751, 8.80469],
            href: None,
        };
        assert_eq!(hit.display_label(), "Bremen, Germany");
    }

    #[test]
    fn test_display_label_without_vicinity() {
        let hit = LocationHit {
            title: "Atlantis".to_string(),
            vicinity: String::new(),
            position: [0.0, 0.0],
            href: None,
        };
        assert_eq!(hit.display_label(), "Atlantis");
    }
}
