//! Geschlossene Aufzählungen für Reisemodus und Kartenstil.

/// Reisemodus einer Route (Query-Parameter `m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TravelMode {
    /// Auto (Standard)
    #[default]
    Drive,
    /// Öffentlicher Nahverkehr
    PublicTransport,
    /// Zu Fuß
    Walk,
}

impl TravelMode {
    /// Alle Modi in Anzeige-Reihenfolge.
    pub const ALL: [TravelMode; 3] = [
        TravelMode::Drive,
        TravelMode::PublicTransport,
        TravelMode::Walk,
    ];

    /// Beschriftung in der Auswahl.
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Drive => "Drive",
            TravelMode::PublicTransport => "Public transport",
            TravelMode::Walk => "Walk",
        }
    }

    /// Wire-Wert für den Query-Parameter `m`.
    pub fn value(self) -> &'static str {
        match self {
            TravelMode::Drive => "d",
            TravelMode::PublicTransport => "pt",
            TravelMode::Walk => "w",
        }
    }
}

/// Kartenstil der produzierten Links (Query-Parameter `t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapStyle {
    /// Straßenkarte (Standard)
    #[default]
    Street,
    /// Gelände
    Terrain,
    /// Satellit
    Satellite,
    /// Straßenkarte mit ÖPNV-Overlay
    PublicTransport,
    /// Straßenkarte mit Verkehrslage-Overlay
    Traffic,
    /// Satellit mit Straßen-Overlay
    Hybrid,
}

impl MapStyle {
    /// Alle Stile in Anzeige-Reihenfolge.
    pub const ALL: [MapStyle; 6] = [
        MapStyle::Street,
        MapStyle::Terrain,
        MapStyle::Satellite,
        MapStyle::PublicTransport,
        MapStyle::Traffic,
        MapStyle::Hybrid,
    ];

    /// Beschriftung in der Auswahl.
    pub fn label(self) -> &'static str {
        match self {
            MapStyle::Street => "Street (default)",
            MapStyle::Terrain => "Terrain",
            MapStyle::Satellite => "Satellite",
            MapStyle::PublicTransport => "Street with public transport overlay",
            MapStyle::Traffic => "Street with traffic info overlay",
            MapStyle::Hybrid => "Satellite with street overlay",
        }
    }

    /// Wire-Wert für den Query-Parameter `t`.
    pub fn value(self) -> &'static str {
        match self {
            MapStyle::Street => "normal",
            MapStyle::Terrain => "terrain",
            MapStyle::Satellite => "satellite",
            MapStyle::PublicTransport => "pt",
            MapStyle::Traffic => "traffic",
            MapStyle::Hybrid => "hybrid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_link_defaults() {
        assert_eq!(TravelMode::default().value(), "d");
        assert_eq!(MapStyle::default().value(), "normal");
    }

    #[test]
    fn test_wire_values_are_unique() {
        let mut values: Vec<&str> = MapStyle::ALL.iter().map(|s| s.value()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), MapStyle::ALL.len(), "doppelter Wire-Wert");
    }
}
