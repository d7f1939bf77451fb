//! Location area payloads
//!
//! Response bodies for the paginated location-area list and the per-area
//! encounter detail.

use serde::Deserialize;

/// A name/url pair, the unit every PokeAPI listing is built from.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the location-area listing (`GET /location-area/?offset=..`).
///
/// `next`/`previous` are absolute page URLs; `None` marks the ends of the
/// listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area (`GET /location-area/{name}`), reduced
/// to the encounter list the `explore` command prints.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

/// A single possible encounter within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_location_detail_deserialize() {
        let json = r#"{
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.pokemon_encounters.len(), 2);
        assert_eq!(detail.pokemon_encounters[1].pokemon.name, "magikarp");
    }

    #[test]
    fn test_location_detail_missing_encounters() {
        // Extra fields ignored, missing encounter list defaults to empty.
        let detail: LocationAreaDetail = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(detail.pokemon_encounters.is_empty());
    }
}
