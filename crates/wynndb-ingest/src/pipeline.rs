//! Catalog build: classify, enrich, normalize.

use wynndb_core::IngredientCatalog;

use crate::classify::is_ingredient;
use crate::enrich::find_nearest_place;
use crate::normalize::normalize_ingredient;
use crate::types::{LocationSource, RawItemMap};

/// Counters describing one catalog build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Raw items examined.
    pub items_seen: usize,
    /// Items that passed classification.
    pub ingredients: usize,
    /// Ingredients that received a `nearestPlace`.
    pub enriched: usize,
    pub locations_available: bool,
}

/// Builds the ingredient catalog from the raw item map.
///
/// See [`build_catalog_with_stats`].
#[must_use]
pub fn build_catalog(items: &RawItemMap, locations: &LocationSource) -> IngredientCatalog {
    build_catalog_with_stats(items, locations).0
}

/// Builds the ingredient catalog and reports counters for logging.
///
/// For each item, in source order:
/// 1. Skip it unless [`is_ingredient`] holds.
/// 2. If it has a drop coordinate and there are locations to search, look up
///    the nearest place; otherwise leave `nearestPlace` empty.
/// 3. Normalize and append.
///
/// An [`LocationSource::Unavailable`] source behaves like an empty list: every
/// entry is produced with `nearestPlace = null`.
#[must_use]
pub fn build_catalog_with_stats(
    items: &RawItemMap,
    locations: &LocationSource,
) -> (IngredientCatalog, CatalogStats) {
    let places = locations.locations();
    let mut catalog = IngredientCatalog::new();
    let mut stats = CatalogStats {
        items_seen: items.len(),
        locations_available: locations.is_available(),
        ..CatalogStats::default()
    };

    for (internal_name, item) in items.iter() {
        if !is_ingredient(item) {
            continue;
        }

        let nearest_place = match item.drop_coordinate() {
            Some(drop_point) if !places.is_empty() => find_nearest_place(drop_point, places),
            _ => None,
        };
        if nearest_place.is_some() {
            stats.enriched += 1;
        }

        catalog.push(normalize_ingredient(internal_name, item, nearest_place));
    }

    stats.ingredients = catalog.len();
    tracing::debug!(
        items_seen = stats.items_seen,
        ingredients = stats.ingredients,
        enriched = stats.enriched,
        "catalog built"
    );

    (catalog, stats)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::types::{RawItem, RawLocation};

    fn items(value: Value) -> RawItemMap {
        let Value::Object(object) = value else {
            panic!("fixture must be an object");
        };
        RawItemMap::from_object(object)
    }

    fn places() -> LocationSource {
        LocationSource::Available(vec![
            RawLocation::from_value(&json!({"name": "A", "x": 0, "z": 0})),
            RawLocation::from_value(&json!({"name": "B", "x": 10, "z": 0})),
        ])
    }

    fn fixture() -> RawItemMap {
        items(json!({
            "Sword": {"name": "Sword", "identifications": {"rawStrength": 3}},
            "Wybel Fluff": {
                "requirements": {"skills": ["tailoring"]},
                "dropMeta": {"coordinates": [3, 64, 0]}
            },
            "Old Dust": {"consumableOnlyIDs": {}},
            "Pebble": {"ingredientPositionModifiers": {"left": 1}, "dropMeta": {"name": "Quarry"}},
            "Nothing": {"requirements": {"skills": []}}
        }))
    }

    #[test]
    fn only_ingredients_are_catalogued_in_source_order() {
        let catalog = build_catalog(&fixture(), &places());
        let names: Vec<&str> = catalog.iter().map(|e| e.internal_name.as_str()).collect();
        assert_eq!(names, vec!["Wybel Fluff", "Old Dust", "Pebble"]);
    }

    #[test]
    fn drop_items_are_enriched_when_locations_exist() {
        let (catalog, stats) = build_catalog_with_stats(&fixture(), &places());
        let fluff = catalog.iter().next().unwrap();
        let nearest = fluff.nearest_place.as_ref().unwrap();
        assert_eq!(nearest.name, "A");
        assert_eq!(nearest.distance, 3);
        assert_eq!(stats.enriched, 1);
        assert_eq!(stats.ingredients, 3);
        assert_eq!(stats.items_seen, 5);
        assert!(stats.locations_available);
    }

    #[test]
    fn drop_meta_without_coordinates_is_not_enriched() {
        let catalog = build_catalog(&fixture(), &places());
        let pebble = catalog.iter().find(|e| e.internal_name == "Pebble").unwrap();
        assert!(pebble.nearest_place.is_none());
        assert_eq!(pebble.drop_meta.as_ref().unwrap()["name"], json!("Quarry"));
    }

    #[test]
    fn unavailable_locations_degrade_to_null_nearest_place() {
        let source = LocationSource::Unavailable {
            reason: "HTTP 503".to_owned(),
        };
        let (catalog, stats) = build_catalog_with_stats(&fixture(), &source);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|e| e.nearest_place.is_none()));
        assert_eq!(stats.enriched, 0);
        assert!(!stats.locations_available);
    }

    #[test]
    fn empty_location_list_degrades_the_same_way() {
        let catalog = build_catalog(&fixture(), &LocationSource::Available(Vec::new()));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.enriched_count(), 0);
    }

    #[test]
    fn each_item_yields_at_most_one_entry() {
        let every_signal = json!({
            "consumableOnlyIDs": {},
            "ingredientPositionModifiers": {},
            "requirements": {"skills": ["x"]}
        });
        let map: RawItemMap = vec![
            ("a".to_owned(), RawItem::from_value(json!({"consumableOnlyIDs": {}}))),
            ("b".to_owned(), RawItem::from_value(every_signal)),
        ]
        .into_iter()
        .collect();
        let catalog = build_catalog(&map, &places());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn numeric_tiers_and_non_object_signals_survive_the_build() {
        let map = items(json!({
            "Star Ingredient": {"tier": 2, "requirements": {"skills": ["cooking"]}},
            "FlagOnly": {"consumableOnlyIDs": true},
            "ArrayMods": {"ingredientPositionModifiers": []},
            "Falsy": {"consumableOnlyIDs": false, "ingredientPositionModifiers": 0}
        }));
        let catalog = build_catalog(&map, &places());
        let names: Vec<&str> = catalog.iter().map(|e| e.internal_name.as_str()).collect();
        assert_eq!(names, vec!["Star Ingredient", "FlagOnly", "ArrayMods"]);
        assert_eq!(catalog.iter().next().unwrap().tier, "2");
    }

    #[test]
    fn repeated_builds_serialize_identically() {
        let first = serde_json::to_string_pretty(&build_catalog(&fixture(), &places())).unwrap();
        let second = serde_json::to_string_pretty(&build_catalog(&fixture(), &places())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_item_map_yields_empty_catalog() {
        let catalog = build_catalog(&RawItemMap::default(), &places());
        assert!(catalog.is_empty());
    }
}
