//! Canonical catalog schema written for downstream consumers.
//!
//! Every field of [`NormalizedIngredient`] is always serialized. Absent
//! source values are replaced by their defaults before a record is built, so
//! `Option` fields here serialize as `null` rather than being omitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closest known world location to an item's drop point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestPlace {
    pub name: String,
    /// Planar distance in blocks, rounded to the nearest integer.
    pub distance: u64,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIngredient {
    #[serde(rename = "internalName")]
    pub internal_name: String,
    pub name: String,
    pub tier: String,
    pub requirements: Map<String, Value>,
    pub identifications: Map<String, Value>,
    #[serde(rename = "consumableOnlyIDs")]
    pub consumable_only_ids: Map<String, Value>,
    #[serde(rename = "ingredientPositionModifiers")]
    pub ingredient_position_modifiers: Map<String, Value>,
    #[serde(rename = "dropMeta")]
    pub drop_meta: Option<Map<String, Value>>,
    #[serde(rename = "nearestPlace")]
    pub nearest_place: Option<NearestPlace>,
    pub icon: Option<String>,
}

/// Ordered result of one pipeline run. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientCatalog {
    entries: Vec<NormalizedIngredient>,
}

impl IngredientCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ingredient: NormalizedIngredient) {
        self.entries.push(ingredient);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedIngredient> {
        self.entries.iter()
    }

    /// Number of entries carrying a `nearestPlace`.
    #[must_use]
    pub fn enriched_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.nearest_place.is_some())
            .count()
    }
}

impl<'a> IntoIterator for &'a IngredientCatalog {
    type Item = &'a NormalizedIngredient;
    type IntoIter = std::slice::Iter<'a, NormalizedIngredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<NormalizedIngredient> for IngredientCatalog {
    fn from_iter<I: IntoIterator<Item = NormalizedIngredient>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bare(internal_name: &str) -> NormalizedIngredient {
        NormalizedIngredient {
            internal_name: internal_name.to_owned(),
            name: internal_name.to_owned(),
            tier: "Normal".to_owned(),
            requirements: Map::new(),
            identifications: Map::new(),
            consumable_only_ids: Map::new(),
            ingredient_position_modifiers: Map::new(),
            drop_meta: None,
            nearest_place: None,
            icon: None,
        }
    }

    #[test]
    fn ingredient_serializes_every_field_with_source_key_names() {
        let value = serde_json::to_value(bare("Wybel Fluff")).unwrap();
        assert_eq!(
            value,
            json!({
                "internalName": "Wybel Fluff",
                "name": "Wybel Fluff",
                "tier": "Normal",
                "requirements": {},
                "identifications": {},
                "consumableOnlyIDs": {},
                "ingredientPositionModifiers": {},
                "dropMeta": null,
                "nearestPlace": null,
                "icon": null
            })
        );
    }

    #[test]
    fn ingredient_serializes_nearest_place_object() {
        let mut entry = bare("Bob's Tear");
        entry.nearest_place = Some(NearestPlace {
            name: "Ragni".to_owned(),
            distance: 42,
        });
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value["nearestPlace"], json!({"name": "Ragni", "distance": 42}));
    }

    #[test]
    fn catalog_serializes_as_array_in_insertion_order() {
        let catalog: IngredientCatalog = ["b", "a", "c"].into_iter().map(bare).collect();
        let value = serde_json::to_value(&catalog).unwrap();
        let names: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["internalName"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn catalog_counts_enriched_entries() {
        let mut catalog = IngredientCatalog::new();
        catalog.push(bare("a"));
        let mut enriched = bare("b");
        enriched.nearest_place = Some(NearestPlace {
            name: "Detlas".to_owned(),
            distance: 0,
        });
        catalog.push(enriched);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.enriched_count(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn empty_catalog_serializes_as_empty_array() {
        let catalog = IngredientCatalog::new();
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "[]");
    }
}
