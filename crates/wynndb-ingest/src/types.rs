//! Raw source types for the item database and the place label list.
//!
//! ## Item database shape
//!
//! The item endpoint returns a single JSON object keyed by internal item name.
//! Every field on an item is optional, and several have changed meaning as
//! the API evolved, so nothing here is modelled with a strict serde schema.
//! Instead [`RawItem`] reads each field by presence and JSON type: a field of
//! the wrong type is treated as absent rather than failing the whole payload.
//! Two exceptions: `tier` arrives as a number (`0`..=`3`) in current exports
//! and is kept in string form, and the ingredient signals `consumableOnlyIDs`
//! and `ingredientPositionModifiers` count as present for any truthy value
//! (anything but `null`, `false`, `0` or `""`), whatever its type.
//!
//! Object-valued fields (`requirements`, `identifications`,
//! `consumableOnlyIDs`, `ingredientPositionModifiers`, `dropMeta`) are kept as
//! raw `serde_json::Map`s because they are passed through to the catalog
//! verbatim. Key order is preserved (`serde_json/preserve_order`).
//!
//! ## Place list shape
//!
//! Labels carry `name`, `x` and `z`. Older exports used `y` for the second
//! planar axis, so [`RawLocation::planar_point`] falls back to `y` when `z`
//! is missing. The list is served either as a bare array or as an object
//! whose values are labels or arrays of labels (`{"labels": [...]}`).

use serde::Deserialize;
use serde_json::{Map, Value};

/// World position attached to a drop-based item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropCoordinate {
    pub x: f64,
    /// Vertical axis. Not used for location matching.
    pub y: f64,
    pub z: f64,
}

/// A single item record from the item database.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawItem {
    pub name: Option<String>,
    pub tier: Option<String>,
    pub requirements: Option<Map<String, Value>>,
    pub identifications: Option<Map<String, Value>>,
    pub consumable_only_ids: Option<Map<String, Value>>,
    pub ingredient_position_modifiers: Option<Map<String, Value>>,
    /// `consumableOnlyIDs` was truthy. Its payload is only kept when it is an
    /// object.
    pub has_consumable_only_ids: bool,
    /// `ingredientPositionModifiers` was truthy.
    pub has_ingredient_position_modifiers: bool,
    pub drop_meta: Option<Map<String, Value>>,
    pub icon: Option<String>,
}

impl RawItem {
    /// Builds an item from an arbitrary JSON value. Never fails: a non-object
    /// value produces an item with every field absent.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };

        let mut take_str = |key: &str| match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        let name = take_str("name");
        let icon = take_str("icon");

        let tier = match fields.remove("tier") {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        };

        let mut take_signal = |key: &str| match fields.remove(key) {
            Some(Value::Object(m)) => (true, Some(m)),
            Some(other) => (is_truthy(&other), None),
            None => (false, None),
        };
        let (has_consumable_only_ids, consumable_only_ids) = take_signal("consumableOnlyIDs");
        let (has_ingredient_position_modifiers, ingredient_position_modifiers) =
            take_signal("ingredientPositionModifiers");

        let mut take_obj = |key: &str| match fields.remove(key) {
            Some(Value::Object(m)) => Some(m),
            _ => None,
        };

        Self {
            name,
            tier,
            requirements: take_obj("requirements"),
            identifications: take_obj("identifications"),
            consumable_only_ids,
            ingredient_position_modifiers,
            has_consumable_only_ids,
            has_ingredient_position_modifiers,
            drop_meta: take_obj("dropMeta"),
            icon,
        }
    }

    /// The `requirements.skills` list, when it is present and is an array.
    #[must_use]
    pub fn skills(&self) -> Option<&[Value]> {
        self.requirements
            .as_ref()?
            .get("skills")?
            .as_array()
            .map(Vec::as_slice)
    }

    /// The `dropMeta.coordinates` triple. Anything other than an array of
    /// exactly three numbers yields `None`.
    #[must_use]
    pub fn drop_coordinate(&self) -> Option<DropCoordinate> {
        let coords = self.drop_meta.as_ref()?.get("coordinates")?.as_array()?;
        let [x, y, z] = coords.as_slice() else {
            return None;
        };
        Some(DropCoordinate {
            x: x.as_f64()?,
            y: y.as_f64()?,
            z: z.as_f64()?,
        })
    }
}

/// JSON truthiness: `null`, `false`, zero and `""` are falsy. Arrays and
/// objects are truthy even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<Value> for RawItem {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// Item records in source document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItemMap {
    entries: Vec<(String, RawItem)>,
}

impl RawItemMap {
    /// Converts a decoded JSON object, keeping its key order.
    #[must_use]
    pub fn from_object(object: Map<String, Value>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (key, RawItem::from_value(value)))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawItem)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, RawItem)> for RawItemMap {
    fn from_iter<I: IntoIterator<Item = (String, RawItem)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A named world-map label with a planar reference point.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawLocation {
    pub name: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl RawLocation {
    /// Builds a location from an arbitrary JSON value. Non-numeric
    /// coordinates count as absent; a missing name becomes an empty string.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let num = |key: &str| value.get(key).and_then(Value::as_f64);
        Self {
            name: value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
            x: num("x"),
            y: num("y"),
            z: num("z"),
        }
    }

    /// `(x, z)` for matching, with `y` standing in for a missing `z`.
    /// `None` when the location has no usable pair.
    #[must_use]
    pub fn planar_point(&self) -> Option<(f64, f64)> {
        let x = self.x?;
        let second = self.z.or(self.y)?;
        Some((x, second))
    }

    /// Decodes a place list payload.
    ///
    /// Accepts a bare array of labels, or an object whose values are labels or
    /// arrays of labels (flattened one level, in document order). Returns
    /// `None` for any other top-level shape.
    #[must_use]
    pub fn list_from_value(value: &Value) -> Option<Vec<Self>> {
        match value {
            Value::Array(items) => Some(items.iter().map(Self::from_value).collect()),
            Value::Object(groups) => {
                let mut out = Vec::new();
                for group in groups.values() {
                    match group {
                        Value::Array(items) => out.extend(items.iter().map(Self::from_value)),
                        other => out.push(Self::from_value(other)),
                    }
                }
                Some(out)
            }
            _ => None,
        }
    }
}

impl From<Value> for RawLocation {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Outcome of the best-effort place fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSource {
    Available(Vec<RawLocation>),
    /// The place list could not be retrieved or decoded. Enrichment is skipped.
    Unavailable { reason: String },
}

impl LocationSource {
    /// Locations to search. Empty when unavailable.
    #[must_use]
    pub fn locations(&self) -> &[RawLocation] {
        match self {
            Self::Available(locations) => locations,
            Self::Unavailable { .. } => &[],
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}
