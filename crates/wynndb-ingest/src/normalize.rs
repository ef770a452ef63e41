//! Mapping from raw item records to [`wynndb_core::NormalizedIngredient`].
//!
//! Every default for an absent source field is applied here and nowhere else.

use wynndb_core::{NearestPlace, NormalizedIngredient};

use crate::types::RawItem;

const DEFAULT_TIER: &str = "Normal";

/// Builds the catalog entry for `item`, stored under `internal_name`.
///
/// Defaults: `name` falls back to `internal_name`, `tier` to `"Normal"`, the
/// object fields to `{}`, and `dropMeta`/`icon` to `null`. Empty strings count
/// as absent. A numeric tier has already been read in string form, so `2`
/// becomes `"2"`. A truthy non-object ingredient signal still maps to `{}`.
/// `dropMeta` is copied through unchanged.
#[must_use]
pub fn normalize_ingredient(
    internal_name: &str,
    item: &RawItem,
    nearest_place: Option<NearestPlace>,
) -> NormalizedIngredient {
    let non_empty = |value: Option<&str>| value.filter(|s| !s.is_empty()).map(str::to_owned);

    NormalizedIngredient {
        internal_name: internal_name.to_owned(),
        name: non_empty(item.name.as_deref()).unwrap_or_else(|| internal_name.to_owned()),
        tier: non_empty(item.tier.as_deref()).unwrap_or_else(|| DEFAULT_TIER.to_owned()),
        requirements: item.requirements.clone().unwrap_or_default(),
        identifications: item.identifications.clone().unwrap_or_default(),
        consumable_only_ids: item.consumable_only_ids.clone().unwrap_or_default(),
        ingredient_position_modifiers: item
            .ingredient_position_modifiers
            .clone()
            .unwrap_or_default(),
        drop_meta: item.drop_meta.clone(),
        nearest_place,
        icon: non_empty(item.icon.as_deref()),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
