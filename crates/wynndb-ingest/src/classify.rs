//! Ingredient detection.
//!
//! No single field marks an item as an ingredient across every revision of
//! the item database, so the check is a disjunction of weak signals and
//! deliberately over-includes.

use crate::types::RawItem;

/// Returns `true` when `item` should be catalogued as an ingredient.
///
/// Any one of these qualifies:
/// - `requirements.skills` is a non-empty list
/// - `consumableOnlyIDs` is truthy, even an empty object or list
/// - `ingredientPositionModifiers` is truthy, even an empty object or list
#[must_use]
pub fn is_ingredient(item: &RawItem) -> bool {
    let has_skill_requirement = item.skills().is_some_and(|skills| !skills.is_empty());

    has_skill_requirement
        || item.has_consumable_only_ids
        || item.has_ingredient_position_modifiers
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(value: serde_json::Value) -> RawItem {
        RawItem::from_value(value)
    }

    #[test]
    fn empty_item_is_not_an_ingredient() {
        assert!(!is_ingredient(&item(json!({}))));
    }

    #[test]
    fn skill_requirement_qualifies() {
        assert!(is_ingredient(&item(json!({
            "requirements": {"level": 10, "skills": ["cooking", "alchemism"]}
        }))));
    }

    #[test]
    fn empty_skills_list_does_not_qualify() {
        assert!(!is_ingredient(&item(json!({"requirements": {"skills": []}}))));
    }

    #[test]
    fn requirements_without_skills_do_not_qualify() {
        assert!(!is_ingredient(&item(json!({
            "requirements": {"level": 50, "classRequirement": "mage"}
        }))));
    }

    #[test]
    fn non_array_skills_do_not_qualify() {
        assert!(!is_ingredient(&item(json!({"requirements": {"skills": "cooking"}}))));
    }

    #[test]
    fn empty_consumable_only_ids_still_qualifies() {
        assert!(is_ingredient(&item(json!({"consumableOnlyIDs": {}}))));
    }

    #[test]
    fn empty_position_modifiers_still_qualify() {
        assert!(is_ingredient(&item(json!({"ingredientPositionModifiers": {}}))));
    }

    #[test]
    fn non_object_consumable_only_ids_flag_qualifies() {
        assert!(is_ingredient(&item(json!({"consumableOnlyIDs": true}))));
        assert!(is_ingredient(&item(json!({"consumableOnlyIDs": []}))));
    }

    #[test]
    fn array_position_modifiers_qualify() {
        assert!(is_ingredient(&item(json!({"ingredientPositionModifiers": []}))));
        assert!(is_ingredient(&item(json!({"ingredientPositionModifiers": [1, 0]}))));
    }

    #[test]
    fn falsy_signals_do_not_qualify() {
        assert!(!is_ingredient(&item(json!({"consumableOnlyIDs": false}))));
        assert!(!is_ingredient(&item(json!({"consumableOnlyIDs": null}))));
        assert!(!is_ingredient(&item(json!({"ingredientPositionModifiers": 0}))));
        assert!(!is_ingredient(&item(json!({"ingredientPositionModifiers": ""}))));
    }

    #[test]
    fn weapon_with_identifications_only_is_excluded() {
        assert!(!is_ingredient(&item(json!({
            "name": "Bob's Mythic Bow",
            "tier": "mythic",
            "identifications": {"rawDexterity": 15},
            "requirements": {"level": 100}
        }))));
    }
}
