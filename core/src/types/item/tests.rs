use super::*;
use serde_json::json;

#[test]
fn item_key_trims() {
    let key = ItemKey::try_from(" tt0372784 ").unwrap();
    assert_eq!(key.as_str(), "tt0372784");
}

#[test]
fn item_key_rejects_empty_string() {
    ItemKey::try_from("").unwrap_err();
}

#[test]
fn item_key_rejects_whitespace_string() {
    ItemKey::try_from("   ").unwrap_err();
}

#[test]
fn item_key_rejects_too_long_string() {
    let long_string = "k".repeat(MAX_ITEM_KEY_LENGTH + 1);
    ItemKey::try_from(long_string.as_str()).unwrap_err();
}

#[test]
fn item_exposes_suggestion_fields() {
    let item = Item::new(ItemKey::try_from("he").unwrap(), "Helium", "He")
        .with_tags(["noble gas".to_string()]);

    assert_eq!(Suggestion::key(&item), "he");
    assert_eq!(item.primary_label(), "Helium");
    assert_eq!(item.secondary_label(), "He");
    assert_eq!(Suggestion::tags(&item).to_vec(), vec!["noble gas".to_string()]);
}

#[test]
fn item_deserializes_with_optional_fields_missing() {
    let item: Item = serde_json::from_value(json!({
        "key": "q1",
        "primary_label": "Stay hungry, stay foolish."
    }))
    .unwrap();

    assert_eq!(item.secondary_label, "");
    assert!(item.tags.is_empty());
    assert!(item.detail.is_null());
}
