//! `raw JSON -> Item` mappers, one per source.
//!
//! Records missing the fields needed for a key or a label are skipped; only a
//! payload of the wrong overall shape is an error.

use crate::error::LookupError;
use crate::types::{Item, ItemKey};
use serde_json::Value;

fn str_field<'a>(record: &'a Value, name: &str) -> Option<&'a str> {
    record
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn str_list(record: &Value, name: &str) -> Vec<String> {
    record
        .get(name)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn item_key(raw: impl Into<String>) -> Option<ItemKey> {
    ItemKey::try_new(raw.into()).ok()
}

fn expect_array<'a>(body: &'a Value, source: &str) -> Result<&'a Vec<Value>, LookupError> {
    body.as_array()
        .ok_or_else(|| LookupError::Parse(format!("{source}: expected a JSON array")))
}

/// OMDb `?s=` search. `"Response": "False"` (no match, bad key, too many
/// results) is an empty result.
pub fn omdb(body: &Value) -> Result<Vec<Item>, LookupError> {
    if str_field(body, "Response") == Some("False") {
        return Ok(Vec::new());
    }

    let records = body
        .get("Search")
        .and_then(Value::as_array)
        .ok_or_else(|| LookupError::Parse("omdb: missing Search array".to_string()))?;

    Ok(records
        .iter()
        .filter_map(|record| {
            let key = item_key(str_field(record, "imdbID")?)?;
            let title = str_field(record, "Title")?;
            let year = str_field(record, "Year").unwrap_or_default();
            let kind = str_field(record, "Type");
            let secondary = match kind {
                Some(kind) if !year.is_empty() => format!("{year} ({kind})"),
                Some(kind) => kind.to_string(),
                None => year.to_string(),
            };
            Some(
                Item::new(key, title, secondary)
                    .with_tags(kind.map(str::to_string))
                    .with_detail(record.clone()),
            )
        })
        .collect())
}

/// Hipolabs university directory. Keyed by first domain, falling back to name.
pub fn universities(body: &Value) -> Result<Vec<Item>, LookupError> {
    let records = expect_array(body, "universities")?;

    Ok(records
        .iter()
        .filter_map(|record| {
            let name = str_field(record, "name")?;
            let domains = str_list(record, "domains");
            let key = item_key(domains.first().map(String::as_str).unwrap_or(name))?;
            let country = str_field(record, "country").unwrap_or_default();
            let mut tags = domains;
            tags.extend(str_field(record, "alpha_two_code").map(str::to_string));
            Some(
                Item::new(key, name, country)
                    .with_tags(tags)
                    .with_detail(record.clone()),
            )
        })
        .collect())
}

/// Google Books volumes. A response without `items` has no matches.
pub fn google_books(body: &Value) -> Result<Vec<Item>, LookupError> {
    if !body.is_object() {
        return Err(LookupError::Parse("books: expected a JSON object".to_string()));
    }
    let Some(records) = body.get("items").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(records
        .iter()
        .filter_map(|record| {
            let key = item_key(str_field(record, "id")?)?;
            let info = record.get("volumeInfo")?;
            let title = str_field(info, "title")?;
            let authors = str_list(info, "authors").join(", ");
            Some(
                Item::new(key, title, authors)
                    .with_tags(str_list(info, "categories"))
                    .with_detail(record.clone()),
            )
        })
        .collect())
}

/// GBIF species suggest. `key` is numeric upstream.
pub fn gbif(body: &Value) -> Result<Vec<Item>, LookupError> {
    let records = expect_array(body, "gbif")?;

    Ok(records
        .iter()
        .filter_map(|record| {
            let key = item_key(scalar_string(record.get("key")?)?)?;
            let name = str_field(record, "scientificName")?;
            let rank = str_field(record, "rank").unwrap_or_default().to_lowercase();
            let tags = ["kingdom", "canonicalName"]
                .into_iter()
                .filter_map(|field| str_field(record, field).map(str::to_string));
            Some(
                Item::new(key, name, rank)
                    .with_tags(tags)
                    .with_detail(record.clone()),
            )
        })
        .collect())
}

/// PoetryDB title search. A `{"status": 404}` object means no matches.
pub fn poetry(body: &Value) -> Result<Vec<Item>, LookupError> {
    if body.get("status").is_some() {
        return Ok(Vec::new());
    }
    let records = expect_array(body, "poetry")?;

    Ok(records
        .iter()
        .filter_map(|record| {
            let title = str_field(record, "title")?;
            let author = str_field(record, "author").unwrap_or_default();
            let key = item_key(format!("{author}/{title}"))?;
            Some(Item::new(key, title, author).with_detail(record.clone()))
        })
        .collect())
}

/// Quote pool. Keyed by `id`/`_id` when present, otherwise by position.
pub fn quotes(body: &Value) -> Result<Vec<Item>, LookupError> {
    let records = expect_array(body, "quotes")?;

    Ok(records
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let text = ["quote", "text", "content"]
                .into_iter()
                .find_map(|field| str_field(record, field))?;
            let author = str_field(record, "author").unwrap_or("Unknown");
            let key = ["id", "_id"]
                .into_iter()
                .find_map(|field| record.get(field).and_then(scalar_string))
                .unwrap_or_else(|| format!("quote-{position}"));
            Some(
                Item::new(item_key(key)?, text, author)
                    .with_tags(str_list(record, "tags"))
                    .with_detail(record.clone()),
            )
        })
        .collect())
}

/// Periodic table pool, keyed by symbol.
pub fn elements(body: &Value) -> Result<Vec<Item>, LookupError> {
    let records = match body.get("elements") {
        Some(nested) => expect_array(nested, "elements")?,
        None => expect_array(body, "elements")?,
    };

    Ok(records
        .iter()
        .filter_map(|record| {
            let symbol = str_field(record, "symbol")?;
            let name = str_field(record, "name")?;
            let number = record.get("number").and_then(scalar_string);
            let secondary = match &number {
                Some(number) => format!("{number} {symbol}"),
                None => symbol.to_string(),
            };
            let tags = str_field(record, "category")
                .map(str::to_string)
                .into_iter()
                .chain(number);
            Some(
                Item::new(item_key(symbol)?, name, secondary)
                    .with_tags(tags)
                    .with_detail(record.clone()),
            )
        })
        .collect())
}

/// A pool file already in [`Item`] shape.
pub fn items(body: &Value) -> Result<Vec<Item>, LookupError> {
    Ok(serde_json::from_value(body.clone())?)
}
