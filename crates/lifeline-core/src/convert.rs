// ── Raw-record normalization ──
//
// Bridges raw backend records into canonical domain shapes. Each entity
// declares a `FieldMap`: an ordered list of source fields per canonical
// field, applied deterministically. Raw fields are kept next to the
// canonical ones, so normalizing twice gives the same record.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::model::Entity;

// ── Mapping tables ─────────────────────────────────────────────────

/// What a canonical field becomes when no source is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Key left unset.
    Absent,
    /// Key set to `""` unless the record already carries it.
    EmptyString,
}

/// One canonical field and the raw fields it may be read from, in priority order.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub target: &'static str,
    pub sources: &'static [&'static str],
    pub fallback: Fallback,
}

impl FieldRule {
    pub const fn optional(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            target,
            sources,
            fallback: Fallback::Absent,
        }
    }

    pub const fn text(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            target,
            sources,
            fallback: Fallback::EmptyString,
        }
    }
}

/// Per-entity normalization table.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    /// Identity sources; the server-assigned `_id` comes first.
    pub id_sources: &'static [&'static str],
    pub rules: &'static [FieldRule],
    /// Use the record's list position when no identity is present.
    pub index_fallback: bool,
    /// Multipart file part → record field holding its stored reference.
    pub uploads: &'static [(&'static str, &'static str)],
}

pub const ID_SOURCES: &[&str] = &["_id", "id"];

// ── Normalization ──────────────────────────────────────────────────

/// Text of a present value: non-empty strings and numbers.
///
/// `null`, `""`, booleans, arrays and objects count as absent.
pub fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_present(record: &Map<String, Value>, sources: &[&str]) -> Option<String> {
    sources
        .iter()
        .find_map(|source| present_text(record.get(*source)))
}

/// Normalize one raw record against a table.
///
/// Non-object input (including `null`) is returned untouched.
pub fn normalize_record(map: &FieldMap, raw: Value, index: Option<usize>) -> Value {
    let Value::Object(mut record) = raw else {
        return raw;
    };

    let id = first_present(&record, map.id_sources).or_else(|| {
        if map.index_fallback {
            index.map(|i| i.to_string())
        } else {
            None
        }
    });
    // A canonical key that already holds a non-text raw value is left as sent.
    if let Some(id) = id {
        record.insert("id".into(), Value::String(id));
    }

    for rule in map.rules {
        match (first_present(&record, rule.sources), rule.fallback) {
            (Some(text), _) => {
                record.insert(rule.target.into(), Value::String(text));
            }
            (None, Fallback::EmptyString) if !record.contains_key(rule.target) => {
                record.insert(rule.target.into(), Value::String(String::new()));
            }
            (None, _) => {}
        }
    }

    Value::Object(record)
}

// ── Typed fields ───────────────────────────────────────────────────

/// Deserialize a canonical text field, reading non-text raw values as `""`.
pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(present_text(Some(&Value::deserialize(de)?)).unwrap_or_default())
}

/// Deserialize an optional canonical field, reading non-text raw values as `None`.
pub(crate) fn lenient_opt_text<'de, D: Deserializer<'de>>(
    de: D,
) -> Result<Option<String>, D::Error> {
    Ok(present_text(Some(&Value::deserialize(de)?)))
}

/// Normalize and convert a raw record into a typed entity.
///
/// Returns `None` for non-object input; never fails otherwise.
pub fn from_raw<E: Entity>(raw: Value, index: Option<usize>) -> Option<E> {
    let normalized = normalize_record(E::FIELDS, raw, index);
    if !normalized.is_object() {
        return None;
    }
    match serde_json::from_value(normalized) {
        Ok(entity) => Some(entity),
        Err(e) => {
            warn!(kind = %E::KIND, error = %e, "record could not be shaped");
            None
        }
    }
}

/// Normalize a list response, skipping records that are not objects.
pub fn from_raw_list<E: Entity>(items: Vec<Value>) -> Vec<E> {
    let total = items.len();
    let entities: Vec<E> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| from_raw(raw, Some(i)))
        .collect();
    if entities.len() < total {
        warn!(
            kind = %E::KIND,
            skipped = total - entities.len(),
            "skipped non-object records in list response"
        );
    }
    entities
}
