//! Per-condition scoring of a single keyword against one record field.

use crate::condition::Condition;
use crate::record::{FieldValue, Record};

/// A weight that actually awards points. Unset and zero weights are
/// equivalent: neither is awarded nor counted as a match.
fn active(weight: Option<f64>) -> Option<f64> {
    weight.filter(|weight| *weight != 0.0)
}

/// Derive the effective search key for a prefix-gated condition.
///
/// The keyword must start with the prefix and carry a non-empty remainder,
/// otherwise the condition is ineligible. A parenthesized-alias keyword like
/// `":Foo(bar)"` searches for the text between the last `(` and the final
/// `)`; otherwise the prefix is stripped.
fn effective_key<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    if !key.starts_with(prefix) || key.len() == prefix.len() {
        return None;
    }
    if key.ends_with(')')
        && let Some(open) = key.rfind('(')
    {
        return Some(&key[open + 1..key.len() - 1]);
    }
    Some(&key[prefix.len()..])
}

/// Exact-or-substring match for one scalar value. Exact wins; the two
/// bonuses are mutually exclusive.
fn scalar_score(condition: &Condition, key: &str, value: &str) -> f64 {
    let normalized = value.trim().to_lowercase();
    if let Some(weight) = active(condition.equal)
        && normalized == key
    {
        return weight;
    }
    if let Some(weight) = active(condition.include)
        && normalized.contains(key)
    {
        return weight;
    }
    0.0
}

/// Score every element independently, then halve the total unless every
/// element matched. Full coverage outranks a partial match of equal weight.
fn list_score(condition: &Condition, key: &str, items: &[String]) -> f64 {
    let mut score = 0.0;
    let mut matched = 0usize;
    for item in items {
        let item_score = scalar_score(condition, key, item);
        if item_score != 0.0 {
            score += item_score;
            matched += 1;
        }
    }
    if matched < items.len() {
        score /= 2.0;
    }
    score
}

/// Score one (condition, keyword, record) triple.
///
/// Returns 0 when the field is absent, the keyword fails the prefix gate,
/// the declared shape does not match the field value, or nothing matched.
pub(crate) fn condition_score<R>(condition: &Condition, key: &str, record: &R) -> f64
where
    R: Record + ?Sized,
{
    let Some(source) = record.field(&condition.name) else {
        return 0.0;
    };

    let mut search_key = key;
    if let Some(prefix) = condition.prefix.as_deref().filter(|prefix| !prefix.is_empty()) {
        match effective_key(key, prefix) {
            Some(stripped) => search_key = stripped,
            None => return 0.0,
        }
    }

    match (condition.array, &*source) {
        (false, FieldValue::Text(value)) => scalar_score(condition, search_key, value),
        (false, FieldValue::Number(value)) => {
            scalar_score(condition, search_key, &value.to_string())
        }
        (true, FieldValue::List(items)) => list_score(condition, search_key, items),
        (array, value) => {
            tracing::debug!(
                field = %condition.name,
                array,
                list = matches!(value, FieldValue::List(_)),
                "condition shape does not match field value, treating as no-match"
            );
            0.0
        }
    }
}
