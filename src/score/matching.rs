//! Multi-keyword score combination.

use super::condition::condition_score;
use crate::condition::Condition;
use crate::record::Record;

/// Score a candidate record against search keywords.
///
/// Every keyword is evaluated against every condition in order; non-zero
/// contributions are summed and counted. If the number of contributing
/// (keyword, condition) pairs differs from the number of supplied keywords,
/// the total is halved: a full-strength result requires exactly one
/// contributing pair per keyword. The comparison is over pair count, not
/// over how many distinct keywords matched, so a keyword matching several
/// conditions can offset one that matched none.
///
/// Empty keywords are skipped during evaluation but still count toward the
/// penalty comparison.
///
/// The returned score is comparative only: non-negative for non-negative
/// weights, unbounded above, and never NaN.
///
/// # Examples
///
/// ```
/// use search_score::{match_score, Condition, FieldValue};
/// use std::collections::HashMap;
///
/// let conditions = [Condition::field("name").equal(100.0).include(50.0)];
/// let record: HashMap<String, FieldValue> =
///     [("name".to_owned(), FieldValue::Text("Test".to_owned()))].into();
///
/// assert_eq!(match_score(&conditions, &record, &["test"]), 100.0);
/// ```
pub fn match_score<R, K>(conditions: &[Condition], record: &R, keys: &[K]) -> f64
where
    R: Record + ?Sized,
    K: AsRef<str>,
{
    let mut score = 0.0;
    let mut match_count = 0usize;

    for key in keys {
        let key = key.as_ref();
        if key.is_empty() {
            continue;
        }
        for condition in conditions {
            let contribution = condition_score(condition, key, record);
            if contribution != 0.0 {
                match_count += 1;
                score += contribution;
            }
        }
    }

    if match_count != keys.len() {
        score /= 2.0;
    }
    score
}
