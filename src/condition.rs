//! Declarative field-matching rules and validated condition sets.

use crate::error::ConditionError;
use crate::record::Record;
use crate::score;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single field-matching rule.
///
/// A keyword matching the named field earns the `equal` weight on an exact
/// match, or the `include` weight on a substring match; exact wins and the
/// two are mutually exclusive. An unset or zero weight is never awarded and
/// never counts as a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Field on the candidate record this rule inspects.
    pub name: String,

    /// Weight awarded for an exact match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<f64>,

    /// Weight awarded for a substring match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<f64>,

    /// Whether the field holds an ordered sequence of strings.
    #[serde(default)]
    pub array: bool,

    /// Literal prefix a keyword must carry to be eligible for this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl Condition {
    /// Rule over a scalar (text or numeric) field.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            equal: None,
            include: None,
            array: false,
            prefix: None,
        }
    }

    /// Rule over a string-list field.
    pub fn array(name: impl Into<String>) -> Self {
        Self {
            array: true,
            ..Self::field(name)
        }
    }

    /// Weight awarded when the field equals the keyword exactly.
    #[must_use]
    pub fn equal(mut self, weight: f64) -> Self {
        self.equal = Some(weight);
        self
    }

    /// Weight awarded when the field contains the keyword.
    #[must_use]
    pub fn include(mut self, weight: f64) -> Self {
        self.include = Some(weight);
        self
    }

    /// Keyword prefix gating this rule (e.g. `"@"` for author searches).
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Whether any configured weight can actually award points.
    fn awards(&self) -> bool {
        self.equal.is_some_and(|weight| weight != 0.0)
            || self.include.is_some_and(|weight| weight != 0.0)
    }
}

/// On-disk shape of a condition file.
#[derive(Debug, Deserialize)]
struct ConditionFile {
    conditions: Vec<Condition>,
}

/// A validated, ordered collection of [`Condition`]s.
///
/// Construction rejects empty field names and negative or non-finite
/// weights, so every score computed through a set is finite and
/// non-negative. Condition tables are caller configuration; nothing here is
/// process-wide.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    /// Validate and normalize a list of conditions.
    pub fn new(mut conditions: Vec<Condition>) -> Result<Self, ConditionError> {
        for condition in &mut conditions {
            if condition.name.is_empty() {
                return Err(ConditionError::EmptyName);
            }
            for weight in [condition.equal, condition.include].into_iter().flatten() {
                if !weight.is_finite() {
                    return Err(ConditionError::NonFiniteWeight {
                        name: condition.name.clone(),
                    });
                }
                if weight < 0.0 {
                    return Err(ConditionError::NegativeWeight {
                        name: condition.name.clone(),
                    });
                }
            }
            // An empty prefix is no prefix at all.
            if condition.prefix.as_deref() == Some("") {
                condition.prefix = None;
            }
            if !condition.awards() {
                tracing::warn!(
                    field = %condition.name,
                    "condition declares no effective weight and will never score"
                );
            }
        }
        Ok(Self { conditions })
    }

    /// Parse a TOML condition table (`[[conditions]]` entries).
    pub fn from_toml(input: &str) -> Result<Self, ConditionError> {
        let file: ConditionFile = toml::from_str(input)?;
        Self::new(file.conditions)
    }

    /// Parse a JSON condition document (`{"conditions": [...]}`).
    pub fn from_json(input: &str) -> Result<Self, ConditionError> {
        let file: ConditionFile = serde_json::from_str(input)?;
        Self::new(file.conditions)
    }

    /// Load a condition file, dispatching on the `.toml` / `.json` extension.
    pub fn from_path(path: &Path) -> Result<Self, ConditionError> {
        let input = std::fs::read_to_string(path)?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Self::from_toml(&input),
            Some("json") => Self::from_json(&input),
            other => Err(ConditionError::UnsupportedFormat {
                extension: other.unwrap_or_default().to_owned(),
            }),
        }
    }

    /// The conditions in evaluation order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Score a record against search keywords using this set.
    ///
    /// Convenience over [`match_score`](crate::match_score).
    pub fn score<R, K>(&self, record: &R, keys: &[K]) -> f64
    where
        R: Record + ?Sized,
        K: AsRef<str>,
    {
        score::match_score(&self.conditions, record, keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn builder_produces_expected_shape() {
        let condition = Condition::array("keywords").equal(50.0).include(10.0);
        check!(condition.name == "keywords");
        check!(condition.equal == Some(50.0));
        check!(condition.include == Some(10.0));
        check!(condition.array);
        check!(condition.prefix.is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = ConditionSet::new(vec![Condition::field("").equal(1.0)]);
        let_assert!(Err(ConditionError::EmptyName) = result);
    }

    #[test]
    fn negative_weight_is_rejected() {
        let result = ConditionSet::new(vec![Condition::field("name").include(-1.0)]);
        let_assert!(Err(ConditionError::NegativeWeight { name }) = result);
        check!(name == "name");
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let result = ConditionSet::new(vec![Condition::field("name").equal(f64::NAN)]);
        let_assert!(Err(ConditionError::NonFiniteWeight { .. }) = result);
    }

    #[test]
    fn empty_prefix_is_normalized_away() {
        let set = ConditionSet::new(vec![Condition::field("name").equal(1.0).prefix("")]).unwrap();
        check!(set.conditions()[0].prefix.is_none());
    }

    #[test]
    fn weightless_condition_is_legal() {
        // Contributes zero regardless of match outcome, but is not an error.
        let set = ConditionSet::new(vec![Condition::field("name")]).unwrap();
        check!(set.conditions().len() == 1);
    }
}
