//! Keyword relevance scoring for record collections.
//!
//! Scores how well a candidate record (a package, an extension, any
//! field-addressable object) matches a set of search keywords, driven by a
//! declarative list of field-matching [`Condition`]s. Callers rank or filter
//! a collection by comparing the returned scores: higher is better, and the
//! scale is set entirely by the configured weights.
//!
//! ```
//! use search_score::{Condition, ConditionSet, FieldValue};
//! use std::collections::HashMap;
//!
//! let conditions = ConditionSet::new(vec![
//!     Condition::field("name").equal(100.0).include(50.0),
//!     Condition::array("keywords").equal(50.0).include(10.0),
//!     Condition::field("author").equal(100.0).prefix("@"),
//! ])?;
//!
//! let record: HashMap<String, FieldValue> = [
//!     ("name".to_owned(), FieldValue::Text("http-client".to_owned())),
//!     (
//!         "keywords".to_owned(),
//!         FieldValue::List(vec!["http".to_owned(), "client".to_owned()]),
//!     ),
//!     ("author".to_owned(), FieldValue::Text("alice".to_owned())),
//! ]
//! .into();
//!
//! assert!(conditions.score(&record, &["http"]) > 0.0);
//! assert!(conditions.score(&record, &["@alice"]) > conditions.score(&record, &["bob"]));
//! # Ok::<(), search_score::ConditionError>(())
//! ```

pub mod cli;
mod condition;
mod error;
mod record;
mod score;
pub mod tracing;

pub use condition::{Condition, ConditionSet};
pub use error::ConditionError;
pub use record::{FieldValue, Record};
pub use score::match_score;
