use ahash::AHashMap;
use anyhow::Context;
use clap::Parser;
use search_score::cli::Cli;
use search_score::{Condition, ConditionSet, FieldValue};

/// Built-in condition table for package/extension metadata records.
///
/// Callers with different record shapes supply their own table through
/// `--conditions`.
fn default_conditions() -> ConditionSet {
    ConditionSet::new(vec![
        Condition::field("name").equal(100.0).include(50.0),
        Condition::field("displayName").equal(100.0).include(50.0),
        Condition::field("description").include(25.0),
        Condition::array("keywords").equal(50.0).include(10.0),
        Condition::field("type").equal(100.0).prefix(":"),
        Condition::field("author").equal(100.0).prefix("@"),
        Condition::field("publisher").equal(100.0).prefix("@"),
        Condition::field("homepage").include(25.0),
    ])
    .expect("built-in condition table is valid")
}

fn main() -> anyhow::Result<()> {
    search_score::tracing::init();

    let cli = Cli::parse();

    let conditions = match &cli.conditions {
        Some(path) => ConditionSet::from_path(path)
            .with_context(|| format!("failed to load conditions from {}", path.display()))?,
        None => default_conditions(),
    };

    let input = std::fs::read_to_string(&cli.records)
        .with_context(|| format!("failed to read records from {}", cli.records.display()))?;
    let objects: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&input).context("records file must be a JSON array of objects")?;

    // Splitting free text into keywords is this caller's job; the scorer
    // consumes the already-split terms as-is.
    let keys: Vec<String> = cli.query.split_whitespace().map(str::to_lowercase).collect();

    let mut ranked: Vec<(f64, String)> = objects
        .iter()
        .map(|object| {
            let record: AHashMap<String, FieldValue> = object
                .iter()
                .filter_map(|(name, value)| {
                    FieldValue::from_json(value).map(|value| (name.clone(), value))
                })
                .collect();
            let name = object
                .get("name")
                .and_then(|value| value.as_str())
                .unwrap_or("<unnamed>");
            (conditions.score(&record, &keys), name.to_owned())
        })
        .filter(|(score, _)| *score > 0.0)
        .collect();

    // Highest score first.
    ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    tracing::info!("scored {} records, {} matched", objects.len(), ranked.len());

    for (score, name) in ranked.into_iter().take(cli.limit) {
        println!("{score:.1}\t{name}");
    }

    Ok(())
}
