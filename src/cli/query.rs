//! Query command implementation.
//!
//! Runs the indexing pipeline without writing anything and prints the
//! catalog as JSON on stdout. Logs move to stderr so the output can be
//! piped.

use std::slice;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use super::common::ad_hoc_collection;
use crate::cli::args::QueryArgs;
use crate::config::{CatalogConfig, Collection};
use crate::index::{self, CatalogEntry, ID_KEY};
use crate::utils::plural_count;
use crate::{log, logger};

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &CatalogConfig) -> Result<()> {
    logger::set_stderr(true);

    let collection = resolve_collection(args, config)?;
    let entries = index::collect(&collection)
        .with_context(|| format!("failed to query collection `{}`", collection.name))?;

    log!("query"; "{}: found {}", collection.name, plural_count(entries.len(), "item"));

    println!("{}", format_output(&entries, args)?);
    Ok(())
}

fn resolve_collection(args: &QueryArgs, config: &CatalogConfig) -> Result<Collection> {
    if let Some(source) = &args.source.source {
        return ad_hoc_collection(&args.source, source, None);
    }

    match &args.name {
        Some(name) => Ok(config.select(slice::from_ref(name))?[0].clone()),
        None => config
            .collections
            .first()
            .cloned()
            .context("no collections configured"),
    }
}

fn format_output(entries: &[CatalogEntry], args: &QueryArgs) -> Result<String> {
    let output = match &args.fields {
        Some(fields) => filter_fields(entries, fields),
        None => serde_json::to_value(entries)?,
    };

    let formatted = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    Ok(formatted)
}

/// Restrict entries to `id` plus `fields`.
///
/// A requested field an entry lacks is shown as `null`.
fn filter_fields(entries: &[CatalogEntry], fields: &[String]) -> JsonValue {
    let pages = entries
        .iter()
        .map(|entry| {
            let mut obj = Map::new();
            obj.insert(
                ID_KEY.to_string(),
                entry.id().cloned().unwrap_or(JsonValue::Null),
            );
            for field in fields {
                if field == ID_KEY {
                    continue;
                }
                let value = entry.get(field).cloned().unwrap_or(JsonValue::Null);
                obj.insert(field.clone(), value);
            }
            JsonValue::Object(obj)
        })
        .collect();

    JsonValue::Array(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SourceArgs;
    use serde_json::json;

    fn entry(id: &str, meta: JsonValue) -> CatalogEntry {
        match meta {
            JsonValue::Object(map) => CatalogEntry::new(id, map),
            _ => panic!("expected object"),
        }
    }

    fn query_args(fields: Option<Vec<&str>>, compact: bool) -> QueryArgs {
        QueryArgs {
            name: None,
            source: SourceArgs {
                source: None,
                extension: "md".to_string(),
                lenient: false,
            },
            fields: fields.map(|f| f.into_iter().map(ToString::to_string).collect()),
            compact,
        }
    }

    #[test]
    fn test_filter_fields() {
        let entries = vec![
            entry("heat.md", json!({"title": "Heat", "order": 1, "poster": "/p.jpg"})),
            entry("ronin.md", json!({"title": "Ronin"})),
        ];
        let fields = vec!["order".to_string(), "id".to_string()];

        assert_eq!(
            filter_fields(&entries, &fields),
            json!([
                {"id": "heat.md", "order": 1},
                {"id": "ronin.md", "order": null},
            ])
        );
    }

    #[test]
    fn test_format_output_compact() {
        let entries = vec![entry("a.md", json!({"title": "A"}))];
        let output = format_output(&entries, &query_args(None, true)).unwrap();
        assert_eq!(output, r#"[{"id":"a.md","title":"A"}]"#);
    }

    #[test]
    fn test_format_output_pretty_with_fields() {
        let entries = vec![entry("a.md", json!({"title": "A", "order": 2}))];
        let output = format_output(&entries, &query_args(Some(vec!["title"]), false)).unwrap();
        assert_eq!(output, "[\n  {\n    \"id\": \"a.md\",\n    \"title\": \"A\"\n  }\n]");
    }

    #[test]
    fn test_resolve_first_collection_by_default() {
        let config = CatalogConfig::default();
        let collection = resolve_collection(&query_args(None, false), &config).unwrap();
        assert_eq!(collection.name, "movies");
    }
}
