//! Front-matter extraction for Markdown sources.
//!
//! Two block styles are recognized at the very top of a document:
//!
//! ```text
//! ---                      +++
//! title: Heat              title = "Heat"
//! order: 3                 order = 3
//! actors:                  actors = ["Al Pacino"]
//!   - Al Pacino            +++
//! ---
//! ```
//!
//! The `---` style uses a small line grammar (`key: value`, block lists,
//! scalars from [`value`]); the `+++` style is parsed as TOML. Everything after
//! the closing delimiter is the body, which this module ignores.

mod error;
mod value;

pub use error::FrontMatterError;
pub use value::parse_scalar;

use serde_json::{Map, Value as JsonValue};

/// Insertion-ordered metadata mapping.
pub type JsonMap = Map<String, JsonValue>;

const YAML_DELIMITER: &str = "---";
const TOML_DELIMITER: &str = "+++";

/// A detected front-matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Yaml,
    Toml,
}

impl BlockKind {
    fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => YAML_DELIMITER,
            Self::Toml => TOML_DELIMITER,
        }
    }
}

/// Extract the front-matter mapping of a document.
///
/// Returns `Ok(None)` when the document does not start with a delimiter line.
pub fn extract(content: &str) -> Result<Option<JsonMap>, FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().enumerate().map(|(i, l)| (i + 1, l));

    let kind = match lines.next() {
        Some((_, first)) if first.trim_end() == YAML_DELIMITER => BlockKind::Yaml,
        Some((_, first)) if first.trim_end() == TOML_DELIMITER => BlockKind::Toml,
        _ => return Ok(None),
    };

    let mut block = Vec::new();
    let mut closed = false;
    for (line_no, line) in lines {
        if line.trim_end() == kind.delimiter() {
            closed = true;
            break;
        }
        block.push((line_no, line));
    }
    if !closed {
        return Err(FrontMatterError::Unterminated(kind.delimiter()));
    }

    let map = match kind {
        BlockKind::Yaml => parse_yaml_like(&block)?,
        BlockKind::Toml => parse_toml(&block)?,
    };
    Ok(Some(map))
}

/// Like [`extract`], but absent front-matter is an error.
pub fn extract_required(content: &str) -> Result<JsonMap, FrontMatterError> {
    extract(content)?.ok_or(FrontMatterError::Missing)
}

/// A `key:` with no inline value, collecting the list items that follow it.
struct PendingList {
    key: String,
    /// Indentation of the first item; every later item must match it.
    indent: Option<usize>,
    items: Vec<JsonValue>,
}

/// Parse `key: value` lines, with `- item` lines forming block lists.
///
/// Keys live at column zero. The only indented lines accepted are the items
/// of a block list, all at one indentation. Nested mappings, nested lists
/// and block scalars (`|`, `>`) are rejected rather than flattened.
fn parse_yaml_like(lines: &[(usize, &str)]) -> Result<JsonMap, FrontMatterError> {
    let mut map = JsonMap::new();
    let mut pending: Option<PendingList> = None;

    for &(line_no, raw) in lines {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let indent = raw.len() - raw.trim_start().len();

        if let Some(item) = list_item(line) {
            let Some(list) = pending.as_mut() else {
                return Err(FrontMatterError::OrphanListItem {
                    line: line_no,
                    text: line.to_string(),
                });
            };
            if *list.indent.get_or_insert(indent) != indent || is_nested_item(item) {
                return Err(FrontMatterError::UnsupportedNesting {
                    line: line_no,
                    text: line.to_string(),
                });
            }
            list.items.push(parse_scalar(item));
            continue;
        }

        if indent > 0 {
            return Err(FrontMatterError::UnsupportedNesting {
                line: line_no,
                text: line.to_string(),
            });
        }

        flush_pending(&mut map, pending.take());

        let Some((key, value)) = line.split_once(':') else {
            return Err(FrontMatterError::MalformedLine {
                line: line_no,
                text: line.to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(FrontMatterError::EmptyKey { line: line_no });
        }
        if map.contains_key(key) {
            return Err(FrontMatterError::DuplicateKey {
                line: line_no,
                key: key.to_string(),
            });
        }

        let value = value.trim();
        if is_block_scalar(value) {
            return Err(FrontMatterError::BlockScalar {
                line: line_no,
                key: key.to_string(),
            });
        }

        if value.is_empty() {
            pending = Some(PendingList {
                key: key.to_string(),
                indent: None,
                items: Vec::new(),
            });
        } else {
            map.insert(key.to_string(), parse_scalar(value));
        }
    }

    flush_pending(&mut map, pending);
    Ok(map)
}

/// `|`, `>` and their chomping/indentation variants such as `>-` or `|2`.
fn is_block_scalar(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some('|' | '>'))
        && chars.all(|c| c == '+' || c == '-' || c.is_ascii_digit())
}

/// An unquoted list item that YAML would read as a mapping or a list.
fn is_nested_item(item: &str) -> bool {
    if item.starts_with('"') || item.starts_with('\'') {
        return false;
    }
    list_item(item).is_some() || item.ends_with(':') || item.contains(": ")
}

/// Store a pending `key:`: a list if items followed it, `null` otherwise.
fn flush_pending(map: &mut JsonMap, pending: Option<PendingList>) {
    if let Some(list) = pending {
        let value = if list.items.is_empty() {
            JsonValue::Null
        } else {
            JsonValue::Array(list.items)
        };
        map.insert(list.key, value);
    }
}

fn list_item(line: &str) -> Option<&str> {
    if line == "-" {
        return Some("");
    }
    line.strip_prefix("- ")
}

fn parse_toml(lines: &[(usize, &str)]) -> Result<JsonMap, FrontMatterError> {
    let text: String = lines.iter().map(|(_, l)| format!("{l}\n")).collect();
    let table: toml::Table = toml::from_str(&text)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

fn toml_to_json(value: toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s),
        toml::Value::Integer(i) => JsonValue::from(i),
        toml::Value::Float(f) => {
            serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
        }
        toml::Value::Boolean(b) => JsonValue::Bool(b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(items) => {
            JsonValue::Array(items.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
