use std::fs;
use std::path::Path;

use serde_json::{Value as JsonValue, json};
use tempfile::TempDir;

use super::*;
use crate::frontmatter::FrontMatterError;

fn make_collection() -> (TempDir, Collection) {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("movies");
    fs::create_dir_all(&source).unwrap();
    let collection = Collection::new("movies", source, temp.path().join("movies.json"));
    (temp, collection)
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn ids(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.id().and_then(JsonValue::as_str).unwrap().to_string())
        .collect()
}

#[test]
fn test_sorts_by_order() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "a.md", "---\norder: 2\ntitle: Beta\n---\n");
    write(&collection.source, "b.md", "---\norder: 1\ntitle: Alpha\n---\n");

    let entries = collect(&collection).unwrap();
    assert_eq!(ids(&entries), vec!["b.md", "a.md"]);
}

#[test]
fn test_equal_order_sorts_by_title() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "1.md", "---\norder: 5\ntitle: Zeta\n---\n");
    write(&collection.source, "2.md", "---\norder: 5\ntitle: Alpha\n---\n");

    let entries = collect(&collection).unwrap();
    assert_eq!(ids(&entries), vec!["2.md", "1.md"]);
}

#[test]
fn test_only_markdown_files_are_indexed() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "heat.md", "---\norder: 1\ntitle: Heat\n---\n");
    write(&collection.source, "ronin.md", "---\norder: 2\ntitle: Ronin\n---\n");
    write(&collection.source, "cover.png", "not an image");
    write(&collection.source, "README.MD", "---\norder: 0\ntitle: Readme\n---\n");
    write(&collection.source, "notes.txt", "---\norder: 0\ntitle: Notes\n---\n");
    fs::create_dir_all(collection.source.join("drafts.md")).unwrap();
    fs::create_dir_all(collection.source.join("nested")).unwrap();
    write(&collection.source.join("nested"), "deep.md", "---\norder: 0\ntitle: Deep\n---\n");

    let entries = collect(&collection).unwrap();
    assert_eq!(ids(&entries), vec!["heat.md", "ronin.md"]);
}

#[test]
fn test_custom_extension() {
    let (_temp, mut collection) = make_collection();
    collection.extension = "markdown".to_string();
    write(&collection.source, "a.markdown", "---\ntitle: A\n---\n");
    write(&collection.source, "b.md", "---\ntitle: B\n---\n");

    let entries = collect(&collection).unwrap();
    assert_eq!(ids(&entries), vec!["a.markdown"]);
}

#[test]
fn test_metadata_id_overrides_file_name() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "heat.md", "---\nid: heat-1995\ntitle: Heat\n---\n");
    write(&collection.source, "ronin.md", "---\ntitle: Ronin\n---\n");

    let entries = collect(&collection).unwrap();
    assert_eq!(ids(&entries), vec!["heat-1995", "ronin.md"]);
}

#[test]
fn test_extra_fields_preserved() {
    let (_temp, collection) = make_collection();
    write(
        &collection.source,
        "heat.md",
        "---\norder: 1\ntitle: Heat\nposter: /posters/heat.jpg\nyear: 1995\nactors:\n  - Al Pacino\n  - Robert De Niro\n---\n\nA body that is ignored.\n",
    );

    let entries = collect(&collection).unwrap();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.get("poster"), Some(&json!("/posters/heat.jpg")));
    assert_eq!(entry.get("year"), Some(&json!(1995)));
    assert_eq!(
        entry.get("actors"),
        Some(&json!(["Al Pacino", "Robert De Niro"]))
    );
}

#[test]
fn test_run_writes_pretty_json() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "b.md", "---\norder: 1\ntitle: Alpha\n---\nbody\n");

    let report = run(&collection).unwrap();
    assert_eq!(report.entries, 1);
    assert_eq!(report.output, collection.output);

    let written = fs::read_to_string(&collection.output).unwrap();
    let expected = "[\n  {\n    \"id\": \"b.md\",\n    \"order\": 1,\n    \"title\": \"Alpha\"\n  }\n]";
    assert_eq!(written, expected);
}

#[test]
fn test_run_is_idempotent() {
    let (_temp, collection) = make_collection();
    for (name, order, title) in [("c.md", 3, "Gamma"), ("a.md", 1, "Alpha"), ("b.md", 1, "Beta")] {
        write(
            &collection.source,
            name,
            &format!("---\norder: {order}\ntitle: {title}\ntags: [x, y]\n---\n"),
        );
    }

    run(&collection).unwrap();
    let first = fs::read(&collection.output).unwrap();
    run(&collection).unwrap();
    let second = fs::read(&collection.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_run_overwrites_previous_artifact() {
    let (_temp, collection) = make_collection();
    fs::write(&collection.output, "stale").unwrap();
    write(&collection.source, "a.md", "---\ntitle: A\n---\n");

    run(&collection).unwrap();
    let written: JsonValue =
        serde_json::from_str(&fs::read_to_string(&collection.output).unwrap()).unwrap();
    assert_eq!(written, json!([{"id": "a.md", "title": "A"}]));
}

#[test]
fn test_empty_directory_writes_empty_array() {
    let (_temp, collection) = make_collection();
    run(&collection).unwrap();
    assert_eq!(fs::read_to_string(&collection.output).unwrap(), "[]");
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    let collection = Collection::new(
        "movies",
        temp.path().join("missing"),
        temp.path().join("movies.json"),
    );

    let err = run(&collection).unwrap_err();
    assert!(matches!(err, IndexError::ReadDir(..)));
    assert!(!collection.output.exists());
}

#[test]
fn test_malformed_front_matter_aborts_without_writing() {
    let (_temp, collection) = make_collection();
    fs::write(&collection.output, "previous").unwrap();
    write(&collection.source, "a.md", "---\ntitle: Fine\n---\n");
    write(&collection.source, "b.md", "---\ntitle: Broken\nno colon here\n---\n");

    let err = run(&collection).unwrap_err();
    match err {
        IndexError::FrontMatter { path, source } => {
            assert!(path.ends_with("b.md"));
            assert!(matches!(source, FrontMatterError::MalformedLine { line: 3, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_to_string(&collection.output).unwrap(), "previous");
}

#[test]
fn test_nested_front_matter_aborts_without_writing() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "a.md", "---\ntitle: Fine\n---\n");
    write(
        &collection.source,
        "heat.md",
        "---\ntitle: Heat\ndirector:\n  name: Michael Mann\n  born: 1943\n---\n",
    );
    write(
        &collection.source,
        "ronin.md",
        "---\ntitle: Ronin\nsummary: >\n  A crew of thieves: one last job\n---\n",
    );

    let err = run(&collection).unwrap_err();
    match err {
        IndexError::FrontMatter { path, source } => {
            assert!(path.ends_with("heat.md"));
            assert!(matches!(
                source,
                FrontMatterError::UnsupportedNesting { line: 4, .. }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!collection.output.exists());

    fs::remove_file(collection.source.join("heat.md")).unwrap();
    let err = run(&collection).unwrap_err();
    assert!(matches!(
        err,
        IndexError::FrontMatter {
            source: FrontMatterError::BlockScalar { line: 3, .. },
            ..
        }
    ));
    assert!(!collection.output.exists());
}

#[test]
fn test_missing_front_matter_required() {
    let (_temp, collection) = make_collection();
    write(&collection.source, "plain.md", "# Just a heading\n");

    let err = collect(&collection).unwrap_err();
    assert!(matches!(
        err,
        IndexError::FrontMatter {
            source: FrontMatterError::Missing,
            ..
        }
    ));
}

#[test]
fn test_missing_front_matter_lenient() {
    let (_temp, mut collection) = make_collection();
    collection.require_front_matter = false;
    write(&collection.source, "plain.md", "# Just a heading\n");

    let entries = collect(&collection).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].fields().len(), 1);
    assert_eq!(entries[0].id(), Some(&json!("plain.md")));
}

#[test]
fn test_persist_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("public/data/movies.json");
    persist(&path, "[]").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_enumerate_is_sorted() {
    let (_temp, collection) = make_collection();
    for name in ["c.md", "a.md", "b.png"] {
        write(&collection.source, name, "");
    }

    let names: Vec<String> = enumerate(&collection.source)
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["a.md", "b.png", "c.md"]);
}
