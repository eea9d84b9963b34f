use std::fs;
use std::path::Path;

use entigraph_core::sdl;
use indoc::indoc;

use super::run_common::{CompileOptions, RunError, compile_manifest};

const DEFAULTS: CompileOptions = CompileOptions {
    private_prefix: '_',
    allow_empty: false,
};

fn write_manifest(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("schema.json");
    fs::write(&path, text).unwrap();
    path
}

const PARTIAL: &str = indoc! {r#"
    {
      "namespaces": [
        {
          "Query": { "fields": { "me": "User", "draft": "Draft" } },
          "User": { "fields": { "id": "ID!" } },
          "$Draft": { "name": "Draft", "fields": { "body": "String" } }
        }
      ]
    }
"#};

#[test]
fn private_entries_leave_empty_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(dir.path(), PARTIAL);
    let options = CompileOptions {
        private_prefix: '$',
        allow_empty: false,
    };

    let err = compile_manifest(&path, options).unwrap_err();
    assert!(matches!(err, RunError::Compile(_)));
    insta::assert_snapshot!(err.to_string(), @"type has no fields: Draft");
}

#[test]
fn private_prefix_and_allow_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(dir.path(), PARTIAL);

    let schema = compile_manifest(&path, DEFAULTS).unwrap();
    insta::assert_snapshot!(schema.sdl(&sdl::Config::new()), @r"
    type Query {
      me: User
      draft: Draft
    }

    type User {
      id: ID!
    }

    type Draft {
      body: String
    }
    ");

    let lenient = CompileOptions {
        private_prefix: '$',
        allow_empty: true,
    };
    let schema = compile_manifest(&path, lenient).unwrap();
    assert!(schema.object("Draft").unwrap().fields.is_empty());
}

#[test]
fn manifest_errors_surface_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(dir.path(), "{ not json");

    let err = compile_manifest(&path, DEFAULTS).unwrap_err();
    assert!(matches!(err, RunError::Manifest(_)));
    assert!(err.to_string().starts_with("invalid manifest: "));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = compile_manifest(&path, DEFAULTS).unwrap_err();
    assert!(err.to_string().starts_with("failed to read '"));
}
