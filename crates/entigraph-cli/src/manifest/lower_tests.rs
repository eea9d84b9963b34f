use entigraph_compiler::{Export, compile_schema};
use entigraph_core::sdl;
use indoc::indoc;
use serde_json::json;

use super::lower::Lowered;
use super::{Manifest, ManifestError, lower};

fn lower_text(text: &str) -> Lowered {
    let manifest = Manifest::parse(text).unwrap();
    lower(&manifest).unwrap()
}

fn compile_text(text: &str) -> String {
    let lowered = lower_text(text);
    match compile_schema(&lowered.catalog, &lowered.namespaces) {
        Ok(schema) => schema.sdl(&sdl::Config::new()),
        Err(err) => format!("error: {err}"),
    }
}

const BLOG: &str = indoc! {r#"
    {
      "scalars": { "DateTime": { "description": "ISO-8601" } },
      "enums": {
        "Status": {
          "values": { "DRAFT": 0, "PUBLISHED": 1, "0": "DRAFT" },
          "descriptions": { "DRAFT": "Hidden" }
        }
      },
      "unions": {
        "SearchResult": { "members": ["User", "Post"], "discriminator": "kind" }
      },
      "namespaces": [
        {
          "Query": {
            "fields": {
              "post": { "type": "Post", "args": { "fields": { "id": "ID!" } } },
              "search": { "type": "[SearchResult!]!", "args": "SearchArgs" }
            }
          },
          "Post": {
            "description": "A blog post",
            "fields": {
              "title": "String!",
              "status": "Status",
              "created": { "type": "DateTime", "deprecated": "use published" },
              "author": "User"
            }
          },
          "version": "1.0"
        },
        {
          "User": {
            "fields": {
              "name": { "type": "String", "comment": "Display name", "rename": "display_name" },
              "posts": "[Post]"
            }
          },
          "SearchArgs": {
            "fields": {
              "term": { "type": "String!", "default": "" },
              "author": "User"
            }
          },
          "_Draft": { "fields": {} }
        }
      ]
    }
"#};

#[test]
fn blog_manifest() {
    insta::assert_snapshot!(compile_text(BLOG), @r#"
    type Query {
      post(id: ID!): Post
      search(term: String! = "", author: UserInput): [SearchResult!]!
    }

    "A blog post"
    type Post {
      title: String!
      status: Status
      created: DateTime @deprecated(reason: "use published")
      author: User
    }

    type User {
      "Display name"
      name: String
      posts: [Post]
    }

    union SearchResult = User | Post

    enum Status {
      "Hidden"
      DRAFT
      PUBLISHED
    }

    "ISO-8601"
    scalar DateTime

    input UserInput {
      "Display name"
      display_name: String
      posts: [PostInput]
    }

    "A blog post"
    input PostInput {
      title: String!
      status: Status
      created: DateTime @deprecated(reason: "use published")
      author: UserInput
    }
    "#);
}

#[test]
fn non_entity_exports_are_values() {
    let lowered = lower_text(BLOG);

    assert_eq!(lowered.namespaces.len(), 2);
    assert_eq!(
        lowered.namespaces[0].get("version"),
        Some(&Export::Value(json!("1.0")))
    );
    assert!(matches!(
        lowered.namespaces[1].get("_Draft"),
        Some(Export::Decl(_))
    ));
}

#[test]
fn union_discriminator_picks_member() {
    let lowered = lower_text(BLOG);
    let schema = compile_schema(&lowered.catalog, &lowered.namespaces).unwrap();
    let registry = schema.registry();
    let union = registry
        .union(registry.lookup("SearchResult").unwrap())
        .unwrap();

    assert_eq!(
        union.resolve_type(&json!({ "kind": "Post", "title": "Hi" })),
        registry.lookup("Post")
    );
    assert_eq!(union.resolve_type(&json!({ "kind": "Comment" })), None);
    assert_eq!(union.resolve_type(&json!({ "kind": 1 })), None);
}

#[test]
fn declared_name_overrides_key() {
    let sdl = compile_text(indoc! {r#"
        {
          "namespaces": [
            {
              "Query": { "fields": { "me": "User" } },
              "UserV2": { "name": "User", "fields": { "id": "ID!" } }
            }
          ]
        }
    "#});

    insta::assert_snapshot!(sdl, @r"
    type Query {
      me: User
    }

    type User {
      id: ID!
    }
    ");
}

#[test]
fn inline_types() {
    let sdl = compile_text(indoc! {r#"
        {
          "namespaces": [
            {
              "Query": {
                "fields": {
                  "stats": { "type": { "fields": { "count": "Int!" } } },
                  "meta": {
                    "type": { "name": "Meta", "description": "Extra", "fields": { "key": "String" } }
                  }
                }
              }
            }
          ]
        }
    "#});

    insta::assert_snapshot!(sdl, @r#"
    type Query {
      stats: stats_0
      meta: Meta
    }

    type stats_0 {
      count: Int!
    }

    "Extra"
    type Meta {
      key: String
    }
    "#);
}

#[test]
fn field_without_type_fails_to_compile() {
    let output = compile_text(indoc! {r#"
        { "namespaces": [{ "Query": { "fields": { "x": { "comment": "?" } } } }] }
    "#});
    insta::assert_snapshot!(output, @"error: missing type reference on: Query::x");
}

#[test]
fn unknown_union_member() {
    let manifest = Manifest::parse(indoc! {r#"
        {
          "unions": { "Feed": { "members": ["Post", "Ghost"], "discriminator": "kind" } },
          "namespaces": [{ "Post": { "fields": { "id": "ID" } } }]
        }
    "#})
    .unwrap();
    let err = lower(&manifest).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"union `Feed` has unknown member `Ghost`");
}

#[test]
fn bad_type_expression() {
    let manifest =
        Manifest::parse(r#"{ "namespaces": [{ "Query": { "fields": { "x": "[Int" } } }] }"#)
            .unwrap();
    let err = lower(&manifest).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"invalid type expression `[Int`: unclosed `[`");
}

#[test]
fn malformed_json() {
    assert!(matches!(
        Manifest::parse(r#"{ "namespaces": {} }"#),
        Err(ManifestError::Json(_))
    ));
    assert!(matches!(
        Manifest::parse(r#"{ "types": [] }"#),
        Err(ManifestError::Json(_))
    ));
}

#[test]
fn load_reads_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");
    std::fs::write(&path, r#"{ "namespaces": [] }"#).unwrap();

    let manifest = Manifest::load(&path).unwrap();
    assert!(manifest.namespaces.is_empty());

    let missing = Manifest::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, ManifestError::Io { .. }));
}
