use flatmatter_core::document::{DropReason, LineOutcome};
use flatmatter_core::functions::{FnEntry, FunctionError, FunctionRegistry, str_arg};
use flatmatter_core::pipeline::StepOutcome;
use flatmatter_core::{FlatMatter, ParseOptions, ToJson, parse};
use insta::assert_snapshot;
use serde_json::{Value, json};

fn blog_functions() -> FunctionRegistry {
    FunctionRegistry::new()
        .with(FnEntry::new("to-upper", |args: &[Value]| {
            Ok(Value::String(str_arg(args, 0)?.to_uppercase()))
        }))
        .with(FnEntry::new("slugify", |args: &[Value]| {
            Ok(Value::String(str_arg(args, 0)?.to_lowercase().replace(' ', "-")))
        }))
        .with(FnEntry::new("split", |args: &[Value]| {
            let text = str_arg(args, 0)?;
            let sep = str_arg(args, 1)?;
            Ok(Value::Array(text.split(sep).map(|s| Value::String(s.to_string())).collect()))
        }))
        .with(FnEntry::new("concat", |args: &[Value]| {
            let parts = (0..args.len()).map(|i| str_arg(args, i)).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::String(parts.concat()))
        }))
}

#[test]
fn blog_post_document() {
    let input = include_str!("fixtures/blog_post.md");
    let doc = FlatMatter::parse_with(input, &blog_functions(), ParseOptions::strict()).unwrap();

    assert_eq!(doc.content(), Some("Welcome!\n\nThis is the body."));
    assert_snapshot!(doc.serialize(&ToJson::pretty()).unwrap(), @r#"
    {
      "title": "Hello, world: a first post",
      "slug": "hello-world",
      "draft": false,
      "rating": 4.5,
      "views": 1200,
      "meta": {
        "author": {
          "name": "ADA"
        }
      },
      "tags": [
        "rust",
        "parsing",
        "config"
      ],
      "summary": "short summary",
      "content": "Welcome!\n\nThis is the body."
    }
    "#);
}

#[test]
fn blog_post_reports_skipped_step() {
    let input = include_str!("fixtures/blog_post.md");
    let doc = FlatMatter::parse_with(input, &blog_functions(), ParseOptions::default()).unwrap();

    let summary = doc
        .lines()
        .iter()
        .find_map(|line| match &line.outcome {
            LineOutcome::Recorded { key, steps } if key == "summary" => Some(steps.clone()),
            _ => None,
        })
        .unwrap();

    assert_eq!(
        summary,
        vec![
            StepOutcome::Resolved { identifier: "concat".into(), value: json!("short summary") },
            StepOutcome::Skipped { identifier: "missing-fn".into() },
        ]
    );
}

#[test]
fn json_output_matches_reference_encoding() {
    let doc = FlatMatter::parse("a: true\nb: false\nc: 1\nd: 12.5\nf: \"some string\"").unwrap();
    assert_eq!(
        doc.serialize(&ToJson::new()).unwrap(),
        r#"{"a":true,"b":false,"c":1,"d":12.5,"f":"some string"}"#
    );
}

#[test]
fn document_without_markers_has_no_content() {
    let matter = parse("a: 1\nb: \"two\"", &FunctionRegistry::new()).unwrap();
    assert_eq!(Value::Object(matter), json!({"a": 1, "b": "two"}));
}

#[test]
fn text_before_first_marker_is_config() {
    let matter = parse("a: 1\n---\nb: 2\n---\nbody", &FunctionRegistry::new()).unwrap();
    assert_eq!(Value::Object(matter), json!({"a": 1, "b": 2, "content": "body"}));
}

#[test]
fn malformed_quotes_drop_the_line() {
    let doc = FlatMatter::parse("a: \"unterminated\nb: 2").unwrap();
    assert_eq!(Value::Object(doc.matter().clone()), json!({"b": 2}));
    assert_eq!(doc.lines()[0].outcome, LineOutcome::Dropped { reason: DropReason::UnresolvedValue });
}

#[test]
fn function_error_reaches_caller() {
    let functions = FunctionRegistry::new().with(FnEntry::new("need-two", |args: &[Value]| {
        if args.len() != 2 {
            return Err(FunctionError::Arity { expected: 2, found: args.len() });
        }
        Ok(Value::Null)
    }));

    let err = parse("---\nx: (need-two 1)\n---", &functions).unwrap_err();
    assert_eq!(err.line(), 1);
    assert_eq!(err.to_string(), "line 1: function 'need-two' failed: expected 2 argument(s), got 1");
}
