//! Tests for the cell shape.

use ridge_format::cell::{CellFormatter, CellOptions, RootCell, RootOptions, format_attributes};
use ridge_html::{ParseOptions, parse_document};
use serde_json::json;

fn parse_with(html: &str, options: CellOptions) -> RootCell {
    match parse_document(html, &ParseOptions::default(), &CellFormatter::new(options)) {
        Ok(root) => root,
        Err(never) => match never {},
    }
}

fn to_json(html: &str, options: CellOptions) -> serde_json::Value {
    serde_json::to_value(parse_with(html, options)).unwrap()
}

fn trimmed() -> CellOptions {
    CellOptions {
        trim: true,
        ..CellOptions::default()
    }
}

#[test]
fn test_format_attributes_keeps_raw_keys() {
    let raw: Vec<String> = ["foo=\"bar\"", "disabled", "cake='man'"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let attributes = format_attributes(&raw);
    assert_eq!(
        serde_json::to_value(&attributes).unwrap(),
        json!({"foo": "bar", "disabled": null, "cake": "man"})
    );
}

#[test]
fn test_empty_input_builds_root_cell() {
    assert_eq!(
        to_json("", CellOptions::default()),
        json!({
            "$type": "div",
            "class": "cell-root",
            "$cell": true,
            "$components": []
        })
    );
}

#[test]
fn test_hello_world() {
    assert_eq!(
        to_json("<div><h1>    Hello, World    </h1></div>", CellOptions::default()),
        json!({
            "$type": "div",
            "class": "cell-root",
            "$cell": true,
            "$components": [{
                "$type": "div",
                "$components": [{"$type": "h1", "$html": "    Hello, World    "}]
            }]
        })
    );
}

#[test]
fn test_trim_strips_text() {
    let root = parse_with("<div><h1>    Hello, World    </h1></div>", trimmed());
    assert_eq!(root.components[0].components[0].html.as_deref(), Some("Hello, World"));
}

#[test]
fn test_trim_drops_newline_runs() {
    let html = "
    <div>
      <h1>
          Hello, World
      </h1>
    </div>
  ";
    assert_eq!(
        to_json(html, trimmed()),
        json!({
            "$type": "div",
            "class": "cell-root",
            "$cell": true,
            "$components": [{
                "$type": "div",
                "$components": [{"$type": "h1", "$html": "Hello, World"}]
            }]
        })
    );
}

#[test]
fn test_tag_case() {
    let html = "<foo><Bar>Custom Tags</Bar></foo>";
    let lowered = parse_with(html, CellOptions::default());
    assert_eq!(lowered.components[0].components[0].cell_type, "bar");

    let kept = parse_with(
        html,
        CellOptions {
            lower_case_tag: false,
            ..CellOptions::default()
        },
    );
    assert_eq!(kept.components[0].cell_type, "foo");
    assert_eq!(kept.components[0].components[0].cell_type, "Bar");
}

#[test]
fn test_mixed_attributes() {
    let html = r#"<div id="test-cell" _items="[1,2,3,4]" ><p>Mixed Attributes</p></div>"#;
    assert_eq!(
        to_json(html, CellOptions::default())["$components"][0],
        json!({
            "$type": "div",
            "id": "test-cell",
            "_items": "[1,2,3,4]",
            "$components": [{"$type": "p", "$html": "Mixed Attributes"}]
        })
    );
}

#[test]
fn test_unclosed_tags() {
    assert_eq!(
        to_json("<div><p>Unclosed Tag</div>", CellOptions::default())["$components"],
        json!([{
            "$type": "div",
            "$components": [{"$type": "p", "$html": "Unclosed Tag"}]
        }])
    );
}

#[test]
fn test_root_override() {
    let options = CellOptions {
        root: RootOptions {
            cell_type: "html".to_string(),
            class: "html-root".to_string(),
            active: false,
        },
        ..CellOptions::default()
    };
    let json = to_json("<div><p>Root Override</div>", options);
    assert_eq!(json["$type"], "html");
    assert_eq!(json["class"], "html-root");
    assert_eq!(json["$cell"], false);
    assert_eq!(json["$components"][0]["$components"][0]["$html"], "Root Override");
}

#[test]
fn test_key_order() {
    let root = parse_with("top<a href=x>go</a>", CellOptions::default());
    assert_eq!(
        serde_json::to_string(&root).unwrap(),
        r#"{"$type":"div","class":"cell-root","$cell":true,"$html":"top","$components":[{"$type":"a","href":"x","$html":"go"}]}"#
    );
}
