//! Tests for the object shape.

use ridge_format::semantic::{AttributeValue, Node, SemanticFormatter, format_styles};
use ridge_format::{FormatError, Value};
use ridge_html::{ParseOptions, parse_document};
use serde_json::json;

/// Helper to parse into the semantic shape
fn parse(html: &str) -> Result<Vec<Node>, FormatError> {
    parse_document(html, &ParseOptions::default(), &SemanticFormatter)
}

fn to_json(html: &str) -> serde_json::Value {
    serde_json::to_value(parse(html).unwrap()).unwrap()
}

#[test]
fn test_capitalized_types_and_lowercase_tags() {
    assert_eq!(
        to_json("<P>x<!--y--></P>"),
        json!([{
            "type": "Element",
            "tagName": "p",
            "attributes": {},
            "children": [
                {"type": "Text", "content": "x"},
                {"type": "Comment", "content": "y"}
            ]
        }])
    );
}

#[test]
fn test_class_list() {
    assert_eq!(
        to_json("<div class='section  widget'></div>")[0]["attributes"],
        json!({"className": ["section", "widget"]})
    );
}

#[test]
fn test_boolean_attribute_uses_key() {
    assert_eq!(
        to_json("<input disabled>")[0]["attributes"],
        json!({"disabled": "disabled"})
    );
}

#[test]
fn test_style_object() {
    assert_eq!(
        to_json("<div style='color: #000; height: 80px; z-index: 2'></div>")[0]["attributes"],
        json!({"style": {"color": "#000", "height": "80px", "zIndex": 2}})
    );
}

#[test]
fn test_style_properties_are_camel_cased() {
    let style = format_styles(
        "background-color: #fff;border-right: 1px solid #000;border-top-left-radius: 4px",
    );
    let keys: Vec<&str> = style.keys().map(String::as_str).collect();
    assert_eq!(keys, ["backgroundColor", "borderRight", "borderTopLeftRadius"]);
    assert_eq!(style.get("borderRight"), Some(&Value::from("1px solid #000")));
}

#[test]
fn test_dataset() {
    assert_eq!(
        to_json("<div data-num=0 data-word='poop' data-cake='2'></div>")[0]["attributes"],
        json!({"dataset": {"num": 0, "word": "poop", "cake": 2}})
    );
}

#[test]
fn test_dataset_keys_are_camel_cased() {
    let nodes = parse("<b data-user-id='7'></b>").unwrap();
    let Node::Element(element) = &nodes[0] else {
        panic!("Expected element");
    };
    let Some(AttributeValue::Dataset(dataset)) = element.attributes.get("dataset") else {
        panic!("Expected dataset");
    };
    assert_eq!(dataset.get("userId"), Some(&Value::Number(7.0)));
}

#[test]
fn test_other_keys_are_camel_cased_and_cast() {
    assert_eq!(
        to_json("<td col-span=2 aria-label='1 of 2'></td>")[0]["attributes"],
        json!({"colSpan": 2, "ariaLabel": "1 of 2"})
    );
}

#[test]
fn test_attribute_order_is_kept() {
    let nodes = parse("<a z=1 class=b data-x=1 a=2 z=3></a>").unwrap();
    let Node::Element(element) = &nodes[0] else {
        panic!("Expected element");
    };
    let keys: Vec<&str> = element.attributes.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "className", "dataset", "a"]);

    let json = serde_json::to_string(&element.attributes).unwrap();
    assert_eq!(json, r#"{"z":3,"className":["b"],"dataset":{"x":1},"a":2}"#);
}

#[test]
fn test_empty_attribute_name_is_an_error() {
    let error = parse("<div =\"x\"></div>").unwrap_err();
    assert_eq!(
        error,
        FormatError::EmptyAttributeName {
            tag: "div".to_string(),
            raw: "=\"x\"".to_string(),
        }
    );
    assert_eq!(
        error.to_string(),
        "attribute `=\"x\"` on <div> has an empty name"
    );
}

#[test]
fn test_error_in_nested_element_propagates() {
    assert!(parse("<ul><li =1>x</li></ul>").is_err());
}
