/// Value model and codec tests: decoding, encoding, kinds and typed access.
use djson_core::{
    decode, decode_str, encode, encode_pretty, encode_with, DjsonError, EncodeStyle, Kind, Map,
    Value,
};

fn encoded(value: &Value) -> String {
    String::from_utf8(encode(value)).unwrap()
}

// ============================================================================
// Decode
// ============================================================================

#[test]
fn decode_every_kind() {
    let doc = decode(br#"{"n":null,"b":false,"num":-2.5,"s":"hi","arr":[],"obj":{}}"#).unwrap();
    let kinds: Vec<Kind> = doc.as_object().values().map(Value::kind).collect();
    assert_eq!(
        kinds,
        [
            Kind::Null,
            Kind::Bool,
            Kind::Number,
            Kind::String,
            Kind::Array,
            Kind::Object
        ]
    );
}

#[test]
fn decode_integers_become_f64() {
    let doc = decode_str("[0, -7, 18446744073709551615]").unwrap();
    assert_eq!(doc.as_array()[1].as_f64(), -7.0);
    assert_eq!(doc.as_array()[2].as_f64(), u64::MAX as f64);
}

#[test]
fn decode_scalar_roots() {
    assert_eq!(decode_str("null").unwrap(), Value::Null);
    assert_eq!(decode_str("true").unwrap(), Value::Bool(true));
    assert_eq!(decode_str("3.25").unwrap(), Value::Number(3.25));
    assert_eq!(decode_str(r#""s""#).unwrap(), Value::from("s"));
}

#[test]
fn decode_malformed_input_fails() {
    for bad in ["", "{", r#"{"a":}"#, "[1,2,]", "nul", r#"{"a":1} trailing"#] {
        match decode_str(bad) {
            Err(DjsonError::Decode(_)) => {}
            other => panic!("{bad:?}: expected Decode error, got {other:?}"),
        }
    }
}

#[test]
fn decode_error_carries_position() {
    let err = decode_str("{\n  \"a\": tru}").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("JSON decode error:"), "{msg}");
    assert!(msg.contains("line 2 column"), "{msg}");
}

#[test]
fn decode_invalid_utf8_fails() {
    assert!(matches!(decode(b"\"\xff\""), Err(DjsonError::Decode(_))));
}

// ============================================================================
// Encode
// ============================================================================

#[test]
fn encode_is_compact_and_keeps_key_order() {
    let doc = decode_str(r#"{ "b" : 1 , "a" : [ true , null ] }"#).unwrap();
    assert_eq!(encoded(&doc), r#"{"b":1,"a":[true,null]}"#);
}

#[test]
fn encode_escapes_strings() {
    let doc = Value::from("line1\n\"quoted\"");
    assert_eq!(encoded(&doc), r#""line1\n\"quoted\"""#);
}

#[test]
fn encode_with_pretty_style() {
    let doc = decode_str(r#"{"a":1}"#).unwrap();
    let out = String::from_utf8(encode_with(&doc, EncodeStyle::Pretty)).unwrap();
    assert_eq!(out, "{\n  \"a\": 1\n}");
    assert_eq!(EncodeStyle::default(), EncodeStyle::Compact);
}

#[test]
fn display_matches_encode() {
    let doc = decode_str(r#"{"x":[1.5,"y"]}"#).unwrap();
    assert_eq!(doc.to_string(), encoded(&doc));
    let pretty = String::from_utf8(encode_pretty(&doc)).unwrap();
    assert_eq!(format!("{doc:#}"), pretty);
}

#[test]
fn encode_reflects_mutation() {
    let mut doc = decode_str(r#"{"user":{"name":"Ann","tags":["a","b"]}}"#).unwrap();
    doc.set_path("user.name", "Bea").unwrap();
    doc.delete_path("user.tags.0").unwrap();
    assert_eq!(encoded(&doc), r#"{"user":{"name":"Bea","tags":["b"]}}"#);
}

// ============================================================================
// Typed access
// ============================================================================

#[test]
fn sentinel_accessors_match_kind() {
    let doc = decode_str(r#"{"s":"x","n":2,"b":true,"a":[1],"o":{"k":null}}"#).unwrap();
    assert_eq!(doc.get_path("s").unwrap().as_str(), "x");
    assert_eq!(doc.get_path("n").unwrap().as_f64(), 2.0);
    assert!(doc.get_path("b").unwrap().as_bool());
    assert_eq!(doc.get_path("a").unwrap().as_array().len(), 1);
    assert!(doc.get_path("o").unwrap().as_object().contains_key("k"));
}

#[test]
fn sentinel_accessors_return_zero_values_on_mismatch() {
    let s = Value::from("x");
    assert_eq!(s.as_f64(), 0.0);
    assert!(!s.as_bool());
    assert!(s.as_array().is_empty());
    assert!(s.as_object().is_empty());
    assert_eq!(Value::from(1).as_str(), "");
}

#[test]
fn strict_accessors_return_none_on_mismatch() {
    let n = Value::from(0);
    assert_eq!(n.try_f64(), Some(0.0));
    assert_eq!(n.try_str(), None);
    assert_eq!(n.try_bool(), None);
    assert!(n.try_array().is_none());
    assert!(n.try_object().is_none());
    // A real zero and a sentinel zero are only distinguishable through kind().
    assert_eq!(Value::Null.as_f64(), n.as_f64());
    assert_ne!(Value::Null.kind(), n.kind());
}

#[test]
fn kind_names() {
    assert_eq!(Kind::Object.to_string(), "object");
    assert!(Kind::Array.is_container());
    assert!(!Kind::String.is_container());
}

// ============================================================================
// Construction and interop
// ============================================================================

#[test]
fn build_document_by_value() {
    let mut map = Map::new();
    map.insert("name", Value::from("Ann"));
    map.insert("ids", [1, 2].into_iter().map(Value::from).collect());
    let doc = Value::from(map);
    assert_eq!(encoded(&doc), r#"{"name":"Ann","ids":[1,2]}"#);
}

#[test]
fn object_equality_ignores_member_order() {
    assert_eq!(
        decode_str(r#"{"a":1,"b":2}"#).unwrap(),
        decode_str(r#"{"b":2,"a":1}"#).unwrap()
    );
}

#[test]
fn serde_json_interop() {
    let sj: serde_json::Value = serde_json::from_str(r#"{"a":[1,2.5,null]}"#).unwrap();
    let doc = Value::from(sj.clone());
    assert_eq!(doc.get_path("a.1").unwrap().as_f64(), 2.5);
    let back: serde_json::Value = doc.into();
    assert_eq!(back, sj);
}
