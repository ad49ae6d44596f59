/// Property-based tests for the codec and the path navigator.
///
/// Uses `proptest` to generate random documents and checks:
/// - `decode(encode(v)) == v` for every generated tree
/// - `set` followed by `get` on the same path yields the new value
/// - deleting an array element compacts the array
/// - `set` on an absent key never changes the key set
/// - descending past a scalar always fails with `LeafNode`
///
/// Numbers are generated as finite `f64`; integral and fractional values are
/// both covered so the integer-formatting path of the encoder is exercised.
use djson_core::{decode, delete, encode, get, set, DjsonError, Map, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,10}").unwrap()
}

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64),
        (-1.0e12f64..1.0e12f64),
        prop::num::f64::NORMAL,
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        arb_number().prop_map(Value::Number),
        "[a-zA-Z0-9 .\\-\"\\\\\n\u{e9}]{0,20}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect::<Map>())),
        ]
    })
}

/// An object-rooted document with a non-empty array under `"list"`.
fn arb_doc_with_list() -> impl Strategy<Value = (Value, usize)> {
    prop::collection::vec(arb_scalar(), 1..12).prop_flat_map(|items| {
        let len = items.len();
        let doc: Value = [("list", Value::Array(items))].into_iter().collect();
        (Just(doc), 0..len)
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn roundtrip(v in arb_value()) {
        let bytes = encode(&v);
        let back = decode(&bytes).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn roundtrip_is_textually_stable(v in arb_value()) {
        let once = encode(&v);
        let twice = encode(&decode(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn set_then_get((doc, i) in arb_doc_with_list(), x in arb_value()) {
        let mut doc = doc;
        let path = format!("list.{i}");
        set(&mut doc, &path, x.clone()).unwrap();
        prop_assert_eq!(get(&doc, &path).unwrap(), &x);
    }

    #[test]
    fn delete_compacts((doc, i) in arb_doc_with_list()) {
        let before = doc.get_path("list").unwrap().as_array().to_vec();
        let mut doc = doc;
        let removed = delete(&mut doc, &format!("list.{i}")).unwrap();
        let after = doc.get_path("list").unwrap().as_array();

        prop_assert_eq!(&removed, &before[i]);
        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert_eq!(&after[..i], &before[..i]);
        prop_assert_eq!(&after[i..], &before[i + 1..]);
    }

    #[test]
    fn set_never_inserts(pairs in prop::collection::vec((arb_key(), arb_scalar()), 0..6), x in arb_scalar()) {
        let mut doc: Value = [("inner", Value::Object(pairs.into_iter().collect()))]
            .into_iter()
            .collect();
        let before = doc.clone();
        // Keys are generated without '-', so this one is always absent.
        let result = set(&mut doc, "inner.-absent-", x);
        let not_found = matches!(result, Err(DjsonError::KeyNotFound { .. }));
        prop_assert!(not_found, "expected KeyNotFound, got {:?}", result);
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn descending_past_scalar_is_leaf_error(s in arb_scalar(), seg in "[a-z0-9]{1,5}") {
        let doc: Value = [("leaf", s)].into_iter().collect();
        let result = get(&doc, &format!("leaf.{seg}"));
        let leaf = matches!(result, Err(DjsonError::LeafNode { .. }));
        prop_assert!(leaf, "expected LeafNode, got {:?}", result);
    }
}
