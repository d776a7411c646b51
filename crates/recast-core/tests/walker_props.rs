//! Property tests for the schema walker.
//!
//! Lenient conversion is a normalization: applying it twice must give the
//! same result as applying it once, for any input shape.

use proptest::prelude::*;
use serde_json::Value;

use recast_core::{convert, Coercion, TypeDesc};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Number(i.into())),
        // Mix of numeric-looking, boolean-looking, and arbitrary strings.
        prop_oneof![
            "-?[0-9]{1,6}",
            "[0-9]{1,4}\\.[0-9]{1,4}",
            Just("yes".to_string()),
            Just("off".to_string()),
            Just("maybe".to_string()),
            "[a-z]{0,8}",
        ]
        .prop_map(Value::String),
    ]
}

fn target() -> impl Strategy<Value = TypeDesc> {
    prop_oneof![
        Just(TypeDesc::int()),
        Just(TypeDesc::float()),
        Just(TypeDesc::str()),
        Just(TypeDesc::bool()),
        Just(TypeDesc::optional(TypeDesc::int())),
        Just(TypeDesc::union(vec![
            TypeDesc::int(),
            TypeDesc::str(),
            TypeDesc::bool(),
        ])),
    ]
}

proptest! {
    #[test]
    fn lenient_conversion_is_a_fixpoint(
        items in proptest::collection::vec(scalar(), 0..8),
        ty in target(),
    ) {
        let seq = TypeDesc::sequence(ty);
        let input = Value::Array(items);
        let once = convert(input, &seq, "root", Coercion::Lenient).unwrap();
        let twice = convert(once.clone(), &seq, "root", Coercion::Lenient).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn strict_success_is_a_fixpoint(
        items in proptest::collection::vec(scalar(), 0..8),
    ) {
        let seq = TypeDesc::sequence(TypeDesc::str());
        let input = Value::Array(items);
        if let Ok(once) = convert(input, &seq, "root", Coercion::Strict) {
            let twice = convert(once.clone(), &seq, "root", Coercion::Strict).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
