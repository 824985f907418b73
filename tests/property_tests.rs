//! Property-based tests over generated values.

use proptest::prelude::*;
use serde_luat::{
    contents_to_string_with_options, to_string, to_string_minified, to_string_with_options,
    SerializeOptions, Table, Value,
};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6)
                .prop_map(|items| Value::Table(Table::from_sequence(items))),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|pairs| {
                let table = Table::new();
                for (k, v) in pairs {
                    table.set(k, v);
                }
                Value::Table(table)
            }),
        ]
    })
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Table(t) => 1 + t.entries().iter().map(|(_, v)| depth(v)).max().unwrap_or(0),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn prop_output_is_ascii(value in arb_value()) {
        let out = to_string(&value).unwrap();
        prop_assert!(out.is_ascii());
    }

    #[test]
    fn prop_repeatable(value in arb_value()) {
        prop_assert_eq!(to_string(&value).unwrap(), to_string(&value).unwrap());
        prop_assert_eq!(to_string_minified(&value).unwrap(), to_string_minified(&value).unwrap());
    }

    #[test]
    fn prop_minified_has_no_newlines(value in arb_value()) {
        let out = to_string_minified(&value).unwrap();
        prop_assert!(!out.contains('\n'));
    }

    #[test]
    fn prop_minified_contents_match_wrapped(items in prop::collection::vec(arb_value(), 0..6)) {
        let table = Table::from_sequence(items);
        let options = SerializeOptions::minified();
        let whole = to_string_with_options(&Value::Table(table.clone()), &options).unwrap();
        let body = contents_to_string_with_options(&table, &options).unwrap();
        prop_assert_eq!(format!("{{{}}}", body), whole);
    }

    #[test]
    fn prop_depth_bound_respected(value in arb_value(), max in 1usize..6) {
        let options = SerializeOptions::minified().with_max_depth(max);
        let result = to_string_with_options(&value, &options);
        prop_assert_eq!(result.is_ok(), depth(&value) <= max);
    }

    #[test]
    fn prop_integers_print_plainly(n in any::<i64>()) {
        prop_assert_eq!(to_string(&Value::from(n)).unwrap(), n.to_string());
    }

    #[test]
    fn prop_finite_floats_read_back(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let out = to_string(&Value::from(f)).unwrap();
        let parsed: f64 = out.parse().unwrap();
        prop_assert!(parsed == f);
    }
}
