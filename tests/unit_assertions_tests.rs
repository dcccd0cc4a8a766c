//! # Assertions Module Unit Tests / 断言模块单元测试
//!
//! Tests for `assert_equal` and `assert_deep_equal`: success cases, default
//! and caller-supplied failure messages, and structural comparison rules.
//!
//! `assert_equal` 和 `assert_deep_equal` 的测试：成功情况、
//! 默认和调用方提供的失败消息以及结构比较规则。

use serde::Serialize;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use unit_harness::{AssertionError, assert_deep_equal, assert_equal};

fn add(a: i32, b: i32) -> i32 {
    a + b
}

#[cfg(test)]
mod assert_equal_tests {
    use super::*;

    #[test]
    fn test_identical_scalars_pass() {
        assert!(assert_equal(add(2, 2), 4, None).is_ok());
        assert!(assert_equal("milk", "milk", None).is_ok());
        assert!(assert_equal(true, true, None).is_ok());
        assert!(assert_equal('x', 'x', None).is_ok());
        assert!(assert_equal(2.5_f64, 2.5, None).is_ok());
    }

    #[test]
    fn test_mismatch_uses_default_message() {
        let err = assert_equal(add(2, 2), 5, None).unwrap_err();
        assert_eq!(err.message(), "Expected 5, got 4");
        assert_eq!(err.to_string(), "Expected 5, got 4");
    }

    #[test]
    fn test_mismatch_uses_caller_message_verbatim() {
        let err = assert_equal(add(2, 2), 5, Some("2 + 2 should be 5")).unwrap_err();
        assert_eq!(err, AssertionError::new("2 + 2 should be 5"));
    }

    #[test]
    fn test_caller_message_is_ignored_on_success() {
        assert!(assert_equal(1, 1, Some("never shown")).is_ok());
    }

    #[test]
    fn test_string_default_message_shows_bare_operands() {
        let err = assert_equal("Cheese", "Milk", None).unwrap_err();
        assert_eq!(err.message(), "Expected Milk, got Cheese");

        let err = assert_equal("Cheese".to_string(), "Milk".to_string(), None).unwrap_err();
        assert_eq!(err.message(), "Expected Milk, got Cheese");
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        assert!(assert_equal(f64::NAN, f64::NAN, None).is_err());
    }

    #[test]
    fn test_default_message_renders_scalars_plainly() {
        let err = assert_equal(true, false, None).unwrap_err();
        assert_eq!(err.message(), "Expected false, got true");
        let err = assert_equal(10.5_f64, 10.0, None).unwrap_err();
        assert_eq!(err.message(), "Expected 10, got 10.5");
    }

    #[test]
    fn test_assertion_error_propagates_into_anyhow() {
        fn body() -> anyhow::Result<()> {
            assert_equal(1, 2, Some("one is not two"))?;
            Ok(())
        }
        let err = body().unwrap_err();
        assert_eq!(err.to_string(), "one is not two");
        assert!(err.downcast_ref::<AssertionError>().is_some());
    }
}

#[cfg(test)]
mod assert_deep_equal_tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        name: &'static str,
        price: u32,
    }

    #[test]
    fn test_identical_structures_pass() {
        let value = json!({ "a": [1, 2, { "b": null }], "c": "d" });
        assert!(assert_deep_equal(&value, &value.clone(), None).is_ok());
    }

    #[test]
    fn test_key_order_is_irrelevant() {
        let mut forward = HashMap::new();
        forward.insert("id", json!("1"));
        forward.insert("name", json!("Milk"));
        let mut backward = BTreeMap::new();
        backward.insert("name", json!("Milk"));
        backward.insert("id", json!("1"));
        assert!(assert_deep_equal(&forward, &backward, None).is_ok());
        assert!(assert_deep_equal(&json!({"x": 1, "y": 2}), &json!({"y": 2, "x": 1}), None).is_ok());
    }

    #[test]
    fn test_sequence_order_is_significant() {
        let err = assert_deep_equal(&[1, 2], &[2, 1], None).unwrap_err();
        assert!(err.message().starts_with("Deep equal failed at $[0]:"));
    }

    #[test]
    fn test_struct_compares_against_literal() {
        let rows = vec![
            Row { id: "1", name: "Milk", price: 10 },
            Row { id: "2", name: "Cheese", price: 20 },
        ];
        let expected = json!([
            { "id": "1", "name": "Milk", "price": 10 },
            { "id": "2", "name": "Cheese", "price": 20 }
        ]);
        assert!(assert_deep_equal(&rows, &expected, None).is_ok());
    }

    #[test]
    fn test_nested_leaf_difference_fails_with_path_and_both_forms() {
        let actual = json!([{ "id": "1", "price": 10 }, { "id": "2", "price": 21 }]);
        let expected = json!([{ "id": "1", "price": 10 }, { "id": "2", "price": 20 }]);
        let err = assert_deep_equal(&actual, &expected, None).unwrap_err();
        assert_eq!(
            err.message(),
            "Deep equal failed at $[1].price:\n\
             [{\"id\":\"1\",\"price\":10},{\"id\":\"2\",\"price\":21}]\n\
             !==\n\
             [{\"id\":\"1\",\"price\":10},{\"id\":\"2\",\"price\":20}]"
        );
    }

    #[test]
    fn test_caller_message_replaces_default() {
        let err = assert_deep_equal(&json!([1]), &json!([2]), Some("Golden output should match expected"))
            .unwrap_err();
        assert_eq!(err.message(), "Golden output should match expected");
    }

    #[test]
    fn test_string_never_equals_number() {
        assert!(assert_deep_equal(&"4", &4, None).is_err());
        assert!(assert_deep_equal(&json!({"id": "1"}), &json!({"id": 1}), None).is_err());
    }

    #[test]
    fn test_bool_never_equals_number() {
        assert!(assert_deep_equal(&true, &1, None).is_err());
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(assert_deep_equal(&10_u8, &10.0_f64, None).is_ok());
        assert!(assert_deep_equal(&-3_i64, &-3_i32, None).is_ok());
        assert!(assert_deep_equal(&10, &10.5, None).is_err());
    }

    #[test]
    fn test_null_value_is_not_a_missing_key() {
        let err = assert_deep_equal(&json!({ "a": 1, "b": null }), &json!({ "a": 1 }), None)
            .unwrap_err();
        assert!(err.message().starts_with("Deep equal failed at $.b:"));
    }

    #[test]
    fn test_skipped_optional_field_equals_missing_key() {
        #[derive(Serialize)]
        struct Sparse {
            a: u8,
            #[serde(skip_serializing_if = "Option::is_none")]
            b: Option<u8>,
        }
        assert!(assert_deep_equal(&Sparse { a: 1, b: None }, &json!({ "a": 1 }), None).is_ok());
    }

    #[test]
    fn test_length_mismatch_fails() {
        let err = assert_deep_equal(&vec![1, 2], &vec![1, 2, 3], None).unwrap_err();
        assert!(err.message().starts_with("Deep equal failed at $:"));
    }

    #[test]
    fn test_unserializable_operand_fails() {
        let mut map = HashMap::new();
        map.insert(vec![1_u8], 1);
        let err = assert_deep_equal(&map, &json!({}), Some("ignored")).unwrap_err();
        assert!(err
            .message()
            .starts_with("Deep equal failed: cannot serialize actual operand:"));
    }
}
