//! # Assertion Library / 断言库
//!
//! The two comparison primitives a test unit uses to signal a broken
//! expectation. Both return `Err(AssertionError)` on mismatch, so a unit
//! body simply propagates the failure with `?`.
//!
//! 测试单元用于报告预期被破坏的两个比较原语。
//! 两者在不匹配时都返回 `Err(AssertionError)`，测试体只需用 `?` 传播失败。
//!
//! - `assert_equal` - strict equality, both operands share one static type
//! - `assert_deep_equal` - structural equality over any two `Serialize` values
//!
//! - `assert_equal` - 严格相等，两个操作数必须是同一静态类型
//! - `assert_deep_equal` - 任意两个 `Serialize` 值之间的结构相等

use serde::Serialize;
use serde_json::{Number, Value};
use std::collections::BTreeSet;
use std::fmt::Display;
use thiserror::Error;

/// The failure signalled by an assertion primitive.
/// Carries a human-readable message that the runner prints verbatim.
///
/// 断言原语发出的失败。
/// 携带一条人类可读的消息，运行器会原样打印。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Uses the caller-supplied message when there is one, otherwise builds the default.
fn failure(message: Option<&str>, default: impl FnOnce() -> String) -> AssertionError {
    match message {
        Some(message) => AssertionError::new(message),
        None => AssertionError::new(default()),
    }
}

/// Asserts that `actual` equals `expected` using `PartialEq`.
///
/// Both operands have the same type, so values of different types can never
/// be compared equal: `assert_equal("4", 4, None)` does not compile.
/// On mismatch the error carries `message` verbatim, or
/// `Expected <expected>, got <actual>` with both operands rendered by
/// `Display`, so strings appear without quotes. Collections and structs have
/// no `Display`; compare them with [`assert_deep_equal`].
///
/// 使用 `PartialEq` 断言 `actual` 等于 `expected`。
/// 两个操作数类型相同，因此不同类型的值永远不会被视为相等。
/// 不匹配时，错误携带调用方提供的消息，或默认的
/// `Expected <expected>, got <actual>` 消息。
///
/// # Examples / 示例
/// ```
/// use unit_harness::assert_equal;
///
/// assert!(assert_equal(2 + 2, 4, None).is_ok());
/// let err = assert_equal(2 + 2, 5, None).unwrap_err();
/// assert_eq!(err.message(), "Expected 5, got 4");
///
/// let err = assert_equal("Cheese", "Milk", None).unwrap_err();
/// assert_eq!(err.message(), "Expected Milk, got Cheese");
/// ```
pub fn assert_equal<T>(actual: T, expected: T, message: Option<&str>) -> Result<(), AssertionError>
where
    T: PartialEq + Display,
{
    if actual == expected {
        Ok(())
    } else {
        Err(failure(message, || {
            format!("Expected {}, got {}", expected, actual)
        }))
    }
}

/// Asserts that `actual` and `expected` are structurally equivalent.
///
/// Both operands are converted to a `serde_json::Value` and compared
/// recursively:
/// - sequences must have the same length and equal elements in the same order;
/// - mappings must have the same key set and equal values, key order is irrelevant;
/// - numbers compare by numeric value (`10` equals `10.0`), but a number never
///   equals a string or a bool;
/// - a key mapped to `null` is not the same as a missing key.
///
/// The default failure message names the first differing node and contains
/// both serialized operands. A value that fails to serialize (for example a
/// map with non-string keys) fails the assertion with the serializer error.
///
/// 断言 `actual` 与 `expected` 结构等价。
/// 两个操作数都被转换为 `serde_json::Value` 并递归比较：
/// 序列比较长度和顺序，映射比较键集合而忽略键顺序，
/// 数字按数值比较，`null` 值的键不等同于缺失的键。
pub fn assert_deep_equal<A, E>(
    actual: &A,
    expected: &E,
    message: Option<&str>,
) -> Result<(), AssertionError>
where
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let actual = to_canonical(actual, "actual")?;
    let expected = to_canonical(expected, "expected")?;

    match first_difference(&actual, &expected, "$") {
        None => Ok(()),
        Some(path) => Err(failure(message, || {
            format!(
                "Deep equal failed at {}:\n{}\n!==\n{}",
                path,
                render(&actual),
                render(&expected)
            )
        })),
    }
}

fn to_canonical<T: Serialize + ?Sized>(value: &T, side: &str) -> Result<Value, AssertionError> {
    serde_json::to_value(value).map_err(|e| {
        AssertionError::new(format!(
            "Deep equal failed: cannot serialize {} operand: {}",
            side, e
        ))
    })
}

fn render(value: &Value) -> String {
    // `Value` always serializes; the fallback only guards against a broken writer.
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}

/// Returns the path of the first node where the two values differ, or `None`
/// when they are structurally equal.
///
/// 返回两个值第一个不同节点的路径；结构相等时返回 `None`。
fn first_difference(actual: &Value, expected: &Value, path: &str) -> Option<String> {
    match (actual, expected) {
        (Value::Null, Value::Null) => None,
        (Value::Bool(a), Value::Bool(b)) if a == b => None,
        (Value::Number(a), Value::Number(b)) if numbers_equal(a, b) => None,
        (Value::String(a), Value::String(b)) if a == b => None,
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b)
            .enumerate()
            .find_map(|(i, (x, y))| first_difference(x, y, &format!("{}[{}]", path, i)))
            .or_else(|| (a.len() != b.len()).then(|| path.to_string())),
        (Value::Object(a), Value::Object(b)) => {
            let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();
            keys.into_iter().find_map(|key| {
                let child = format!("{}.{}", path, key);
                match (a.get(key), b.get(key)) {
                    (Some(x), Some(y)) => first_difference(x, y, &child),
                    _ => Some(child),
                }
            })
        }
        _ => Some(path.to_string()),
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
