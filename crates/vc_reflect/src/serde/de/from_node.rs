use alloc::string::String;

use vc_json::Value;

// -----------------------------------------------------------------------------
// FromNode

/// Best-effort conversion of a single tree node into a field value.
///
/// `None` means the node has the wrong kind or value, the caller then
/// leaves its target untouched.
pub(super) trait FromNode: Sized {
    fn from_node(node: &Value) -> Option<Self>;
}

impl FromNode for f32 {
    #[inline]
    fn from_node(node: &Value) -> Option<Self> {
        node.as_f64().map(|number| number as f32)
    }
}

/// Only numbers holding an exact `i32` are accepted, `7.0` included and `7.5` refused.
impl FromNode for i32 {
    fn from_node(node: &Value) -> Option<Self> {
        if let Some(number) = node.as_i64() {
            return i32::try_from(number).ok();
        }
        let number = node.as_f64()?;
        let truncated = number as i32;
        (f64::from(truncated) == number).then_some(truncated)
    }
}

/// Booleans, or numbers where zero is `false`.
impl FromNode for bool {
    fn from_node(node: &Value) -> Option<Self> {
        match node {
            Value::Bool(value) => Some(*value),
            Value::Number(number) => number.as_f64().map(|number| number != 0.0),
            _ => None,
        }
    }
}

impl FromNode for String {
    #[inline]
    fn from_node(node: &Value) -> Option<Self> {
        node.as_str().map(String::from)
    }
}

/// Overwrites `target` when `node` converts, returns whether it did.
#[inline]
pub(super) fn parse_into<T: FromNode>(node: &Value, target: &mut T) -> bool {
    match T::from_node(node) {
        Some(value) => {
            *target = value;
            true
        }
        None => false,
    }
}
