use alloc::string::String;
use alloc::vec::Vec;

use serde_json::{Map, Value};

use crate::{Emitter, JsonError};

// -----------------------------------------------------------------------------
// ValueWriter

/// An [`Emitter`] that builds a [`Value`] tree instead of text.
///
/// Useful when the written document is read back in the same process,
/// there is no encode/parse round trip. Floats are widened to `f64`,
/// non-finite values become `null`.
///
/// # Examples
///
/// ```
/// use vc_json::{Emitter, ValueWriter};
///
/// let mut writer = ValueWriter::new();
/// writer.begin_object(None, true);
/// writer.append_i32(Some("count"), 4);
/// writer.end_object();
///
/// let value = writer.finish().unwrap();
/// assert_eq!(value["count"], 4);
/// ```
#[derive(Debug, Default)]
pub struct ValueWriter {
    stack: Vec<(Option<String>, Value)>,
    root: Option<Value>,
}

impl ValueWriter {
    /// Creates an empty writer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    /// Returns the number of currently open scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Finishes writing and returns the tree, [`Value::Null`] if nothing was written.
    pub fn finish(self) -> Result<Value, JsonError> {
        if !self.stack.is_empty() {
            return Err(JsonError::Unbalanced {
                open: self.stack.len(),
            });
        }
        Ok(self.root.unwrap_or(Value::Null))
    }

    fn insert(&mut self, name: Option<&str>, value: Value) {
        match self.stack.last_mut() {
            Some((_, Value::Object(members))) => match name {
                Some(name) => {
                    members.insert(String::from(name), value);
                }
                None => {
                    if crate::debug_checks() {
                        panic!("ValueWriter: unnamed object member");
                    }
                }
            },
            Some((_, Value::Array(items))) => {
                if crate::debug_checks() {
                    assert!(name.is_none(), "ValueWriter: named array element");
                }
                items.push(value);
            }
            Some(_) => unreachable!("ValueWriter: only objects and arrays are scopes"),
            None => {
                if crate::debug_checks() {
                    assert!(self.root.is_none(), "ValueWriter: more than one root value");
                }
                self.root = Some(value);
            }
        }
    }

    fn end_scope(&mut self, is_object: bool) {
        let Some((name, value)) = self.stack.pop() else {
            if crate::debug_checks() {
                panic!("ValueWriter: end of scope without a matching begin");
            }
            return;
        };
        if crate::debug_checks() {
            assert_eq!(value.is_object(), is_object, "ValueWriter: mismatched end of scope");
        }
        self.insert(name.as_deref(), value);
    }
}

impl Emitter for ValueWriter {
    fn begin_object(&mut self, name: Option<&str>, _multiline: bool) {
        self.stack
            .push((name.map(String::from), Value::Object(Map::new())));
    }

    fn end_object(&mut self) {
        self.end_scope(true);
    }

    fn begin_array(&mut self, name: Option<&str>, _multiline: bool) {
        self.stack.push((name.map(String::from), Value::Array(Vec::new())));
    }

    fn end_array(&mut self) {
        self.end_scope(false);
    }

    fn append_f32(&mut self, name: Option<&str>, value: f32) {
        self.insert(name, Value::from(f64::from(value)));
    }

    fn append_i32(&mut self, name: Option<&str>, value: i32) {
        self.insert(name, Value::from(value));
    }

    fn append_bool(&mut self, name: Option<&str>, value: bool) {
        self.insert(name, Value::Bool(value));
    }

    fn append_str(&mut self, name: Option<&str>, value: &str) {
        self.insert(name, Value::String(String::from(value)));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use serde_json::json;

    use super::ValueWriter;
    use crate::{Emitter, JsonError};

    #[test]
    fn builds_tree() {
        let mut writer = ValueWriter::new();
        writer.begin_object(None, true);
        writer.append_str(Some("name"), "spark");
        writer.begin_array(Some("color"), false);
        writer.append_f32(None, 1.0);
        writer.append_f32(None, 0.5);
        writer.end_array();
        writer.begin_object(Some("origin"), false);
        writer.append_bool(Some("fixed"), false);
        writer.end_object();
        writer.end_object();

        assert_eq!(
            writer.finish().unwrap(),
            json!({
                "name": "spark",
                "color": [1.0, 0.5],
                "origin": { "fixed": false },
            })
        );
    }

    #[test]
    fn keeps_member_order() {
        let mut writer = ValueWriter::new();
        writer.begin_object(None, true);
        writer.append_i32(Some("z"), 0);
        writer.append_i32(Some("a"), 1);
        writer.end_object();

        let value = writer.finish().unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn empty_and_unbalanced() {
        assert!(ValueWriter::new().finish().unwrap().is_null());

        let mut writer = ValueWriter::new();
        writer.begin_array(None, true);
        assert!(matches!(
            writer.finish(),
            Err(JsonError::Unbalanced { open: 1 })
        ));
    }
}
