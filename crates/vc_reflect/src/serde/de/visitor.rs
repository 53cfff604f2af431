use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vc_json::{NULL, Value};

use super::from_node::{FromNode, parse_into};
use crate::ReflectedSlot;
use crate::geometry::{Color4f, Point};
use crate::info::{EnumMatch, EnumStringMapping, TypeInfo};
use crate::info::{labels_are_unique, string_to_enum};
use crate::registry::TypeRegistry;
use crate::serde::{NULL_TYPE_NAME, TYPE_KEY};
use crate::visit::{ArrayEdit, FieldVisitor};

// -----------------------------------------------------------------------------
// FromJsonVisitor

/// A [`FieldVisitor`] reading every visited value out of a parsed [`Value`] tree.
///
/// The visitor keeps a cursor: a stack of the nodes opened by `enter_*` calls,
/// and one element counter for each open array. Fields are looked up in the
/// node on top of the stack:
///
/// - inside an array, an unnamed field is the next element,
///   past the end it is null;
/// - otherwise an unnamed field is the top node itself;
/// - inside an object, a named field is the member of that name, or null.
///
/// Reading is best-effort. A node of the wrong kind, a number that does not
/// fit, an unknown enum label: the field simply keeps its current value.
///
/// Looking up a named field while the top node is an array is a bug in the
/// caller's traversal and panics.
///
/// # Examples
///
/// ```
/// use vc_reflect::registry::TypeRegistry;
/// use vc_reflect::serde::FromJsonVisitor;
/// use vc_reflect::visit::FieldVisitor;
///
/// let root = vc_json::parse(r#"{ "count": 7, "rate": "fast", "sizes": [1, 2] }"#).unwrap();
/// let registry = TypeRegistry::empty();
///
/// let (mut count, mut rate, mut sizes) = (0_i32, 1.5_f32, Vec::<f32>::new());
/// {
///     let mut visitor = FromJsonVisitor::with_registry(&root, &registry);
///     let visitor: &mut dyn FieldVisitor = &mut visitor;
///     visitor.visit("count", &mut count);
///     visitor.visit("rate", &mut rate);
///     visitor.visit("sizes", &mut sizes);
/// }
///
/// assert_eq!(count, 7);
/// assert_eq!(rate, 1.5); // not a number, unchanged
/// assert_eq!(sizes, [1.0, 2.0]);
/// ```
pub struct FromJsonVisitor<'a> {
    stack: Vec<&'a Value>,
    array_index_stack: Vec<usize>,
    registry: &'a TypeRegistry,
    enum_match: EnumMatch,
}

impl<'a> FromJsonVisitor<'a> {
    /// Creates a visitor reading from `root`, building polymorphic
    /// references through [`TypeRegistry::global`].
    #[cfg(feature = "std")]
    #[inline]
    pub fn new(root: &'a Value) -> Self {
        Self::with_registry(root, TypeRegistry::global())
    }

    /// Creates a visitor reading from `root`, building polymorphic
    /// references through `registry`.
    pub fn with_registry(root: &'a Value, registry: &'a TypeRegistry) -> Self {
        // A root array is read positionally like any other array.
        let array_index_stack = if root.is_array() { vec![0] } else { Vec::new() };
        Self {
            stack: vec![root],
            array_index_stack,
            registry,
            enum_match: EnumMatch::Exact,
        }
    }

    /// Sets how enum labels are compared, [`EnumMatch::Exact`] by default.
    #[inline]
    pub fn with_enum_match(mut self, enum_match: EnumMatch) -> Self {
        self.enum_match = enum_match;
        self
    }

    /// Returns how enum labels are compared.
    #[inline]
    pub fn enum_match(&self) -> EnumMatch {
        self.enum_match
    }

    /// Returns the number of open nodes, the root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn top(&self) -> &'a Value {
        self.stack.last().copied().unwrap_or(&NULL)
    }

    /// Resolves a field against the top of the cursor.
    fn get(&mut self, name: Option<&str>) -> &'a Value {
        let top = self.top();
        match (top, name) {
            (Value::Array(items), None) => {
                let Some(index) = self.array_index_stack.last_mut() else {
                    return &NULL;
                };
                let node = items.get(*index).unwrap_or(&NULL);
                *index += 1;
                node
            }
            (Value::Array(_), Some(name)) => {
                panic!("FromJsonVisitor: named field `{name}` looked up inside an array")
            }
            (_, None) => top,
            (Value::Object(members), Some(name)) => members.get(name).unwrap_or(&NULL),
            (_, Some(_)) => &NULL,
        }
    }

    #[inline]
    fn parse_field<T: FromNode>(&mut self, name: Option<&str>, value: &mut T) {
        let node = self.get(name);
        parse_into(node, value);
    }
}

impl FieldVisitor for FromJsonVisitor<'_> {
    #[inline]
    fn visit_f32(&mut self, name: Option<&str>, value: &mut f32) {
        self.parse_field(name, value);
    }

    #[inline]
    fn visit_i32(&mut self, name: Option<&str>, value: &mut i32) {
        self.parse_field(name, value);
    }

    #[inline]
    fn visit_bool(&mut self, name: Option<&str>, value: &mut bool) {
        self.parse_field(name, value);
    }

    #[inline]
    fn visit_string(&mut self, name: Option<&str>, value: &mut String) {
        self.parse_field(name, value);
    }

    fn visit_enum(&mut self, name: Option<&str>, value: &mut i32, mapping: &[EnumStringMapping]) {
        if crate::debug_checks() {
            assert!(labels_are_unique(mapping), "enum table with duplicate labels");
        }

        let node = self.get(name);
        if let Some(resolved) = node
            .as_str()
            .and_then(|label| string_to_enum(label, mapping, self.enum_match))
        {
            *value = resolved;
        }
    }

    fn visit_point(&mut self, name: Option<&str>, value: &mut Point) {
        let node = self.get(name);
        if node.is_object() {
            parse_into(&node["x"], &mut value.x);
            parse_into(&node["y"], &mut value.y);
        }
    }

    fn visit_color(&mut self, name: Option<&str>, value: &mut Color4f) {
        let node = self.get(name);
        if let Some(items) = node.as_array().filter(|items| items.len() == 4) {
            for (component, item) in value.components_mut().into_iter().zip(items) {
                parse_into(item, component);
            }
        }
    }

    fn visit_reflected(&mut self, slot: &mut dyn ReflectedSlot, base: &'static TypeInfo) {
        let type_name = self.get(Some(TYPE_KEY)).as_str().unwrap_or(NULL_TYPE_NAME);
        if type_name == NULL_TYPE_NAME {
            slot.clear();
            return;
        }

        match self.registry.get(type_name) {
            Some(meta) if meta.info().is_derived_from(base) => {
                if !slot.instantiate(self.registry, type_name) {
                    log::trace!(
                        "type `{type_name}` is not registered under `{}`, reference emptied",
                        base.name(),
                    );
                }
            }
            Some(_) => {
                log::trace!(
                    "type `{type_name}` does not derive from `{}`, reference emptied",
                    base.name(),
                );
                slot.clear();
            }
            None => {
                log::trace!("type `{type_name}` is not registered, reference emptied");
                slot.clear();
            }
        }
    }

    fn enter_object(&mut self, name: Option<&str>) {
        let node = self.get(name);
        self.stack.push(if node.is_object() { node } else { &NULL });
    }

    #[inline]
    fn exit_object(&mut self) {
        self.stack.pop();
    }

    fn enter_array(&mut self, name: Option<&str>, _len: usize) -> usize {
        let node = self.get(name);
        let (node, len) = match node.as_array() {
            Some(items) => (node, items.len()),
            None => (&NULL, 0),
        };
        self.stack.push(node);
        self.array_index_stack.push(0);
        len
    }

    #[inline]
    fn exit_array(&mut self) -> ArrayEdit {
        self.stack.pop();
        self.array_index_stack.pop();
        ArrayEdit::None
    }
}
