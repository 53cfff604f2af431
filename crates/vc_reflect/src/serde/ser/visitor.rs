use alloc::string::String;

use vc_json::Emitter;

use crate::ReflectedSlot;
use crate::geometry::{Color4f, Point};
use crate::info::{EnumStringMapping, TypeInfo};
use crate::info::{enum_to_string, labels_are_unique};
use crate::serde::{NULL_TYPE_NAME, TYPE_KEY};
use crate::visit::{ArrayEdit, FieldVisitor};

// -----------------------------------------------------------------------------
// ToJsonVisitor

/// A [`FieldVisitor`] writing every visited value into an [`Emitter`].
///
/// Values are appended in call order and the visitor keeps no state of its
/// own: nesting is tracked by the emitter.
///
/// | Field | Written as |
/// |---|---|
/// | `f32`, `i32`, `bool`, `String` | number, number, boolean, string |
/// | enum | its label, or the raw number when the table has no label for it |
/// | [`Point`] | `{ "x": .., "y": .. }` on one line |
/// | [`Color4f`] | `[ r, g, b, a ]` on one line |
/// | polymorphic reference | `"Type": <name>`, `"Null"` when empty |
///
/// The fields of a referenced instance are written by the caller's following
/// calls, into the same object as `"Type"`.
///
/// # Examples
///
/// ```
/// use vc_json::{Emitter, JsonWriter, Mode};
/// use vc_reflect::geometry::Point;
/// use vc_reflect::serde::ToJsonVisitor;
/// use vc_reflect::visit::FieldVisitor;
///
/// let mut writer = JsonWriter::new(Mode::Fast);
/// writer.begin_object(None, true);
/// {
///     let mut visitor = ToJsonVisitor::new(&mut writer);
///     let visitor: &mut dyn FieldVisitor = &mut visitor;
///     visitor.visit("count", &mut 3_i32);
///     visitor.visit("origin", &mut Point::new(1.0, 2.0));
/// }
/// writer.end_object();
///
/// let text = writer.finish().unwrap();
/// assert_eq!(text, r#"{"count":3,"origin":{"x":1.0,"y":2.0}}"#);
/// ```
pub struct ToJsonVisitor<'a, E: Emitter + ?Sized> {
    emitter: &'a mut E,
}

impl<'a, E: Emitter + ?Sized> ToJsonVisitor<'a, E> {
    /// Creates a visitor appending into `emitter`.
    #[inline]
    pub const fn new(emitter: &'a mut E) -> Self {
        Self { emitter }
    }
}

impl<E: Emitter + ?Sized> FieldVisitor for ToJsonVisitor<'_, E> {
    #[inline]
    fn visit_f32(&mut self, name: Option<&str>, value: &mut f32) {
        self.emitter.append_f32(name, *value);
    }

    #[inline]
    fn visit_i32(&mut self, name: Option<&str>, value: &mut i32) {
        self.emitter.append_i32(name, *value);
    }

    #[inline]
    fn visit_bool(&mut self, name: Option<&str>, value: &mut bool) {
        self.emitter.append_bool(name, *value);
    }

    #[inline]
    fn visit_string(&mut self, name: Option<&str>, value: &mut String) {
        self.emitter.append_str(name, value);
    }

    fn visit_enum(&mut self, name: Option<&str>, value: &mut i32, mapping: &[EnumStringMapping]) {
        if crate::debug_checks() {
            assert!(labels_are_unique(mapping), "enum table with duplicate labels");
        }

        match enum_to_string(*value, mapping) {
            Some(label) => self.emitter.append_str(name, label),
            None => self.emitter.append_i32(name, *value),
        }
    }

    fn visit_point(&mut self, name: Option<&str>, value: &mut Point) {
        self.emitter.begin_object(name, false);
        self.emitter.append_f32(Some("x"), value.x);
        self.emitter.append_f32(Some("y"), value.y);
        self.emitter.end_object();
    }

    fn visit_color(&mut self, name: Option<&str>, value: &mut Color4f) {
        self.emitter.begin_array(name, false);
        for component in value.to_array() {
            self.emitter.append_f32(None, component);
        }
        self.emitter.end_array();
    }

    fn visit_reflected(&mut self, slot: &mut dyn ReflectedSlot, _base: &'static TypeInfo) {
        let type_name = slot.instance_type().map_or(NULL_TYPE_NAME, TypeInfo::name);
        self.emitter.append_str(Some(TYPE_KEY), type_name);
    }

    #[inline]
    fn enter_object(&mut self, name: Option<&str>) {
        self.emitter.begin_object(name, true);
    }

    #[inline]
    fn exit_object(&mut self) {
        self.emitter.end_object();
    }

    #[inline]
    fn enter_array(&mut self, name: Option<&str>, len: usize) -> usize {
        self.emitter.begin_array(name, true);
        len
    }

    #[inline]
    fn exit_array(&mut self) -> ArrayEdit {
        self.emitter.end_array();
        ArrayEdit::None
    }
}
