use alloc::string::String;

use crate::ReflectedSlot;
use crate::geometry::{Color4f, Point};
use crate::info::{EnumStringMapping, TypeInfo};
use crate::visit::{ArrayEdit, VisitField};

// -----------------------------------------------------------------------------
// FieldVisitor

/// The operations an object graph invokes to describe its fields.
///
/// Every call comes from the object graph, a visitor never starts a traversal
/// on its own. Values are passed by mutable reference: writers read them,
/// readers may overwrite them.
///
/// A `None` name stands for "the current positional element" and is only
/// meaningful directly inside an array. It is not the same as a lookup by name.
///
/// `enter_*` and `exit_*` calls must be balanced and well nested.
pub trait FieldVisitor {
    fn visit_f32(&mut self, name: Option<&str>, value: &mut f32);

    fn visit_i32(&mut self, name: Option<&str>, value: &mut i32);

    fn visit_bool(&mut self, name: Option<&str>, value: &mut bool);

    fn visit_string(&mut self, name: Option<&str>, value: &mut String);

    /// Visits an integer that is stored as a label from `mapping`.
    fn visit_enum(&mut self, name: Option<&str>, value: &mut i32, mapping: &[EnumStringMapping]);

    fn visit_point(&mut self, name: Option<&str>, value: &mut Point);

    fn visit_color(&mut self, name: Option<&str>, value: &mut Color4f);

    /// Visits the identity of a polymorphic reference whose base is `base`.
    ///
    /// Only the type of the referenced instance is handled here. The caller
    /// visits the instance's own fields afterwards, in the same scope.
    fn visit_reflected(&mut self, slot: &mut dyn ReflectedSlot, base: &'static TypeInfo);

    fn enter_object(&mut self, name: Option<&str>);

    fn exit_object(&mut self);

    /// Opens an array holding `len` elements on the caller's side.
    ///
    /// Returns the number of elements the caller should visit,
    /// which may differ from `len`.
    fn enter_array(&mut self, name: Option<&str>, len: usize) -> usize;

    /// Closes the innermost array, returning the edit the caller should apply.
    fn exit_array(&mut self) -> ArrayEdit;
}

impl<'a> dyn FieldVisitor + 'a {
    /// Visits the field `name` according to its [`VisitField`] implementation.
    #[inline]
    pub fn visit<T: VisitField + ?Sized>(&mut self, name: &str, value: &mut T) {
        value.visit_field(Some(name), self);
    }

    /// Visits a Rust enum through its `i32` representation.
    ///
    /// A value read back that does not convert into `T` leaves `value` untouched.
    pub fn visit_enum_as<T>(&mut self, name: &str, value: &mut T, mapping: &[EnumStringMapping])
    where
        T: Copy + Into<i32> + TryFrom<i32>,
    {
        let mut raw: i32 = (*value).into();
        self.visit_enum(Some(name), &mut raw, mapping);
        if let Ok(converted) = T::try_from(raw) {
            *value = converted;
        }
    }

    /// Brackets `fields` with [`enter_object`](FieldVisitor::enter_object)
    /// and [`exit_object`](FieldVisitor::exit_object).
    #[inline]
    pub fn object(&mut self, name: Option<&str>, fields: impl FnOnce(&mut Self)) {
        self.enter_object(name);
        fields(self);
        self.exit_object();
    }
}
