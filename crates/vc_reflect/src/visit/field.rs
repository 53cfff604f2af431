use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::ReflectedBase;
use crate::geometry::{Color4f, Point};
use crate::visit::FieldVisitor;

// -----------------------------------------------------------------------------
// VisitField

/// A field type that knows which [`FieldVisitor`] operations describe it.
///
/// Implemented for the primitives, the [`geometry`](crate::geometry) types,
/// `Vec<T>` and polymorphic references `Option<Box<B>>`.
/// Plain nested structs implement it by bracketing their fields with
/// [`object`](FieldVisitor::object):
///
/// ```
/// use vc_reflect::visit::{FieldVisitor, VisitField};
///
/// #[derive(Default)]
/// struct Range {
///     min: f32,
///     max: f32,
/// }
///
/// impl VisitField for Range {
///     fn visit_field(&mut self, name: Option<&str>, visitor: &mut dyn FieldVisitor) {
///         visitor.object(name, |visitor| {
///             visitor.visit("min", &mut self.min);
///             visitor.visit("max", &mut self.max);
///         });
///     }
/// }
/// ```
pub trait VisitField {
    /// Describes `self` as the field `name` (`None` inside an array).
    fn visit_field(&mut self, name: Option<&str>, visitor: &mut dyn FieldVisitor);
}

macro_rules! impl_visit_field {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl VisitField for $ty {
                #[inline]
                fn visit_field(&mut self, name: Option<&str>, visitor: &mut dyn FieldVisitor) {
                    visitor.$method(name, self);
                }
            }
        )*
    };
}

impl_visit_field! {
    f32 => visit_f32,
    i32 => visit_i32,
    bool => visit_bool,
    String => visit_string,
    Point => visit_point,
    Color4f => visit_color,
}

/// The array is resized to the length reported by the visitor before its
/// elements are visited in order, new elements start from `T::default()`.
impl<T: VisitField + Default> VisitField for Vec<T> {
    fn visit_field(&mut self, name: Option<&str>, visitor: &mut dyn FieldVisitor) {
        let len = visitor.enter_array(name, self.len());
        self.resize_with(len, T::default);
        for item in self.iter_mut() {
            item.visit_field(None, visitor);
        }
        visitor.exit_array().apply(self);
    }
}

/// A polymorphic reference is an object holding the instance's type
/// followed by the instance's own fields.
impl<B: ?Sized + ReflectedBase> VisitField for Option<Box<B>> {
    fn visit_field(&mut self, name: Option<&str>, visitor: &mut dyn FieldVisitor) {
        visitor.enter_object(name);
        visitor.visit_reflected(self, B::base_type());
        if let Some(instance) = self.as_deref_mut() {
            instance.visit_fields(visitor);
        }
        visitor.exit_object();
    }
}
