use alloc::boxed::Box;
use core::any::Any;

use crate::info::TypeInfo;
use crate::visit::FieldVisitor;

// -----------------------------------------------------------------------------
// Reflected

/// An object that knows its runtime type and can describe its fields.
///
/// [`visit_fields`](Reflected::visit_fields) is the single entry point used for
/// both saving and loading: it calls the visitor once per field, in a fixed
/// order, and the visitor decides whether values are read or written.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflected;
/// use vc_reflect::geometry::Point;
/// use vc_reflect::info::TypeInfo;
/// use vc_reflect::visit::FieldVisitor;
///
/// #[derive(Default)]
/// struct Emitter {
///     rate: f32,
///     position: Point,
/// }
///
/// static EMITTER: TypeInfo = TypeInfo::new("Emitter");
///
/// impl Reflected for Emitter {
///     fn type_info(&self) -> &'static TypeInfo {
///         &EMITTER
///     }
///
///     fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
///         visitor.visit("rate", &mut self.rate);
///         visitor.visit("position", &mut self.position);
///     }
/// }
/// ```
pub trait Reflected: Any {
    /// Returns the descriptor of the concrete type.
    fn type_info(&self) -> &'static TypeInfo;

    /// Describes every field to `visitor`.
    fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor);

    /// Whether the concrete type is `ty` or derives from it.
    #[inline]
    fn is_of_type(&self, ty: &TypeInfo) -> bool {
        self.type_info().is_derived_from(ty)
    }
}

// -----------------------------------------------------------------------------
// ReflectedBase

/// Names the [`TypeInfo`] of a polymorphic base.
///
/// Implemented for the trait object of the base, so that
/// `Option<Box<dyn Base>>` fields can be visited:
///
/// ```
/// use vc_reflect::{Reflected, ReflectedBase};
/// use vc_reflect::info::TypeInfo;
///
/// trait Affector: Reflected {}
///
/// static AFFECTOR: TypeInfo = TypeInfo::with_base("Affector", &vc_reflect::REFLECTED);
///
/// impl ReflectedBase for dyn Affector {
///     fn base_type() -> &'static TypeInfo {
///         &AFFECTOR
///     }
///
///     fn into_reflected(self: Box<Self>) -> Box<dyn Reflected> {
///         self
///     }
/// }
/// ```
///
/// `dyn Reflected` itself is a base, described by [`REFLECTED`].
/// Descriptors of other bases usually derive from it.
pub trait ReflectedBase: Reflected {
    fn base_type() -> &'static TypeInfo;

    /// Upcasts to the root base, usually just `self`.
    ///
    /// This is what lets a type registered under this base be created
    /// as `dyn Reflected` too.
    fn into_reflected(self: Box<Self>) -> Box<dyn Reflected>;
}

/// Root of every type hierarchy.
pub static REFLECTED: TypeInfo = TypeInfo::new("Reflected");

impl ReflectedBase for dyn Reflected {
    #[inline]
    fn base_type() -> &'static TypeInfo {
        &REFLECTED
    }

    #[inline]
    fn into_reflected(self: Box<Self>) -> Box<dyn Reflected> {
        self
    }
}
