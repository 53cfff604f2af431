use alloc::boxed::Box;

use crate::info::TypeInfo;
use crate::registry::TypeRegistry;
use crate::{Reflected, ReflectedBase};

// -----------------------------------------------------------------------------
// ReflectedSlot

/// Type-erased view of a polymorphic reference, handed to
/// [`FieldVisitor::visit_reflected`].
///
/// The visitor never sees the base trait. It can only ask what the slot holds,
/// replace the content with a fresh instance from a registry, or empty it.
///
/// [`FieldVisitor::visit_reflected`]: crate::visit::FieldVisitor::visit_reflected
pub trait ReflectedSlot {
    /// Descriptor of the held instance, `None` when the slot is empty.
    fn instance_type(&self) -> Option<&'static TypeInfo>;

    /// Replaces the content with a new instance of `type_name`.
    ///
    /// The slot is left empty, and `false` returned, when the registry
    /// cannot build that name for the slot's base.
    fn instantiate(&mut self, registry: &TypeRegistry, type_name: &str) -> bool;

    /// Drops the held instance.
    fn clear(&mut self);
}

impl<B: ?Sized + ReflectedBase> ReflectedSlot for Option<Box<B>> {
    #[inline]
    fn instance_type(&self) -> Option<&'static TypeInfo> {
        self.as_deref().map(Reflected::type_info)
    }

    fn instantiate(&mut self, registry: &TypeRegistry, type_name: &str) -> bool {
        *self = registry.create_instance::<B>(type_name);
        self.is_some()
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}
