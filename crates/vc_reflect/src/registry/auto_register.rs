use crate::registry::TypeRegistry;

// -----------------------------------------------------------------------------
// AutoRegistration

/// A registration submitted at link time by [`register_type!`](crate::register_type).
///
/// Collected by [`TypeRegistry::auto_register`], users never build it directly.
#[doc(hidden)]
pub struct AutoRegistration {
    register: fn(&mut TypeRegistry),
}

impl AutoRegistration {
    #[inline]
    pub const fn new(register: fn(&mut TypeRegistry)) -> Self {
        Self { register }
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(AutoRegistration);

/// Runs every collected registration, returns whether collection is available.
#[cfg(feature = "auto_register")]
pub(super) fn register_all(registry: &mut TypeRegistry) -> bool {
    for registration in inventory::iter::<AutoRegistration> {
        (registration.register)(registry);
    }
    true
}

#[cfg(not(feature = "auto_register"))]
#[inline(always)]
pub(super) fn register_all(_registry: &mut TypeRegistry) -> bool {
    false
}

// -----------------------------------------------------------------------------
// register_type

/// Declares a static registration of `$ty` under one or more base trait objects.
///
/// `$ty` must implement [`Default`] and `$info` must be its [`TypeInfo`].
/// Bases are separated by `|`, as in `register_type!(Spin as dyn Rotation | dyn Affector, &SPIN)`
/// where `Rotation` derives from `Affector`.
/// The registration is picked up by [`TypeRegistry::new`] and
/// [`TypeRegistry::global`].
///
/// ```
/// use vc_reflect::{Reflected, register_type};
/// use vc_reflect::info::TypeInfo;
/// use vc_reflect::visit::FieldVisitor;
///
/// #[derive(Default)]
/// struct Pulse {
///     period: f32,
/// }
///
/// static PULSE: TypeInfo = TypeInfo::with_base("Pulse", &vc_reflect::REFLECTED);
///
/// impl Reflected for Pulse {
///     fn type_info(&self) -> &'static TypeInfo {
///         &PULSE
///     }
///
///     fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
///         visitor.visit("period", &mut self.period);
///     }
/// }
///
/// register_type!(Pulse as dyn Reflected, &PULSE);
/// ```
///
/// Without the `auto_register` feature the macro expands to nothing.
///
/// [`TypeInfo`]: crate::info::TypeInfo
/// [`TypeRegistry::global`]: crate::registry::TypeRegistry::global
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! register_type {
    ($ty:ty as $($base:ty)|+, $info:expr $(,)?) => {
        const _: () = {
            fn __register(registry: &mut $crate::registry::TypeRegistry) {
                $(
                    registry.register::<$base>($info, || -> $crate::__macro_exports::Box<$base> {
                        $crate::__macro_exports::Box::new(<$ty as ::core::default::Default>::default())
                    });
                )+
            }

            $crate::__macro_exports::inventory::submit! {
                $crate::registry::AutoRegistration::new(__register)
            }
        };
    };
}

/// Declares a static registration of `$ty` under one or more base trait objects.
///
/// The `auto_register` feature is disabled, the macro expands to nothing.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! register_type {
    ($ty:ty as $($base:ty)|+, $info:expr $(,)?) => {};
}
