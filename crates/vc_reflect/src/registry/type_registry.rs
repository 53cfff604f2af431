use alloc::boxed::Box;
use core::fmt;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::ReflectedBase;
use crate::info::TypeInfo;
use crate::registry::TypeMeta;

/// A fixed hash seed, lookups do not need DoS resistance.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of reflected types, keyed by [type name].
///
/// This struct is the central store used to turn a type name read from a
/// document back into a new instance.
///
/// Registration happens up front. After that the registry is only read,
/// so a shared `&TypeRegistry` (or [`TypeRegistry::global`]) needs no locking.
///
/// # Example
///
/// ```
/// use vc_reflect::{Reflected, ReflectedBase, REFLECTED};
/// use vc_reflect::info::TypeInfo;
/// use vc_reflect::registry::TypeRegistry;
/// use vc_reflect::visit::FieldVisitor;
///
/// #[derive(Default)]
/// struct Fade {
///     duration: f32,
/// }
///
/// static FADE: TypeInfo = TypeInfo::with_base("Fade", &REFLECTED);
///
/// impl Reflected for Fade {
///     fn type_info(&self) -> &'static TypeInfo {
///         &FADE
///     }
///
///     fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
///         visitor.visit("duration", &mut self.duration);
///     }
/// }
///
/// let mut registry = TypeRegistry::empty();
/// assert!(registry.register::<dyn Reflected>(&FADE, || -> Box<dyn Reflected> {
///     Box::new(Fade::default())
/// }));
///
/// let fade = registry.create_instance::<dyn Reflected>("Fade").unwrap();
/// assert_eq!(fade.type_info().name(), "Fade");
/// assert!(registry.create_instance::<dyn Reflected>("Unknown").is_none());
/// ```
///
/// [type name]: crate::info::TypeInfo::name
pub struct TypeRegistry {
    types: HashMap<&'static str, TypeMeta, FixedState>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            types: HashMap::with_hasher(FIXED_HASH_STATE),
        }
    }

    /// Create a type registry holding every static registration,
    /// see [`auto_register`](Self::auto_register).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.auto_register();
        registry
    }

    /// Returns the process-wide registry.
    ///
    /// It is built by [`TypeRegistry::new`] on first use and never changes afterwards.
    #[cfg(feature = "std")]
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: std::sync::OnceLock<TypeRegistry> = std::sync::OnceLock::new();
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    /// Registers `info` under the base `B`, with `factory` building new instances.
    ///
    /// Every registered type can be created as `B` and as `dyn Reflected`.
    /// Registering the same descriptor again under another base adds that
    /// base to it.
    ///
    /// Names are unique: if `info.name()` is already registered for another
    /// descriptor, or already under `B`, nothing changes and `false` is returned.
    pub fn register<B: ?Sized + ReflectedBase>(
        &mut self,
        info: &'static TypeInfo,
        factory: fn() -> Box<B>,
    ) -> bool {
        let base = B::base_type();

        if crate::debug_checks() {
            assert!(
                info.is_derived_from(base),
                "type `{}` registered under `{}` but does not derive from it",
                info.name(),
                base.name(),
            );
        }

        match self.types.get_mut(info.name()) {
            None => {
                self.types.insert(info.name(), TypeMeta::new(info, factory));
                true
            }
            Some(meta) if core::ptr::eq(meta.info(), info) => {
                if meta.add_base(factory) {
                    return true;
                }
                log::warn!(
                    "type `{}` is already registered under `{}`, ignoring the registration",
                    info.name(),
                    base.name(),
                );
                false
            }
            Some(_) => {
                log::warn!(
                    "type name `{}` is already registered, ignoring the registration under `{}`",
                    info.name(),
                    base.name(),
                );
                false
            }
        }
    }

    /// Automatically registers every type declared with [`register_type!`](crate::register_type).
    ///
    /// Repeated calls are cheap and will not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if automatic registration is available on the current build.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it always do nothing and
    /// returns `false`.
    pub fn auto_register(&mut self) -> bool {
        let before = self.types.len();
        let available = super::auto_register::register_all(self);
        if available {
            log::debug!(
                "auto registered {} type(s), {} in total",
                self.types.len() - before,
                self.types.len(),
            );
        }
        available
    }

    /// Whether a type named `name` has been registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns the [`TypeMeta`] registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TypeMeta> {
        self.types.get(name)
    }

    /// Builds a new instance of the type registered under `name`.
    ///
    /// Returns `None`, never an error, when the name is unknown, or when `B`
    /// is neither `dyn Reflected` nor a base the type was registered under.
    #[inline]
    pub fn create_instance<B: ?Sized + 'static>(&self, name: &str) -> Option<Box<B>> {
        self.get(name)?.create::<B>()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns an iterator over every registered type, in no particular order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.types.values()
    }

    /// Returns an iterator over the registered types deriving from `base`.
    ///
    /// This is what an editor uses to offer the choices for a polymorphic field.
    pub fn iter_derived_from<'a>(&'a self, base: &'a TypeInfo) -> impl Iterator<Item = &'a TypeMeta> {
        self.types
            .values()
            .filter(move |meta| meta.info().is_derived_from(base))
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.types.keys()).finish()
    }
}
