use core::fmt;

// -----------------------------------------------------------------------------
// TypeInfo

/// Runtime descriptor of a reflected type.
///
/// A descriptor is declared once as a `static` and never changes.
/// Its name is the key used in documents and in the [`TypeRegistry`],
/// so it must be unique across the process.
///
/// Abstract bases get a descriptor too, concrete types point at it through
/// [`base`](Self::base).
///
/// # Examples
///
/// ```
/// use vc_reflect::info::TypeInfo;
///
/// static AFFECTOR: TypeInfo = TypeInfo::new("Affector");
/// static SPIN: TypeInfo = TypeInfo::with_base("Spin", &AFFECTOR);
///
/// assert!(SPIN.is_derived_from(&AFFECTOR));
/// assert!(SPIN.is_derived_from(&SPIN));
/// assert!(!AFFECTOR.is_derived_from(&SPIN));
/// ```
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
pub struct TypeInfo {
    name: &'static str,
    base: Option<&'static TypeInfo>,
}

impl TypeInfo {
    /// Creates a descriptor without a base.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name, base: None }
    }

    /// Creates a descriptor deriving from `base`.
    #[inline]
    pub const fn with_base(name: &'static str, base: &'static TypeInfo) -> Self {
        Self {
            name,
            base: Some(base),
        }
    }

    /// Returns the unique name of the type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the descriptor of the direct base, if any.
    #[inline]
    pub const fn base(&self) -> Option<&'static TypeInfo> {
        self.base
    }

    /// Whether `self` is `other` or derives from it, directly or not.
    ///
    /// Descriptors are compared by name.
    pub fn is_derived_from(&self, other: &TypeInfo) -> bool {
        let mut current = Some(self);
        while let Some(info) = current {
            if info == other {
                return true;
            }
            current = info.base;
        }
        false
    }
}

impl PartialEq for TypeInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.name == other.name
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = Some(self);
        while let Some(info) = current {
            list.entry(&info.name);
            current = info.base;
        }
        list.finish()
    }
}
