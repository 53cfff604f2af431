use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::TypeInfo;
use crate::{Reflected, ReflectedBase};

type RootFactory = Box<dyn Fn() -> Box<dyn Reflected> + Send + Sync>;

// -----------------------------------------------------------------------------
// TypeMeta

/// A registered type: its descriptor and the factories producing new
/// default instances.
///
/// Factories are stored erased, one per base trait object `B` the type was
/// registered under, each handing out instances as `Box<B>`. Every
/// registered type can also be created as `dyn Reflected`.
pub struct TypeMeta {
    info: &'static TypeInfo,
    root: RootFactory,
    bases: Vec<(&'static TypeInfo, Box<dyn Any + Send + Sync>)>,
}

impl TypeMeta {
    /// Creates a meta whose factory builds `Box<B>`.
    pub fn new<B: ?Sized + ReflectedBase>(info: &'static TypeInfo, factory: fn() -> Box<B>) -> Self {
        Self {
            info,
            root: Box::new(move || B::into_reflected(factory())),
            bases: alloc::vec![(B::base_type(), Box::new(factory) as Box<dyn Any + Send + Sync>)],
        }
    }

    /// Adds a factory building `Box<B>`.
    ///
    /// Returns `false`, keeping the previous factory, if `B` already has one.
    pub fn add_base<B: ?Sized + ReflectedBase>(&mut self, factory: fn() -> Box<B>) -> bool {
        let base = B::base_type();
        if self.bases.iter().any(|(known, _)| core::ptr::eq(*known, base)) {
            return false;
        }
        self.bases.push((base, Box::new(factory)));
        true
    }

    /// Returns the descriptor of the registered type.
    #[inline]
    pub fn info(&self) -> &'static TypeInfo {
        self.info
    }

    /// Returns the registered name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    /// Returns the descriptor of the first base the type was registered under.
    #[inline]
    pub fn base(&self) -> &'static TypeInfo {
        self.bases[0].0
    }

    /// Returns the descriptors of every base the type was registered under.
    pub fn bases(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.bases.iter().map(|(base, _)| *base)
    }

    /// Builds a new instance as `Box<B>`.
    ///
    /// Returns `None` if `B` is neither `dyn Reflected` nor a base the type
    /// was registered under.
    pub fn create<B: ?Sized + 'static>(&self) -> Option<Box<B>> {
        if let Some(factory) = self
            .bases
            .iter()
            .find_map(|(_, factory)| factory.downcast_ref::<fn() -> Box<B>>())
        {
            return Some(factory());
        }

        if TypeId::of::<B>() != TypeId::of::<dyn Reflected>() {
            return None;
        }
        let instance: Box<dyn Any> = Box::new((self.root)());
        instance.downcast::<Box<B>>().ok().map(|instance| *instance)
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("name", &self.info.name())
            .field("bases", &self.bases().map(TypeInfo::name).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
