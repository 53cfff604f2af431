#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(any(test, feature = "std"))]
#[cfg_attr(test, macro_use)]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod geometry;
pub mod info;
pub mod registry;
pub mod serde;
pub mod visit;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{REFLECTED, Reflected, ReflectedBase, ReflectedSlot};

/// Whether the optional `debug` checks are active.
#[inline(always)]
pub(crate) const fn debug_checks() -> bool {
    cfg!(all(debug_assertions, feature = "debug"))
}
