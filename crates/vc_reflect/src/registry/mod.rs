//! Type registry used to rebuild polymorphic references by name.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: a registered type, its descriptor and its factories.
//! - [`TypeRegistry`]: name to [`TypeMeta`] map.
//! - [`AutoRegistration`]: a static registration collected by `inventory`.
//! - [`register_type!`](crate::register_type): declares a static registration.
//!
//! A type is registered under the base trait objects it can be held as.
//! Every registered type can also be created as `dyn Reflected`.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! When the `auto_register` feature is disabled, [`register_type!`](crate::register_type)
//! expands to nothing and types must be registered through [`TypeRegistry::register`].
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use auto_register::AutoRegistration;
pub use type_meta::TypeMeta;
pub use type_registry::TypeRegistry;
