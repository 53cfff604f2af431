//! JSON serialization of reflected objects through [`FieldVisitor`].
//!
//! Two visitors implement the same traversal interface, so an object describes
//! its fields once in [`Reflected::visit_fields`] and is both saved and loaded
//! by that single function.
//!
//! # Overview
//!
//! - [`ToJsonVisitor`]: appends every visited value to a [`vc_json::Emitter`],
//!   either the text [`JsonWriter`](vc_json::JsonWriter) or the tree
//!   [`ValueWriter`](vc_json::ValueWriter).
//! - [`FromJsonVisitor`]: reads every visited value out of a parsed
//!   [`Value`](vc_json::Value) tree with a cursor stack.
//!
//! Document level helpers wrap both:
//!
//! - [`to_json_string`], [`to_json_value`] and [`save_reflected`] for writing;
//! - [`from_json_str`], [`from_json_value`] and [`load_reflected`] for reading.
//!
//! ## Polymorphic references
//!
//! A reference `Option<Box<dyn Base>>` is an object whose `"Type"` member names
//! the concrete type, followed by that type's own fields:
//!
//! ```text
//! { "Type": "Spin", "speed": 2.0, "clockwise": true }
//! ```
//!
//! An empty reference is `{ "Type": "Null" }`. When reading, the name is
//! resolved in a [`TypeRegistry`](crate::registry::TypeRegistry), a name it
//! cannot build for the base empties the reference.
//!
//! ## Errors
//!
//! Only whole documents fail, with [`Error`]. A field that is missing or holds
//! a value of the wrong kind keeps its current value, without a diagnostic.
//!
//! [`FieldVisitor`]: crate::visit::FieldVisitor
//! [`Reflected::visit_fields`]: crate::Reflected::visit_fields

// -----------------------------------------------------------------------------
// Modules

mod de;
mod document;
mod ser;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Exports

pub use de::FromJsonVisitor;
pub use document::{from_json_str, from_json_value, load_reflected};
pub use document::{save_reflected, to_json_string, to_json_value};
pub use ser::ToJsonVisitor;

pub use crate::info::EnumMatch;
pub use vc_json::{JsonError as Error, Mode};

/// Member of a polymorphic reference holding the concrete type name.
pub const TYPE_KEY: &str = "Type";

/// Type name written for an empty polymorphic reference.
pub const NULL_TYPE_NAME: &str = "Null";
