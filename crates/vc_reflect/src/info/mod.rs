//! Static descriptions used while visiting: type descriptors and enum tables.
//!
//! ## Menu
//!
//! - [`TypeInfo`]: name and base of a reflected type.
//! - [`EnumStringMapping`]: one `(value, label)` pair of an enum table.
//! - [`EnumMatch`]: how labels are compared when reading an enum back.

// -----------------------------------------------------------------------------
// Modules

mod enum_mapping;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use enum_mapping::{EnumMatch, EnumStringMapping};
pub use enum_mapping::{enum_to_string, labels_are_unique, string_to_enum};
pub use type_info::TypeInfo;
