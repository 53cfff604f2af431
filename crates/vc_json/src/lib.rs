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

mod emitter;
mod error;
mod value_writer;
mod writer;

// -----------------------------------------------------------------------------
// Exports

pub use emitter::Emitter;
pub use error::JsonError;
pub use value_writer::ValueWriter;
pub use writer::{JsonWriter, Mode};

pub use serde_json::{Map, Number, Value};

/// The null sentinel returned by lookups that find nothing.
pub static NULL: Value = Value::Null;

/// Parses a complete JSON document into a [`Value`] tree.
///
/// The whole document is resident in memory afterwards,
/// readers only borrow from the returned tree.
///
/// # Examples
///
/// ```
/// let value = vc_json::parse(r#"{ "rate": 2.5 }"#).unwrap();
/// assert_eq!(value["rate"], 2.5);
/// assert!(value["missing"].is_null());
/// ```
pub fn parse(text: &str) -> Result<Value, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}

/// Whether structural checks of the writers are active.
#[inline(always)]
pub(crate) const fn debug_checks() -> bool {
    cfg!(all(debug_assertions, feature = "debug"))
}
