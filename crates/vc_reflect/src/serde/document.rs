use alloc::boxed::Box;
use alloc::string::String;

use vc_json::{Emitter, JsonError, JsonWriter, Mode, Value, ValueWriter};

use super::{FromJsonVisitor, ToJsonVisitor};
use crate::registry::TypeRegistry;
use crate::visit::VisitField;
use crate::{Reflected, ReflectedBase};

// -----------------------------------------------------------------------------
// Writing

fn write_root<E: Emitter>(object: &mut dyn Reflected, emitter: &mut E) {
    emitter.begin_object(None, true);
    object.visit_fields(&mut ToJsonVisitor::new(emitter));
    emitter.end_object();
}

/// Writes the fields of `object` as a JSON document.
///
/// The document is a single object holding one member per field.
///
/// # Examples
///
/// ```
/// use vc_json::Mode;
/// use vc_reflect::Reflected;
/// use vc_reflect::info::TypeInfo;
/// use vc_reflect::serde::to_json_string;
/// use vc_reflect::visit::FieldVisitor;
///
/// struct Spark {
///     life: f32,
///     bright: bool,
/// }
///
/// static SPARK: TypeInfo = TypeInfo::new("Spark");
///
/// impl Reflected for Spark {
///     fn type_info(&self) -> &'static TypeInfo {
///         &SPARK
///     }
///
///     fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
///         visitor.visit("life", &mut self.life);
///         visitor.visit("bright", &mut self.bright);
///     }
/// }
///
/// let mut spark = Spark { life: 0.5, bright: true };
/// assert_eq!(
///     to_json_string(&mut spark, Mode::Fast).unwrap(),
///     r#"{"life":0.5,"bright":true}"#,
/// );
/// assert_eq!(
///     to_json_string(&mut spark, Mode::Pretty).unwrap(),
///     "{\n   \"life\": 0.5,\n   \"bright\": true\n}",
/// );
/// ```
pub fn to_json_string(object: &mut dyn Reflected, mode: Mode) -> Result<String, JsonError> {
    let mut writer = JsonWriter::new(mode);
    write_root(object, &mut writer);
    writer.finish()
}

/// Writes the fields of `object` into a [`Value`] tree, without going through text.
pub fn to_json_value(object: &mut dyn Reflected) -> Result<Value, JsonError> {
    let mut writer = ValueWriter::new();
    write_root(object, &mut writer);
    writer.finish()
}

/// Writes a polymorphic reference as a JSON document.
///
/// The document is an object holding `"Type"` followed by the instance's
/// fields, `{"Type":"Null"}` for an empty reference.
pub fn save_reflected<B: ?Sized + ReflectedBase>(
    slot: &mut Option<Box<B>>,
    mode: Mode,
) -> Result<String, JsonError> {
    let mut writer = JsonWriter::new(mode);
    slot.visit_field(None, &mut ToJsonVisitor::new(&mut writer));
    writer.finish()
}

// -----------------------------------------------------------------------------
// Reading

/// Reads the fields of `object` back from a parsed document.
///
/// Fields missing from `root`, or holding a value of the wrong kind,
/// keep their current value.
pub fn from_json_value(object: &mut dyn Reflected, root: &Value, registry: &TypeRegistry) {
    object.visit_fields(&mut FromJsonVisitor::with_registry(root, registry));
}

/// Parses `text` and reads the fields of `object` back from it.
///
/// Only an unreadable document is an error, see [`from_json_value`].
pub fn from_json_str(
    object: &mut dyn Reflected,
    text: &str,
    registry: &TypeRegistry,
) -> Result<(), JsonError> {
    let root = vc_json::parse(text)?;
    from_json_value(object, &root, registry);
    Ok(())
}

/// Parses a document written by [`save_reflected`] and rebuilds the reference.
///
/// Returns `Ok(None)` when the document names `"Null"`, names no type, or names
/// a type `registry` cannot build for the base `B`.
pub fn load_reflected<B: ?Sized + ReflectedBase>(
    text: &str,
    registry: &TypeRegistry,
) -> Result<Option<Box<B>>, JsonError> {
    let root = vc_json::parse(text)?;
    let mut slot: Option<Box<B>> = None;
    slot.visit_field(None, &mut FromJsonVisitor::with_registry(&root, registry));
    Ok(slot)
}
