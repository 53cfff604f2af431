// -----------------------------------------------------------------------------
// EnumStringMapping

/// One entry of an enum table, pairing an integer value with its label.
///
/// Tables are plain slices declared next to the field that uses them,
/// there is no global enum registry. Labels must be unique within a table.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{EnumMatch, EnumStringMapping, enum_to_string, string_to_enum};
///
/// const BLEND: &[EnumStringMapping] = &[
///     EnumStringMapping::new(0, "Add"),
///     EnumStringMapping::new(1, "Multiply"),
/// ];
///
/// assert_eq!(enum_to_string(1, BLEND), Some("Multiply"));
/// assert_eq!(string_to_enum("Add", BLEND, EnumMatch::Exact), Some(0));
/// assert_eq!(string_to_enum("add", BLEND, EnumMatch::Exact), None);
/// assert_eq!(string_to_enum("add", BLEND, EnumMatch::IgnoreAsciiCase), Some(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumStringMapping {
    pub value: i32,
    pub name: &'static str,
}

impl EnumStringMapping {
    #[inline]
    pub const fn new(value: i32, name: &'static str) -> Self {
        Self { value, name }
    }
}

// -----------------------------------------------------------------------------
// EnumMatch

/// Label comparison used when resolving a label to a value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnumMatch {
    /// Labels must match byte for byte.
    #[default]
    Exact,
    /// ASCII letters compare case-insensitively.
    IgnoreAsciiCase,
}

impl EnumMatch {
    #[inline]
    fn matches(self, label: &str, input: &str) -> bool {
        match self {
            EnumMatch::Exact => label == input,
            EnumMatch::IgnoreAsciiCase => label.eq_ignore_ascii_case(input),
        }
    }
}

// -----------------------------------------------------------------------------
// Lookup

/// Returns the label of the first entry holding `value`.
pub fn enum_to_string(value: i32, mapping: &[EnumStringMapping]) -> Option<&'static str> {
    mapping
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.name)
}

/// Returns the value of the first entry whose label matches `label`.
pub fn string_to_enum(label: &str, mapping: &[EnumStringMapping], policy: EnumMatch) -> Option<i32> {
    mapping
        .iter()
        .find(|entry| policy.matches(entry.name, label))
        .map(|entry| entry.value)
}

/// Whether every label of the table is distinct.
pub fn labels_are_unique(mapping: &[EnumStringMapping]) -> bool {
    mapping
        .iter()
        .enumerate()
        .all(|(i, entry)| mapping[i + 1..].iter().all(|other| other.name != entry.name))
}
