use alloc::string::String;
use alloc::vec::Vec;

use serde_core::Serialize;

use crate::{Emitter, JsonError};

// -----------------------------------------------------------------------------
// Mode

/// Output layout of a [`JsonWriter`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No whitespace at all.
    #[default]
    Fast,
    /// Multi-line scopes put each member on its own line, indented by
    /// three spaces per level. Single-line scopes stay on one line.
    Pretty,
}

// -----------------------------------------------------------------------------
// Scope

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Object,
    Array,
}

#[derive(Debug, Clone, Copy)]
struct Scope {
    kind: ScopeKind,
    multiline: bool,
    empty: bool,
}

const INDENT: &str = "   ";

// -----------------------------------------------------------------------------
// JsonWriter

/// A streaming [`Emitter`] producing JSON text.
///
/// Values are encoded as soon as they are appended. Strings and numbers are
/// encoded by `serde_json`, so escaping follows its rules and non-finite
/// floats become `null`.
///
/// # Examples
///
/// ```
/// use vc_json::{Emitter, JsonWriter, Mode};
///
/// let mut writer = JsonWriter::new(Mode::Pretty);
/// writer.begin_object(None, true);
/// writer.append_str(Some("name"), "spark");
/// writer.begin_array(Some("color"), false);
/// writer.append_f32(None, 1.0);
/// writer.append_f32(None, 0.5);
/// writer.end_array();
/// writer.end_object();
///
/// let text = writer.finish().unwrap();
/// assert_eq!(text, "{\n   \"name\": \"spark\",\n   \"color\": [ 1.0, 0.5 ]\n}");
/// ```
#[derive(Debug, Default)]
pub struct JsonWriter {
    out: String,
    mode: Mode,
    scopes: Vec<Scope>,
    error: Option<serde_json::Error>,
}

impl JsonWriter {
    /// Creates an empty writer with the given layout.
    #[inline]
    pub const fn new(mode: Mode) -> Self {
        Self {
            out: String::new(),
            mode,
            scopes: Vec::new(),
            error: None,
        }
    }

    /// Returns the layout of this writer.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of currently open scopes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Returns the text written so far.
    ///
    /// It is only a complete document once every scope has been closed.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Finishes writing and returns the document.
    ///
    /// Fails if a value could not be encoded or if scopes are still open.
    pub fn finish(self) -> Result<String, JsonError> {
        if let Some(err) = self.error {
            return Err(JsonError::Encode(err));
        }
        if !self.scopes.is_empty() {
            return Err(JsonError::Unbalanced {
                open: self.scopes.len(),
            });
        }
        Ok(self.out)
    }

    #[inline]
    fn pretty(&self) -> bool {
        self.mode == Mode::Pretty
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    // Keeps the first error only, later values are still attempted.
    fn push_encoded<T: ?Sized + Serialize>(&mut self, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => self.out.push_str(&text),
            Err(err) => {
                if self.error.is_none() {
                    self.error = Some(err);
                }
            }
        }
    }

    /// Writes the separator and key that precede a value in the current scope.
    fn begin_value(&mut self, name: Option<&str>) {
        let pretty = self.pretty();
        let depth = self.scopes.len();

        let Some(scope) = self.scopes.last_mut() else {
            if crate::debug_checks() {
                assert!(self.out.is_empty(), "JsonWriter: more than one root value");
            }
            return;
        };

        if crate::debug_checks() {
            match scope.kind {
                ScopeKind::Object => assert!(name.is_some(), "JsonWriter: unnamed object member"),
                ScopeKind::Array => assert!(name.is_none(), "JsonWriter: named array element"),
            }
        }

        let first = scope.empty;
        let multiline = scope.multiline;
        let kind = scope.kind;
        scope.empty = false;

        if !first {
            self.out.push(',');
        }
        if pretty {
            if multiline {
                self.newline(depth);
            } else {
                self.out.push(' ');
            }
        }

        if kind == ScopeKind::Object {
            if let Some(name) = name {
                self.push_encoded(name);
                self.out.push(':');
                if pretty {
                    self.out.push(' ');
                }
            }
        }
    }

    fn begin_scope(&mut self, name: Option<&str>, kind: ScopeKind, multiline: bool) {
        self.begin_value(name);
        self.out.push(match kind {
            ScopeKind::Object => '{',
            ScopeKind::Array => '[',
        });
        self.scopes.push(Scope {
            kind,
            multiline,
            empty: true,
        });
    }

    fn end_scope(&mut self, kind: ScopeKind) {
        let Some(scope) = self.scopes.pop() else {
            if crate::debug_checks() {
                panic!("JsonWriter: end of scope without a matching begin");
            }
            return;
        };

        if crate::debug_checks() {
            assert_eq!(scope.kind, kind, "JsonWriter: mismatched end of scope");
        }

        if self.pretty() && !scope.empty {
            if scope.multiline {
                self.newline(self.scopes.len());
            } else {
                self.out.push(' ');
            }
        }
        self.out.push(match scope.kind {
            ScopeKind::Object => '}',
            ScopeKind::Array => ']',
        });
    }
}

impl Emitter for JsonWriter {
    fn begin_object(&mut self, name: Option<&str>, multiline: bool) {
        self.begin_scope(name, ScopeKind::Object, multiline);
    }

    fn end_object(&mut self) {
        self.end_scope(ScopeKind::Object);
    }

    fn begin_array(&mut self, name: Option<&str>, multiline: bool) {
        self.begin_scope(name, ScopeKind::Array, multiline);
    }

    fn end_array(&mut self) {
        self.end_scope(ScopeKind::Array);
    }

    fn append_f32(&mut self, name: Option<&str>, value: f32) {
        self.begin_value(name);
        self.push_encoded(&value);
    }

    fn append_i32(&mut self, name: Option<&str>, value: i32) {
        self.begin_value(name);
        self.push_encoded(&value);
    }

    fn append_bool(&mut self, name: Option<&str>, value: bool) {
        self.begin_value(name);
        self.out.push_str(if value { "true" } else { "false" });
    }

    fn append_str(&mut self, name: Option<&str>, value: &str) {
        self.begin_value(name);
        self.push_encoded(value);
    }
}
