/// A streaming, write-only JSON emitter.
///
/// Structure is described by explicit `begin_*`/`end_*` calls which must be
/// well nested, the emitter tracks the nesting itself.
///
/// Every operation takes an optional member name:
/// - inside an object, the name is the member key and must be present;
/// - inside an array, the name must be `None` and the value is appended
///   as the next positional element;
/// - at the top level, the name is ignored.
///
/// `multiline` is a layout hint only. Emitters without a pretty layout
/// ignore it.
///
/// Writing never fails at this level. Emitters that can fail keep the first
/// error and report it when they are finished.
pub trait Emitter {
    fn begin_object(&mut self, name: Option<&str>, multiline: bool);

    fn end_object(&mut self);

    fn begin_array(&mut self, name: Option<&str>, multiline: bool);

    fn end_array(&mut self);

    fn append_f32(&mut self, name: Option<&str>, value: f32);

    fn append_i32(&mut self, name: Option<&str>, value: i32);

    fn append_bool(&mut self, name: Option<&str>, value: bool);

    fn append_str(&mut self, name: Option<&str>, value: &str);
}
