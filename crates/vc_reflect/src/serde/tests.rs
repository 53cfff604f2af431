use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use serde_json::json;
use vc_json::{JsonWriter, Mode, Value};

use super::{Error, FromJsonVisitor, ToJsonVisitor};
use super::{from_json_str, from_json_value, load_reflected};
use super::{save_reflected, to_json_string, to_json_value};
use crate::geometry::{Color4f, Point};
use crate::info::{EnumMatch, EnumStringMapping, TypeInfo};
use crate::registry::TypeRegistry;
use crate::visit::{FieldVisitor, VisitField};
use crate::{REFLECTED, Reflected, ReflectedBase};

// -----------------------------------------------------------------------------
// Fixture

trait Affector: Reflected {}

static AFFECTOR: TypeInfo = TypeInfo::with_base("Affector", &REFLECTED);
static SPIN: TypeInfo = TypeInfo::with_base("Spin", &AFFECTOR);
static GRAVITY: TypeInfo = TypeInfo::with_base("Gravity", &AFFECTOR);
static EFFECT: TypeInfo = TypeInfo::with_base("Effect", &REFLECTED);

impl ReflectedBase for dyn Affector {
    fn base_type() -> &'static TypeInfo {
        &AFFECTOR
    }

    fn into_reflected(self: Box<Self>) -> Box<dyn Reflected> {
        self
    }
}

#[derive(Debug, Default, PartialEq)]
struct Spin {
    speed: f32,
    clockwise: bool,
}

impl Reflected for Spin {
    fn type_info(&self) -> &'static TypeInfo {
        &SPIN
    }

    fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
        visitor.visit("speed", &mut self.speed);
        visitor.visit("clockwise", &mut self.clockwise);
    }
}

impl Affector for Spin {}

#[derive(Debug, Default, PartialEq)]
struct Gravity {
    force: Point,
}

impl Reflected for Gravity {
    fn type_info(&self) -> &'static TypeInfo {
        &GRAVITY
    }

    fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
        visitor.visit("force", &mut self.force);
    }
}

impl Affector for Gravity {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Blend {
    #[default]
    Add = 0,
    Multiply = 1,
    Screen = 2,
}

const BLEND: &[EnumStringMapping] = &[
    EnumStringMapping::new(0, "Add"),
    EnumStringMapping::new(1, "Multiply"),
    EnumStringMapping::new(2, "Screen"),
];

impl From<Blend> for i32 {
    fn from(blend: Blend) -> Self {
        blend as i32
    }
}

impl TryFrom<i32> for Blend {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Blend::Add),
            1 => Ok(Blend::Multiply),
            2 => Ok(Blend::Screen),
            _ => Err(value),
        }
    }
}

#[derive(Default)]
struct Effect {
    name: String,
    rate: f32,
    count: i32,
    looping: bool,
    blend: Blend,
    origin: Point,
    color: Color4f,
    tags: Vec<String>,
    affectors: Vec<Option<Box<dyn Affector>>>,
}

impl Reflected for Effect {
    fn type_info(&self) -> &'static TypeInfo {
        &EFFECT
    }

    fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
        visitor.visit("name", &mut self.name);
        visitor.visit("rate", &mut self.rate);
        visitor.visit("count", &mut self.count);
        visitor.visit("looping", &mut self.looping);
        visitor.visit_enum_as("blend", &mut self.blend, BLEND);
        visitor.visit("origin", &mut self.origin);
        visitor.visit("color", &mut self.color);
        visitor.visit("tags", &mut self.tags);
        visitor.visit("affectors", &mut self.affectors);
    }
}

fn spin(speed: f32, clockwise: bool) -> Option<Box<dyn Affector>> {
    Some(Box::new(Spin { speed, clockwise }))
}

fn gravity(x: f32, y: f32) -> Option<Box<dyn Affector>> {
    Some(Box::new(Gravity {
        force: Point::new(x, y),
    }))
}

fn downcast<T: Affector>(slot: &Option<Box<dyn Affector>>) -> Option<&T> {
    let affector: &dyn Affector = slot.as_deref()?;
    (affector as &dyn Any).downcast_ref::<T>()
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::empty();
    registry.register::<dyn Affector>(&SPIN, || -> Box<dyn Affector> { Box::new(Spin::default()) });
    registry.register::<dyn Affector>(&GRAVITY, || -> Box<dyn Affector> {
        Box::new(Gravity::default())
    });
    registry.register::<dyn Reflected>(&EFFECT, || -> Box<dyn Reflected> {
        Box::new(Effect::default())
    });
    registry.register::<dyn Reflected>(&HOLDER, || -> Box<dyn Reflected> {
        Box::new(Holder::default())
    });
    registry
}

fn campfire() -> Effect {
    Effect {
        name: String::from("campfire"),
        rate: 12.5,
        count: 40,
        looping: true,
        blend: Blend::Multiply,
        origin: Point::new(-1.5, 4.0),
        color: Color4f::new(1.0, 0.5, 0.25, 1.0),
        tags: ["warm", "smoke"].map(String::from).into(),
        affectors: [spin(2.0, true), None, gravity(0.0, -9.5)].into(),
    }
}

fn assert_campfire(effect: &Effect) {
    assert_eq!(effect.name, "campfire");
    assert_eq!(effect.rate, 12.5);
    assert_eq!(effect.count, 40);
    assert!(effect.looping);
    assert_eq!(effect.blend, Blend::Multiply);
    assert_eq!(effect.origin, Point::new(-1.5, 4.0));
    assert_eq!(effect.color, Color4f::new(1.0, 0.5, 0.25, 1.0));
    assert_eq!(effect.tags, ["warm", "smoke"]);

    assert_eq!(effect.affectors.len(), 3);
    assert_eq!(
        downcast::<Spin>(&effect.affectors[0]),
        Some(&Spin {
            speed: 2.0,
            clockwise: true
        }),
    );
    assert!(effect.affectors[1].is_none());
    assert_eq!(
        downcast::<Gravity>(&effect.affectors[2]),
        Some(&Gravity {
            force: Point::new(0.0, -9.5)
        }),
    );
}

fn read(root: &Value, effect: &mut Effect) {
    from_json_value(effect, root, &registry());
}

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn round_trip_text() {
    let registry = registry();
    for mode in [Mode::Fast, Mode::Pretty] {
        let text = to_json_string(&mut campfire(), mode).unwrap();

        let mut effect = Effect::default();
        from_json_str(&mut effect, &text, &registry).unwrap();
        assert_campfire(&effect);
    }
}

#[test]
fn round_trip_value() {
    let root = to_json_value(&mut campfire()).unwrap();

    let mut effect = Effect::default();
    read(&root, &mut effect);
    assert_campfire(&effect);
}

#[test]
fn document_layout() {
    let root = to_json_value(&mut campfire()).unwrap();
    assert_eq!(
        root,
        json!({
            "name": "campfire",
            "rate": 12.5,
            "count": 40,
            "looping": true,
            "blend": "Multiply",
            "origin": { "x": -1.5, "y": 4.0 },
            "color": [1.0, 0.5, 0.25, 1.0],
            "tags": ["warm", "smoke"],
            "affectors": [
                { "Type": "Spin", "speed": 2.0, "clockwise": true },
                { "Type": "Null" },
                { "Type": "Gravity", "force": { "x": 0.0, "y": -9.5 } },
            ],
        }),
    );
}

#[test]
fn pretty_text_layout() {
    let mut spin = Spin {
        speed: 1.5,
        clockwise: false,
    };
    let mut effect = Effect {
        color: Color4f::WHITE,
        ..Effect::default()
    };
    effect.affectors.push(None);

    assert_eq!(
        to_json_string(&mut spin, Mode::Pretty).unwrap(),
        "{\n   \"speed\": 1.5,\n   \"clockwise\": false\n}",
    );

    let text = to_json_string(&mut effect, Mode::Pretty).unwrap();
    assert!(text.contains("\"color\": [ 1.0, 1.0, 1.0, 1.0 ]"));
    assert!(text.contains("\"origin\": { \"x\": 0.0, \"y\": 0.0 }"));
    assert!(text.contains("\"affectors\": [\n      {\n         \"Type\": \"Null\"\n      }\n   ]"));
}

// -----------------------------------------------------------------------------
// Field fidelity

#[test]
fn integers_must_be_exact() {
    let mut effect = campfire();
    read(&json!({ "count": 7 }), &mut effect);
    assert_eq!(effect.count, 7);

    read(&json!({ "count": 7.5 }), &mut effect);
    assert_eq!(effect.count, 7);

    read(&json!({ "count": "8" }), &mut effect);
    assert_eq!(effect.count, 7);
}

#[test]
fn missing_fields_keep_values() {
    let mut effect = campfire();
    read(&json!({ "tags": ["warm", "smoke"], "affectors": [{ "Type": "Spin" }] }), &mut effect);
    assert_eq!(effect.name, "campfire");
    assert_eq!(effect.count, 40);
    assert_eq!(effect.blend, Blend::Multiply);
    assert_eq!(effect.color, Color4f::new(1.0, 0.5, 0.25, 1.0));

    read(&json!({ "name": 3, "rate": "high", "looping": "yes" }), &mut effect);
    assert_eq!(effect.name, "campfire");
    assert_eq!(effect.rate, 12.5);
    assert!(effect.looping);

    // An array missing from the document has no elements.
    assert!(effect.tags.is_empty());
    assert!(effect.affectors.is_empty());
}

#[test]
fn enum_labels() {
    let mut effect = campfire();
    read(&json!({ "blend": "Screen" }), &mut effect);
    assert_eq!(effect.blend, Blend::Screen);

    read(&json!({ "blend": "Z" }), &mut effect);
    assert_eq!(effect.blend, Blend::Screen);

    read(&json!({ "blend": 0 }), &mut effect);
    assert_eq!(effect.blend, Blend::Screen);

    read(&json!({ "blend": "add" }), &mut effect);
    assert_eq!(effect.blend, Blend::Screen);

    let root = json!({ "blend": "add" });
    let registry = registry();
    let mut visitor =
        FromJsonVisitor::with_registry(&root, &registry).with_enum_match(EnumMatch::IgnoreAsciiCase);
    effect.visit_fields(&mut visitor);
    assert_eq!(effect.blend, Blend::Add);
}

#[test]
fn unmapped_enum_value() {
    let mut raw = 9;
    let mut writer = JsonWriter::new(Mode::Fast);
    writer_object(&mut writer, |visitor| visitor.visit_enum(Some("blend"), &mut raw, BLEND));
    let text = writer.finish().unwrap();
    assert_eq!(text, r#"{"blend":9}"#);

    let mut effect = campfire();
    from_json_str(&mut effect, &text, &registry()).unwrap();
    assert_eq!(effect.blend, Blend::Multiply);
}

#[test]
fn compound_shapes() {
    let mut effect = campfire();
    read(&json!({ "color": [0.0, 0.0, 1.0], "origin": [1.0, 2.0] }), &mut effect);
    assert_eq!(effect.color, Color4f::new(1.0, 0.5, 0.25, 1.0));
    assert_eq!(effect.origin, Point::new(-1.5, 4.0));

    read(&json!({ "color": [0.0, 0.0, 1.0, 0.5, 1.0] }), &mut effect);
    assert_eq!(effect.color, Color4f::new(1.0, 0.5, 0.25, 1.0));

    read(&json!({ "color": [0, 0, 1, 0.5], "origin": { "y": 8 } }), &mut effect);
    assert_eq!(effect.color, Color4f::new(0.0, 0.0, 1.0, 0.5));
    assert_eq!(effect.origin, Point::new(-1.5, 8.0));
}

// -----------------------------------------------------------------------------
// Arrays

#[test]
fn array_lengths() {
    let mut tags: Vec<String> = ["a", "b", "c"].map(String::from).into();

    let mut writer = JsonWriter::new(Mode::Fast);
    writer_object(&mut writer, |visitor| {
        assert_eq!(visitor.enter_array(Some("tags"), tags.len()), 3);
        for tag in tags.iter_mut() {
            visitor.visit_string(None, tag);
        }
        visitor.exit_array();
    });
    assert_eq!(writer.finish().unwrap(), r#"{"tags":["a","b","c"]}"#);

    let root = json!({ "tags": ["a", "b", "c"] });
    let registry = registry();
    let mut visitor = FromJsonVisitor::with_registry(&root, &registry);
    assert_eq!(visitor.enter_array(Some("tags"), 0), 3);
    visitor.exit_array();

    let mut effect = campfire();
    read(&root, &mut effect);
    assert_eq!(effect.tags, ["a", "b", "c"]);
    read(&json!({ "tags": [] }), &mut effect);
    assert!(effect.tags.is_empty());
}

#[test]
fn elements_in_order() {
    let root = json!({ "tags": ["first", "second"] });
    let registry = registry();
    let mut visitor = FromJsonVisitor::with_registry(&root, &registry);

    let (mut first, mut second) = (String::new(), String::new());
    visitor.enter_array(Some("tags"), 2);
    visitor.visit_string(None, &mut first);
    visitor.visit_string(None, &mut second);
    visitor.exit_array();

    assert_eq!(first, "first");
    assert_eq!(second, "second");
}

#[test]
#[should_panic]
fn named_field_inside_array() {
    let root = json!({ "tags": [{ "name": "x" }] });
    let registry = registry();
    let mut visitor = FromJsonVisitor::with_registry(&root, &registry);

    let mut name = String::new();
    visitor.enter_array(Some("tags"), 1);
    visitor.visit_string(Some("name"), &mut name);
}

// -----------------------------------------------------------------------------
// Polymorphic references

#[test]
fn polymorphic_references() {
    let mut effect = campfire();
    read(
        &json!({
            "affectors": [
                { "Type": "Null", "speed": 3.0 },
                {},
                { "Type": "Unknown", "speed": 3.0 },
                { "Type": "Effect" },
                { "Type": 4 },
                { "Type": "Spin", "speed": 4.0 },
                "Spin",
            ],
        }),
        &mut effect,
    );

    assert_eq!(effect.affectors.len(), 7);
    assert!(effect.affectors[..5].iter().all(Option::is_none));
    assert_eq!(
        downcast::<Spin>(&effect.affectors[5]),
        Some(&Spin {
            speed: 4.0,
            clockwise: false
        }),
    );
    assert!(effect.affectors[6].is_none());
}

#[test]
fn reference_is_rebuilt() {
    let mut effect = campfire();
    read(&json!({ "affectors": [{ "Type": "Spin", "clockwise": false }] }), &mut effect);

    // A new default instance, the previous speed is not kept.
    assert_eq!(
        downcast::<Spin>(&effect.affectors[0]),
        Some(&Spin {
            speed: 0.0,
            clockwise: false
        }),
    );
}

#[test]
fn save_and_load_reference() {
    let registry = registry();

    let mut slot = gravity(1.0, 2.0);
    let text = save_reflected(&mut slot, Mode::Fast).unwrap();
    assert_eq!(text, r#"{"Type":"Gravity","force":{"x":1.0,"y":2.0}}"#);

    let loaded = load_reflected::<dyn Affector>(&text, &registry).unwrap();
    assert_eq!(
        downcast::<Gravity>(&loaded),
        Some(&Gravity {
            force: Point::new(1.0, 2.0)
        }),
    );

    let mut empty: Option<Box<dyn Affector>> = None;
    let text = save_reflected(&mut empty, Mode::Fast).unwrap();
    assert_eq!(text, r#"{"Type":"Null"}"#);
    assert!(load_reflected::<dyn Affector>(&text, &registry).unwrap().is_none());

    assert!(load_reflected::<dyn Affector>(r#"{"Type":"Effect"}"#, &registry).unwrap().is_none());
    let effect = load_reflected::<dyn Reflected>(r#"{"Type":"Effect","count":2}"#, &registry).unwrap();
    assert!(effect.is_some_and(|effect| effect.is_of_type(&EFFECT)));
}

/// Holds any reflected object, whatever base it was registered under.
#[derive(Default)]
struct Holder {
    any: Option<Box<dyn Reflected>>,
}

static HOLDER: TypeInfo = TypeInfo::with_base("Holder", &REFLECTED);

impl Reflected for Holder {
    fn type_info(&self) -> &'static TypeInfo {
        &HOLDER
    }

    fn visit_fields(&mut self, visitor: &mut dyn FieldVisitor) {
        visitor.visit("any", &mut self.any);
    }
}

#[test]
fn reference_typed_at_root_base() {
    let registry = registry();
    let mut holder = Holder {
        any: Some(Box::new(Spin {
            speed: 3.0,
            clockwise: true,
        })),
    };

    let text = to_json_string(&mut holder, Mode::Fast).unwrap();
    assert_eq!(text, r#"{"any":{"Type":"Spin","speed":3.0,"clockwise":true}}"#);

    let mut loaded = Holder::default();
    from_json_str(&mut loaded, &text, &registry).unwrap();
    let any: Option<&dyn Any> = loaded.any.as_deref().map(|any| any as &dyn Any);
    assert_eq!(
        any.and_then(|any| any.downcast_ref::<Spin>()),
        Some(&Spin {
            speed: 3.0,
            clockwise: true
        }),
    );

    let mut nested = Holder::default();
    from_json_str(&mut nested, r#"{"any":{"Type":"Holder","any":{"Type":"Gravity"}}}"#, &registry).unwrap();
    let inner = nested.any.as_deref().map(|any| any as &dyn Any);
    let inner = inner.and_then(|any| any.downcast_ref::<Holder>()).unwrap();
    assert!(inner.any.as_ref().is_some_and(|any| any.is_of_type(&GRAVITY)));

    // Registered as `dyn Reflected` only, so not an affector.
    assert!(load_reflected::<dyn Affector>(r#"{"Type":"Holder"}"#, &registry).unwrap().is_none());
}

#[test]
fn malformed_document() {
    let mut effect = campfire();
    let err = from_json_str(&mut effect, r#"{ "count": 1"#, &registry()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(effect.count, 40);

    assert!(matches!(
        load_reflected::<dyn Affector>("[", &registry()),
        Err(Error::Parse(_))
    ));
}

// -----------------------------------------------------------------------------
// Global registry

#[cfg(feature = "auto_register")]
mod global {
    use serde_json::json;

    use super::{Affector, Effect, GRAVITY, Gravity, SPIN, Spin, downcast};
    use crate::Reflected;
    use crate::register_type;
    use crate::registry::TypeRegistry;
    use crate::serde::FromJsonVisitor;

    register_type!(Spin as dyn Affector | dyn Reflected, &SPIN);
    register_type!(Gravity as dyn Affector, &GRAVITY);

    #[test]
    fn registered_bases() {
        let registry = TypeRegistry::global();
        let spin = registry.get("Spin").unwrap();
        assert_eq!(spin.bases().len(), 2);
        assert_eq!(registry.get("Gravity").map(|meta| meta.bases().len()), Some(1));

        let gravity = registry.create_instance::<dyn Reflected>("Gravity").unwrap();
        assert!(gravity.is_of_type(&GRAVITY));
        assert!(registry.create_instance::<dyn Affector>("Spin").is_some());
    }

    #[test]
    fn reads_through_global_registry() {
        let root = json!({ "affectors": [{ "Type": "Gravity" }, { "Type": "Spin", "speed": 1.0 }] });
        let mut effect = Effect::default();
        Reflected::visit_fields(&mut effect, &mut FromJsonVisitor::new(&root));

        assert!(downcast::<Gravity>(&effect.affectors[0]).is_some());
        assert_eq!(downcast::<Spin>(&effect.affectors[1]).map(|spin| spin.speed), Some(1.0));
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn writer_object(writer: &mut JsonWriter, fields: impl FnOnce(&mut dyn FieldVisitor)) {
    use vc_json::Emitter;

    writer.begin_object(None, true);
    fields(&mut ToJsonVisitor::new(&mut *writer));
    writer.end_object();
}

#[test]
fn nested_objects_are_plain_fields() {
    #[derive(Default, Debug, PartialEq)]
    struct Range {
        min: f32,
        max: f32,
    }

    impl VisitField for Range {
        fn visit_field(&mut self, name: Option<&str>, visitor: &mut dyn FieldVisitor) {
            visitor.object(name, |visitor| {
                visitor.visit("min", &mut self.min);
                visitor.visit("max", &mut self.max);
            });
        }
    }

    let mut ranges = Vec::from([Range { min: 0.5, max: 2.0 }]);
    let mut writer = JsonWriter::new(Mode::Fast);
    writer_object(&mut writer, |visitor| visitor.visit("ranges", &mut ranges));
    let text = writer.finish().unwrap();
    assert_eq!(text, r#"{"ranges":[{"min":0.5,"max":2.0}]}"#);

    let root = vc_json::parse(&text).unwrap();
    let registry = registry();
    let mut loaded: Vec<Range> = Vec::new();
    let mut visitor = FromJsonVisitor::with_registry(&root, &registry);
    (&mut visitor as &mut dyn FieldVisitor).visit("ranges", &mut loaded);
    assert_eq!(loaded, ranges);
}
