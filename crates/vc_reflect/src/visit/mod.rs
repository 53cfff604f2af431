//! The field-traversal interface shared by every visitor.
//!
//! ## Menu
//!
//! - [`FieldVisitor`]: the operations an object graph invokes to describe itself.
//! - [`VisitField`]: how a field type maps onto those operations.
//! - [`ArrayEdit`]: an array change requested by a visitor when an array closes.
//!
//! An object implements [`Reflected::visit_fields`] once, in terms of
//! [`FieldVisitor::visit`], and the same code then saves and loads it:
//!
//! ```text
//! visitor.visit("rate", &mut self.rate);            // primitive
//! visitor.visit("origin", &mut self.origin);        // Point, an object in the document
//! visitor.visit_enum_as("blend", &mut self.blend, BLEND);
//! visitor.visit("affectors", &mut self.affectors);  // Vec<Option<Box<dyn Affector>>>
//! ```
//!
//! [`Reflected::visit_fields`]: crate::Reflected::visit_fields

// -----------------------------------------------------------------------------
// Modules

mod array_edit;
mod field;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use array_edit::ArrayEdit;
pub use field::VisitField;
pub use visitor::FieldVisitor;
