// -----------------------------------------------------------------------------
// Modules

mod from_node;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use visitor::FromJsonVisitor;
