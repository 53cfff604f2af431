// -----------------------------------------------------------------------------
// Modules

mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use visitor::ToJsonVisitor;
