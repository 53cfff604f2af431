// -----------------------------------------------------------------------------
// Modules

mod reflected;
mod slot;

// -----------------------------------------------------------------------------
// Exports

pub use reflected::{REFLECTED, Reflected, ReflectedBase};
pub use slot::ReflectedSlot;
