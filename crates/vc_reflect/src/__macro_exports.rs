//! Paths used by the expansion of [`register_type!`](crate::register_type).

pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub use inventory;
