//! # Shared Application State
//!
//! State shared between the interactive surface and the operations that
//! mutate it. Only the invoice draft is shared mutable state; everything
//! else is owned by the stores.

pub mod draft;

pub use draft::DraftState;
