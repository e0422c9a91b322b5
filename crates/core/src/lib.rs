//! Core traits and types shared by the batpint crates.
//!
//! - [`Component`]: a deterministic callable mapping a typed input to a typed
//!   output, the shape in which parameter functions are handed to a solver
//! - [`constraint`]: numeric invariants of physical parameters

mod component;
pub mod constraint;

pub use component::Component;
