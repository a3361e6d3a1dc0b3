//! Formatting helpers for rendering classified shapes.

pub mod describe;
pub mod shape;

pub use describe::describe;
pub use shape::pretty;
