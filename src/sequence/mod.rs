//! Sequence module.
//!
//! Provides the singly-linked text sequence and its structural algorithms.

mod node;

pub mod algorithms;
pub mod convert;
pub mod iter;
pub mod list;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use iter::{IntoIter, Iter};
pub use list::Sequence;

#[cfg(feature = "wasm")]
pub use wasm::JsSequence;

#[cfg(test)]
mod properties;
