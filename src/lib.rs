//! TextChain - a minimal singly-linked sequence of text elements.
//!
//! The crate provides one container, [`Sequence`], and the classic
//! in-place list algorithms built on it:
//!
//! - **Front/back insertion and front removal** with a cached length
//! - **Structural algorithms** (reverse, split, merge, merge sort) that relink
//!   existing nodes instead of copying them
//! - **Conversions** to and from arrays plus the `( e1 e2 ... )` rendering
//!
//! # Example
//!
//! ```rust
//! use textchain::Sequence;
//!
//! let mut left = Sequence::from_array(&["a", "c"]);
//! let mut right = Sequence::from_array(&["b", "d"]);
//!
//! // Destructive merge: `right` gives up its nodes
//! left.merge(&mut right);
//! assert_eq!(left.render(), "( a b c d )");
//! assert!(right.is_empty());
//!
//! // Errors are contract violations, reported rather than clamped
//! assert!(left.get(9).is_err());
//! ```

pub mod error;

// Sequence module
pub mod sequence;

// Re-exports for convenience
pub use error::{SequenceError, SequenceResult};
pub use sequence::{IntoIter, Iter, Sequence};

#[cfg(feature = "wasm")]
pub use sequence::JsSequence;
