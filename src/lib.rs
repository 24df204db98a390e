//! Element Identifier Derivation - Hierarchical ids for element trees
//!
//! This crate derives stable, deterministic, human-readable attribute
//! values for dynamically created UI elements by walking the ancestor
//! chain to the nearest element that already carries an identifying
//! attribute and appending a caller-supplied suffix to its value.
//!
//! The algorithm is decoupled from any concrete rendering layer through
//! the [`ElementTree`] trait; [`MemoryTree`] is a ready-made in-memory
//! implementation for tests and headless use.

mod derive;
mod element;
mod error;
mod node_id;
mod tree;

pub use derive::*;
pub use element::*;
pub use error::*;
pub use node_id::*;
pub use tree::*;
