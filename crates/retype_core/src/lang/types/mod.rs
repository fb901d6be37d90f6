//! Builtin type vocabularies.
//!
//! This module defines registries for type names that the resolver gives special meaning to.
//!
//! ## Notes
//! - These registries are vocabulary only: they define spellings + metadata, not type system semantics.
//! - Each submodule groups a small family of types for readability.
//!
//! ## See also
//! - [`crate::lang::operators`] for the operator vocabulary

pub mod collections;
pub mod numerics;

pub use collections::{COLLECTION_TYPES, CollectionTypeId, CollectionTypeInfo};
pub use numerics::{NUMERIC_TYPES, NumericTypeId, NumericTypeInfo};
