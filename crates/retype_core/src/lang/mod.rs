//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: operators, builtin type names and well-known
//! identifiers.
//!
//! The design goal is to avoid stringly-typed checks scattered across the resolver. Instead, callers work with
//! **stable IDs** (e.g. `SwiftOperator`, `CollectionTypeId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no tree types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use retype_core::lang::operators::{self, OperatorCategory, SwiftOperator};
//!
//! assert_eq!(operators::from_str("??"), Some(SwiftOperator::NullCoalesce));
//! assert_eq!(SwiftOperator::NullCoalesce.category(), OperatorCategory::NullCoalesce);
//! ```

pub mod conventions;
pub mod operators;
pub mod types;
