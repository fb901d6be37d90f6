//! Provide the shared type algebra and canonical language vocabulary for the retype translator.
//!
//! This crate is intentionally small and dependency-light. It contains the pieces that both the syntax tree and the
//! resolver need to agree on:
//! - [`types::SemanticType`]: the semantic type algebra the resolver assigns to expressions, and
//! - [`known`]: the declared-type catalog records (types, properties, methods, constructors), and
//! - [`lang`]: registry-backed vocabulary (operators, builtin numeric/collection type names, conventions).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no tree/resolver types.
//! - Catalog records derive `serde` so catalogs can be shipped as JSON documents.

pub mod known;
pub mod lang;
pub mod types;

pub use known::{FunctionSignature, KnownConstructor, KnownMethod, KnownProperty, KnownType, ParameterSignature};
pub use types::SemanticType;
