//! retype frontend
//!
//! This module contains the semantic components that run over a parsed tree:
//! - `ast` / `tree`: expression/statement tree (from the shared `retype_syntax` crate)
//! - `catalog`: declared-type catalog (known types, supertypes, members)
//! - `intentions`: type-generation intentions registered into the catalog
//! - `intrinsics`: always-in-scope bindings (`self`, `super`, implicit members)
//! - `resolver`: expression/statement type resolution
//! - `diagnostics`: resolver diagnostics and structural errors

// Tree components are provided by the shared retype_syntax crate.
pub use retype_syntax::{ast, traverse, tree};

pub mod catalog;
pub mod diagnostics;
pub mod intentions;
pub mod intrinsics;
pub mod resolver;
