//! Expression and statement tree for the retype source translator.
//!
//! - [`ast`]: node kinds, handles, definitions and scopes.
//! - [`tree`]: the arena that owns all nodes, with constructors, navigation and in-place edits.
//! - [`traverse`]: pre-order node sequences.

pub mod ast;
pub mod traverse;
pub mod tree;

pub use ast::{ExprId, NodeId, StmtId};
pub use tree::{Tree, TreeError};
