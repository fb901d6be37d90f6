#![forbid(unsafe_code)]
//! retype: semantic type resolution for an Objective-C to Swift source translator.
//!
//! The translator parses Objective-C-flavored sources into an expression/statement tree and rewrites it into Swift.
//! This crate holds the part that decides *what type every expression has*: the [`ExpressionTypeResolver`], the
//! declared-type catalog it queries, the intrinsic bindings it consults first and the diagnostics it accumulates.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Unresolvable expressions are not
//!   errors at all: they are encoded in the tree as the error type or left unresolved.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a resolver bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.
//!
//! ## Examples
//!
//! ```rust
//! use retype::frontend::catalog::KnownTypeCatalog;
//! use retype::frontend::intrinsics::EmptyIntrinsics;
//! use retype::{ExpressionTypeResolver, SemanticType, Tree};
//! use retype::ast::{Constant, FunctionArgument, VariableDeclaration};
//!
//! let catalog = KnownTypeCatalog::foundation();
//! let mut tree = Tree::new();
//!
//! // let list: NSMutableArray; list.addObjects(from: [1, 2])
//! let decl = tree.variable_declarations(vec![VariableDeclaration::new("list", SemanticType::named("NSMutableArray"))]);
//! let list = tree.identifier("list");
//! let callee = tree.member(list, "addObjects");
//! let one = tree.constant(Constant::Int(1));
//! let two = tree.constant(Constant::Int(2));
//! let items = tree.array_literal(vec![one, two]);
//! let call = tree.call(callee, vec![FunctionArgument::labeled("from", items)]);
//! let stmt = tree.expressions(vec![call]);
//! let body = tree.compound(vec![decl, stmt]);
//!
//! let mut resolver = ExpressionTypeResolver::new(&catalog, &EmptyIntrinsics);
//! resolver.resolve_types(&mut tree, body).unwrap();
//!
//! assert_eq!(tree.resolved_type(call), Some(&SemanticType::Void));
//! assert_eq!(tree.resolved_type(items).map(ToString::to_string).as_deref(), Some("[Int]"));
//! ```

pub mod frontend;

pub use frontend::ast;
pub use frontend::catalog;
pub use frontend::diagnostics;
pub use frontend::intentions;
pub use frontend::intrinsics;
pub use frontend::resolver;

pub use frontend::resolver::{ExpressionTypeResolver, ResolverOptions};
pub use retype_core::types::SemanticType;
pub use retype_syntax::tree::Tree;
