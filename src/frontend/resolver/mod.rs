//! Expression type resolution.
//!
//! The [`ExpressionTypeResolver`] walks a statement subtree once, post-order, and writes a resolved type into every
//! expression it visits. Along the way it rebuilds the definitions of every scope it crosses (variable declarations,
//! loop variables) and records a [`Definition`](crate::frontend::ast::Definition) on every identifier.
//!
//! ## Notes
//!
//! - **Purge, then recompute**: [`resolve_types`](ExpressionTypeResolver::resolve_types) first clears every scope and
//!   identifier binding reachable from its root, then visits. Resolving an unchanged tree twice yields identical
//!   annotations.
//! - **Two failure channels**: an expression whose type could not be determined because an operand failed, or
//!   because a rule with a required outcome did not apply, gets [`SemanticType::ErrorType`]. An expression no rule
//!   applies to, without any operand failing, stays `None`. Neither is fatal.
//! - **Error contagion**: operand errors are checked before any specific rule and win.
//! - **Diagnostics** for the error cases are accumulated and handed back by
//!   [`take_diagnostics`](ExpressionTypeResolver::take_diagnostics).
//! - **Incremental mode**: with [`ResolverOptions::ignore_resolved_expressions`], any expression that already has a
//!   type is skipped together with its subtree, and keeps its identifier binding across the purge.
//!
//! ## Examples
//!
//! ```rust
//! use retype::catalog::KnownTypeCatalog;
//! use retype::intrinsics::EmptyIntrinsics;
//! use retype::ast::{Pattern, VariableDeclaration};
//! use retype::{ExpressionTypeResolver, SemanticType, Tree};
//!
//! let catalog = KnownTypeCatalog::new();
//! let mut tree = Tree::new();
//!
//! // var names: [String]; for name in names { name }
//! let decl = tree.variable_declarations(vec![VariableDeclaration::new(
//!     "names",
//!     SemanticType::array(SemanticType::String),
//! )]);
//! let names = tree.identifier("names");
//! let name = tree.identifier("name");
//! let use_name = tree.expressions(vec![name]);
//! let body = tree.compound(vec![use_name]);
//! let for_in = tree.for_in(Pattern::Identifier("name".into()), names, body);
//! let root = tree.compound(vec![decl, for_in]);
//!
//! let mut resolver = ExpressionTypeResolver::new(&catalog, &EmptyIntrinsics);
//! resolver.resolve_types(&mut tree, root).unwrap();
//!
//! assert_eq!(tree.resolved_type(name), Some(&SemanticType::String));
//! assert!(resolver.take_diagnostics().is_empty());
//! ```
//!
//! ## See also
//!
//! - [`catalog`](super::catalog) – declared-type catalog
//! - [`intrinsics`](super::intrinsics) – always-in-scope bindings
//! - [`diagnostics`](super::diagnostics) – diagnostics and errors

mod check_expr;
mod check_stmt;


use retype_core::known::KnownType;
use retype_core::types::SemanticType;
use retype_syntax::ast::{ExprId, NodeId, StmtId};
use retype_syntax::tree::Tree;

use crate::frontend::catalog::TypeCatalog;
use crate::frontend::diagnostics::{ResolveDiagnostic, ResolveError, ResolveIssue};
use crate::frontend::intrinsics::IntrinsicProvider;

/// Resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverOptions {
    /// Skip expressions (and their subtrees) that already have a resolved type.
    pub ignore_resolved_expressions: bool,
}

/// Type resolver state.
///
/// Borrows a read-only catalog and intrinsic provider; the tree to annotate is passed to each call. Diagnostics
/// accumulate across calls until taken.
pub struct ExpressionTypeResolver<'a> {
    pub(crate) catalog: &'a dyn TypeCatalog,
    pub(crate) intrinsics: &'a dyn IntrinsicProvider,
    pub(crate) options: ResolverOptions,
    pub(crate) diagnostics: Vec<ResolveDiagnostic>,
}

impl<'a> ExpressionTypeResolver<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, intrinsics: &'a dyn IntrinsicProvider) -> Self {
        Self::with_options(catalog, intrinsics, ResolverOptions::default())
    }

    pub fn with_options(
        catalog: &'a dyn TypeCatalog,
        intrinsics: &'a dyn IntrinsicProvider,
        options: ResolverOptions,
    ) -> Self {
        Self {
            catalog,
            intrinsics,
            options,
            diagnostics: Vec::new(),
        }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    pub fn set_ignore_resolved_expressions(&mut self, ignore: bool) {
        self.options.ignore_resolved_expressions = ignore;
    }

    /// Diagnostics accumulated so far.
    pub fn diagnostics(&self) -> &[ResolveDiagnostic] {
        &self.diagnostics
    }

    /// Drain the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<ResolveDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Resolve every expression under `root`.
    ///
    /// ## Parameters
    /// - `tree`: the tree that owns `root`; annotated in place.
    /// - `root`: the statement subtree to resolve.
    ///
    /// ## Returns
    /// - `Ok(())` once every reachable expression has been visited.
    /// - `Err(ResolveError::UnknownNode)` if `root` does not belong to `tree`.
    ///
    /// ## Notes
    /// - Only the subtree under `root` is purged. Bindings recorded in enclosing scopes stay in place and remain
    ///   visible to the subtree.
    #[tracing::instrument(skip_all, fields(root = %NodeId::Stmt(root), ignore_resolved = self.options.ignore_resolved_expressions))]
    pub fn resolve_types(&mut self, tree: &mut Tree, root: StmtId) -> Result<(), ResolveError> {
        if !tree.contains(NodeId::Stmt(root)) {
            return Err(ResolveError::UnknownNode(NodeId::Stmt(root)));
        }
        self.purge(tree, root);
        self.check_stmt(tree, root);
        Ok(())
    }

    /// Resolve a single expression subtree without purging anything.
    ///
    /// Identifiers are looked up from the expression's position, so a detached expression only sees intrinsics and
    /// catalog types.
    #[tracing::instrument(skip_all, fields(exp = %NodeId::Expr(exp)))]
    pub fn resolve_type(&mut self, tree: &mut Tree, exp: ExprId) -> Result<Option<SemanticType>, ResolveError> {
        if !tree.contains(NodeId::Expr(exp)) {
            return Err(ResolveError::UnknownNode(NodeId::Expr(exp)));
        }
        Ok(self.check_expr(tree, exp))
    }

    /// Clear scope definitions and identifier bindings under `root`.
    fn purge(&self, tree: &mut Tree, root: StmtId) {
        let nodes: Vec<NodeId> = tree.nodes(NodeId::Stmt(root)).collect();
        for node in nodes {
            match node {
                NodeId::Stmt(id) => {
                    if let Some(scope) = tree.scope_mut(id) {
                        scope.remove_all_definitions();
                    }
                }
                NodeId::Expr(id) => {
                    if self.options.ignore_resolved_expressions && tree.expr(id).is_type_resolved() {
                        continue;
                    }
                    tree.set_identifier_definition(id, None);
                }
            }
        }
    }

    pub(crate) fn report(&mut self, issue: ResolveIssue, node: impl Into<NodeId>) {
        let diagnostic = ResolveDiagnostic::new(issue, node);
        tracing::debug!(node = %diagnostic.node, issue = %diagnostic.issue, "resolve diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Catalog entry behind a value or metatype.
    ///
    /// `Named(T)` and `Metatype(Named(T))` both map to `T`; other types have no catalog entry.
    pub(crate) fn find_type(&self, ty: &SemanticType) -> Option<&'a KnownType> {
        let catalog = self.catalog;
        match ty {
            SemanticType::Named(name) => catalog.known_type(name),
            SemanticType::Metatype(inner) => self.find_type(inner),
            _ => None,
        }
    }
}
