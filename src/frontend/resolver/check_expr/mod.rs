//! Resolve expression types.
//!
//! This module owns the expression entrypoint (`check_expr`) and delegates to themed submodules. Every visit writes
//! its result into the node, including `None`, so re-running over a changed subtree never leaves a stale type
//! behind.
//!
//! ## See also
//! - [`super::ExpressionTypeResolver`]: the resolver entrypoint.

use retype_core::types::SemanticType;
use retype_syntax::ast::{ExprId, ExprKind};
use retype_syntax::tree::Tree;

use super::ExpressionTypeResolver;

mod access;
mod basics;
mod calls;
mod collections;
mod ops;

impl ExpressionTypeResolver<'_> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Resolve an expression (children first) and record its type on the node.
    ///
    /// In incremental mode an already-typed expression is returned as-is and its subtree is not visited.
    pub(crate) fn check_expr(&mut self, tree: &mut Tree, id: ExprId) -> Option<SemanticType> {
        if self.options.ignore_resolved_expressions && tree.expr(id).is_type_resolved() {
            return tree.resolved_type(id).cloned();
        }

        // Child ids are copied out so the tree can be mutated while visiting them.
        let kind = tree.kind(id).clone();
        let ty = match kind {
            ExprKind::Identifier { name, .. } => self.check_identifier(tree, id, &name),
            ExprKind::Constant(constant) => Some(self.check_constant(&constant)),
            ExprKind::Prefix { op, exp } | ExprKind::Unary { op, exp } => self.check_unary(tree, op, exp),
            ExprKind::Binary { lhs, op, rhs } => self.check_binary(tree, lhs, op, rhs),
            ExprKind::Assignment { lhs, rhs, .. } => {
                self.check_expr(tree, lhs);
                self.check_expr(tree, rhs);
                None
            }
            ExprKind::Cast { exp, ty } => self.check_cast(tree, exp, ty),
            ExprKind::Ternary { cond, if_true, if_false } => self.check_ternary(tree, id, cond, if_true, if_false),
            ExprKind::Parens(inner) => self.check_expr(tree, inner),
            ExprKind::ArrayLiteral(items) => self.check_array_literal(tree, &items),
            ExprKind::DictionaryLiteral(pairs) => self.check_dictionary_literal(tree, &pairs),
            ExprKind::Postfix { exp, op } => self.check_postfix(tree, id, exp, op),
        };

        tree.set_resolved_type(id, ty.clone());
        ty
    }
}

/// Whether a visited operand came back as the error type.
fn is_error(ty: &Option<SemanticType>) -> bool {
    ty.as_ref().is_some_and(SemanticType::is_error)
}
