//! Resolve operators (unary/prefix, binary, and ternary).
//!
//! Operator rules never invent an error: an operator applied to types its rule does not cover leaves the expression
//! unresolved. The ternary is the exception, since it has to commit to one branch type.

use retype_core::lang::operators::{OperatorCategory, SwiftOperator};
use retype_core::types::SemanticType;
use retype_syntax::ast::ExprId;
use retype_syntax::tree::Tree;

use crate::frontend::diagnostics::ResolveIssue;

use super::{ExpressionTypeResolver, is_error};

impl ExpressionTypeResolver<'_> {
    /// Resolve a prefix/unary operator.
    pub(in crate::frontend::resolver::check_expr) fn check_unary(
        &mut self,
        tree: &mut Tree,
        op: SwiftOperator,
        exp: ExprId,
    ) -> Option<SemanticType> {
        let operand = self.check_expr(tree, exp)?;
        if operand.is_error() {
            return Some(SemanticType::ErrorType);
        }

        match op {
            SwiftOperator::Negate if operand == SemanticType::Bool => Some(SemanticType::Bool),
            SwiftOperator::Add | SwiftOperator::Subtract if self.catalog.is_numeric(&operand) => Some(operand),
            SwiftOperator::BitwiseNot if self.catalog.is_integer(&operand) => Some(operand),
            _ => None,
        }
    }

    /// Resolve a binary operator by its category.
    pub(in crate::frontend::resolver::check_expr) fn check_binary(
        &mut self,
        tree: &mut Tree,
        lhs: ExprId,
        op: SwiftOperator,
        rhs: ExprId,
    ) -> Option<SemanticType> {
        let lhs = self.check_expr(tree, lhs);
        let rhs = self.check_expr(tree, rhs);
        if is_error(&lhs) || is_error(&rhs) {
            return Some(SemanticType::ErrorType);
        }

        match op.category() {
            OperatorCategory::Arithmetic => match (lhs, rhs) {
                (Some(l), Some(r)) if l == r && self.catalog.is_numeric(&l) => Some(l),
                _ => None,
            },
            OperatorCategory::Comparison => Some(SemanticType::Bool),
            OperatorCategory::Logical => {
                let both_bool = lhs == Some(SemanticType::Bool) && rhs == Some(SemanticType::Bool);
                both_bool.then_some(SemanticType::Bool)
            }
            OperatorCategory::Bitwise if op != SwiftOperator::BitwiseNot => match (lhs, rhs) {
                (Some(l), Some(r)) if l == r && self.catalog.is_integer(&l) => Some(l),
                _ => None,
            },
            // The coalesced value takes the right-hand side's nullability.
            OperatorCategory::NullCoalesce => match (lhs, rhs) {
                (Some(l), Some(r)) if l.deep_unwrapped() == r.deep_unwrapped() => Some(r),
                _ => None,
            },
            OperatorCategory::Bitwise | OperatorCategory::Assignment | OperatorCategory::Range => None,
        }
    }

    /// Resolve `cond ? if_true : if_false`; mismatched branches are an error.
    pub(in crate::frontend::resolver::check_expr) fn check_ternary(
        &mut self,
        tree: &mut Tree,
        id: ExprId,
        cond: ExprId,
        if_true: ExprId,
        if_false: ExprId,
    ) -> Option<SemanticType> {
        let cond = self.check_expr(tree, cond);
        let if_true = self.check_expr(tree, if_true);
        let if_false = self.check_expr(tree, if_false);
        if is_error(&cond) || is_error(&if_true) || is_error(&if_false) {
            return Some(SemanticType::ErrorType);
        }

        if if_true == if_false {
            return if_true;
        }
        match (if_true, if_false) {
            (Some(if_true), Some(if_false)) => self.report(ResolveIssue::TernaryMismatch { if_true, if_false }, id),
            _ => tracing::trace!(node = id.index(), "ternary with one unresolved branch"),
        }
        Some(SemanticType::ErrorType)
    }
}
