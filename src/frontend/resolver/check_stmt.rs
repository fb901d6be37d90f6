//! Statement visiting: scope population and expression dispatch.
//!
//! Statements have no type of their own. Visiting one resolves the expressions it holds and records the names it
//! declares (variables, loop variables) in the nearest enclosing scope, so later siblings and nested blocks see them.

use retype_core::lang::types::collections::{self, CollectionTypeId};
use retype_core::types::SemanticType;
use retype_syntax::ast::{CodeDefinition, ExprId, NodeId, Pattern, StmtId, StmtKind, VariableDeclaration};
use retype_syntax::tree::Tree;

use crate::frontend::diagnostics::ResolveIssue;

use super::ExpressionTypeResolver;

impl ExpressionTypeResolver<'_> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Visit a statement and everything under it, in source order.
    pub(crate) fn check_stmt(&mut self, tree: &mut Tree, id: StmtId) {
        // Child ids are copied out so the tree can be mutated while visiting them.
        match tree.stmt(id).kind.clone() {
            StmtKind::Compound(statements) => {
                for statement in statements {
                    self.check_stmt(tree, statement);
                }
            }
            StmtKind::If { exp, body, else_body } => {
                self.check_expr(tree, exp);
                self.check_stmt(tree, body);
                if let Some(else_body) = else_body {
                    self.check_stmt(tree, else_body);
                }
            }
            StmtKind::While { exp, body } => {
                self.check_expr(tree, exp);
                self.check_stmt(tree, body);
            }
            StmtKind::For { pattern, exp, body } => self.check_for(tree, id, &pattern, exp, body),
            StmtKind::VariableDeclarations(declarations) => self.check_variable_declarations(tree, id, &declarations),
            StmtKind::Expressions(exps) => {
                for exp in exps {
                    self.check_expr(tree, exp);
                }
            }
            StmtKind::Return(exp) => {
                if let Some(exp) = exp {
                    self.check_expr(tree, exp);
                }
            }
            StmtKind::Break | StmtKind::Continue => {}
        }
    }

    /// `for pattern in exp { body }`
    ///
    /// The loop variable is bound before the body is visited, typed with the element type of the iterated value. It
    /// goes into the body's scope when the body is a block, and into the loop's own scope otherwise.
    fn check_for(&mut self, tree: &mut Tree, id: StmtId, pattern: &Pattern, exp: ExprId, body: StmtId) {
        let iterated = self.check_expr(tree, exp);
        let element = self.element_type(id, iterated);

        match pattern {
            Pattern::Identifier(name) => {
                let scope = if tree.stmt(body).scope().is_some() { body } else { id };
                tree.record_definition(scope, CodeDefinition::new(name.clone(), element));
            }
            // `_` binds nothing.
            Pattern::Wildcard => {}
            Pattern::Tuple(_) => self.report(
                ResolveIssue::UnsupportedLoopPattern {
                    pattern: pattern.to_string(),
                },
                id,
            ),
        }

        self.check_stmt(tree, body);
    }

    /// Element type of a for-in iteration over a value of type `iterated`.
    fn element_type(&mut self, id: StmtId, iterated: Option<SemanticType>) -> SemanticType {
        let Some(iterated) = iterated else {
            return SemanticType::ErrorType;
        };
        if let Some(element) = iterated.array_element() {
            return element.clone();
        }
        if let SemanticType::Named(name) = &iterated {
            if self.catalog.is_subtype(name, collections::as_str(CollectionTypeId::LegacyArray)) {
                return SemanticType::AnyObject;
            }
        }
        if !iterated.is_error() {
            self.report(ResolveIssue::NotIterable { ty: iterated }, id);
        }
        SemanticType::ErrorType
    }

    /// Record every declared name with its declared type, then resolve the initializers.
    fn check_variable_declarations(&mut self, tree: &mut Tree, id: StmtId, declarations: &[VariableDeclaration]) {
        match tree.nearest_scope(NodeId::Stmt(id)) {
            Some(scope) => {
                for declaration in declarations {
                    let definition = CodeDefinition::new(declaration.identifier.clone(), declaration.ty.clone());
                    tree.record_definition(scope, definition);
                }
            }
            None => tracing::trace!(stmt = id.index(), "variable declarations have no enclosing scope"),
        }

        for declaration in declarations {
            if let Some(initialization) = declaration.initialization {
                self.check_expr(tree, initialization);
            }
        }
    }
}
