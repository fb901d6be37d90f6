//! Arena-backed expression/statement tree.
//!
//! [`Tree`] owns every node of a translation unit. Nodes are created through the constructor methods, which adopt
//! their children (setting each child's parent handle), and are addressed by [`ExprId`] / [`StmtId`].
//!
//! ## Notes
//!
//! - **Ownership is downward**: a node's kind holds its children's ids. The parent handle is never used for
//!   ownership, only for upward lookups ([`Tree::nearest_scope`], [`Tree::definition_named`]) and in-place edits.
//! - **Adoption**: constructors re-parent the children they are given. Passing a child that is still attached
//!   elsewhere leaves the old parent's slot stale; use [`Tree::replace_expr`] or [`Tree::wrap_expr`] to edit an
//!   attached tree.
//! - **Scopes**: every compound statement and every for-in loop owns a [`Scope`]. Other statement kinds have none.
//!   The loop's scope sits between its body and the enclosing block, so a loop variable never escapes the loop.
//! - Replaced nodes stay in the arena as detached orphans; they are unreachable from the root.
//!
//! ## Examples
//! ```rust
//! use retype_core::lang::operators::SwiftOperator;
//! use retype_syntax::ast::{Constant, NodeId};
//! use retype_syntax::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let one = tree.constant(Constant::Int(1));
//! let x = tree.identifier("x");
//! let sum = tree.binary(x, SwiftOperator::Add, one);
//! let stmt = tree.expressions(vec![sum]);
//! let body = tree.compound(vec![stmt]);
//!
//! assert_eq!(tree.parent(NodeId::Expr(one)), Some(NodeId::Expr(sum)));
//! assert_eq!(tree.nearest_scope(NodeId::Expr(x)), Some(body));
//! ```

use miette::Diagnostic;
use thiserror::Error;

use retype_core::lang::operators::SwiftOperator;
use retype_core::types::SemanticType;

use crate::ast::*;
use crate::traverse::NodeSequence;

/// Errors raised by structural tree edits.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TreeError {
    #[error("{0} does not exist in this tree")]
    #[diagnostic(code(retype::tree::unknown_node))]
    UnknownNode(NodeId),

    #[error("{0} has no parent, so it cannot be replaced in place")]
    #[diagnostic(
        code(retype::tree::detached),
        help("only attached expressions can be replaced; attach the node to a parent first")
    )]
    Detached(NodeId),

    #[error("{0} is already attached to a parent")]
    #[diagnostic(
        code(retype::tree::already_attached),
        help("a node has exactly one parent; use `wrap_expr` to wrap an attached node")
    )]
    AlreadyAttached(NodeId),

    #[error("{child} is not a child of its recorded parent {parent}")]
    #[diagnostic(code(retype::tree::corrupt_parent))]
    CorruptParent { child: NodeId, parent: NodeId },
}

/// Arena of expression and statement nodes.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    exprs: Vec<ExprNode>,
    stmts: Vec<StmtNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        match node {
            NodeId::Expr(id) => id.index() < self.exprs.len(),
            NodeId::Stmt(id) => id.index() < self.stmts.len(),
        }
    }

    // ========================================================================
    // Node access
    // ========================================================================

    pub fn get_expr(&self, id: ExprId) -> Option<&ExprNode> {
        self.exprs.get(id.index())
    }

    pub fn get_stmt(&self, id: StmtId) -> Option<&StmtNode> {
        self.stmts.get(id.index())
    }

    /// Expression node by handle.
    ///
    /// Handles are only minted by this tree, so an out-of-range handle is a caller bug.
    pub fn expr(&self, id: ExprId) -> &ExprNode {
        self.exprs
            .get(id.index())
            .expect("INVARIANT: expression handles are minted by this tree")
    }

    pub fn expr_mut(&mut self, id: ExprId) -> &mut ExprNode {
        self.exprs
            .get_mut(id.index())
            .expect("INVARIANT: expression handles are minted by this tree")
    }

    pub fn stmt(&self, id: StmtId) -> &StmtNode {
        self.stmts
            .get(id.index())
            .expect("INVARIANT: statement handles are minted by this tree")
    }

    pub fn stmt_mut(&mut self, id: StmtId) -> &mut StmtNode {
        self.stmts
            .get_mut(id.index())
            .expect("INVARIANT: statement handles are minted by this tree")
    }

    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.expr(id).kind
    }

    pub fn resolved_type(&self, id: ExprId) -> Option<&SemanticType> {
        self.expr(id).resolved_type.as_ref()
    }

    pub fn set_resolved_type(&mut self, id: ExprId, ty: Option<SemanticType>) {
        self.expr_mut(id).resolved_type = ty;
    }

    pub fn is_error_typed(&self, id: ExprId) -> bool {
        self.expr(id).is_error_typed()
    }

    /// Binding recorded on an identifier expression (always `None` for other kinds).
    pub fn identifier_definition(&self, id: ExprId) -> Option<&Definition> {
        match &self.expr(id).kind {
            ExprKind::Identifier { definition, .. } => definition.as_ref(),
            _ => None,
        }
    }

    pub fn set_identifier_definition(&mut self, id: ExprId, value: Option<Definition>) {
        if let ExprKind::Identifier { definition, .. } = &mut self.expr_mut(id).kind {
            *definition = value;
        }
    }

    /// Catalog member recorded on a member-access postfix (always `None` for other kinds).
    pub fn member_definition(&self, id: ExprId) -> Option<&MemberDefinition> {
        match &self.expr(id).kind {
            ExprKind::Postfix {
                op: PostfixOp::Member { definition, .. },
                ..
            } => definition.as_ref(),
            _ => None,
        }
    }

    pub fn set_member_definition(&mut self, id: ExprId, value: Option<MemberDefinition>) {
        if let ExprKind::Postfix {
            op: PostfixOp::Member { definition, .. },
            ..
        } = &mut self.expr_mut(id).kind
        {
            *definition = value;
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        match node {
            NodeId::Expr(id) => self.expr(id).parent,
            NodeId::Stmt(id) => self.stmt(id).parent.map(NodeId::Stmt),
        }
    }

    /// Parent of an expression, if that parent is itself an expression.
    pub fn parent_expr(&self, id: ExprId) -> Option<ExprId> {
        match self.expr(id).parent {
            Some(NodeId::Expr(parent)) => Some(parent),
            _ => None,
        }
    }

    /// Whether `id` is the callee of a function-call postfix (`id(...)`).
    pub fn is_call_callee(&self, id: ExprId) -> bool {
        self.parent_expr(id).is_some_and(|parent| {
            matches!(
                &self.expr(parent).kind,
                ExprKind::Postfix { exp, op: PostfixOp::FunctionCall(_) } if *exp == id
            )
        })
    }

    /// Whether `id` is the receiver of another postfix (`id.x`, `id[i]`, `id(...)`, `id?`).
    pub fn is_postfix_receiver(&self, id: ExprId) -> bool {
        self.parent_expr(id).is_some_and(|parent| {
            matches!(&self.expr(parent).kind, ExprKind::Postfix { exp, .. } if *exp == id)
        })
    }

    /// Walk up from `node` (inclusive) to the first scope-bearing statement.
    pub fn nearest_scope(&self, node: NodeId) -> Option<StmtId> {
        let mut current = Some(node);
        while let Some(node) = current {
            if let NodeId::Stmt(id) = node {
                if self.stmt(id).scope.is_some() {
                    return Some(id);
                }
            }
            current = self.parent(node);
        }
        None
    }

    /// Look `name` up in the nearest scope, then in each enclosing scope outward.
    pub fn definition_named(&self, from: NodeId, name: &str) -> Option<&CodeDefinition> {
        let mut scope = self.nearest_scope(from);
        while let Some(id) = scope {
            let node = self.stmt(id);
            if let Some(definition) = node.scope.as_ref().and_then(|s| s.definition(name)) {
                return Some(definition);
            }
            scope = node.parent.and_then(|parent| self.nearest_scope(NodeId::Stmt(parent)));
        }
        None
    }

    pub fn scope_mut(&mut self, id: StmtId) -> Option<&mut Scope> {
        self.stmt_mut(id).scope.as_mut()
    }

    /// Record `definition` in the scope owned by `id`. Returns `false` if `id` owns no scope.
    pub fn record_definition(&mut self, id: StmtId, definition: CodeDefinition) -> bool {
        match self.scope_mut(id) {
            Some(scope) => {
                scope.record_definition(definition);
                true
            }
            None => false,
        }
    }

    /// Pre-order sequence of every node reachable from `root` (statements and expressions).
    pub fn nodes(&self, root: NodeId) -> NodeSequence<'_> {
        NodeSequence::new(self, root)
    }

    /// Direct children of a node, in source order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        match node {
            NodeId::Expr(id) => expr_children(&self.expr(id).kind)
                .into_iter()
                .map(NodeId::Expr)
                .collect(),
            NodeId::Stmt(id) => stmt_children(&self.stmt(id).kind),
        }
    }

    /// Direct sub-expressions of an expression, in source order.
    pub fn sub_expressions(&self, id: ExprId) -> Vec<ExprId> {
        expr_children(&self.expr(id).kind)
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Replace the attached expression `old` with the detached expression `new`.
    ///
    /// The parent's slot is rewired to `new`, `new` takes over `old`'s parent and `old` becomes detached.
    pub fn replace_expr(&mut self, old: ExprId, new: ExprId) -> Result<(), TreeError> {
        self.check(NodeId::Expr(old))?;
        self.check(NodeId::Expr(new))?;
        if old == new {
            return Ok(());
        }
        if self.expr(new).parent.is_some() {
            return Err(TreeError::AlreadyAttached(NodeId::Expr(new)));
        }
        let parent = self.expr(old).parent.ok_or(TreeError::Detached(NodeId::Expr(old)))?;
        self.rewire(parent, old, new)
    }

    /// Wrap the attached expression `old` in a new node built by `build`, keeping its position in the tree.
    ///
    /// `build` receives `old` (already detached) and returns the wrapper, which typically adopts `old`.
    pub fn wrap_expr(
        &mut self,
        old: ExprId,
        build: impl FnOnce(&mut Tree, ExprId) -> ExprId,
    ) -> Result<ExprId, TreeError> {
        self.check(NodeId::Expr(old))?;
        let parent = self.expr(old).parent.ok_or(TreeError::Detached(NodeId::Expr(old)))?;
        self.expr_mut(old).parent = None;
        let new = build(self, old);
        self.check(NodeId::Expr(new))?;
        self.rewire(parent, old, new)?;
        Ok(new)
    }

    fn check(&self, node: NodeId) -> Result<(), TreeError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(node))
        }
    }

    fn rewire(&mut self, parent: NodeId, old: ExprId, new: ExprId) -> Result<(), TreeError> {
        let replaced = match parent {
            NodeId::Expr(id) => replace_in_expr(&mut self.expr_mut(id).kind, old, new),
            NodeId::Stmt(id) => replace_in_stmt(&mut self.stmt_mut(id).kind, old, new),
        };
        if !replaced {
            return Err(TreeError::CorruptParent {
                child: NodeId::Expr(old),
                parent,
            });
        }
        // `old` may have been adopted by `new` (see `wrap_expr`); only clear a link that still points at `parent`.
        if self.expr(old).parent == Some(parent) {
            self.expr_mut(old).parent = None;
        }
        self.expr_mut(new).parent = Some(parent);
        tracing::trace!(%parent, old = %NodeId::Expr(old), new = %NodeId::Expr(new), "replaced expression");
        Ok(())
    }

    // ========================================================================
    // Expression constructors
    // ========================================================================

    fn push_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId(u32::try_from(self.exprs.len()).expect("INVARIANT: fewer than u32::MAX expressions"));
        let children = expr_children(&kind);
        self.exprs.push(ExprNode {
            kind,
            resolved_type: None,
            parent: None,
        });
        for child in children {
            self.expr_mut(child).parent = Some(NodeId::Expr(id));
        }
        id
    }

    pub fn identifier(&mut self, name: impl Into<String>) -> ExprId {
        self.push_expr(ExprKind::Identifier {
            name: name.into(),
            definition: None,
        })
    }

    pub fn constant(&mut self, constant: Constant) -> ExprId {
        self.push_expr(ExprKind::Constant(constant))
    }

    pub fn prefix(&mut self, op: SwiftOperator, exp: ExprId) -> ExprId {
        self.push_expr(ExprKind::Prefix { op, exp })
    }

    pub fn unary(&mut self, op: SwiftOperator, exp: ExprId) -> ExprId {
        self.push_expr(ExprKind::Unary { op, exp })
    }

    pub fn binary(&mut self, lhs: ExprId, op: SwiftOperator, rhs: ExprId) -> ExprId {
        self.push_expr(ExprKind::Binary { lhs, op, rhs })
    }

    pub fn assignment(&mut self, lhs: ExprId, op: SwiftOperator, rhs: ExprId) -> ExprId {
        self.push_expr(ExprKind::Assignment { lhs, op, rhs })
    }

    pub fn cast(&mut self, exp: ExprId, ty: SemanticType) -> ExprId {
        self.push_expr(ExprKind::Cast { exp, ty })
    }

    pub fn ternary(&mut self, cond: ExprId, if_true: ExprId, if_false: ExprId) -> ExprId {
        self.push_expr(ExprKind::Ternary { cond, if_true, if_false })
    }

    pub fn parens(&mut self, exp: ExprId) -> ExprId {
        self.push_expr(ExprKind::Parens(exp))
    }

    pub fn array_literal(&mut self, items: Vec<ExprId>) -> ExprId {
        self.push_expr(ExprKind::ArrayLiteral(items))
    }

    pub fn dictionary_literal(&mut self, pairs: Vec<(ExprId, ExprId)>) -> ExprId {
        self.push_expr(ExprKind::DictionaryLiteral(pairs))
    }

    pub fn postfix(&mut self, exp: ExprId, op: PostfixOp) -> ExprId {
        self.push_expr(ExprKind::Postfix { exp, op })
    }

    /// `exp.name`
    pub fn member(&mut self, exp: ExprId, name: impl Into<String>) -> ExprId {
        self.postfix(exp, PostfixOp::member(name))
    }

    /// `exp[index]`
    pub fn subscript(&mut self, exp: ExprId, index: ExprId) -> ExprId {
        self.postfix(exp, PostfixOp::Subscript(index))
    }

    /// `exp(arguments...)`
    pub fn call(&mut self, exp: ExprId, arguments: Vec<FunctionArgument>) -> ExprId {
        self.postfix(exp, PostfixOp::FunctionCall(arguments))
    }

    /// `exp?`
    pub fn optional_chain(&mut self, exp: ExprId) -> ExprId {
        self.postfix(exp, PostfixOp::OptionalChain)
    }

    // ========================================================================
    // Statement constructors
    // ========================================================================

    fn push_stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId(u32::try_from(self.stmts.len()).expect("INVARIANT: fewer than u32::MAX statements"));
        let children = stmt_children(&kind);
        let scope = matches!(kind, StmtKind::Compound(_) | StmtKind::For { .. }).then(Scope::default);
        self.stmts.push(StmtNode {
            kind,
            parent: None,
            scope,
        });
        for child in children {
            match child {
                NodeId::Expr(child) => self.expr_mut(child).parent = Some(NodeId::Stmt(id)),
                NodeId::Stmt(child) => self.stmt_mut(child).parent = Some(id),
            }
        }
        id
    }

    pub fn compound(&mut self, statements: Vec<StmtId>) -> StmtId {
        self.push_stmt(StmtKind::Compound(statements))
    }

    pub fn if_stmt(&mut self, exp: ExprId, body: StmtId, else_body: Option<StmtId>) -> StmtId {
        self.push_stmt(StmtKind::If { exp, body, else_body })
    }

    pub fn while_stmt(&mut self, exp: ExprId, body: StmtId) -> StmtId {
        self.push_stmt(StmtKind::While { exp, body })
    }

    pub fn for_in(&mut self, pattern: Pattern, exp: ExprId, body: StmtId) -> StmtId {
        self.push_stmt(StmtKind::For { pattern, exp, body })
    }

    pub fn variable_declarations(&mut self, declarations: Vec<VariableDeclaration>) -> StmtId {
        self.push_stmt(StmtKind::VariableDeclarations(declarations))
    }

    pub fn expressions(&mut self, exps: Vec<ExprId>) -> StmtId {
        self.push_stmt(StmtKind::Expressions(exps))
    }

    pub fn return_stmt(&mut self, exp: Option<ExprId>) -> StmtId {
        self.push_stmt(StmtKind::Return(exp))
    }

    pub fn break_stmt(&mut self) -> StmtId {
        self.push_stmt(StmtKind::Break)
    }

    pub fn continue_stmt(&mut self) -> StmtId {
        self.push_stmt(StmtKind::Continue)
    }
}

fn expr_children(kind: &ExprKind) -> Vec<ExprId> {
    match kind {
        ExprKind::Identifier { .. } | ExprKind::Constant(_) => Vec::new(),
        ExprKind::Prefix { exp, .. } | ExprKind::Unary { exp, .. } | ExprKind::Cast { exp, .. } => vec![*exp],
        ExprKind::Parens(exp) => vec![*exp],
        ExprKind::Binary { lhs, rhs, .. } | ExprKind::Assignment { lhs, rhs, .. } => vec![*lhs, *rhs],
        ExprKind::Ternary { cond, if_true, if_false } => vec![*cond, *if_true, *if_false],
        ExprKind::ArrayLiteral(items) => items.clone(),
        ExprKind::DictionaryLiteral(pairs) => pairs.iter().flat_map(|(k, v)| [*k, *v]).collect(),
        ExprKind::Postfix { exp, op } => {
            let mut children = vec![*exp];
            match op {
                PostfixOp::Subscript(index) => children.push(*index),
                PostfixOp::FunctionCall(arguments) => children.extend(arguments.iter().map(|a| a.exp)),
                PostfixOp::Member { .. } | PostfixOp::OptionalChain => {}
            }
            children
        }
    }
}

fn stmt_children(kind: &StmtKind) -> Vec<NodeId> {
    match kind {
        StmtKind::Compound(statements) => statements.iter().copied().map(NodeId::Stmt).collect(),
        StmtKind::If { exp, body, else_body } => {
            let mut children = vec![NodeId::Expr(*exp), NodeId::Stmt(*body)];
            children.extend(else_body.map(NodeId::Stmt));
            children
        }
        StmtKind::While { exp, body } | StmtKind::For { exp, body, .. } => {
            vec![NodeId::Expr(*exp), NodeId::Stmt(*body)]
        }
        StmtKind::VariableDeclarations(declarations) => declarations
            .iter()
            .filter_map(|d| d.initialization)
            .map(NodeId::Expr)
            .collect(),
        StmtKind::Expressions(exps) => exps.iter().copied().map(NodeId::Expr).collect(),
        StmtKind::Return(exp) => exp.iter().copied().map(NodeId::Expr).collect(),
        StmtKind::Break | StmtKind::Continue => Vec::new(),
    }
}

fn swap_slot(slot: &mut ExprId, old: ExprId, new: ExprId) -> bool {
    if *slot == old {
        *slot = new;
        true
    } else {
        false
    }
}

fn replace_in_expr(kind: &mut ExprKind, old: ExprId, new: ExprId) -> bool {
    match kind {
        ExprKind::Identifier { .. } | ExprKind::Constant(_) => false,
        ExprKind::Prefix { exp, .. } | ExprKind::Unary { exp, .. } | ExprKind::Cast { exp, .. } => {
            swap_slot(exp, old, new)
        }
        ExprKind::Parens(exp) => swap_slot(exp, old, new),
        ExprKind::Binary { lhs, rhs, .. } | ExprKind::Assignment { lhs, rhs, .. } => {
            swap_slot(lhs, old, new) || swap_slot(rhs, old, new)
        }
        ExprKind::Ternary { cond, if_true, if_false } => {
            swap_slot(cond, old, new) || swap_slot(if_true, old, new) || swap_slot(if_false, old, new)
        }
        ExprKind::ArrayLiteral(items) => items.iter_mut().any(|item| swap_slot(item, old, new)),
        ExprKind::DictionaryLiteral(pairs) => pairs
            .iter_mut()
            .any(|(k, v)| swap_slot(k, old, new) || swap_slot(v, old, new)),
        ExprKind::Postfix { exp, op } => {
            swap_slot(exp, old, new)
                || match op {
                    PostfixOp::Subscript(index) => swap_slot(index, old, new),
                    PostfixOp::FunctionCall(arguments) => {
                        arguments.iter_mut().any(|a| swap_slot(&mut a.exp, old, new))
                    }
                    PostfixOp::Member { .. } | PostfixOp::OptionalChain => false,
                }
        }
    }
}

fn replace_in_stmt(kind: &mut StmtKind, old: ExprId, new: ExprId) -> bool {
    match kind {
        StmtKind::If { exp, .. } | StmtKind::While { exp, .. } | StmtKind::For { exp, .. } => {
            swap_slot(exp, old, new)
        }
        StmtKind::VariableDeclarations(declarations) => declarations
            .iter_mut()
            .filter_map(|d| d.initialization.as_mut())
            .any(|slot| swap_slot(slot, old, new)),
        StmtKind::Expressions(exps) => exps.iter_mut().any(|slot| swap_slot(slot, old, new)),
        StmtKind::Return(exp) => exp.as_mut().is_some_and(|slot| swap_slot(slot, old, new)),
        StmtKind::Compound(_) | StmtKind::Break | StmtKind::Continue => false,
    }
}
