//! Pre-order traversal over a [`Tree`].
//!
//! Yields a node before any of its descendants and siblings in source order. Statements and expressions are
//! interleaved: an `if` yields its condition expression (and that expression's subtree) before its body.

use crate::ast::NodeId;
use crate::tree::Tree;

/// Iterator over every node reachable from a root.
pub struct NodeSequence<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> NodeSequence<'a> {
    pub(crate) fn new(tree: &'a Tree, root: NodeId) -> Self {
        let stack = if tree.contains(root) { vec![root] } else { Vec::new() };
        Self { tree, stack }
    }
}

impl Iterator for NodeSequence<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack.extend(self.tree.children(node).into_iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use retype_core::lang::operators::SwiftOperator;

    use crate::ast::{Constant, NodeId};
    use crate::tree::Tree;

    #[test]
    fn test_pre_order_source_order() {
        let mut tree = Tree::new();
        let a = tree.identifier("a");
        let b = tree.identifier("b");
        let cond = tree.binary(a, SwiftOperator::LessThan, b);
        let one = tree.constant(Constant::Int(1));
        let then_stmt = tree.expressions(vec![one]);
        let body = tree.compound(vec![then_stmt]);
        let if_stmt = tree.if_stmt(cond, body, None);
        let root = tree.compound(vec![if_stmt]);

        let order: Vec<NodeId> = tree.nodes(NodeId::Stmt(root)).collect();
        assert_eq!(
            order,
            vec![
                NodeId::Stmt(root),
                NodeId::Stmt(if_stmt),
                NodeId::Expr(cond),
                NodeId::Expr(a),
                NodeId::Expr(b),
                NodeId::Stmt(body),
                NodeId::Stmt(then_stmt),
                NodeId::Expr(one),
            ]
        );
    }

    #[test]
    fn test_subtree_only() {
        let mut tree = Tree::new();
        let a = tree.identifier("a");
        let member = tree.member(a, "count");
        let _unrelated = tree.identifier("z");

        let order: Vec<NodeId> = tree.nodes(NodeId::Expr(member)).collect();
        assert_eq!(order, vec![NodeId::Expr(member), NodeId::Expr(a)]);
    }
}
