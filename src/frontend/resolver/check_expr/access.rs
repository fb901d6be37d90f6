//! Resolve postfix access: subscripts, member access and optional chaining.
//!
//! These helpers handle `xs[i]`, `obj.member`, `Type.self` and `obj?`, resolving members against the catalog entry
//! of the receiver's type. A metatype receiver looks up static members, any other receiver instance members.
//!
//! ## Notes
//! - A member access that is the callee of a call (`obj.method(...)`) is expected to fail property lookup; the call
//!   resolves it as a method instead, so no diagnostic is reported for it here.
//! - `obj?` yields `obj`'s type with one level of optional removed. The outermost postfix of a chain that contains an
//!   optional link wraps its (non-error) result in an optional, so `a?.b.c()` has type `C?`.

use retype_core::lang::conventions::SELF_MEMBER;
use retype_core::lang::types::collections::{self, CollectionTypeId};
use retype_core::types::SemanticType;
use retype_syntax::ast::{ExprId, ExprKind, MemberDefinition, PostfixOp};
use retype_syntax::tree::Tree;

use crate::frontend::diagnostics::ResolveIssue;

use super::{ExpressionTypeResolver, is_error};

impl ExpressionTypeResolver<'_> {
    /// Resolve a postfix expression by its operator payload.
    pub(in crate::frontend::resolver::check_expr) fn check_postfix(
        &mut self,
        tree: &mut Tree,
        id: ExprId,
        exp: ExprId,
        op: PostfixOp,
    ) -> Option<SemanticType> {
        let ty = match op {
            PostfixOp::Subscript(index) => self.check_subscript(tree, id, exp, index),
            PostfixOp::FunctionCall(arguments) => self.check_call(tree, id, exp, &arguments),
            PostfixOp::Member { name, .. } => self.check_member(tree, id, exp, &name),
            PostfixOp::OptionalChain => self.check_optional_chain(tree, exp),
        };

        match ty {
            Some(ty) if !ty.is_error() && !ty.is_optional() && closes_optional_chain(tree, id) => {
                Some(SemanticType::optional(ty))
            }
            other => other,
        }
    }

    /// Resolve `receiver[index]`.
    fn check_subscript(&mut self, tree: &mut Tree, id: ExprId, exp: ExprId, index: ExprId) -> Option<SemanticType> {
        let receiver = self.check_expr(tree, exp);
        let index = self.check_expr(tree, index);
        if is_error(&receiver) || is_error(&index) {
            return Some(SemanticType::ErrorType);
        }
        let receiver = receiver?;

        if let Some(element) = receiver.array_element() {
            return self.integer_subscript(id, &receiver, index, element.clone());
        }
        if let Some((_, value)) = receiver.dictionary_entry() {
            // Dictionary lookups may miss, whatever the key.
            return Some(SemanticType::optional(value.clone()));
        }
        if let SemanticType::Named(name) = &receiver {
            if self.catalog.is_subtype(name, collections::as_str(CollectionTypeId::LegacyArray)) {
                return self.integer_subscript(id, &receiver, index, SemanticType::AnyObject);
            }
            if self.catalog.is_subtype(name, collections::as_str(CollectionTypeId::LegacyDictionary)) {
                return Some(SemanticType::optional(SemanticType::AnyObject));
            }
        }
        None
    }

    /// Array-like subscripts take an `Int` index.
    fn integer_subscript(
        &mut self,
        id: ExprId,
        receiver: &SemanticType,
        index: Option<SemanticType>,
        element: SemanticType,
    ) -> Option<SemanticType> {
        match index {
            Some(SemanticType::Int) => Some(element),
            Some(index) => {
                self.report(
                    ResolveIssue::NonIntegerSubscript {
                        receiver: receiver.clone(),
                        index,
                    },
                    id,
                );
                Some(SemanticType::ErrorType)
            }
            None => None,
        }
    }

    /// Resolve `receiver.name` as a property (or `.self`).
    fn check_member(&mut self, tree: &mut Tree, id: ExprId, exp: ExprId, name: &str) -> Option<SemanticType> {
        tree.set_member_definition(id, None);

        let receiver = self.check_expr(tree, exp);
        if is_error(&receiver) {
            return Some(SemanticType::ErrorType);
        }
        // `Type.self`, `Type.self.self`, ...: the receiver's own type.
        if name == SELF_MEMBER {
            return receiver;
        }
        let Some(receiver) = receiver else {
            return Some(SemanticType::ErrorType);
        };

        let is_callee = tree.is_call_callee(id);
        let is_static = receiver.is_metatype();
        let Some(known) = self.find_type(&receiver) else {
            if !is_callee {
                self.report(ResolveIssue::UnknownType { ty: receiver }, id);
            }
            return Some(SemanticType::ErrorType);
        };

        let catalog = self.catalog;
        match catalog.property(name, is_static, known) {
            Some(property) => {
                tree.set_member_definition(id, Some(MemberDefinition::Property(property.clone())));
                Some(property.ty.clone())
            }
            None => {
                if !is_callee {
                    self.report(
                        ResolveIssue::UnknownMember {
                            owner: known.type_name.clone(),
                            name: name.to_string(),
                            is_static,
                        },
                        id,
                    );
                }
                Some(SemanticType::ErrorType)
            }
        }
    }

    /// Resolve `receiver?`: one level of optional removed.
    fn check_optional_chain(&mut self, tree: &mut Tree, exp: ExprId) -> Option<SemanticType> {
        let receiver = self.check_expr(tree, exp)?;
        if receiver.is_error() {
            return Some(SemanticType::ErrorType);
        }
        Some(receiver.unwrapped().clone())
    }
}

/// Whether `id` is the outermost postfix of a chain with an optional link.
fn closes_optional_chain(tree: &Tree, id: ExprId) -> bool {
    if tree.is_postfix_receiver(id) {
        return false;
    }
    let mut current = id;
    while let ExprKind::Postfix { exp, op } = tree.kind(current) {
        if matches!(op, PostfixOp::OptionalChain) {
            return true;
        }
        current = *exp;
    }
    false
}
