//! Resolve function calls.
//!
//! Calls are resolved by the shape of their callee, against catalog entries matched by argument-label signature:
//!
//! - `Type.init(args)`: a constructor of `Type`, through its metatype.
//! - `Type(args)`: a constructor of `Type`, through an identifier naming it.
//! - `receiver.name(args)`: an instance method, or a static one when `receiver` is a metatype.
//!
//! ## Notes
//! - Constructors are never inherited; methods are looked up along the supertype chain.
//! - A resolved method call rewrites its callee's type to the method's invocable type (`(params) -> return`) and
//!   records the method on the callee.
//! - Calls through any other callee stay unresolved unless the callee or an argument failed.

use retype_core::known::{KnownConstructor, selector};
use retype_core::lang::conventions::{INIT_MEMBER, WILDCARD_LABEL};
use retype_core::types::SemanticType;
use retype_syntax::ast::{ExprId, ExprKind, FunctionArgument, MemberDefinition, PostfixOp};
use retype_syntax::tree::Tree;

use crate::frontend::diagnostics::ResolveIssue;

use super::{ExpressionTypeResolver, is_error};

impl<'a> ExpressionTypeResolver<'a> {
    /// Resolve `callee(arguments)`.
    pub(in crate::frontend::resolver::check_expr) fn check_call(
        &mut self,
        tree: &mut Tree,
        id: ExprId,
        callee: ExprId,
        arguments: &[FunctionArgument],
    ) -> Option<SemanticType> {
        let callee_ty = self.check_expr(tree, callee);
        let argument_types: Vec<Option<SemanticType>> =
            arguments.iter().map(|arg| self.check_expr(tree, arg.exp)).collect();
        if argument_types.iter().any(is_error) {
            return Some(SemanticType::ErrorType);
        }

        let labels: Vec<&str> = arguments
            .iter()
            .map(|arg| arg.label.as_deref().unwrap_or(WILDCARD_LABEL))
            .collect();

        match tree.kind(callee).clone() {
            ExprKind::Postfix {
                exp: receiver,
                op: PostfixOp::Member { name, .. },
            } => self.check_member_call(tree, id, callee, receiver, &name, &labels),
            ExprKind::Identifier { .. } => match callee_ty {
                Some(SemanticType::Metatype(instance)) => match self.find_constructor(id, &instance, &labels) {
                    Some(_) => Some(*instance),
                    None => Some(SemanticType::ErrorType),
                },
                Some(ty) if ty.is_error() => Some(SemanticType::ErrorType),
                _ => None,
            },
            _ if is_error(&callee_ty) => Some(SemanticType::ErrorType),
            _ => None,
        }
    }

    /// Resolve `receiver.name(labels...)` as a constructor or method call.
    ///
    /// The callee member itself may have failed property lookup; that failure is expected and does not make the
    /// call fail.
    fn check_member_call(
        &mut self,
        tree: &mut Tree,
        id: ExprId,
        callee: ExprId,
        receiver: ExprId,
        name: &str,
        labels: &[&str],
    ) -> Option<SemanticType> {
        let Some(receiver_ty) = tree.resolved_type(receiver).cloned() else {
            return Some(SemanticType::ErrorType);
        };
        if receiver_ty.is_error() {
            return Some(SemanticType::ErrorType);
        }

        if name == INIT_MEMBER {
            if let SemanticType::Metatype(instance) = &receiver_ty {
                let Some(constructor) = self.find_constructor(id, instance, labels) else {
                    return Some(SemanticType::ErrorType);
                };
                let parameters = constructor.parameters.iter().map(|p| p.ty.clone()).collect();
                let instance = instance.as_ref().clone();
                tree.set_resolved_type(callee, Some(SemanticType::function(parameters, instance.clone())));
                return Some(instance);
            }
        }

        // A property holding a block is called through its own type.
        if let Some(MemberDefinition::Property(property)) = tree.member_definition(callee) {
            if let SemanticType::Function(_, returns) = &property.ty {
                return Some(returns.as_ref().clone());
            }
        }

        let is_static = receiver_ty.is_metatype();
        let Some(known) = self.find_type(&receiver_ty) else {
            self.report(ResolveIssue::UnknownType { ty: receiver_ty }, id);
            return Some(SemanticType::ErrorType);
        };

        let catalog = self.catalog;
        match catalog.method(name, labels, is_static, known) {
            Some(method) => {
                tree.set_member_definition(callee, Some(MemberDefinition::Method(method.clone())));
                tree.set_resolved_type(callee, Some(method.signature.closure_type()));
                Some(method.signature.return_type.clone())
            }
            None => {
                self.report(
                    ResolveIssue::NoMatchingMethod {
                        owner: known.type_name.clone(),
                        selector: selector(name, labels),
                        is_static,
                    },
                    id,
                );
                Some(SemanticType::ErrorType)
            }
        }
    }

    /// Find the constructor of `instance` matching `labels`, reporting against `call` when there is none.
    fn find_constructor(
        &mut self,
        call: ExprId,
        instance: &SemanticType,
        labels: &[&str],
    ) -> Option<&'a KnownConstructor> {
        let Some(known) = self.find_type(instance) else {
            self.report(ResolveIssue::UnknownType { ty: instance.clone() }, call);
            return None;
        };

        let catalog = self.catalog;
        let constructor = catalog.constructor(labels, known);
        if constructor.is_none() {
            self.report(
                ResolveIssue::NoMatchingConstructor {
                    type_name: known.type_name.clone(),
                    selector: selector(INIT_MEMBER, labels),
                },
                call,
            );
        }
        constructor
    }
}
