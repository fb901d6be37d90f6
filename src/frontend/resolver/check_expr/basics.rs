//! Resolve basic expressions (identifiers, constants, and casts).
//!
//! Identifier lookup searches, first match wins: the intrinsic provider, the scope chain outward from the
//! identifier, the provider's implicit members, then the catalog (a known type name is a metatype-valued
//! identifier).

use retype_core::types::SemanticType;
use retype_syntax::ast::{Constant, Definition, ExprId, NodeId};
use retype_syntax::tree::Tree;

use crate::frontend::diagnostics::ResolveIssue;

use super::ExpressionTypeResolver;

impl ExpressionTypeResolver<'_> {
    /// Resolve an identifier and record its binding.
    pub(in crate::frontend::resolver::check_expr) fn check_identifier(
        &mut self,
        tree: &mut Tree,
        id: ExprId,
        name: &str,
    ) -> Option<SemanticType> {
        let Some(definition) = self.search_definition(tree, id, name) else {
            tree.set_identifier_definition(id, None);
            self.report(ResolveIssue::UnknownIdentifier { name: name.to_string() }, id);
            return Some(SemanticType::ErrorType);
        };

        let ty = match &definition {
            Definition::Local(local) => local.ty.clone(),
            Definition::Type(type_name) => SemanticType::metatype(SemanticType::named(type_name.clone())),
            Definition::Member { property, .. } => property.ty.clone(),
        };
        tree.set_identifier_definition(id, Some(definition));
        Some(ty)
    }

    fn search_definition(&self, tree: &Tree, id: ExprId, name: &str) -> Option<Definition> {
        if let Some(intrinsic) = self.intrinsics.definition(name) {
            return Some(Definition::Local(intrinsic));
        }
        if let Some(local) = tree.definition_named(NodeId::Expr(id), name) {
            return Some(Definition::Local(local.clone()));
        }
        // Locals shadow bare member references.
        if let Some(member) = self.intrinsics.implicit_member(name) {
            return Some(member);
        }
        self.catalog
            .known_type(name)
            .map(|ty| Definition::Type(ty.type_name.clone()))
    }

    /// Map a literal to its fixed primitive type.
    pub(in crate::frontend::resolver::check_expr) fn check_constant(&self, constant: &Constant) -> SemanticType {
        match constant {
            Constant::Int(_) | Constant::Binary(_) | Constant::Octal(_) | Constant::Hexadecimal(_) => SemanticType::Int,
            Constant::Float(_) => SemanticType::Float,
            Constant::String(_) => SemanticType::String,
            Constant::Boolean(_) => SemanticType::Bool,
            Constant::Nil => SemanticType::optional(SemanticType::AnyObject),
            Constant::RawConstant(_) => SemanticType::Any,
        }
    }

    /// `exp as? ty`: a same-type cast always succeeds, any other cast may fail.
    pub(in crate::frontend::resolver::check_expr) fn check_cast(
        &mut self,
        tree: &mut Tree,
        exp: ExprId,
        target: SemanticType,
    ) -> Option<SemanticType> {
        let operand = self.check_expr(tree, exp);
        match operand {
            Some(ty) if ty.is_error() => Some(SemanticType::ErrorType),
            Some(ty) if ty == target => Some(target),
            _ => Some(SemanticType::optional(target)),
        }
    }
}
