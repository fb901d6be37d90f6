//! Resolve collection literals (`[a, b]` and `[k: v]`).
//!
//! A literal whose elements agree on one type becomes `Array<T>` / `Dictionary<K, V>`. Empty or heterogeneous
//! literals become the untyped `NSArray` / `NSDictionary` sentinels: ambiguous, not broken.

use retype_core::types::SemanticType;
use retype_syntax::ast::ExprId;
use retype_syntax::tree::Tree;

use super::{ExpressionTypeResolver, is_error};

impl ExpressionTypeResolver<'_> {
    pub(in crate::frontend::resolver::check_expr) fn check_array_literal(
        &mut self,
        tree: &mut Tree,
        items: &[ExprId],
    ) -> Option<SemanticType> {
        let types: Vec<Option<SemanticType>> = items.iter().map(|&item| self.check_expr(tree, item)).collect();
        if types.iter().any(is_error) {
            return Some(SemanticType::ErrorType);
        }

        let Some(Some(first)) = types.first() else {
            return Some(SemanticType::untyped_array());
        };
        if types.iter().all(|ty| ty.as_ref() == Some(first)) {
            Some(SemanticType::array(first.clone()))
        } else {
            Some(SemanticType::untyped_array())
        }
    }

    pub(in crate::frontend::resolver::check_expr) fn check_dictionary_literal(
        &mut self,
        tree: &mut Tree,
        pairs: &[(ExprId, ExprId)],
    ) -> Option<SemanticType> {
        let types: Vec<(Option<SemanticType>, Option<SemanticType>)> = pairs
            .iter()
            .map(|&(key, value)| (self.check_expr(tree, key), self.check_expr(tree, value)))
            .collect();
        if types.iter().any(|(key, value)| is_error(key) || is_error(value)) {
            return Some(SemanticType::ErrorType);
        }

        let Some((Some(first_key), Some(first_value))) = types.first() else {
            return Some(SemanticType::untyped_dictionary());
        };
        let uniform = types
            .iter()
            .all(|(key, value)| key.as_ref() == Some(first_key) && value.as_ref() == Some(first_value));
        if uniform {
            Some(SemanticType::dictionary(first_key.clone(), first_value.clone()))
        } else {
            Some(SemanticType::untyped_dictionary())
        }
    }
}
