//! Intrinsic bindings.
//!
//! An [`IntrinsicProvider`] supplies names that are in scope without being declared in the tree, such as the
//! implicit receiver of a method body or module-level globals.
//!
//! ## Notes
//!
//! - [`IntrinsicProvider::definition`] is consulted before any lexical scope, so intrinsics shadow locals of the same
//!   name.
//! - [`IntrinsicProvider::implicit_member`] is consulted after the lexical scopes, so a local shadows a bare property
//!   reference (`count` meaning `self.count`). [`MethodBodyIntrinsics`] binds those as [`Definition::Member`].

use std::collections::HashMap;

use retype_core::lang::conventions::{SELF_IDENTIFIER, SUPER_IDENTIFIER};
use retype_core::types::SemanticType;
use retype_syntax::ast::{CodeDefinition, Definition};

use crate::frontend::catalog::TypeCatalog;

/// Source of always-in-scope bindings.
pub trait IntrinsicProvider {
    /// Local-style definition for `name`, if the provider defines it.
    fn definition(&self, name: &str) -> Option<CodeDefinition>;

    /// Implicit member of the current receiver named `name`, for identifiers no scope declares.
    fn implicit_member(&self, _name: &str) -> Option<Definition> {
        None
    }
}

/// Provider with no intrinsics.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyIntrinsics;

impl IntrinsicProvider for EmptyIntrinsics {
    fn definition(&self, _name: &str) -> Option<CodeDefinition> {
        None
    }
}

/// Fixed set of named bindings (module globals, test fixtures).
#[derive(Debug, Clone, Default)]
pub struct GlobalIntrinsics {
    definitions: HashMap<String, CodeDefinition>,
}

impl GlobalIntrinsics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definition(mut self, name: impl Into<String>, ty: SemanticType) -> Self {
        let definition = CodeDefinition::new(name, ty);
        self.definitions.insert(definition.name.clone(), definition);
        self
    }
}

impl IntrinsicProvider for GlobalIntrinsics {
    fn definition(&self, name: &str) -> Option<CodeDefinition> {
        self.definitions.get(name).cloned()
    }
}

/// Intrinsics of a method body: `self`, `super` and bare instance-property references.
///
/// In a static (class) method `self` and `super` are metatypes and bare property references are not bound.
pub struct MethodBodyIntrinsics<'a> {
    catalog: &'a dyn TypeCatalog,
    type_name: String,
    is_static: bool,
}

impl<'a> MethodBodyIntrinsics<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, type_name: impl Into<String>, is_static: bool) -> Self {
        Self {
            catalog,
            type_name: type_name.into(),
            is_static,
        }
    }

    fn receiver_type(&self, type_name: &str) -> SemanticType {
        let ty = SemanticType::named(type_name);
        if self.is_static { SemanticType::metatype(ty) } else { ty }
    }
}

impl IntrinsicProvider for MethodBodyIntrinsics<'_> {
    fn definition(&self, name: &str) -> Option<CodeDefinition> {
        match name {
            SELF_IDENTIFIER => Some(CodeDefinition::new(name, self.receiver_type(&self.type_name))),
            SUPER_IDENTIFIER => {
                let supertype = self.catalog.known_type(&self.type_name)?.supertype_name.as_deref()?;
                Some(CodeDefinition::new(name, self.receiver_type(supertype)))
            }
            _ => None,
        }
    }

    fn implicit_member(&self, name: &str) -> Option<Definition> {
        if self.is_static {
            return None;
        }
        let ty = self.catalog.known_type(&self.type_name)?;
        let property = self.catalog.property(name, false, ty)?;
        Some(Definition::Member {
            owner: self.type_name.clone(),
            property: property.clone(),
        })
    }
}
