//! Declared-type catalog.
//!
//! The catalog answers the questions the resolver asks about named types: does this type exist, is it a subtype of
//! that one, is it numeric, and which property/method/constructor does a member access or call refer to.
//!
//! ## Notes
//!
//! - [`TypeCatalog`] is the read-only query interface the resolver consumes. Only [`TypeCatalog::known_type`] must be
//!   implemented; the remaining queries have default implementations in terms of it.
//! - Property and method lookups walk the supertype chain (own members first). Constructors are **not** inherited:
//!   only the type's own constructors are considered.
//! - Supertype walks stop at the first name the catalog does not know and guard against cyclic declarations.
//! - [`KnownTypeCatalog`] is the standard implementation: a name-keyed map populated from JSON documents, the
//!   builtin Foundation document, or [`TypeGenerationIntention`]s.
//!
//! ## Examples
//! ```rust
//! use retype::catalog::{KnownTypeCatalog, TypeCatalog};
//! use retype_core::types::SemanticType;
//!
//! let catalog = KnownTypeCatalog::foundation();
//! assert!(catalog.is_subtype("NSMutableArray", "NSObject"));
//!
//! let array = catalog.known_type("NSMutableArray").unwrap();
//! // `count` is declared on NSArray and inherited.
//! let count = catalog.property("count", false, array).unwrap();
//! assert_eq!(count.ty, SemanticType::Int);
//! ```
//!
//! ## See also
//! - [`retype_core::known`]: the catalog record types

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use retype_core::known::{KnownConstructor, KnownMethod, KnownProperty, KnownType};
use retype_core::lang::types::numerics;
use retype_core::types::SemanticType;

use crate::frontend::diagnostics::CatalogError;
use crate::frontend::intentions::TypeGenerationIntention;

/// Builtin Foundation catalog document.
const FOUNDATION_CATALOG: &str = include_str!("foundation.json");

/// Read-only queries over declared types.
pub trait TypeCatalog {
    /// Look up a declared type by name.
    fn known_type(&self, name: &str) -> Option<&KnownType>;

    /// Whether `type_name` is `supertype_name` or inherits from it (reflexive).
    fn is_subtype(&self, type_name: &str, supertype_name: &str) -> bool {
        let mut seen = HashSet::new();
        let mut current = type_name;
        loop {
            if current == supertype_name {
                return true;
            }
            if !seen.insert(current) {
                return false;
            }
            match self.known_type(current).and_then(|t| t.supertype_name.as_deref()) {
                Some(next) => current = next,
                None => return false,
            }
        }
    }

    /// Whether arithmetic operators apply to values of `ty`.
    fn is_numeric(&self, ty: &SemanticType) -> bool {
        match ty {
            SemanticType::Int | SemanticType::Float => true,
            SemanticType::Named(name) => numerics::from_str(name).is_some(),
            _ => false,
        }
    }

    /// Whether bitwise operators apply to values of `ty`.
    fn is_integer(&self, ty: &SemanticType) -> bool {
        match ty {
            SemanticType::Int => true,
            SemanticType::Named(name) => numerics::from_str(name).is_some_and(|id| numerics::info_for(id).is_integer),
            _ => false,
        }
    }

    /// Find a property on `ty` or its supertypes.
    fn property<'a>(&'a self, name: &str, is_static: bool, ty: &'a KnownType) -> Option<&'a KnownProperty> {
        lineage(self, ty).find_map(|t| t.property(name, is_static))
    }

    /// Find a method on `ty` or its supertypes by name, argument labels and static-ness.
    fn method<'a>(
        &'a self,
        name: &str,
        labels: &[&str],
        is_static: bool,
        ty: &'a KnownType,
    ) -> Option<&'a KnownMethod> {
        lineage(self, ty).find_map(|t| t.method(name, labels, is_static))
    }

    /// Find one of `ty`'s own constructors by argument labels.
    fn constructor<'a>(&'a self, labels: &[&str], ty: &'a KnownType) -> Option<&'a KnownConstructor> {
        ty.constructor(labels)
    }
}

/// `ty` followed by each known supertype, nearest first.
pub fn lineage<'a, C: TypeCatalog + ?Sized>(catalog: &'a C, ty: &'a KnownType) -> Lineage<'a, C> {
    Lineage {
        catalog,
        next: Some(ty),
        seen: HashSet::new(),
    }
}

/// Iterator returned by [`lineage`].
pub struct Lineage<'a, C: ?Sized> {
    catalog: &'a C,
    next: Option<&'a KnownType>,
    seen: HashSet<&'a str>,
}

impl<'a, C: TypeCatalog + ?Sized> Iterator for Lineage<'a, C> {
    type Item = &'a KnownType;

    fn next(&mut self) -> Option<&'a KnownType> {
        let ty = self.next.take()?;
        if !self.seen.insert(ty.type_name.as_str()) {
            tracing::debug!(type_name = %ty.type_name, "cyclic supertype chain");
            return None;
        }
        let catalog = self.catalog;
        self.next = ty.supertype_name.as_deref().and_then(|name| catalog.known_type(name));
        Some(ty)
    }
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    types: Vec<KnownType>,
}

/// Name-keyed catalog of declared types.
#[derive(Debug, Clone, Default)]
pub struct KnownTypeCatalog {
    types: HashMap<String, KnownType>,
}

impl KnownTypeCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the builtin Foundation types.
    pub fn foundation() -> Self {
        let mut catalog = Self::new();
        catalog
            .extend_from_json(FOUNDATION_CATALOG)
            .expect("INVARIANT: the builtin Foundation catalog is a valid document");
        catalog
    }

    /// Build a catalog from a single JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_from_json(json)?;
        Ok(catalog)
    }

    /// Add every type of a JSON document, replacing same-named types already present.
    ///
    /// ## Returns
    /// - `Ok(n)`: the number of types the document declared.
    /// - `Err(CatalogError)`: the document does not parse, or declares a type twice. The catalog is unchanged.
    #[tracing::instrument(skip_all, fields(json_len = json.len()))]
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        let mut names = HashSet::new();
        for ty in &document.types {
            if !names.insert(ty.type_name.as_str()) {
                return Err(CatalogError::DuplicateType(ty.type_name.clone()));
            }
        }

        let count = document.types.len();
        for ty in document.types {
            self.register(ty);
        }
        tracing::debug!(count, "loaded catalog document");
        Ok(count)
    }

    /// Add a type, returning the same-named type it replaces.
    pub fn register(&mut self, ty: KnownType) -> Option<KnownType> {
        let replaced = self.types.insert(ty.type_name.clone(), ty);
        if let Some(old) = &replaced {
            tracing::trace!(type_name = %old.type_name, "replaced catalog type");
        }
        replaced
    }

    /// Register the type an intention generates.
    pub fn register_intention(&mut self, intention: &TypeGenerationIntention) -> Option<KnownType> {
        self.register(intention.to_known_type())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Names of all registered types, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TypeCatalog for KnownTypeCatalog {
    fn known_type(&self, name: &str) -> Option<&KnownType> {
        self.types.get(name)
    }
}
