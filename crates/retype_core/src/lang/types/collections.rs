//! Collection type vocabulary.
//!
//! Covers the generic collection bases of the target language (`Array`, `Dictionary`, `Set`) and the legacy untyped
//! Foundation collections of the source language (`NSArray`, `NSDictionary`, ...).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: type names are nominal.
//! - This module is vocabulary only. Subtype relationships (e.g. `NSMutableArray` < `NSArray`) live in the catalog.
//!
//! ## Examples
//! ```rust
//! use retype_core::lang::types::collections::{self, CollectionTypeId};
//!
//! assert_eq!(collections::from_str("Array"), Some(CollectionTypeId::Array));
//! assert_eq!(collections::as_str(CollectionTypeId::LegacyArray), "NSArray");
//! assert!(collections::info_for(CollectionTypeId::LegacyDictionary).is_legacy);
//! ```

/// Stable identifier for collection types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionTypeId {
    Array,
    Dictionary,
    Set,
    LegacyArray,
    LegacyMutableArray,
    LegacyDictionary,
    LegacyMutableDictionary,
    LegacySet,
    LegacyMutableSet,
}

/// Metadata for a collection type.
#[derive(Debug, Clone, Copy)]
pub struct CollectionTypeInfo {
    pub id: CollectionTypeId,
    pub canonical: &'static str,
    /// Number of generic arguments (0 for the untyped legacy classes).
    pub arity: usize,
    pub is_legacy: bool,
    pub description: &'static str,
}

/// Registry of collection types.
pub const COLLECTION_TYPES: &[CollectionTypeInfo] = &[
    info(CollectionTypeId::Array, "Array", 1, false, "Typed array `[T]`."),
    info(CollectionTypeId::Dictionary, "Dictionary", 2, false, "Typed dictionary `[K: V]`."),
    info(CollectionTypeId::Set, "Set", 1, false, "Typed set `Set<T>`."),
    info(
        CollectionTypeId::LegacyArray,
        "NSArray",
        0,
        true,
        "Untyped array; elements are `AnyObject`.",
    ),
    info(
        CollectionTypeId::LegacyMutableArray,
        "NSMutableArray",
        0,
        true,
        "Mutable untyped array.",
    ),
    info(
        CollectionTypeId::LegacyDictionary,
        "NSDictionary",
        0,
        true,
        "Untyped dictionary; values are `AnyObject`.",
    ),
    info(
        CollectionTypeId::LegacyMutableDictionary,
        "NSMutableDictionary",
        0,
        true,
        "Mutable untyped dictionary.",
    ),
    info(CollectionTypeId::LegacySet, "NSSet", 0, true, "Untyped set."),
    info(CollectionTypeId::LegacyMutableSet, "NSMutableSet", 0, true, "Mutable untyped set."),
];

/// Resolve a type name to a [`CollectionTypeId`].
///
/// ## Returns
/// - `Some(CollectionTypeId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<CollectionTypeId> {
    COLLECTION_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Return the canonical spelling for a collection type.
pub fn as_str(id: CollectionTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a collection type.
pub fn info_for(id: CollectionTypeId) -> &'static CollectionTypeInfo {
    COLLECTION_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("INVARIANT: every CollectionTypeId has a registry entry")
}

const fn info(
    id: CollectionTypeId,
    canonical: &'static str,
    arity: usize,
    is_legacy: bool,
    description: &'static str,
) -> CollectionTypeInfo {
    CollectionTypeInfo {
        id,
        canonical,
        arity,
        is_legacy,
        description,
    }
}
