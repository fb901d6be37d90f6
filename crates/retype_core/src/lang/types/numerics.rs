//! Numeric type vocabulary.
//!
//! The primitive [`SemanticType::Int`](crate::types::SemanticType::Int) and
//! [`SemanticType::Float`](crate::types::SemanticType::Float) cover literals, but declared types frequently name a
//! concrete width (`Int32`, `Double`, `CGFloat`) or a Foundation typedef (`NSInteger`). This registry classifies those
//! names so operator rules can treat them as numeric/integer.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use retype_core::lang::types::numerics::{self, NumericTypeId};
//!
//! assert_eq!(numerics::from_str("CGFloat"), Some(NumericTypeId::CGFloat));
//! assert!(numerics::info_for(NumericTypeId::NSUInteger).is_integer);
//! assert!(!numerics::info_for(NumericTypeId::Double).is_integer);
//! ```

/// Stable identifier for named numeric types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericTypeId {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    NSInteger,
    NSUInteger,
    Float,
    Float32,
    Float64,
    Double,
    CGFloat,
    TimeInterval,
    NSTimeInterval,
}

/// Metadata for a named numeric type.
#[derive(Debug, Clone, Copy)]
pub struct NumericTypeInfo {
    pub id: NumericTypeId,
    pub canonical: &'static str,
    pub is_integer: bool,
}

/// Registry of named numeric types.
pub const NUMERIC_TYPES: &[NumericTypeInfo] = &[
    info(NumericTypeId::Int, "Int", true),
    info(NumericTypeId::Int8, "Int8", true),
    info(NumericTypeId::Int16, "Int16", true),
    info(NumericTypeId::Int32, "Int32", true),
    info(NumericTypeId::Int64, "Int64", true),
    info(NumericTypeId::UInt, "UInt", true),
    info(NumericTypeId::UInt8, "UInt8", true),
    info(NumericTypeId::UInt16, "UInt16", true),
    info(NumericTypeId::UInt32, "UInt32", true),
    info(NumericTypeId::UInt64, "UInt64", true),
    info(NumericTypeId::NSInteger, "NSInteger", true),
    info(NumericTypeId::NSUInteger, "NSUInteger", true),
    info(NumericTypeId::Float, "Float", false),
    info(NumericTypeId::Float32, "Float32", false),
    info(NumericTypeId::Float64, "Float64", false),
    info(NumericTypeId::Double, "Double", false),
    info(NumericTypeId::CGFloat, "CGFloat", false),
    info(NumericTypeId::TimeInterval, "TimeInterval", false),
    info(NumericTypeId::NSTimeInterval, "NSTimeInterval", false),
];

/// Resolve a type name to a [`NumericTypeId`].
pub fn from_str(name: &str) -> Option<NumericTypeId> {
    NUMERIC_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Return the canonical spelling for a numeric type.
pub fn as_str(id: NumericTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a numeric type.
pub fn info_for(id: NumericTypeId) -> &'static NumericTypeInfo {
    NUMERIC_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("INVARIANT: every NumericTypeId has a registry entry")
}

const fn info(id: NumericTypeId, canonical: &'static str, is_integer: bool) -> NumericTypeInfo {
    NumericTypeInfo {
        id,
        canonical,
        is_integer,
    }
}
