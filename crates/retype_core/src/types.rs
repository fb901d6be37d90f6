//! Semantic type algebra.
//!
//! [`SemanticType`] is the type the resolver attaches to every expression. Values are immutable and structurally
//! compared: two types are equal only when their literal forms are equal. The only nullability-insensitive comparison
//! is [`SemanticType::deep_unwrapped`], which strips every nested optional.
//!
//! ## Notes
//! - `array(T)` and `dictionary(K, V)` are spelled as `Generic("Array", [T])` / `Generic("Dictionary", [K, V])` so a
//!   literal `[1, 2]` and a declared `Array<Int>` compare equal.
//! - The two untyped-collection sentinels are the legacy Foundation classes (`NSArray`, `NSDictionary`) as named
//!   types, so subtype queries against the legacy classes also cover the sentinels.
//! - [`SemanticType::ErrorType`] is contagious; see the resolver for the propagation rules.
//!
//! ## Examples
//! ```rust
//! use retype_core::types::SemanticType;
//!
//! let ty = SemanticType::optional(SemanticType::optional(SemanticType::Int));
//! assert_eq!(ty.deep_unwrapped(), &SemanticType::Int);
//! assert_eq!(SemanticType::array(SemanticType::String).to_string(), "[String]");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lang::types::collections::{self, CollectionTypeId};

/// Resolved semantic type of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticType {
    Void,
    Bool,
    Int,
    Float,
    String,
    Any,
    AnyObject,
    /// Contagious sentinel: resolution failed for this expression or one of its operands.
    ErrorType,
    /// Nominal type (class, struct, protocol, or a builtin spelled by name such as `Double`).
    Named(String),
    /// The type of a type reference (`Foo.self` has type `Foo.Type`).
    Metatype(Box<SemanticType>),
    Optional(Box<SemanticType>),
    /// Generic nominal type with arguments (`Array<T>`, `Dictionary<K, V>`, ...).
    Generic(String, Vec<SemanticType>),
    /// Invocable type of a method or block: parameter types and return type.
    Function(Vec<SemanticType>, Box<SemanticType>),
}

impl SemanticType {
    pub fn named(name: impl Into<String>) -> Self {
        SemanticType::Named(name.into())
    }

    pub fn optional(inner: SemanticType) -> Self {
        SemanticType::Optional(Box::new(inner))
    }

    pub fn metatype(of: SemanticType) -> Self {
        SemanticType::Metatype(Box::new(of))
    }

    pub fn function(parameters: Vec<SemanticType>, returns: SemanticType) -> Self {
        SemanticType::Function(parameters, Box::new(returns))
    }

    /// `Array<element>`.
    pub fn array(element: SemanticType) -> Self {
        SemanticType::Generic(collections::as_str(CollectionTypeId::Array).to_string(), vec![element])
    }

    /// `Dictionary<key, value>`.
    pub fn dictionary(key: SemanticType, value: SemanticType) -> Self {
        SemanticType::Generic(
            collections::as_str(CollectionTypeId::Dictionary).to_string(),
            vec![key, value],
        )
    }

    /// Sentinel for array literals whose element types are empty or heterogeneous.
    pub fn untyped_array() -> Self {
        SemanticType::named(collections::as_str(CollectionTypeId::LegacyArray))
    }

    /// Sentinel for dictionary literals whose key/value types are empty, missing or heterogeneous.
    pub fn untyped_dictionary() -> Self {
        SemanticType::named(collections::as_str(CollectionTypeId::LegacyDictionary))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SemanticType::ErrorType)
    }

    pub fn is_metatype(&self) -> bool {
        matches!(self, SemanticType::Metatype(_))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, SemanticType::Optional(_))
    }

    /// Name of a nominal type, if this is [`SemanticType::Named`].
    pub fn type_name(&self) -> Option<&str> {
        match self {
            SemanticType::Named(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Remove one level of optionality.
    pub fn unwrapped(&self) -> &SemanticType {
        match self {
            SemanticType::Optional(inner) => inner,
            other => other,
        }
    }

    /// Remove every nested level of optionality (`T??` -> `T`).
    pub fn deep_unwrapped(&self) -> &SemanticType {
        let mut ty = self;
        while let SemanticType::Optional(inner) = ty {
            ty = inner;
        }
        ty
    }

    /// Element type of `Array<T>`.
    pub fn array_element(&self) -> Option<&SemanticType> {
        match self {
            SemanticType::Generic(name, args)
                if collections::from_str(name) == Some(CollectionTypeId::Array) && args.len() == 1 =>
            {
                Some(&args[0])
            }
            _ => None,
        }
    }

    /// Key and value types of `Dictionary<K, V>`.
    pub fn dictionary_entry(&self) -> Option<(&SemanticType, &SemanticType)> {
        match self {
            SemanticType::Generic(name, args)
                if collections::from_str(name) == Some(CollectionTypeId::Dictionary) && args.len() == 2 =>
            {
                Some((&args[0], &args[1]))
            }
            _ => None,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[SemanticType]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Void => write!(f, "Void"),
            SemanticType::Bool => write!(f, "Bool"),
            SemanticType::Int => write!(f, "Int"),
            SemanticType::Float => write!(f, "Float"),
            SemanticType::String => write!(f, "String"),
            SemanticType::Any => write!(f, "Any"),
            SemanticType::AnyObject => write!(f, "AnyObject"),
            SemanticType::ErrorType => write!(f, "<<error type>>"),
            SemanticType::Named(name) => write!(f, "{}", name),
            SemanticType::Metatype(inner) => match inner.as_ref() {
                SemanticType::Function(..) | SemanticType::Optional(_) => write!(f, "({}).Type", inner),
                _ => write!(f, "{}.Type", inner),
            },
            SemanticType::Optional(inner) => match inner.as_ref() {
                SemanticType::Function(..) => write!(f, "({})?", inner),
                _ => write!(f, "{}?", inner),
            },
            SemanticType::Generic(name, args) => {
                if let Some(elem) = self.array_element() {
                    return write!(f, "[{}]", elem);
                }
                if let Some((key, value)) = self.dictionary_entry() {
                    return write!(f, "[{}: {}]", key, value);
                }
                write!(f, "{}<", name)?;
                write_list(f, args)?;
                write!(f, ">")
            }
            SemanticType::Function(params, ret) => {
                write!(f, "(")?;
                write_list(f, params)?;
                write!(f, ") -> {}", ret)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_unwrap_strips_every_level() {
        let ty = SemanticType::optional(SemanticType::optional(SemanticType::optional(SemanticType::named("Foo"))));
        assert_eq!(ty.deep_unwrapped(), &SemanticType::named("Foo"));
        assert_eq!(
            ty.unwrapped(),
            &SemanticType::optional(SemanticType::optional(SemanticType::named("Foo")))
        );
        assert_eq!(SemanticType::Int.deep_unwrapped(), &SemanticType::Int);
    }

    #[test]
    fn test_collection_helpers() {
        let arr = SemanticType::array(SemanticType::Int);
        assert_eq!(arr, SemanticType::Generic("Array".to_string(), vec![SemanticType::Int]));
        assert_eq!(arr.array_element(), Some(&SemanticType::Int));
        assert_eq!(arr.dictionary_entry(), None);

        let dict = SemanticType::dictionary(SemanticType::String, SemanticType::Int);
        assert_eq!(dict.dictionary_entry(), Some((&SemanticType::String, &SemanticType::Int)));
        assert_eq!(SemanticType::untyped_array(), SemanticType::named("NSArray"));
        assert_eq!(SemanticType::untyped_dictionary(), SemanticType::named("NSDictionary"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SemanticType::optional(SemanticType::String).to_string(), "String?");
        assert_eq!(
            SemanticType::dictionary(SemanticType::String, SemanticType::optional(SemanticType::Int)).to_string(),
            "[String: Int?]"
        );
        assert_eq!(SemanticType::metatype(SemanticType::named("Foo")).to_string(), "Foo.Type");
        assert_eq!(
            SemanticType::function(vec![SemanticType::Int, SemanticType::Bool], SemanticType::Void).to_string(),
            "(Int, Bool) -> Void"
        );
        assert_eq!(
            SemanticType::optional(SemanticType::function(vec![], SemanticType::Void)).to_string(),
            "(() -> Void)?"
        );
        assert_eq!(
            SemanticType::Generic("Set".to_string(), vec![SemanticType::Int]).to_string(),
            "Set<Int>"
        );
        assert_eq!(SemanticType::ErrorType.to_string(), "<<error type>>");
    }

    #[test]
    fn test_literal_equality_is_nullability_sensitive() {
        assert_ne!(SemanticType::optional(SemanticType::Int), SemanticType::Int);
        assert_ne!(SemanticType::Int, SemanticType::named("Int"));
    }
}
