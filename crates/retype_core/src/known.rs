//! Declared-type catalog records.
//!
//! These records describe the *shape* of a named type as far as expression resolution is concerned: its supertype,
//! constructors, properties and methods. They are populated by the declaration layer (or shipped as JSON) and are
//! read-only for the resolver.
//!
//! ## Notes
//! - Lookups on a single [`KnownType`] only inspect that type's own members. Walking the supertype chain is the
//!   catalog's job, since only the catalog can see the other types.
//! - Calls are matched by **argument-label signature**: the ordered list of labels, with
//!   [`WILDCARD_LABEL`](crate::lang::conventions::WILDCARD_LABEL) standing in for unlabeled arguments. Parameter types
//!   are not consulted.
//!
//! ## Examples
//! ```rust
//! use retype_core::known::{FunctionSignature, KnownType, ParameterSignature};
//! use retype_core::types::SemanticType;
//!
//! let ty = KnownType::new("Point")
//!     .with_constructor(vec![
//!         ParameterSignature::new("x", "x", SemanticType::Float),
//!         ParameterSignature::new("y", "y", SemanticType::Float),
//!     ])
//!     .with_method(FunctionSignature::new("distance", SemanticType::Float).with_parameter(
//!         ParameterSignature::new("to", "other", SemanticType::named("Point")),
//!     ));
//!
//! assert!(ty.constructor(&["x", "y"]).is_some());
//! assert!(ty.method("distance", &["to"], false).is_some());
//! assert!(ty.method("distance", &["_"], false).is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::lang::conventions::WILDCARD_LABEL;
use crate::types::SemanticType;

fn wildcard_label() -> String {
    WILDCARD_LABEL.to_string()
}

/// Shape of a named type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownType {
    pub type_name: String,
    #[serde(default)]
    pub supertype_name: Option<String>,
    #[serde(default)]
    pub constructors: Vec<KnownConstructor>,
    #[serde(default)]
    pub properties: Vec<KnownProperty>,
    #[serde(default)]
    pub methods: Vec<KnownMethod>,
}

impl KnownType {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            supertype_name: None,
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertype_name = Some(name.into());
        self
    }

    pub fn with_constructor(mut self, parameters: Vec<ParameterSignature>) -> Self {
        self.constructors.push(KnownConstructor { parameters });
        self
    }

    pub fn with_property(mut self, property: KnownProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, signature: FunctionSignature) -> Self {
        self.methods.push(KnownMethod { signature });
        self
    }

    /// This type as a value type (`Named(type_name)`).
    pub fn semantic_type(&self) -> SemanticType {
        SemanticType::named(self.type_name.clone())
    }

    /// Find an own property by name and static-ness.
    pub fn property(&self, name: &str, is_static: bool) -> Option<&KnownProperty> {
        self.properties
            .iter()
            .find(|p| p.name == name && p.is_static == is_static)
    }

    /// Find an own method by name, argument-label signature and static-ness.
    ///
    /// When several methods share the same label signature the first declared one wins.
    pub fn method(&self, name: &str, labels: &[&str], is_static: bool) -> Option<&KnownMethod> {
        self.methods.iter().find(|m| m.signature.matches(name, labels, is_static))
    }

    /// Find an own constructor by argument-label signature.
    pub fn constructor(&self, labels: &[&str]) -> Option<&KnownConstructor> {
        self.constructors.iter().find(|c| c.argument_labels() == labels)
    }
}

/// A constructor (`init(label: ...)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownConstructor {
    #[serde(default)]
    pub parameters: Vec<ParameterSignature>,
}

impl KnownConstructor {
    pub fn argument_labels(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.label.as_str()).collect()
    }
}

/// A stored or computed property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SemanticType,
    #[serde(default)]
    pub is_static: bool,
}

impl KnownProperty {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
        }
    }

    pub fn class_property(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: true,
        }
    }
}

/// A method, described by its signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownMethod {
    pub signature: FunctionSignature,
}

/// A single labelled parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSignature {
    #[serde(default = "wildcard_label")]
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SemanticType,
}

impl ParameterSignature {
    pub fn new(label: impl Into<String>, name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            ty,
        }
    }

    /// A parameter without an argument label (`_ name: T`).
    pub fn unlabeled(name: impl Into<String>, ty: SemanticType) -> Self {
        Self::new(WILDCARD_LABEL, name, ty)
    }
}

/// Method signature: name, labelled parameters, return type and static-ness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSignature {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterSignature>,
    #[serde(default = "void_type")]
    pub return_type: SemanticType,
    #[serde(default)]
    pub is_static: bool,
}

fn void_type() -> SemanticType {
    SemanticType::Void
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, return_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            is_static: false,
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterSignature) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn argument_labels(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn matches(&self, name: &str, labels: &[&str], is_static: bool) -> bool {
        self.name == name && self.is_static == is_static && self.argument_labels() == labels
    }

    /// Invocable type of this method, `(params) -> return`.
    pub fn closure_type(&self) -> SemanticType {
        SemanticType::function(
            self.parameters.iter().map(|p| p.ty.clone()).collect(),
            self.return_type.clone(),
        )
    }

    /// Selector spelling used in diagnostics, e.g. `addObjects(from:)`.
    pub fn selector(&self) -> String {
        selector(&self.name, &self.argument_labels())
    }
}

/// Render a member name and argument-label signature as `name(label:label:)`.
pub fn selector(name: &str, labels: &[&str]) -> String {
    let mut out = String::from(name);
    out.push('(');
    for label in labels {
        out.push_str(label);
        out.push(':');
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mutable_array() -> KnownType {
        KnownType::new("NSMutableArray")
            .with_supertype("NSArray")
            .with_constructor(vec![])
            .with_property(KnownProperty::new("count", SemanticType::Int))
            .with_method(
                FunctionSignature::new("addObjects", SemanticType::Void).with_parameter(ParameterSignature::new(
                    "from",
                    "array",
                    SemanticType::untyped_array(),
                )),
            )
            .with_method(
                FunctionSignature::new("add", SemanticType::Void)
                    .with_parameter(ParameterSignature::unlabeled("object", SemanticType::AnyObject)),
            )
    }

    #[test]
    fn test_method_lookup_by_label_signature() {
        let ty = mutable_array();
        assert!(ty.method("addObjects", &["from"], false).is_some());
        assert!(ty.method("addObjects", &["_"], false).is_none());
        assert!(ty.method("addObjects", &["from"], true).is_none());
        assert!(ty.method("add", &["_"], false).is_some());
    }

    #[test]
    fn test_property_lookup_respects_static_ness() {
        let ty = mutable_array();
        assert!(ty.property("count", false).is_some());
        assert!(ty.property("count", true).is_none());
    }

    #[test]
    fn test_constructor_lookup() {
        let ty = mutable_array();
        assert!(ty.constructor(&[]).is_some());
        assert!(ty.constructor(&["capacity"]).is_none());
    }

    #[test]
    fn test_selector_and_closure_type() {
        let sig = FunctionSignature::new("insert", SemanticType::Void)
            .with_parameter(ParameterSignature::unlabeled("object", SemanticType::AnyObject))
            .with_parameter(ParameterSignature::new("at", "index", SemanticType::Int));
        assert_eq!(sig.selector(), "insert(_:at:)");
        assert_eq!(
            sig.closure_type(),
            SemanticType::function(vec![SemanticType::AnyObject, SemanticType::Int], SemanticType::Void)
        );
        assert_eq!(selector("init", &[]), "init()");
    }

    #[test]
    fn test_duplicate_signatures_pick_first() {
        let ty = KnownType::new("Dup")
            .with_method(FunctionSignature::new("run", SemanticType::Int))
            .with_method(FunctionSignature::new("run", SemanticType::String));
        let method = ty.method("run", &[], false).unwrap();
        assert_eq!(method.signature.return_type, SemanticType::Int);
    }
}
