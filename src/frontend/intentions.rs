//! Type-generation intentions.
//!
//! An intention describes a Swift type the translator is about to emit: the class read from an `@interface` /
//! `@implementation` pair, with its superclass, instance variables, properties and methods. Intentions are produced
//! by the declaration layer and fed into the catalog with
//! [`KnownTypeCatalog::register_intention`](crate::frontend::catalog::KnownTypeCatalog::register_intention), so
//! expressions in method bodies can resolve members of types declared in the same translation unit.
//!
//! ## Notes
//!
//! - The superclass defaults to `NSObject`, the root class of every Objective-C class hierarchy.
//! - Instance variables are visible to method bodies and are catalogued as instance properties.
//! - Access levels are carried for the emitter; the resolver does not enforce them.
//!
//! ## Examples
//! ```rust
//! use retype::intentions::{MethodGenerationIntention, PropertyGenerationIntention, TypeGenerationIntention};
//! use retype_core::known::{FunctionSignature, ParameterSignature};
//! use retype_core::types::SemanticType;
//!
//! let intention = TypeGenerationIntention::new("Greeter")
//!     .with_property(PropertyGenerationIntention::new("name", SemanticType::String))
//!     .with_method(MethodGenerationIntention::new(
//!         FunctionSignature::new("greet", SemanticType::String)
//!             .with_parameter(ParameterSignature::new("with", "greeting", SemanticType::String)),
//!     ));
//!
//! let known = intention.to_known_type();
//! assert_eq!(known.supertype_name.as_deref(), Some("NSObject"));
//! assert!(known.constructor(&[]).is_some());
//! assert!(known.method("greet", &["with"], false).is_some());
//! ```

use std::fmt;

use retype_core::known::{FunctionSignature, KnownProperty, KnownType};
use retype_core::lang::conventions::ROOT_CLASS_NAME;
use retype_core::types::SemanticType;

/// Access level visibility for a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessLevel {
    Private,
    Fileprivate,
    #[default]
    Internal,
    Public,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::Fileprivate => "fileprivate",
            AccessLevel::Internal => "internal",
            AccessLevel::Public => "public",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intention to generate a class.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGenerationIntention {
    pub type_name: String,
    /// `None` for a root class.
    pub superclass_name: Option<String>,
    pub access_level: AccessLevel,
    pub protocols: Vec<String>,
    pub instance_variables: Vec<InstanceVariableGenerationIntention>,
    pub properties: Vec<PropertyGenerationIntention>,
    pub methods: Vec<MethodGenerationIntention>,
}

impl TypeGenerationIntention {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            superclass_name: Some(ROOT_CLASS_NAME.to_string()),
            access_level: AccessLevel::default(),
            protocols: Vec::new(),
            instance_variables: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_superclass(mut self, name: Option<String>) -> Self {
        self.superclass_name = name;
        self
    }

    pub fn with_access_level(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_protocol(mut self, name: impl Into<String>) -> Self {
        self.protocols.push(name.into());
        self
    }

    pub fn with_instance_variable(mut self, ivar: InstanceVariableGenerationIntention) -> Self {
        self.instance_variables.push(ivar);
        self
    }

    pub fn with_property(mut self, property: PropertyGenerationIntention) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodGenerationIntention) -> Self {
        self.methods.push(method);
        self
    }

    /// Catalog shape of the type this intention generates.
    ///
    /// Every generated class gets an implicit `init()`, like any `NSObject` subclass without a designated
    /// initializer.
    pub fn to_known_type(&self) -> KnownType {
        let mut known = KnownType::new(self.type_name.clone()).with_constructor(Vec::new());
        known.supertype_name = self.superclass_name.clone();

        for ivar in &self.instance_variables {
            known = known.with_property(KnownProperty::new(ivar.name.clone(), ivar.ty.clone()));
        }
        for property in &self.properties {
            known = known.with_property(property.to_known_property());
        }
        for method in &self.methods {
            known = known.with_method(method.signature.clone());
        }
        known
    }
}

/// An instance variable declared in an `@interface` or `@implementation` block.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceVariableGenerationIntention {
    pub name: String,
    pub ty: SemanticType,
    pub access_level: AccessLevel,
}

impl InstanceVariableGenerationIntention {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            access_level: AccessLevel::Private,
        }
    }
}

/// An intention to generate a stored or computed property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyGenerationIntention {
    pub name: String,
    pub ty: SemanticType,
    pub is_static: bool,
    pub access_level: AccessLevel,
}

impl PropertyGenerationIntention {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            access_level: AccessLevel::default(),
        }
    }

    /// A class property (`@property (class)`).
    pub fn class_property(name: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            is_static: true,
            ..Self::new(name, ty)
        }
    }

    pub fn to_known_property(&self) -> KnownProperty {
        KnownProperty {
            name: self.name.clone(),
            ty: self.ty.clone(),
            is_static: self.is_static,
        }
    }
}

/// An intention to generate an instance or class method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodGenerationIntention {
    pub signature: FunctionSignature,
    pub access_level: AccessLevel,
}

impl MethodGenerationIntention {
    pub fn new(signature: FunctionSignature) -> Self {
        Self {
            signature,
            access_level: AccessLevel::default(),
        }
    }

    pub fn with_access_level(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn is_static(&self) -> bool {
        self.signature.is_static
    }
}
