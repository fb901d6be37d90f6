//! Shared translator conventions (well-known identifiers).

/// Placeholder argument label for an unlabeled call argument or parameter.
pub const WILDCARD_LABEL: &str = "_";

/// Member name that yields the receiver's type object (`Foo.self`).
pub const SELF_MEMBER: &str = "self";

/// Member name of a constructor invoked through a metatype (`Foo.init()`).
pub const INIT_MEMBER: &str = "init";

/// Implicit receiver inside a method body.
pub const SELF_IDENTIFIER: &str = "self";

/// Implicit superclass receiver inside a method body.
pub const SUPER_IDENTIFIER: &str = "super";

/// Default superclass for declared classes.
pub const ROOT_CLASS_NAME: &str = "NSObject";
