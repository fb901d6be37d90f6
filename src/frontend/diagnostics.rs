//! Resolver diagnostics and structural errors.
//!
//! Two channels are kept apart:
//!
//! - **Diagnostics** ([`ResolveDiagnostic`]) describe expressions whose type could not be determined. They are
//!   accumulated by the resolver, never fatal, and mirror what the tree already records as the error type. Callers
//!   drain them with [`ExpressionTypeResolver::take_diagnostics`](crate::frontend::resolver::ExpressionTypeResolver::take_diagnostics).
//! - **Errors** ([`ResolveError`], [`CatalogError`]) are contract failures of the caller: a handle that does not
//!   belong to the tree, a catalog document that does not parse.
//!
//! Every [`ResolveIssue`] carries a stable miette `code` so tooling can filter on it.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use retype_core::types::SemanticType;
use retype_syntax::ast::NodeId;

/// What went wrong while resolving one node.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveIssue {
    #[error("unknown identifier `{name}`")]
    #[diagnostic(
        code(retype::resolve::unknown_identifier),
        help("declare the name before use, or register the type it names in the catalog")
    )]
    UnknownIdentifier { name: String },

    #[error("loop pattern `{pattern}` is not bound; only single-identifier patterns declare loop variables")]
    #[diagnostic(code(retype::resolve::unsupported_loop_pattern), severity(Warning))]
    UnsupportedLoopPattern { pattern: String },

    #[error("cannot iterate over a value of type `{ty}`")]
    #[diagnostic(
        code(retype::resolve::not_iterable),
        help("for-in loops iterate `Array<T>` values or subclasses of `NSArray`")
    )]
    NotIterable { ty: SemanticType },

    #[error("type `{ty}` is not known to the catalog")]
    #[diagnostic(code(retype::resolve::unknown_type))]
    UnknownType { ty: SemanticType },

    #[error("`{owner}` has no {} property `{name}`", member_scope(.is_static))]
    #[diagnostic(code(retype::resolve::unknown_member))]
    UnknownMember {
        owner: String,
        name: String,
        is_static: bool,
    },

    #[error("`{type_name}` has no constructor `{selector}`")]
    #[diagnostic(
        code(retype::resolve::no_matching_constructor),
        help("constructors are matched by argument labels only")
    )]
    NoMatchingConstructor { type_name: String, selector: String },

    #[error("`{owner}` has no {} method `{selector}`", member_scope(.is_static))]
    #[diagnostic(
        code(retype::resolve::no_matching_method),
        help("methods are matched by name and argument labels only")
    )]
    NoMatchingMethod {
        owner: String,
        selector: String,
        is_static: bool,
    },

    #[error("cannot subscript `{receiver}` with an index of type `{index}`")]
    #[diagnostic(
        code(retype::resolve::non_integer_subscript),
        help("array-like values are indexed with `Int`")
    )]
    NonIntegerSubscript { receiver: SemanticType, index: SemanticType },

    #[error("ternary branches have different types: `{if_true}` and `{if_false}`")]
    #[diagnostic(code(retype::resolve::ternary_mismatch))]
    TernaryMismatch {
        if_true: SemanticType,
        if_false: SemanticType,
    },
}

fn member_scope(is_static: &bool) -> &'static str {
    if *is_static { "static" } else { "instance" }
}

/// A resolver diagnostic attached to the node it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveDiagnostic {
    pub issue: ResolveIssue,
    pub node: NodeId,
}

impl ResolveDiagnostic {
    pub fn new(issue: ResolveIssue, node: impl Into<NodeId>) -> Self {
        Self {
            issue,
            node: node.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self.issue.severity(), Some(Severity::Warning))
    }

    /// Stable diagnostic code, e.g. `retype::resolve::unknown_identifier`.
    pub fn code(&self) -> String {
        self.issue.code().map(|c| c.to_string()).unwrap_or_default()
    }
}

impl std::fmt::Display for ResolveDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_warning() { "warning" } else { "error" };
        write!(f, "{}[{}]: {}", kind, self.node, self.issue)
    }
}

/// Contract failures of a resolution request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    #[error("{0} does not exist in the tree being resolved")]
    #[diagnostic(
        code(retype::resolve::unknown_node),
        help("pass a handle minted by the same `Tree` that is being resolved")
    )]
    UnknownNode(NodeId),
}

/// Failures while loading catalog documents.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("invalid catalog document: {0}")]
    #[diagnostic(
        code(retype::catalog::invalid_json),
        help("a catalog document is an object with a `types` array of known types")
    )]
    InvalidJson(#[from] serde_json::Error),

    #[error("catalog document declares `{0}` more than once")]
    #[diagnostic(code(retype::catalog::duplicate_type))]
    DuplicateType(String),
}
