//! Expression and statement node definitions.
//!
//! Nodes live in a [`Tree`](crate::tree::Tree) arena and refer to each other through [`ExprId`] / [`StmtId`]
//! handles. A node owns its children (the ids stored in its kind) and keeps a single non-owning parent handle that is
//! only ever used for upward navigation: nearest-scope lookup and in-place replacement.

use std::collections::HashMap;
use std::fmt;

use retype_core::known::{KnownMethod, KnownProperty};
use retype_core::lang::operators::SwiftOperator;
use retype_core::types::SemanticType;

/// Handle of an expression node inside a [`Tree`](crate::tree::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub(crate) u32);

/// Handle of a statement node inside a [`Tree`](crate::tree::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StmtId(pub(crate) u32);

impl ExprId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl StmtId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Either kind of node handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Expr(ExprId),
    Stmt(StmtId),
}

impl From<ExprId> for NodeId {
    fn from(id: ExprId) -> Self {
        NodeId::Expr(id)
    }
}

impl From<StmtId> for NodeId {
    fn from(id: StmtId) -> Self {
        NodeId::Stmt(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Expr(id) => write!(f, "expr#{}", id.0),
            NodeId::Stmt(id) => write!(f, "stmt#{}", id.0),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression node: its kind, its memoized type and its parent handle.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode {
    pub kind: ExprKind,
    /// `None` until resolved, or when no typing rule applied.
    pub resolved_type: Option<SemanticType>,
    pub(crate) parent: Option<NodeId>,
}

impl ExprNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_type_resolved(&self) -> bool {
        self.resolved_type.is_some()
    }

    pub fn is_error_typed(&self) -> bool {
        matches!(self.resolved_type, Some(SemanticType::ErrorType))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Bare name; `definition` is the binding recorded by the resolver.
    Identifier { name: String, definition: Option<Definition> },
    Constant(Constant),
    Prefix { op: SwiftOperator, exp: ExprId },
    Unary { op: SwiftOperator, exp: ExprId },
    Postfix { exp: ExprId, op: PostfixOp },
    Binary { lhs: ExprId, op: SwiftOperator, rhs: ExprId },
    Assignment { lhs: ExprId, op: SwiftOperator, rhs: ExprId },
    /// `exp as? ty`
    Cast { exp: ExprId, ty: SemanticType },
    Ternary { cond: ExprId, if_true: ExprId, if_false: ExprId },
    Parens(ExprId),
    ArrayLiteral(Vec<ExprId>),
    DictionaryLiteral(Vec<(ExprId, ExprId)>),
}

/// Literal constants.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int(i64),
    Binary(i64),
    Octal(i64),
    Hexadecimal(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Nil,
    /// Source text carried through verbatim (macros, unparsed literals).
    RawConstant(String),
}

/// Operator payload of a postfix expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixOp {
    /// `.name`; `definition` is set once the member resolves to a catalog property or method.
    Member { name: String, definition: Option<MemberDefinition> },
    Subscript(ExprId),
    FunctionCall(Vec<FunctionArgument>),
    /// `exp?`
    OptionalChain,
}

impl PostfixOp {
    pub fn member(name: impl Into<String>) -> Self {
        PostfixOp::Member {
            name: name.into(),
            definition: None,
        }
    }

    pub fn member_name(&self) -> Option<&str> {
        match self {
            PostfixOp::Member { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// A call argument with its optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArgument {
    pub label: Option<String>,
    pub exp: ExprId,
}

impl FunctionArgument {
    pub fn unlabeled(exp: ExprId) -> Self {
        Self { label: None, exp }
    }

    pub fn labeled(label: impl Into<String>, exp: ExprId) -> Self {
        Self {
            label: Some(label.into()),
            exp,
        }
    }
}

/// Catalog member a member-access postfix resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberDefinition {
    Property(KnownProperty),
    Method(KnownMethod),
}

/// Binding recorded on an identifier after resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Local variable, parameter, loop variable or intrinsic.
    Local(CodeDefinition),
    /// The identifier names a known type; its value is the type's metatype.
    Type(String),
    /// Implicit member of the enclosing type (a bare property reference inside a method body).
    Member { owner: String, property: KnownProperty },
}

/// A named local binding.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeDefinition {
    pub name: String,
    pub ty: SemanticType,
}

impl CodeDefinition {
    pub fn new(name: impl Into<String>, ty: SemanticType) -> Self {
        Self { name: name.into(), ty }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A statement node: its kind, its parent handle and, for block statements, its scope.
#[derive(Debug, Clone, PartialEq)]
pub struct StmtNode {
    pub kind: StmtKind,
    pub(crate) parent: Option<StmtId>,
    pub(crate) scope: Option<Scope>,
}

impl StmtNode {
    pub fn parent(&self) -> Option<StmtId> {
        self.parent
    }

    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `{ ... }`; owns a scope.
    Compound(Vec<StmtId>),
    If {
        exp: ExprId,
        body: StmtId,
        else_body: Option<StmtId>,
    },
    While {
        exp: ExprId,
        body: StmtId,
    },
    /// `for pattern in exp { body }`; owns a scope.
    For {
        pattern: Pattern,
        exp: ExprId,
        body: StmtId,
    },
    VariableDeclarations(Vec<VariableDeclaration>),
    Expressions(Vec<ExprId>),
    Return(Option<ExprId>),
    Break,
    Continue,
}

/// One declared name in a `var`/`let` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub identifier: String,
    pub ty: SemanticType,
    pub is_constant: bool,
    pub initialization: Option<ExprId>,
}

impl VariableDeclaration {
    pub fn new(identifier: impl Into<String>, ty: SemanticType) -> Self {
        Self {
            identifier: identifier.into(),
            ty,
            is_constant: false,
            initialization: None,
        }
    }

    pub fn with_initialization(mut self, exp: ExprId) -> Self {
        self.initialization = Some(exp);
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }
}

/// Binding pattern of a `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Identifier(String),
    Tuple(Vec<Pattern>),
    Wildcard,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Identifier(name) => write!(f, "{}", name),
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Name -> definition mapping owned by a block or for-in statement. Names are unique; the last write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    definitions: HashMap<String, CodeDefinition>,
}

impl Scope {
    pub fn record_definition(&mut self, definition: CodeDefinition) {
        self.definitions.insert(definition.name.clone(), definition);
    }

    pub fn definition(&self, name: &str) -> Option<&CodeDefinition> {
        self.definitions.get(name)
    }

    pub fn remove_all_definitions(&mut self) {
        self.definitions.clear();
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
