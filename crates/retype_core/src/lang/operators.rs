//! Operator vocabulary.
//!
//! This module defines the target-language operator set along with the category each operator belongs to. The
//! resolver picks its typing rule by category (arithmetic, comparison, logical, bitwise, null-coalescing), so the
//! category is the important piece of metadata here.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches the exact spelling.
//! - `!` is logical negation and `~` is bitwise-not; both are prefix-only. `+` and `-` are both infix and prefix.
//!
//! ## Examples
//! ```rust
//! use retype_core::lang::operators::{self, Fixity, OperatorCategory, SwiftOperator};
//!
//! assert_eq!(operators::from_str("<<"), Some(SwiftOperator::BitwiseShiftLeft));
//! assert_eq!(SwiftOperator::BitwiseShiftLeft.category(), OperatorCategory::Bitwise);
//! assert_eq!(operators::info_for(SwiftOperator::BitwiseNot).fixity, Fixity::Prefix);
//! ```

use std::fmt;

/// Operator families used to select typing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Logical,
    Bitwise,
    NullCoalesce,
    Assignment,
    Range,
}

/// Define whether an operator may appear infix, prefix, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Both,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwiftOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,

    // Assignment
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,

    // Logical
    Negate,
    And,
    Or,

    // Bitwise
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    BitwiseShiftLeft,
    BitwiseShiftRight,

    // Comparison
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equals,
    Unequals,
    IdentityEquals,
    IdentityUnequals,

    NullCoalesce,

    // Ranges
    OpenRange,
    ClosedRange,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: SwiftOperator,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub fixity: Fixity,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(SwiftOperator::Add, "+", OperatorCategory::Arithmetic, Fixity::Both),
    op(SwiftOperator::Subtract, "-", OperatorCategory::Arithmetic, Fixity::Both),
    op(SwiftOperator::Multiply, "*", OperatorCategory::Arithmetic, Fixity::Infix),
    op(SwiftOperator::Divide, "/", OperatorCategory::Arithmetic, Fixity::Infix),
    op(SwiftOperator::Mod, "%", OperatorCategory::Arithmetic, Fixity::Infix),
    op(SwiftOperator::Assign, "=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::AddAssign, "+=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::SubtractAssign, "-=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::MultiplyAssign, "*=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::DivideAssign, "/=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::BitwiseAndAssign, "&=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::BitwiseOrAssign, "|=", OperatorCategory::Assignment, Fixity::Infix),
    op(SwiftOperator::Negate, "!", OperatorCategory::Logical, Fixity::Prefix),
    op(SwiftOperator::And, "&&", OperatorCategory::Logical, Fixity::Infix),
    op(SwiftOperator::Or, "||", OperatorCategory::Logical, Fixity::Infix),
    op(SwiftOperator::BitwiseAnd, "&", OperatorCategory::Bitwise, Fixity::Infix),
    op(SwiftOperator::BitwiseOr, "|", OperatorCategory::Bitwise, Fixity::Infix),
    op(SwiftOperator::BitwiseXor, "^", OperatorCategory::Bitwise, Fixity::Infix),
    op(SwiftOperator::BitwiseNot, "~", OperatorCategory::Bitwise, Fixity::Prefix),
    op(SwiftOperator::BitwiseShiftLeft, "<<", OperatorCategory::Bitwise, Fixity::Infix),
    op(SwiftOperator::BitwiseShiftRight, ">>", OperatorCategory::Bitwise, Fixity::Infix),
    op(SwiftOperator::LessThan, "<", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::LessThanOrEqual, "<=", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::GreaterThan, ">", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::GreaterThanOrEqual, ">=", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::Equals, "==", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::Unequals, "!=", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::IdentityEquals, "===", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::IdentityUnequals, "!==", OperatorCategory::Comparison, Fixity::Infix),
    op(SwiftOperator::NullCoalesce, "??", OperatorCategory::NullCoalesce, Fixity::Infix),
    op(SwiftOperator::OpenRange, "..<", OperatorCategory::Range, Fixity::Infix),
    op(SwiftOperator::ClosedRange, "...", OperatorCategory::Range, Fixity::Infix),
];

impl SwiftOperator {
    pub fn category(self) -> OperatorCategory {
        info_for(self).category
    }

    pub fn as_str(self) -> &'static str {
        info_for(self).spelling
    }
}

impl fmt::Display for SwiftOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve an operator spelling to its [`SwiftOperator`].
pub fn from_str(spelling: &str) -> Option<SwiftOperator> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return the full metadata entry for an operator.
pub fn info_for(id: SwiftOperator) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every SwiftOperator has a registry entry")
}

const fn op(id: SwiftOperator, spelling: &'static str, category: OperatorCategory, fixity: Fixity) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        fixity,
    }
}
