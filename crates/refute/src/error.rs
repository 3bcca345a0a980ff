//! Error types for refute

use thiserror::Error;

/// Malformed literal text, reported before any resolution starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty literal")]
    Empty,

    #[error("missing functor name in '{input}'")]
    EmptyFunctor { input: String },

    #[error("empty argument in '{input}'")]
    EmptyArgument { input: String },

    #[error("unbalanced parentheses in '{input}'")]
    UnbalancedParentheses { input: String },

    #[error("unexpected text after closing parenthesis in '{input}'")]
    TrailingInput { input: String },

    #[error("negation is only allowed in front of a whole literal: '{input}'")]
    NestedNegation { input: String },

    #[error("invalid symbol '{name}' in '{input}'")]
    InvalidName { name: String, input: String },

    #[error("fact '{input}' contains variables")]
    NonGroundFact { input: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
