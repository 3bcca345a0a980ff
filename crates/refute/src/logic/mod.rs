//! First-order logic representation and manipulation
//!
//! This module provides the fundamental types for representing clausal
//! knowledge: terms, literals, clauses and substitutions, together with the
//! unification algorithm that relates them.

pub mod core;
pub mod unification;

// Re-export commonly used types
pub use self::core::clause::{Clause, ClauseSet};
pub use self::core::literal::{Literal, ASCII_NEGATION_MARKER, NEGATION_MARKER};
pub use self::core::term::{
    Constant, FunctionSymbol, Term, Variable, RESERVED_VARIABLES, VARIABLE_MARKER,
};
pub use unification::{unify, unify_with, Substitution, UnificationError, UnificationResult};
