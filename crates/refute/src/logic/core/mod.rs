//! Core FOL types: terms, literals and clauses

pub mod clause;
pub mod literal;
pub mod term;

pub use clause::{Clause, ClauseSet};
pub use literal::{Literal, ASCII_NEGATION_MARKER, NEGATION_MARKER};
pub use term::{Constant, FunctionSymbol, Term, Variable, RESERVED_VARIABLES, VARIABLE_MARKER};
