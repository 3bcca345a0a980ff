//! Literal parsing and knowledge-base to CNF conversion

pub mod cnf_conversion;
pub mod literal;

pub use cnf_conversion::{rule_to_clause, to_clauses};
pub use literal::{parse_literal, parse_term};
