//! Unification algorithm for first-order terms

mod mgu;
mod substitution;


pub use mgu::{unify, unify_with, UnificationError, UnificationResult};
pub use substitution::Substitution;
