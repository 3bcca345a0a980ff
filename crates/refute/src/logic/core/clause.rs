//! Clauses and clause sets

use super::literal::Literal;
use super::term::Variable;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A clause (disjunction of literals) with set semantics.
///
/// Duplicate literals collapse on insertion, and two clauses with the same
/// literals are equal regardless of the order they were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Clause {
    pub literals: BTreeSet<Literal>,
}

/// A conjunction of clauses. Insertion order is kept so that enumeration
/// during resolution is reproducible.
pub type ClauseSet = IndexSet<Clause>;

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause::default()
    }

    /// A clause holding exactly one literal
    pub fn unit(literal: Literal) -> Self {
        Clause::new([literal])
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Horn: at most one positive literal
    pub fn is_horn(&self) -> bool {
        self.literals.iter().filter(|lit| lit.polarity).count() <= 1
    }

    /// All literals except `excluded`
    pub fn without<'a>(&'a self, excluded: &'a Literal) -> impl Iterator<Item = &'a Literal> + 'a {
        self.literals.iter().filter(move |lit| *lit != excluded)
    }

    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        for lit in &self.literals {
            lit.collect_variables(&mut vars);
        }
        vars
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit)?;
            }
            Ok(())
        }
    }
}
