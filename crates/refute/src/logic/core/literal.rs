//! Signed literals

use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Marker written in front of a negative literal
pub const NEGATION_MARKER: char = '¬';

/// ASCII alias for [`NEGATION_MARKER`], accepted on input only
pub const ASCII_NEGATION_MARKER: char = '~';

/// A literal (positive or negative predicate application)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub polarity: bool, // true = positive, false = negative
    pub term: Term,
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(term: Term) -> Self {
        Literal {
            polarity: true,
            term,
        }
    }

    /// Create a new negative literal
    pub fn negative(term: Term) -> Self {
        Literal {
            polarity: false,
            term,
        }
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            polarity: !self.polarity,
            term: self.term.clone(),
        }
    }

    pub fn is_negative(&self) -> bool {
        !self.polarity
    }

    pub fn is_ground(&self) -> bool {
        self.term.is_ground()
    }

    /// Opposite signs; says nothing about whether the terms unify
    pub fn is_opposite(&self, other: &Literal) -> bool {
        self.polarity != other.polarity
    }

    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        self.term.collect_variables(vars);
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "{}", NEGATION_MARKER)?;
        }
        write!(f, "{}", self.term)
    }
}
