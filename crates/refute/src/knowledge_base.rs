//! Knowledge base container
//!
//! Holds facts, implication rules and raw disjunctive clauses in canonical
//! literal text. Entries are only ever added; duplicates collapse. Parsing is
//! deferred to [`crate::parser::to_clauses`] so that malformed input surfaces
//! as a single error at conversion time.

use crate::error::Result;
use crate::logic::ClauseSet;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An implication `P₁ ∧ … ∧ Pₙ ⇒ C`.
///
/// Premises form a set: two rules that list the same premises in a different
/// order are the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub premises: BTreeSet<String>,
    pub conclusion: String,
}

impl Rule {
    /// Create a rule; repeated premises collapse
    pub fn new<I, S>(premises: I, conclusion: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule {
            premises: premises.into_iter().map(Into::into).collect(),
            conclusion: conclusion.into(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let premises: Vec<&str> = self.premises.iter().map(String::as_str).collect();
        write!(f, "{} ⇒ {}", premises.join(" ∧ "), self.conclusion)
    }
}

/// Facts, rules and raw clauses making up one problem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    facts: IndexSet<String>,
    #[serde(default)]
    rules: IndexSet<Rule>,
    #[serde(default)]
    raw_clauses: IndexSet<Vec<String>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ground fact such as `Hombre(Marco)`. Returns false if already present.
    pub fn add_fact(&mut self, fact: impl Into<String>) -> bool {
        self.facts.insert(fact.into())
    }

    /// Add an implication rule. Returns false if already present.
    pub fn add_rule(&mut self, rule: Rule) -> bool {
        self.rules.insert(rule)
    }

    /// Add a disjunction written directly as its literals, e.g. for `A ⇒ B ∨ C`
    pub fn add_clause<I, S>(&mut self, literals: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let literals: IndexSet<String> = literals.into_iter().map(Into::into).collect();
        self.raw_clauses.insert(literals.into_iter().collect())
    }

    /// Add several raw clauses at once
    pub fn add_clauses<I, C, S>(&mut self, clauses: I)
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for clause in clauses {
            self.add_clause(clause);
        }
    }

    pub fn facts(&self) -> impl Iterator<Item = &str> {
        self.facts.iter().map(String::as_str)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn raw_clauses(&self) -> impl Iterator<Item = &[String]> {
        self.raw_clauses.iter().map(Vec::as_slice)
    }

    /// Total number of entries of all kinds
    pub fn len(&self) -> usize {
        self.facts.len() + self.rules.len() + self.raw_clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shorthand for [`crate::parser::to_clauses`]
    pub fn to_clauses(&self) -> Result<ClauseSet> {
        crate::parser::to_clauses(self)
    }
}
