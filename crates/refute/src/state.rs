//! Result and derivation types for one refutation run.
//!
//! Everything a query produces is returned by value: the verdict, the
//! counters collected on the way, and the proof when one was found.

use crate::logic::Clause;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of an entailment query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The empty clause was derived from the clauses plus the negated query
    Proven,
    /// Saturation: a full pass produced no new clause
    Disproven,
    /// A resource limit stopped the search before either of the above
    Inconclusive,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Proven => write!(f, "proven"),
            Verdict::Disproven => write!(f, "disproven"),
            Verdict::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// Which limit made a run inconclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceLimit {
    Iterations,
    Clauses,
    Timeout,
    Cancelled,
}

impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLimit::Iterations => write!(f, "iteration limit reached"),
            ResourceLimit::Clauses => write!(f, "clause limit reached"),
            ResourceLimit::Timeout => write!(f, "timeout"),
            ResourceLimit::Cancelled => write!(f, "cancelled"),
        }
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Counters for a single query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStats {
    /// Outer resolution rounds started
    pub iterations: usize,
    /// Resolvents built, including duplicates
    pub resolutions: usize,
    /// Distinct new clauses merged into the working set
    pub clauses_generated: usize,
    /// Size of the working set when the run ended
    pub final_clause_count: usize,
    /// Set when the verdict is [`Verdict::Inconclusive`]
    pub limit: Option<ResourceLimit>,
}

// =============================================================================
// Derivation & Proof
// =============================================================================

/// How a working clause came to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Derivation {
    /// Part of the converted knowledge base
    Input,
    /// The unit clause holding the negated query
    NegatedQuery,
    /// Binary resolution of two earlier clauses
    Resolution { left: usize, right: usize },
}

impl Derivation {
    /// Indices of the premise clauses
    pub fn premises(&self) -> Vec<usize> {
        match self {
            Derivation::Input | Derivation::NegatedQuery => vec![],
            Derivation::Resolution { left, right } => vec![*left, *right],
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivation::Input => write!(f, "input"),
            Derivation::NegatedQuery => write!(f, "negated query"),
            Derivation::Resolution { left, right } => write!(f, "resolution {}, {}", left, right),
        }
    }
}

/// A single step in a proof. Every step produces a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub clause_idx: usize,
    pub derivation: Derivation,
    pub conclusion: Clause,
}

/// The clauses the empty clause depends on, inputs first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_idx: usize,
}

impl Proof {
    /// Walk back from the empty clause through the derivation graph.
    ///
    /// `clauses[i]` must have been derived by `derivations[i]`. Returns `None`
    /// when an index on the way falls outside either slice.
    pub fn extract(
        clauses: &[&Clause],
        derivations: &[Derivation],
        empty_clause_idx: usize,
    ) -> Option<Self> {
        let mut needed = BTreeSet::new();
        let mut stack = vec![empty_clause_idx];
        while let Some(idx) = stack.pop() {
            if idx >= clauses.len() {
                return None;
            }
            if needed.insert(idx) {
                stack.extend(derivations.get(idx)?.premises());
            }
        }

        let steps = needed
            .into_iter()
            .map(|idx| ProofStep {
                clause_idx: idx,
                derivation: derivations[idx].clone(),
                conclusion: clauses[idx].clone(),
            })
            .collect();

        Some(Proof {
            steps,
            empty_clause_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "[{}] {}  ({})", step.clause_idx, step.conclusion, step.derivation)?;
        }
        Ok(())
    }
}

// =============================================================================
// Entailment
// =============================================================================

/// Everything returned by one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entailment {
    pub verdict: Verdict,
    pub stats: ProofStats,
    /// Present exactly when the verdict is [`Verdict::Proven`]
    pub proof: Option<Proof>,
}

impl Entailment {
    pub fn is_proven(&self) -> bool {
        self.verdict == Verdict::Proven
    }
}
