//! Prover: resolution refutation over a clause set.
//!
//! The query is negated and added as a unit clause to a private copy of the
//! input clauses. Each round then resolves every unordered pair of distinct
//! working clauses:
//!
//! - an empty resolvent ends the run as [`Verdict::Proven`],
//! - a round without any new clause ends it as [`Verdict::Disproven`],
//! - otherwise the new clauses are merged and the next round starts.
//!
//! Hitting a configured limit ends the run as [`Verdict::Inconclusive`] with
//! the limit recorded in [`ProofStats::limit`].

use crate::config::ProverConfig;
use crate::error::Result;
use crate::generating::resolution;
use crate::logic::{Clause, ClauseSet, Literal};
use crate::parser::parse_literal;
use crate::state::{Derivation, Entailment, Proof, ProofStats, ResourceLimit, Verdict};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Decide whether `clauses` entail `query` using the default configuration
pub fn entails(clauses: &ClauseSet, query: &Literal) -> Entailment {
    Prover::default().entails(clauses, query)
}

/// Resolution refutation engine.
///
/// Holds only configuration and the cancellation flag, so one prover can
/// serve concurrent queries; each query owns its working clause set.
///
/// Cancellation is sticky: once the flag is raised every query on this
/// prover, running or later, ends as cancelled until [`Prover::reset_cancel`]
/// is called.
#[derive(Debug, Default)]
pub struct Prover {
    config: ProverConfig,
    /// Set to `true` to stop at the next round boundary
    cancel: Arc<AtomicBool>,
}

/// Clause set of a single query, with the derivation of every member
struct WorkingSet {
    clauses: ClauseSet,
    derivations: Vec<Derivation>,
}

impl WorkingSet {
    fn new(input: &ClauseSet) -> Self {
        WorkingSet {
            clauses: input.clone(),
            derivations: vec![Derivation::Input; input.len()],
        }
    }

    /// Insert a clause; a clause already present keeps its first derivation
    fn insert(&mut self, clause: Clause, derivation: Derivation) -> usize {
        let (idx, inserted) = self.clauses.insert_full(clause);
        if inserted {
            self.derivations.push(derivation);
        }
        idx
    }

    fn proof(&self, empty_clause_idx: usize) -> Option<Proof> {
        let clauses: Vec<&Clause> = self.clauses.iter().collect();
        Proof::extract(&clauses, &self.derivations, empty_clause_idx)
    }

    fn len(&self) -> usize {
        self.clauses.len()
    }
}

impl Prover {
    pub fn new(config: ProverConfig) -> Self {
        Prover {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Shared flag that stops any running query at its next round boundary
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Raise the cancellation flag
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Clear the cancellation flag so that new queries run normally
    pub fn reset_cancel(&self) {
        self.cancel.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Parse `query` and run [`Prover::entails`]
    pub fn entails_str(&self, clauses: &ClauseSet, query: &str) -> Result<Entailment> {
        let query = parse_literal(query)?;
        Ok(self.entails(clauses, &query))
    }

    /// Decide whether `clauses` entail `query`. The caller's set is not modified.
    pub fn entails(&self, clauses: &ClauseSet, query: &Literal) -> Entailment {
        let start = Instant::now();
        let mut stats = ProofStats::default();

        let mut working = WorkingSet::new(clauses);
        working.insert(Clause::unit(query.complement()), Derivation::NegatedQuery);

        if let Some(idx) = working.clauses.get_index_of(&Clause::empty()) {
            log::info!("{}: input already contains the empty clause", query);
            return self.finish(Verdict::Proven, stats, &working, working.proof(idx));
        }

        while stats.iterations < self.config.max_iterations {
            if let Some(limit) = self.check_limits(start) {
                stats.limit = Some(limit);
                return self.finish(Verdict::Inconclusive, stats, &working, None);
            }
            stats.iterations += 1;

            let mut new_clauses: IndexMap<Clause, Derivation> = IndexMap::new();
            let n = working.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    let (left, right) = (&working.clauses[i], &working.clauses[j]);
                    for resolvent in resolution(left, right) {
                        stats.resolutions += 1;
                        let derivation = Derivation::Resolution { left: i, right: j };

                        if resolvent.conclusion.is_empty() {
                            log::debug!(
                                "empty clause from [{}] {} and [{}] {} with {}",
                                i,
                                left,
                                j,
                                right,
                                resolvent.unifier
                            );
                            let idx = working.insert(Clause::empty(), derivation);
                            let proof = working.proof(idx);
                            return self.finish(Verdict::Proven, stats, &working, proof);
                        }

                        if !working.clauses.contains(&resolvent.conclusion) {
                            log::trace!("[{}] × [{}] ⊢ {}", i, j, resolvent.conclusion);
                            new_clauses.entry(resolvent.conclusion).or_insert(derivation);
                        }
                    }
                }
            }

            log::debug!(
                "iteration {}: {} clauses, {} new",
                stats.iterations,
                n,
                new_clauses.len()
            );

            if new_clauses.is_empty() {
                return self.finish(Verdict::Disproven, stats, &working, None);
            }

            stats.clauses_generated += new_clauses.len();
            for (clause, derivation) in new_clauses {
                working.insert(clause, derivation);
            }

            if let Some(max) = self.config.max_clauses {
                if working.len() > max {
                    stats.limit = Some(ResourceLimit::Clauses);
                    return self.finish(Verdict::Inconclusive, stats, &working, None);
                }
            }
        }

        stats.limit = Some(ResourceLimit::Iterations);
        self.finish(Verdict::Inconclusive, stats, &working, None)
    }

    fn check_limits(&self, start: Instant) -> Option<ResourceLimit> {
        if self.is_cancelled() {
            return Some(ResourceLimit::Cancelled);
        }
        match self.config.timeout {
            Some(timeout) if start.elapsed() >= timeout => Some(ResourceLimit::Timeout),
            _ => None,
        }
    }

    fn finish(
        &self,
        verdict: Verdict,
        mut stats: ProofStats,
        working: &WorkingSet,
        proof: Option<Proof>,
    ) -> Entailment {
        stats.final_clause_count = working.len();
        match stats.limit {
            Some(limit) => log::info!(
                "{} after {} iterations ({}, {} clauses)",
                verdict,
                stats.iterations,
                limit,
                stats.final_clause_count
            ),
            None => log::info!(
                "{} after {} iterations ({} resolutions, {} clauses)",
                verdict,
                stats.iterations,
                stats.resolutions,
                stats.final_clause_count
            ),
        }
        Entailment {
            verdict,
            stats,
            proof,
        }
    }
}
