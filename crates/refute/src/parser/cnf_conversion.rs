//! Conversion from a knowledge base to CNF clauses
//!
//! - each fact becomes a unit clause,
//! - each rule `P₁ ∧ … ∧ Pₙ ⇒ C` becomes `¬P₁ ∨ … ∨ ¬Pₙ ∨ C`,
//! - each raw clause is passed through.
//!
//! The result has set semantics at both the clause and the literal level.

use super::literal::parse_literal;
use crate::error::Result;
use crate::knowledge_base::{KnowledgeBase, Rule};
use crate::logic::{Clause, ClauseSet, Literal};

/// Convert a knowledge base into a clause set.
///
/// Pure and idempotent. The first malformed literal aborts the whole
/// conversion; nothing is silently dropped.
pub fn to_clauses(kb: &KnowledgeBase) -> Result<ClauseSet> {
    let mut clauses = ClauseSet::new();

    for fact in kb.facts() {
        clauses.insert(Clause::unit(Literal::parse_ground(fact)?));
    }

    for rule in kb.rules() {
        clauses.insert(rule_to_clause(rule)?);
    }

    for raw in kb.raw_clauses() {
        let literals = raw
            .iter()
            .map(|text| parse_literal(text))
            .collect::<Result<Vec<_>>>()?;
        clauses.insert(Clause::new(literals));
    }

    log::debug!(
        "converted knowledge base ({} entries) into {} clauses",
        kb.len(),
        clauses.len()
    );
    Ok(clauses)
}

/// Implication as disjunction: premises are complemented, the conclusion
/// keeps its own sign
pub fn rule_to_clause(rule: &Rule) -> Result<Clause> {
    let mut literals = Vec::with_capacity(rule.premises.len() + 1);
    for premise in &rule.premises {
        literals.push(parse_literal(premise)?.complement());
    }
    literals.push(parse_literal(&rule.conclusion)?);
    Ok(Clause::new(literals))
}
