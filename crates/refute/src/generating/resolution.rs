//! Binary resolution inference rule

use crate::logic::{unify, Clause, Literal, Substitution};

/// One way of resolving two clauses
#[derive(Debug, Clone)]
pub struct Resolvent {
    pub conclusion: Clause,
    /// The complementary pair that was removed, as written in the premises
    pub resolved: (Literal, Literal),
    pub unifier: Substitution,
}

/// All binary resolvents of `clause1` and `clause2`.
///
/// Each resolvent removes exactly one complementary pair: a literal from
/// `clause1` and an opposite-sign literal from `clause2` whose terms unify.
/// The unifier is applied to every surviving literal of both clauses.
/// Pairs that fail to unify are skipped.
pub fn resolution(clause1: &Clause, clause2: &Clause) -> Vec<Resolvent> {
    let mut results = Vec::new();

    for lit1 in clause1.iter() {
        for lit2 in clause2.iter() {
            if !lit1.is_opposite(lit2) {
                continue;
            }

            let mgu = match unify(&lit1.term, &lit2.term) {
                Ok(mgu) => mgu,
                Err(err) => {
                    log::trace!("skip {} / {}: {}", lit1, lit2, err);
                    continue;
                }
            };

            let conclusion: Clause = clause1
                .without(lit1)
                .chain(clause2.without(lit2))
                .map(|lit| lit.apply_substitution(&mgu))
                .collect();

            results.push(Resolvent {
                conclusion,
                resolved: (lit1.clone(), lit2.clone()),
                unifier: mgu,
            });
        }
    }

    results
}
