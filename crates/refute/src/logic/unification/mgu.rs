//! Most General Unifier (MGU) computation

use super::substitution::Substitution;
use crate::logic::core::term::{Term, Variable};
use thiserror::Error;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Errors that can occur during unification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnificationError {
    /// Compound terms with different functor names
    #[error("functor mismatch: {left} vs {right}")]
    FunctorMismatch { left: String, right: String },

    /// Same functor, different number of arguments
    #[error("arity mismatch for {functor}: {left} vs {right}")]
    ArityMismatch {
        functor: String,
        left: usize,
        right: usize,
    },

    /// Two distinct constants, or a constant against a compound
    #[error("cannot unify {left} with {right}")]
    ConstantMismatch { left: Term, right: Term },

    /// Occurs check failed - variable occurs in the term it would be bound to
    #[error("cyclic binding: {variable} occurs in {term}")]
    CyclicBinding { variable: Variable, term: Term },
}

/// Unify two terms, returning a most general unifier (MGU) if one exists
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    let mut subst = Substitution::new();
    unify_into(term1, term2, &mut subst)?;
    Ok(subst)
}

/// Unify two terms under an existing substitution, returning the extended one
pub fn unify_with(term1: &Term, term2: &Term, subst: &Substitution) -> UnificationResult {
    let mut extended = subst.clone();
    unify_into(term1, term2, &mut extended)?;
    Ok(extended)
}

fn unify_into(term1: &Term, term2: &Term, subst: &mut Substitution) -> Result<(), UnificationError> {
    let t1 = term1.apply_substitution(subst);
    let t2 = term2.apply_substitution(subst);

    match (&t1, &t2) {
        // Same term - nothing to do
        _ if t1 == t2 => Ok(()),

        (Term::Variable(v), t) | (t, Term::Variable(v)) => bind_variable(v, t, subst),

        (Term::Compound(f1, args1), Term::Compound(f2, args2)) => {
            if f1.name != f2.name {
                return Err(UnificationError::FunctorMismatch {
                    left: f1.name.clone(),
                    right: f2.name.clone(),
                });
            }
            if args1.len() != args2.len() {
                return Err(UnificationError::ArityMismatch {
                    functor: f1.name.clone(),
                    left: args1.len(),
                    right: args2.len(),
                });
            }

            // Left to right, stopping at the first failure
            for (arg1, arg2) in args1.iter().zip(args2.iter()) {
                unify_into(arg1, arg2, subst)?;
            }
            Ok(())
        }

        _ => Err(UnificationError::ConstantMismatch {
            left: t1.clone(),
            right: t2.clone(),
        }),
    }
}

fn bind_variable(var: &Variable, term: &Term, subst: &mut Substitution) -> Result<(), UnificationError> {
    if let Some(bound) = subst.get(var).cloned() {
        return unify_into(&bound, term, subst);
    }

    if term.contains_variable(var) {
        return Err(UnificationError::CyclicBinding {
            variable: var.clone(),
            term: term.clone(),
        });
    }

    subst.bind(var.clone(), term.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(name: &str, args: &[Term]) -> Term {
        Term::compound(name, args.to_vec())
    }

    #[test]
    fn test_unify_variable_with_constant() {
        let t1 = f("f", &[Term::variable("x")]);
        let t2 = f("f", &[Term::constant("Constant")]);

        let result = unify(&t1, &t2).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get_by_name("x"), Some(&Term::constant("Constant")));
    }

    #[test]
    fn test_functor_mismatch() {
        let t1 = f("f", &[Term::variable("x")]);
        let t2 = f("g", &[Term::constant("Constant")]);

        let result = unify(&t1, &t2);
        assert!(matches!(result, Err(UnificationError::FunctorMismatch { .. })));
    }

    #[test]
    fn test_arity_mismatch() {
        let t1 = f("Conoce", &[Term::variable("x")]);
        let t2 = f("Conoce", &[Term::constant("Alice"), Term::constant("Bob")]);

        assert_eq!(
            unify(&t1, &t2),
            Err(UnificationError::ArityMismatch {
                functor: "Conoce".into(),
                left: 1,
                right: 2,
            })
        );
    }

    #[test]
    fn test_constant_mismatch() {
        let a = Term::constant("Marco");
        let b = Term::constant("Cesar");
        assert!(matches!(unify(&a, &b), Err(UnificationError::ConstantMismatch { .. })));

        let c = f("g", &[Term::constant("Marco")]);
        assert!(matches!(unify(&a, &c), Err(UnificationError::ConstantMismatch { .. })));
        assert!(matches!(unify(&c, &a), Err(UnificationError::ConstantMismatch { .. })));
    }

    #[test]
    fn test_occurs_check() {
        let x = Term::variable("x");
        let fx = f("f", &[Term::variable("x")]);

        let result = unify(&x, &fx);
        assert!(matches!(result, Err(UnificationError::CyclicBinding { .. })));
    }

    #[test]
    fn test_identical_terms_give_empty_substitution() {
        let t = f("Romano", &[Term::variable("x")]);
        assert!(unify(&t, &t).unwrap().is_empty());
    }

    #[test]
    fn test_shared_variable_across_arguments() {
        // Leal(x, x) against Leal(Marco, y): x → Marco, then y → Marco
        let t1 = f("Leal", &[Term::variable("x"), Term::variable("x")]);
        let t2 = f("Leal", &[Term::constant("Marco"), Term::variable("y")]);

        let sigma = unify(&t1, &t2).unwrap();
        assert_eq!(sigma.get_by_name("x"), Some(&Term::constant("Marco")));
        assert_eq!(sigma.get_by_name("y"), Some(&Term::constant("Marco")));
        assert_eq!(t1.apply_substitution(&sigma), t2.apply_substitution(&sigma));
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let t1 = f("P", &[Term::constant("A"), Term::variable("x")]);
        let t2 = f("P", &[Term::constant("B"), Term::constant("C")]);
        assert!(matches!(unify(&t1, &t2), Err(UnificationError::ConstantMismatch { .. })));
    }

    #[test]
    fn test_unify_with_existing_binding() {
        let mut base = Substitution::new();
        base.bind(Variable::new("x"), Term::constant("Marco"));

        let ok = unify_with(&Term::variable("x"), &Term::constant("Marco"), &base).unwrap();
        assert_eq!(ok, base);

        let clash = unify_with(&Term::variable("x"), &Term::constant("Cesar"), &base);
        assert!(matches!(clash, Err(UnificationError::ConstantMismatch { .. })));
    }

    #[test]
    fn test_variable_chain() {
        // f(x, y) with f(y, A): x → y first, then y → A propagates into x
        let t1 = f("f", &[Term::variable("x"), Term::variable("y")]);
        let t2 = f("f", &[Term::variable("y"), Term::constant("A")]);

        let sigma = unify(&t1, &t2).unwrap();
        assert_eq!(sigma.get_by_name("x"), Some(&Term::constant("A")));
        assert_eq!(t1.apply_substitution(&sigma), t2.apply_substitution(&sigma));
    }
}
