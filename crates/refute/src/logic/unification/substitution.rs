//! Variable substitutions

use crate::logic::core::clause::Clause;
use crate::logic::core::literal::Literal;
use crate::logic::core::term::{Term, Variable};
use std::collections::HashMap;
use std::fmt;

/// A substitution mapping variables to terms.
///
/// Application is simultaneous: every variable in a term is replaced by its
/// binding in one pass. [`Substitution::bind`] keeps the bindings idempotent,
/// so a single pass always yields the fully instantiated term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pub map: HashMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Add a variable -> term mapping as-is
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Add a variable -> term mapping with eager propagation.
    ///
    /// The new term is instantiated with the existing bindings, and the new
    /// binding is then pushed into every existing binding.
    pub fn bind(&mut self, var: Variable, term: Term) {
        let normalized = term.apply_substitution(self);

        let single = Substitution {
            map: HashMap::from([(var.clone(), normalized.clone())]),
        };
        for existing in self.map.values_mut() {
            *existing = existing.apply_substitution(&single);
        }

        self.map.insert(var, normalized);
    }

    /// Compose two substitutions.
    /// The result applies `self` first, then `other`.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();

        // Apply other to all terms in self
        for (var, term) in &self.map {
            result.insert(var.clone(), term.apply_substitution(other));
        }

        // Add mappings from other that aren't in self
        for (var, term) in &other.map {
            if !self.map.contains_key(var) {
                result.insert(var.clone(), term.clone());
            }
        }

        result
    }

    /// Get the term for a variable, if bound
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Look a binding up by variable name
    pub fn get_by_name(&self, name: &str) -> Option<&Term> {
        self.map.get(&Variable::new(name))
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.map.iter()
    }

    /// Apply this substitution to a term
    pub fn apply(&self, term: &Term) -> Term {
        term.apply_substitution(self)
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted so that log lines are stable
        let mut bindings: Vec<_> = self.map.iter().collect();
        bindings.sort();
        write!(f, "{{")?;
        for (i, (var, term)) in bindings.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} → {}", var, term)?;
        }
        write!(f, "}}")
    }
}

impl Term {
    /// Apply a substitution to this term
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.map.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) => self.clone(),
            Term::Compound(f, args) => {
                let new_args = args
                    .iter()
                    .map(|arg| arg.apply_substitution(subst))
                    .collect();
                Term::Compound(f.clone(), new_args)
            }
        }
    }
}

impl Literal {
    /// Apply a substitution to this literal
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        Literal {
            polarity: self.polarity,
            term: self.term.apply_substitution(subst),
        }
    }
}

impl Clause {
    /// Apply a substitution to this clause. Literals that become identical
    /// collapse into one.
    pub fn apply_substitution(&self, subst: &Substitution) -> Clause {
        self.literals
            .iter()
            .map(|lit| lit.apply_substitution(subst))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_substitution() {
        let x = Variable::new("x");
        let marco = Term::constant("Marco");

        let mut subst = Substitution::new();
        subst.insert(x.clone(), marco.clone());

        let result = Term::Variable(x).apply_substitution(&subst);
        assert_eq!(result, marco);
    }

    #[test]
    fn test_application_is_simultaneous() {
        // {x → y, y → A} applied once to f(x) gives f(y), not f(A)
        let mut subst = Substitution::new();
        subst.insert(Variable::new("x"), Term::variable("y"));
        subst.insert(Variable::new("y"), Term::constant("A"));

        let t = Term::compound("f", vec![Term::variable("x")]);
        assert_eq!(
            t.apply_substitution(&subst),
            Term::compound("f", vec![Term::variable("y")])
        );
    }

    #[test]
    fn test_bind_propagates() {
        let mut subst = Substitution::new();
        subst.bind(Variable::new("x"), Term::variable("y"));
        subst.bind(Variable::new("y"), Term::constant("A"));

        assert_eq!(subst.get_by_name("x"), Some(&Term::constant("A")));
        assert_eq!(subst.get_by_name("y"), Some(&Term::constant("A")));
    }

    #[test]
    fn test_compose() {
        let mut first = Substitution::new();
        first.insert(Variable::new("x"), Term::variable("y"));
        let mut second = Substitution::new();
        second.insert(Variable::new("y"), Term::constant("Cesar"));

        let composed = first.compose(&second);
        assert_eq!(composed.len(), 2);
        assert_eq!(composed.get_by_name("x"), Some(&Term::constant("Cesar")));
        assert_eq!(composed.get_by_name("y"), Some(&Term::constant("Cesar")));
    }

    #[test]
    fn test_clause_substitution_collapses() {
        let lit = |arg: &str| Literal::positive(Term::compound("P", vec![Term::atom(arg)]));
        let clause = Clause::new(vec![lit("x"), lit("A")]);

        let mut subst = Substitution::new();
        subst.insert(Variable::new("x"), Term::constant("A"));

        assert_eq!(clause.apply_substitution(&subst), Clause::unit(lit("A")));
    }

    #[test]
    fn test_display_is_sorted() {
        let mut subst = Substitution::new();
        subst.insert(Variable::new("y"), Term::constant("Cesar"));
        subst.insert(Variable::new("x"), Term::constant("Marco"));
        assert_eq!(subst.to_string(), "{x → Marco, y → Cesar}");
    }
}
