//! Terms: constants, variables and compound predicate applications

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Single-letter names that are always read as variables
pub const RESERVED_VARIABLES: [&str; 4] = ["x", "y", "z", "m"];

/// Prefix that marks any token as a variable (`?who`, `?x1`)
pub const VARIABLE_MARKER: char = '?';

/// A variable in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    /// Whether a bare token is a variable under the lexical convention.
    ///
    /// There is no symbol table: `x`, `y`, `z`, `m` and anything starting
    /// with `?` are variables, everything else is a constant.
    pub fn is_variable_token(token: &str) -> bool {
        RESERVED_VARIABLES.contains(&token) || token.starts_with(VARIABLE_MARKER)
    }
}

/// A constant symbol
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A functor (predicate or function name) with arity
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: usize,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FunctionSymbol {
            name: name.into(),
            arity,
        }
    }
}

/// A term in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Constant(Constant),
    Variable(Variable),
    Compound(FunctionSymbol, Vec<Term>),
}

impl Term {
    /// Build a constant term
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(Constant::new(name))
    }

    /// Build a variable term
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    /// Build a compound term; the arity is taken from `args`
    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Compound(FunctionSymbol::new(functor, args.len()), args)
    }

    /// Build an atom from a bare token, classifying it by the lexical convention
    pub fn atom(token: impl Into<String>) -> Self {
        let token = token.into();
        if Variable::is_variable_token(&token) {
            Term::Variable(Variable { name: token })
        } else {
            Term::Constant(Constant { name: token })
        }
    }

    /// Functor name for compounds, the symbol itself for atoms
    pub fn name(&self) -> &str {
        match self {
            Term::Constant(c) => &c.name,
            Term::Variable(v) => &v.name,
            Term::Compound(f, _) => &f.name,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Term::Compound(_, args) => args.len(),
            _ => 0,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// True if no variable occurs anywhere in the term
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Constant(_) => true,
            Term::Variable(_) => false,
            Term::Compound(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Occurs check: does `var` appear anywhere inside this term?
    pub fn contains_variable(&self, var: &Variable) -> bool {
        match self {
            Term::Variable(v) => v == var,
            Term::Constant(_) => false,
            Term::Compound(_, args) => args.iter().any(|arg| arg.contains_variable(var)),
        }
    }

    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) => {}
            Term::Compound(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Compound(func, args) => {
                write!(f, "{}(", func.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
