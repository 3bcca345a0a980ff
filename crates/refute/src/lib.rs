//! refute: a small resolution-refutation theorem prover
//!
//! A [`KnowledgeBase`] of ground facts, implication rules and raw disjunctive
//! clauses is converted to CNF with [`to_clauses`]; [`entails`] then decides
//! whether a literal follows by adding its negation and searching for the
//! empty clause with binary resolution and unification.
//!
//! ```
//! use refute::{entails, parse_literal, KnowledgeBase, Rule, Verdict};
//!
//! let mut kb = KnowledgeBase::new();
//! kb.add_fact("Pompeyano(Marco)");
//! kb.add_rule(Rule::new(["Pompeyano(x)"], "Romano(x)"));
//!
//! let clauses = kb.to_clauses().unwrap();
//! let result = entails(&clauses, &parse_literal("Romano(Marco)").unwrap());
//! assert_eq!(result.verdict, Verdict::Proven);
//! ```

pub mod config;
pub mod error;
pub mod generating;
pub mod knowledge_base;
pub mod logic;
pub mod parser;
pub mod prover;
pub mod state;

pub use config::ProverConfig;
pub use error::ParseError;
pub use knowledge_base::{KnowledgeBase, Rule};
pub use logic::{
    unify, Clause, ClauseSet, Constant, FunctionSymbol, Literal, Substitution, Term,
    UnificationError, UnificationResult, Variable,
};
pub use parser::{parse_literal, parse_term, to_clauses};
pub use prover::{entails, Prover};
pub use state::{Derivation, Entailment, Proof, ProofStats, ProofStep, ResourceLimit, Verdict};
