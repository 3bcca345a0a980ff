//! Resource limits, cancellation and concurrent queries

use refute::{parse_literal, KnowledgeBase, Prover, ProverConfig, ResourceLimit, Rule, Verdict};
use std::sync::atomic::Ordering;
use std::time::Duration;

/// P(A) ⇒ Q(A) ⇒ R(A) ⇒ S(A): the refutation of S(A) needs three rounds
fn chain_kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.add_fact("P(A)");
    kb.add_rule(Rule::new(["P(A)"], "Q(A)"));
    kb.add_rule(Rule::new(["Q(A)"], "R(A)"));
    kb.add_rule(Rule::new(["R(A)"], "S(A)"));
    kb
}

fn run(config: ProverConfig, query: &str) -> refute::Entailment {
    let clauses = chain_kb().to_clauses().unwrap();
    Prover::new(config).entails(&clauses, &parse_literal(query).unwrap())
}

#[test]
fn test_iteration_cap_is_inconclusive_not_disproven() {
    let result = run(ProverConfig::default().with_max_iterations(1), "S(A)");
    assert_eq!(result.verdict, Verdict::Inconclusive);
    assert_eq!(result.stats.limit, Some(ResourceLimit::Iterations));
    assert_eq!(result.stats.iterations, 1);
    assert!(result.proof.is_none());

    let result = run(ProverConfig::default().with_max_iterations(2), "S(A)");
    assert_eq!(result.verdict, Verdict::Inconclusive);
}

#[test]
fn test_enough_iterations_proves_chain() {
    let result = run(ProverConfig::default().with_max_iterations(3), "S(A)");
    assert_eq!(result.verdict, Verdict::Proven);
    assert_eq!(result.stats.iterations, 3);
}

#[test]
fn test_unreachable_query_saturates() {
    let result = run(ProverConfig::default(), "T(A)");
    assert_eq!(result.verdict, Verdict::Disproven);
}

#[test]
fn test_always_terminates_with_small_caps() {
    for cap in 0..6 {
        for query in ["S(A)", "T(A)", "¬P(A)", "Q(B)"] {
            let result = run(ProverConfig::default().with_max_iterations(cap), query);
            assert!(result.stats.iterations <= cap);
            if result.verdict == Verdict::Inconclusive {
                assert!(result.stats.limit.is_some());
            }
        }
    }
}

#[test]
fn test_clause_limit() {
    let result = run(ProverConfig::default().with_max_clauses(6), "S(A)");
    assert_eq!(result.verdict, Verdict::Inconclusive);
    assert_eq!(result.stats.limit, Some(ResourceLimit::Clauses));
    assert!(result.stats.final_clause_count > 6);
}

#[test]
fn test_expired_timeout_stops_before_first_round() {
    let clauses = chain_kb().to_clauses().unwrap();
    let prover = Prover::new(ProverConfig::default().with_timeout(Duration::ZERO));
    let query = parse_literal("S(A)").unwrap();

    let result = prover.entails(&clauses, &query);
    assert_eq!(result.verdict, Verdict::Inconclusive);
    assert_eq!(result.stats.limit, Some(ResourceLimit::Timeout));
    assert_eq!(result.stats.iterations, 0);
    assert!(result.proof.is_none());
}

#[test]
fn test_generous_timeout_does_not_interfere() {
    let clauses = chain_kb().to_clauses().unwrap();
    let prover = Prover::new(ProverConfig::default().with_timeout(Duration::from_secs(60)));

    let result = prover.entails(&clauses, &parse_literal("S(A)").unwrap());
    assert_eq!(result.verdict, Verdict::Proven);
    assert_eq!(result.stats.limit, None);
}

#[test]
fn test_cancellation() {
    let clauses = chain_kb().to_clauses().unwrap();
    let prover = Prover::default();
    let cancel = prover.cancel_handle();
    cancel.store(true, Ordering::Relaxed);

    let result = prover.entails(&clauses, &parse_literal("S(A)").unwrap());
    assert_eq!(result.verdict, Verdict::Inconclusive);
    assert_eq!(result.stats.limit, Some(ResourceLimit::Cancelled));

    // The flag stays raised for later queries until it is cleared
    let again = prover.entails(&clauses, &parse_literal("S(A)").unwrap());
    assert_eq!(again.stats.limit, Some(ResourceLimit::Cancelled));

    prover.reset_cancel();
    let resumed = prover.entails(&clauses, &parse_literal("S(A)").unwrap());
    assert_eq!(resumed.verdict, Verdict::Proven);
    assert!(!cancel.load(Ordering::Relaxed));
}

#[test]
fn test_concurrent_queries_share_clause_set() {
    let clauses = chain_kb().to_clauses().unwrap();
    let prover = Prover::default();

    let (proven, disproven) = std::thread::scope(|s| {
        let a = s.spawn(|| prover.entails(&clauses, &parse_literal("S(A)").unwrap()));
        let b = s.spawn(|| prover.entails(&clauses, &parse_literal("T(A)").unwrap()));
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(proven.verdict, Verdict::Proven);
    assert_eq!(disproven.verdict, Verdict::Disproven);
    assert_eq!(clauses.len(), 4);
}
