use log::debug;
use log::info;

use super::minimal_conflict_search::MinimalConflictSearch;
use super::ExplanationError;
use super::ExplanationProblem;
use super::ExplanationStatistics;
use crate::basic_types::time::Instant;
use crate::basic_types::Statement;
use crate::oracle::ConsistencyOracle;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::termination::TerminationCondition;
use crate::StatementSet;

/// Finds an explanation of why a configuration contains a given sub-configuration.
///
/// The explanation is a minimal subset of the union of the configuration, the requirement and
/// the knowledge base which, together with the negated sub-configuration, is inconsistent. In
/// other words: these statements are the reason that the sub-configuration could not have been
/// different.
///
/// The struct owns the [`ConsistencyOracle`] which is used to decide consistency, and the
/// [`ExplanationStatistics`] which are gathered over all of its searches.
///
/// # Example
/// ```rust
/// # use cxplain_core::oracle::FnOracle;
/// # use cxplain_core::statements;
/// # use cxplain_core::termination::Indefinite;
/// # use cxplain_core::CXPlain;
/// # use cxplain_core::ExplanationProblem;
/// # use cxplain_core::StatementSet;
/// // The configuration `b` is explained by the requirement `a` and the rule `a -> b`.
/// let oracle = FnOracle::new(|set: &StatementSet<&str>| {
///     let violates_rule = set.contains(&"a") && set.contains(&"a -> b") && set.contains(&"!b");
///     let contradicts_itself = set.contains(&"b") && set.contains(&"!b");
///     Ok(!violates_rule && !contradicts_itself)
/// });
///
/// let problem = ExplanationProblem::builder()
///     .requirement(statements!["a"])
///     .knowledge_base(statements!["a -> b", "c -> a"])
///     .configuration(statements!["c"])
///     .negated_sub_configuration(statements!["!b"])
///     .build()?;
///
/// let mut cxplain = CXPlain::new(oracle);
/// let explanation = cxplain.find_explanation(&problem, &mut Indefinite)?;
///
/// assert_eq!(explanation, statements!["a", "a -> b"]);
/// # Ok::<(), cxplain_core::ExplanationError>(())
/// ```
#[derive(Debug)]
pub struct CXPlain<Oracle> {
    oracle: Oracle,
    statistics: ExplanationStatistics,
}

impl<Oracle> CXPlain<Oracle> {
    pub fn new(oracle: Oracle) -> Self {
        CXPlain {
            oracle,
            statistics: ExplanationStatistics::default(),
        }
    }

    /// The statistics accumulated since creation or since the last call to
    /// [`CXPlain::reset_statistics`].
    pub fn statistics(&self) -> &ExplanationStatistics {
        &self.statistics
    }

    pub fn reset_statistics(&mut self) {
        self.statistics = ExplanationStatistics::default();
    }

    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut Oracle {
        &mut self.oracle
    }

    pub fn into_oracle(self) -> Oracle {
        self.oracle
    }

    /// Logs the gathered statistics if statistic logging is enabled (see
    /// [`crate::statistics::configure_statistic_logging`]).
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new("cxplain"));
        }
    }

    /// Returns an explanation for the provided [`ExplanationProblem`].
    ///
    /// If the union of the configuration, the requirement and the knowledge base is itself
    /// inconsistent then no explanation is possible and the empty set is returned.
    ///
    /// The caller is responsible for providing a negated sub-configuration which is consistent
    /// on its own; this is not checked.
    pub fn find_explanation<S: Statement>(
        &mut self,
        problem: &ExplanationProblem<S>,
        termination: &mut impl TerminationCondition,
    ) -> Result<StatementSet<S>, ExplanationError>
    where
        Oracle: ConsistencyOracle<S>,
    {
        debug!(
            "cxplain REQ={:?} KB={:?} CONF={:?} NSCONF={:?}",
            problem.requirement(),
            problem.knowledge_base(),
            problem.configuration(),
            problem.negated_sub_configuration()
        );

        let mut search =
            MinimalConflictSearch::new(&mut self.oracle, termination, &mut self.statistics);

        let configuration_with_requirement =
            search.union(problem.configuration(), problem.requirement());
        let candidates = search.union(&configuration_with_requirement, problem.knowledge_base());

        if !search.check_consistency(&candidates)? {
            info!("no explanation possible, the candidates are inconsistent on their own");
            return Ok(StatementSet::new());
        }

        let start = Instant::now();
        let explanation = search.cxp(
            &StatementSet::new(),
            &candidates,
            problem.negated_sub_configuration(),
        );
        self.statistics.time_spent_in_cxp += start.elapsed();

        let explanation = explanation?;
        debug!("cxplain found {explanation:?}");

        Ok(explanation)
    }

    /// Returns a minimal subset of `candidates` which is inconsistent together with
    /// `background`, without any preliminary check.
    ///
    /// Requires that `background` is consistent and that `background ∪ candidates` is not;
    /// otherwise the result is not guaranteed to be a conflict.
    pub fn find_minimal_conflict<S: Statement>(
        &mut self,
        candidates: &StatementSet<S>,
        background: &StatementSet<S>,
        termination: &mut impl TerminationCondition,
    ) -> Result<StatementSet<S>, ExplanationError>
    where
        Oracle: ConsistencyOracle<S>,
    {
        let start = Instant::now();
        let conflict =
            MinimalConflictSearch::new(&mut self.oracle, termination, &mut self.statistics).cxp(
                &StatementSet::new(),
                candidates,
                background,
            );
        self.statistics.time_spent_in_cxp += start.elapsed();

        conflict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::FnOracle;
    use crate::oracle::OracleError;
    use crate::statements;
    use crate::termination::Indefinite;
    use crate::termination::OracleCallBudget;

    /// Statements are integers, a set is inconsistent iff it contains all statements of one of
    /// the conflicts.
    fn conflicts_oracle(
        conflicts: Vec<Vec<i32>>,
    ) -> FnOracle<impl FnMut(&StatementSet<i32>) -> Result<bool, OracleError>> {
        FnOracle::new(move |set: &StatementSet<i32>| {
            Ok(!conflicts
                .iter()
                .any(|conflict| conflict.iter().all(|statement| set.contains(statement))))
        })
    }

    fn problem() -> ExplanationProblem<i32> {
        ExplanationProblem::new(
            statements![1, 2],
            statements![10, 11, 12, 13, 14, 15],
            statements![20, 21, 22],
            statements![-1],
        )
    }

    fn problem_conflicts() -> Vec<Vec<i32>> {
        vec![vec![-1, 2, 12], vec![-1, 21, 15, 11], vec![-1, 1, 20]]
    }

    fn is_consistent(conflicts: &[Vec<i32>], set: &StatementSet<i32>) -> bool {
        !conflicts
            .iter()
            .any(|conflict| conflict.iter().all(|statement| set.contains(statement)))
    }

    #[test]
    fn explanation_is_a_minimal_conflict() {
        let conflicts = problem_conflicts();
        let mut cxplain = CXPlain::new(conflicts_oracle(conflicts.clone()));
        let problem = problem();

        let explanation = cxplain
            .find_explanation(&problem, &mut Indefinite)
            .expect("the oracle does not fail");

        let nsconf = problem.negated_sub_configuration();
        assert!(!explanation.is_empty());
        assert!(!is_consistent(&conflicts, &nsconf.union(&explanation)));
        for removed in explanation.iter() {
            let reduced: StatementSet<i32> = explanation
                .iter()
                .copied()
                .filter(|statement| statement != removed)
                .collect();
            assert!(is_consistent(&conflicts, &nsconf.union(&reduced)));
        }
    }

    #[test]
    fn explanation_is_deterministic() {
        let problem = problem();

        let first = CXPlain::new(conflicts_oracle(problem_conflicts()))
            .find_explanation(&problem, &mut Indefinite)
            .expect("the oracle does not fail");
        let second = CXPlain::new(conflicts_oracle(problem_conflicts()))
            .find_explanation(&problem, &mut Indefinite)
            .expect("the oracle does not fail");

        assert_eq!(first, second);
    }

    #[test]
    fn inconsistent_configuration_has_no_explanation() {
        let mut cxplain = CXPlain::new(conflicts_oracle(vec![vec![20, 10]]));

        let explanation = cxplain
            .find_explanation(&problem(), &mut Indefinite)
            .expect("the oracle does not fail");

        assert!(explanation.is_empty());
        assert_eq!(cxplain.statistics().num_consistency_checks, 1);
        assert_eq!(cxplain.statistics().num_cxp_calls, 0);
    }

    #[test]
    fn number_of_oracle_calls_is_linear_in_the_number_of_candidates() {
        let problem = problem();
        let num_candidates = (problem.requirement().len()
            + problem.knowledge_base().len()
            + problem.configuration().len()) as u64;
        let mut cxplain = CXPlain::new(conflicts_oracle(problem_conflicts()));

        let _ = cxplain
            .find_explanation(&problem, &mut Indefinite)
            .expect("the oracle does not fail");

        assert!(cxplain.statistics().num_consistency_checks <= 2 * num_candidates);
    }

    #[test]
    fn candidates_are_ordered_configuration_requirement_knowledge_base() {
        // Every statement is needed, so the explanation contains all candidates in the order
        // in which they were handed to the search.
        let mut cxplain = CXPlain::new(conflicts_oracle(vec![vec![-1, 1, 2, 10, 20]]));
        let problem = ExplanationProblem::new(
            statements![1, 2],
            statements![10],
            statements![20],
            statements![-1],
        );

        let explanation = cxplain
            .find_explanation(&problem, &mut Indefinite)
            .expect("the oracle does not fail");

        assert_eq!(explanation, statements![20, 1, 2, 10]);
        assert_eq!(cxplain.statistics().num_union_operations, 2 + 3 * 3);
    }

    #[test]
    fn statistics_can_be_reset() {
        let mut cxplain = CXPlain::new(conflicts_oracle(problem_conflicts()));
        let _ = cxplain
            .find_explanation(&problem(), &mut Indefinite)
            .expect("the oracle does not fail");
        assert!(cxplain.statistics().num_consistency_checks > 0);

        cxplain.reset_statistics();

        assert_eq!(cxplain.statistics().num_consistency_checks, 0);
        assert_eq!(cxplain.statistics().num_union_operations, 0);
    }

    #[test]
    fn exhausted_budget_terminates_the_search() {
        let mut cxplain = CXPlain::new(conflicts_oracle(problem_conflicts()));
        let mut budget = OracleCallBudget::new(2);

        let result = cxplain.find_explanation(&problem(), &mut budget);

        assert!(matches!(result, Err(ExplanationError::Terminated)));
        assert_eq!(cxplain.statistics().num_consistency_checks, 2);
    }

    #[test]
    fn minimal_conflict_without_preliminary_check() {
        let mut cxplain = CXPlain::new(conflicts_oracle(vec![vec![5, 3], vec![1, 2, 3]]));

        let conflict = cxplain
            .find_minimal_conflict(&statements![1, 2, 3, 4, 5], &statements![], &mut Indefinite)
            .expect("the oracle does not fail");

        assert_eq!(conflict, statements![3, 5]);
    }
}
