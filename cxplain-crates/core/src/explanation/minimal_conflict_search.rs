use log::debug;
use log::trace;

use super::ExplanationError;
use super::ExplanationStatistics;
use crate::basic_types::Statement;
use crate::cxplain_assert_simple;
use crate::oracle::ConsistencyOracle;
use crate::statistics::MovingAverage;
use crate::termination::TerminationCondition;
use crate::StatementSet;

/// The divide-and-conquer search for a minimal conflict (CXP).
///
/// The search is a short-lived context object: it borrows the oracle, the termination condition
/// and the statistics of its caller for the duration of a single top-level call.
///
/// Given a set of candidates `C` and a background `B` such that `B ∪ C` is inconsistent, the
/// search returns a minimal subset `E` of `C` such that `B ∪ E` is inconsistent. It does so by
/// repeatedly splitting the candidates into two halves and asking the oracle whether the
/// background extended with one half is already inconsistent on its own.
pub(crate) struct MinimalConflictSearch<'a, Oracle, Termination> {
    oracle: &'a mut Oracle,
    termination: &'a mut Termination,
    statistics: &'a mut ExplanationStatistics,
}

impl<'a, Oracle, Termination: TerminationCondition> MinimalConflictSearch<'a, Oracle, Termination> {
    pub(crate) fn new(
        oracle: &'a mut Oracle,
        termination: &'a mut Termination,
        statistics: &'a mut ExplanationStatistics,
    ) -> Self {
        MinimalConflictSearch {
            oracle,
            termination,
            statistics,
        }
    }

    /// Asks the oracle whether `statements` are consistent.
    ///
    /// The termination condition is polled before the oracle is invoked; if it indicates that the
    /// search should stop then [`ExplanationError::Terminated`] is returned and the oracle is not
    /// called.
    pub(crate) fn check_consistency<S: Statement>(
        &mut self,
        statements: &StatementSet<S>,
    ) -> Result<bool, ExplanationError>
    where
        Oracle: ConsistencyOracle<S>,
    {
        if self.termination.should_stop() {
            return Err(ExplanationError::Terminated);
        }

        self.statistics.num_consistency_checks += 1;
        self.statistics
            .average_consistency_check_size
            .add_term(statements.len() as u64);

        let is_consistent = self.oracle.is_consistent(statements)?;
        self.termination.oracle_call_has_been_made();

        trace!(
            "consistency check on {} statements: {}",
            statements.len(),
            if is_consistent {
                "consistent"
            } else {
                "inconsistent"
            }
        );

        Ok(is_consistent)
    }

    pub(crate) fn union<S: Statement>(
        &mut self,
        first: &StatementSet<S>,
        second: &StatementSet<S>,
    ) -> StatementSet<S> {
        self.statistics.num_union_operations += 1;
        first.union(second)
    }

    /// Returns a minimal subset of `candidates` which is inconsistent with `background`.
    ///
    /// `delta` is the set of statements which was most recently added to `background`; if it is
    /// empty then `background` is assumed to be consistent and the oracle is not asked.
    pub(crate) fn cxp<S: Statement>(
        &mut self,
        delta: &StatementSet<S>,
        candidates: &StatementSet<S>,
        background: &StatementSet<S>,
    ) -> Result<StatementSet<S>, ExplanationError>
    where
        Oracle: ConsistencyOracle<S>,
    {
        self.cxp_at_depth(delta, candidates, background, 0)
    }

    fn cxp_at_depth<S: Statement>(
        &mut self,
        delta: &StatementSet<S>,
        candidates: &StatementSet<S>,
        background: &StatementSet<S>,
        depth: usize,
    ) -> Result<StatementSet<S>, ExplanationError>
    where
        Oracle: ConsistencyOracle<S>,
    {
        self.statistics.num_cxp_calls += 1;
        debug!(
            "{:indent$}cxp D={delta:?} C={candidates:?} B={background:?}",
            "",
            indent = 2 * depth
        );

        // The statements added last already make the background inconsistent, none of the
        // candidates are needed.
        if !delta.is_empty() && !self.check_consistency(background)? {
            self.statistics.num_pruned_calls += 1;
            debug!("{:indent$}cxp pruned", "", indent = 2 * depth);
            return Ok(StatementSet::new());
        }

        if candidates.is_empty() {
            return Ok(StatementSet::new());
        }

        if candidates.is_singleton() {
            debug!("{:indent$}cxp found {candidates:?}", "", indent = 2 * depth);
            return Ok(candidates.clone());
        }

        let (first_half, second_half) = candidates.split();
        trace!(
            "{:indent$}split into {} and {} statements",
            "",
            first_half.len(),
            second_half.len(),
            indent = 2 * depth
        );

        let background_with_second_half = self.union(background, &second_half);
        self.statistics.num_left_branch_calls += 1;
        let first_conflict = self.cxp_at_depth(
            &second_half,
            &first_half,
            &background_with_second_half,
            depth + 1,
        )?;

        let background_with_first_conflict = self.union(background, &first_conflict);
        self.statistics.num_right_branch_calls += 1;
        let second_conflict = self.cxp_at_depth(
            &first_conflict,
            &second_half,
            &background_with_first_conflict,
            depth + 1,
        )?;

        let conflict = self.union(&first_conflict, &second_conflict);
        cxplain_assert_simple!(conflict.len() <= candidates.len());

        debug!("{:indent$}cxp found {conflict:?}", "", indent = 2 * depth);
        Ok(conflict)
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

    /// A set of integers is inconsistent iff it contains every element of `conflict`.
    fn contains_all(
        conflict: Vec<u32>,
    ) -> impl FnMut(&StatementSet<u32>) -> Result<bool, OracleError> {
        move |set: &StatementSet<u32>| {
            Ok(!conflict.iter().all(|statement| set.contains(statement)))
        }
    }

    fn run_cxp(
        check: impl FnMut(&StatementSet<u32>) -> Result<bool, OracleError>,
        delta: &StatementSet<u32>,
        candidates: &StatementSet<u32>,
        background: &StatementSet<u32>,
    ) -> (Result<StatementSet<u32>, ExplanationError>, ExplanationStatistics) {
        let mut oracle = FnOracle::new(check);
        let mut termination = Indefinite;
        let mut statistics = ExplanationStatistics::default();

        let result = MinimalConflictSearch::new(&mut oracle, &mut termination, &mut statistics)
            .cxp(delta, candidates, background);

        (result, statistics)
    }

    #[test]
    fn inconsistent_background_is_pruned_without_unions() {
        let (result, statistics) = run_cxp(
            |_: &StatementSet<u32>| Ok(false),
            &statements![10],
            &statements![1, 2, 3, 4],
            &statements![10],
        );

        assert!(result.expect("the oracle does not fail").is_empty());
        assert_eq!(statistics.num_consistency_checks, 1);
        assert_eq!(statistics.num_pruned_calls, 1);
        assert_eq!(statistics.num_union_operations, 0);
        assert_eq!(statistics.num_left_branch_calls, 0);
    }

    #[test]
    fn singleton_is_returned_without_asking_the_oracle() {
        let (result, statistics) = run_cxp(
            |_: &StatementSet<u32>| panic!("the oracle should not be called"),
            &statements![],
            &statements![7],
            &statements![],
        );

        assert_eq!(result.expect("the oracle is not called"), statements![7]);
        assert_eq!(statistics.num_consistency_checks, 0);
    }

    #[test]
    fn empty_candidates_yield_empty_conflict() {
        let (result, _) = run_cxp(
            |_: &StatementSet<u32>| Ok(true),
            &statements![],
            &statements![],
            &statements![1],
        );

        assert!(result.expect("the oracle does not fail").is_empty());
    }

    #[test]
    fn finds_the_unique_minimal_conflict_in_candidate_order() {
        let candidates: StatementSet<u32> = (0..16).collect();

        let (result, statistics) = run_cxp(
            contains_all(vec![12, 3, 7]),
            &statements![],
            &candidates,
            &statements![],
        );

        assert_eq!(result.expect("the oracle does not fail"), statements![3, 7, 12]);
        assert!(statistics.num_consistency_checks <= 2 * candidates.len() as u64);
    }

    #[test]
    fn background_statements_are_not_part_of_the_conflict() {
        let candidates: StatementSet<u32> = (0..8).collect();

        let (result, _) = run_cxp(
            contains_all(vec![2, 100]),
            &statements![],
            &candidates,
            &statements![100],
        );

        assert_eq!(result.expect("the oracle does not fail"), statements![2]);
    }

    #[test]
    fn every_candidate_needed_takes_two_checks_per_candidate() {
        let candidates: StatementSet<u32> = (0..64).collect();

        let (result, statistics) = run_cxp(
            contains_all((0..64).collect()),
            &statements![],
            &candidates,
            &statements![],
        );

        assert_eq!(result.expect("the oracle does not fail"), candidates);
        assert_eq!(statistics.num_consistency_checks, 2 * 64 - 2);
        assert_eq!(statistics.num_cxp_calls, 2 * 64 - 1);
        assert_eq!(
            statistics.num_left_branch_calls,
            statistics.num_right_branch_calls
        );
        assert_eq!(statistics.num_pruned_calls, 0);
    }

    #[test]
    fn oracle_errors_are_propagated() {
        let (result, _) = run_cxp(
            |_: &StatementSet<u32>| Err(OracleError::Interrupted),
            &statements![],
            &statements![1, 2, 3],
            &statements![],
        );

        assert!(matches!(
            result,
            Err(ExplanationError::Oracle(OracleError::Interrupted))
        ));
    }

    #[test]
    fn termination_is_checked_before_the_oracle_is_called() {
        let mut oracle = FnOracle::new(|_: &StatementSet<u32>| -> Result<bool, OracleError> {
            panic!("the oracle should not be called")
        });
        let mut termination = OracleCallBudget::new(0);
        let mut statistics = ExplanationStatistics::default();

        let result = MinimalConflictSearch::new(&mut oracle, &mut termination, &mut statistics)
            .cxp(&statements![], &statements![1, 2, 3, 4], &statements![]);

        assert!(matches!(result, Err(ExplanationError::Terminated)));
        assert_eq!(statistics.num_consistency_checks, 0);
    }
}
