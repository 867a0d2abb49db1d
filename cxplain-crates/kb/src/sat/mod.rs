//! A SAT-based [`ConsistencyOracle`] for the constraints of a [`KnowledgeBase`], backed by the
//! Pumpkin solver.
mod solver_termination;

use cxplain_core::containers::StorageKey;
use cxplain_core::create_statistics_struct;
use cxplain_core::oracle::ConsistencyOracle;
use cxplain_core::oracle::OracleError;
use cxplain_core::statistics::should_log_statistics;
use cxplain_core::statistics::Statistic;
use cxplain_core::statistics::StatisticLogger;
use cxplain_core::termination::Indefinite;
use cxplain_core::termination::TerminationCondition;
use cxplain_core::StatementSet;
use log::trace;
use pumpkin_solver::results::SatisfactionResult;
use pumpkin_solver::Solver;
use solver_termination::SolverTermination;

use crate::ConstraintId;
use crate::KnowledgeBase;

create_statistics_struct!(
    /// The statistics gathered by a [`SatOracle`] over all of its consistency checks.
    pub SatStatistics {
        num_solver_calls: u64,
        num_consistent: u64,
        num_inconsistent: u64,
        /// The checks which were found inconsistent while posting the clauses, without search.
        num_root_conflicts: u64,
        num_interrupted: u64,
});

/// Decides the consistency of a set of constraints of a [`KnowledgeBase`] by asking a fresh
/// [`Solver`] for an assignment to its variables which satisfies all of their clauses.
///
/// Every check starts from scratch; the answer only depends on the queried constraints.
///
/// The termination condition is polled by the solver during its search. When it triggers, the
/// check fails with [`OracleError::Interrupted`].
#[derive(Debug)]
pub struct SatOracle<'kb, Termination = Indefinite> {
    knowledge_base: &'kb KnowledgeBase,
    termination: Termination,
    statistics: SatStatistics,
}

impl<'kb> SatOracle<'kb, Indefinite> {
    pub fn new(knowledge_base: &'kb KnowledgeBase) -> Self {
        SatOracle::with_termination(knowledge_base, Indefinite)
    }
}

impl<'kb, Termination: TerminationCondition> SatOracle<'kb, Termination> {
    pub fn with_termination(knowledge_base: &'kb KnowledgeBase, termination: Termination) -> Self {
        SatOracle {
            knowledge_base,
            termination,
            statistics: SatStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &SatStatistics {
        &self.statistics
    }

    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new("sat_oracle"));
        }
    }
}

impl<Termination: TerminationCondition> ConsistencyOracle<ConstraintId>
    for SatOracle<'_, Termination>
{
    fn is_consistent(
        &mut self,
        statements: &StatementSet<ConstraintId>,
    ) -> Result<bool, OracleError> {
        self.statistics.num_solver_calls += 1;

        let knowledge_base = self.knowledge_base;
        let mut solver = Solver::default();
        let literals = (0..knowledge_base.num_variables())
            .map(|_| solver.new_literal())
            .collect::<Vec<_>>();

        let mut has_root_conflict = false;
        'constraints: for &id in statements.iter() {
            let constraint_tag = solver.new_constraint_tag();

            for clause in knowledge_base.constraint(id).clauses() {
                let predicates = clause
                    .iter()
                    .map(|literal| {
                        let solver_literal = literals[literal.variable().index()];
                        if literal.value() {
                            solver_literal.get_true_predicate()
                        } else {
                            solver_literal.get_false_predicate()
                        }
                    })
                    .collect::<Vec<_>>();

                // The empty clause is never handed to the solver.
                if predicates.is_empty() || solver.add_clause(predicates, constraint_tag).is_err()
                {
                    has_root_conflict = true;
                    break 'constraints;
                }
            }
        }

        if has_root_conflict {
            self.statistics.num_root_conflicts += 1;
            self.statistics.num_inconsistent += 1;
            trace!("conflict at the root: {}", knowledge_base.describe(statements));
            return Ok(false);
        }

        let mut brancher = solver.default_brancher();
        let mut termination = SolverTermination::new(&mut self.termination);
        let is_satisfiable = matches!(
            solver.satisfy(&mut brancher, &mut termination),
            SatisfactionResult::Satisfiable(..)
        );

        if termination.has_triggered() {
            self.statistics.num_interrupted += 1;
            return Err(OracleError::Interrupted);
        }

        if is_satisfiable {
            self.statistics.num_consistent += 1;
        } else {
            self.statistics.num_inconsistent += 1;
            trace!("unsatisfiable: {}", knowledge_base.describe(statements));
        }

        Ok(is_satisfiable)
    }
}
