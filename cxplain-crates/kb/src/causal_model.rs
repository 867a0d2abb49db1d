use cxplain_core::ExplanationProblem;
use cxplain_core::StatementSet;
use log::debug;
use log::trace;

use crate::negate_assignments;
use crate::Assignment;
use crate::ConstraintId;
use crate::KnowledgeBase;
use crate::KnowledgeBaseError;

/// The statement sets of a causal explanation task over a [`KnowledgeBase`]:
/// - `CONF`: one constraint per assignment of the configuration, described as `variable=value`;
/// - `REQ`: one constraint per assignment of the requirement, described as
///   `variable=value [copied]` (these are separate statements from the configuration, even if the
///   configuration contains the same assignment);
/// - `CF`: the constraints of the knowledge base in reverse definition order;
/// - `NSCONF`: the negation of the sub-configuration for which an explanation is requested.
#[derive(Clone, Debug)]
pub struct CausalExplanationModel {
    knowledge_base: KnowledgeBase,
    configuration: StatementSet<ConstraintId>,
    requirement: StatementSet<ConstraintId>,
    knowledge_base_constraints: StatementSet<ConstraintId>,
    negated_sub_configuration: StatementSet<ConstraintId>,
}

impl CausalExplanationModel {
    pub fn new(
        mut knowledge_base: KnowledgeBase,
        sub_configuration: &[Assignment],
        requirement: &[Assignment],
        configuration: &[Assignment],
    ) -> Result<Self, KnowledgeBaseError> {
        debug!("initialising causal explanation model for '{}'", knowledge_base.name());

        trace!("translating the configuration");
        let configuration = configuration
            .iter()
            .map(|assignment| add_assignment(&mut knowledge_base, assignment, ""))
            .collect::<Result<StatementSet<_>, _>>()?;

        trace!("translating the requirement");
        let requirement = requirement
            .iter()
            .map(|assignment| add_assignment(&mut knowledge_base, assignment, " [copied]"))
            .collect::<Result<StatementSet<_>, _>>()?;

        let knowledge_base_constraints = knowledge_base
            .constraints()
            .iter()
            .rev()
            .copied()
            .collect::<StatementSet<_>>();

        trace!("negating the sub-configuration");
        let negated_sub_configuration =
            StatementSet::from([negate_assignments(&mut knowledge_base, sub_configuration)?]);

        Ok(CausalExplanationModel {
            knowledge_base,
            configuration,
            requirement,
            knowledge_base_constraints,
            negated_sub_configuration,
        })
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn configuration(&self) -> &StatementSet<ConstraintId> {
        &self.configuration
    }

    pub fn requirement(&self) -> &StatementSet<ConstraintId> {
        &self.requirement
    }

    pub fn knowledge_base_constraints(&self) -> &StatementSet<ConstraintId> {
        &self.knowledge_base_constraints
    }

    pub fn negated_sub_configuration(&self) -> &StatementSet<ConstraintId> {
        &self.negated_sub_configuration
    }

    /// The number of statements which are candidates for an explanation.
    pub fn num_candidates(&self) -> usize {
        self.configuration.len() + self.requirement.len() + self.knowledge_base_constraints.len()
    }

    pub fn problem(&self) -> ExplanationProblem<ConstraintId> {
        ExplanationProblem::new(
            self.requirement.clone(),
            self.knowledge_base_constraints.clone(),
            self.configuration.clone(),
            self.negated_sub_configuration.clone(),
        )
    }

    /// Renders `statements` as `[a, b, c]` using the descriptions of the constraints.
    pub fn describe(&self, statements: &StatementSet<ConstraintId>) -> String {
        self.knowledge_base.describe(statements)
    }
}

fn add_assignment(
    knowledge_base: &mut KnowledgeBase,
    assignment: &Assignment,
    suffix: &str,
) -> Result<ConstraintId, KnowledgeBaseError> {
    let literal = knowledge_base.literal(assignment)?;
    Ok(knowledge_base.add_auxiliary_constraint(format!("{assignment}{suffix}"), vec![vec![literal]]))
}
