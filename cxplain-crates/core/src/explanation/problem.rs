use super::ExplanationError;
use super::InputKind;
use crate::basic_types::Statement;
use crate::StatementSet;

/// The input of [`crate::CXPlain::find_explanation`].
///
/// The four sets have a different purpose:
/// - the *requirement* (REQ) contains the user requirements,
/// - the *knowledge base* (KB) contains the constraints of the domain,
/// - the *configuration* (CONF) contains the assignments of the configuration to explain,
/// - the *negated sub-configuration* (NSCONF) is the negation of the part of the configuration
///   for which an explanation is requested.
///
/// The negated sub-configuration on its own has to be consistent; the search relies on this
/// without checking it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationProblem<S> {
    requirement: StatementSet<S>,
    knowledge_base: StatementSet<S>,
    configuration: StatementSet<S>,
    negated_sub_configuration: StatementSet<S>,
}

impl<S: Statement> ExplanationProblem<S> {
    pub fn new(
        requirement: StatementSet<S>,
        knowledge_base: StatementSet<S>,
        configuration: StatementSet<S>,
        negated_sub_configuration: StatementSet<S>,
    ) -> Self {
        ExplanationProblem {
            requirement,
            knowledge_base,
            configuration,
            negated_sub_configuration,
        }
    }

    /// Creates a builder in which every input has to be provided explicitly.
    pub fn builder() -> ExplanationProblemBuilder<S> {
        ExplanationProblemBuilder::default()
    }

    pub fn requirement(&self) -> &StatementSet<S> {
        &self.requirement
    }

    pub fn knowledge_base(&self) -> &StatementSet<S> {
        &self.knowledge_base
    }

    pub fn configuration(&self) -> &StatementSet<S> {
        &self.configuration
    }

    pub fn negated_sub_configuration(&self) -> &StatementSet<S> {
        &self.negated_sub_configuration
    }
}

/// Builder for an [`ExplanationProblem`]; [`ExplanationProblemBuilder::build`] fails if one of the
/// four inputs was never set.
#[derive(Debug)]
pub struct ExplanationProblemBuilder<S> {
    requirement: Option<StatementSet<S>>,
    knowledge_base: Option<StatementSet<S>>,
    configuration: Option<StatementSet<S>>,
    negated_sub_configuration: Option<StatementSet<S>>,
}

impl<S> Default for ExplanationProblemBuilder<S> {
    fn default() -> Self {
        ExplanationProblemBuilder {
            requirement: None,
            knowledge_base: None,
            configuration: None,
            negated_sub_configuration: None,
        }
    }
}

impl<S: Statement> ExplanationProblemBuilder<S> {
    pub fn requirement(mut self, requirement: impl Into<StatementSet<S>>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    pub fn knowledge_base(mut self, knowledge_base: impl Into<StatementSet<S>>) -> Self {
        self.knowledge_base = Some(knowledge_base.into());
        self
    }

    pub fn configuration(mut self, configuration: impl Into<StatementSet<S>>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    pub fn negated_sub_configuration(
        mut self,
        negated_sub_configuration: impl Into<StatementSet<S>>,
    ) -> Self {
        self.negated_sub_configuration = Some(negated_sub_configuration.into());
        self
    }

    pub fn build(self) -> Result<ExplanationProblem<S>, ExplanationError> {
        Ok(ExplanationProblem {
            requirement: self
                .requirement
                .ok_or(ExplanationError::MissingInput(InputKind::Requirement))?,
            knowledge_base: self
                .knowledge_base
                .ok_or(ExplanationError::MissingInput(InputKind::KnowledgeBase))?,
            configuration: self
                .configuration
                .ok_or(ExplanationError::MissingInput(InputKind::Configuration))?,
            negated_sub_configuration: self.negated_sub_configuration.ok_or(
                ExplanationError::MissingInput(InputKind::NegatedSubConfiguration),
            )?,
        })
    }
}
