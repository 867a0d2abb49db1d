//! A propositional knowledge base: variables with a two-valued domain, and constraints given in
//! conjunctive normal form.
//!
//! Every constraint is stored under a [`ConstraintId`]; these ids are the statements that the
//! explanation algorithms work with, and [`KnowledgeBase::describe`] maps them back to a
//! human-readable form.
mod constraint;
mod domain;
mod error;

pub use constraint::*;
use cxplain_core::containers::HashMap;
use cxplain_core::containers::KeyedVec;
use cxplain_core::StatementSet;
pub use domain::*;
pub use error::*;
use itertools::Itertools;
use log::trace;

use crate::Assignment;

/// A named collection of variables and constraints.
///
/// The constraints which define the knowledge base are kept in definition order (see
/// [`KnowledgeBase::constraints`]). Constraints created afterwards (e.g. the translation of a
/// configuration) are stored alongside them as *auxiliary* constraints so that they can be
/// referred to by a [`ConstraintId`] as well, but they are not part of the knowledge base itself.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    name: String,
    variables: KeyedVec<VariableId, Variable>,
    variables_by_name: HashMap<String, VariableId>,
    constraint_store: KeyedVec<ConstraintId, Constraint>,
    constraints: Vec<ConstraintId>,
}

impl KnowledgeBase {
    pub fn new(name: impl Into<String>) -> Self {
        KnowledgeBase {
            name: name.into(),
            variables: KeyedVec::default(),
            variables_by_name: HashMap::default(),
            constraint_store: KeyedVec::default(),
            constraints: Vec::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        domain: BinaryDomain,
    ) -> Result<VariableId, KnowledgeBaseError> {
        let name = name.into();
        if self.variables_by_name.contains_key(&name) {
            return Err(KnowledgeBaseError::DuplicateVariable(name));
        }

        let id = self.variables.push(Variable::new(name.clone(), domain));
        let _ = self.variables_by_name.insert(name, id);

        Ok(id)
    }

    pub fn variable_id(&self, name: &str) -> Result<VariableId, KnowledgeBaseError> {
        self.variables_by_name
            .get(name)
            .copied()
            .ok_or_else(|| KnowledgeBaseError::UnknownVariable(name.to_owned()))
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.variables.iter_with_keys()
    }

    /// Adds a constraint which is part of the knowledge base.
    pub fn add_constraint(
        &mut self,
        description: impl Into<String>,
        clauses: Vec<Clause>,
    ) -> ConstraintId {
        let id = self.add_auxiliary_constraint(description, clauses);
        self.constraints.push(id);
        id
    }

    /// Adds a constraint which can be referred to by its id, but which is not part of the
    /// knowledge base.
    pub fn add_auxiliary_constraint(
        &mut self,
        description: impl Into<String>,
        clauses: Vec<Clause>,
    ) -> ConstraintId {
        let constraint = Constraint::new(description, clauses);
        trace!("adding constraint '{constraint}'");
        self.constraint_store.push(constraint)
    }

    /// The constraints of the knowledge base in definition order.
    pub fn constraints(&self) -> &[ConstraintId] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraint_store[id]
    }

    /// Returns the literal which states that the variable of `assignment` takes its value.
    pub fn literal(&self, assignment: &Assignment) -> Result<Literal, KnowledgeBaseError> {
        let id = self.variable_id(assignment.variable())?;
        let domain = self.variable(id).domain();

        let truth_value = domain.truth_value_of(assignment.value()).ok_or_else(|| {
            KnowledgeBaseError::InvalidValue {
                variable: assignment.variable().to_owned(),
                value: assignment.value().to_owned(),
                domain: domain.to_string(),
            }
        })?;

        Ok(Literal::new(id, truth_value))
    }

    /// Renders the descriptions of the constraints in `statements` as `[a, b, c]`.
    pub fn describe(&self, statements: &StatementSet<ConstraintId>) -> String {
        format!(
            "[{}]",
            statements
                .iter()
                .map(|id| self.constraint(*id).description())
                .join(", ")
        )
    }
}
