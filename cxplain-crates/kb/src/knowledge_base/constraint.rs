use std::fmt::Display;
use std::ops::Not;

use cxplain_core::containers::StorageKey;

/// The id of a variable in a [`crate::KnowledgeBase`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(u32);

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId(index as u32)
    }
}

/// The id of a constraint in a [`crate::KnowledgeBase`]; these are the statements handed to the
/// explanation algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(u32);

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId(index as u32)
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// States that a variable takes the given truth value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    variable: VariableId,
    value: bool,
}

impl Literal {
    pub fn new(variable: VariableId, value: bool) -> Self {
        Literal { variable, value }
    }

    pub fn positive(variable: VariableId) -> Self {
        Literal::new(variable, true)
    }

    pub fn negative(variable: VariableId) -> Self {
        Literal::new(variable, false)
    }

    pub fn variable(&self) -> VariableId {
        self.variable
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal::new(self.variable, !self.value)
    }
}

/// A disjunction of literals; the empty clause can not be satisfied.
pub type Clause = Vec<Literal>;

/// A constraint of a [`crate::KnowledgeBase`], given as a conjunction of clauses.
///
/// The description is what is shown to a user when the constraint is part of an explanation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint {
    description: String,
    clauses: Vec<Clause>,
}

impl Constraint {
    pub fn new(description: impl Into<String>, clauses: Vec<Clause>) -> Self {
        Constraint {
            description: description.into(),
            clauses,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
