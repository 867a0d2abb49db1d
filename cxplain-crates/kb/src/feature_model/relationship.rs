use std::fmt::Display;

use itertools::Itertools;

use crate::Clause;
use crate::KnowledgeBase;
use crate::KnowledgeBaseError;
use crate::Literal;
use crate::VariableId;

/// A relationship between the features of a [`super::FeatureModel`].
///
/// The first four relate a parent to its children in the feature tree; `Requires` and `Excludes`
/// are cross-tree constraints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relationship {
    /// The child is selected iff the parent is.
    Mandatory { parent: String, child: String },
    /// The child can only be selected if the parent is.
    Optional { parent: String, child: String },
    /// If the parent is selected then exactly one of the children is; children require the
    /// parent.
    Alternative {
        parent: String,
        children: Vec<String>,
    },
    /// If the parent is selected then at least one of the children is; children require the
    /// parent.
    Or {
        parent: String,
        children: Vec<String>,
    },
    Requires { left: String, right: String },
    Excludes { left: String, right: String },
}

impl Relationship {
    /// Translates the relationship to clauses over the variables of `knowledge_base`.
    pub(crate) fn to_clauses(
        &self,
        knowledge_base: &KnowledgeBase,
    ) -> Result<Vec<Clause>, KnowledgeBaseError> {
        let feature = |name: &str| {
            knowledge_base
                .variable_id(name)
                .map_err(|_| KnowledgeBaseError::UnknownFeature(name.to_owned()))
        };
        let features = |names: &[String]| -> Result<Vec<VariableId>, KnowledgeBaseError> {
            names.iter().map(|name| feature(name)).collect()
        };

        let clauses = match self {
            Relationship::Mandatory { parent, child } => {
                let (parent, child) = (feature(parent)?, feature(child)?);
                vec![implies(parent, child), implies(child, parent)]
            }
            Relationship::Optional { parent, child } => {
                vec![implies(feature(child)?, feature(parent)?)]
            }
            Relationship::Alternative { parent, children } => {
                let (parent_id, children) = (feature(parent)?, features(children)?);
                if children.is_empty() {
                    return Err(KnowledgeBaseError::EmptyGroup(parent.clone()));
                }

                let mut clauses = group_clauses(parent_id, &children);
                clauses.extend(
                    children
                        .iter()
                        .tuple_combinations()
                        .map(|(&first, &second)| {
                            vec![Literal::negative(first), Literal::negative(second)]
                        }),
                );
                clauses
            }
            Relationship::Or { parent, children } => {
                let (parent_id, children) = (feature(parent)?, features(children)?);
                if children.is_empty() {
                    return Err(KnowledgeBaseError::EmptyGroup(parent.clone()));
                }

                group_clauses(parent_id, &children)
            }
            Relationship::Requires { left, right } => {
                vec![implies(feature(left)?, feature(right)?)]
            }
            Relationship::Excludes { left, right } => {
                vec![vec![
                    Literal::negative(feature(left)?),
                    Literal::negative(feature(right)?),
                ]]
            }
        };

        Ok(clauses)
    }
}

fn implies(premise: VariableId, conclusion: VariableId) -> Clause {
    vec![Literal::negative(premise), Literal::positive(conclusion)]
}

/// Every child implies the parent, and the parent implies at least one child.
fn group_clauses(parent: VariableId, children: &[VariableId]) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = children
        .iter()
        .map(|&child| implies(child, parent))
        .collect();

    let mut at_least_one_child = vec![Literal::negative(parent)];
    at_least_one_child.extend(children.iter().map(|&child| Literal::positive(child)));
    clauses.push(at_least_one_child);

    clauses
}

impl Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::Mandatory { parent, child } => write!(f, "mandatory({parent}, {child})"),
            Relationship::Optional { parent, child } => write!(f, "optional({parent}, {child})"),
            Relationship::Alternative { parent, children } => {
                write!(f, "alternative({parent}, {})", children.iter().join(", "))
            }
            Relationship::Or { parent, children } => {
                write!(f, "or({parent}, {})", children.iter().join(", "))
            }
            Relationship::Requires { left, right } => write!(f, "requires({left}, {right})"),
            Relationship::Excludes { left, right } => write!(f, "excludes({left}, {right})"),
        }
    }
}
