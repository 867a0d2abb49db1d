use itertools::Itertools;

use crate::Assignment;
use crate::ConstraintId;
use crate::KnowledgeBase;
use crate::KnowledgeBaseError;

/// Adds the negation of a (sub-)configuration to `knowledge_base` as an auxiliary constraint.
///
/// The negation of `a=x, b=y` is described as `not(a=x and b=y)`; it is a single clause which is
/// satisfied as soon as at least one of the assignments does not hold.
///
/// Knowledge bases which are not feature models, such as [`crate::car_configuration`], are
/// negated the same way rather than by flipping every assignment (a conjunction); the two only
/// coincide for a single assignment.
pub fn negate_assignments(
    knowledge_base: &mut KnowledgeBase,
    assignments: &[Assignment],
) -> Result<ConstraintId, KnowledgeBaseError> {
    if assignments.is_empty() {
        return Err(KnowledgeBaseError::EmptySubConfiguration);
    }

    let clause = assignments
        .iter()
        .map(|assignment| knowledge_base.literal(assignment).map(|literal| !literal))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(knowledge_base.add_auxiliary_constraint(
        format!("not({})", assignments.iter().join(" and ")),
        vec![clause],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryDomain;
    use crate::Literal;

    #[test]
    fn negation_is_a_single_clause_of_flipped_literals() {
        let mut knowledge_base = KnowledgeBase::new("test");
        let a = knowledge_base
            .add_variable("a", BinaryDomain::boolean())
            .expect("unique variable");
        let b = knowledge_base
            .add_variable("b", BinaryDomain::boolean())
            .expect("unique variable");

        let negation = negate_assignments(
            &mut knowledge_base,
            &[Assignment::new("a", "true"), Assignment::new("b", "false")],
        )
        .expect("valid assignments");

        let constraint = knowledge_base.constraint(negation);
        assert_eq!(constraint.description(), "not(a=true and b=false)");
        assert_eq!(
            constraint.clauses(),
            &[vec![Literal::negative(a), Literal::positive(b)]]
        );
        assert!(knowledge_base.constraints().is_empty());
    }

    #[test]
    fn empty_sub_configuration_cannot_be_negated() {
        let mut knowledge_base = KnowledgeBase::new("test");

        assert_eq!(
            negate_assignments(&mut knowledge_base, &[]),
            Err(KnowledgeBaseError::EmptySubConfiguration)
        );
    }

    #[test]
    fn variable_based_knowledge_bases_are_negated_into_one_clause() {
        let mut knowledge_base = crate::car_configuration().expect("valid knowledge base");
        let video = knowledge_base.variable_id("video").expect("known variable");
        let sensor = knowledge_base.variable_id("sensor").expect("known variable");

        let negation = negate_assignments(
            &mut knowledge_base,
            &[Assignment::new("video", "y"), Assignment::new("sensor", "n")],
        )
        .expect("valid assignments");

        assert_eq!(
            knowledge_base.constraint(negation).clauses(),
            &[vec![Literal::negative(video), Literal::positive(sensor)]]
        );
    }
}
