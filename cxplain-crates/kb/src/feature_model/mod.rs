//! Feature models, translated into a [`KnowledgeBase`] with one boolean variable per feature.
mod relationship;

use log::debug;
pub use relationship::Relationship;

use crate::BinaryDomain;
use crate::KnowledgeBase;
use crate::KnowledgeBaseError;
use crate::Literal;

/// A feature model consisting of a root feature, other features, and relationships between
/// them.
///
/// # Example
/// ```rust
/// # use cxplain_kb::FeatureModel;
/// let knowledge_base = FeatureModel::new("shop", "shop")
///     .feature("payment")
///     .feature("invoice")
///     .feature("card")
///     .mandatory("shop", "payment")
///     .or("payment", ["invoice", "card"])
///     .into_knowledge_base()?;
///
/// let descriptions = knowledge_base
///     .constraints()
///     .iter()
///     .map(|id| knowledge_base.constraint(*id).description())
///     .collect::<Vec<_>>();
/// assert_eq!(
///     descriptions,
///     vec!["shop = true", "mandatory(shop, payment)", "or(payment, invoice, card)"]
/// );
/// # Ok::<(), cxplain_kb::KnowledgeBaseError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FeatureModel {
    name: String,
    root: String,
    features: Vec<String>,
    relationships: Vec<Relationship>,
}

impl FeatureModel {
    pub fn new(name: impl Into<String>, root: impl Into<String>) -> Self {
        FeatureModel {
            name: name.into(),
            root: root.into(),
            features: vec![],
            relationships: vec![],
        }
    }

    pub fn feature(mut self, name: impl Into<String>) -> Self {
        self.features.push(name.into());
        self
    }

    pub fn mandatory(self, parent: impl Into<String>, child: impl Into<String>) -> Self {
        self.relationship(Relationship::Mandatory {
            parent: parent.into(),
            child: child.into(),
        })
    }

    pub fn optional(self, parent: impl Into<String>, child: impl Into<String>) -> Self {
        self.relationship(Relationship::Optional {
            parent: parent.into(),
            child: child.into(),
        })
    }

    pub fn alternative<Child: Into<String>>(
        self,
        parent: impl Into<String>,
        children: impl IntoIterator<Item = Child>,
    ) -> Self {
        self.relationship(Relationship::Alternative {
            parent: parent.into(),
            children: children.into_iter().map(Into::into).collect(),
        })
    }

    pub fn or<Child: Into<String>>(
        self,
        parent: impl Into<String>,
        children: impl IntoIterator<Item = Child>,
    ) -> Self {
        self.relationship(Relationship::Or {
            parent: parent.into(),
            children: children.into_iter().map(Into::into).collect(),
        })
    }

    pub fn requires(self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.relationship(Relationship::Requires {
            left: left.into(),
            right: right.into(),
        })
    }

    pub fn excludes(self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.relationship(Relationship::Excludes {
            left: left.into(),
            right: right.into(),
        })
    }

    pub fn relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Creates the knowledge base of the feature model.
    ///
    /// Its constraints are the root constraint (`<root> = true`) followed by one constraint per
    /// relationship, in the order in which the relationships were added.
    pub fn into_knowledge_base(self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        let mut knowledge_base = KnowledgeBase::new(self.name);

        let root = knowledge_base.add_variable(self.root.clone(), BinaryDomain::boolean())?;
        for feature in self.features {
            let _ = knowledge_base.add_variable(feature, BinaryDomain::boolean())?;
        }

        let _ = knowledge_base.add_constraint(
            format!("{} = true", self.root),
            vec![vec![Literal::positive(root)]],
        );
        for relationship in &self.relationships {
            let clauses = relationship.to_clauses(&knowledge_base)?;
            let _ = knowledge_base.add_constraint(relationship.to_string(), clauses);
        }

        debug!(
            "created knowledge base '{}' with {} features and {} constraints",
            knowledge_base.name(),
            knowledge_base.num_variables(),
            knowledge_base.constraints().len()
        );

        Ok(knowledge_base)
    }
}
