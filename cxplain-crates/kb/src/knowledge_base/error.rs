/// The errors which can occur while building or querying a [`crate::KnowledgeBase`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KnowledgeBaseError {
    #[error("the variable '{0}' does not exist in the knowledge base")]
    UnknownVariable(String),

    #[error("'{value}' is not in the domain {domain} of variable '{variable}'")]
    InvalidValue {
        variable: String,
        value: String,
        domain: String,
    },

    #[error("the variable '{0}' is defined twice")]
    DuplicateVariable(String),

    #[error("the feature '{0}' is used in a relationship but it was never added")]
    UnknownFeature(String),

    #[error("the group relationship of '{0}' has no children")]
    EmptyGroup(String),

    #[error("the sub-configuration to explain is empty")]
    EmptySubConfiguration,
}
