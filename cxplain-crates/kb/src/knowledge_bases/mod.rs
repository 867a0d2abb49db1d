//! Knowledge bases which ship with the crate.
mod car;
mod survey;

use std::fmt::Display;

pub use car::car_configuration;
pub use survey::survey_feature_model;

use crate::KnowledgeBase;
use crate::KnowledgeBaseError;

/// Selects one of the knowledge bases which ship with the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum BuiltinKnowledgeBase {
    /// The feature model of [`survey_feature_model`].
    #[default]
    Survey,
    /// The knowledge base of [`car_configuration`].
    Car,
}

impl BuiltinKnowledgeBase {
    pub fn create(self) -> Result<KnowledgeBase, KnowledgeBaseError> {
        match self {
            BuiltinKnowledgeBase::Survey => survey_feature_model().into_knowledge_base(),
            BuiltinKnowledgeBase::Car => car_configuration(),
        }
    }
}

impl Display for BuiltinKnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuiltinKnowledgeBase::Survey => write!(f, "survey"),
            BuiltinKnowledgeBase::Car => write!(f, "car"),
        }
    }
}
