use crate::FeatureModel;

/// A small feature model of an online survey tool.
pub fn survey_feature_model() -> FeatureModel {
    FeatureModel::new("survey", "survey")
        .feature("pay")
        .feature("ABtesting")
        .feature("statistics")
        .feature("qa")
        .feature("license")
        .feature("nonlicense")
        .feature("multiplechoice")
        .feature("multiplemedia")
        .mandatory("survey", "pay")
        .optional("survey", "ABtesting")
        .optional("survey", "statistics")
        .mandatory("survey", "qa")
        .alternative("pay", ["license", "nonlicense"])
        .or("qa", ["multiplechoice", "multiplemedia"])
        .excludes("ABtesting", "nonlicense")
        .requires("ABtesting", "statistics")
}
