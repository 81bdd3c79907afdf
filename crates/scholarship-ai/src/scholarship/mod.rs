//! Scholarship eligibility: provider rules, classifier inference, and the HTTP surface.

pub mod artifacts;
pub mod domain;
pub mod eligibility;
pub mod intake;
pub mod prediction;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use artifacts::{
    ArtifactError, ArtifactStore, DatasetStats, FileArtifactStore, ModelMetrics, ModelResults,
};
pub use domain::{ProfileField, StudentProfile};
pub use eligibility::{
    Confidence, EligibilityRuleEngine, ProgramRule, ProgramTableError, Provider, Recommendation,
};
pub use intake::{MalformedProfile, ProfileIntake};
pub use prediction::{
    ClassProbabilities, Classifier, ClassifierError, ModelKind, ModelPrediction, ModelRegistry,
};
pub use router::scholarship_router;
pub use service::{PredictionReport, ScholarshipService, ScholarshipServiceError};
