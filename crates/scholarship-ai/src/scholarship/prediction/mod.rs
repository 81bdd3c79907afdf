//! Inference over classifiers exported by the offline training pipeline.

mod models;
mod registry;

pub use models::{DecisionTree, ExportedModel, LogisticRegression, RandomForest, TreeNode};
pub use registry::ModelRegistry;

use super::domain::FeatureVector;
use serde::{Deserialize, Serialize};

/// The classifier families the training pipeline exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LogisticRegression,
    DecisionTree,
    RandomForest,
}

impl ModelKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::LogisticRegression, Self::DecisionTree, Self::RandomForest]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LogisticRegression => "Logistic Regression",
            Self::DecisionTree => "Decision Tree",
            Self::RandomForest => "Random Forest",
        }
    }

    pub const fn artifact_file(self) -> &'static str {
        match self {
            Self::LogisticRegression => "logistic_regression_model.json",
            Self::DecisionTree => "decision_tree_model.json",
            Self::RandomForest => "random_forest_model.json",
        }
    }
}

/// Probability pair for the two classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub not_eligible: f64,
    pub eligible: f64,
}

impl ClassProbabilities {
    pub fn from_eligible(eligible: f64) -> Self {
        let eligible = eligible.clamp(0.0, 1.0);
        Self {
            not_eligible: 1.0 - eligible,
            eligible,
        }
    }

    /// Argmax over the two classes; a tie goes to "not eligible".
    pub fn label(&self) -> u8 {
        u8::from(self.eligible > self.not_eligible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub label: u8,
    pub probabilities: ClassProbabilities,
}

impl ModelPrediction {
    pub(crate) fn from_eligible(probability: f64) -> Result<Self, ClassifierError> {
        if !probability.is_finite() {
            return Err(ClassifierError::NonFinite);
        }
        let probabilities = ClassProbabilities::from_eligible(probability);
        Ok(Self {
            label: probabilities.label(),
            probabilities,
        })
    }
}

/// Binary eligibility classifier over the six profile features.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<ModelPrediction, ClassifierError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("model expects {expected} features, received {found}")]
    FeatureCount { expected: usize, found: usize },
    #[error("tree node {node} references missing node {target}")]
    DanglingNode { node: usize, target: usize },
    #[error("tree node {node} splits on unknown feature index {feature}")]
    UnknownFeature { node: usize, feature: usize },
    #[error("tree traversal did not reach a leaf")]
    Cycle,
    #[error("model contains no {0}")]
    Empty(&'static str),
    #[error("model produced a non-finite probability")]
    NonFinite,
}
