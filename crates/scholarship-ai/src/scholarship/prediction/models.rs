use serde::{Deserialize, Serialize};

use super::{Classifier, ClassifierError, ModelKind, ModelPrediction};
use crate::scholarship::domain::FeatureVector;

/// On-disk classifier artifact, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportedModel {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

impl ExportedModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::LogisticRegression(_) => ModelKind::LogisticRegression,
            Self::DecisionTree(_) => ModelKind::DecisionTree,
            Self::RandomForest(_) => ModelKind::RandomForest,
        }
    }
}

impl Classifier for ExportedModel {
    fn classify(&self, features: &FeatureVector) -> Result<ModelPrediction, ClassifierError> {
        match self {
            Self::LogisticRegression(model) => model.classify(features),
            Self::DecisionTree(model) => model.classify(features),
            Self::RandomForest(model) => model.classify(features),
        }
    }
}

/// Linear model: `p(eligible) = sigmoid(w · x + b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    fn probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        let values = features.as_slice();
        if self.coefficients.len() != values.len() {
            return Err(ClassifierError::FeatureCount {
                expected: self.coefficients.len(),
                found: values.len(),
            });
        }

        let logit: f64 = self
            .coefficients
            .iter()
            .zip(values)
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
            + self.intercept;

        Ok(1.0 / (1.0 + (-logit).exp()))
    }
}

impl Classifier for LogisticRegression {
    fn classify(&self, features: &FeatureVector) -> Result<ModelPrediction, ClassifierError> {
        ModelPrediction::from_eligible(self.probability(features)?)
    }
}

/// Flattened binary tree; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// `features[feature] <= threshold` descends to `left`, otherwise `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Fraction of eligible training samples that reached this leaf.
    Leaf { eligible: f64 },
}

impl DecisionTree {
    fn probability(&self, features: &FeatureVector) -> Result<f64, ClassifierError> {
        if self.nodes.is_empty() {
            return Err(ClassifierError::Empty("nodes"));
        }

        let values = features.as_slice();
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            match &self.nodes[index] {
                TreeNode::Leaf { eligible } => return Ok(*eligible),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = values.get(*feature).ok_or(ClassifierError::UnknownFeature {
                        node: index,
                        feature: *feature,
                    })?;
                    let next = if *value <= *threshold { *left } else { *right };
                    if next >= self.nodes.len() {
                        return Err(ClassifierError::DanglingNode {
                            node: index,
                            target: next,
                        });
                    }
                    index = next;
                }
            }
        }

        Err(ClassifierError::Cycle)
    }
}

impl Classifier for DecisionTree {
    fn classify(&self, features: &FeatureVector) -> Result<ModelPrediction, ClassifierError> {
        ModelPrediction::from_eligible(self.probability(features)?)
    }
}

/// Bagged trees; the eligible probability is the mean over trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl Classifier for RandomForest {
    fn classify(&self, features: &FeatureVector) -> Result<ModelPrediction, ClassifierError> {
        if self.trees.is_empty() {
            return Err(ClassifierError::Empty("trees"));
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.probability(features)?;
        }
        ModelPrediction::from_eligible(total / self.trees.len() as f64)
    }
}
