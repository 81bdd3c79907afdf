use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::artifacts::{ArtifactError, ArtifactStore, DatasetStats, ModelResults};
use super::domain::StudentProfile;
use super::eligibility::{EligibilityRuleEngine, Recommendation};
use super::intake::MalformedProfile;
use super::prediction::{ClassProbabilities, ModelKind, ModelRegistry};

/// Service composing the rule engine, the loaded classifiers, and artifact storage.
pub struct ScholarshipService<S> {
    engine: Arc<EligibilityRuleEngine>,
    registry: Arc<ModelRegistry>,
    store: Arc<S>,
}

impl<S> ScholarshipService<S>
where
    S: ArtifactStore + 'static,
{
    pub fn new(registry: Arc<ModelRegistry>, store: Arc<S>) -> Self {
        Self::with_engine(EligibilityRuleEngine::standard(), registry, store)
    }

    pub fn with_engine(
        engine: EligibilityRuleEngine,
        registry: Arc<ModelRegistry>,
        store: Arc<S>,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            registry,
            store,
        }
    }

    pub fn models_loaded(&self) -> usize {
        self.registry.len()
    }

    /// Provider rule evaluation only; never fails.
    pub fn recommend(&self, profile: &StudentProfile) -> Vec<Recommendation> {
        self.engine.evaluate(profile)
    }

    /// Classify with every loaded model and merge in the provider recommendations.
    pub fn predict(
        &self,
        profile: &StudentProfile,
    ) -> Result<PredictionReport, ScholarshipServiceError> {
        if self.registry.is_empty() {
            return Err(ScholarshipServiceError::ModelsUnavailable);
        }

        let predictions = self.registry.predict_all(&profile.features());
        let (primary_kind, primary) = predictions
            .iter()
            .find(|(kind, _)| *kind == ModelKind::RandomForest)
            .or_else(|| predictions.first())
            .copied()
            .ok_or(ScholarshipServiceError::NoPredictions)?;

        let mut all_predictions = BTreeMap::new();
        let mut all_probabilities = BTreeMap::new();
        for (kind, prediction) in &predictions {
            all_predictions.insert(kind.label().to_string(), prediction.label);
            all_probabilities.insert(kind.label().to_string(), prediction.probabilities);
        }

        let recommendations = self.engine.evaluate(profile);

        info!(
            model_used = primary_kind.label(),
            prediction = primary.label,
            models_answered = predictions.len(),
            eligible_programs = recommendations.iter().filter(|rec| rec.eligible).count(),
            "prediction served"
        );

        Ok(PredictionReport {
            prediction: primary.label,
            probability: primary.probabilities,
            all_predictions,
            all_probabilities,
            model_used: primary_kind.label().to_string(),
            recommendations,
        })
    }

    pub fn model_results(&self) -> Result<ModelResults, ScholarshipServiceError> {
        self.store
            .model_results()?
            .ok_or(ScholarshipServiceError::ModelResultsMissing)
    }

    pub fn dataset_stats(&self) -> Result<DatasetStats, ScholarshipServiceError> {
        self.store
            .dataset_stats()?
            .ok_or(ScholarshipServiceError::DatasetMissing)
    }
}

/// Classifier verdicts plus the rule-based recommendations for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub prediction: u8,
    pub probability: ClassProbabilities,
    pub all_predictions: BTreeMap<String, u8>,
    pub all_probabilities: BTreeMap<String, ClassProbabilities>,
    pub model_used: String,
    pub recommendations: Vec<Recommendation>,
}

/// Error raised by the scholarship service.
#[derive(Debug, thiserror::Error)]
pub enum ScholarshipServiceError {
    #[error(transparent)]
    Malformed(#[from] MalformedProfile),
    #[error("Models not loaded. Please train models first.")]
    ModelsUnavailable,
    #[error("Failed to get predictions from any model.")]
    NoPredictions,
    #[error("Model results not found. Please train models first.")]
    ModelResultsMissing,
    #[error("Dataset not found")]
    DatasetMissing,
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}
