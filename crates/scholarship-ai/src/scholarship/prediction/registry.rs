use std::path::Path;

use tracing::{info, warn};

use super::{Classifier, ExportedModel, ModelKind, ModelPrediction};
use crate::scholarship::artifacts::{read_json, ArtifactError, FEATURES_FILE};
use crate::scholarship::domain::{feature_names, FeatureVector};

/// Loaded classifiers, owned by whoever serves requests.
///
/// Models are kept in [`ModelKind::ordered`] order; at most one per kind.
#[derive(Default)]
pub struct ModelRegistry {
    models: Vec<(ModelKind, Box<dyn Classifier>)>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.kinds())
            .finish()
    }
}

impl ModelRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a classifier, replacing any existing model of the same kind.
    pub fn with_model<C>(mut self, kind: ModelKind, classifier: C) -> Self
    where
        C: Classifier + 'static,
    {
        self.models.retain(|(existing, _)| *existing != kind);
        self.models.push((kind, Box::new(classifier)));
        self.models.sort_by_key(|(kind, _)| *kind);
        self
    }

    /// Load every exported model present in `dir`. Absent files are skipped.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ArtifactError> {
        if let Some(found) = read_json::<Vec<String>>(&dir.join(FEATURES_FILE))? {
            let expected: Vec<String> = feature_names().into_iter().map(String::from).collect();
            if found != expected {
                return Err(ArtifactError::FeatureMismatch { expected, found });
            }
        }

        let mut registry = Self::empty();
        for kind in ModelKind::ordered() {
            let path = dir.join(kind.artifact_file());
            match read_json::<ExportedModel>(&path)? {
                Some(model) if model.kind() == kind => {
                    registry = registry.with_model(kind, model);
                }
                Some(model) => {
                    warn!(
                        path = %path.display(),
                        expected = kind.label(),
                        found = model.kind().label(),
                        "model artifact kind does not match its file name; skipping"
                    );
                }
                None => {
                    warn!(path = %path.display(), "model artifact missing; skipping");
                }
            }
        }

        info!(loaded = registry.len(), dir = %dir.display(), "loaded classifiers");
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn kinds(&self) -> Vec<ModelKind> {
        self.models.iter().map(|(kind, _)| *kind).collect()
    }

    /// Run every model; failures are logged and left out of the result.
    pub fn predict_all(&self, features: &FeatureVector) -> Vec<(ModelKind, ModelPrediction)> {
        self.models
            .iter()
            .filter_map(|(kind, model)| match model.classify(features) {
                Ok(prediction) => Some((*kind, prediction)),
                Err(err) => {
                    warn!(model = kind.label(), error = %err, "classifier failed");
                    None
                }
            })
            .collect()
    }
}
