use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::scholarship::artifacts::{
    ArtifactError, ArtifactStore, DatasetFeatureStats, DatasetStats, FeatureSummary, ModelMetrics,
    ModelResults,
};
use crate::scholarship::domain::{FeatureVector, StudentProfile};
use crate::scholarship::prediction::{
    Classifier, ClassifierError, ModelKind, ModelPrediction, ModelRegistry,
};
use crate::scholarship::{scholarship_router, ScholarshipService};

pub(super) fn profile(
    year_of_study: i32,
    cgpa: f64,
    family_income: f64,
    cocurricular_score: f64,
    leadership_positions: u32,
    community_service_hours: f64,
) -> StudentProfile {
    StudentProfile {
        year_of_study,
        cgpa,
        family_income,
        cocurricular_score,
        leadership_positions,
        community_service_hours,
    }
}

/// Clears every provider rule.
pub(super) fn well_rounded_profile() -> StudentProfile {
    profile(3, 3.8, 30000.0, 85.0, 3, 120.0)
}

pub(super) fn profile_payload(profile: &StudentProfile) -> Value {
    json!({
        "year_of_study": profile.year_of_study,
        "cgpa": profile.cgpa,
        "family_income": profile.family_income,
        "cocurricular_score": profile.cocurricular_score,
        "leadership_positions": profile.leadership_positions,
        "community_service_hours": profile.community_service_hours,
    })
}

/// Classifier returning a fixed eligible probability.
pub(super) struct FixedClassifier(pub(super) f64);

impl Classifier for FixedClassifier {
    fn classify(&self, _features: &FeatureVector) -> Result<ModelPrediction, ClassifierError> {
        ModelPrediction::from_eligible(self.0)
    }
}

pub(super) struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn classify(&self, _features: &FeatureVector) -> Result<ModelPrediction, ClassifierError> {
        Err(ClassifierError::FeatureCount {
            expected: 4,
            found: 6,
        })
    }
}

pub(super) fn full_registry() -> ModelRegistry {
    ModelRegistry::empty()
        .with_model(ModelKind::LogisticRegression, FixedClassifier(0.4))
        .with_model(ModelKind::DecisionTree, FixedClassifier(0.7))
        .with_model(ModelKind::RandomForest, FixedClassifier(0.85))
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) results: Option<ModelResults>,
    pub(super) stats: Option<DatasetStats>,
}

impl MemoryStore {
    pub(super) fn populated() -> Self {
        Self {
            results: Some(model_results()),
            stats: Some(dataset_stats()),
        }
    }
}

impl ArtifactStore for MemoryStore {
    fn model_results(&self) -> Result<Option<ModelResults>, ArtifactError> {
        Ok(self.results.clone())
    }

    fn dataset_stats(&self) -> Result<Option<DatasetStats>, ArtifactError> {
        Ok(self.stats.clone())
    }
}

pub(super) struct UnavailableStore;

impl ArtifactStore for UnavailableStore {
    fn model_results(&self) -> Result<Option<ModelResults>, ArtifactError> {
        Err(unavailable())
    }

    fn dataset_stats(&self) -> Result<Option<DatasetStats>, ArtifactError> {
        Err(unavailable())
    }
}

fn unavailable() -> ArtifactError {
    ArtifactError::Io {
        path: PathBuf::from("/mnt/models"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "volume offline"),
    }
}

pub(super) fn model_results() -> ModelResults {
    let mut results = BTreeMap::new();
    results.insert(
        "Random Forest".to_string(),
        ModelMetrics {
            accuracy: 0.92,
            precision: 0.91,
            recall: 0.9,
            f1_score: 0.905,
            confusion_matrix: [[186, 14], [20, 180]],
        },
    );
    ModelResults(results)
}

pub(super) fn dataset_stats() -> DatasetStats {
    let summary = FeatureSummary {
        min: 1.0,
        max: 4.0,
        mean: 2.5,
    };
    DatasetStats {
        total_samples: 2000,
        eligible_count: 1100,
        not_eligible_count: 900,
        eligible_percentage: 55.0,
        features: DatasetFeatureStats {
            year_of_study: summary,
            cgpa: summary,
            family_income: summary,
            cocurricular_score: summary,
        },
    }
}

pub(super) fn build_service<S>(registry: ModelRegistry, store: S) -> Arc<ScholarshipService<S>>
where
    S: ArtifactStore + 'static,
{
    Arc::new(ScholarshipService::new(Arc::new(registry), Arc::new(store)))
}

pub(super) fn router_with<S>(registry: ModelRegistry, store: S) -> axum::Router
where
    S: ArtifactStore + 'static,
{
    scholarship_router(build_service(registry, store))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
