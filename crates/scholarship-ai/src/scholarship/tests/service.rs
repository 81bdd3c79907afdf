use super::common::*;
use crate::scholarship::prediction::{ModelKind, ModelRegistry};
use crate::scholarship::ScholarshipServiceError;

#[test]
fn predict_prefers_random_forest_and_merges_recommendations() {
    let service = build_service(full_registry(), MemoryStore::default());

    let report = service
        .predict(&well_rounded_profile())
        .expect("prediction succeeds");

    assert_eq!(report.model_used, "Random Forest");
    assert_eq!(report.prediction, 1);
    assert_eq!(report.probability.eligible, 0.85);
    assert_eq!(report.all_predictions.len(), 3);
    assert_eq!(report.all_predictions["Logistic Regression"], 0);
    assert_eq!(report.all_predictions["Decision Tree"], 1);
    assert_eq!(report.recommendations, service.recommend(&well_rounded_profile()));
}

#[test]
fn predict_falls_back_to_first_answering_model() {
    let registry = ModelRegistry::empty()
        .with_model(ModelKind::RandomForest, FailingClassifier)
        .with_model(ModelKind::DecisionTree, FixedClassifier(0.3))
        .with_model(ModelKind::LogisticRegression, FailingClassifier);
    let service = build_service(registry, MemoryStore::default());

    let report = service
        .predict(&well_rounded_profile())
        .expect("decision tree still answers");

    assert_eq!(report.model_used, "Decision Tree");
    assert_eq!(report.prediction, 0);
    assert_eq!(report.all_predictions.len(), 1);
    assert!(!report.all_probabilities.contains_key("Random Forest"));
}

#[test]
fn predict_requires_loaded_models() {
    let service = build_service(ModelRegistry::empty(), MemoryStore::default());

    match service.predict(&well_rounded_profile()) {
        Err(ScholarshipServiceError::ModelsUnavailable) => {}
        other => panic!("expected models unavailable, got {other:?}"),
    }
    assert_eq!(service.recommend(&well_rounded_profile()).len(), 4);
}

#[test]
fn predict_fails_when_every_model_errors() {
    let registry = ModelRegistry::empty().with_model(ModelKind::RandomForest, FailingClassifier);
    let service = build_service(registry, MemoryStore::default());

    match service.predict(&well_rounded_profile()) {
        Err(ScholarshipServiceError::NoPredictions) => {}
        other => panic!("expected no predictions, got {other:?}"),
    }
}

#[test]
fn artifact_lookups_distinguish_missing_from_unavailable() {
    let missing = build_service(full_registry(), MemoryStore::default());
    assert!(matches!(
        missing.model_results(),
        Err(ScholarshipServiceError::ModelResultsMissing)
    ));
    assert!(matches!(
        missing.dataset_stats(),
        Err(ScholarshipServiceError::DatasetMissing)
    ));

    let broken = build_service(full_registry(), UnavailableStore);
    assert!(matches!(
        broken.model_results(),
        Err(ScholarshipServiceError::Artifact(_))
    ));

    let populated = build_service(full_registry(), MemoryStore::populated());
    assert_eq!(
        populated.dataset_stats().expect("stats present").total_samples,
        2000
    );
    assert!(populated
        .model_results()
        .expect("results present")
        .get("Random Forest")
        .is_some());
}

#[test]
fn registry_replaces_models_of_the_same_kind() {
    let registry = full_registry().with_model(ModelKind::RandomForest, FixedClassifier(0.1));
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.kinds(), ModelKind::ordered().to_vec());

    let service = build_service(registry, MemoryStore::default());
    let report = service
        .predict(&well_rounded_profile())
        .expect("prediction succeeds");
    assert_eq!(report.prediction, 0);
}
