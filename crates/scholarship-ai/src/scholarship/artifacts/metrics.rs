use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Held-out evaluation metrics recorded for one trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    /// `[[tn, fp], [fn, tp]]`
    pub confusion_matrix: [[u64; 2]; 2],
}

/// Contents of `model_results.json`, keyed by model display name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelResults(pub BTreeMap<String, ModelMetrics>);

impl ModelResults {
    pub fn get(&self, model: &str) -> Option<&ModelMetrics> {
        self.0.get(model)
    }

    pub fn best_by_f1(&self) -> Option<(&str, &ModelMetrics)> {
        self.0
            .iter()
            .max_by(|(_, left), (_, right)| left.f1_score.total_cmp(&right.f1_score))
            .map(|(name, metrics)| (name.as_str(), metrics))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_and_picks_best_f1() {
        let raw = r#"{
            "Decision Tree": {"accuracy": 0.88, "precision": 0.86, "recall": 0.84, "f1_score": 0.85, "confusion_matrix": [[180, 20], [24, 176]]},
            "Random Forest": {"accuracy": 0.92, "precision": 0.91, "recall": 0.9, "f1_score": 0.905, "confusion_matrix": [[186, 14], [20, 180]]}
        }"#;
        let results: ModelResults = serde_json::from_str(raw).expect("results parse");

        let (name, metrics) = results.best_by_f1().expect("non-empty");
        assert_eq!(name, "Random Forest");
        assert_eq!(metrics.confusion_matrix[1][1], 180);
        assert!(results.get("Logistic Regression").is_none());
    }
}
