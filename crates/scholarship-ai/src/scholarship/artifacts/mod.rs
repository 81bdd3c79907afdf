//! Read access to what the offline training pipeline leaves behind.

mod dataset;
mod metrics;

pub use dataset::{DatasetFeatureStats, DatasetStats, FeatureSummary};
pub use metrics::{ModelMetrics, ModelResults};

use crate::config::ArtifactConfig;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub(crate) const MODEL_RESULTS_FILE: &str = "model_results.json";
pub(crate) const FEATURES_FILE: &str = "features.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON artifact {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid dataset {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("features.json lists {found:?}, expected {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// Storage abstraction so the service can be exercised without a filesystem.
pub trait ArtifactStore: Send + Sync {
    fn model_results(&self) -> Result<Option<ModelResults>, ArtifactError>;
    fn dataset_stats(&self) -> Result<Option<DatasetStats>, ArtifactError>;
}

/// Reads `model_results.json` from the model directory and the dataset CSV.
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    model_dir: PathBuf,
    dataset_path: PathBuf,
}

impl FileArtifactStore {
    pub fn new(model_dir: impl Into<PathBuf>, dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            dataset_path: dataset_path.into(),
        }
    }

    pub fn from_config(config: &ArtifactConfig) -> Self {
        Self::new(config.model_dir.clone(), config.dataset_path.clone())
    }
}

impl ArtifactStore for FileArtifactStore {
    fn model_results(&self) -> Result<Option<ModelResults>, ArtifactError> {
        read_json(&self.model_dir.join(MODEL_RESULTS_FILE))
    }

    fn dataset_stats(&self) -> Result<Option<DatasetStats>, ArtifactError> {
        let path = &self.dataset_path;
        let Some(file) = open_if_exists(path)? else {
            return Ok(None);
        };

        DatasetStats::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|source| ArtifactError::Csv {
                path: path.clone(),
                source,
            })
    }
}

/// `Ok(None)` when the artifact has not been produced yet.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ArtifactError> {
    let Some(file) = open_if_exists(path)? else {
        return Ok(None);
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|source| ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn open_if_exists(path: &Path) -> Result<Option<File>, ArtifactError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
