use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Result};
use linfa::prelude::*;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Axis};
use thiserror::Error;

/// Errors raised while loading the classifier artifact at startup.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact {path} is not a valid decision tree: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The trained classifier, consumed as an opaque function from feature
/// vector to class index. The production implementation wraps the
/// deserialized artifact; tests substitute fixed outputs.
#[cfg_attr(test, mockall::automock)]
pub trait WorkoutClassifier: Send + Sync {
    fn predict_class(&self, features: &Array1<f64>) -> Result<usize>;
}

/// Decision-tree workout classifier deserialized from a JSON artifact.
pub struct TrainedWorkoutModel {
    tree: DecisionTree<f64, usize>,
}

impl TrainedWorkoutModel {
    /// Load the model artifact from disk. Called once at process startup;
    /// a failure here is fatal.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ModelLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tree = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ModelLoadError::Decode {
                path: path.display().to_string(),
                source,
            }
        })?;

        Ok(Self { tree })
    }
}

impl WorkoutClassifier for TrainedWorkoutModel {
    fn predict_class(&self, features: &Array1<f64>) -> Result<usize> {
        // The tree predicts over a batch; wrap the single vector as a 1 x n matrix
        let records = features.view().insert_axis(Axis(0)).to_owned();
        let classes = self.tree.predict(&records);

        classes
            .first()
            .copied()
            .ok_or_else(|| anyhow!("classifier produced no class for the feature vector"))
    }
}
