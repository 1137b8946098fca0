use crate::classifiers::Classifier;
use crate::core::feature_schema::{FEATURE_NAMES, matches_canonical};
use crate::store::algorithm::Algorithm;
use crate::store::artifact::{ModelArtifact, ModelCard};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("model artifact for '{name}' not found at {}", path.display())]
    ArtifactMissing {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("model artifact for '{name}' at {} is unreadable", path.display())]
    ArtifactUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact for {expected} holds a {found} model")]
    AlgorithmMismatch {
        expected: Algorithm,
        found: Algorithm,
    },
    #[error("artifact for '{name}' was fitted on features {found:?}, expected {expected:?}")]
    SchemaMismatch {
        name: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl StoreError {
    /// The selector name the failed request was for.
    pub fn name(&self) -> String {
        match self {
            StoreError::ArtifactMissing { name, .. }
            | StoreError::ArtifactUnreadable { name, .. }
            | StoreError::SchemaMismatch { name, .. } => name.clone(),
            StoreError::AlgorithmMismatch { expected, .. } => expected.to_string(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::ArtifactMissing { .. })
    }
}

/// Loads fitted classifiers from `<model_dir>/<Algorithm>.json` and keeps
/// each one for the rest of the store's lifetime.
///
/// The cache only grows on a successful load; a failed load leaves it as it
/// was. Artifacts are never written.
#[derive(Debug)]
pub struct ModelStore {
    model_dir: PathBuf,
    cache: HashMap<Algorithm, Arc<Classifier>>,
    cards: HashMap<Algorithm, ModelCard>,
}

impl ModelStore {
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            cache: HashMap::new(),
            cards: HashMap::new(),
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    pub fn artifact_path(&self, algorithm: Algorithm) -> PathBuf {
        self.model_dir.join(algorithm.artifact_file_name())
    }

    pub fn is_cached(&self, algorithm: Algorithm) -> bool {
        self.cache.contains_key(&algorithm)
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    pub fn load(&mut self, algorithm: Algorithm) -> Result<Arc<Classifier>, StoreError> {
        if let Some(classifier) = self.cache.get(&algorithm) {
            debug!(%algorithm, "classifier cache hit");
            return Ok(Arc::clone(classifier));
        }

        let mut artifact = self.read_artifact(algorithm)?;
        let card = artifact.card.take();
        let classifier = Arc::new(artifact.into_classifier());
        info!(
            %algorithm,
            probabilistic = classifier.supports_probability(),
            "classifier loaded"
        );
        self.cache.insert(algorithm, Arc::clone(&classifier));
        if let Some(card) = card {
            self.cards.insert(algorithm, card);
        }
        Ok(classifier)
    }

    /// Like [`ModelStore::load`], for a free-form name. Names outside the
    /// supported set have no artifact and are reported as missing.
    pub fn load_named(&mut self, name: &str) -> Result<Arc<Classifier>, StoreError> {
        match Algorithm::parse(name) {
            Some(algorithm) => self.load(algorithm),
            None => Err(StoreError::ArtifactMissing {
                name: name.to_string(),
                path: self.model_dir.join(format!("{}.json", name.trim())),
                source: io::Error::new(ErrorKind::NotFound, "unsupported algorithm"),
            }),
        }
    }

    /// The card kept from the last successful [`ModelStore::load`].
    pub fn cached_card(&self, algorithm: Algorithm) -> Option<&ModelCard> {
        self.cards.get(&algorithm)
    }

    /// Reads the artifact's model card without caching the classifier.
    pub fn card(&self, algorithm: Algorithm) -> Result<Option<ModelCard>, StoreError> {
        Ok(self.read_artifact(algorithm)?.card)
    }

    fn read_artifact(&self, algorithm: Algorithm) -> Result<ModelArtifact, StoreError> {
        let path = self.artifact_path(algorithm);
        let name = algorithm.to_string();
        debug!(path = %path.display(), "reading model artifact");

        let file = File::open(&path).map_err(|source| StoreError::ArtifactMissing {
            name: name.clone(),
            path: path.clone(),
            source,
        })?;

        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::ArtifactUnreadable {
                name: name.clone(),
                path: path.clone(),
                source,
            })?;

        let found = artifact.model.algorithm();
        if found != algorithm {
            return Err(StoreError::AlgorithmMismatch {
                expected: algorithm,
                found,
            });
        }

        if !matches_canonical(&artifact.feature_names) {
            return Err(StoreError::SchemaMismatch {
                name,
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: artifact.feature_names,
            });
        }

        Ok(artifact)
    }
}
