//! Detector estatístico baseado em um classificador pré-treinado.
//!
//! O artefato padrão é um [`NgramClassifier`]: Naive Bayes multinomial sobre
//! n-gramas de caracteres (1 a 3 por padrão), com suavização de Laplace.
//! Os rótulos seguem a convenção `__label__<código>`; o prefixo é removido
//! na predição.
//!
//! ## Formato do artefato (JSON)
//!
//! ```json
//! {
//!   "max_n": 3,
//!   "vocabulary": 1234,
//!   "labels": [
//!     { "label": "__label__en", "documents": 10, "total": 950, "counts": { " th": 12, ... } }
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::LanguageDetector;
use crate::error::{Error, Result};

/// Prefixo dos rótulos do classificador.
pub const LABEL_PREFIX: &str = "__label__";

const DEFAULT_MAX_N: usize = 3;

/// Artefato de classificação de idioma.
pub trait LabelClassifier: Send + Sync {
    /// Os `top_k` rótulos mais prováveis, em ordem decrescente de score.
    fn classify(&self, text: &str, top_k: usize) -> Vec<(String, f64)>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LabelModel {
    label: String,
    /// Documentos de treino com este rótulo.
    documents: u64,
    /// Soma das contagens de n-gramas.
    total: u64,
    counts: HashMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramClassifier {
    max_n: usize,
    vocabulary: usize,
    labels: Vec<LabelModel>,
}

/// n-gramas de caracteres de 1 a `max_n`, com espaço nas bordas.
fn char_ngrams(text: &str, max_n: usize) -> Vec<String> {
    let padded: Vec<char> = format!(" {} ", text.to_lowercase()).chars().collect();
    let mut grams = Vec::new();
    for n in 1..=max_n {
        for window in padded.windows(n) {
            if window.iter().all(|c| c.is_whitespace()) {
                continue;
            }
            grams.push(window.iter().collect());
        }
    }
    grams
}

impl NgramClassifier {
    /// Treina a partir de pares `(rótulo, texto)`.
    ///
    /// Os rótulos são guardados como recebidos; use o prefixo
    /// [`LABEL_PREFIX`] para que o detector devolva só o código.
    pub fn train<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::train_with(samples, DEFAULT_MAX_N)
    }

    pub fn train_with<'a, I>(samples: I, max_n: usize) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let max_n = max_n.max(1);
        let mut labels: Vec<LabelModel> = Vec::new();
        let mut vocabulary: HashSet<String> = HashSet::new();

        for (label, text) in samples {
            let index = match labels.iter().position(|m| m.label == label) {
                Some(i) => i,
                None => {
                    labels.push(LabelModel {
                        label: label.to_string(),
                        documents: 0,
                        total: 0,
                        counts: HashMap::new(),
                    });
                    labels.len() - 1
                }
            };
            let model = &mut labels[index];
            model.documents += 1;
            for gram in char_ngrams(text, max_n) {
                model.total += 1;
                *model.counts.entry(gram.clone()).or_insert(0) += 1;
                vocabulary.insert(gram);
            }
        }

        debug!(labels = labels.len(), vocabulary = vocabulary.len(), "classificador treinado");
        Self {
            max_n,
            vocabulary: vocabulary.len(),
            labels,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|m| m.label.as_str())
    }

    /// Log-verossimilhança de cada rótulo.
    fn log_scores(&self, text: &str) -> Vec<f64> {
        let grams = char_ngrams(text, self.max_n);
        let total_docs: u64 = self.labels.iter().map(|m| m.documents).sum();
        let vocabulary = self.vocabulary.max(1) as f64;

        self.labels
            .iter()
            .map(|model| {
                let prior = (model.documents as f64 / total_docs.max(1) as f64).ln();
                let denominator = model.total as f64 + vocabulary;
                grams.iter().fold(prior, |acc, gram| {
                    let count = model.counts.get(gram).copied().unwrap_or(0) as f64;
                    acc + ((count + 1.0) / denominator).ln()
                })
            })
            .collect()
    }
}

impl LabelClassifier for NgramClassifier {
    /// Scores normalizados (softmax das log-verossimilhanças).
    fn classify(&self, text: &str, top_k: usize) -> Vec<(String, f64)> {
        let scores = self.log_scores(text);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exp.iter().sum();

        let mut ranked: Vec<(String, f64)> = self
            .labels
            .iter()
            .zip(exp)
            .map(|(model, e)| (model.label.clone(), e / sum))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_k);
        ranked
    }
}

pub struct StatisticalDetector {
    classifier: Box<dyn LabelClassifier>,
}

impl StatisticalDetector {
    /// Carrega um [`NgramClassifier`] de `path`.
    ///
    /// Artefato ausente é erro fatal; não há detector alternativo.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ModelUnavailable {
                model: path.display().to_string(),
            });
        }
        let classifier = NgramClassifier::load(path)?;
        info!(path = %path.display(), labels = classifier.labels.len(), "classificador de idioma carregado");
        Ok(Self::from_classifier(Box::new(classifier)))
    }

    pub fn from_classifier(classifier: Box<dyn LabelClassifier>) -> Self {
        Self { classifier }
    }
}

impl LanguageDetector for StatisticalDetector {
    fn predict_lang(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        // o artefato trata uma linha por vez
        let line = text.replace('\n', " ");
        match self.classifier.classify(&line, 1).into_iter().next() {
            Some((label, _)) => label.strip_prefix(LABEL_PREFIX).unwrap_or(&label).to_string(),
            None => String::new(),
        }
    }
}
