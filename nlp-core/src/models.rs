//! # Modelos Linguísticos
//!
//! Resolve um idioma para um motor de anotação pronto para uso. Se o modelo
//! não estiver disponível localmente, é adquirido **uma única vez**, de forma
//! bloqueante, antes de prosseguir. Falhas de aquisição são propagadas ao
//! chamador; não há nova tentativa nem idioma alternativo.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::annotation::Annotator;
use crate::config::Language;
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;
use crate::tagger::LexiconAnnotator;

/// Origem dos modelos linguísticos.
pub trait ModelStore {
    /// O modelo do idioma já está disponível localmente?
    fn is_available(&self, language: Language) -> bool;

    /// Adquire o modelo (download, extração...). Chamado no máximo uma vez.
    fn acquire(&self, language: Language) -> Result<()>;

    /// Carrega um modelo disponível.
    fn load(&self, language: Language) -> Result<Arc<dyn Annotator>>;
}

/// Garante que o modelo do idioma existe, adquirindo-o se necessário.
pub fn ensure_model_available(store: &dyn ModelStore, language: Language) -> Result<()> {
    if store.is_available(language) {
        return Ok(());
    }

    info!(model = language.model_name(), "modelo ausente; iniciando aquisição");
    store.acquire(language)?;

    if store.is_available(language) {
        Ok(())
    } else {
        Err(Error::ModelUnavailable {
            model: language.model_name().to_string(),
        })
    }
}

/// Resolve o motor de anotação de um idioma.
pub fn resolve_annotator(store: &dyn ModelStore, language: Language) -> Result<Arc<dyn Annotator>> {
    ensure_model_available(store, language)?;
    let annotator = store.load(language)?;
    info!(model = language.model_name(), "modelo carregado");
    Ok(annotator)
}

/// Modelos em disco: um léxico JSON por idioma em `<root>/<modelo>.json`.
///
/// A aquisição grava o léxico embutido do idioma no diretório.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    root: PathBuf,
}

impl LexiconStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn model_path(&self, language: Language) -> PathBuf {
        self.root.join(format!("{}.json", language.model_name()))
    }
}

impl ModelStore for LexiconStore {
    fn is_available(&self, language: Language) -> bool {
        self.model_path(language).is_file()
    }

    fn acquire(&self, language: Language) -> Result<()> {
        let model = language.model_name().to_string();
        let lexicon = Lexicon::bundled(language);
        let json = serde_json::to_string_pretty(&lexicon).map_err(|source| Error::Json {
            path: self.model_path(language),
            source,
        })?;

        std::fs::create_dir_all(&self.root)
            .and_then(|_| std::fs::write(self.model_path(language), json))
            .map_err(|source| Error::ModelAcquisition { model, source })
    }

    fn load(&self, language: Language) -> Result<Arc<dyn Annotator>> {
        let path = self.model_path(language);
        let raw = std::fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let lexicon: Lexicon = serde_json::from_str(&raw).map_err(|source| Error::Json { path, source })?;
        Ok(Arc::new(LexiconAnnotator::new(lexicon)))
    }
}

/// Modelos embutidos no binário: sempre disponíveis, sem E/S.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStore;

impl ModelStore for BundledStore {
    fn is_available(&self, _language: Language) -> bool {
        true
    }

    fn acquire(&self, _language: Language) -> Result<()> {
        Ok(())
    }

    fn load(&self, language: Language) -> Result<Arc<dyn Annotator>> {
        Ok(Arc::new(LexiconAnnotator::bundled(language)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Store que nunca fica disponível e conta as tentativas de aquisição.
    struct BrokenStore {
        attempts: Cell<usize>,
        fail: bool,
    }

    impl ModelStore for BrokenStore {
        fn is_available(&self, _language: Language) -> bool {
            false
        }

        fn acquire(&self, language: Language) -> Result<()> {
            self.attempts.set(self.attempts.get() + 1);
            if self.fail {
                Err(Error::ModelAcquisition {
                    model: language.model_name().to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "sem rede"),
                })
            } else {
                Ok(())
            }
        }

        fn load(&self, _language: Language) -> Result<Arc<dyn Annotator>> {
            unreachable!("modelo nunca disponível")
        }
    }

    #[test]
    fn test_acquires_missing_model_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = LexiconStore::new(dir.path().join("models"));
        assert!(!store.is_available(Language::Pt));

        resolve_annotator(&store, Language::Pt).unwrap();
        assert!(store.model_path(Language::Pt).is_file());
        assert!(!store.is_available(Language::En));
    }

    #[test]
    fn test_loads_existing_model_without_acquiring() {
        let dir = tempfile::tempdir().unwrap();
        let store = LexiconStore::new(dir.path());
        let mut lexicon = Lexicon::empty(Language::En);
        lexicon.stopwords = vec!["custom".to_string()];
        std::fs::write(store.model_path(Language::En), serde_json::to_string(&lexicon).unwrap()).unwrap();

        let annotator = resolve_annotator(&store, Language::En).unwrap();
        assert_eq!(annotator.default_stopwords(), vec!["custom".to_string()]);
    }

    #[test]
    fn test_acquisition_failure_is_fatal_and_not_retried() {
        let store = BrokenStore { attempts: Cell::new(0), fail: true };
        let err = ensure_model_available(&store, Language::En).unwrap_err();
        assert!(matches!(err, Error::ModelAcquisition { .. }));
        assert_eq!(store.attempts.get(), 1);
    }

    #[test]
    fn test_still_missing_after_acquisition() {
        let store = BrokenStore { attempts: Cell::new(0), fail: false };
        let err = ensure_model_available(&store, Language::Es).unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable { model } if model == "es_core_news_sm"));
        assert_eq!(store.attempts.get(), 1);
    }

    #[test]
    fn test_corrupt_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LexiconStore::new(dir.path());
        std::fs::write(store.model_path(Language::Pt), "{ not json").unwrap();
        assert!(matches!(store.load(Language::Pt), Err(Error::Json { .. })));
    }
}
