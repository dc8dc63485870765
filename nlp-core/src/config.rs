//! # Configuração do Normalizador
//!
//! Define o conjunto fechado de idiomas suportados e as opções que controlam
//! o estágio de anotação linguística (quais classes gramaticais e entidades
//! descartar) e a sequência padrão de passos de normalização.
//!
//! A configuração pode vir de código ou de um arquivo JSON:
//!
//! ```rust
//! use nlp_core::config::{Language, NormalizerConfig};
//!
//! let config = NormalizerConfig::from_json_str(r#"{ "language": "pt", "drop_verbs": true }"#).unwrap();
//! assert_eq!(config.language, Language::Pt);
//! assert!(config.drop_entities); // valor padrão preservado
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::steps::Step;

/// Idiomas com modelo linguístico e regras de normalização disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Pt, Language::Es];

    /// Código ISO 639-1 (ex: "pt").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }

    /// Nome do modelo linguístico associado ao idioma.
    pub fn model_name(&self) -> &'static str {
        match self {
            Language::En => "en_core_web_sm",
            Language::Pt => "pt_core_news_sm",
            Language::Es => "es_core_news_sm",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            "es" => Ok(Language::Es),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// O que fazer com tokens marcados como entidade (PERSON, DATE, MONEY...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityPolicy {
    /// Entidades passam intactas.
    Keep,
    /// Entidades são removidas da saída.
    Drop,
    /// Entidades permanecem na saída, mas sua forma minúscula é acumulada
    /// para uso posterior como stopword.
    Collect,
}

/// Opções de um [`TextNormalizer`](crate::normalizer::TextNormalizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub drop_adverbs: bool,
    pub drop_adjectives: bool,
    pub drop_verbs: bool,
    pub drop_entities: bool,
    /// Acumula entidades em vez de removê-las (exige `drop_entities`).
    pub collect_entities: bool,
    /// Remove tokens de pontuação no estágio de anotação.
    pub drop_punctuation: bool,
    /// Remove dígitos e numerais por extenso no estágio de anotação.
    pub drop_numerals: bool,
    pub language: Language,
    /// Número de workers da anotação (1 = sequencial, 0 = todos os núcleos).
    pub n_process: usize,
    /// Usa o lema em vez da forma de superfície.
    pub lemma: bool,
    /// Sequência padrão de passos usada por `run_configured`.
    pub steps: Vec<Step>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            drop_adverbs: false,
            drop_adjectives: false,
            drop_verbs: false,
            drop_entities: true,
            collect_entities: false,
            drop_punctuation: false,
            drop_numerals: false,
            language: Language::En,
            n_process: 1,
            lemma: false,
            steps: Vec::new(),
        }
    }
}

impl NormalizerConfig {
    /// Configuração padrão para um idioma.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| Error::Json {
            path: "<inline>".into(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejeita combinações de opções sem sentido.
    pub fn validate(&self) -> Result<()> {
        if self.collect_entities && !self.drop_entities {
            return Err(Error::InvalidConfig(
                "collect_entities exige drop_entities".to_string(),
            ));
        }
        if self.steps.contains(&Step::RemoveN { n: 0 }) {
            return Err(Error::InvalidConfig("remove_n exige n >= 1".to_string()));
        }
        Ok(())
    }

    pub fn entity_policy(&self) -> EntityPolicy {
        match (self.drop_entities, self.collect_entities) {
            (false, _) => EntityPolicy::Keep,
            (true, false) => EntityPolicy::Drop,
            (true, true) => EntityPolicy::Collect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip_codes() {
        assert_eq!("PT".parse::<Language>().unwrap(), Language::Pt);
        assert_eq!(Language::Es.to_string(), "es");
        assert_eq!(Language::Pt.model_name(), "pt_core_news_sm");
    }

    #[test]
    fn test_unsupported_language() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(code) if code == "fr"));
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = NormalizerConfig::from_json_str(r#"{ "drop_adverbs": true }"#).unwrap();
        assert!(config.drop_adverbs);
        assert!(config.drop_entities);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.n_process, 1);
        assert!(config.steps.is_empty());
    }

    #[test]
    fn test_entity_policy() {
        let mut config = NormalizerConfig::default();
        assert_eq!(config.entity_policy(), EntityPolicy::Drop);
        config.collect_entities = true;
        assert_eq!(config.entity_policy(), EntityPolicy::Collect);
        config.drop_entities = false;
        assert_eq!(config.entity_policy(), EntityPolicy::Keep);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "language": "es", "steps": [{ "op": "remove_urls" }, { "op": "remove_n", "n": 3 }] }"#,
        )
        .unwrap();
        let config = NormalizerConfig::from_path(&path).unwrap();
        assert_eq!(config.language, Language::Es);
        assert_eq!(config.steps, vec![Step::RemoveUrls, Step::RemoveN { n: 3 }]);
    }

    #[test]
    fn test_validate_rejects_contradictions() {
        let err = NormalizerConfig::from_json_str(r#"{ "drop_entities": false, "collect_entities": true }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = NormalizerConfig::from_json_str(r#"{ "steps": [{ "op": "remove_n", "n": 0 }] }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = NormalizerConfig::from_path("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
