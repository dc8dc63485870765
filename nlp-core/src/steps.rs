//! # Passos de Normalização Configuráveis
//!
//! Cada variante de [`Step`] corresponde a uma transformação. Uma sequência de
//! passos pode ser escrita em código ou lida da configuração JSON:
//!
//! ```json
//! "steps": [
//!   { "op": "remove_urls" },
//!   { "op": "lowercase_unidecode" },
//!   { "op": "remove_numbers", "mode": "replace" },
//!   { "op": "remove_n", "n": 3 }
//! ]
//! ```
//!
//! Não há ordem obrigatória: os passos rodam exatamente na ordem dada.

use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::transforms::NumberMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    LowercaseUnidecode,
    RemoveUrls,
    RemoveTweetMarking,
    RemovePunctuation,
    RemoveRepetition,
    /// Usa as stopwords do normalizador.
    RemoveStopwords,
    RemoveN {
        n: usize,
    },
    RemoveNumbers {
        #[serde(default)]
        mode: NumberMode,
        /// Idioma da correção; por padrão, o idioma do normalizador.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<Language>,
    },
    RemoveGerund,
    RemoveInfinitive,
}

impl Step {
    /// Nome da operação, igual ao usado na configuração.
    pub fn name(&self) -> &'static str {
        match self {
            Step::LowercaseUnidecode => "lowercase_unidecode",
            Step::RemoveUrls => "remove_urls",
            Step::RemoveTweetMarking => "remove_tweet_marking",
            Step::RemovePunctuation => "remove_punctuation",
            Step::RemoveRepetition => "remove_repetition",
            Step::RemoveStopwords => "remove_stopwords",
            Step::RemoveN { .. } => "remove_n",
            Step::RemoveNumbers { .. } => "remove_numbers",
            Step::RemoveGerund => "remove_gerund",
            Step::RemoveInfinitive => "remove_infinitive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps: Vec<Step> = serde_json::from_str(
            r#"[
                { "op": "remove_tweet_marking" },
                { "op": "remove_numbers", "mode": "spell", "language": "pt" },
                { "op": "remove_numbers" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::RemoveTweetMarking,
                Step::RemoveNumbers { mode: NumberMode::Spell, language: Some(Language::Pt) },
                Step::RemoveNumbers { mode: NumberMode::Filter, language: None },
            ]
        );
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        assert!(serde_json::from_str::<Step>(r#"{ "op": "stem" }"#).is_err());
    }

    #[test]
    fn test_name_matches_serde_tag() {
        let step = Step::RemoveN { n: 2 };
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["op"], step.name());
    }
}
