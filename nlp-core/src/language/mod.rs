//! # Identificação de Idioma
//!
//! Dois backends intercambiáveis com o mesmo contrato [`LanguageDetector`]:
//!
//! | Backend                 | Artefato              | Abordagem                                  |
//! |-------------------------|-----------------------|--------------------------------------------|
//! | [`StatisticalDetector`] | classificador em JSON | Naive Bayes sobre n-gramas de caracteres   |
//! | [`HeuristicDetector`]   | nenhum                | stopwords e diacríticos característicos    |
//!
//! Os detectores nunca falham na predição: entrada vazia ou que não é texto
//! produz `""`. Falhas só acontecem na construção (artefato ausente ou
//! corrompido).
//!
//! ```rust
//! use nlp_core::language::{HeuristicDetector, LanguageDetector};
//!
//! let detector = HeuristicDetector::new();
//! assert_eq!(detector.predict_lang("the cat is on the table"), "en");
//! assert_eq!(detector.predict_value(&serde_json::json!(null)), "");
//! ```

mod heuristic;
mod statistical;

pub use heuristic::{find_language, HeuristicDetector, LanguageGuess, MAX_BYTES, UNDETERMINED};
pub use statistical::{LabelClassifier, NgramClassifier, StatisticalDetector, LABEL_PREFIX};

use serde_json::Value;

pub trait LanguageDetector: Send + Sync {
    /// Código do idioma mais provável; `""` para texto vazio.
    fn predict_lang(&self, text: &str) -> String;

    /// Como [`predict_lang`](Self::predict_lang), tratando valores que não
    /// são strings como texto vazio.
    fn predict_value(&self, value: &Value) -> String {
        match value {
            Value::String(text) => self.predict_lang(text),
            _ => self.predict_lang(""),
        }
    }
}

/// Maior prefixo de `text` com até `max_bytes` bytes que termina em limite de caractere.
pub(crate) fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_utf8_respects_char_boundary() {
        let text = "é".repeat(10);
        let cut = truncate_utf8(&text, 5);
        assert_eq!(cut, "éé");
        assert_eq!(truncate_utf8("abc", 10), "abc");
        assert_eq!(truncate_utf8("abc", 0), "");
    }
}
