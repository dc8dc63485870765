//! Detector leve, sem artefato externo.
//!
//! Cada idioma suportado tem um perfil formado por suas stopwords; cada
//! palavra do texto que aparece no perfil conta um ponto. Letras que só
//! existem em um dos idiomas (ã, õ, ñ, ¿...) somam pontos extras.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::trace;

use super::{truncate_utf8, LanguageDetector};
use crate::config::Language;
use crate::lexicon::bundled_stopwords;

/// Limite documentado de bytes analisados por texto.
pub const MAX_BYTES: usize = 10_000;

/// Código retornado quando não há evidência de nenhum idioma.
pub const UNDETERMINED: &str = "und";

const DIACRITIC_WEIGHT: f64 = 2.0;
const RELIABLE_PROBABILITY: f64 = 0.7;
const RELIABLE_EVIDENCE: f64 = 3.0;

static PROFILES: LazyLock<Vec<(Language, HashSet<&'static str>)>> = LazyLock::new(|| {
    Language::ALL
        .iter()
        .map(|&language| (language, bundled_stopwords(language).iter().copied().collect()))
        .collect()
});

/// Resultado de [`find_language`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageGuess {
    /// Código ISO 639-1, ou [`UNDETERMINED`].
    pub language: String,
    /// Fração da evidência que aponta para o idioma escolhido.
    pub probability: f64,
    pub is_reliable: bool,
}

impl LanguageGuess {
    fn undetermined() -> Self {
        Self {
            language: UNDETERMINED.to_string(),
            probability: 0.0,
            is_reliable: false,
        }
    }

    /// O idioma, se for um dos suportados pelo normalizador.
    pub fn supported(&self) -> Option<Language> {
        self.language.parse().ok()
    }
}

fn diacritic_hint(c: char) -> Option<Language> {
    match c {
        'ã' | 'õ' | 'ç' | 'â' | 'ê' | 'ô' => Some(Language::Pt),
        'ñ' | '¿' | '¡' => Some(Language::Es),
        _ => None,
    }
}

/// Estima o idioma dos primeiros `max_bytes` bytes de `text`.
pub fn find_language(text: &str, max_bytes: usize) -> LanguageGuess {
    let text = truncate_utf8(text, max_bytes).to_lowercase();
    let mut scores = vec![0.0_f64; PROFILES.len()];

    for word in text.split(|c: char| !c.is_alphabetic()).filter(|w| !w.is_empty()) {
        for (score, (_, profile)) in scores.iter_mut().zip(PROFILES.iter()) {
            if profile.contains(word) {
                *score += 1.0;
            }
        }
    }
    for language in text.chars().filter_map(diacritic_hint) {
        if let Some(i) = PROFILES.iter().position(|(l, _)| *l == language) {
            scores[i] += DIACRITIC_WEIGHT;
        }
    }

    let total: f64 = scores.iter().sum();
    if total == 0.0 {
        return LanguageGuess::undetermined();
    }

    // empate: vence o primeiro idioma de Language::ALL
    let (best, best_score) = scores
        .iter()
        .enumerate()
        .fold((0, scores[0]), |acc, (i, &s)| if s > acc.1 { (i, s) } else { acc });
    let probability = best_score / total;
    trace!(?scores, language = %PROFILES[best].0, "pontuação heurística");

    LanguageGuess {
        language: PROFILES[best].0.code().to_string(),
        probability,
        is_reliable: probability >= RELIABLE_PROBABILITY && best_score >= RELIABLE_EVIDENCE,
    }
}

#[derive(Debug, Clone)]
pub struct HeuristicDetector {
    max_bytes: usize,
}

impl HeuristicDetector {
    pub fn new() -> Self {
        Self { max_bytes: MAX_BYTES }
    }

    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Resultado completo, com probabilidade e confiabilidade.
    pub fn guess(&self, text: &str) -> LanguageGuess {
        find_language(truncate_utf8(text, self.max_bytes), self.max_bytes)
    }
}

impl Default for HeuristicDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for HeuristicDetector {
    fn predict_lang(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        self.guess(text).language
    }
}
