//! # Correção Ortográfica
//!
//! Corretor baseado em frequência de palavras: para um token desconhecido,
//! gera todas as variações a distância de edição 1 (e depois 2) e escolhe a
//! palavra conhecida mais frequente. Sem candidato, o token volta inalterado.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::config::Language;

/// Corretor ortográfico parametrizado por idioma.
///
/// Implementações devem ser funções puras: sem sugestão, devolvem o token.
pub trait SpellCorrector: Send + Sync {
    fn correct(&self, token: &str, language: Language) -> String;
}

/// Corretor identidade.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl SpellCorrector for NoCorrection {
    fn correct(&self, token: &str, _language: Language) -> String {
        token.to_string()
    }
}

/// Corretor por frequência com dicionários separados por idioma.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCorrector {
    dictionaries: HashMap<Language, HashMap<String, u64>>,
    /// Tamanho, em caracteres, da maior palavra de cada dicionário.
    longest: HashMap<Language, usize>,
}

/// Folga de tamanho além da maior palavra conhecida: tokens mais longos que
/// isso não podem chegar a uma palavra do dicionário com duas edições.
const MAX_LENGTH_SLACK: usize = 2;

impl FrequencyCorrector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona (ou soma) a frequência de uma palavra.
    pub fn add_word(&mut self, language: Language, word: &str, frequency: u64) {
        let word = word.to_lowercase();
        let length = word.chars().count();
        let longest = self.longest.entry(language).or_insert(0);
        *longest = (*longest).max(length);

        *self
            .dictionaries
            .entry(language)
            .or_default()
            .entry(word)
            .or_insert(0) += frequency;
    }

    /// Conta as palavras alfabéticas de um texto de referência.
    pub fn load_corpus(&mut self, language: Language, text: &str) {
        for word in text
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
        {
            self.add_word(language, word, 1);
        }
    }

    pub fn frequency(&self, word: &str, language: Language) -> u64 {
        self.dictionaries
            .get(&language)
            .and_then(|d| d.get(word))
            .copied()
            .unwrap_or(0)
    }

    fn best_known<'a, I>(&self, dictionary: &HashMap<String, u64>, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        candidates
            .into_iter()
            .filter_map(|c| dictionary.get(c).map(|freq| (c, *freq)))
            // maior frequência; empate resolvido pela ordem alfabética
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(c, _)| c.clone())
    }
}

impl SpellCorrector for FrequencyCorrector {
    fn correct(&self, token: &str, language: Language) -> String {
        let Some(dictionary) = self.dictionaries.get(&language) else {
            return token.to_string();
        };
        let word = token.to_lowercase();
        if dictionary.contains_key(&word) {
            return word;
        }

        let longest = self.longest.get(&language).copied().unwrap_or(0);
        if word.chars().count() > longest + MAX_LENGTH_SLACK {
            debug!(token, longest, "token longo demais para correção");
            return token.to_string();
        }

        let alphabet = alphabet(language);
        let first = edits1(&word, alphabet);
        if let Some(best) = self.best_known(dictionary, &first) {
            return best;
        }
        let second: HashSet<String> = first.iter().flat_map(|e| edits1(e, alphabet)).collect();
        if let Some(best) = self.best_known(dictionary, &second) {
            return best;
        }

        debug!(token, language = %language, "sem sugestão de correção");
        token.to_string()
    }
}

fn alphabet(language: Language) -> &'static str {
    match language {
        Language::En => "abcdefghijklmnopqrstuvwxyz",
        Language::Pt => "abcdefghijklmnopqrstuvwxyzáâãàçéêíóôõú",
        Language::Es => "abcdefghijklmnopqrstuvwxyzáéíñóúü",
    }
}

/// Todas as strings a uma edição de distância: remoção, transposição,
/// substituição e inserção.
fn edits1(word: &str, alphabet: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = HashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);
        if !right.is_empty() {
            edits.insert(left.iter().chain(&right[1..]).collect());
        }
        if right.len() > 1 {
            edits.insert(
                left.iter()
                    .chain([right[1], right[0]].iter())
                    .chain(&right[2..])
                    .collect(),
            );
        }
        for c in alphabet.chars() {
            if !right.is_empty() {
                edits.insert(left.iter().chain(std::iter::once(&c)).chain(&right[1..]).collect());
            }
            edits.insert(left.iter().chain(std::iter::once(&c)).chain(right).collect());
        }
    }
    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speller() -> FrequencyCorrector {
        let mut s = FrequencyCorrector::new();
        s.load_corpus(Language::En, "the house is near the horse and the mouse");
        s.add_word(Language::Pt, "casa", 5);
        s.add_word(Language::Pt, "caça", 1);
        s
    }

    #[test]
    fn test_known_word_unchanged() {
        assert_eq!(speller().correct("house", Language::En), "house");
    }

    #[test]
    fn test_single_edit() {
        assert_eq!(speller().correct("h0use", Language::En), "house");
        assert_eq!(speller().correct("cas4", Language::Pt), "casa");
    }

    #[test]
    fn test_two_edits() {
        assert_eq!(speller().correct("h0us3", Language::En), "house");
    }

    #[test]
    fn test_prefers_frequent_candidate() {
        // "the" aparece 3 vezes no corpus
        assert_eq!(speller().correct("th3", Language::En), "the");
    }

    #[test]
    fn test_miss_returns_input() {
        assert_eq!(speller().correct("x9z9q9w", Language::En), "x9z9q9w");
        assert_eq!(speller().correct("h0use", Language::Es), "h0use");
    }

    #[test]
    fn test_long_token_is_returned_without_search() {
        let mut s = FrequencyCorrector::new();
        s.add_word(Language::Pt, "teste", 1);
        let token = "7qq7qq".repeat(6) + "a1b2";
        assert_eq!(token.chars().count(), 40);

        let start = std::time::Instant::now();
        assert_eq!(s.correct(&token, Language::Pt), token);
        assert!(start.elapsed() < std::time::Duration::from_millis(100));

        // dentro da folga a busca continua valendo
        assert_eq!(s.correct("t3stex", Language::Pt), "teste");
    }

    #[test]
    fn test_edits1_contains_all_kinds() {
        let edits = edits1("ab", "ab");
        assert!(edits.contains("b")); // remoção
        assert!(edits.contains("ba")); // transposição
        assert!(edits.contains("bb")); // substituição
        assert!(edits.contains("aab")); // inserção
    }
}
