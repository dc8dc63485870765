//! # Tokenizador
//!
//! Divide o texto bruto em tokens usando as fronteiras de palavra do Unicode
//! (UAX #29, via `unicode-segmentation`). Cada token preserva sua posição
//! original (offset) no texto.
//!
//! ## Regras
//!
//! - Um espaço simples apenas separa tokens e não gera token.
//! - Demais sequências de espaço em branco (quebras de linha, tabs, espaços
//!   duplos) viram tokens de espaço, marcados com `is_space`.
//! - Pontuação vira um token por caractere.
//! - Abreviações conhecidas mantêm o ponto ("Dr." é um único token).
//!
//! ```rust
//! use nlp_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("Dr. Silva chegou\n\nontem.");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Dr.", "Silva", "chegou", "\n\n", "ontem", "."]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "Lula", ",", "\n").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

impl Token {
    pub fn is_space(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Abreviações (pt, en, es) cujo ponto pertence ao token.
const ABBREVIATIONS: &[&str] = &[
    "Dr", "Dra", "Sr", "Sra", "Srta", "Prof", "Profa", "Gov", "Dep", "Sen", "Min",
    "Gen", "Cap", "Sgt", "Cel", "Pres", "Eng", "Mr", "Mrs", "Ms", "Jr", "St",
    "vs", "etc", "Av", "av", "Sto", "Sta", "Lic", "Ud", "Uds",
];

/// Tokeniza o texto.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for (start, segment) in text.split_word_bound_indices() {
        let end = start + segment.len();

        if segment == " " {
            continue;
        }

        if segment.chars().all(char::is_whitespace) {
            // Espaço simples antes de outro espaço é parte da mesma sequência
            if let Some(last) = tokens.last_mut() {
                if last.is_space() && last.end == start {
                    last.text.push_str(segment);
                    last.end = end;
                    continue;
                }
            }
            push_token(&mut tokens, segment, start, end);
            continue;
        }

        if segment == "." {
            if let Some(last) = tokens.last_mut() {
                if last.end == start && ABBREVIATIONS.contains(&last.text.as_str()) {
                    last.text.push('.');
                    last.end = end;
                    continue;
                }
            }
        }

        push_token(&mut tokens, segment, start, end);
    }

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    tokens.push(Token {
        text: text.to_string(),
        start,
        end,
        index: 0, // será atribuído depois
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(texts("Lula ganhou 2022."), vec!["Lula", "ganhou", "2022", "."]);
    }

    #[test]
    fn test_single_space_is_not_a_token() {
        assert!(tokenize("a b c").iter().all(|t| !t.is_space()));
    }

    #[test]
    fn test_whitespace_runs_become_tokens() {
        let tokens = tokenize("oi  tudo\tbem");
        let spaces: Vec<&Token> = tokens.iter().filter(|t| t.is_space()).collect();
        assert_eq!(spaces.len(), 2);
        assert_eq!(spaces[0].text, "  ");
    }

    #[test]
    fn test_abbreviation_keeps_dot() {
        assert_eq!(texts("Mr. Smith"), vec!["Mr.", "Smith"]);
    }

    #[test]
    fn test_punctuation_split() {
        assert_eq!(texts("sim!!"), vec!["sim", "!", "!"]);
    }

    #[test]
    fn test_offsets_point_to_source() {
        let text = "ação rápida";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_indices_are_sequential() {
        let tokens = tokenize("um dois três");
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
