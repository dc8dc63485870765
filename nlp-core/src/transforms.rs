//! # Transformações de Texto
//!
//! Operações independentes e sem estado, combináveis em qualquer ordem.
//! Todas aceitam um [`Document`] e devolvem o mesmo formato:
//!
//! | Operação              | Efeito                                                      |
//! |-----------------------|-------------------------------------------------------------|
//! | `lowercase_unidecode` | minúsculas + transliteração para ASCII                      |
//! | `remove_urls`         | remove `http...` até o próximo espaço                       |
//! | `remove_tweet_marking`| remove menções (`@user`) e hashtags (`#tag`)                |
//! | `remove_punctuation`  | pontuação vira espaço; espaços repetidos são colapsados     |
//! | `remove_repetition`   | remove a primeira sequência de 3 letras iguais (`kkk`)      |
//! | `remove_n`            | remove tokens com menos de `n` caracteres                   |
//! | `remove_numbers`      | filtra, apaga ou corrige tokens com dígitos                 |
//! | `remove_gerund`       | remove o sufixo "ndo" de cada token                         |
//! | `remove_infinitive`   | remove o "r" final de cada token                            |
//!
//! ## Exemplo
//!
//! ```rust
//! use nlp_core::transforms::{lowercase_unidecode, remove_punctuation, remove_urls};
//! use nlp_core::Document;
//!
//! let doc = Document::from("Olá, MUNDO! https://t.co/x");
//! let doc = remove_punctuation(&lowercase_unidecode(&remove_urls(&doc)));
//! assert_eq!(doc, Document::from("ola mundo "));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::document::Document;
use crate::error::Error;
use crate::fold::to_ascii;
use crate::spelling::SpellCorrector;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+").expect("regex de URL"));
static MARKING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[@#]\S+").expect("regex de marcação"));
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\]^_`{|}~]"##).expect("regex de pontuação"));
static MULTI_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("regex de espaços"));

/// Sufixo de gerúndio (português).
const GERUND_SUFFIX: &str = "ndo";
/// Sufixo de infinitivo.
const INFINITIVE_SUFFIX: &str = "r";

/// Minúsculas e remoção de acentos; o resultado é ASCII puro.
pub fn lowercase_unidecode(doc: &Document) -> Document {
    doc.map_strings(lowercase_unidecode_str)
}

pub fn lowercase_unidecode_str(text: &str) -> String {
    to_ascii(&text.to_lowercase()).to_ascii_lowercase()
}

pub fn remove_urls(doc: &Document) -> Document {
    doc.map_strings(|s| URL_RE.replace_all(s, "").into_owned())
}

pub fn remove_tweet_marking(doc: &Document) -> Document {
    doc.map_strings(|s| MARKING_RE.replace_all(s, "").into_owned())
}

/// Idempotente: aplicar duas vezes produz o mesmo resultado.
pub fn remove_punctuation(doc: &Document) -> Document {
    doc.map_strings(remove_punctuation_str)
}

fn remove_punctuation_str(text: &str) -> String {
    let spaced = PUNCTUATION_RE.replace_all(text, " ");
    MULTI_SPACE_RE.replace_all(&spaced, " ").into_owned()
}

/// Remove apenas a primeira sequência de três letras minúsculas iguais.
///
/// "kkkk" vira "k"; "aaabbb" vira "bbb".
pub fn remove_repetition(doc: &Document) -> Document {
    doc.map_strings(remove_repetition_str)
}

fn remove_repetition_str(text: &str) -> String {
    let bytes = text.as_bytes();
    let run = bytes
        .windows(3)
        .position(|w| w[0].is_ascii_lowercase() && w[0] == w[1] && w[1] == w[2]);
    match run {
        // bytes ASCII: os limites do corte são limites de caractere
        Some(i) => format!("{}{}", &text[..i], &text[i + 3..]),
        None => text.to_string(),
    }
}

/// Divide em espaços simples, aplica `f` a cada token e descarta os vazios.
fn map_tokens<F>(text: &str, f: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    text.split(' ')
        .filter_map(|token| f(token))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Aplica uma regra token a token em qualquer formato, descartando tokens e
/// documentos que ficaram vazios.
fn filter_tokens<F>(doc: &Document, f: F) -> Document
where
    F: Fn(&str) -> Option<String>,
{
    match doc {
        Document::Text(text) => Document::Text(map_tokens(text, &f)),
        Document::Batch(docs) => Document::Batch(
            docs.iter()
                .map(|text| map_tokens(text, &f))
                .filter(|text| !text.is_empty())
                .collect(),
        ),
        Document::Tokenized(docs) => Document::Tokenized(
            docs.iter()
                .map(|tokens| {
                    tokens
                        .iter()
                        .filter_map(|t| f(t))
                        .filter(|t| !t.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|tokens| !tokens.is_empty())
                .collect(),
        ),
    }
}

/// Remove tokens com menos de `n` caracteres (após `trim`).
///
/// Documentos que ficam vazios somem do lote; um texto único vazio vira `""`.
pub fn remove_n(doc: &Document, n: usize) -> Document {
    filter_tokens(doc, |token| {
        (token.trim().chars().count() >= n).then(|| token.to_string())
    })
}

/// Estratégia para tokens que contêm dígitos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberMode {
    /// Remove o token inteiro ("t3ste" → "").
    Filter,
    /// Remove só os dígitos ("t3ste" → "tste").
    Replace,
    /// Envia o token ao corretor ortográfico ("t3ste" → "teste").
    Spell,
}

impl Default for NumberMode {
    fn default() -> Self {
        NumberMode::Filter
    }
}

impl fmt::Display for NumberMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumberMode::Filter => "filter",
            NumberMode::Replace => "replace",
            NumberMode::Spell => "spell",
        })
    }
}

impl FromStr for NumberMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "filter" => Ok(NumberMode::Filter),
            "replace" => Ok(NumberMode::Replace),
            "spell" => Ok(NumberMode::Spell),
            other => Err(Error::InvalidNumberMode(other.to_string())),
        }
    }
}

fn has_digit(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
}

/// Trata tokens com dígitos segundo `mode`.
///
/// `language` e `speller` só são usados no modo [`NumberMode::Spell`]; passe
/// [`NoCorrection`](crate::spelling::NoCorrection) quando não houver corretor.
pub fn remove_numbers(
    doc: &Document,
    mode: NumberMode,
    language: Language,
    speller: &dyn SpellCorrector,
) -> Document {
    match mode {
        NumberMode::Filter => filter_tokens(doc, |token| (!has_digit(token)).then(|| token.to_string())),
        NumberMode::Replace => filter_tokens(doc, |token| {
            Some(token.chars().filter(|c| !c.is_ascii_digit()).collect())
        }),
        NumberMode::Spell => filter_tokens(doc, |token| {
            if has_digit(token) {
                Some(speller.correct(token, language))
            } else {
                Some(token.to_string())
            }
        }),
    }
}

/// Remove `suffix` de cada token. Só pula tokens e documentos que já chegam
/// vazios; o que fica vazio depois do corte é mantido, para que o lote
/// continue alinhado por índice com a entrada.
fn strip_suffix_tokens(doc: &Document, suffix: &str) -> Document {
    let strip = |token: &str| token.strip_suffix(suffix).unwrap_or(token).to_string();
    let strip_text = |text: &str| {
        text.split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| strip(token))
            .collect::<Vec<_>>()
            .join(" ")
    };

    match doc {
        Document::Text(text) => Document::Text(strip_text(text)),
        Document::Batch(docs) => Document::Batch(
            docs.iter()
                .filter(|text| !text.is_empty())
                .map(|text| strip_text(text))
                .collect(),
        ),
        Document::Tokenized(docs) => Document::Tokenized(
            docs.iter()
                .filter(|tokens| !tokens.is_empty())
                .map(|tokens| {
                    tokens
                        .iter()
                        .filter(|token| !token.is_empty())
                        .map(|token| strip(token))
                        .collect()
                })
                .collect(),
        ),
    }
}

/// "falando" → "fala".
pub fn remove_gerund(doc: &Document) -> Document {
    strip_suffix_tokens(doc, GERUND_SUFFIX)
}

/// "falar" → "fala".
pub fn remove_infinitive(doc: &Document) -> Document {
    strip_suffix_tokens(doc, INFINITIVE_SUFFIX)
}

/// Versão de [`remove_infinitive`] para um único token.
pub fn remove_infinitive_str(token: &str) -> &str {
    token.strip_suffix(INFINITIVE_SUFFIX).unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::{FrequencyCorrector, NoCorrection};
    use proptest::prelude::*;

    #[test]
    fn test_lowercase_unidecode_shapes() {
        assert_eq!(lowercase_unidecode(&"Ação É Já".into()), Document::from("acao e ja"));
        assert_eq!(
            lowercase_unidecode(&vec!["Ñandú", "CAFÉ"].into()),
            Document::from(vec!["nandu", "cafe"])
        );
    }

    #[test]
    fn test_remove_urls() {
        let doc = Document::from("veja https://t.co/abc agora e http://x.y");
        assert_eq!(remove_urls(&doc), Document::from("veja  agora e "));
    }

    #[test]
    fn test_remove_tweet_marking() {
        let doc = Document::from(vec!["@fulano bom dia #sextou", "sem marcas"]);
        assert_eq!(
            remove_tweet_marking(&doc),
            Document::from(vec![" bom dia ", "sem marcas"])
        );
    }

    #[test]
    fn test_remove_punctuation() {
        let doc = Document::from("olá!!! tudo bem?? (sim)");
        assert_eq!(remove_punctuation(&doc), Document::from("olá tudo bem sim "));
    }

    #[test]
    fn test_remove_repetition_first_run_only() {
        assert_eq!(remove_repetition(&"kkkk".into()), Document::from("k"));
        assert_eq!(remove_repetition(&"aaa bbb".into()), Document::from(" bbb"));
        assert_eq!(remove_repetition(&"AAA".into()), Document::from("AAA"));
        assert_eq!(remove_repetition(&"ééé".into()), Document::from("ééé"));
    }

    #[test]
    fn test_remove_n_batch_drops_empty_documents() {
        let doc = Document::from(vec!["ok", "a", "wide"]);
        assert_eq!(remove_n(&doc, 2), Document::from(vec!["ok", "wide"]));
    }

    #[test]
    fn test_remove_n_scalar() {
        assert_eq!(remove_n(&"a bb ccc".into(), 2), Document::from("bb ccc"));
        assert_eq!(remove_n(&"a".into(), 2), Document::empty());
    }

    #[test]
    fn test_remove_n_tokenized() {
        let doc = Document::from(vec![vec!["a", "bb"], vec!["c"]]);
        assert_eq!(remove_n(&doc, 2), Document::from(vec![vec!["bb"]]));
    }

    #[test]
    fn test_remove_numbers_modes() {
        let doc = Document::from("t3ste");
        assert_eq!(
            remove_numbers(&doc, NumberMode::Replace, Language::Pt, &NoCorrection),
            Document::from("tste")
        );
        assert_eq!(
            remove_numbers(&doc, NumberMode::Filter, Language::Pt, &NoCorrection),
            Document::empty()
        );
    }

    #[test]
    fn test_remove_numbers_batch_drops_empty() {
        let doc = Document::from(vec!["123", "abc 4d", "xyz"]);
        assert_eq!(
            remove_numbers(&doc, NumberMode::Filter, Language::En, &NoCorrection),
            Document::from(vec!["abc", "xyz"])
        );
    }

    #[test]
    fn test_remove_numbers_tokenized() {
        let doc = Document::from(vec![vec!["a1", "b"], vec!["22"]]);
        assert_eq!(
            remove_numbers(&doc, NumberMode::Replace, Language::En, &NoCorrection),
            Document::from(vec![vec!["a", "b"]])
        );
    }

    #[test]
    fn test_remove_numbers_spell() {
        let mut speller = FrequencyCorrector::new();
        speller.add_word(Language::Pt, "teste", 10);
        let doc = Document::from("um t3ste aqui");
        assert_eq!(
            remove_numbers(&doc, NumberMode::Spell, Language::Pt, &speller),
            Document::from("um teste aqui")
        );
    }

    #[test]
    fn test_number_mode_parse() {
        assert_eq!("spell".parse::<NumberMode>().unwrap(), NumberMode::Spell);
        assert!(matches!("digits".parse::<NumberMode>(), Err(Error::InvalidNumberMode(_))));
    }

    #[test]
    fn test_gerund_and_infinitive() {
        assert_eq!(remove_gerund(&"falando".into()), Document::from("fala"));
        assert_eq!(remove_infinitive(&"falar".into()), Document::from("fala"));
        assert_eq!(
            remove_gerund(&vec!["correndo rapido", "", "andando"].into()),
            Document::from(vec!["corre rapido", "anda"])
        );
        assert_eq!(remove_infinitive_str("comer"), "come");
    }

    #[test]
    fn test_suffix_stripping_keeps_batch_alignment() {
        assert_eq!(
            remove_gerund(&vec!["ndo", "falando"].into()),
            Document::from(vec!["", "fala"])
        );
        assert_eq!(
            remove_infinitive(&vec![vec!["r", "ler"], vec!["ir"]].into()),
            Document::from(vec![vec!["", "le"], vec!["i"]])
        );
        assert_eq!(remove_gerund(&"ndo".into()), Document::empty());
    }

    proptest! {
        #[test]
        fn prop_lowercase_unidecode_is_ascii_lowercase(s in "\\PC*") {
            let out = lowercase_unidecode_str(&s);
            prop_assert!(out.is_ascii());
            prop_assert!(!out.bytes().any(|b| b.is_ascii_uppercase()));
        }

        #[test]
        fn prop_remove_punctuation_idempotent(s in "\\PC*") {
            let once = remove_punctuation(&Document::Text(s));
            let twice = remove_punctuation(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_without_digits_is_identity(words in proptest::collection::vec("[a-zà-ú]{1,8}", 1..6)) {
            let text = words.join(" ");
            let out = remove_numbers(&Document::Text(text.clone()), NumberMode::Filter, Language::Pt, &NoCorrection);
            prop_assert_eq!(out, Document::Text(text));
        }
    }
}
