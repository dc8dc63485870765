//! # Transliteração para ASCII
//!
//! Decompõe o texto (NFKD), descarta marcas combinantes ("ç" → "c"),
//! translitera letras sem decomposição ("ß" → "ss") e descarta o que não tem
//! equivalente ASCII (emojis, ideogramas). O resultado é sempre ASCII puro.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letras e símbolos que a decomposição canônica não reduz a ASCII.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ø', "o"),
    ('Ø', "O"),
    ('ł', "l"),
    ('Ł', "L"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ð', "d"),
    ('Ð', "D"),
    ('þ', "th"),
    ('Þ', "Th"),
    ('ı', "i"),
    ('‘', "'"),
    ('’', "'"),
    ('‚', ","),
    ('“', "\""),
    ('”', "\""),
    ('„', "\""),
    ('«', "<<"),
    ('»', ">>"),
    ('–', "-"),
    ('—', "-"),
    ('…', "..."),
    ('€', "EUR"),
    ('£', "PS"),
    ('\u{a0}', " "),
    ('º', "o"),
    ('ª', "a"),
];

/// Converte `text` para ASCII, preservando caixa.
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.nfkd() {
        if ch.is_ascii() {
            out.push(ch);
        } else if is_combining_mark(ch) {
            continue;
        } else if let Some((_, replacement)) = TRANSLITERATIONS.iter().find(|(c, _)| *c == ch) {
            out.push_str(replacement);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(to_ascii("ação está às ordens"), "acao esta as ordens");
        assert_eq!(to_ascii("Niño"), "Nino");
    }

    #[test]
    fn test_transliterates_special_letters() {
        assert_eq!(to_ascii("Straße"), "Strasse");
        assert_eq!(to_ascii("“olá”"), "\"ola\"");
    }

    #[test]
    fn test_drops_unmapped_symbols() {
        assert_eq!(to_ascii("bom dia 😀"), "bom dia ");
        assert!(to_ascii("東京 tokyo").is_ascii());
    }
}
