//! # Anotação Linguística
//!
//! Contrato do motor de anotação consumido pelo normalizador: para cada
//! documento, uma sequência de [`TokenRecord`] com classe gramatical (POS),
//! lema, tipo de entidade e flags.
//!
//! ## Classes Gramaticais (Universal Dependencies)
//!
//! | Tag   | Significado   | Exemplos              |
//! |-------|---------------|-----------------------|
//! | NOUN  | Substantivo   | casa, governo         |
//! | PROPN | Nome próprio  | Lula, Brasil          |
//! | VERB  | Verbo         | falar, correu         |
//! | ADJ   | Adjetivo      | bonito, rápida        |
//! | ADV   | Advérbio      | rapidamente, muito    |
//! | ...   | ...           | ...                   |
//!
//! ## Tipos de Entidade
//!
//! Segue o esquema OntoNotes (PERSON, GPE, DATE, MONEY...). O normalizador
//! remove por padrão apenas o subconjunto em [`FILTERED_ENTITIES`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classe gramatical de um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
}

impl PosTag {
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
            PosTag::Space => "SPACE",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tipo de entidade nomeada (esquema OntoNotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityType {
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Person => "PERSON",
            EntityType::Norp => "NORP",
            EntityType::Fac => "FAC",
            EntityType::Org => "ORG",
            EntityType::Gpe => "GPE",
            EntityType::Loc => "LOC",
            EntityType::Product => "PRODUCT",
            EntityType::Event => "EVENT",
            EntityType::WorkOfArt => "WORK_OF_ART",
            EntityType::Law => "LAW",
            EntityType::Language => "LANGUAGE",
            EntityType::Date => "DATE",
            EntityType::Time => "TIME",
            EntityType::Percent => "PERCENT",
            EntityType::Money => "MONEY",
            EntityType::Quantity => "QUANTITY",
            EntityType::Ordinal => "ORDINAL",
            EntityType::Cardinal => "CARDINAL",
        }
    }

    /// Verdadeiro para os tipos removidos pelo normalizador.
    pub fn is_filtered(&self) -> bool {
        FILTERED_ENTITIES.contains(self)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entidades descartadas (ou acumuladas) pelo estágio de anotação.
pub const FILTERED_ENTITIES: [EntityType; 10] = [
    EntityType::Money,
    EntityType::Date,
    EntityType::Person,
    EntityType::Percent,
    EntityType::Ordinal,
    EntityType::Cardinal,
    EntityType::Quantity,
    EntityType::Gpe,
    EntityType::Norp,
    EntityType::Language,
];

/// Anotação de um token. Existe apenas durante o estágio de anotação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Forma de superfície.
    pub text: String,
    /// Forma minúscula.
    pub lower: String,
    pub lemma: String,
    pub pos: PosTag,
    /// `None` quando o token não pertence a nenhuma entidade.
    pub entity: Option<EntityType>,
    pub is_ascii: bool,
    pub is_space: bool,
    pub is_digit: bool,
    pub is_punct: bool,
    /// Parece número: "1.000", "3,5", "dez", "ten".
    pub like_num: bool,
}

impl TokenRecord {
    /// Registro com flags derivadas do texto; POS e lema ficam a cargo do chamador.
    pub fn new(text: &str, lemma: &str, pos: PosTag) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            lemma: lemma.to_string(),
            pos,
            entity: None,
            is_ascii: text.is_ascii(),
            is_space: !text.is_empty() && text.chars().all(char::is_whitespace),
            is_digit: !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()),
            is_punct: is_punctuation(text),
            like_num: looks_numeric(text),
        }
    }

    pub fn with_entity(mut self, entity: EntityType) -> Self {
        self.entity = Some(entity);
        self
    }
}

/// Token formado só por pontuação (ASCII ou tipográfica).
pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_punctuation()
                || matches!(c, '“' | '”' | '‘' | '’' | '«' | '»' | '…' | '–' | '—' | '¿' | '¡' | '·')
        })
}

/// Dígitos com separadores ("1.000,50", "3/4"), opcionalmente com sinal.
pub fn looks_numeric(text: &str) -> bool {
    let body = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
    body.chars().next().is_some_and(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/'))
}

/// Motor de anotação linguística.
///
/// `annotate` deve devolver exatamente um resultado por documento, na mesma
/// ordem da entrada, mesmo quando distribui o trabalho entre `n_process`
/// workers (1 = sequencial, 0 = todos os núcleos).
pub trait Annotator: Send + Sync {
    fn annotate(&self, docs: &[String], n_process: usize) -> Vec<Vec<TokenRecord>>;

    /// Lista de stopwords padrão do modelo, sem normalização.
    fn default_stopwords(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        let r = TokenRecord::new("2024", "2024", PosTag::Num);
        assert!(r.is_digit && r.like_num && r.is_ascii && !r.is_punct);

        let r = TokenRecord::new("ação", "ação", PosTag::Noun);
        assert!(!r.is_ascii);

        let r = TokenRecord::new("\n", "\n", PosTag::Space);
        assert!(r.is_space);

        let r = TokenRecord::new("…", "…", PosTag::Punct);
        assert!(r.is_punct);
    }

    #[test]
    fn test_looks_numeric() {
        assert!(looks_numeric("1.000,50"));
        assert!(looks_numeric("-3"));
        assert!(!looks_numeric("3a"));
        assert!(!looks_numeric("."));
    }

    #[test]
    fn test_filtered_entities() {
        assert!(EntityType::Person.is_filtered());
        assert!(EntityType::Gpe.is_filtered());
        assert!(!EntityType::Org.is_filtered());
        assert_eq!(EntityType::WorkOfArt.label(), "WORK_OF_ART");
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&PosTag::Propn).unwrap(), "\"PROPN\"");
        assert_eq!(serde_json::to_string(&EntityType::WorkOfArt).unwrap(), "\"WORK_OF_ART\"");
    }
}
