//! # Documentos: texto único, lote ou lote pré-tokenizado
//!
//! Todas as transformações aceitam os três formatos e devolvem o mesmo formato
//! recebido: texto entra, texto sai; lote entra, lote sai.
//!
//! Entradas dinâmicas (ex: JSON vindo de uma coleta) passam por
//! [`Document::from_value`], que nunca falha: qualquer valor que não seja
//! texto nem lista vira um texto vazio.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// Um único texto.
    Text(String),
    /// Lote de textos, um por documento.
    Batch(Vec<String>),
    /// Lote de documentos já divididos em tokens.
    Tokenized(Vec<Vec<String>>),
}

impl Document {
    /// Documento vazio usado como marcador de "nada restou".
    pub fn empty() -> Self {
        Document::Text(String::new())
    }

    /// Converte um valor JSON arbitrário, sem nunca falhar.
    ///
    /// - string → `Text`
    /// - lista cujo primeiro elemento é lista → `Tokenized`
    /// - demais listas → `Batch` (números e booleanos viram texto, o resto vira "")
    /// - qualquer outro valor → `Text("")`
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Document::Text(s.clone()),
            Value::Array(items) if matches!(items.first(), Some(Value::Array(_))) => {
                Document::Tokenized(
                    items
                        .iter()
                        .map(|item| match item {
                            Value::Array(tokens) => tokens.iter().map(coerce_text).collect(),
                            other => vec![coerce_text(other)],
                        })
                        .collect(),
                )
            }
            Value::Array(items) => Document::Batch(items.iter().map(coerce_text).collect()),
            _ => Document::empty(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Document::Text(s) => Value::String(s.clone()),
            Document::Batch(docs) => Value::from(docs.clone()),
            Document::Tokenized(docs) => Value::Array(docs.iter().map(|d| Value::from(d.clone())).collect()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Document::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_batch(&self) -> Option<&[String]> {
        match self {
            Document::Batch(docs) => Some(docs),
            _ => None,
        }
    }

    pub fn as_tokenized(&self) -> Option<&[Vec<String>]> {
        match self {
            Document::Tokenized(docs) => Some(docs),
            _ => None,
        }
    }

    /// Verdadeiro quando não há nenhum conteúdo textual.
    pub fn is_empty(&self) -> bool {
        match self {
            Document::Text(s) => s.is_empty(),
            Document::Batch(docs) => docs.is_empty(),
            Document::Tokenized(docs) => docs.is_empty(),
        }
    }

    /// Aplica `f` a cada string, em qualquer nível, preservando o formato.
    pub fn map_strings<F>(&self, f: F) -> Document
    where
        F: Fn(&str) -> String,
    {
        match self {
            Document::Text(s) => Document::Text(f(s)),
            Document::Batch(docs) => Document::Batch(docs.iter().map(|d| f(d)).collect()),
            Document::Tokenized(docs) => Document::Tokenized(
                docs.iter()
                    .map(|tokens| tokens.iter().map(|t| f(t)).collect())
                    .collect(),
            ),
        }
    }
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::Text(s.to_string())
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::Text(s)
    }
}

impl From<Vec<String>> for Document {
    fn from(docs: Vec<String>) -> Self {
        Document::Batch(docs)
    }
}

impl From<Vec<&str>> for Document {
    fn from(docs: Vec<&str>) -> Self {
        Document::Batch(docs.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Vec<String>>> for Document {
    fn from(docs: Vec<Vec<String>>) -> Self {
        Document::Tokenized(docs)
    }
}

impl From<Vec<Vec<&str>>> for Document {
    fn from(docs: Vec<Vec<&str>>) -> Self {
        Document::Tokenized(
            docs.into_iter()
                .map(|d| d.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_shapes() {
        assert_eq!(Document::from_value(&json!("oi")), Document::from("oi"));
        assert_eq!(
            Document::from_value(&json!(["a", 1, true, null])),
            Document::from(vec!["a", "1", "true", ""])
        );
        assert_eq!(
            Document::from_value(&json!([["a", "b"], ["c"]])),
            Document::from(vec![vec!["a", "b"], vec!["c"]])
        );
    }

    #[test]
    fn test_non_text_input_is_empty_text() {
        assert_eq!(Document::from_value(&json!(42)), Document::empty());
        assert_eq!(Document::from_value(&json!({"text": "x"})), Document::empty());
        assert_eq!(Document::from_value(&Value::Null), Document::empty());
    }

    #[test]
    fn test_map_strings_preserves_shape() {
        let doc = Document::from(vec![vec!["A", "B"], vec!["C"]]);
        let upper = doc.map_strings(|s| s.to_lowercase());
        assert_eq!(upper, Document::from(vec![vec!["a", "b"], vec!["c"]]));
    }

    #[test]
    fn test_to_value_round_trip() {
        let value = json!([["x"], ["y", "z"]]);
        assert_eq!(Document::from_value(&value).to_value(), value);
    }
}
