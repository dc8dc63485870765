//! # Erros do crate
//!
//! Apenas os caminhos de construção falham: resolução de modelos, leitura de
//! artefatos e configuração. As transformações de texto nunca retornam erro;
//! entradas malformadas produzem resultados vazios.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Erro de construção de normalizadores, detectores e artefatos.
#[derive(Debug, Error)]
pub enum Error {
    /// Código de idioma fora do conjunto suportado.
    #[error("idioma não suportado: {0}")]
    UnsupportedLanguage(String),

    /// O modelo linguístico continua ausente após a tentativa de aquisição.
    #[error("modelo '{model}' indisponível")]
    ModelUnavailable { model: String },

    /// A aquisição sob demanda do modelo falhou (não há nova tentativa).
    #[error("falha ao adquirir o modelo '{model}'")]
    ModelAcquisition {
        model: String,
        #[source]
        source: io::Error,
    },

    #[error("erro de E/S em {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON inválido em {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Modo de tratamento de números desconhecido (esperado: filter, replace, spell).
    #[error("modo de números inválido: {0}")]
    InvalidNumberMode(String),

    #[error("configuração inválida: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
