//! # nlp-core — Pré-processamento de Textos de Redes Sociais
//!
//! Este crate prepara textos curtos e ruidosos (tweets, comentários) para
//! tarefas de NLP como classificação e modelagem de tópicos, em inglês,
//! português e espanhol.
//!
//! ## Arquitetura
//!
//! 1.  **Detecção de idioma** ([`language`]): decide qual normalizador usar.
//! 2.  **Normalizador** ([`normalizer`]): um por idioma, com stopwords e
//!     configuração próprias.
//! 3.  **Transformações** ([`transforms`]): operações independentes que
//!     aceitam um texto, um lote ou um lote tokenizado ([`Document`]) e
//!     devolvem o mesmo formato. Podem ser encadeadas em qualquer ordem,
//!     em código ou via [`Step`]s na configuração.
//! 4.  **Anotação** ([`annotation`], [`tagger`]): POS, lemas e entidades,
//!     usados para filtrar verbos, adjetivos, nomes de pessoas, datas...
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use nlp_core::language::{HeuristicDetector, LanguageDetector};
//! use nlp_core::models::BundledStore;
//! use nlp_core::{Document, Language, NormalizerConfig, Step, TextNormalizer};
//!
//! // 1. Roteia o documento pelo idioma
//! let text = "Não acredito que o jogo foi adiado de novo!!! kkkkk";
//! let detector = HeuristicDetector::new();
//! let language: Language = detector.predict_lang(text).parse().unwrap();
//!
//! // 2. Normalizador do idioma (o modelo é resolvido na construção)
//! let normalizer = TextNormalizer::new(NormalizerConfig::for_language(language), &BundledStore).unwrap();
//!
//! // 3. Sequência de transformações escolhida pela aplicação
//! let steps = [
//!     Step::LowercaseUnidecode,
//!     Step::RemovePunctuation,
//!     Step::RemoveRepetition,
//!     Step::RemoveStopwords,
//!     Step::RemoveN { n: 3 },
//! ];
//! let clean = normalizer.run(&Document::from(text), &steps);
//! assert_eq!(clean, Document::from("acredito jogo adiado novo"));
//! ```
//!
//! ## Módulos Principais
//!
//! - [`normalizer`]: o [`TextNormalizer`] e seu estágio de anotação.
//! - [`transforms`]: transformações sem estado.
//! - [`language`]: detectores estatístico e heurístico.
//! - [`models`]: resolução e aquisição de modelos linguísticos.
//! - [`spelling`]: correção ortográfica usada por `remove_numbers`.

pub mod annotation;
pub mod config;
pub mod document;
pub mod error;
pub mod fold;
pub mod language;
pub mod lexicon;
pub mod models;
pub mod normalizer;
pub mod spelling;
pub mod steps;
pub mod tagger;
pub mod tokenizer;
pub mod transforms;

pub use annotation::{Annotator, EntityType, PosTag, TokenRecord};
pub use config::{EntityPolicy, Language, NormalizerConfig};
pub use document::Document;
pub use error::{Error, Result};
pub use normalizer::TextNormalizer;
pub use steps::Step;
pub use transforms::NumberMode;
