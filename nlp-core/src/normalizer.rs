//! # Normalizador de Textos
//!
//! O [`TextNormalizer`] guarda a configuração de um idioma (classes
//! gramaticais e entidades a descartar), o motor de anotação resolvido e o
//! estado mutável: a lista de stopwords e o acumulador de entidades.
//!
//! ## Fluxo típico
//!
//! ```rust
//! use nlp_core::{Document, NormalizerConfig, TextNormalizer};
//! use nlp_core::models::BundledStore;
//! use nlp_core::transforms::{lowercase_unidecode, remove_punctuation};
//!
//! let mut normalizer = TextNormalizer::new(NormalizerConfig::default(), &BundledStore).unwrap();
//!
//! // Estágio de anotação: um texto normalizado por documento, na mesma ordem
//! let docs = vec!["Barack Obama visited the museum on Monday".to_string()];
//! let annotated = normalizer.linguistic_processing(&docs, 1, false);
//! assert_eq!(annotated, vec!["visit the museum on".to_string()]);
//!
//! // Transformações avulsas, na ordem que a aplicação quiser
//! let doc = remove_punctuation(&lowercase_unidecode(&Document::from("The museum, OPEN!")));
//! assert_eq!(normalizer.remove_stopwords(&doc), Document::from("museum open "));
//! ```
//!
//! ## Concorrência
//!
//! Uma instância tem dono único: `append_stopwords` e o estágio de anotação
//! exigem `&mut self`. O paralelismo existe apenas dentro da anotação.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::annotation::{Annotator, PosTag, TokenRecord};
use crate::config::{EntityPolicy, Language, NormalizerConfig};
use crate::document::Document;
use crate::error::Result;
use crate::models::{resolve_annotator, ModelStore};
use crate::spelling::{NoCorrection, SpellCorrector};
use crate::steps::Step;
use crate::transforms::{self, lowercase_unidecode_str, remove_infinitive_str, NumberMode};

pub struct TextNormalizer {
    config: NormalizerConfig,
    annotator: Arc<dyn Annotator>,
    speller: Option<Arc<dyn SpellCorrector>>,
    /// Stopwords na ordem de inserção.
    stopwords: Vec<String>,
    stopword_set: HashSet<String>,
    /// Formas minúsculas de entidades vistas no modo de coleta.
    entity_accumulator: Vec<String>,
}

impl TextNormalizer {
    /// Resolve o modelo do idioma configurado, adquirindo-o se necessário.
    pub fn new(config: NormalizerConfig, store: &dyn ModelStore) -> Result<Self> {
        let annotator = resolve_annotator(store, config.language)?;
        Ok(Self::with_annotator(config, annotator))
    }

    /// Usa um motor de anotação já resolvido.
    pub fn with_annotator(config: NormalizerConfig, annotator: Arc<dyn Annotator>) -> Self {
        let mut stopwords = Vec::new();
        let mut stopword_set = HashSet::new();
        for word in annotator.default_stopwords() {
            let normalized = lowercase_unidecode_str(&word);
            if stopword_set.insert(normalized.clone()) {
                stopwords.push(normalized);
            }
        }
        info!(
            language = %config.language,
            stopwords = stopwords.len(),
            "normalizador criado"
        );

        Self {
            config,
            annotator,
            speller: None,
            stopwords,
            stopword_set,
            entity_accumulator: Vec::new(),
        }
    }

    /// Corretor usado pelo modo `spell` de `remove_numbers`.
    pub fn with_speller(mut self, speller: Arc<dyn SpellCorrector>) -> Self {
        self.speller = Some(speller);
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn stopwords(&self) -> &[String] {
        &self.stopwords
    }

    pub fn entity_accumulator(&self) -> &[String] {
        &self.entity_accumulator
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopword_set.contains(token)
    }

    /// Acrescenta stopwords como recebidas: sem normalização e sem remover repetidas.
    pub fn append_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word = word.into();
            self.stopword_set.insert(word.clone());
            self.stopwords.push(word);
        }
    }

    /// Troca a lista inteira pelas palavras dadas, descartando as padrão do
    /// idioma. Como em `append_stopwords`, as palavras são usadas como recebidas.
    pub fn replace_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.clear();
        self.stopword_set.clear();
        self.append_stopwords(words);
    }

    /// Move as entidades acumuladas para a lista de stopwords.
    ///
    /// Retorna quantas formas foram movidas.
    pub fn promote_collected_entities(&mut self) -> usize {
        let collected = std::mem::take(&mut self.entity_accumulator);
        let count = collected.len();
        self.append_stopwords(collected);
        count
    }

    /// Remove stopwords. Compara a forma exata do token: normalize o texto
    /// (ex: com `lowercase_unidecode`) antes, ou "Não" não casará com "nao".
    pub fn remove_stopwords(&self, doc: &Document) -> Document {
        match doc {
            Document::Text(text) => Document::Text(self.remove_stopwords_str(text)),
            Document::Batch(docs) => {
                Document::Batch(docs.iter().map(|text| self.remove_stopwords_str(text)).collect())
            }
            Document::Tokenized(docs) => Document::Tokenized(
                docs.iter()
                    .map(|tokens| tokens.iter().filter(|t| !self.is_stopword(t)).cloned().collect())
                    .collect(),
            ),
        }
    }

    fn remove_stopwords_str(&self, text: &str) -> String {
        text.split(' ')
            .filter(|token| !self.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `remove_numbers` com o idioma e o corretor deste normalizador.
    pub fn remove_numbers(&self, doc: &Document, mode: NumberMode) -> Document {
        self.remove_numbers_in(doc, mode, self.config.language)
    }

    fn remove_numbers_in(&self, doc: &Document, mode: NumberMode, language: Language) -> Document {
        match &self.speller {
            Some(speller) => transforms::remove_numbers(doc, mode, language, speller.as_ref()),
            None => {
                if mode == NumberMode::Spell {
                    debug!("nenhum corretor configurado; tokens com dígitos passam inalterados");
                }
                transforms::remove_numbers(doc, mode, language, &NoCorrection)
            }
        }
    }

    /// Estágio de anotação com filtros por POS e entidades.
    ///
    /// Para cada documento, na ordem:
    /// 1. mantém só tokens ASCII
    /// 2. remove advérbios, adjetivos e verbos conforme a configuração
    /// 3. remove dígitos/numerais e pontuação, se configurado
    /// 4. remove tokens de espaço
    /// 5. remove (ou acumula) entidades PERSON, DATE, MONEY...
    /// 6. verbo → lema sem "r" final; demais → lema (se `lemma`) ou forma minúscula
    ///
    /// Devolve exatamente um texto por documento, na ordem de entrada.
    pub fn linguistic_processing(&mut self, docs: &[String], n_process: usize, lemma: bool) -> Vec<String> {
        let annotated = self.annotator.annotate(docs, n_process);
        debug_assert_eq!(annotated.len(), docs.len());

        annotated
            .into_iter()
            .map(|records| self.filter_document(records, lemma))
            .collect()
    }

    /// `linguistic_processing` com `n_process` e `lemma` da configuração.
    pub fn process_configured(&mut self, docs: &[String]) -> Vec<String> {
        let (n_process, lemma) = (self.config.n_process, self.config.lemma);
        self.linguistic_processing(docs, n_process, lemma)
    }

    fn filter_document(&mut self, records: Vec<TokenRecord>, lemma: bool) -> String {
        let config = &self.config;
        let policy = config.entity_policy();
        let mut kept: Vec<String> = Vec::with_capacity(records.len());

        for record in records {
            if !record.is_ascii {
                continue;
            }
            let dropped_pos = (config.drop_adverbs && record.pos == PosTag::Adv)
                || (config.drop_adjectives && record.pos == PosTag::Adj)
                || (config.drop_verbs && record.pos == PosTag::Verb);
            if dropped_pos {
                continue;
            }
            if config.drop_numerals && (record.is_digit || record.like_num) {
                continue;
            }
            if config.drop_punctuation && record.is_punct {
                continue;
            }
            if record.is_space {
                continue;
            }
            if record.entity.is_some_and(|e| e.is_filtered()) {
                match policy {
                    EntityPolicy::Drop => continue,
                    EntityPolicy::Collect => self.entity_accumulator.push(record.lower.clone()),
                    EntityPolicy::Keep => {}
                }
            }

            let form = if record.pos == PosTag::Verb {
                remove_infinitive_str(&record.lemma).to_lowercase()
            } else if lemma {
                record.lemma.to_lowercase()
            } else {
                record.lower
            };
            kept.push(form);
        }

        kept.join(" ")
    }

    /// Aplica os passos na ordem dada.
    pub fn run(&self, doc: &Document, steps: &[Step]) -> Document {
        steps.iter().fold(doc.clone(), |doc, step| {
            debug!(step = step.name(), "aplicando passo");
            self.apply(&doc, step)
        })
    }

    /// Aplica os passos de `config.steps`.
    pub fn run_configured(&self, doc: &Document) -> Document {
        self.run(doc, &self.config.steps)
    }

    fn apply(&self, doc: &Document, step: &Step) -> Document {
        match step {
            Step::LowercaseUnidecode => transforms::lowercase_unidecode(doc),
            Step::RemoveUrls => transforms::remove_urls(doc),
            Step::RemoveTweetMarking => transforms::remove_tweet_marking(doc),
            Step::RemovePunctuation => transforms::remove_punctuation(doc),
            Step::RemoveRepetition => transforms::remove_repetition(doc),
            Step::RemoveStopwords => self.remove_stopwords(doc),
            Step::RemoveN { n } => transforms::remove_n(doc, *n),
            Step::RemoveNumbers { mode, language } => {
                self.remove_numbers_in(doc, *mode, language.unwrap_or(self.config.language))
            }
            Step::RemoveGerund => transforms::remove_gerund(doc),
            Step::RemoveInfinitive => transforms::remove_infinitive(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::models::{BundledStore, LexiconStore};
    use crate::spelling::FrequencyCorrector;
    use crate::tagger::LexiconAnnotator;

    fn normalizer(config: NormalizerConfig) -> TextNormalizer {
        TextNormalizer::new(config, &BundledStore).unwrap()
    }

    fn with_stopwords(words: &[&str]) -> TextNormalizer {
        let mut lexicon = Lexicon::empty(Language::En);
        lexicon.stopwords = words.iter().map(|w| w.to_string()).collect();
        TextNormalizer::with_annotator(NormalizerConfig::default(), Arc::new(LexiconAnnotator::new(lexicon)))
    }

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_remove_stopwords_scalar() {
        let n = with_stopwords(&["the", "a"]);
        assert_eq!(n.remove_stopwords(&"the cat sat".into()), Document::from("cat sat"));
    }

    #[test]
    fn test_remove_stopwords_batch_and_tokenized() {
        let n = with_stopwords(&["the", "a"]);
        assert_eq!(
            n.remove_stopwords(&vec!["a dog", "the end"].into()),
            Document::from(vec!["dog", "end"])
        );
        assert_eq!(
            n.remove_stopwords(&vec![vec!["a", "big", "dog"], vec!["the"]].into()),
            Document::from(vec![vec!["big", "dog"], vec![]])
        );
    }

    #[test]
    fn test_stopwords_are_normalized_and_deduplicated() {
        let n = normalizer(NormalizerConfig::for_language(Language::Pt));
        assert!(n.is_stopword("nao"));
        assert!(!n.is_stopword("não"));
        // "e" e "é" colapsam na mesma forma
        assert_eq!(n.stopwords().iter().filter(|w| w.as_str() == "e").count(), 1);
    }

    #[test]
    fn test_append_stopwords_keeps_duplicates() {
        let mut n = with_stopwords(&["the"]);
        n.append_stopwords(["rt", "rt", "Via"]);
        assert_eq!(n.stopwords(), &["the", "rt", "rt", "Via"]);
        assert!(n.is_stopword("Via"));
        assert_eq!(n.remove_stopwords(&"rt via".into()), Document::from("via"));
    }

    #[test]
    fn test_replace_stopwords_drops_defaults() {
        let mut n = normalizer(NormalizerConfig::default());
        assert!(n.is_stopword("the"));

        n.replace_stopwords(["rt", "via"]);
        assert_eq!(n.stopwords(), &["rt", "via"]);
        assert!(!n.is_stopword("the"));
        assert_eq!(
            n.remove_stopwords(&"rt the news via bbc".into()),
            Document::from("the news bbc")
        );
    }

    #[test]
    fn test_entities_are_dropped() {
        let mut n = normalizer(NormalizerConfig::default());
        let input = docs(&["John paid $ 50 on Monday in Paris", "the museum was quiet"]);
        let out = n.linguistic_processing(&input, 1, false);

        assert_eq!(out.len(), 2);
        for banned in ["john", "$", "50", "monday", "paris"] {
            assert!(!out[0].split(' ').any(|t| t == banned), "{} em {:?}", banned, out[0]);
        }
        assert_eq!(out[0], "pay on in");
        assert_eq!(out[1], "the museum was quiet");
    }

    #[test]
    fn test_entities_are_kept_when_disabled() {
        let config = NormalizerConfig {
            drop_entities: false,
            ..NormalizerConfig::default()
        };
        let mut n = normalizer(config);
        let out = n.linguistic_processing(&docs(&["John lives in Paris"]), 1, false);
        assert_eq!(out, vec!["john lives in paris".to_string()]);
    }

    #[test]
    fn test_collect_mode_accumulates_entities() {
        let config = NormalizerConfig {
            collect_entities: true,
            ..NormalizerConfig::default()
        };
        let mut n = normalizer(config);
        let out = n.linguistic_processing(&docs(&["John lives in Paris"]), 1, false);

        assert_eq!(out, vec!["john lives in paris".to_string()]);
        assert_eq!(n.entity_accumulator(), &["john", "paris"]);

        assert_eq!(n.promote_collected_entities(), 2);
        assert!(n.entity_accumulator().is_empty());
        assert_eq!(n.remove_stopwords(&out[0].as_str().into()), Document::from("lives"));
    }

    #[test]
    fn test_pos_filters() {
        let config = NormalizerConfig {
            language: Language::Pt,
            drop_adverbs: true,
            drop_adjectives: true,
            drop_verbs: true,
            ..NormalizerConfig::default()
        };
        let mut n = normalizer(config);
        let out = n.linguistic_processing(&docs(&["o gato bonito falou rapidamente"]), 1, false);
        assert_eq!(out, vec!["o gato".to_string()]);
    }

    #[test]
    fn test_non_ascii_tokens_are_dropped() {
        let mut n = normalizer(NormalizerConfig::for_language(Language::Pt));
        let out = n.linguistic_processing(&docs(&["a ação foi boa"]), 1, false);
        assert_eq!(out, vec!["a foi boa".to_string()]);
    }

    #[test]
    fn test_verbs_lose_infinitive_suffix() {
        let mut n = normalizer(NormalizerConfig::for_language(Language::Pt));
        let out = n.linguistic_processing(&docs(&["eles querem falar"]), 1, false);
        assert_eq!(out, vec!["eles querem fala".to_string()]);
    }

    #[test]
    fn test_lemma_option() {
        let mut n = normalizer(NormalizerConfig::default());
        let surface = n.linguistic_processing(&docs(&["the cats sleep"]), 1, false);
        let lemmas = n.linguistic_processing(&docs(&["the cats sleep"]), 1, true);
        assert_eq!(surface, vec!["the cats sleep".to_string()]);
        assert_eq!(lemmas, vec!["the cat sleep".to_string()]);
    }

    #[test]
    fn test_whitespace_and_optional_punctuation() {
        let config = NormalizerConfig {
            drop_punctuation: true,
            drop_numerals: true,
            drop_entities: false,
            ..NormalizerConfig::default()
        };
        let mut n = normalizer(config);
        let out = n.linguistic_processing(&docs(&["wow,\n\n ten 10 cats!"]), 1, false);
        assert_eq!(out, vec!["wow cats".to_string()]);
    }

    #[test]
    fn test_parallel_processing_preserves_order() {
        let mut n = normalizer(NormalizerConfig::default());
        let input: Vec<String> = (0..50).map(|i| format!("doc{} text", i)).collect();
        let out = n.linguistic_processing(&input, 0, false);
        assert_eq!(out.len(), input.len());
        for (i, text) in out.iter().enumerate() {
            assert_eq!(text, &format!("doc{} text", i));
        }
    }

    #[test]
    fn test_new_acquires_model_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LexiconStore::new(dir.path());
        let n = TextNormalizer::new(NormalizerConfig::for_language(Language::Es), &store).unwrap();
        assert!(store.is_available(Language::Es));
        assert!(n.is_stopword("tambien"));
    }

    #[test]
    fn test_remove_numbers_with_speller() {
        let mut speller = FrequencyCorrector::new();
        speller.add_word(Language::Pt, "teste", 3);
        let n = normalizer(NormalizerConfig::for_language(Language::Pt)).with_speller(Arc::new(speller));
        assert_eq!(n.remove_numbers(&"t3ste".into(), NumberMode::Spell), Document::from("teste"));

        let plain = normalizer(NormalizerConfig::for_language(Language::Pt));
        assert_eq!(plain.remove_numbers(&"t3ste".into(), NumberMode::Spell), Document::from("t3ste"));
    }

    #[test]
    fn test_run_steps() {
        let config = NormalizerConfig::from_json_str(
            r#"{
                "steps": [
                    { "op": "remove_urls" },
                    { "op": "remove_tweet_marking" },
                    { "op": "lowercase_unidecode" },
                    { "op": "remove_punctuation" },
                    { "op": "remove_repetition" },
                    { "op": "remove_stopwords" },
                    { "op": "remove_numbers", "mode": "filter" },
                    { "op": "remove_n", "n": 3 }
                ]
            }"#,
        )
        .unwrap();
        let n = normalizer(config);
        let doc = Document::from(vec![
            "@ana The GAME was amazing!!! kkkk http://t.co/x #win 2024",
            "ok",
        ]);
        assert_eq!(n.run_configured(&doc), Document::from(vec!["game amazing"]));
    }
}
