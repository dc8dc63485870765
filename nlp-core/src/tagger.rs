//! # Motor de Anotação Embutido
//!
//! Implementação leve do contrato [`Annotator`] baseada em léxico e regras,
//! sem modelo estatístico:
//!
//! 1. **Tokenização** ([`tokenizer`](crate::tokenizer)).
//! 2. **POS**: consulta ao léxico; se a palavra é desconhecida, regras de
//!    sufixo do idioma ("-mente" → ADV, "-ndo" → VERB, "-ly" → ADV...).
//! 3. **Lema**: lema do léxico ou regras simples de flexão.
//! 4. **Entidades**, em ordem de prioridade (um token já marcado não é remarcado):
//!    - gazetteers de n-gramas ("são paulo" → GPE)
//!    - títulos: "Presidente X" → X é PERSON
//!    - padrões numéricos: MONEY, PERCENT, QUANTITY, ORDINAL, DATE, CARDINAL
//!
//! Lotes são processados em paralelo com `rayon` quando `n_process != 1`:
//! `0` usa o pool global; `k` usa um pool dedicado de `min(k, núcleos)`
//! workers, guardado e reaproveitado nas chamadas seguintes. A coleta de um
//! iterador paralelo indexado preserva a ordem dos documentos.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use rayon::prelude::*;
use rayon::ThreadPool;
use regex::Regex;
use tracing::{debug, warn};

use crate::annotation::{is_punctuation, looks_numeric, Annotator, EntityType, PosTag, TokenRecord};
use crate::config::Language;
use crate::lexicon::Lexicon;
use crate::tokenizer::{tokenize, Token};

static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(st|nd|rd|th|º|ª|o|a)$").expect("regex de ordinal"));
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(19|20)\d{2}$").expect("regex de ano"));

const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥"];

/// Motor de anotação baseado em um [`Lexicon`].
pub struct LexiconAnnotator {
    lexicon: Lexicon,
    /// Gazetteers já tokenizados, do mais longo para o mais curto.
    gazetteer: Vec<(Vec<String>, EntityType)>,
    /// Pools dedicados, um por número de workers, reaproveitados entre lotes.
    pools: Mutex<HashMap<usize, Arc<ThreadPool>>>,
}

impl LexiconAnnotator {
    pub fn new(lexicon: Lexicon) -> Self {
        let mut gazetteer: Vec<(Vec<String>, EntityType)> = lexicon
            .gazetteer
            .iter()
            .map(|entry| {
                let parts: Vec<String> = tokenize(&entry.text)
                    .into_iter()
                    .filter(|t| !t.is_space())
                    .map(|t| t.text.to_lowercase())
                    .collect();
                (parts, entry.entity)
            })
            .filter(|(parts, _)| !parts.is_empty())
            .collect();
        // sort estável: entre n-gramas de mesmo tamanho, vale a ordem do léxico
        gazetteer.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            lexicon,
            gazetteer,
            pools: Mutex::new(HashMap::new()),
        }
    }

    pub fn bundled(language: Language) -> Self {
        Self::new(Lexicon::bundled(language))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn language(&self) -> Language {
        self.lexicon.language
    }

    /// Anota um único documento.
    pub fn annotate_doc(&self, text: &str) -> Vec<TokenRecord> {
        let tokens = tokenize(text);
        let lowers: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let entities = self.tag_entities(&tokens, &lowers);

        let mut sentence_start = true;
        tokens
            .iter()
            .zip(&lowers)
            .zip(entities)
            .map(|((token, lower), entity)| {
                let pos = self.guess_pos(&token.text, lower, sentence_start);
                let lemma = self.lemmatize(&token.text, lower, pos);
                let mut record = TokenRecord::new(&token.text, &lemma, pos);
                record.like_num |= self.lexicon.number_words.contains(lower);
                record.entity = entity;

                if !record.is_space {
                    sentence_start = matches!(token.text.as_str(), "." | "!" | "?" | "…");
                }
                record
            })
            .collect()
    }

    fn guess_pos(&self, text: &str, lower: &str, sentence_start: bool) -> PosTag {
        if text.chars().all(char::is_whitespace) {
            return PosTag::Space;
        }
        if is_punctuation(text) {
            return PosTag::Punct;
        }
        if looks_numeric(text) {
            return PosTag::Num;
        }
        if let Some(entry) = self.lexicon.lookup(lower) {
            return entry.pos;
        }
        if !text.chars().any(char::is_alphanumeric) {
            return PosTag::Sym;
        }
        let capitalized = text.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return PosTag::Propn;
        }
        suffix_pos(self.lexicon.language, lower)
    }

    fn lemmatize(&self, text: &str, lower: &str, pos: PosTag) -> String {
        if let Some(lemma) = self.lexicon.lookup(lower).and_then(|e| e.lemma.as_ref()) {
            return lemma.clone();
        }
        match pos {
            PosTag::Propn => text.to_string(),
            PosTag::Verb => verb_lemma(self.lexicon.language, lower),
            PosTag::Noun => noun_lemma(self.lexicon.language, lower),
            _ => lower.to_string(),
        }
    }

    /// Aplica as regras de entidades à sequência de tokens.
    ///
    /// Retorna, para cada token, o tipo de entidade (se houver).
    fn tag_entities(&self, tokens: &[Token], lowers: &[String]) -> Vec<Option<EntityType>> {
        let n = tokens.len();
        let mut result: Vec<Option<EntityType>> = vec![None; n];
        let is_num = |i: usize| looks_numeric(&tokens[i].text) || self.lexicon.number_words.contains(&lowers[i]);

        // 1. Gazetteers (n-gramas, mais longo primeiro)
        let mut i = 0;
        while i < n {
            let matched = self.gazetteer.iter().find(|(parts, _)| {
                i + parts.len() <= n && parts.iter().enumerate().all(|(j, part)| lowers[i + j] == *part)
            });
            match matched {
                Some((parts, entity)) => {
                    for slot in &mut result[i..i + parts.len()] {
                        *slot = Some(*entity);
                    }
                    i += parts.len();
                }
                None => i += 1,
            }
        }

        // 2. Título: "Presidente X Y" → X e Y são PERSON
        for i in 0..n.saturating_sub(1) {
            if !self.lexicon.person_titles.contains(&lowers[i]) {
                continue;
            }
            for j in i + 1..n {
                let capitalized = tokens[j].text.chars().next().is_some_and(char::is_uppercase);
                if !capitalized || result[j].is_some_and(|e| e != EntityType::Person) {
                    break;
                }
                result[j] = Some(EntityType::Person);
            }
        }

        // 3. Valores monetários: "R$ 10", "$5", "10 reais"
        for i in 0..n {
            if result[i].is_some() {
                continue;
            }
            let symbol_len = if lowers[i] == "r" && lowers.get(i + 1).is_some_and(|t| t == "$") {
                2
            } else if CURRENCY_SYMBOLS.contains(&lowers[i].as_str()) {
                1
            } else {
                0
            };
            if symbol_len > 0 && i + symbol_len < n && is_num(i + symbol_len) {
                for slot in &mut result[i..=i + symbol_len] {
                    *slot = Some(EntityType::Money);
                }
            } else if is_num(i) && lowers.get(i + 1).is_some_and(|t| self.lexicon.currency_words.contains(t)) {
                result[i] = Some(EntityType::Money);
                result[i + 1] = Some(EntityType::Money);
            }
        }

        // 4. Número seguido de porcentagem ou unidade
        for i in 0..n.saturating_sub(1) {
            if result[i].is_some() || !is_num(i) {
                continue;
            }
            let next = &lowers[i + 1];
            let two_words = lowers.get(i + 2).map(|t| format!("{} {}", next, t));
            let entity = if self.lexicon.percent_words.contains(next) {
                Some((EntityType::Percent, 1))
            } else if two_words.as_ref().is_some_and(|w| self.lexicon.percent_words.contains(w)) {
                Some((EntityType::Percent, 2))
            } else if self.lexicon.units.contains(next) {
                Some((EntityType::Quantity, 1))
            } else {
                None
            };
            if let Some((entity, len)) = entity {
                for slot in &mut result[i..=i + len] {
                    *slot = Some(entity);
                }
            }
        }

        // 5. Datas numéricas ("12/05/2024") e anos
        for i in 0..n {
            if result[i].is_some() || !tokens[i].text.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }
            let mut end = i;
            while end + 2 < n
                && lowers[end + 1] == "/"
                && tokens[end + 2].text.bytes().all(|b| b.is_ascii_digit())
                && end + 2 - i <= 4
            {
                end += 2;
            }
            if end > i || YEAR_RE.is_match(&tokens[i].text) {
                for slot in &mut result[i..=end] {
                    *slot = Some(EntityType::Date);
                }
            }
        }

        // 6. Ordinais e cardinais restantes
        for i in 0..n {
            if result[i].is_some() {
                continue;
            }
            if ORDINAL_RE.is_match(&lowers[i]) || self.lexicon.ordinal_words.contains(&lowers[i]) {
                result[i] = Some(EntityType::Ordinal);
            } else if is_num(i) {
                result[i] = Some(EntityType::Cardinal);
            }
        }

        result
    }
}

impl LexiconAnnotator {
    /// Pool com `workers` threads, criado na primeira vez e reaproveitado depois.
    fn pool(&self, workers: usize) -> Option<Arc<ThreadPool>> {
        let mut pools = self.pools.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(pool) = pools.get(&workers) {
            return Some(Arc::clone(pool));
        }
        match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => {
                let pool = Arc::new(pool);
                pools.insert(workers, Arc::clone(&pool));
                Some(pool)
            }
            Err(err) => {
                warn!(error = %err, workers, "falha ao criar pool de anotação; processando sequencialmente");
                None
            }
        }
    }

    #[cfg(test)]
    fn cached_pools(&self) -> usize {
        self.pools.lock().map(|pools| pools.len()).unwrap_or(0)
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, docs: &[String], n_process: usize) -> Vec<Vec<TokenRecord>> {
        debug!(docs = docs.len(), n_process, language = %self.language(), "anotando lote");

        if n_process == 1 || docs.len() < 2 {
            return docs.iter().map(|doc| self.annotate_doc(doc)).collect();
        }
        // 0: pool global do rayon, um worker por núcleo
        if n_process == 0 {
            return docs.par_iter().map(|doc| self.annotate_doc(doc)).collect();
        }

        let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
        let workers = n_process.min(cores);
        if workers == 1 {
            return docs.iter().map(|doc| self.annotate_doc(doc)).collect();
        }
        match self.pool(workers) {
            Some(pool) => pool.install(|| docs.par_iter().map(|doc| self.annotate_doc(doc)).collect()),
            None => docs.iter().map(|doc| self.annotate_doc(doc)).collect(),
        }
    }

    fn default_stopwords(&self) -> Vec<String> {
        self.lexicon.stopwords.clone()
    }
}

/// POS de palavras desconhecidas pelo sufixo.
fn suffix_pos(language: Language, lower: &str) -> PosTag {
    let long = lower.chars().count() > 4;
    let ends = |suffixes: &[&str]| suffixes.iter().any(|s| lower.ends_with(s));

    match language {
        Language::En => {
            if long && ends(&["ly"]) {
                PosTag::Adv
            } else if long && ends(&["ing", "ed", "ize", "ise"]) {
                PosTag::Verb
            } else if long && ends(&["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"]) {
                PosTag::Adj
            } else {
                PosTag::Noun
            }
        }
        Language::Pt => {
            if long && ends(&["mente"]) {
                PosTag::Adv
            } else if long && ends(&["ndo", "ar", "er", "ir", "ou", "aram", "eram", "iram", "ava", "avam"]) {
                PosTag::Verb
            } else if long && ends(&["oso", "osa", "vel", "ivo", "iva", "ico", "ica", "ento", "enta"]) {
                PosTag::Adj
            } else {
                PosTag::Noun
            }
        }
        Language::Es => {
            if long && ends(&["mente"]) {
                PosTag::Adv
            } else if long && ends(&["ando", "iendo", "ar", "er", "ir", "aron", "ieron", "aba", "aban"]) {
                PosTag::Verb
            } else if long && ends(&["oso", "osa", "ble", "ivo", "iva", "ico", "ica"]) {
                PosTag::Adj
            } else {
                PosTag::Noun
            }
        }
    }
}

fn verb_lemma(language: Language, lower: &str) -> String {
    let rules: &[(&str, &str)] = match language {
        Language::En => &[("ies", "y"), ("ied", "y"), ("ing", ""), ("ed", ""), ("es", ""), ("s", "")],
        Language::Pt => &[
            ("ando", "ar"), ("endo", "er"), ("indo", "ir"), ("aram", "ar"), ("eram", "er"),
            ("iram", "ir"), ("avam", "ar"), ("ava", "ar"), ("ou", "ar"), ("eu", "er"), ("iu", "ir"),
        ],
        Language::Es => &[
            ("ando", "ar"), ("iendo", "er"), ("aron", "ar"), ("ieron", "er"), ("aban", "ar"),
            ("aba", "ar"), ("ó", "ar"), ("ió", "er"),
        ],
    };
    apply_suffix_rules(lower, rules)
}

fn noun_lemma(language: Language, lower: &str) -> String {
    let rules: &[(&str, &str)] = match language {
        Language::En => &[("ies", "y"), ("sses", "ss"), ("ss", "ss"), ("s", "")],
        Language::Pt => &[("ões", "ão"), ("ães", "ão"), ("is", "l"), ("as", "a"), ("os", "o"), ("es", "e")],
        Language::Es => &[("ces", "z"), ("as", "a"), ("os", "o"), ("es", "e")],
    };
    apply_suffix_rules(lower, rules)
}

/// Troca o primeiro sufixo aplicável, preservando ao menos três caracteres de radical.
fn apply_suffix_rules(lower: &str, rules: &[(&str, &str)]) -> String {
    for (suffix, replacement) in rules {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.chars().count() >= 3 {
                return format!("{}{}", stem, replacement);
            }
        }
    }
    lower.to_string()
}
