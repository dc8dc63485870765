//! # Léxicos por Idioma
//!
//! Um [`Lexicon`] reúne o conhecimento explícito usado pelo motor de anotação
//! embutido:
//!
//! - **Stopwords**: lista padrão do idioma.
//! - **Entradas**: palavras de classe fechada e verbos irregulares, com POS e lema.
//! - **Gazetteers**: nomes conhecidos de pessoas, lugares, nacionalidades,
//!   idiomas, meses e dias da semana, com o tipo de entidade.
//! - **Palavras-gatilho**: títulos ("presidente"), moedas, unidades e numerais
//!   por extenso, usados pelas regras de entidades numéricas.
//!
//! O léxico é serializável em JSON; é este o formato dos modelos gravados
//! pelo [`LexiconStore`](crate::models::LexiconStore).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::annotation::{EntityType, PosTag};
use crate::config::Language;

/// POS e lema de uma palavra conhecida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexEntry {
    pub pos: PosTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
}

/// Uma entidade conhecida, possivelmente com várias palavras ("são paulo").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub text: String,
    pub entity: EntityType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub language: Language,
    pub stopwords: Vec<String>,
    /// Forma minúscula → entrada.
    #[serde(default)]
    pub entries: HashMap<String, LexEntry>,
    #[serde(default)]
    pub gazetteer: Vec<GazetteerEntry>,
    /// Títulos que precedem nomes de pessoas.
    #[serde(default)]
    pub person_titles: Vec<String>,
    #[serde(default)]
    pub number_words: Vec<String>,
    #[serde(default)]
    pub ordinal_words: Vec<String>,
    /// Palavras que, após um número, indicam valor monetário ("reais").
    #[serde(default)]
    pub currency_words: Vec<String>,
    /// Palavras que, após um número, indicam porcentagem ("percent").
    #[serde(default)]
    pub percent_words: Vec<String>,
    /// Unidades de medida que, após um número, indicam quantidade.
    #[serde(default)]
    pub units: Vec<String>,
}

impl Lexicon {
    /// Léxico vazio, útil para testes e para montar léxicos próprios.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            stopwords: Vec::new(),
            entries: HashMap::new(),
            gazetteer: Vec::new(),
            person_titles: Vec::new(),
            number_words: Vec::new(),
            ordinal_words: Vec::new(),
            currency_words: Vec::new(),
            percent_words: Vec::new(),
            units: Vec::new(),
        }
    }

    /// Léxico embutido para o idioma.
    pub fn bundled(language: Language) -> Self {
        let data = match language {
            Language::En => &EN,
            Language::Pt => &PT,
            Language::Es => &ES,
        };
        data.build(language)
    }

    pub fn add_entry(&mut self, word: &str, pos: PosTag, lemma: Option<&str>) {
        self.entries.insert(
            word.to_lowercase(),
            LexEntry {
                pos,
                lemma: lemma.map(str::to_string),
            },
        );
    }

    pub fn add_entity(&mut self, text: &str, entity: EntityType) {
        self.gazetteer.push(GazetteerEntry {
            text: text.to_lowercase(),
            entity,
        });
    }

    pub fn lookup(&self, lower: &str) -> Option<&LexEntry> {
        self.entries.get(lower)
    }
}

/// Stopwords de um idioma, sem normalização.
pub fn bundled_stopwords(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => EN.stopwords,
        Language::Pt => PT.stopwords,
        Language::Es => ES.stopwords,
    }
}

/// Tabelas estáticas de um idioma.
struct LexiconData {
    stopwords: &'static [&'static str],
    closed_class: &'static [(PosTag, &'static [&'static str])],
    /// (forma, lema)
    verbs: &'static [(&'static str, &'static str)],
    adverbs: &'static [&'static str],
    adjectives: &'static [&'static str],
    entities: &'static [(EntityType, &'static [&'static str])],
    person_titles: &'static [&'static str],
    number_words: &'static [&'static str],
    ordinal_words: &'static [&'static str],
    currency_words: &'static [&'static str],
    percent_words: &'static [&'static str],
    units: &'static [&'static str],
}

impl LexiconData {
    fn build(&self, language: Language) -> Lexicon {
        let mut lexicon = Lexicon::empty(language);
        lexicon.stopwords = to_strings(self.stopwords);

        // Classes fechadas e verbos sobrescrevem numerais homógrafos ("um", "uma")
        for word in self.number_words {
            lexicon.add_entry(word, PosTag::Num, None);
        }
        for word in self.ordinal_words {
            lexicon.add_entry(word, PosTag::Adj, None);
        }
        for (pos, words) in self.closed_class {
            for word in *words {
                lexicon.add_entry(word, *pos, None);
            }
        }
        for (form, lemma) in self.verbs {
            lexicon.add_entry(form, PosTag::Verb, Some(*lemma));
        }
        for word in self.adverbs {
            lexicon.add_entry(word, PosTag::Adv, None);
        }
        for word in self.adjectives {
            lexicon.add_entry(word, PosTag::Adj, None);
        }
        for (entity, names) in self.entities {
            for name in *names {
                lexicon.add_entity(name, *entity);
            }
        }

        lexicon.person_titles = to_strings(self.person_titles);
        lexicon.number_words = to_strings(self.number_words);
        lexicon.ordinal_words = to_strings(self.ordinal_words);
        lexicon.currency_words = to_strings(self.currency_words);
        lexicon.percent_words = to_strings(self.percent_words);
        lexicon.units = to_strings(self.units);
        lexicon
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Inglês
// ---------------------------------------------------------------------------

static EN: LexiconData = LexiconData {
    stopwords: &[
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
        "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into",
        "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor",
        "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "such",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
        "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
        "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
    ],
    closed_class: &[
        (PosTag::Det, &["the", "a", "an", "this", "that", "these", "those", "some", "any", "each", "every", "no"]),
        (PosTag::Pron, &["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their", "mine", "yours", "who", "what"]),
        (PosTag::Adp, &["in", "on", "at", "by", "for", "with", "about", "from", "to", "of", "into", "over", "under", "after", "before", "between", "during", "through"]),
        (PosTag::Cconj, &["and", "or", "but", "nor", "yet"]),
        (PosTag::Sconj, &["because", "if", "while", "although", "since", "unless", "whether"]),
        (PosTag::Aux, &["is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has", "had", "will", "would", "can", "could", "should", "may", "might", "must"]),
        (PosTag::Part, &["not", "n't", "'s"]),
        (PosTag::Intj, &["oh", "wow", "hey", "lol", "omg", "yeah", "ok"]),
    ],
    verbs: &[
        ("went", "go"), ("gone", "go"), ("goes", "go"), ("going", "go"), ("go", "go"),
        ("said", "say"), ("says", "say"), ("say", "say"),
        ("made", "make"), ("makes", "make"), ("make", "make"),
        ("took", "take"), ("taken", "take"), ("take", "take"),
        ("came", "come"), ("comes", "come"), ("come", "come"),
        ("saw", "see"), ("seen", "see"), ("see", "see"),
        ("knew", "know"), ("known", "know"), ("know", "know"),
        ("got", "get"), ("gets", "get"), ("get", "get"),
        ("gave", "give"), ("given", "give"), ("give", "give"),
        ("found", "find"), ("find", "find"),
        ("thought", "think"), ("think", "think"),
        ("told", "tell"), ("tell", "tell"),
        ("became", "become"), ("become", "become"),
        ("left", "leave"), ("leave", "leave"),
        ("felt", "feel"), ("feel", "feel"),
        ("brought", "bring"), ("bring", "bring"),
        ("began", "begin"), ("begun", "begin"), ("begin", "begin"),
        ("ran", "run"), ("run", "run"),
        ("wrote", "write"), ("written", "write"), ("write", "write"),
        ("sat", "sit"), ("sit", "sit"),
        ("won", "win"), ("win", "win"),
        ("lost", "lose"), ("lose", "lose"),
        ("paid", "pay"), ("pay", "pay"),
        ("met", "meet"), ("meet", "meet"),
        ("bought", "buy"), ("buy", "buy"),
        ("love", "love"), ("like", "like"), ("want", "want"), ("need", "need"),
    ],
    adverbs: &[
        "very", "really", "always", "never", "often", "sometimes", "here", "there", "now",
        "then", "today", "too", "also", "just", "still", "already", "soon", "again", "well",
        "quite", "almost",
    ],
    adjectives: &[
        "good", "bad", "new", "old", "great", "big", "small", "long", "short", "high", "low",
        "happy", "sad", "best", "worst", "better", "worse", "nice", "beautiful", "awesome",
        "terrible", "amazing", "important", "large", "young",
    ],
    entities: &[
        (EntityType::Date, &[
            "january", "february", "march", "april", "june", "july", "august",
            "september", "october", "november", "december", "monday", "tuesday", "wednesday",
            "thursday", "friday", "saturday", "sunday", "yesterday", "tomorrow", "today",
            "last year", "next year", "last week", "next week",
        ]),
        (EntityType::Gpe, &[
            "brazil", "united states", "usa", "u.s.", "america", "canada", "mexico", "france",
            "germany", "spain", "portugal", "italy", "china", "japan", "india", "russia",
            "argentina", "england", "london", "paris", "new york", "california", "texas",
            "washington", "rio de janeiro", "sao paulo", "são paulo", "tokyo", "madrid", "lisbon",
        ]),
        (EntityType::Norp, &[
            "american", "americans", "brazilian", "brazilians", "british", "french", "german",
            "spanish", "portuguese", "mexican", "chinese", "japanese", "russian", "democrats",
            "republicans", "christian", "muslim", "jewish",
        ]),
        (EntityType::Language, &["english", "portuguese language", "spanish language", "mandarin", "latin"]),
        (EntityType::Person, &[
            "john", "mary", "james", "robert", "michael", "william", "david", "elizabeth",
            "donald trump", "trump", "joe biden", "biden", "barack obama", "obama", "elon musk",
            "musk", "taylor swift", "lula", "bolsonaro",
        ]),
        (EntityType::Org, &["google", "apple", "microsoft", "amazon", "twitter", "facebook", "nasa", "fbi", "united nations"]),
    ],
    person_titles: &["mr.", "mrs.", "ms.", "dr.", "president", "senator", "governor", "mayor", "minister", "judge", "sir", "pope", "king", "queen"],
    number_words: &[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "twenty", "thirty", "hundred", "thousand", "million", "billion",
    ],
    ordinal_words: &["first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth"],
    currency_words: &["dollar", "dollars", "euro", "euros", "pound", "pounds", "cents", "bucks", "reais"],
    percent_words: &["percent", "%", "per cent"],
    units: &["kg", "g", "km", "m", "cm", "mm", "mile", "miles", "lb", "lbs", "pounds", "feet", "foot", "inches", "liters", "gallons", "tons", "hours", "minutes"],
};

// ---------------------------------------------------------------------------
// Português
// ---------------------------------------------------------------------------

static PT: LexiconData = LexiconData {
    stopwords: &[
        "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às",
        "até", "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois",
        "do", "dos", "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram",
        "essa", "essas", "esse", "esses", "esta", "está", "estão", "estas", "este", "estes",
        "eu", "foi", "foram", "há", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me",
        "mesmo", "meu", "meus", "minha", "minhas", "muito", "na", "não", "nas", "nem", "no",
        "nos", "nós", "nossa", "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou",
        "para", "pela", "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem",
        "se", "seja", "sem", "ser", "seu", "seus", "só", "sua", "suas", "também", "te", "tem",
        "têm", "teu", "tua", "um", "uma", "umas", "uns", "você", "vocês", "vos",
    ],
    closed_class: &[
        (PosTag::Det, &["o", "a", "os", "as", "um", "uma", "uns", "umas", "este", "esta", "esse", "essa", "aquele", "aquela", "meu", "minha", "seu", "sua", "nosso", "nossa"]),
        (PosTag::Pron, &["eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "você", "vocês", "me", "te", "se", "lhe", "nos", "isso", "isto", "aquilo", "quem"]),
        (PosTag::Adp, &["de", "em", "para", "por", "com", "sem", "sob", "sobre", "entre", "até", "desde", "da", "do", "das", "dos", "na", "no", "nas", "nos", "pela", "pelo", "ao", "aos", "à", "às", "num", "numa"]),
        (PosTag::Cconj, &["e", "ou", "mas", "nem", "porém", "contudo"]),
        (PosTag::Sconj, &["que", "porque", "se", "quando", "embora", "enquanto", "como"]),
        (PosTag::Aux, &["é", "são", "era", "eram", "foi", "foram", "ser", "estar", "está", "estão", "estava", "tem", "têm", "tinha", "ter", "há", "vai", "vou", "vão"]),
        (PosTag::Intj, &["kkk", "rs", "haha", "oi", "olá", "nossa", "eita", "vixe", "opa"]),
    ],
    verbs: &[
        ("falar", "falar"), ("falou", "falar"), ("falando", "falar"), ("fala", "falar"),
        ("fazer", "fazer"), ("fez", "fazer"), ("faz", "fazer"), ("fazendo", "fazer"), ("feito", "fazer"),
        ("dizer", "dizer"), ("disse", "dizer"), ("diz", "dizer"), ("dizendo", "dizer"),
        ("ir", "ir"), ("fui", "ir"), ("indo", "ir"),
        ("ver", "ver"), ("viu", "ver"), ("vi", "ver"), ("vendo", "ver"),
        ("dar", "dar"), ("deu", "dar"), ("dá", "dar"),
        ("saber", "saber"), ("sabe", "saber"), ("sei", "saber"),
        ("querer", "querer"), ("quer", "querer"), ("quero", "querer"),
        ("poder", "poder"), ("pode", "poder"), ("posso", "poder"),
        ("ganhar", "ganhar"), ("ganhou", "ganhar"),
        ("perder", "perder"), ("perdeu", "perder"),
        ("chegar", "chegar"), ("chegou", "chegar"),
        ("votar", "votar"), ("votou", "votar"),
        ("gostar", "gostar"), ("gosto", "gostar"), ("amo", "amar"), ("amar", "amar"),
    ],
    adverbs: &[
        "não", "sim", "muito", "pouco", "bem", "mal", "sempre", "nunca", "hoje", "ontem",
        "amanhã", "aqui", "ali", "lá", "agora", "já", "ainda", "também", "só", "talvez",
        "depois", "antes", "logo",
    ],
    adjectives: &[
        "bom", "boa", "mau", "má", "novo", "nova", "velho", "velha", "grande", "pequeno",
        "pequena", "melhor", "pior", "bonito", "bonita", "feliz", "triste", "lindo", "linda",
        "ótimo", "ótima", "péssimo", "importante", "alto", "baixo",
    ],
    entities: &[
        (EntityType::Date, &[
            "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
            "setembro", "outubro", "novembro", "dezembro", "segunda-feira", "terça-feira",
            "quarta-feira", "quinta-feira", "sexta-feira", "sábado", "domingo", "ontem",
            "amanhã", "hoje", "ano passado", "semana passada", "próxima semana",
        ]),
        (EntityType::Gpe, &[
            "brasil", "portugal", "argentina", "estados unidos", "eua", "frança", "alemanha",
            "espanha", "itália", "china", "japão", "rússia", "méxico", "são paulo",
            "rio de janeiro", "minas gerais", "bahia", "brasília", "belo horizonte", "salvador",
            "recife", "fortaleza", "curitiba", "porto alegre", "manaus", "lisboa", "paraná",
        ]),
        (EntityType::Norp, &[
            "brasileiro", "brasileira", "brasileiros", "brasileiras", "português", "portuguesa",
            "americano", "americana", "argentino", "argentina", "petista", "petistas",
            "bolsonarista", "bolsonaristas", "católico", "evangélico", "evangélicos",
        ]),
        (EntityType::Language, &["inglês", "espanhol", "francês", "alemão", "italiano", "libras"]),
        (EntityType::Person, &[
            "lula", "bolsonaro", "dilma", "neymar", "pelé", "anitta", "haddad",
            "alckmin", "marina silva", "joão", "maria", "josé", "ana", "pedro", "paulo",
            "carlos", "lucas",
        ]),
        (EntityType::Org, &["petrobras", "stf", "senado", "câmara", "globo", "flamengo", "corinthians", "palmeiras", "pt", "psdb", "pl"]),
    ],
    person_titles: &[
        "presidente", "ex-presidente", "senador", "senadora", "deputado", "deputada",
        "ministro", "ministra", "governador", "governadora", "prefeito", "prefeita", "dr.",
        "dra.", "sr.", "sra.", "prof.", "profa.", "vereador", "vereadora", "general",
    ],
    number_words: &[
        "zero", "um", "uma", "dois", "duas", "três", "quatro", "cinco", "seis", "sete",
        "oito", "nove", "dez", "vinte", "trinta", "cem", "cento", "mil", "milhão", "milhões",
        "bilhão", "bilhões",
    ],
    ordinal_words: &["primeiro", "primeira", "segundo", "segunda", "terceiro", "terceira", "quarto", "quinto", "último", "última"],
    currency_words: &["real", "reais", "dólar", "dólares", "euro", "euros", "centavos"],
    percent_words: &["%", "porcento", "por cento"],
    units: &["kg", "g", "km", "m", "cm", "mm", "metros", "quilos", "litros", "toneladas", "horas", "minutos"],
};

// ---------------------------------------------------------------------------
// Espanhol
// ---------------------------------------------------------------------------

static ES: LexiconData = LexiconData {
    stopwords: &[
        "a", "al", "algo", "algunos", "ante", "antes", "como", "con", "contra", "cual",
        "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "él", "ella", "ellas",
        "ellos", "en", "entre", "era", "es", "esa", "esas", "ese", "eso", "esos", "esta",
        "está", "están", "estas", "este", "esto", "estos", "fue", "fueron", "ha", "han",
        "hasta", "hay", "la", "las", "le", "les", "lo", "los", "más", "me", "mi", "mis",
        "mucho", "muy", "nada", "ni", "no", "nos", "nosotros", "o", "otro", "para", "pero",
        "poco", "por", "porque", "que", "qué", "quien", "se", "sea", "ser", "si", "sí", "sin",
        "sobre", "son", "su", "sus", "también", "te", "tiene", "todo", "tu", "tus", "un",
        "una", "uno", "unos", "usted", "ustedes", "y", "ya", "yo",
    ],
    closed_class: &[
        (PosTag::Det, &["el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "ese", "esa", "mi", "tu", "su", "nuestro", "nuestra"]),
        (PosTag::Pron, &["yo", "tú", "él", "ella", "nosotros", "vosotros", "ellos", "ellas", "usted", "ustedes", "me", "te", "se", "le", "les", "lo", "eso", "esto", "quien"]),
        (PosTag::Adp, &["a", "al", "ante", "con", "contra", "de", "del", "desde", "en", "entre", "hacia", "hasta", "para", "por", "sin", "sobre", "tras"]),
        (PosTag::Cconj, &["y", "e", "o", "u", "pero", "ni", "sino"]),
        (PosTag::Sconj, &["que", "porque", "si", "cuando", "aunque", "mientras", "como"]),
        (PosTag::Aux, &["es", "son", "era", "eran", "fue", "fueron", "ser", "estar", "está", "están", "estaba", "ha", "han", "había", "haber", "hay", "va", "voy", "van"]),
        (PosTag::Intj, &["jaja", "jajaja", "hola", "ay", "oye", "vale"]),
    ],
    verbs: &[
        ("hablar", "hablar"), ("habló", "hablar"), ("hablando", "hablar"), ("habla", "hablar"),
        ("hacer", "hacer"), ("hizo", "hacer"), ("hace", "hacer"), ("haciendo", "hacer"),
        ("decir", "decir"), ("dijo", "decir"), ("dice", "decir"),
        ("ir", "ir"), ("fui", "ir"),
        ("ver", "ver"), ("vio", "ver"), ("viendo", "ver"),
        ("dar", "dar"), ("dio", "dar"),
        ("saber", "saber"), ("sabe", "saber"), ("sé", "saber"),
        ("querer", "querer"), ("quiere", "querer"), ("quiero", "querer"),
        ("poder", "poder"), ("puede", "poder"), ("puedo", "poder"),
        ("ganar", "ganar"), ("ganó", "ganar"),
        ("perder", "perder"), ("perdió", "perder"),
        ("llegar", "llegar"), ("llegó", "llegar"),
        ("gustar", "gustar"), ("gusta", "gustar"), ("amo", "amar"), ("amar", "amar"),
    ],
    adverbs: &[
        "no", "sí", "muy", "mucho", "poco", "bien", "mal", "siempre", "nunca", "hoy", "ayer",
        "mañana", "aquí", "allí", "ahora", "ya", "todavía", "también", "solo", "quizás",
        "después", "antes", "luego",
    ],
    adjectives: &[
        "bueno", "buena", "malo", "mala", "nuevo", "nueva", "viejo", "vieja", "grande",
        "pequeño", "pequeña", "mejor", "peor", "bonito", "bonita", "feliz", "triste",
        "importante", "alto", "bajo", "hermoso", "hermosa",
    ],
    entities: &[
        (EntityType::Date, &[
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
            "septiembre", "octubre", "noviembre", "diciembre", "lunes", "martes", "miércoles",
            "jueves", "viernes", "sábado", "domingo", "ayer", "mañana", "hoy", "año pasado",
            "semana pasada",
        ]),
        (EntityType::Gpe, &[
            "españa", "méxico", "argentina", "colombia", "chile", "perú", "venezuela", "cuba",
            "brasil", "estados unidos", "eeuu", "francia", "alemania", "italia", "china",
            "madrid", "barcelona", "buenos aires", "bogotá", "lima", "santiago", "sevilla",
            "valencia", "cataluña", "andalucía",
        ]),
        (EntityType::Norp, &[
            "español", "española", "españoles", "mexicano", "mexicana", "mexicanos",
            "argentino", "argentina", "colombiano", "colombiana", "chileno", "chilena",
            "peruano", "católico", "católicos", "latinos",
        ]),
        (EntityType::Language, &["inglés", "castellano", "catalán", "francés", "alemán", "portugués", "euskera"]),
        (EntityType::Person, &[
            "messi", "shakira", "pedro sánchez", "sánchez", "milei", "maradona", "juan",
            "maría", "josé", "carlos", "ana", "luis", "pedro",
        ]),
        (EntityType::Org, &["real madrid", "barça", "psoe", "pp", "vox", "telefónica", "onu"]),
    ],
    person_titles: &[
        "presidente", "presidenta", "senador", "senadora", "diputado", "diputada", "ministro",
        "ministra", "gobernador", "gobernadora", "alcalde", "alcaldesa", "dr.", "dra.", "sr.",
        "sra.", "don", "doña", "rey", "reina",
    ],
    number_words: &[
        "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
        "diez", "veinte", "treinta", "cien", "ciento", "mil", "millón", "millones",
    ],
    ordinal_words: &["primero", "primera", "segundo", "segunda", "tercero", "tercera", "cuarto", "quinto", "último", "última"],
    currency_words: &["peso", "pesos", "dólar", "dólares", "euro", "euros", "céntimos"],
    percent_words: &["%", "por ciento"],
    units: &["kg", "g", "km", "m", "cm", "mm", "metros", "kilos", "litros", "toneladas", "horas", "minutos"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_lexicons_are_populated() {
        for language in Language::ALL {
            let lexicon = Lexicon::bundled(language);
            assert_eq!(lexicon.language, language);
            assert!(lexicon.stopwords.len() > 50);
            assert!(!lexicon.gazetteer.is_empty());
            assert!(!lexicon.person_titles.is_empty());
        }
    }

    #[test]
    fn test_verb_lemmas() {
        let lexicon = Lexicon::bundled(Language::En);
        let entry = lexicon.lookup("went").unwrap();
        assert_eq!(entry.pos, PosTag::Verb);
        assert_eq!(entry.lemma.as_deref(), Some("go"));
    }

    #[test]
    fn test_gazetteer_is_lowercase() {
        let lexicon = Lexicon::bundled(Language::Pt);
        assert!(lexicon
            .gazetteer
            .iter()
            .any(|g| g.text == "são paulo" && g.entity == EntityType::Gpe));
        assert!(lexicon.gazetteer.iter().all(|g| g.text == g.text.to_lowercase()));
    }

    #[test]
    fn test_json_round_trip() {
        let lexicon = Lexicon::bundled(Language::Es);
        let json = serde_json::to_string(&lexicon).unwrap();
        let back: Lexicon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lexicon);
    }
}
