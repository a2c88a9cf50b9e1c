//! Word lists backing the rule-based French analyzer.
//!
//! All entries are lowercase with `'` as the apostrophe.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles, elided forms
        "le", "la", "les", "l'", "un", "une", "des", "du", "de", "d'", "au", "aux",
        // pronouns
        "je", "j'", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "m'",
        "te", "t'", "se", "s'", "lui", "leur", "leurs", "eux", "moi", "toi", "soi", "y",
        "en", "ce", "c'", "ces", "cet", "cette", "ceci", "cela", "ça", "celui", "celle",
        "ceux", "celles", "qui", "que", "qu'", "quoi", "dont", "où", "lequel", "laquelle",
        "lesquels", "lesquelles", "auquel", "duquel",
        // possessives
        "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos",
        "votre", "vos",
        // prepositions, conjunctions
        "à", "a", "dans", "par", "pour", "sur", "sous", "avec", "sans", "chez", "entre",
        "vers", "contre", "depuis", "pendant", "avant", "après", "selon", "malgré",
        "parmi", "et", "ou", "mais", "donc", "or", "ni", "car", "si", "comme", "lorsque",
        "lorsqu'", "puisque", "puisqu'", "quand", "jusqu'", "jusque", "afin",
        // negation, adverbs
        "ne", "n'", "pas", "plus", "moins", "très", "trop", "peu", "bien", "aussi",
        "encore", "déjà", "toujours", "jamais", "souvent", "ainsi", "alors", "ici", "là",
        "maintenant", "tout", "tous", "toute", "toutes", "même", "mêmes", "autre",
        "autres", "tel", "telle", "tels", "telles", "chaque", "plusieurs", "certains",
        "certaines", "quelque", "quelques", "non", "oui", "cependant", "pourtant",
        "enfin", "puis", "tant", "tandis",
        // être, avoir, common auxiliaries
        "être", "est", "sont", "était", "étaient", "été", "sera", "seront", "serait",
        "soit", "sommes", "êtes", "suis", "es", "fut", "avoir", "ai", "as", "avons",
        "avez", "ont", "avait", "avaient", "aura", "auront", "aurait", "eu", "peut",
        "peuvent", "pouvait", "fait", "faire", "font", "doit", "doivent",
    ]
    .into_iter()
    .collect()
});

/// Elided forms expanded to their full lemma.
pub static ELISIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("l'", "le"),
        ("d'", "de"),
        ("j'", "je"),
        ("m'", "me"),
        ("t'", "te"),
        ("s'", "se"),
        ("c'", "ce"),
        ("n'", "ne"),
        ("qu'", "que"),
        ("jusqu'", "jusque"),
        ("lorsqu'", "lorsque"),
        ("puisqu'", "puisque"),
    ]
    .into_iter()
    .collect()
});

/// Inflected forms whose lemma no suffix rule can recover.
pub static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("est", "être"),
        ("sont", "être"),
        ("était", "être"),
        ("étaient", "être"),
        ("sera", "être"),
        ("seront", "être"),
        ("serait", "être"),
        ("été", "être"),
        ("suis", "être"),
        ("sommes", "être"),
        ("êtes", "être"),
        ("a", "avoir"),
        ("ai", "avoir"),
        ("as", "avoir"),
        ("avons", "avoir"),
        ("avez", "avoir"),
        ("ont", "avoir"),
        ("avait", "avoir"),
        ("avaient", "avoir"),
        ("eu", "avoir"),
        ("fait", "faire"),
        ("font", "faire"),
        ("peut", "pouvoir"),
        ("peuvent", "pouvoir"),
        ("doit", "devoir"),
        ("doivent", "devoir"),
        ("va", "aller"),
        ("vont", "aller"),
        ("yeux", "œil"),
        ("maux", "mal"),
        ("femmes", "femme"),
        ("bébés", "bébé"),
        ("os", "os"),
        ("virus", "virus"),
        ("corps", "corps"),
        ("fois", "fois"),
        ("pays", "pays"),
        ("poids", "poids"),
        ("temps", "temps"),
        ("risques", "risque"),
    ]
    .into_iter()
    .collect()
});

/// Words that may join capitalised words inside one entity
/// ("Côte d'Ivoire", "Charles de Gaulle").
pub static ENTITY_CONNECTORS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["de", "du", "des", "la", "le", "les", "d'", "l'"].into_iter().collect());

/// Prepositions announcing a place ("à Lyon", "en Bretagne").
pub static LOCATION_CUES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["à", "en", "au", "aux"].into_iter().collect());

pub static LOCATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "france", "paris", "lyon", "marseille", "toulouse", "bordeaux", "lille", "nantes",
        "strasbourg", "montpellier", "rennes", "grenoble", "nice", "bretagne", "normandie",
        "corse", "europe", "afrique", "asie", "amérique", "océanie", "québec", "canada",
        "belgique", "suisse", "allemagne", "italie", "espagne", "royaume-uni",
        "angleterre", "états-unis", "chine", "japon", "inde", "brésil", "sénégal",
        "maroc", "algérie", "tunisie", "wuhan", "genève", "bruxelles", "londres",
        "montréal", "île-de-france", "outre-mer", "guadeloupe", "martinique", "réunion",
        "guyane", "mayotte",
    ]
    .into_iter()
    .collect()
});

/// Words marking an organisation when they appear in an entity.
pub static ORG_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "université", "institut", "inserm", "cnrs", "inrae", "oms", "anses", "ansm",
        "has", "chu", "ap-hp", "hôpital", "hôpitaux", "ministère", "agence", "organisation",
        "santé", "académie", "fondation", "association", "commission", "conseil",
        "centre", "laboratoire", "société", "haute", "autorité", "assurance", "caisse",
        "sécurité", "pasteur", "unicef", "onu", "union",
    ]
    .into_iter()
    .collect()
});

/// Capitalised words that open sentences without naming anything.
pub static SENTENCE_OPENERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "le", "la", "les", "un", "une", "des", "ce", "cette", "ces", "il", "elle", "ils",
        "elles", "on", "nous", "vous", "je", "en", "dans", "pour", "par", "mais", "et",
        "or", "donc", "ainsi", "alors", "cependant", "pourtant", "selon", "depuis",
        "pendant", "après", "avant", "si", "quand", "lorsque", "comme", "aujourd",
        "enfin", "puis", "certains", "certaines", "plusieurs", "chaque", "tous", "toutes",
        "au", "aux", "du", "de", "à", "sur", "avec", "sans", "entre", "parmi", "leur",
        "leurs", "son", "sa", "ses", "notre", "nos", "votre", "vos", "plus", "moins",
        "voici", "voilà", "c'", "l'", "d'", "qu'", "s'", "n'", "j'",
    ]
    .into_iter()
    .collect()
});
