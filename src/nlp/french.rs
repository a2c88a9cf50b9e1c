//! Rule-based French analyzer.
//!
//! Tokens: elided articles/pronouns (`l'`, `qu'`, …) are split off, hyphenated
//! words stay whole, every other non-space symbol is its own token.
//!
//! Entities: maximal runs of capitalised words, optionally joined by
//! `de`/`la`/`d'`… A lone capitalised word opening a sentence is kept only
//! when the lexicon knows it.

use super::TextAnalyzer;
use super::lexicon::{
    ELISIONS, ENTITY_CONNECTORS, IRREGULAR, LOCATION_CUES, LOCATIONS, ORG_KEYWORDS,
    SENTENCE_OPENERS, STOP_WORDS,
};
use crate::models::{Entity, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[cdjlmnstCDJLMNST]|[Qq]u|[Jj]usqu|[Ll]orsqu|[Pp]uisqu)['’]|\w+(?:-\w+)*|[^\w\s]",
    )
    .expect("token pattern is valid")
});

const SENTENCE_END: &[&str] = &[".", "!", "?", "…", ";"];

#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchRules;

/// A token with its byte span in the source text.
#[derive(Debug)]
struct Span<'a> {
    start: usize,
    end: usize,
    surface: &'a str,
    norm: String,
}

impl Span<'_> {
    fn is_elision(&self) -> bool {
        self.norm.ends_with('\'')
    }

    fn is_word(&self) -> bool {
        self.surface.chars().any(char::is_alphanumeric)
    }

    fn is_capitalized(&self) -> bool {
        !self.is_elision() && self.surface.chars().next().is_some_and(char::is_uppercase)
    }

    fn is_acronym(&self) -> bool {
        let letters: Vec<char> = self.surface.chars().filter(|c| c.is_alphabetic()).collect();
        letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
    }
}

impl FrenchRules {
    pub fn new() -> Self {
        Self
    }

    fn spans<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        TOKEN_RE
            .find_iter(text)
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
                surface: m.as_str(),
                norm: normalize(m.as_str()),
            })
            .collect()
    }

    /// Flags tokens that open a sentence (text start, after terminal
    /// punctuation or a line break, or right after such an elision).
    fn sentence_starts(text: &str, spans: &[Span<'_>]) -> Vec<bool> {
        let mut flags = vec![false; spans.len()];
        for i in 0..spans.len() {
            flags[i] = match i {
                0 => true,
                _ => {
                    let prev = &spans[i - 1];
                    SENTENCE_END.contains(&prev.surface)
                        || text[prev.end..spans[i].start].contains('\n')
                        || (prev.is_elision() && flags[i - 1])
                }
            };
        }
        flags
    }
}

/// Lowercase and unify the apostrophe.
fn normalize(surface: &str) -> String {
    surface.to_lowercase().replace('’', "'")
}

/// Base form of a normalized token.
pub fn lemmatize(norm: &str) -> String {
    if let Some(full) = ELISIONS.get(norm) {
        return full.to_string();
    }
    if let Some(lemma) = IRREGULAR.get(norm) {
        return lemma.to_string();
    }
    if norm.chars().any(|c| c.is_ascii_digit()) || norm.chars().count() <= 3 {
        return norm.to_string();
    }
    if let Some(stem) = norm.strip_suffix("eaux") {
        return format!("{stem}eau");
    }
    if let Some(stem) = norm.strip_suffix("aux") {
        return format!("{stem}al");
    }
    if norm.ends_with('s') && !["ss", "us", "is", "os", "ès"].iter().any(|s| norm.ends_with(s)) {
        return norm[..norm.len() - 1].to_string();
    }
    norm.to_string()
}

fn label_for(run: &[Span<'_>], previous: Option<&Span<'_>>) -> &'static str {
    let words: Vec<&Span<'_>> = run.iter().filter(|s| s.is_capitalized()).collect();

    if words.iter().any(|w| ORG_KEYWORDS.contains(w.norm.as_str()))
        || (words.len() == 1 && words[0].is_acronym())
    {
        return "ORG";
    }

    let whole: String = run
        .iter()
        .map(|s| s.norm.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    if LOCATIONS.contains(whole.as_str())
        || words.iter().all(|w| LOCATIONS.contains(w.norm.as_str()))
        || previous.is_some_and(|p| LOCATION_CUES.contains(p.norm.as_str()))
    {
        return "LOC";
    }

    if words.len() >= 2 {
        return "PER";
    }
    "MISC"
}

impl TextAnalyzer for FrenchRules {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.spans(text)
            .into_iter()
            .map(|span| {
                let is_punct = !span.is_word();
                Token {
                    is_stop: !is_punct && STOP_WORDS.contains(span.norm.as_str()),
                    is_punct,
                    lemma: lemmatize(&span.norm),
                    text: span.surface.to_string(),
                }
            })
            .collect()
    }

    fn extract_entities(&self, text: &str) -> Vec<Entity> {
        let spans = self.spans(text);
        let opens = Self::sentence_starts(text, &spans);
        let same_line = |a: &Span<'_>, b: &Span<'_>| !text[a.end..b.start].contains('\n');

        let mut entities = Vec::new();
        let mut i = 0;
        while i < spans.len() {
            let first = &spans[i];
            if !first.is_capitalized()
                || (opens[i]
                    && (SENTENCE_OPENERS.contains(first.norm.as_str())
                        || STOP_WORDS.contains(first.norm.as_str())))
            {
                i += 1;
                continue;
            }

            // Grow the run over capitalised words and connector bridges.
            let mut last = i;
            loop {
                let next = last + 1;
                if next < spans.len()
                    && spans[next].is_capitalized()
                    && same_line(&spans[last], &spans[next])
                {
                    last = next;
                    continue;
                }
                let mut k = next;
                while k < spans.len()
                    && !spans[k].is_capitalized()
                    && ENTITY_CONNECTORS.contains(spans[k].norm.as_str())
                    && same_line(&spans[k - 1], &spans[k])
                {
                    k += 1;
                }
                if k > next
                    && k < spans.len()
                    && spans[k].is_capitalized()
                    && same_line(&spans[k - 1], &spans[k])
                {
                    last = k;
                    continue;
                }
                break;
            }

            let run = &spans[i..=last];
            let known = LOCATIONS.contains(first.norm.as_str())
                || ORG_KEYWORDS.contains(first.norm.as_str())
                || first.is_acronym();
            if !(opens[i] && run.len() == 1 && !known) {
                let previous = i.checked_sub(1).map(|p| &spans[p]);
                entities.push(Entity {
                    label: label_for(run, previous).to_string(),
                    text: text[first.start..spans[last].end].to_string(),
                });
            }
            i = last + 1;
        }
        entities
    }
}
