//! Token maps between pairs of languages

use std::collections::HashMap;

use array_translate_table::{is_word_char, ConceptTable, Lang};
use ecow::EcoString;
use log::{debug, warn};
use regex::Regex;
use serde::*;

use crate::lex::prev_char;

/// A primitive that has a different token in another language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatablePrimitive {
    /// The token in the source language
    pub from: EcoString,
    /// The token in the target language
    pub to: EcoString,
    /// The name of the shared concept
    pub concept: EcoString,
}

/// The token substitutions from one language to another
#[derive(Debug, Clone)]
pub struct TranslationMap {
    from: Lang,
    to: Lang,
    forward: HashMap<EcoString, EcoString>,
    backward: HashMap<EcoString, EcoString>,
    entries: Vec<TranslatablePrimitive>,
    /// Source tokens, longest first
    tokens: Vec<EcoString>,
    pattern: Option<Regex>,
}

impl TranslationMap {
    /// Build the map between two languages from a concept table
    ///
    /// A concept contributes an entry only if both languages have a token for
    /// it and the tokens differ. Names the source language accepts in place
    /// of a token are also mapped, but are not listed as entries.
    pub fn build(table: &ConceptTable, from: Lang, to: Lang) -> Self {
        let mut forward = HashMap::new();
        let mut backward = HashMap::new();
        let mut entries = Vec::new();
        for row in table.rows() {
            let (Some(src), Some(dst)) = (row.token(from), row.token(to)) else {
                continue;
            };
            if src == dst {
                continue;
            }
            let (src, dst) = (EcoString::from(src), EcoString::from(dst));
            forward.insert(src.clone(), dst.clone());
            backward.insert(dst.clone(), src.clone());
            entries.push(TranslatablePrimitive {
                from: src,
                to: dst,
                concept: row.name.clone(),
            });
        }
        for &(name, token) in from.profile().names {
            let target = table
                .rows()
                .iter()
                .rev()
                .find(|row| row.token(from) == Some(token))
                .and_then(|row| row.token(to));
            if let Some(target) = target {
                forward.entry(name.into()).or_insert_with(|| target.into());
            }
        }
        let mut tokens: Vec<EcoString> = forward.keys().cloned().collect();
        tokens.sort_unstable_by(|a, b| {
            (b.chars().count(), b.len())
                .cmp(&(a.chars().count(), a.len()))
                .then_with(|| a.cmp(b))
        });
        let pattern = token_pattern(&tokens);
        debug!(
            "built {from} → {to} translation map with {} tokens",
            forward.len()
        );
        TranslationMap {
            from,
            to,
            forward,
            backward,
            entries,
            tokens,
            pattern,
        }
    }
    /// The source language
    pub fn from(&self) -> Lang {
        self.from
    }
    /// The target language
    pub fn to(&self) -> Lang {
        self.to
    }
    /// Whether the map has no substitutions
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
    /// The number of source tokens with a substitution
    pub fn len(&self) -> usize {
        self.forward.len()
    }
    /// Get the target token for a source token
    pub fn forward(&self, token: &str) -> Option<&str> {
        self.forward.get(token).map(EcoString::as_str)
    }
    /// Get the source token for a target token
    pub fn backward(&self, token: &str) -> Option<&str> {
        self.backward.get(token).map(EcoString::as_str)
    }
    /// The map's entries, in concept table order
    pub fn entries(&self) -> &[TranslatablePrimitive] {
        &self.entries
    }
    /// A pattern matching any occurrence of a source token
    ///
    /// The pattern knows nothing about word boundaries or inflections, so a
    /// match only says where [`TranslationMap::token_at`] is worth asking.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
    /// Find the source token starting at `pos`
    ///
    /// Returns the offset just past the token and its translation. Longer
    /// tokens are tried first. A token spelled with ASCII letters does not
    /// match inside a longer word. A token followed by one of the source
    /// language's inflections is really part of a longer token, so nothing
    /// matches.
    pub fn token_at(&self, text: &str, pos: usize) -> Option<(usize, &str)> {
        let rest = &text[pos..];
        let inflections = self.from.profile().inflections;
        let glued_before = prev_char(text, pos).is_some_and(is_word_char);
        for token in &self.tokens {
            if !rest.starts_with(token.as_str()) {
                continue;
            }
            let end = pos + token.len();
            let after = &text[end..];
            if (glued_before && token.starts_with(is_word_char))
                || (token.ends_with(is_word_char) && after.starts_with(is_word_char))
            {
                continue;
            }
            if after.starts_with(|c: char| inflections.contains(&c)) {
                return None;
            }
            return Some((end, self.forward(token)?));
        }
        None
    }
}

/// Build one alternation over all tokens
fn token_pattern(tokens: &[EcoString]) -> Option<Regex> {
    if tokens.is_empty() {
        return None;
    }
    let pattern = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("failed to build token pattern: {e}");
            None
        }
    }
}
