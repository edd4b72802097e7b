//! The translation pipeline

use std::{ops::Range, sync::Arc};

use array_translate_table::{is_word_char, ConceptTable, Lang};
use dashmap::DashMap;
use log::{debug, trace};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;

use crate::{
    lex::{self, SegmentKind},
    literal, TranslatablePrimitive, TranslateConfig, TranslationMap,
};

/// Translates code between languages, caching a map for each language pair
///
/// Translation never fails. Text that cannot be translated, including text
/// in a language pair with no differing primitives, is returned unchanged.
#[derive(Debug)]
pub struct Translator {
    table: RwLock<Arc<ConceptTable>>,
    cache: DashMap<(Lang, Lang), Arc<TranslationMap>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translator {
    /// Create a translator over a concept table
    pub fn new(table: ConceptTable) -> Self {
        Translator {
            table: RwLock::new(Arc::new(table)),
            cache: DashMap::new(),
        }
    }
    /// Create a translator over the built-in concept table
    pub fn builtin() -> Self {
        Self::new(ConceptTable::builtin())
    }
    /// Get the current concept table
    pub fn table(&self) -> Arc<ConceptTable> {
        self.table.read().clone()
    }
    /// Replace the concept table and drop all cached maps
    pub fn reload(&self, table: ConceptTable) {
        let mut current = self.table.write();
        *current = Arc::new(table);
        self.cache.clear();
        debug!("reloaded concept table with {} concepts", current.len());
    }
    /// Drop all cached maps
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("cleared translation cache");
    }
    /// The language pairs that currently have a cached map
    pub fn cached_pairs(&self) -> Vec<(Lang, Lang)> {
        let mut pairs: Vec<_> = self.cache.iter().map(|entry| *entry.key()).collect();
        pairs.sort();
        pairs
    }
    /// Get the map from one language to another, building it if necessary
    pub fn map(&self, from: Lang, to: Lang) -> Arc<TranslationMap> {
        if let Some(map) = self.cache.get(&(from, to)) {
            return map.clone();
        }
        // Holding the table lock keeps a reload from racing this insert
        let table = self.table.read();
        let map = Arc::new(TranslationMap::build(&table, from, to));
        self.cache.insert((from, to), map.clone());
        map
    }
    /// Whether any primitive differs between two languages
    pub fn has_translation(&self, from: Lang, to: Lang) -> bool {
        from != to && !self.map(from, to).entries().is_empty()
    }
    /// The primitives that translate from one language to another
    pub fn translatable_primitives(&self, from: Lang, to: Lang) -> Vec<TranslatablePrimitive> {
        if from == to {
            return Vec::new();
        }
        self.map(from, to).entries().to_vec()
    }
    /// Translate primitives and array literals
    pub fn translate(&self, code: &str, from: Lang, to: Lang) -> String {
        self.translate_with(code, from, to, &TranslateConfig::default())
    }
    /// Translate primitives and comment markers, leaving array literals alone
    pub fn translate_primitives(&self, code: &str, from: Lang, to: Lang) -> String {
        self.translate_with(code, from, to, &TranslateConfig::primitives_only())
    }
    /// Translate array literals, leaving primitives alone
    pub fn translate_array_literals(&self, code: &str, from: Lang, to: Lang) -> String {
        self.translate_with(code, from, to, &TranslateConfig::array_literals_only())
    }
    /// Translate with the passes selected by a configuration
    ///
    /// Strings and comment text are always copied unchanged.
    pub fn translate_with(
        &self,
        code: &str,
        from: Lang,
        to: Lang,
        config: &TranslateConfig,
    ) -> String {
        if from == to || code.is_empty() {
            return code.into();
        }
        let literals =
            config.array_literals && !from.profile().same_literals(to.profile());
        let map = (config.primitives || config.comment_markers)
            .then(|| self.map(from, to))
            .filter(|map| map.pattern().is_some());
        if !literals && map.is_none() {
            return code.into();
        }
        let mut walk = Walk {
            code,
            from,
            to,
            out: String::with_capacity(code.len()),
            pos: 0,
            literals,
            map: map.as_deref(),
            primitives: config.primitives,
            comment_markers: config.comment_markers,
            tokens: TokenCursor::new(map.as_deref().and_then(TranslationMap::pattern)),
            replaced: 0,
        };
        walk.run();
        trace!(
            "translated {} bytes from {from} to {to} with {} replacements",
            code.len(),
            walk.replaced
        );
        walk.out
    }
    /// Like [`Translator::translate`], but with language ids
    ///
    /// An unknown id on either side leaves the code unchanged.
    pub fn translate_by_name(&self, code: &str, from: &str, to: &str) -> String {
        match (Lang::from_id(from), Lang::from_id(to)) {
            (Some(from), Some(to)) => self.translate(code, from, to),
            _ => code.into(),
        }
    }
    /// Like [`Translator::has_translation`], but with language ids
    pub fn has_translation_by_name(&self, from: &str, to: &str) -> bool {
        match (Lang::from_id(from), Lang::from_id(to)) {
            (Some(from), Some(to)) => self.has_translation(from, to),
            _ => false,
        }
    }
    /// Like [`Translator::translatable_primitives`], but with language ids
    pub fn translatable_primitives_by_name(
        &self,
        from: &str,
        to: &str,
    ) -> Vec<TranslatablePrimitive> {
        match (Lang::from_id(from), Lang::from_id(to)) {
            (Some(from), Some(to)) => self.translatable_primitives(from, to),
            _ => Vec::new(),
        }
    }
}

/// Finds the next token match at or after a position
///
/// A leftmost search from `pos` that finds a match at `start` proves that no
/// match begins in `pos..start`, so one search serves every position up to it.
struct TokenCursor<'r> {
    pattern: Option<&'r Regex>,
    next: Option<Range<usize>>,
    exhausted: bool,
}

impl<'r> TokenCursor<'r> {
    fn new(pattern: Option<&'r Regex>) -> Self {
        TokenCursor {
            pattern,
            next: None,
            exhausted: pattern.is_none(),
        }
    }
    fn at(&mut self, text: &str, pos: usize) -> Option<Range<usize>> {
        if self.exhausted {
            return None;
        }
        if self.next.as_ref().map_or(true, |next| next.start < pos) {
            self.next = self
                .pattern
                .and_then(|pattern| pattern.find_at(text, pos))
                .map(|m| m.range());
            self.exhausted = self.next.is_none();
        }
        self.next.clone().filter(|next| next.start == pos)
    }
}

struct Walk<'a> {
    code: &'a str,
    from: Lang,
    to: Lang,
    out: String,
    pos: usize,
    literals: bool,
    map: Option<&'a TranslationMap>,
    primitives: bool,
    comment_markers: bool,
    tokens: TokenCursor<'a>,
    replaced: usize,
}

impl<'a> Walk<'a> {
    fn run(&mut self) {
        let profile = self.from.profile();
        while self.pos < self.code.len() {
            // Strings and comments
            if let Some(prot) = lex::protected_at(profile, self.code, self.pos) {
                let mut body = self.pos;
                if let (SegmentKind::Comment, Some(marker)) = (prot.kind, prot.line_marker) {
                    if let Some(to) = self.comment_marker(marker) {
                        body += marker.len();
                        self.emit(to, body);
                    }
                }
                self.out.push_str(&self.code[body..prot.end]);
                self.pos = prot.end;
                continue;
            }
            // Numbers
            if let Some(end) = literal::number_at(self.from, self.code, self.pos) {
                let run = self
                    .literals
                    .then(|| literal::parse_run(self.from, self.code, self.pos))
                    .flatten();
                if let Some(run) = run {
                    self.out.push_str(&run.translate(self.from, self.to));
                    self.replaced += 1;
                    self.pos = run.end;
                } else {
                    self.out.push_str(&self.code[self.pos..end]);
                    self.pos = end;
                }
                continue;
            }
            // Primitives
            if let Some((end, to)) = self.token() {
                self.emit(to, end);
                self.pos = end;
                continue;
            }
            let len = lex::char_len(self.code, self.pos);
            self.out.push_str(&self.code[self.pos..self.pos + len]);
            self.pos += len;
        }
    }
    fn token(&mut self) -> Option<(usize, &'a str)> {
        if !self.primitives {
            return None;
        }
        let map = self.map?;
        self.tokens.at(self.code, self.pos)?;
        map.token_at(self.code, self.pos)
    }
    fn comment_marker(&self, marker: &str) -> Option<&'a str> {
        if !self.comment_markers {
            return None;
        }
        self.map?.forward(marker)
    }
    /// Write a translated token that replaces source text ending at `end`
    ///
    /// A space keeps the token from running into an ASCII word on either side.
    fn emit(&mut self, token: &str, end: usize) {
        if token.starts_with(is_word_char) && self.out.ends_with(is_word_char) {
            self.out.push(' ');
        }
        self.out.push_str(token);
        if token.ends_with(is_word_char) && self.code[end..].starts_with(is_word_char) {
            self.out.push(' ');
        }
        self.replaced += 1;
    }
}

static GLOBAL: Lazy<Translator> = Lazy::new(Translator::builtin);

/// Get the process-wide translator used by the free functions
pub fn global() -> &'static Translator {
    &GLOBAL
}

/// Translate primitives and array literals with the global translator
pub fn translate(code: &str, from: Lang, to: Lang) -> String {
    GLOBAL.translate(code, from, to)
}

/// Translate primitives with the global translator
pub fn translate_primitives(code: &str, from: Lang, to: Lang) -> String {
    GLOBAL.translate_primitives(code, from, to)
}

/// Translate array literals
///
/// Array literals do not depend on the concept table, so this never touches
/// the global translator's cache.
pub fn translate_array_literals(code: &str, from: Lang, to: Lang) -> String {
    GLOBAL.translate_array_literals(code, from, to)
}

/// Whether any primitive differs between two languages
pub fn has_translation(from: Lang, to: Lang) -> bool {
    GLOBAL.has_translation(from, to)
}

/// The primitives that translate from one language to another
pub fn translatable_primitives(from: Lang, to: Lang) -> Vec<TranslatablePrimitive> {
    GLOBAL.translatable_primitives(from, to)
}

/// Drop all of the global translator's cached maps
pub fn clear_translation_cache() {
    GLOBAL.clear_cache()
}
