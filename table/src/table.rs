use ecow::EcoString;
use serde::*;

use crate::{Concept, Lang, LANG_COUNT};

/// One concept's tokens across all languages
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptRow {
    /// The concept's name
    pub name: EcoString,
    /// The concept's token in each language, indexed by [`Lang::index`]
    pub tokens: [Option<EcoString>; LANG_COUNT],
}

impl ConceptRow {
    /// Create a new row
    pub fn new(name: impl Into<EcoString>, tokens: [Option<&str>; LANG_COUNT]) -> Self {
        ConceptRow {
            name: name.into(),
            tokens: tokens.map(|tok| tok.map(Into::into)),
        }
    }
    /// Get the row's token in a language
    pub fn token(&self, lang: Lang) -> Option<&str> {
        self.tokens[lang.index()].as_deref()
    }
}

impl From<Concept> for ConceptRow {
    fn from(concept: Concept) -> Self {
        ConceptRow::new(concept.name(), concept.tokens())
    }
}

/// An ordered table of concepts
///
/// Row order is significant: it is the order translatable primitives are
/// listed in, and when two rows give the same source token, the later row's
/// target wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptTable {
    rows: Vec<ConceptRow>,
}

impl ConceptTable {
    /// The table of all built-in concepts
    pub fn builtin() -> Self {
        Self::from_rows(Concept::all().map(ConceptRow::from))
    }
    /// Create a table from rows
    pub fn from_rows(rows: impl IntoIterator<Item = ConceptRow>) -> Self {
        ConceptTable {
            rows: rows.into_iter().collect(),
        }
    }
    /// The table's rows, in order
    pub fn rows(&self) -> &[ConceptRow] {
        &self.rows
    }
    /// The number of concepts in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// Whether the table has no concepts
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Find a concept by name
    pub fn get(&self, name: &str) -> Option<&ConceptRow> {
        self.rows.iter().find(|row| row.name.as_str() == name)
    }
    /// Get a concept's token in a language
    pub fn token(&self, name: &str, lang: Lang) -> Option<&str> {
        self.get(name)?.token(lang)
    }
}
