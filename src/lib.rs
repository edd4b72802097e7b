//! Translate code between array languages
//!
//! Primitives are substituted token by token through a table of shared
//! concepts, and array literals are rewritten into the target language's
//! notation. Strings and comments are never changed.
//!
//! ```
//! use array_translate::{translate, Lang};
//!
//! assert_eq!(translate("+/⍳10 ⍝ sum", Lang::Apl, Lang::Bqn), "+´↕10 # sum");
//! assert_eq!(translate("1 2 ¯3", Lang::Apl, Lang::J), "1 2 _3");
//! ```

mod config;
mod error;
pub mod lex;
pub mod literal;
mod map;
mod translate;

pub use array_translate_table::{
    Concept, ConceptRow, ConceptTable, Lang, LexProfile, UnknownLang, LANG_COUNT,
};

pub use {config::*, error::*, map::*, translate::*};
