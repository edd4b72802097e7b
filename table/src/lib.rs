//! Static data for translating between array languages
//!
//! This crate holds the closed set of supported languages, the table of
//! primitive correspondences between them, and each language's lexical
//! profile. None of it changes at runtime.

mod defs;
mod lang;
mod profile;
mod table;

pub use {defs::*, lang::*, profile::*, table::*};
