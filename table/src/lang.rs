use std::{error::Error, fmt, str::FromStr};

use enum_iterator::{all, Sequence};
use serde::*;

use crate::LexProfile;

/// A supported array language
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Dyalog APL
    Apl,
    /// BQN
    Bqn,
    /// Uiua
    Uiua,
    /// J
    J,
    /// Kap
    Kap,
    /// TinyAPL
    TinyApl,
}

/// The number of supported languages
pub const LANG_COUNT: usize = 6;

impl Lang {
    /// Get an iterator over all languages
    pub fn all() -> impl Iterator<Item = Self> {
        all()
    }
    /// The language's id
    pub fn id(&self) -> &'static str {
        match self {
            Lang::Apl => "apl",
            Lang::Bqn => "bqn",
            Lang::Uiua => "uiua",
            Lang::J => "j",
            Lang::Kap => "kap",
            Lang::TinyApl => "tinyapl",
        }
    }
    /// The language's display name
    pub fn name(&self) -> &'static str {
        match self {
            Lang::Apl => "APL",
            Lang::Bqn => "BQN",
            Lang::Uiua => "Uiua",
            Lang::J => "J",
            Lang::Kap => "Kap",
            Lang::TinyApl => "TinyAPL",
        }
    }
    /// The position of this language in per-language arrays
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// Find a language by its id
    ///
    /// Ids are matched case-insensitively, and a few common aliases are accepted.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim().to_ascii_lowercase();
        Some(match id.as_str() {
            "apl" | "dyalog" => Lang::Apl,
            "bqn" => Lang::Bqn,
            "uiua" => Lang::Uiua,
            "j" => Lang::J,
            "kap" => Lang::Kap,
            "tinyapl" | "tiny-apl" | "tiny_apl" => Lang::TinyApl,
            _ => return None,
        })
    }
    /// Get the language's lexical profile
    pub fn profile(&self) -> &'static LexProfile {
        LexProfile::of(*self)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// An error for a language id that is not supported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLang(pub String);

impl fmt::Display for UnknownLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language {:?}, expected one of ", self.0)?;
        for (i, lang) in Lang::all().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lang}")?;
        }
        Ok(())
    }
}

impl Error for UnknownLang {}

impl FromStr for Lang {
    type Err = UnknownLang;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_id(s).ok_or_else(|| UnknownLang(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_id(lang.id()), Some(lang));
            assert_eq!(lang.to_string().parse::<Lang>(), Ok(lang));
        }
        assert_eq!(Lang::all().count(), LANG_COUNT);
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!(Lang::from_id("Dyalog"), Some(Lang::Apl));
        assert_eq!(Lang::from_id(" TinyAPL "), Some(Lang::TinyApl));
        assert_eq!(Lang::from_id("k"), None);
        let err = "k".parse::<Lang>().unwrap_err();
        assert!(err.to_string().contains("tinyapl"));
    }

    #[test]
    fn indices_are_dense() {
        for (i, lang) in Lang::all().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }
}
