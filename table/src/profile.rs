use crate::Lang;

/// How an escaped delimiter is written inside a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Writing the delimiter twice produces one literal delimiter
    Doubled,
    /// The given character escapes the character after it
    With(char),
}

/// A form of string or character literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringForm {
    /// Text between two delimiters
    Quoted {
        /// The opening and closing delimiter
        delim: char,
        /// How the delimiter is escaped inside the string
        escape: Escape,
    },
    /// A delimiter, exactly one character, and the delimiter again
    CharQuoted(char),
    /// A prefix followed by exactly one character
    CharPrefix {
        /// The prefix character
        prefix: char,
        /// A character that makes the literal span one more character
        escape: Option<char>,
    },
    /// A prefix that makes the rest of the line a string
    Line(&'static str),
}

/// The lexical features of a language that translation must respect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexProfile {
    /// String and character literal forms, in the order they are tried
    pub strings: &'static [StringForm],
    /// Tokens that start a comment running to the end of the line
    pub line_comments: &'static [&'static str],
    /// The opening and closing markers of a block comment
    pub block_comment: Option<(&'static str, &'static str)>,
    /// The separator between elements of an array literal
    pub separator: &'static str,
    /// The prefix of a negative number
    pub negative: &'static str,
    /// A regex matching one number literal
    ///
    /// The pattern is unanchored and uses only ASCII digits.
    pub number: &'static str,
    /// Characters that inflect a preceding token into a different one
    pub inflections: &'static [char],
    /// Words the language accepts in place of a primitive's token
    ///
    /// Each pair is a word and the token it stands for.
    pub names: &'static [(&'static str, &'static str)],
}

const APL_NUMBER: &str = r"¯?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE]¯?[0-9]+)?";

static APL: LexProfile = LexProfile {
    strings: &[StringForm::Quoted {
        delim: '\'',
        escape: Escape::Doubled,
    }],
    line_comments: &["⍝"],
    block_comment: None,
    separator: " ",
    negative: "¯",
    number: APL_NUMBER,
    inflections: &[],
    names: &[],
};

static BQN: LexProfile = LexProfile {
    strings: &[
        StringForm::Quoted {
            delim: '"',
            escape: Escape::Doubled,
        },
        StringForm::CharQuoted('\''),
    ],
    line_comments: &["#"],
    block_comment: None,
    separator: "‿",
    negative: "¯",
    number: r"¯?(?:[0-9]+(?:\.[0-9]+)?(?:[eE]¯?[0-9]+)?|π|∞)",
    inflections: &[],
    names: &[],
};

static UIUA: LexProfile = LexProfile {
    strings: &[
        StringForm::Quoted {
            delim: '"',
            escape: Escape::With('\\'),
        },
        StringForm::CharPrefix {
            prefix: '@',
            escape: Some('\\'),
        },
        StringForm::Line("$ "),
    ],
    line_comments: &["#"],
    block_comment: None,
    separator: "_",
    negative: "¯",
    number: r"¯?[0-9]+(?:\.[0-9]+)?(?:e¯?[0-9]+)?",
    inflections: &[],
    names: UIUA_NAMES,
};

/// Uiua's formatter turns these names into glyphs
const UIUA_NAMES: &[(&str, &str)] = &[
    ("abs", "⌵"),
    ("absolute", "⌵"),
    ("backward", "˜"),
    ("box", "□"),
    ("ceiling", "⌈"),
    ("classify", "⊛"),
    ("deduplicate", "◴"),
    ("deshape", "♭"),
    ("each", "∵"),
    ("fall", "⍖"),
    ("first", "⊢"),
    ("floor", "⌊"),
    ("group", "⊕"),
    ("identity", "∘"),
    ("length", "⧻"),
    ("negate", "¯"),
    ("not", "¬"),
    ("range", "⇡"),
    ("reduce", "/"),
    ("repeat", "⍥"),
    ("reverse", "⇌"),
    ("rise", "⍏"),
    ("rows", "≡"),
    ("scan", "\\"),
    ("shape", "△"),
    ("sign", "±"),
    ("sort", "⍆"),
    ("sqrt", "√"),
    ("stencil", "⧈"),
    ("table", "⊞"),
    ("transpose", "⍉"),
    ("un", "°"),
    ("under", "⍜"),
    ("unique", "◰"),
    ("where", "⊚"),
];

static J: LexProfile = LexProfile {
    strings: &[StringForm::Quoted {
        delim: '\'',
        escape: Escape::Doubled,
    }],
    line_comments: &["NB."],
    block_comment: None,
    separator: " ",
    negative: "_",
    number: concat!(
        r"_?[0-9]+(?:\.[0-9]+)?(?:e_?[0-9]+)?",
        r"(?:(?:[jrpx]|a[dr])_?[0-9]+(?:\.[0-9]+)?(?:e_?[0-9]+)?|b[0-9a-z]+|x)?"
    ),
    inflections: &['.', ':'],
    names: &[],
};

static KAP: LexProfile = LexProfile {
    strings: &[
        StringForm::Quoted {
            delim: '"',
            escape: Escape::With('\\'),
        },
        StringForm::CharPrefix {
            prefix: '@',
            escape: Some('\\'),
        },
    ],
    line_comments: &["⍝"],
    block_comment: None,
    separator: " ",
    negative: "¯",
    number: APL_NUMBER,
    inflections: &[],
    names: &[],
};

static TINYAPL: LexProfile = LexProfile {
    strings: &[
        StringForm::Quoted {
            delim: '"',
            escape: Escape::With('⍘'),
        },
        StringForm::Quoted {
            delim: '\'',
            escape: Escape::With('⍘'),
        },
    ],
    line_comments: &["⍝"],
    block_comment: Some(("⟃", "⟄")),
    separator: "‿",
    negative: "¯",
    number: concat!(
        r"¯?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:ᴇ¯?[0-9]+)?",
        r"(?:ᴊ¯?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:ᴇ¯?[0-9]+)?)?"
    ),
    inflections: &[],
    names: &[],
};

impl LexProfile {
    /// Get a language's profile
    pub fn of(lang: Lang) -> &'static LexProfile {
        match lang {
            Lang::Apl => &APL,
            Lang::Bqn => &BQN,
            Lang::Uiua => &UIUA,
            Lang::J => &J,
            Lang::Kap => &KAP,
            Lang::TinyApl => &TINYAPL,
        }
    }
    /// Whether two profiles write array literals the same way
    pub fn same_literals(&self, other: &LexProfile) -> bool {
        self.separator == other.separator && self.negative == other.negative
    }
    /// Whether a character could begin a number literal
    pub fn starts_number(&self, c: char) -> bool {
        c.is_ascii_digit()
            || c == '.'
            || self.negative.starts_with(c)
            || (matches!(c, 'π' | '∞') && self.number.contains(c))
    }
}

/// Whether a token is spelled like a word rather than a symbol
///
/// Word-like tokens only match at word boundaries. Only ASCII letters make a
/// word; glyphs such as BQN's `𝕩` can sit right next to each other.
pub fn is_word_like(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// Whether a character continues an ASCII word
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bqn_constants_are_numbers() {
        let bqn = Lang::Bqn.profile();
        assert!(bqn.starts_number('π') && bqn.starts_number('∞'));
        assert!(!Lang::Apl.profile().starts_number('π'));
    }

    #[test]
    fn uiua_names() {
        let uiua = Lang::Uiua.profile();
        assert!(uiua.names.contains(&("range", "⇡")));
        assert!(uiua.names.contains(&("scan", "\\")));
        assert!(Lang::Apl.profile().names.is_empty());
        for &(name, token) in uiua.names {
            assert!(is_word_like(name), "{name} is not a word");
            assert!(
                crate::Concept::from_token(Lang::Uiua, token).is_some(),
                "{name} stands for {token:?}, which is not a Uiua token"
            );
        }
    }

    #[test]
    fn literal_notation_avoids_digits() {
        for lang in Lang::all() {
            let profile = lang.profile();
            for part in [profile.separator, profile.negative] {
                assert!(!part.is_empty(), "{lang} has an empty literal part");
                assert!(
                    !part.chars().any(|c| c.is_ascii_digit()),
                    "{lang} literal part {part:?} contains a digit"
                );
            }
            assert_ne!(profile.separator, profile.negative);
        }
    }

    #[test]
    fn shared_notation() {
        assert!(Lang::Apl.profile().same_literals(Lang::Kap.profile()));
        assert!(Lang::Bqn.profile().same_literals(Lang::TinyApl.profile()));
        assert!(!Lang::Apl.profile().same_literals(Lang::J.profile()));
        assert!(!Lang::Uiua.profile().same_literals(Lang::Bqn.profile()));
    }

    #[test]
    fn word_like_tokens() {
        assert!(is_word_like("NB."));
        assert!(is_word_like("i."));
        assert!(!is_word_like("𝕨"));
        assert!(!is_word_char('𝕩'));
        assert!(is_word_char('_'));
        assert!(!is_word_like("⍳"));
        assert!(!is_word_like("•Fmt"));
        assert!(!is_word_like(""));
    }
}
