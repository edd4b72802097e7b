//! Rewriting array literals between languages

use array_translate_table::{is_word_char, Lang, LANG_COUNT};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::lex::prev_char;

static NUMBER_PATTERNS: Lazy<[Regex; LANG_COUNT]> = Lazy::new(|| {
    Lang::all()
        .map(|lang| {
            Regex::new(&format!("^(?:{})", lang.profile().number))
                .unwrap_or_else(|e| panic!("invalid {lang} number pattern: {e}"))
        })
        .collect::<Vec<_>>()
        .try_into()
        .unwrap_or_else(|_| unreachable!("one number pattern per language"))
});

/// A run of number literals written as one array literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteralRun<'a> {
    /// The text of each number, in order
    pub elements: Vec<&'a str>,
    /// The byte offset just past the last number
    pub end: usize,
}

impl ArrayLiteralRun<'_> {
    /// Write the run in another language's notation
    pub fn translate(&self, from: Lang, to: Lang) -> String {
        let (from, to) = (from.profile(), to.profile());
        let mut out = String::new();
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                out.push_str(to.separator);
            }
            match elem.strip_prefix(from.negative) {
                Some(abs) => {
                    out.push_str(to.negative);
                    out.push_str(abs);
                }
                None => out.push_str(elem),
            }
        }
        out
    }
}

/// Match a number literal at `pos`, returning the offset just past it
///
/// Numbers do not start in the middle of a word.
pub fn number_at(lang: Lang, text: &str, pos: usize) -> Option<usize> {
    let first = text[pos..].chars().next()?;
    if !lang.profile().starts_number(first) || prev_char(text, pos).is_some_and(is_word_char) {
        return None;
    }
    number_here(lang, text, pos)
}

fn number_here(lang: Lang, text: &str, pos: usize) -> Option<usize> {
    NUMBER_PATTERNS[lang.index()]
        .find(&text[pos..])
        .map(|m| pos + m.end())
}

/// Parse a run of at least two numbers joined by the language's separator
pub fn parse_run(lang: Lang, text: &str, pos: usize) -> Option<ArrayLiteralRun<'_>> {
    let separator = lang.profile().separator;
    let mut end = number_at(lang, text, pos)?;
    let mut elements = vec![&text[pos..end]];
    while text[end..].starts_with(separator) {
        let start = end + separator.len();
        let Some(next) = number_here(lang, text, start) else {
            break;
        };
        elements.push(&text[start..next]);
        end = next;
    }
    (elements.len() >= 2).then_some(ArrayLiteralRun { elements, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(number_at(Lang::Apl, "¯3.5e¯2+", 0), Some("¯3.5e¯2".len()));
        assert_eq!(number_at(Lang::Apl, ".5", 0), Some(2));
        assert_eq!(number_at(Lang::Bqn, ".5", 0), None);
        assert_eq!(number_at(Lang::J, "_1r3 ", 0), Some(4));
        assert_eq!(number_at(Lang::J, "2x", 0), Some(2));
        assert_eq!(number_at(Lang::J, "16bff", 0), Some(5));
        assert_eq!(number_at(Lang::J, "1j_2", 0), Some(4));
        assert_eq!(number_at(Lang::TinyApl, "1ᴊ¯2", 0), Some("1ᴊ¯2".len()));
        assert_eq!(number_at(Lang::Apl, "¯", 0), None);
        assert_eq!(number_at(Lang::Apl, "⍳3", 0), None);
    }

    #[test]
    fn numbers_do_not_start_inside_words() {
        assert_eq!(number_at(Lang::Apl, "x2 3", 1), None);
        assert_eq!(number_at(Lang::J, "a_1", 1), None);
        assert_eq!(number_at(Lang::Apl, "⍴2 3", "⍴".len()), Some("⍴2".len()));
    }

    #[test]
    fn bqn_constants() {
        assert_eq!(number_at(Lang::Bqn, "¯∞", 0), Some("¯∞".len()));
        assert_eq!(number_at(Lang::Apl, "π", 0), None);
        let run = parse_run(Lang::Bqn, "1‿π‿¯∞", 0).unwrap();
        assert_eq!(run.elements, ["1", "π", "¯∞"]);
        assert_eq!(run.translate(Lang::Bqn, Lang::J), "1 π _∞");
    }

    #[test]
    fn runs() {
        let run = parse_run(Lang::Apl, "1 2 ¯3+x", 0).unwrap();
        assert_eq!(run.elements, ["1", "2", "¯3"]);
        assert_eq!(run.end, "1 2 ¯3".len());
        assert_eq!(run.translate(Lang::Apl, Lang::J), "1 2 _3");
        assert_eq!(run.translate(Lang::Apl, Lang::Bqn), "1‿2‿¯3");
        assert_eq!(run.translate(Lang::Apl, Lang::Uiua), "1_2_¯3");
    }

    #[test]
    fn run_stops_at_malformed_element() {
        let run = parse_run(Lang::Bqn, "1‿2‿x", 0).unwrap();
        assert_eq!(run.elements, ["1", "2"]);
        let run = parse_run(Lang::J, "1 2 _ 3", 0).unwrap();
        assert_eq!(run.elements, ["1", "2"]);
    }

    #[test]
    fn single_numbers_are_not_runs() {
        assert_eq!(parse_run(Lang::Apl, "42", 0), None);
        assert_eq!(parse_run(Lang::Apl, "42 ", 0), None);
        assert_eq!(parse_run(Lang::Apl, "42  7", 0), None);
        assert_eq!(parse_run(Lang::Uiua, "42_", 0), None);
    }

    #[test]
    fn only_the_prefix_is_rewritten() {
        let run = parse_run(Lang::J, "_1e_2 3", 0).unwrap();
        assert_eq!(run.translate(Lang::J, Lang::Apl), "¯1e_2 3");
    }
}
