//! Classifying source text as code, strings, and comments

use std::ops::Range;

use array_translate_table::{is_word_char, Escape, Lang, LexProfile, StringForm};
use serde::*;
use unicode_segmentation::UnicodeSegmentation;

/// The kind of a region of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Translatable code
    Code,
    /// A string or character literal
    String,
    /// A comment
    Comment,
}

/// A contiguous region of source text of one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// What the region contains
    pub kind: SegmentKind,
    /// The byte range of the region
    pub range: Range<usize>,
}

/// A string or comment found at some position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Protected {
    pub kind: SegmentKind,
    /// The byte offset just past the region
    pub end: usize,
    /// The marker that opened a line comment
    pub line_marker: Option<&'static str>,
}

/// Get the byte length of the character at `pos`
///
/// Characters are extended grapheme clusters, so a glyph with combining marks
/// counts as one character.
pub fn char_len(text: &str, pos: usize) -> usize {
    text[pos..].graphemes(true).next().map_or(0, str::len)
}

/// Get the character immediately before `pos`
pub(crate) fn prev_char(text: &str, pos: usize) -> Option<char> {
    text[..pos].chars().next_back()
}

/// Skip a string or comment starting at `pos`
///
/// Returns the offset just past the string or comment, or `pos` if neither
/// starts there.
pub fn skip_protected(lang: Lang, text: &str, pos: usize) -> usize {
    protected_at(lang.profile(), text, pos).map_or(pos, |p| p.end)
}

/// Split source text into code, string, and comment segments
///
/// Adjacent code characters are merged into one segment. The segments
/// cover the whole text in order.
pub fn segments(lang: Lang, text: &str) -> Vec<Segment> {
    let profile = lang.profile();
    let mut segments: Vec<Segment> = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let (kind, end) = match protected_at(profile, text, pos) {
            Some(prot) => (prot.kind, prot.end),
            None => (SegmentKind::Code, pos + char_len(text, pos)),
        };
        match segments.last_mut() {
            Some(last) if kind == SegmentKind::Code && last.kind == SegmentKind::Code => {
                last.range.end = end
            }
            _ => segments.push(Segment {
                kind,
                range: pos..end,
            }),
        }
        pos = end;
    }
    segments
}

pub(crate) fn protected_at(profile: &LexProfile, text: &str, pos: usize) -> Option<Protected> {
    let rest = &text[pos..];
    // Comments
    if let Some((open, close)) = profile.block_comment {
        if rest.starts_with(open) {
            let body = pos + open.len();
            let end = text[body..]
                .find(close)
                .map_or(text.len(), |i| body + i + close.len());
            return Some(Protected {
                kind: SegmentKind::Comment,
                end,
                line_marker: None,
            });
        }
    }
    for &marker in profile.line_comments {
        if !rest.starts_with(marker) {
            continue;
        }
        if array_translate_table::is_word_like(marker)
            && prev_char(text, pos).is_some_and(is_word_char)
        {
            continue;
        }
        return Some(Protected {
            kind: SegmentKind::Comment,
            end: line_end(text, pos),
            line_marker: Some(marker),
        });
    }
    // Strings
    for form in profile.strings {
        if let Some(end) = string_end(*form, text, pos) {
            return Some(Protected {
                kind: SegmentKind::String,
                end,
                line_marker: None,
            });
        }
    }
    None
}

/// The offset of the end of the line containing `pos`, before any newline
fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

fn string_end(form: StringForm, text: &str, pos: usize) -> Option<usize> {
    let rest = &text[pos..];
    match form {
        StringForm::Quoted { delim, escape } => {
            let body = rest.strip_prefix(delim)?;
            let start = pos + delim.len_utf8();
            let mut chars = body.char_indices().peekable();
            while let Some((i, c)) = chars.next() {
                match c {
                    // Unterminated strings end with the line
                    '\n' => return Some(start + i),
                    c if escape == Escape::With(c) => {
                        if chars.peek().is_some_and(|&(_, next)| next != '\n') {
                            chars.next();
                        }
                    }
                    c if c == delim => {
                        if escape == Escape::Doubled
                            && chars.peek().is_some_and(|&(_, next)| next == delim)
                        {
                            chars.next();
                        } else {
                            return Some(start + i + c.len_utf8());
                        }
                    }
                    _ => {}
                }
            }
            Some(text.len())
        }
        StringForm::CharQuoted(delim) => {
            let body = rest.strip_prefix(delim)?;
            let c = body.graphemes(true).next().filter(|c| *c != "\n")?;
            body[c.len()..].strip_prefix(delim)?;
            Some(pos + 2 * delim.len_utf8() + c.len())
        }
        StringForm::CharPrefix { prefix, escape } => {
            let body = rest.strip_prefix(prefix)?;
            let mut end = pos + prefix.len_utf8();
            let mut graphemes = body.graphemes(true).take_while(|c| *c != "\n");
            if let Some(c) = graphemes.next() {
                end += c.len();
                if escape.is_some_and(|e| c.len() == e.len_utf8() && c.starts_with(e)) {
                    end += graphemes.next().map_or(0, str::len);
                }
            }
            Some(end)
        }
        StringForm::Line(prefix) => rest.starts_with(prefix).then(|| line_end(text, pos)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(lang: Lang, text: &str) -> Vec<(SegmentKind, &str)> {
        segments(lang, text)
            .into_iter()
            .map(|seg| (seg.kind, &text[seg.range]))
            .collect()
    }

    #[test]
    fn apl_doubled_quotes() {
        use SegmentKind::*;
        assert_eq!(
            kinds(Lang::Apl, "'it''s' ⍳3 ⍝ done"),
            [(String, "'it''s'"), (Code, " ⍳3 "), (Comment, "⍝ done")]
        );
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        use SegmentKind::*;
        assert_eq!(
            kinds(Lang::Apl, "'abc\n⍳3"),
            [(String, "'abc"), (Code, "\n⍳3")]
        );
        assert_eq!(kinds(Lang::Uiua, "\"abc"), [(String, "\"abc")]);
    }

    #[test]
    fn backslash_escapes() {
        use SegmentKind::*;
        assert_eq!(
            kinds(Lang::Uiua, r#""a\"b" ⇡3"#),
            [(String, r#""a\"b""#), (Code, " ⇡3")]
        );
        // An escape never swallows the newline
        assert_eq!(kinds(Lang::Kap, "\"a\\\nb"), [(String, "\"a\\"), (Code, "\nb")]);
    }

    #[test]
    fn tinyapl_escape_character() {
        use SegmentKind::*;
        assert_eq!(
            kinds(Lang::TinyApl, "\"a⍘\"b\"⍳"),
            [(String, "\"a⍘\"b\""), (Code, "⍳")]
        );
        assert_eq!(
            kinds(Lang::TinyApl, "⟃ ⍳ ⟄⍴⟃ open"),
            [(Comment, "⟃ ⍳ ⟄"), (Code, "⍴"), (Comment, "⟃ open")]
        );
    }

    #[test]
    fn character_literals() {
        use SegmentKind::*;
        assert_eq!(
            kinds(Lang::Bqn, "'a'≍'''"),
            [(String, "'a'"), (Code, "≍"), (String, "'''")]
        );
        assert_eq!(
            kinds(Lang::Uiua, "@# @\\n ⇡"),
            [(String, "@#"), (Code, " "), (String, "@\\n"), (Code, " ⇡")]
        );
        assert_eq!(kinds(Lang::Uiua, "$ raw # text\n⇡"), [
            (String, "$ raw # text"),
            (Code, "\n⇡")
        ]);
    }

    #[test]
    fn j_comment_is_a_word() {
        use SegmentKind::*;
        assert_eq!(
            kinds(Lang::J, "i. 3 NB. count"),
            [(Code, "i. 3 "), (Comment, "NB. count")]
        );
        assert_eq!(kinds(Lang::J, "xNB. 3"), [(Code, "xNB. 3")]);
        assert_eq!(
            kinds(Lang::J, "'NB.' NB. it's"),
            [(String, "'NB.'"), (Code, " "), (Comment, "NB. it's")]
        );
    }

    #[test]
    fn skip_returns_original_offset_in_code() {
        let text = "⍳3 'x'";
        assert_eq!(skip_protected(Lang::Apl, text, 0), 0);
        let quote = text.find('\'').unwrap();
        assert_eq!(skip_protected(Lang::Apl, text, quote), text.len());
    }

    #[test]
    fn segments_cover_text() {
        let text = "a←'x' ⍝ y\n'unterminated\n⍳";
        let segs = segments(Lang::Apl, text);
        let mut pos = 0;
        for seg in &segs {
            assert_eq!(seg.range.start, pos);
            pos = seg.range.end;
        }
        assert_eq!(pos, text.len());
    }

    #[test]
    fn graphemes_are_single_characters() {
        assert_eq!(char_len("e\u{301}x", 0), 3);
        assert_eq!(char_len("𝕩", 0), 4);
        assert_eq!(char_len("", 0), 0);
    }
}
