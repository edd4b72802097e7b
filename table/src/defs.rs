//! All concept definitions
//!
//! Each concept links the primitives that mean the same thing, when applied
//! monadically, across the supported languages. Columns are, in order,
//! APL, BQN, Uiua, J, Kap, and TinyAPL. `_` marks a language that has no
//! single token for the concept.

use enum_iterator::{all, Sequence};
use serde::*;

use crate::{Lang, LANG_COUNT};

macro_rules! token {
    (_) => {
        None
    };
    ($tok:literal) => {
        Some($tok)
    };
}

macro_rules! concept {
    ($(
        #[doc = $doc:literal]
        ($variant:ident, $name:literal, [$($tok:tt),* $(,)?])
    ),* $(,)?) => {
        /// A semantic operation shared between languages
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum Concept {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl Concept {
            /// Get the concept's name
            pub fn name(&self) -> &'static str {
                match self {
                    $(Concept::$variant => $name,)*
                }
            }
            /// Get the concept's token in every language
            pub fn tokens(&self) -> [Option<&'static str>; LANG_COUNT] {
                match self {
                    $(Concept::$variant => [$(token!($tok)),*],)*
                }
            }
        }
    };
}

impl Concept {
    /// Get an iterator over all concepts, in table order
    pub fn all() -> impl Iterator<Item = Self> {
        all()
    }
    /// Find a concept by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|c| c.name() == name)
    }
    /// Get the concept's token in a language
    pub fn token(&self, lang: Lang) -> Option<&'static str> {
        self.tokens()[lang.index()]
    }
    /// Find the concept a language spells with the given token
    pub fn from_token(lang: Lang, token: &str) -> Option<Self> {
        Self::all().find(|c| c.token(lang) == Some(token))
    }
}

concept!(
    // Structure
    /// Generate a range of indices
    (Iota, "iota", ["⍳", "↕", "⇡", "i.", "⍳", "⍳"]),
    /// Get the shape of an array
    (Shape, "shape", ["⍴", "≢", "△", "$", "⍴", "⍴"]),
    /// Count the major cells of an array
    (Tally, "tally", ["≢", "≠", "⧻", "#", "≢", "≢"]),
    /// Reverse an array
    (Reverse, "reverse", ["⌽", "⌽", "⇌", "|.", "⌽", "⌽"]),
    /// Reverse along the first axis
    (ReverseFirst, "reverseFirst", ["⊖", _, _, _, "⊖", "⊖"]),
    /// Reverse the order of axes
    (Transpose, "transpose", ["⍉", "⍉", "⍉", "|:", "⍉", "⍉"]),
    /// Flatten an array to a list
    (Ravel, "ravel", [",", "⥊", "♭", ",", ",", ","]),
    /// Wrap an array as a scalar
    (Enclose, "enclose", ["⊂", "<", "□", "<", "⊂", "⊂"]),
    /// Get the first element
    (First, "first", ["⊃", "⊑", "⊢", "{.", "⊃", "⊃"]),
    /// Merge the elements of a nested array
    (Mix, "mix", ["↑", ">", _, ">", _, "↑"]),
    /// Count the levels of nesting
    (Depth, "depth", ["≡", "≡", _, "L.", "≡", "≡"]),
    /// An empty list
    (Empty, "empty", ["⍬", "⟨⟩", "[]", "i.0", "⍬", "⍬"]),
    // Ordering
    /// Indices that would sort ascending
    (GradeUp, "gradeUp", ["⍋", "⍋", "⍏", "/:", "⍋", "⍋"]),
    /// Indices that would sort descending
    (GradeDown, "gradeDown", ["⍒", "⍒", "⍖", "\\:", "⍒", "⍒"]),
    /// Sort ascending
    (SortUp, "sortUp", [_, "∧", "⍆", "/:~", "∧", "∧"]),
    /// Sort descending
    (SortDown, "sortDown", [_, "∨", _, "\\:~", "∨", "∨"]),
    /// Remove duplicate major cells
    (Unique, "unique", ["∪", "⍷", "◴", "~.", "∪", "∪"]),
    /// Mark the first occurrence of each major cell
    (MarkFirsts, "markFirsts", ["≠", "∊", "◰", "~:", _, _]),
    /// Assign each major cell the index of its first occurrence
    (Classify, "classify", ["⍳⍨", "⊐", "⊛", "i.~", "⍳⍨", "⍳⍨"]),
    /// Indices of nonzero elements, repeated by count
    (Where, "where", ["⍸", "/", "⊚", "I.", "⍸", "⍸"]),
    // Arithmetic
    /// Negate a number
    (Negate, "negate", ["-", "-", "¯", "-", "-", "-"]),
    /// Get the sign of a number
    (Sign, "sign", ["×", "×", "±", "*", "×", "×"]),
    /// One divided by a number
    (Reciprocal, "reciprocal", ["÷", "÷", _, "%", "÷", "÷"]),
    /// Raise e to a power
    (Exponential, "exponential", ["*", "⋆", _, "^", "*", "*"]),
    /// Natural logarithm
    (NaturalLog, "naturalLog", ["⍟", "⋆⁼", _, "^.", "⍟", "⍟"]),
    /// Absolute value
    (Magnitude, "magnitude", ["|", "|", "⌵", "|", "|", "|"]),
    /// Round down
    (Floor, "floor", ["⌊", "⌊", "⌊", "<.", "⌊", "⌊"]),
    /// Round up
    (Ceiling, "ceiling", ["⌈", "⌈", "⌈", ">.", "⌈", "⌈"]),
    /// Square root
    (SquareRoot, "squareRoot", [_, "√", "√", "%:", "√", "√"]),
    /// Logical not
    (Not, "not", ["~", "¬", "¬", "-.", "~", "~"]),
    /// Random integer below a number
    (Roll, "roll", ["?", _, _, "?", "?", "?"]),
    /// Factorial
    (Factorial, "factorial", ["!", _, _, "!", "!", "!"]),
    /// Multiply by pi
    (PiTimes, "piTimes", ["○", _, _, "o.", _, "○"]),
    // Modifiers
    /// Fold a function between elements
    (Reduce, "reduce", ["/", "´", "/", "/", "/", "/"]),
    /// Fold, keeping intermediate results
    (Scan, "scan", ["\\", "`", "\\", "/\\", "\\", "\\"]),
    /// Apply a function to each element
    (Each, "each", ["¨", "¨", "∵", "\"0", "¨", "¨"]),
    /// Apply a function to each major cell
    (Cells, "cells", ["⍤¯1", "˘", "≡", "\"_1", _, "⍤¯1"]),
    /// Apply a function at a given rank
    (Rank, "rank", ["⍤", "⎉", _, "\"", "⍤", "⍤"]),
    /// Swap or duplicate arguments
    (Commute, "commute", ["⍨", "˜", "˜", "~", "⍨", "⍨"]),
    /// Compose two functions
    (Compose, "compose", ["∘", "∘", _, "@:", "∘", "∘"]),
    /// Apply a function to every pair of elements
    (OuterProduct, "outerProduct", ["∘.", "⌜", "⊞", _, "⌻", "⊞"]),
    /// Apply a function repeatedly
    (Repeat, "repeat", ["⍣", "⍟", "⍥", "^:", "⍣", "⍣"]),
    /// Invert a function
    (Inverse, "inverse", ["⍣¯1", "⁼", "°", "^:_1", "˝", "⍣¯1"]),
    /// Group major cells by key
    (Key, "key", ["⌸", "⊔", "⊕", "/.", "⌸", "⌸"]),
    /// Apply a function to sliding windows
    (Stencil, "stencil", ["⌺", _, "⧈", _, _, "⌺"]),
    /// Transform, apply a function, and undo the transform
    (Under, "under", [_, "⌾", "⍜", "&.", "⍢", _]),
    // Functions and definitions
    /// Return the left argument
    (Left, "left", ["⊣", "⊣", _, "[", "⊣", "⊣"]),
    /// Return the right argument
    (Right, "right", ["⊢", "⊢", "∘", "]", "⊢", "⊢"]),
    /// The left argument of a definition
    (LeftArg, "leftArg", ["⍺", "𝕨", _, "x", "⍺", "⍺"]),
    /// The right argument of a definition
    (RightArg, "rightArg", ["⍵", "𝕩", _, "y", "⍵", "⍵"]),
    /// The left operand of a modifier definition
    (LeftOperand, "leftOperand", ["⍺⍺", "𝔽", _, "u", _, "⍶"]),
    /// The right operand of a modifier definition
    (RightOperand, "rightOperand", ["⍵⍵", "𝔾", _, "v", _, "⍹"]),
    /// Recursive reference to the current definition
    (SelfReference, "selfReference", ["∇", "𝕊", _, "$:", "∇", "∇"]),
    /// Open a definition body
    (OpenDefinition, "openDefinition", ["{", "{", _, "{{", "{", "{"]),
    /// Close a definition body
    (CloseDefinition, "closeDefinition", ["}", "}", _, "}}", "}", "}"]),
    /// Bind a name
    (Assign, "assign", ["←", "←", "←", "=:", "←", "←"]),
    /// Start a line comment
    (Comment, "comment", ["⍝", "#", "#", "NB.", "⍝", "⍝"]),
    // Evaluation and output
    /// Format a value as text
    (Format, "format", ["⍕", "•Fmt", _, "\":", "⍕", "⍕"]),
    /// Evaluate text as code
    (Execute, "execute", ["⍎", "•BQN", _, "\".", "⍎", "⍎"]),
    /// Print a value
    (Print, "print", ["⎕←", "•Show", "&p", "echo", _, _]),
);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn names_are_unique() {
        let mut seen = HashMap::new();
        for concept in Concept::all() {
            if let Some(prev) = seen.insert(concept.name(), concept) {
                panic!("{concept:?} and {prev:?} share the name {}", concept.name());
            }
            assert_eq!(Concept::from_name(concept.name()), Some(concept));
        }
    }

    #[test]
    fn tokens_are_unique_per_language() {
        for lang in Lang::all() {
            let mut seen = HashMap::new();
            for concept in Concept::all() {
                let Some(token) = concept.token(lang) else {
                    continue;
                };
                if let Some(prev) = seen.insert(token, concept) {
                    panic!("{lang} spells both {prev:?} and {concept:?} as {token:?}");
                }
            }
        }
    }

    #[test]
    fn tokens_are_well_formed() {
        for concept in Concept::all() {
            for lang in Lang::all() {
                let Some(token) = concept.token(lang) else {
                    continue;
                };
                assert!(!token.is_empty(), "{concept:?} has an empty {lang} token");
                assert!(
                    !token.starts_with(|c: char| c.is_ascii_digit()),
                    "{lang} token {token:?} starts with a digit"
                );
                assert_eq!(token.trim(), token, "{lang} token {token:?} has whitespace");
            }
        }
    }

    #[test]
    fn every_concept_is_translatable_somewhere() {
        for concept in Concept::all() {
            let present = concept.tokens().iter().flatten().count();
            assert!(present >= 2, "{concept:?} appears in fewer than 2 languages");
        }
    }

    #[test]
    fn lookup_by_token() {
        assert_eq!(Concept::from_token(Lang::J, "i."), Some(Concept::Iota));
        assert_eq!(Concept::from_token(Lang::Bqn, "/"), Some(Concept::Where));
        assert_eq!(Concept::from_token(Lang::Apl, "/"), Some(Concept::Reduce));
        assert_eq!(Concept::from_token(Lang::Uiua, "⍳"), None);
        assert_eq!(Concept::Where.token(Lang::Uiua), Some("⊚"));
    }
}
