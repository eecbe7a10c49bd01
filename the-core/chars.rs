//! Codepoint classification and simple (length-preserving) case mapping.
//!
//! Everything here works on a single `char` at a time. The mappings never
//! expand: a codepoint whose full Unicode case mapping produces more than one
//! codepoint (`ß` → `SS`, `ŉ` → `ʼN`) is treated as having no simple mapping
//! and is returned unchanged.

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCase {
  Upper,
  Lower,
  /// Titlecase digraphs such as `ǅ`, which are neither upper nor lower.
  Title,
  Uncased,
}

pub fn categorize_case(ch: char) -> CharCase {
  match ch {
    c if c.is_lowercase() => CharCase::Lower,
    c if c.is_uppercase() => CharCase::Upper,
    c if get_general_category(c) == GeneralCategory::TitlecaseLetter => CharCase::Title,
    _ => CharCase::Uncased,
  }
}

/// Simple uppercase mapping of `ch`, or `ch` itself when there is none.
#[inline]
pub fn simple_uppercase(ch: char) -> char {
  let mut upper = ch.to_uppercase();
  match (upper.next(), upper.next()) {
    (Some(mapped), None) => mapped,
    _ => ch,
  }
}

/// Simple lowercase mapping of `ch`, or `ch` itself when there is none.
#[inline]
pub fn simple_lowercase(ch: char) -> char {
  let mut lower = ch.to_lowercase();
  match (lower.next(), lower.next()) {
    (Some(mapped), None) => mapped,
    _ => ch,
  }
}

/// Whether `ch` has a simple mapping to a different codepoint in either
/// direction.
#[inline]
pub fn char_has_case(ch: char) -> bool {
  simple_uppercase(ch) != ch || simple_lowercase(ch) != ch
}

/// Case-bearing or letter-classified codepoints: anything with a simple
/// mapping, any `L*` general category, and letter numbers (`Nl`).
#[inline]
pub fn char_is_alphabetic(ch: char) -> bool {
  if ch.is_ascii() {
    return ch.is_ascii_alphabetic();
  }

  char_has_case(ch)
    || matches!(
      get_general_category(ch),
      GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter
        | GeneralCategory::LetterNumber
    )
}
