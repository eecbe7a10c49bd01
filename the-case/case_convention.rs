//! Length-preserving case transforms.
//!
//! Every function maps `n` input codepoints to exactly `n` output codepoints,
//! using the simple mappings from [`the_core::chars`]. Nothing here looks at
//! locale or surrounding context.

use the_core::chars::{
  CharCase,
  categorize_case,
  char_is_alphabetic,
  simple_lowercase,
  simple_uppercase,
};

use crate::Tendril;

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.push(simple_uppercase(c)));
}

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.push(simple_lowercase(c)));
}

pub fn to_swap_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_swap_case_with(text, &mut res);
  res
}

/// Lowercase becomes uppercase and vice versa. Titlecase and uncased
/// codepoints are kept.
pub fn to_swap_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| {
    let swapped = match categorize_case(c) {
      CharCase::Lower => simple_uppercase(c),
      CharCase::Upper => simple_lowercase(c),
      CharCase::Title | CharCase::Uncased => c,
    };
    buf.push(swapped);
  });
}

pub fn to_title_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_title_case_with(text, &mut res);
  res
}

/// Uppercase the first letter of every word run and leave the rest alone.
///
/// A word run is a maximal span of alphabetic codepoints. Anything else
/// (apostrophes, digits, punctuation, caseless marks, whitespace) ends it, so
/// `he'll` becomes `He'Ll`.
pub fn to_title_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.fold(false, |in_word, c| {
    let alphabetic = char_is_alphabetic(c);
    buf.push(if alphabetic && !in_word {
      simple_uppercase(c)
    } else {
      c
    });
    alphabetic
  });
}

#[cfg(test)]
mod test {
  use quickcheck::{
    Arbitrary,
    Gen,
  };

  use super::*;

  /// Text drawn from characters whose simple mappings round-trip, mixed with
  /// caseless filler.
  #[derive(Debug, Clone)]
  struct Bicameral(String);

  const BICAMERAL: &[char] = &[
    'a', 'b', 'q', 'z', 'A', 'B', 'Q', 'Z', 'à', 'é', 'ö', 'À', 'É', 'Ö', 'п', 'р', 'и', 'в', 'е',
    'т', 'П', 'Р', 'И', 'В', 'Е', 'Т', 'α', 'β', 'ω', 'Α', 'Β', 'Ω', '0', '7', ' ', ',', '!', '\'',
    '千', '里', 'ǅ',
  ];

  impl Arbitrary for Bicameral {
    fn arbitrary(g: &mut Gen) -> Self {
      let len = usize::arbitrary(g) % (g.size() + 1);
      let text = (0..len)
        .filter_map(|_| g.choose(BICAMERAL).copied())
        .collect();
      Bicameral(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
      Box::new(self.0.shrink().map(Bicameral))
    }
  }

  #[derive(Debug, Clone)]
  struct Caseless(String);

  const CASELESS: &[char] = &[
    '千', '里', '之', '行', '﹐', '始', '于', '足', '下', '。', '1', '9', ' ', '-', '\'', '\n', '😀',
  ];

  impl Arbitrary for Caseless {
    fn arbitrary(g: &mut Gen) -> Self {
      let len = usize::arbitrary(g) % (g.size() + 1);
      let text = (0..len).filter_map(|_| g.choose(CASELESS).copied()).collect();
      Caseless(text)
    }
  }

  /// Mixed text that includes caseless combining marks and case-bearing
  /// symbols, both of which sit on the edge of what counts as a word.
  #[derive(Debug, Clone)]
  struct WordEdges(String);

  const WORD_EDGES: &[char] = &[
    'a', 'k', 'Z', 'é', 'ж', 'Ω', 'ǅ', 'ǆ', '千', 'Ⅻ', 'ⅻ', 'ⓐ', 'ⓩ', 'Ⓑ', '\u{0301}', '\u{0308}',
    '\u{20DD}', '\u{0345}', '1', ' ', '\'', '-', '﹐',
  ];

  impl Arbitrary for WordEdges {
    fn arbitrary(g: &mut Gen) -> Self {
      let len = usize::arbitrary(g) % (g.size() + 1);
      let text = (0..len)
        .filter_map(|_| g.choose(WORD_EDGES).copied())
        .collect();
      WordEdges(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
      Box::new(self.0.shrink().map(WordEdges))
    }
  }

  fn word_starts(text: &str) -> Vec<bool> {
    let mut prev = None;
    text
      .chars()
      .map(|c| {
        let start = char_is_alphabetic(c) && !prev.is_some_and(char_is_alphabetic);
        prev = Some(c);
        start
      })
      .collect()
  }

  quickcheck::quickcheck! {
      fn upper_is_idempotent(s: String) -> bool {
          let once = to_upper_case(s.chars());
          to_upper_case(once.chars()) == once
      }

      fn lower_is_idempotent(s: String) -> bool {
          let once = to_lower_case(s.chars());
          to_lower_case(once.chars()) == once
      }

      fn swap_is_involution(s: Bicameral) -> bool {
          let swapped = to_swap_case(s.0.chars());
          to_swap_case(swapped.chars()).as_str() == s.0
      }

      fn transforms_preserve_length(s: String) -> bool {
          let len = s.chars().count();
          to_upper_case(s.chars()).chars().count() == len
              && to_lower_case(s.chars()).chars().count() == len
              && to_swap_case(s.chars()).chars().count() == len
              && to_title_case(s.chars()).chars().count() == len
      }

      fn caseless_text_is_unchanged(s: Caseless) -> bool {
          to_upper_case(s.0.chars()).as_str() == s.0
              && to_lower_case(s.0.chars()).as_str() == s.0
              && to_swap_case(s.0.chars()).as_str() == s.0
              && to_title_case(s.0.chars()).as_str() == s.0
      }

      fn title_only_touches_word_starts(s: String) -> bool {
          let titled = to_title_case(s.chars());
          s.chars()
              .zip(titled.chars())
              .zip(word_starts(&s))
              .all(|((before, after), start)| before == after || start)
      }

      fn title_uppercases_every_word_start(s: WordEdges) -> bool {
          let titled = to_title_case(s.0.chars());
          s.0.chars()
              .zip(titled.chars())
              .zip(word_starts(&s.0))
              .all(|((before, after), start)| !start || after == simple_uppercase(before))
      }

      fn title_matches_word_starts_exactly(s: String) -> bool {
          let titled = to_title_case(s.chars());
          s.chars()
              .zip(titled.chars())
              .zip(word_starts(&s))
              .all(|((before, after), start)| {
                  after == if start { simple_uppercase(before) } else { before }
              })
      }
  }

  #[test]
  fn test_to_upper_case() {
    assert_eq!(to_upper_case("hello".chars()).as_str(), "HELLO");
    assert_eq!(to_upper_case("Hello World".chars()).as_str(), "HELLO WORLD");
    assert_eq!(to_upper_case("ALREADY".chars()).as_str(), "ALREADY");
    assert_eq!(to_upper_case("".chars()).as_str(), "");
    assert_eq!(to_upper_case("café".chars()).as_str(), "CAFÉ");
    assert_eq!(
      to_upper_case("чем больше законов".chars()).as_str(),
      "ЧЕМ БОЛЬШЕ ЗАКОНОВ"
    );
    // no expansion to "STRASSE"
    assert_eq!(to_upper_case("straße".chars()).as_str(), "STRAßE");
  }

  #[test]
  fn test_to_lower_case() {
    assert_eq!(to_lower_case("HELLO".chars()).as_str(), "hello");
    assert_eq!(to_lower_case("Hello World".chars()).as_str(), "hello world");
    assert_eq!(to_lower_case("already".chars()).as_str(), "already");
    assert_eq!(to_lower_case("".chars()).as_str(), "");
    assert_eq!(to_lower_case("CAFÉ".chars()).as_str(), "café");
    assert_eq!(to_lower_case("İ".chars()).as_str(), "İ");
  }

  #[test]
  fn test_to_swap_case() {
    assert_eq!(to_swap_case("Hello, World!".chars()).as_str(), "hELLO, wORLD!");
    assert_eq!(to_swap_case("ПрИвЕт, МиР".chars()).as_str(), "пРиВеТ, мИр");
    assert_eq!(to_swap_case("".chars()).as_str(), "");
    assert_eq!(to_swap_case("ǅ1".chars()).as_str(), "ǅ1");
    assert_eq!(to_swap_case("ß".chars()).as_str(), "ß");
  }

  #[test]
  fn test_to_title_case() {
    assert_eq!(
      to_title_case("he'll be warm for a minute".chars()).as_str(),
      "He'Ll Be Warm For A Minute"
    );
    assert_eq!(to_title_case("ничего себе!".chars()).as_str(), "Ничего Себе!");
    assert_eq!(to_title_case("".chars()).as_str(), "");
    // interiors are not lowercased
    assert_eq!(to_title_case("mIxEd CASE".chars()).as_str(), "MIxEd CASE");
    // digits split words
    assert_eq!(to_title_case("a1b 2c".chars()).as_str(), "A1B 2C");
    assert_eq!(to_title_case("千里之行﹐始于足下".chars()).as_str(), "千里之行﹐始于足下");
  }

  #[test]
  fn test_title_case_combining_marks() {
    // caseless marks are not alphabetic, so the letter after one starts a word
    assert_eq!(to_title_case("a\u{301}b".chars()).as_str(), "A\u{301}B");
    assert_eq!(
      to_title_case("cafe\u{301}s ete\u{301}".chars()).as_str(),
      "Cafe\u{301}S Ete\u{301}"
    );
    assert_eq!(to_title_case("\u{301}ab".chars()).as_str(), "\u{301}Ab");
  }

  #[test]
  fn test_title_case_case_bearing_symbols() {
    assert_eq!(to_title_case("\u{24D0}\u{24D1} x".chars()).as_str(), "\u{24B6}\u{24D1} X");
    assert_eq!(to_title_case("ⓩz ⓐ".chars()).as_str(), "Ⓩz Ⓐ");
  }

  #[test]
  fn test_with_appends() {
    let mut buf = Tendril::from("> ");
    to_upper_case_with("ok".chars(), &mut buf);
    assert_eq!(buf.as_str(), "> OK");
  }
}
