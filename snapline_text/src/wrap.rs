// Copyright 2025 the Snapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy word wrapping shared by measurers that only know single-line widths.

extern crate alloc;

use alloc::vec::Vec;

/// Splits `text` into lines no wider than `max_width`.
///
/// `width_of` returns the width of a single line of text. Paragraphs are split
/// on `\n`, then words (separated by whitespace) are packed greedily. A word
/// that is wider than `max_width` on its own still gets its own line; words are
/// never broken. Every paragraph yields at least one (possibly empty) line, so
/// the result is never empty.
///
/// Returned lines borrow from `text` and have their surrounding whitespace
/// trimmed.
pub fn wrap_lines(text: &str, max_width: f64, mut width_of: impl FnMut(&str) -> f64) -> Vec<&str> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, &mut width_of, &mut lines);
    }
    lines
}

fn wrap_paragraph<'a>(
    paragraph: &'a str,
    max_width: f64,
    width_of: &mut impl FnMut(&str) -> f64,
    lines: &mut Vec<&'a str>,
) {
    let mut current: Option<(usize, usize)> = None;
    for (start, end) in (Words {
        text: paragraph,
        pos: 0,
    }) {
        current = match current {
            None => Some((start, end)),
            Some((line_start, line_end)) => {
                if width_of(&paragraph[line_start..end]) <= max_width {
                    Some((line_start, end))
                } else {
                    lines.push(&paragraph[line_start..line_end]);
                    Some((start, end))
                }
            }
        };
    }
    match current {
        Some((start, end)) => lines.push(&paragraph[start..end]),
        None => lines.push(""),
    }
}

/// Byte ranges of whitespace-separated words.
struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Words<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some((start, start + len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_lines("Tap to edit", 100.0, chars), ["Tap to edit"]);
    }

    #[test]
    fn greedy_packing_breaks_between_words() {
        let lines = wrap_lines("the quick brown fox", 10.0, chars);
        assert_eq!(lines, ["the quick", "brown fox"]);
    }

    #[test]
    fn long_words_are_not_split() {
        let lines = wrap_lines("a supercalifragilistic b", 5.0, chars);
        assert_eq!(lines, ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn explicit_newlines_start_new_paragraphs() {
        let lines = wrap_lines("one\n\n  two  ", 100.0, chars);
        assert_eq!(lines, ["one", "", "two"]);
    }

    #[test]
    fn unbounded_width_never_wraps() {
        let lines = wrap_lines("a b c d e f", f64::INFINITY, chars);
        assert_eq!(lines, ["a b c d e f"]);
    }
}
