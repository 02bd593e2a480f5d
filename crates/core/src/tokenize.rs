// crates/core/src/tokenize.rs
//! Word splitting for extracted document text.

/// Line break character stripped from plain text and collapsed by the tokenizer.
pub const LINE_BREAK: char = '\n';

/// Punctuation rewrites applied before splitting, in application order.
/// `None` deletes the character, fusing its neighbours.
const REPLACEMENTS: &[(char, Option<char>)] = &[
    (',', Some(' ')),
    ('.', Some(' ')),
    (':', Some(' ')),
    ('#', Some(' ')),
    ('>', Some(' ')),
    ('<', Some(' ')),
    ('(', Some(' ')),
    (')', Some(' ')),
    ('[', Some(' ')),
    (']', Some(' ')),
    ('\\', Some(' ')),
    ('|', Some(' ')),
    ('/', Some(' ')),
    ('?', Some(' ')),
    ('\u{0B}', Some(' ')),
    ('\u{2014}', Some(' ')),
    ('\u{2013}', None),
    ('-', None),
    ('=', Some(' ')),
    ('\u{201D}', Some(' ')),
    ('\u{201C}', Some(' ')),
    ('!', Some(' ')),
    ('%', Some(' ')),
    ('\t', Some(' ')),
];

/// Splits raw document text into words.
///
/// Tokens made only of ASCII punctuation or whitespace are dropped. Unicode
/// punctuation outside ASCII is not considered punctuation here, so a lone
/// `«` survives as a word.
#[must_use]
pub fn words(raw: &str) -> Vec<String> {
    let collapsed = collapse_line_breaks(raw);
    let trimmed = collapsed.trim_matches(is_py_whitespace);
    let rewritten = replace_punctuation(trimmed);

    rewritten
        .split(' ')
        .filter(|token| is_word(token))
        .map(str::to_owned)
        .collect()
}

/// Removes every line break from `raw`.
#[must_use]
pub fn plain_text(raw: &str) -> String {
    raw.chars().filter(|&c| c != LINE_BREAK).collect()
}

fn collapse_line_breaks(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_break = false;
    for c in raw.chars() {
        if c == LINE_BREAK {
            if !in_break {
                out.push(' ');
            }
            in_break = true;
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

// Every rewrite maps one listed char to a space or nothing, and neither can
// form another listed char, so one pass gives the same result as applying the
// table entry by entry.
fn replace_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, Some(to))) => out.push(*to),
            Some((_, None)) => {}
            None => out.push(c),
        }
    }
    out
}

fn is_word(token: &str) -> bool {
    token.chars().any(|c| !c.is_ascii_punctuation()) && !token.chars().all(is_py_whitespace)
}

// Unicode whitespace plus the ASCII information separators U+001C..U+001F.
fn is_py_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_simple_sentence() {
        assert_eq!(words("Hello world\n"), vec!["Hello", "world"]);
    }

    #[test]
    fn dashes_fuse_and_punctuation_splits() {
        assert_eq!(words("Hi, \u{2014} there-you!"), vec!["Hi", "thereyou"]);
        assert_eq!(words("well\u{2013}known"), vec!["wellknown"]);
    }

    #[test]
    fn line_break_runs_become_one_separator() {
        assert_eq!(words("a\n\n\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(collapse_line_breaks("a\n\n\nb"), "a b");
    }

    #[test]
    fn drops_pure_ascii_punctuation_tokens() {
        assert_eq!(words("* & ; word ' \"quoted\""), vec!["word", "\"quoted\""]);
    }

    #[test]
    fn keeps_mixed_and_non_ascii_punctuation_tokens() {
        assert_eq!(words("don't"), vec!["don't"]);
        assert_eq!(words("\u{00AB} x \u{00BB}"), vec!["\u{00AB}", "x", "\u{00BB}"]);
    }

    #[test]
    fn whitespace_only_tokens_are_dropped() {
        assert_eq!(words("a \u{3000} b"), vec!["a", "b"]);
        assert!(words("   \n\n  ").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn tabs_and_vertical_tabs_split() {
        assert_eq!(words("a\tb\u{0B}c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn plain_text_strips_only_line_feeds() {
        assert_eq!(plain_text("a\nb\r\n c"), "ab\r c");
    }
}
