// crates/core/src/emoji.rs
use unicode_segmentation::UnicodeSegmentation;

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Number of emoji in `text`.
///
/// Each extended grapheme cluster counts at most once, so ZWJ sequences,
/// flags and skin-tone variants are one emoji each.
#[must_use]
pub fn count(text: &str) -> usize {
    text.graphemes(true).filter(|g| is_emoji(g)).count()
}

fn is_emoji(grapheme: &str) -> bool {
    if emojis::get(grapheme).is_some() {
        return true;
    }
    // Text-presentation or over-qualified forms differ from the table only in VS16.
    if grapheme.contains(VARIATION_SELECTOR_16) {
        let bare: String = grapheme.chars().filter(|&c| c != VARIATION_SELECTOR_16).collect();
        return emojis::get(&bare).is_some();
    }
    let mut qualified = String::with_capacity(grapheme.len() + VARIATION_SELECTOR_16.len_utf8());
    qualified.push_str(grapheme);
    qualified.push(VARIATION_SELECTOR_16);
    emojis::get(&qualified).is_some()
}
