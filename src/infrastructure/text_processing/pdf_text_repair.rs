use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Undoes layout artifacts typical of PDF text extraction: ligature glyphs are
/// folded with NFKC, words hyphenated across a line break are rejoined and
/// non-whitespace control characters become spaces.
pub fn repair_pdf_text(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let joined = HYPHEN_NEWLINE.replace_all(&folded, "$prefix$suffix");

    joined
        .chars()
        .map(|c| {
            if c.is_control() && !c.is_whitespace() {
                ' '
            } else {
                c
            }
        })
        .collect()
}
