use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,!?])").unwrap());
static PUNCTUATION_BEFORE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,!?])(\w)").unwrap());

/// Collapses whitespace and fixes spacing around `.`, `,`, `!` and `?`.
///
/// The output never contains two consecutive whitespace characters, never has
/// whitespace directly before one of those punctuation marks, and is a fixed
/// point: normalizing it again returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    /// Insert a space after punctuation glued to the next word (`a,b` becomes
    /// `a, b`). Off by default since it also splits decimals like `3.14`.
    pub punctuation_spacing: bool,
}

impl TextNormalizer {
    pub fn new(punctuation_spacing: bool) -> Self {
        Self {
            punctuation_spacing,
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
        let tightened = SPACE_BEFORE_PUNCTUATION.replace_all(collapsed.trim(), "${1}");

        if self.punctuation_spacing {
            PUNCTUATION_BEFORE_WORD
                .replace_all(&tightened, "${1} ${2}")
                .into_owned()
        } else {
            tightened.into_owned()
        }
    }
}

/// Normalizes with default options.
pub fn normalize_text(raw: &str) -> String {
    TextNormalizer::default().normalize(raw)
}
