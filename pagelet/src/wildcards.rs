//! The language wildcard lookup table.
//!
//! Each judge language maps to the source-file wildcards that the
//! plagiarism-detection submission should collect.
//! The table is read-only configuration;
//! behaviors receive a reference instead of reaching for a global,
//! so tests can supply their own entries.

/// A read-only mapping from language identifier to wildcard patterns.
pub struct WildcardTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl WildcardTable {
    /// Wrap a static entry list.
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// The ordered wildcard patterns for the language.
    ///
    /// An unrecognized language yields an empty slice.
    pub fn wildcards(&self, lang: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(name, _)| *name == lang)
            .map(|(_, wildcards)| *wildcards)
            .unwrap_or(&[])
    }

    /// The wildcard patterns joined with `", "`.
    ///
    /// An unrecognized language yields the empty string.
    pub fn joined_wildcards(&self, lang: &str) -> String {
        self.wildcards(lang).join(", ")
    }

    /// The file name a plain-text submission should be stored under.
    ///
    /// Derived from the first wildcard with `*` replaced by `main`;
    /// `main.txt` when the language has no entry.
    pub fn primary_file_name(&self, lang: &str) -> String {
        match self.wildcards(lang).first() {
            Some(wildcard) => wildcard.replace('*', "main"),
            None => "main.txt".to_string(),
        }
    }
}

/// The builtin table covering the judge's language identifiers.
pub const LANG_WILDCARDS: WildcardTable = WildcardTable::new(&[
    ("c", &["*.c", "*.h"]),
    ("cc", &["*.cc", "*.cpp", "*.h"]),
    ("cpp", &["*.c", "*.h", "*.cpp"]),
    ("cs", &["*.cs"]),
    ("go", &["*.go"]),
    ("hs", &["*.hs"]),
    ("java", &["*.java"]),
    ("js", &["*.js"]),
    ("pas", &["*.pas"]),
    ("php", &["*.php"]),
    ("py", &["*.py"]),
    ("py3", &["*.py"]),
    ("rs", &["*.rs"]),
]);
