use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One parsed CEDICT line.
///
/// Entries are only produced by the line parser, so every instance has both
/// headwords and at least one definition. Fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    traditional: String,
    simplified: String,
    pinyin: String,
    definitions: Vec<String>,
}

impl DictEntry {
    pub(crate) fn new(
        traditional: String,
        simplified: String,
        pinyin: String,
        definitions: Vec<String>,
    ) -> Self {
        Self {
            traditional,
            simplified,
            pinyin,
            definitions,
        }
    }

    pub fn traditional(&self) -> &str {
        &self.traditional
    }

    pub fn simplified(&self) -> &str {
        &self.simplified
    }

    pub fn pinyin(&self) -> &str {
        &self.pinyin
    }

    /// Glosses in source order, primary sense first.
    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    /// True if `word` is exactly either headword.
    pub fn matches(&self, word: &str) -> bool {
        self.simplified == word || self.traditional == word
    }
}

/// What to do with a line the parser rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Skip the line and count it.
    #[default]
    Lenient,
    /// Abort the load on the first malformed line.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    pub entries: usize,
    pub skipped_lines: usize,
    pub elapsed: Duration,
}
