use std::collections::HashMap;

use crate::data::models::{DictEntry, LoadStats};

/// Read-only CEDICT store.
///
/// Built once from the loader's output. Entries keep source-file order and
/// lookups are exact, case-sensitive matches against either headword.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    // headword -> ascending positions in `entries`
    index: HashMap<String, Vec<usize>>,
    stats: LoadStats,
}

impl Dictionary {
    pub fn from_entries(entries: Vec<DictEntry>) -> Self {
        let stats = LoadStats {
            entries: entries.len(),
            ..LoadStats::default()
        };
        Self::with_stats(entries, stats)
    }

    pub(crate) fn with_stats(entries: Vec<DictEntry>, stats: LoadStats) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::with_capacity(entries.len() * 2);
        for (position, entry) in entries.iter().enumerate() {
            index
                .entry(entry.traditional().to_string())
                .or_default()
                .push(position);
            if entry.simplified() != entry.traditional() {
                index
                    .entry(entry.simplified().to_string())
                    .or_default()
                    .push(position);
            }
        }

        Self {
            entries,
            index,
            stats,
        }
    }

    /// First entry in load order whose simplified or traditional form is `word`.
    pub fn first_entry(&self, word: &str) -> Option<&DictEntry> {
        self.positions(word)
            .first()
            .map(|&position| &self.entries[position])
    }

    /// Every entry matching `word`, in load order. Empty when nothing matches.
    pub fn all_entries(&self, word: &str) -> Vec<&DictEntry> {
        self.positions(word)
            .iter()
            .map(|&position| &self.entries[position])
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        !self.positions(word).is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &DictEntry> {
        self.entries.iter()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    fn positions(&self, word: &str) -> &[usize] {
        self.index.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn dictionary(lines: &[&str]) -> Dictionary {
        Dictionary::from_entries(lines.iter().map(|l| parse_line(l).unwrap()).collect())
    }

    // Reference answer: the plain linear scan the index must agree with.
    fn scan<'a>(dict: &'a Dictionary, word: &str) -> Vec<&'a DictEntry> {
        dict.entries().filter(|e| e.matches(word)).collect()
    }

    #[test]
    fn finds_by_either_script() {
        let dict = dictionary(&["中華 中华 [Zhong1 hua2] /China/Chinese nation/"]);
        let by_simplified = dict.first_entry("中华").unwrap();
        assert_eq!(by_simplified.traditional(), "中華");
        assert_eq!(by_simplified.pinyin(), "Zhong1 hua2");
        assert_eq!(by_simplified.definitions(), ["China", "Chinese nation"]);
        assert_eq!(dict.first_entry("中華"), Some(by_simplified));
        assert!(dict.contains("中华"));
        assert!(dict.contains("中華"));
    }

    #[test]
    fn empty_store_finds_nothing() {
        let dict = Dictionary::default();
        for word in ["中华", "", "China"] {
            assert!(!dict.contains(word));
            assert!(dict.all_entries(word).is_empty());
            assert!(dict.first_entry(word).is_none());
        }
        assert!(dict.is_empty());
    }

    #[test]
    fn shared_headword_returns_all_in_order() {
        let dict = dictionary(&[
            "得 得 [de2] /to obtain/",
            "中國 中国 [Zhong1 guo2] /China/",
            "得 得 [de5] /structural particle/",
            "得 得 [dei3] /to have to/",
        ]);
        let found = dict.all_entries("得");
        let pinyin: Vec<&str> = found.iter().map(|e| e.pinyin()).collect();
        assert_eq!(pinyin, ["de2", "de5", "dei3"]);
        assert_eq!(dict.first_entry("得").unwrap().pinyin(), "de2");
    }

    #[test]
    fn identical_headwords_are_reported_once() {
        let dict = dictionary(&["和 和 [he2] /and/"]);
        assert_eq!(dict.all_entries("和").len(), 1);
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let dict = dictionary(&[
            "中國 中国 [Zhong1 guo2] /China/",
            "DNA DNA [D N A] /DNA/",
        ]);
        assert!(!dict.contains("中"));
        assert!(!dict.contains("中国人"));
        assert!(!dict.contains("dna"));
        assert!(!dict.contains("China"));
        assert!(dict.contains("DNA"));
    }

    #[test]
    fn index_agrees_with_linear_scan() {
        let dict = dictionary(&[
            "發 发 [fa1] /to send out/",
            "髮 发 [fa4] /hair/",
            "發 發 [fa1] /variant/",
            "中國 中国 [Zhong1 guo2] /China/",
        ]);
        for word in ["发", "發", "髮", "中国", "中國", "国", ""] {
            let indexed = dict.all_entries(word);
            assert_eq!(indexed, scan(&dict, word), "word {word:?}");
            assert_eq!(dict.first_entry(word), indexed.first().copied());
            assert_eq!(dict.contains(word), !indexed.is_empty());
        }
    }

    #[test]
    fn from_entries_records_count() {
        let dict = dictionary(&["中國 中国 [Zhong1 guo2] /China/"]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.stats().entries, 1);
        assert_eq!(dict.stats().skipped_lines, 0);
    }
}
