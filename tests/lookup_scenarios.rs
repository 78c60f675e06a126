use std::fs;

use cedict_reader::{DICT_FILENAME, Dictionary, LoadPolicy, Loader, parse_line};
use tempfile::TempDir;

const RELEASE: &str = "\
# CC-CEDICT
# Community maintained free Chinese-English dictionary.
#! version=1
#! subversion=0
#! format=ts
#! charset=UTF-8
#! entries=6
中華 中华 [Zhong1 hua2] /China/Chinese nation/
中國 中国 [Zhong1 guo2] /China/
髮 发 [fa4] /hair/
發 发 [fa1] /to send out/to issue/
和 和 [he2] /and/together with/
# 和 和 [he2] /a commented-out duplicate/
和 和 [huo2] /to mix together/
";

fn load(source: &str) -> Dictionary {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DICT_FILENAME), source).unwrap();
    Loader::new(LoadPolicy::Strict).load_dir(dir.path()).unwrap()
}

#[test]
fn zhonghua_lookup_by_simplified() {
    let dict = load(RELEASE);
    let entry = dict.first_entry("中华").expect("中华 should be present");
    assert_eq!(entry.traditional(), "中華");
    assert_eq!(entry.pinyin(), "Zhong1 hua2");
    assert_eq!(entry.definitions(), ["China", "Chinese nation"]);
}

#[test]
fn every_entry_is_reachable_by_both_headwords() {
    let dict = load(RELEASE);
    for entry in dict.entries() {
        assert!(dict.contains(entry.simplified()));
        assert!(dict.contains(entry.traditional()));
        assert!(dict.all_entries(entry.simplified()).contains(&entry));
        assert!(dict.all_entries(entry.traditional()).contains(&entry));
    }
}

#[test]
fn shared_simplified_headword_keeps_source_order() {
    let dict = load(RELEASE);
    let found = dict.all_entries("发");
    let traditional: Vec<&str> = found.iter().map(|e| e.traditional()).collect();
    assert_eq!(traditional, ["髮", "發"]);
    assert_eq!(dict.first_entry("发").unwrap().traditional(), "髮");
    // Traditional forms stay distinct.
    assert_eq!(dict.all_entries("發").len(), 1);
}

#[test]
fn comments_never_become_entries() {
    let dict = load(RELEASE);
    assert_eq!(dict.len(), 6);
    let he: Vec<&str> = dict.all_entries("和").iter().map(|e| e.pinyin()).collect();
    assert_eq!(he, ["he2", "huo2"]);
    assert!(dict.entries().all(|e| !e.traditional().starts_with('#')));
}

#[test]
fn header_only_release_is_empty() {
    let dict = load("# CC-CEDICT\n#! version=1\n");
    assert!(dict.is_empty());
    for word in ["中华", "中華", "和"] {
        assert!(!dict.contains(word));
        assert!(dict.all_entries(word).is_empty());
        assert!(dict.first_entry(word).is_none());
    }
}

#[test]
fn first_entry_is_head_of_all_entries() {
    let dict = load(RELEASE);
    for word in ["中华", "发", "發", "和", "不在", ""] {
        let all = dict.all_entries(word);
        assert_eq!(dict.first_entry(word), all.first().copied());
        assert_eq!(dict.contains(word), !all.is_empty());
    }
}

#[test]
fn parsed_lines_match_store_contents() {
    let dict = load(RELEASE);
    let expected: Vec<_> = RELEASE
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| parse_line(l).unwrap())
        .collect();
    let actual: Vec<_> = dict.entries().cloned().collect();
    assert_eq!(actual, expected);
}

#[test]
fn store_is_shareable_across_threads() {
    let dict = std::sync::Arc::new(load(RELEASE));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dict = dict.clone();
            std::thread::spawn(move || dict.all_entries("发").len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
