use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;
use wordle::{is_valid_word, Dictionary, DictionaryError};

#[test]
fn test_filter_rejects_acronyms_proper_nouns_and_accents() {
    let dict = Dictionary::from_words([
        "apple", "NASA", "Paris", "café", "cafés", "zebra", "toolong", "abc", "ab-cd", "crane",
    ]);
    assert_eq!(dict.words(), ["apple", "zebra", "crane"]);
    assert!(dict.contains("zebra"));
    assert!(!dict.contains("Paris"));
}

#[test]
fn test_load_writes_filtered_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("words.txt");
    let output = dir.path().join("nested/valid_words.txt");
    fs::write(&source, "apple\r\nAlamo\nbread\n  crane  \nsmörs\n\nbread\n").unwrap();

    let dict = Dictionary::load(&source, &output).unwrap();
    assert_eq!(dict.words(), ["apple", "bread", "crane", "bread"]);
    assert_eq!(dict.len(), 4);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "apple\nbread\ncrane\nbread"
    );
}

#[test]
fn test_load_overwrites_previous_output() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("words.txt");
    let output = dir.path().join("valid_words.txt");
    fs::write(&output, "stale\ncontent\nfrom\nlast\nrun\n").unwrap();
    fs::write(&source, "pious\n").unwrap();

    Dictionary::load(&source, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "pious");
}

#[test]
fn test_missing_source_is_read_error() {
    let dir = tempdir().unwrap();
    let err = Dictionary::load(&dir.path().join("absent.txt"), &dir.path().join("out.txt"))
        .unwrap_err();
    assert!(matches!(err, DictionaryError::Read { .. }));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn test_no_valid_words_is_empty_error() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("words.txt");
    fs::write(&source, "NASA\nhello world\n").unwrap();
    let err = Dictionary::load(&source, &dir.path().join("out.txt")).unwrap_err();
    assert!(matches!(err, DictionaryError::Empty { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn filtered_words_are_five_lowercase_letters(
        words in prop::collection::vec("\\PC{0,7}", 0..40)
    ) {
        let dict = Dictionary::from_words(&words);
        for w in dict.words() {
            prop_assert_eq!(w.len(), 5);
            prop_assert!(w.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn valid_words_always_kept(words in prop::collection::vec("[a-z]{5}", 1..20)) {
        let dict = Dictionary::from_words(&words);
        prop_assert_eq!(dict.words(), words.as_slice());
    }

    #[test]
    fn uppercase_letter_rejects_word(w in "[a-z]{4}", upper in "[A-Z]", pos in 0usize..5) {
        let mut word = w.clone();
        word.insert_str(pos, &upper);
        prop_assert!(!is_valid_word(&word));
    }
}
