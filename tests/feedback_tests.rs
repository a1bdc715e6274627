use proptest::prelude::*;
use wordle::{is_valid_word, score, Feedback, Verdict, WORD_LENGTH};

use Verdict::{Absent as A, Correct as C, Present as P};

#[test]
fn test_duplicate_letters_reversed_word() {
    assert_eq!(score("olleh", "hello"), Some(Feedback([P, P, C, P, P])));
}

#[test]
fn test_exact_match_before_misplaced() {
    // answer has one 'l' left after the two exact 'a'/'p' matches
    assert_eq!(score("alpha", "apple"), Some(Feedback([C, P, C, A, A])));
}

#[test]
fn test_repeated_guess_letter_limited_by_answer() {
    // only one 'e' in the answer, and it is matched exactly
    assert_eq!(score("geese", "those"), Some(Feedback([A, A, A, C, C])));
    // one 'l' in the answer: the first misplaced 'l' takes it
    assert_eq!(score("llama", "world"), Some(Feedback([P, A, A, A, A])));
}

#[test]
fn test_all_absent_and_all_correct() {
    assert_eq!(score("crane", "moist"), Some(Feedback([A; WORD_LENGTH])));
    let fb = score("moist", "moist").unwrap();
    assert!(fb.is_win());
    assert_eq!(fb.values(), [2; WORD_LENGTH]);
    assert_eq!(fb.to_string(), "22222");
}

#[test]
fn test_verdict_value_mapping() {
    for v in [A, P, C] {
        assert_eq!(Verdict::from_value(v.value()), Some(v));
    }
    assert_eq!(Verdict::from_value(3), None);
    assert_eq!(score("olleh", "hello").unwrap().to_string(), "11211");
}

#[test]
fn test_malformed_words_are_not_scored() {
    assert_eq!(score("apple", "app"), None);
    assert_eq!(score("app", "apple"), None);
    assert_eq!(score("apple", "CRANE"), None);
    assert_eq!(score("café!", "apple"), None);
    assert_eq!(score("ab1de", "apple"), None);
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{5}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn same_word_is_all_correct(w in word()) {
        prop_assert!(score(&w, &w).unwrap().is_win());
    }

    #[test]
    fn values_are_tri_state(guess in word(), answer in word()) {
        let fb = score(&guess, &answer).unwrap();
        prop_assert_eq!(fb.verdicts().len(), WORD_LENGTH);
        prop_assert!(fb.values().iter().all(|v| *v <= 2));
    }

    #[test]
    fn exact_positions_are_correct(guess in word(), answer in word()) {
        let fb = score(&guess, &answer).unwrap();
        for (i, (g, a)) in guess.bytes().zip(answer.bytes()).enumerate() {
            prop_assert_eq!(g == a, fb.verdicts()[i] == Verdict::Correct);
        }
    }

    #[test]
    fn letter_counts_are_conserved(guess in word(), answer in word()) {
        let fb = score(&guess, &answer).unwrap();
        for letter in b'a'..=b'z' {
            let in_answer = answer.bytes().filter(|b| *b == letter).count();
            let credited = guess
                .bytes()
                .zip(fb.verdicts())
                .filter(|(g, v)| *g == letter && **v != Verdict::Absent)
                .count();
            prop_assert!(credited <= in_answer);
        }
    }

    #[test]
    fn non_letter_input_never_panics(guess in "\\PC{0,8}", answer in word()) {
        let fb = score(&guess, &answer);
        prop_assert_eq!(fb.is_some(), is_valid_word(&guess));
    }

    #[test]
    fn win_only_on_equal_words(guess in word(), answer in word()) {
        prop_assert_eq!(score(&guess, &answer).unwrap().is_win(), guess == answer);
    }
}
