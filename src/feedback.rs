//! Per-letter scoring of a guess against the answer.

use core::fmt;

use crate::config::WORD_LENGTH;
use crate::dictionary::is_valid_word;

/// Classification of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter does not occur in the answer, or all its occurrences are used up.
    Absent,
    /// Letter occurs in the answer at a different position.
    Present,
    /// Letter matches the answer at this position.
    Correct,
}

impl Verdict {
    /// Numeric form: absent=0, present=1, correct=2.
    pub fn value(self) -> u8 {
        match self {
            Verdict::Absent => 0,
            Verdict::Present => 1,
            Verdict::Correct => 2,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Verdict::Absent),
            1 => Some(Verdict::Present),
            2 => Some(Verdict::Correct),
            _ => None,
        }
    }
}

/// Verdicts for one guess, aligned with its letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(pub [Verdict; WORD_LENGTH]);

impl Feedback {
    pub fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    pub fn is_win(&self) -> bool {
        self.0.iter().all(|v| *v == Verdict::Correct)
    }

    pub fn values(&self) -> [u8; WORD_LENGTH] {
        self.0.map(Verdict::value)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.0 {
            write!(f, "{}", v.value())?;
        }
        Ok(())
    }
}

/// Score `guess` against `answer`.
///
/// Exact matches are marked first; each remaining answer letter can then
/// satisfy at most one misplaced guess letter, left to right. Returns `None`
/// unless both words are five ASCII lowercase letters.
pub fn score(guess: &str, answer: &str) -> Option<Feedback> {
    if !is_valid_word(guess) || !is_valid_word(answer) {
        return None;
    }
    let guess = guess.as_bytes();
    let answer = answer.as_bytes();

    let mut verdicts = [Verdict::Absent; WORD_LENGTH];
    let mut leftover = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            verdicts[i] = Verdict::Correct;
        } else {
            leftover[(answer[i] - b'a') as usize] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        let slot = &mut leftover[(guess[i] - b'a') as usize];
        if *slot > 0 {
            verdicts[i] = Verdict::Present;
            *slot -= 1;
        }
    }

    Some(Feedback(verdicts))
}
