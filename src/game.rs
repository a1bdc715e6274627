use log::{debug, trace};
use rand::Rng;

use crate::{
    common::{GameError, GuessError},
    config::{GameConfig, LOSS_RESULT, MAX_ROUNDS, WORD_LENGTH},
    dictionary::{is_valid_word, Dictionary},
    feedback::{score, Feedback, Verdict},
    selector::{draw_answer, rng_from_seed},
};

/// A scored, non-winning guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredGuess {
    pub guess: [char; WORD_LENGTH],
    pub feedback: Feedback,
}

impl ScoredGuess {
    /// Letters paired with their verdicts, in order.
    pub fn letters(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.guess.iter().copied().zip(self.feedback.verdicts().iter().copied())
    }
}

/// Current state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the next guess.
    AwaitingGuess,
    /// The last guess was scored and the board should be redrawn.
    Scored,
    /// Answer guessed at the given 0-based round.
    Won(usize),
    /// All rounds used without a match.
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Lost)
    }
}

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Guess matched the answer; carries the 0-based winning round.
    Won(usize),
    /// Guess was scored and more rounds remain.
    Scored(Feedback),
    /// Guess was scored and it used the last round.
    Lost(Feedback),
}

/// One game: dictionary, secret answer and the rounds played so far.
pub struct Session {
    dictionary: Dictionary,
    answer: String,
    round: usize,
    history: Vec<ScoredGuess>,
    status: GameStatus,
}

impl Session {
    /// Start a session with a known answer. The answer must be five lowercase
    /// letters; it is not required to be in `dictionary`, though it cannot be
    /// won otherwise.
    pub fn new(dictionary: Dictionary, answer: impl Into<String>) -> Result<Self, GameError> {
        let answer = answer.into();
        if !is_valid_word(&answer) {
            return Err(GameError::InvalidAnswer { answer });
        }
        Ok(Self {
            dictionary,
            answer,
            round: 0,
            history: Vec::with_capacity(MAX_ROUNDS),
            status: GameStatus::AwaitingGuess,
        })
    }

    /// Start a session with an answer drawn from `dictionary` using `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        dictionary: Dictionary,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let answer = draw_answer(&dictionary, rng).ok_or(GameError::EmptyDictionary)?;
        trace!("answer drawn: {}", answer);
        Self::new(dictionary, answer)
    }

    /// Load the dictionary named by `config` and draw the answer.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let dictionary = Dictionary::load(&config.dictionary_path, &config.output_path)?;
        let mut rng = rng_from_seed(config.seed);
        Self::with_rng(dictionary, &mut rng)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// 0-based index of the round being played.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Scored rounds, oldest first.
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// Terminal result: 0-based winning round, or `LOSS_RESULT` when lost.
    pub fn result(&self) -> Option<usize> {
        match self.status {
            GameStatus::Won(round) => Some(round),
            GameStatus::Lost => Some(LOSS_RESULT),
            _ => None,
        }
    }

    /// Leave the `Scored` state once the board has been redrawn.
    pub fn await_guess(&mut self) {
        if self.status == GameStatus::Scored {
            self.status = GameStatus::AwaitingGuess;
        }
    }

    /// Normalise and validate `input` without touching session state.
    pub fn validate(&self, input: &str) -> Result<String, GuessError> {
        let guess = input.trim().to_lowercase();
        let len = guess.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::WrongLength { len });
        }
        if !self.dictionary.contains(&guess) {
            return Err(GuessError::NotInDictionary { word: guess });
        }
        Ok(guess)
    }

    /// Submit a guess for the current round.
    ///
    /// Rejected guesses leave the session untouched. A match ends the session
    /// without scoring; anything else is scored and consumes the round.
    pub fn submit(&mut self, input: &str) -> Result<Outcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::SessionOver);
        }
        let guess = self.validate(input).inspect_err(|e| {
            debug!("round {}: rejected guess: {}", self.round + 1, e);
        })?;

        if guess == self.answer {
            self.status = GameStatus::Won(self.round);
            return Ok(Outcome::Won(self.round));
        }

        // dictionary entries and the answer are both valid words
        let feedback = score(&guess, &self.answer)
            .ok_or_else(|| GuessError::NotInDictionary { word: guess.clone() })?;
        let mut letters = ['\0'; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(guess.chars()) {
            *slot = ch;
        }
        self.history.push(ScoredGuess {
            guess: letters,
            feedback,
        });
        debug!("round {}: {} -> {}", self.round + 1, guess, feedback);
        self.round += 1;

        if self.round == MAX_ROUNDS {
            self.status = GameStatus::Lost;
            Ok(Outcome::Lost(feedback))
        } else {
            self.status = GameStatus::Scored;
            Ok(Outcome::Scored(feedback))
        }
    }
}
