use std::path::PathBuf;

/// Number of letters in every guess and answer.
pub const WORD_LENGTH: usize = 5;
/// Rounds available before the session is lost.
pub const MAX_ROUNDS: usize = 6;
/// Result reported for an exhausted session (one past the last round index).
pub const LOSS_RESULT: usize = MAX_ROUNDS + 1;

/// Where the filtered word list is written unless overridden.
pub const DEFAULT_OUTPUT_PATH: &str = "dictionaries/valid_words.txt";
/// Word list read by the binary when no `--dictionary` is given.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionaries/words.txt";

/// Settings needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Newline-delimited source word list.
    pub dictionary_path: PathBuf,
    /// Fixed seed for a reproducible answer; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Destination of the filtered word list.
    pub output_path: PathBuf,
}

impl GameConfig {
    /// Config for `dictionary_path` with no seed and the default output path.
    pub fn new(dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            seed: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY_PATH)
    }
}
