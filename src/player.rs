use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of guesses for a session.
pub trait Player {
    /// Next raw guess, or `None` when no more input is available.
    fn next_guess(&mut self) -> io::Result<Option<String>>;
}

/// Reads one guess per line from a buffered reader (stdin in the binary).
pub struct CliPlayer<R> {
    input: R,
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn next_guess(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of guesses, then reports end of input.
pub struct ScriptedPlayer {
    guesses: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guesses: guesses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_guess(&mut self) -> io::Result<Option<String>> {
        Ok(self.guesses.pop_front())
    }
}
