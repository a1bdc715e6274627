//! Board rendering.
//!
//! Game logic only talks to the [`Display`] trait. [`TerminalDisplay`] clears
//! the screen and underlines correct letters with crossterm; [`PlainDisplay`]
//! writes escape-free text to any writer and marks correct letters as `[X]`.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

use crate::{feedback::Verdict, game::ScoredGuess};

/// Output side of a session.
///
/// `render_board` is the only call that depends on game state. Title,
/// messages and prompts go through the same trait because each front end
/// owns its output stream and screen layout; a full-screen renderer must
/// know about every line it prints.
pub trait Display {
    /// Redraw the whole board from the scored rounds.
    fn render_board(&mut self, rounds: &[ScoredGuess]) -> io::Result<()>;

    /// Start from an empty screen with the game title.
    fn show_title(&mut self) -> io::Result<()>;

    /// Print a one-line message (rejections, final result).
    fn message(&mut self, text: &str) -> io::Result<()>;

    /// Ask for the guess of the 1-based `round`.
    fn prompt(&mut self, round: usize) -> io::Result<()>;
}

/// Plain-text form of one letter: lowercase, uppercase or `[X]`.
pub fn plain_letter(letter: char, verdict: Verdict) -> String {
    match verdict {
        Verdict::Absent => letter.to_ascii_lowercase().to_string(),
        Verdict::Present => letter.to_ascii_uppercase().to_string(),
        Verdict::Correct => format!("[{}]", letter.to_ascii_uppercase()),
    }
}

/// Plain-text board line for the 1-based `round`.
pub fn plain_row(round: usize, row: &ScoredGuess) -> String {
    let mut line = format!("{}: ", round);
    for (letter, verdict) in row.letters() {
        line.push_str(&plain_letter(letter, verdict));
    }
    line
}

/// Escape-free renderer over any writer.
pub struct PlainDisplay<W> {
    out: W,
}

impl<W: Write> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for PlainDisplay<W> {
    fn render_board(&mut self, rounds: &[ScoredGuess]) -> io::Result<()> {
        for (i, row) in rounds.iter().enumerate() {
            writeln!(self.out, "{}", plain_row(i + 1, row))?;
        }
        self.out.flush()
    }

    fn show_title(&mut self) -> io::Result<()> {
        writeln!(self.out, "Wordle")
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn prompt(&mut self, round: usize) -> io::Result<()> {
        write!(self.out, "{}: ", round)?;
        self.out.flush()
    }
}

/// Full-screen renderer: clears before each redraw and underlines correct letters.
pub struct TerminalDisplay<W> {
    out: W,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn render_board(&mut self, rounds: &[ScoredGuess]) -> io::Result<()> {
        self.clear()?;
        for (i, row) in rounds.iter().enumerate() {
            queue!(self.out, Print(format!("{}: ", i + 1)))?;
            for (letter, verdict) in row.letters() {
                match verdict {
                    Verdict::Absent => queue!(self.out, Print(letter.to_ascii_lowercase()))?,
                    Verdict::Present => queue!(self.out, Print(letter.to_ascii_uppercase()))?,
                    Verdict::Correct => queue!(
                        self.out,
                        SetAttribute(Attribute::Underlined),
                        Print(letter.to_ascii_uppercase()),
                        SetAttribute(Attribute::Reset)
                    )?,
                }
            }
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()
    }

    fn show_title(&mut self) -> io::Result<()> {
        self.clear()?;
        queue!(self.out, Print("Wordle\n"))?;
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn prompt(&mut self, round: usize) -> io::Result<()> {
        write!(self.out, "{}: ", round)?;
        self.out.flush()
    }
}
