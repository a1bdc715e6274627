use log::info;

use crate::{
    common::GameError,
    config::LOSS_RESULT,
    display::Display,
    game::{Outcome, Session},
    player::Player,
};

/// Drives a [`Session`] with a guess source and a renderer.
pub struct RoundController<'a, P, D> {
    session: &'a mut Session,
    player: P,
    display: D,
}

impl<'a, P: Player, D: Display> RoundController<'a, P, D> {
    pub fn new(session: &'a mut Session, player: P, display: D) -> Self {
        Self {
            session,
            player,
            display,
        }
    }

    /// Play until the session is won or lost and return its result:
    /// the 0-based winning round, or `LOSS_RESULT` after six misses.
    /// A session that is already over returns its result without prompting.
    pub fn play(&mut self) -> Result<usize, GameError> {
        if let Some(result) = self.session.result() {
            return Ok(result);
        }
        self.display.show_title()?;
        loop {
            if let Some(result) = self.session.result() {
                return Ok(result);
            }
            self.session.await_guess();
            self.display.prompt(self.session.round() + 1)?;
            let input = self.player.next_guess()?.ok_or(GameError::InputClosed)?;

            let outcome = match self.session.submit(&input) {
                Ok(outcome) => outcome,
                Err(e) => {
                    self.display.message(&e.to_string())?;
                    continue;
                }
            };

            match outcome {
                Outcome::Won(round) => {
                    info!("won at round {}", round + 1);
                    self.display
                        .message(&format!("You won! The answer was {}.", self.session.answer()))?;
                    return Ok(round);
                }
                Outcome::Scored(_) => {
                    self.display.render_board(self.session.history())?;
                }
                Outcome::Lost(_) => {
                    self.display.render_board(self.session.history())?;
                    info!("lost after {} rounds", self.session.round());
                    self.display
                        .message(&format!("You lost. The answer was {}.", self.session.answer()))?;
                    return Ok(LOSS_RESULT);
                }
            }
        }
    }

    pub fn into_parts(self) -> (P, D) {
        (self.player, self.display)
    }
}
