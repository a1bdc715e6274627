//! Six-round, five-letter word guessing game.
//!
//! A [`Session`] owns the filtered [`Dictionary`] and the secret answer and
//! scores guesses with [`score`]. [`RoundController`] runs a session against a
//! [`Player`] and renders through a [`Display`].

mod common;
mod config;
mod controller;
pub mod dictionary;
pub mod display;
pub mod feedback;
mod game;
mod logging;
pub mod player;
mod selector;

pub use common::*;
pub use config::*;
pub use controller::RoundController;
pub use dictionary::{is_valid_word, Dictionary};
pub use display::{Display, PlainDisplay, TerminalDisplay};
pub use feedback::{score, Feedback, Verdict};
pub use game::*;
pub use logging::{init_logging, level_from_env};
pub use player::{CliPlayer, Player, ScriptedPlayer};
pub use selector::{draw_answer, rng_from_seed};
