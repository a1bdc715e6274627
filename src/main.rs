use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wordle::{
    init_logging, CliPlayer, Display, GameConfig, PlainDisplay, RoundController, Session,
    TerminalDisplay, DEFAULT_DICTIONARY_PATH, DEFAULT_OUTPUT_PATH,
};

#[derive(Parser)]
#[command(author, version, about = "Guess the five-letter word in six tries", long_about = None)]
struct Cli {
    /// Newline-delimited word list to draw guesses and answers from.
    #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,
    #[arg(long, help = "Fix RNG seed for a reproducible answer (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Where the filtered word list is written.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Plain text output without screen clearing or escape codes.
    #[arg(long)]
    plain: bool,
}

fn play<D: Display>(session: &mut Session, display: D) -> anyhow::Result<usize> {
    let mut controller = RoundController::new(session, CliPlayer::stdin(), display);
    Ok(controller.play()?)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.dictionary)
        .with_seed(cli.seed)
        .with_output(cli.output);
    let mut session = Session::from_config(&config).with_context(|| {
        format!(
            "could not start a game from {}",
            config.dictionary_path.display()
        )
    })?;

    let result = if cli.plain {
        play(&mut session, PlainDisplay::new(std::io::stdout()))?
    } else {
        play(&mut session, TerminalDisplay::stdout())?
    };
    println!("{}", result);
    Ok(())
}
