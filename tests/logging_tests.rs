use log::LevelFilter;
use wordle::{init_logging, level_from_env};

#[test]
fn level_parsing_falls_back_to_warn() {
    assert_eq!(level_from_env(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from_env(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from_env(Some("loud")), LevelFilter::Warn);
    assert_eq!(level_from_env(None), LevelFilter::Warn);
}

#[test]
fn init_twice_is_harmless() {
    init_logging();
    init_logging();
    log::info!("logger installed");
}
