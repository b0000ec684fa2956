use simplelog::*;
use log::SetLoggerError;

/// Install the terminal logger. Logs go to stderr so they never interleave
/// with the board printed on stdout. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}
