use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{info, LevelFilter};

use atomic_chess::game_state::chess_types::Outcome;
use atomic_chess::game_state::game_session::GameSession;
use atomic_chess::utils::algebraic::split_move_line;
use atomic_chess::utils::log_init;
use atomic_chess::utils::render_game_state::{render_board, RenderStyle};

/// Two-player atomic chess at the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Name of the white player; prompted for when omitted.
    #[arg(long)]
    white: Option<String>,

    /// Name of the black player; prompted for when omitted.
    #[arg(long)]
    black: Option<String>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Draw the board with chess glyphs instead of two-letter tags.
    #[arg(long)]
    unicode: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    log_init::init(cli.log_level).map_err(io::Error::other)?;
    info!("{cli:?}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    let Some(white) = name_or_prompt(cli.white, "Enter the name of player 1 (white): ", &mut lines)?
    else {
        return Ok(());
    };
    let Some(black) = name_or_prompt(cli.black, "Enter the name of player 2 (black): ", &mut lines)?
    else {
        return Ok(());
    };

    let style = if cli.unicode {
        RenderStyle::Unicode
    } else {
        RenderStyle::Tags
    };
    let mut game = GameSession::new(white, black);

    while game.outcome() == Outcome::InProgress {
        writeln!(stdout, "{}", render_board(game.board(), style))?;
        let player = game.active_player();
        writeln!(stdout, "{} ({})'s turn", player.name, player.side)?;
        write!(stdout, "Enter move (e.g., 'a2 a4'): ")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(stdout)?;
            return Ok(());
        };
        let (from, to) = match split_move_line(&line) {
            Ok(squares) => squares,
            Err(err) => {
                info!("{err}");
                writeln!(stdout, "Invalid move format. Please enter in the format 'a2 a4'.")?;
                continue;
            }
        };
        if !game.request_move_algebraic(from, to) {
            writeln!(stdout, "Invalid move. Try again.")?;
        }
    }

    writeln!(stdout, "{}", render_board(game.board(), style))?;
    writeln!(stdout, "Game over.")?;
    if let Some(winner) = game.winner() {
        writeln!(stdout, "{} ({}) wins!", winner.name, winner.side)?;
    }
    Ok(())
}

fn name_or_prompt(
    given: Option<String>,
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    if let Some(name) = given {
        return Ok(Some(name));
    }
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.map(|line| line.trim().to_owned()))
}
