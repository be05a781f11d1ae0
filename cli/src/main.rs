use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use memory_puzzle_core as game;
use serde::Serialize;

mod command;
mod render;
mod session;

use command::{Command, HELP};
use render::RenderStyle;
use session::{Session, SessionEvent};

#[derive(Copy, Clone, Debug, PartialEq, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for game::LevelConfig {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => game::LevelConfig::EASY,
            Level::Medium => game::LevelConfig::MEDIUM,
            Level::Hard => game::LevelConfig::HARD,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Find every matching pair of tiles", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board size
    #[arg(short, long, value_enum, default_value_t = Level::Easy)]
    level: Level,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable colored glyphs
    #[arg(long)]
    plain: bool,

    /// Print the generated board as JSON and exit
    #[arg(long)]
    dump: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct TileDump {
    row: game::Coord,
    col: game::Coord,
    shape: &'static str,
    color: &'static str,
    hex: String,
    revealed: bool,
    matched: bool,
}

impl From<game::TileSnapshot> for TileDump {
    fn from(snapshot: game::TileSnapshot) -> Self {
        let game::Identity { shape, color } = snapshot.identity;
        Self {
            row: snapshot.row,
            col: snapshot.col,
            shape: shape.name(),
            color: color.name(),
            hex: color.hex(),
            revealed: snapshot.revealed,
            matched: snapshot.matched,
        }
    }
}

#[derive(Serialize)]
struct BoardDump<'a> {
    level: &'a game::LevelConfig,
    seed: Option<u64>,
    tiles: Vec<TileDump>,
}

impl<'a> BoardDump<'a> {
    fn new(board: &'a game::Board) -> Self {
        Self {
            level: board.level(),
            seed: board.seed(),
            tiles: board.snapshots().map(TileDump::from).collect(),
        }
    }
}

fn dump(level: game::LevelConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let board = game::Board::new(level, seed)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &BoardDump::new(&board))?;
    writeln!(out)?;
    Ok(())
}

fn draw(out: &mut impl Write, session: &Session, style: RenderStyle) -> io::Result<()> {
    let now = Utc::now();
    writeln!(out)?;
    writeln!(out, "{}", render::hud(session.board(), session.elapsed_secs(now)))?;
    write!(out, "{}", render::board(session.board(), style))?;
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Shows the mismatched pair until its hide is due, then turns it back over.
fn wait_for_hide(out: &mut impl Write, session: &mut Session, style: RenderStyle) -> anyhow::Result<()> {
    let Some(pending) = session.pending_hide() else {
        return Ok(());
    };

    let wait = (pending.due - Utc::now()).to_std().unwrap_or_default();
    std::thread::sleep(wait);
    if session.tick(Utc::now())? {
        draw(out, session, style)?;
    }
    Ok(())
}

fn handle_reveal(
    out: &mut impl Write,
    session: &mut Session,
    coords: game::Coord2,
    style: RenderStyle,
) -> anyhow::Result<()> {
    let event = match session.select(coords, Utc::now()) {
        Ok(event) => event,
        Err(game::GameError::InvalidCoords(_)) => {
            log::warn!("Rejected reveal outside the board: {coords:?}");
            let (rows, cols) = session.board().size();
            writeln!(out, "No tile there, rows go 1-{rows} and columns 1-{cols}")?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    match event {
        SessionEvent::Ignored => writeln!(out, "That tile is already face up")?,
        SessionEvent::FirstSelected(first) => {
            log::debug!("First pick {first:?}");
            draw(out, session, style)?;
        }
        SessionEvent::Matched(first, second) => {
            log::debug!("Matched {first:?} / {second:?}");
            draw(out, session, style)?;
        }
        SessionEvent::Mismatched(pending) => {
            log::debug!("Mismatch {:?}, hiding at {}", pending.tiles, pending.due);
            draw(out, session, style)?;
            writeln!(out, "No match")?;
            out.flush()?;
            wait_for_hide(out, session, style)?;
        }
        SessionEvent::Completed {
            level,
            moves,
            elapsed_secs,
        } => {
            draw(out, session, style)?;
            writeln!(
                out,
                "Congratulations! You completed {} in {moves} moves and {elapsed_secs} seconds.",
                level.name
            )?;
            session.new_game(level, None, Utc::now())?;
            draw(out, session, style)?;
        }
    }
    Ok(())
}

fn run(session: &mut Session, style: RenderStyle) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{HELP}")?;
    draw(&mut out, session, style)?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("could not read input")?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Redraw) => draw(&mut out, session, style)?,
            Ok(Command::NewGame(level)) => {
                let level = level.unwrap_or_else(|| session.level().clone());
                session.new_game(level, None, Utc::now())?;
                draw(&mut out, session, style)?;
            }
            Ok(Command::Reveal(coords)) => handle_reveal(&mut out, session, coords, style)?,
            Err(err) => writeln!(out, "{err}")?,
        }
        prompt(&mut out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let level = game::LevelConfig::from(args.level);
    if args.dump {
        return dump(level, args.seed);
    }

    let style = RenderStyle {
        color: !args.plain && io::stdout().is_terminal(),
    };
    let mut session =
        Session::new(level, args.seed, Utc::now()).context("could not start a new game")?;
    run(&mut session, style)
}
