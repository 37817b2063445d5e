use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chess_rules::core::{resolve_settings, GameSettings, GlyphStyle};
use chess_rules::ui::BoardRenderer;
use chess_rules::{new_game, GameEvent, GameState, Square};

/// Play on the terminal by typing squares: select a piece, then its destination
#[derive(Parser, Debug)]
#[command(name = "chess_rules", version, about)]
struct Cli {
    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Draw pieces with letters instead of chess symbols
    #[arg(long)]
    ascii: bool,

    /// Do not mark candidate squares
    #[arg(long)]
    no_hints: bool,
}

enum Command {
    Activate(Square),
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, chess_rules::GameError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "new" => Ok(Some(Command::NewGame)),
        "quit" | "exit" => Ok(Some(Command::Quit)),
        other => other.parse().map(|square| Some(Command::Activate(square))),
    }
}

fn init_tracing(settings: &GameSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Ignored => None,
        GameEvent::Selected { origin, candidates, .. } => {
            Some(format!("{origin} selected, {candidates} possible move(s)"))
        }
        GameEvent::Deselected => Some("Selection cleared".to_string()),
        GameEvent::Moved { report, .. } | GameEvent::GameEnded { report, .. } => {
            Some(match report.captured {
                Some(taken) => format!(
                    "{} {} -> {} takes {}",
                    report.piece.piece_type.name(),
                    report.from,
                    report.to,
                    taken.piece_type.name()
                ),
                None => format!(
                    "{} {} -> {}",
                    report.piece.piece_type.name(),
                    report.from,
                    report.to
                ),
            })
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut settings, source) = resolve_settings(cli.config.as_deref());
    if cli.ascii {
        settings.glyph_style = GlyphStyle::Ascii;
    }
    if cli.no_hints {
        settings.show_hints = false;
    }
    init_tracing(&settings);
    source.log();
    debug!("Settings: {:?}", settings);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut game: GameState = new_game();

    writeln!(stdout, "Enter a square (e2 or 6,4), `new`, or `quit`.")?;
    write!(stdout, "{}", BoardRenderer::render(&game, &settings))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        let redraw = match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::NewGame)) => {
                game = new_game();
                true
            }
            Ok(Some(Command::Activate(square))) => match game.activate_square(square) {
                Ok(event) => {
                    if let Some(text) = describe(&event) {
                        writeln!(stdout, "{text}")?;
                    }
                    event.needs_redraw()
                }
                Err(e) => {
                    writeln!(stdout, "{e}")?;
                    false
                }
            },
            Err(e) => {
                warn!("Rejected input {:?}", line);
                writeln!(stdout, "{e}")?;
                false
            }
        };

        if redraw {
            write!(stdout, "{}", BoardRenderer::render(&game, &settings))?;
        }
        stdout.flush()?;
    }

    Ok(())
}
