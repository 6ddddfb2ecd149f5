use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::{GameEngine, MoveOutcome};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override player one's color (palette name)
    #[arg(long)]
    p1_color: Option<String>,

    /// Override player two's color (palette name)
    #[arg(long)]
    p2_color: Option<String>,

    /// Play these 0-based columns without the TUI, then print the board
    #[arg(long, value_delimiter = ' ', num_args = 1..)]
    moves: Option<Vec<usize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(color) = cli.p1_color {
        config.players.one.color = color;
    }
    if let Some(color) = cli.p2_color {
        config.players.two.color = color;
    }

    let game = config.new_game().context("invalid game settings")?;

    match cli.moves {
        Some(moves) => play_headless(game, &moves),
        None => run_tui(game).context("terminal UI failed"),
    }
}

/// Play a scripted sequence of columns and report the result on stdout.
fn play_headless(mut game: GameEngine, moves: &[usize]) -> Result<()> {
    let mut outcome = None;
    for (i, &column) in moves.iter().enumerate() {
        match game.drop_piece(column) {
            Ok(result) => outcome = Some(result),
            Err(err) => {
                println!("{}", game.board());
                bail!("move {} (column {column}) rejected: {err}", i + 1);
            }
        }
    }

    println!("{}", game.board());
    match outcome {
        Some(MoveOutcome::Won(id)) => println!("{} ({id}) won!", game.player(id).name),
        Some(MoveOutcome::Tied) => println!("Tie!"),
        Some(MoveOutcome::Continued(_)) | None => {
            let id = game.current_player();
            println!("In progress, {} ({id}) to move", game.player(id).name)
        }
    }
    Ok(())
}

fn run_tui(game: GameEngine) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
