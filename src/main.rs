//! Mansion Mystery
//!
//! Walk the mansion, collect clues, and name the culprit.

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use mansion_mystery::console::ConsoleInvestigator;
use mansion_mystery::game::narrative::FAREWELL;
use mansion_mystery::tui::App;
use mansion_mystery::{Game, MansionBlueprint};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Blueprint JSON describing the mansion (defaults to the classic mansion)
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Play with plain line input instead of the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Print the blueprint as JSON and exit
    #[arg(long)]
    print_map: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let blueprint = match &cli.map {
        Some(path) => MansionBlueprint::load(path)?,
        None => MansionBlueprint::default(),
    };
    if cli.print_map {
        println!("{}", blueprint.to_json_pretty()?);
        return Ok(());
    }

    let mut game = Game::from_blueprint(&blueprint)?;
    info!("mansion ready: {} rooms", game.mansion().len());

    if cli.plain {
        let stdin = io::stdin();
        let mut console = ConsoleInvestigator::new(stdin.lock(), stdout());
        game.play(&mut console)?;
        println!("\n{}", FAREWELL);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = App::new(terminal, game.suspects().len());

    let outcome = game.play(&mut app).and_then(|_| app.finish());

    // Cleanup
    disable_raw_mode()?;
    execute!(app.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    app.terminal_mut().show_cursor()?;

    outcome?;
    println!("\n╔════════════════════════════════════════════════════╗");
    println!("║  {:<50}║", FAREWELL);
    println!("╚════════════════════════════════════════════════════╝\n");

    Ok(())
}
