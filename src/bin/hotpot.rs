use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use hotpot::agents::{AgentTable, BotProfile, ComputerAgent, DEFAULT_STEAL_CHANCE};
use hotpot::game::{Game, GameConfig, DEFAULT_WINNING_SETS};
use hotpot::tui::{
    app::{AppSettings, AppState},
    controller,
};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotpot")]
#[command(version, about = "Turn-based hotpot ingredient card game")]
struct Args {
    /// Number of human seats (the rest are computers)
    #[arg(long, default_value_t = 1)]
    humans: usize,

    /// Shuffle seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Computer thinking delay in the TUI
    #[arg(long, default_value_t = 500)]
    bot_delay_ms: u64,

    /// Chance (0.0 to 1.0) that a computer takes a discard instead of drawing
    #[arg(long, default_value_t = DEFAULT_STEAL_CHANCE)]
    steal_chance: f64,

    /// Sets a hand must hold at once to win
    #[arg(long, default_value_t = DEFAULT_WINNING_SETS)]
    winning_sets: usize,

    /// Play one all-computer game without the TUI and print the result
    #[arg(long)]
    simulate: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> io::Result<()> {
    let level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Stderr would tear the alternate screen, so only headless runs get it.
        None if args.simulate => {
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
        }
        None => {}
    }
    Ok(())
}

fn simulate(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig::with_humans(0).with_winning_sets(args.winning_sets);
    config.seed = args.seed;
    let mut game = Game::new(config)?;
    info!(seed = game.seed(), "simulating");

    let mut agents = AgentTable::for_seats(game.players().len());
    for seat in 0..game.players().len() {
        let profile =
            BotProfile::new(args.steal_chance).with_seed(game.seed().wrapping_add(seat as u64));
        agents.set_agent(seat, Some(Box::new(ComputerAgent::new(profile))));
    }
    while !game.is_over() {
        if !agents.on_turn(&mut game)? {
            warn!(seat = game.current(), "seat did not act");
            break;
        }
    }

    println!("Seed: {}", game.seed());
    for p in game.players() {
        println!("\n{}'s hand:\n{}", p.name(), p.describe_hand());
        println!("{}", p.describe_sets());
    }
    println!("\n{}", game.final_report());
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    if args.simulate {
        return simulate(&args);
    }

    if !io::stdout().is_terminal() {
        println!(
            "hotpot TUI requires a real terminal (TTY).\nUse --simulate for a headless game. Version: {}",
            hotpot::VERSION
        );
        return Ok(());
    }

    let steal_pct = (args.steal_chance.clamp(0.0, 1.0) * 100.0).round() as u8;
    let settings = AppSettings::new(args.humans, args.seed, args.bot_delay_ms, steal_pct)
        .with_winning_sets(args.winning_sets);
    let mut app = AppState::new(settings)?;

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res?;
    Ok(())
}
