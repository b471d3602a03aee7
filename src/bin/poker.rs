use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, error};
use poker_showdown::evaluator::evaluate;
use poker_showdown::hand::Hand;
use poker_showdown::showdown::best_hand;
use poker_showdown::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, BufRead, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about = "Pick the best five-card poker hand")]
struct Cli {
    /// Hands to compare, one per argument, e.g. "2S 4C 7S 9H 10H".
    hands: Vec<String>,
    /// Read one hand per line from standard input.
    #[clap(long)]
    stdin: bool,
    /// Open the interactive viewer, preloaded with any given hands.
    #[clap(long)]
    tui: bool,
    /// Log every evaluated hand.
    #[clap(long, short)]
    verbose: bool,
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

fn run_tui(hands: Vec<Hand>) -> Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-showdown viewer requires a real terminal (TTY). Version: {}",
            poker_showdown::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let mut app = AppState::with_hands(hands);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}

fn read_lines(cli: &Cli) -> Result<Vec<String>> {
    let mut lines = cli.hands.clone();
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading standard input")?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
    }
    Ok(lines)
}

fn parse_hands(lines: &[String]) -> Result<Vec<Hand>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let hand = line.parse::<Hand>().with_context(|| format!("hand {}: '{line}'", i + 1))?;
            let eval = evaluate(&hand);
            debug!("{hand} -> {} {:?}", eval.category, eval.key().tiebreak());
            Ok(hand)
        })
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    let lines = read_lines(&cli)?;
    let hands = parse_hands(&lines)?;

    let interactive = hands.is_empty() && !cli.stdin && io::stdout().is_terminal();
    if cli.tui || interactive {
        return run_tui(hands);
    }

    let result = best_hand(&hands)?;
    println!("{result}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(level).format_target(false).parse_default_env().init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
