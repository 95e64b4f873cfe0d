//! Wordle Advisor - CLI
//!
//! Thin harness around the guess engine: an interactive assistant that reads
//! feedback codes from stdin, and a simulation mode that plays out a known
//! answer.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use wordle_advisor::{
    core::{Feedback, Word},
    engine::{Metric, Solver},
    output::render_feedback,
    vocab::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle guess engine minimizing expected remaining candidates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the newline-delimited answer word list
    #[arg(short = 'a', long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Path to additional allowed guesses (never answers)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<PathBuf>,

    /// Scoring metric: expected (default) or entropy
    #[arg(short, long, global = true, default_value = "expected")]
    metric: String,

    /// RNG seed for reproducible tie-breaking
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): suggests guesses, reads feedback codes
    Play,

    /// Simulate solving a known answer word
    Solve {
        /// The target word to solve
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocab = load_vocabulary(&cli)?;
    let solver = build_solver(&cli, &vocab)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(solver),
        Commands::Solve { word } => run_solve(solver, &word),
    }
}

fn load_vocabulary(cli: &Cli) -> Result<Arc<Vocabulary>> {
    let vocab = match &cli.guesses {
        Some(guesses) => Vocabulary::from_files(&cli.answers, guesses)
            .with_context(|| format!("failed to load word lists from {:?}", cli.answers))?,
        None => Vocabulary::from_answers_file(&cli.answers)
            .with_context(|| format!("failed to load answer list from {:?}", cli.answers))?,
    };
    Ok(Arc::new(vocab))
}

fn build_solver(cli: &Cli, vocab: &Arc<Vocabulary>) -> Result<Solver> {
    let metric = Metric::from_name(&cli.metric);

    let solver = match cli.seed {
        Some(seed) => Solver::seeded(Arc::clone(vocab), metric, seed)?,
        None => Solver::with_options(Arc::clone(vocab), metric, StdRng::from_os_rng())?,
    };

    Ok(solver)
}

/// Interactive assistant loop
///
/// Feedback is entered as five digits: 0 absent, 1 present, 2 exact.
fn run_play(mut solver: Solver) -> Result<()> {
    println!("\nEnter feedback as five digits: 0 absent, 1 present, 2 exact.");
    println!("Commands: 'use <word>' to force a guess, 'quit' to exit.\n");

    loop {
        println!(
            "Turn {}: try {} ({} candidate{} remaining)",
            solver.turns() + 1,
            solver.current_guess().text().to_uppercase().bold(),
            solver.remaining(),
            if solver.remaining() == 1 { "" } else { "s" }
        );

        if solver.remaining() <= 10 {
            let texts: Vec<String> = solver
                .candidates()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            println!("  candidates: {}", texts.join(", "));
        }

        let input = read_input("feedback")?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("Bye!");
                return Ok(());
            }
            _ if input.starts_with("use ") => {
                let word = input.trim_start_matches("use ").trim();
                match solver.override_guess(word) {
                    Ok(word) => println!("Forcing guess {}\n", word.text().to_uppercase()),
                    Err(err) => println!("{err}\n"),
                }
            }
            code => match solver.apply_feedback(code) {
                Ok(next) => {
                    if solver.is_solved() {
                        println!(
                            "\nSolved in {} guess{}: {}\n",
                            solver.turns(),
                            if solver.turns() == 1 { "" } else { "es" },
                            next.text().to_uppercase().green().bold()
                        );
                        return Ok(());
                    }
                    println!();
                }
                Err(err) => println!("{err}\n"),
            },
        }
    }
}

/// Simulate solving a known answer and print the per-turn path
fn run_solve(mut solver: Solver, target: &str) -> Result<()> {
    let target = Word::new(target).map_err(|err| anyhow!("invalid target word: {err}"))?;

    println!();
    loop {
        let guess = solver.current_guess();
        let code = Feedback::evaluate(&guess, &target);

        println!(
            "{}. {}  ({} candidates)",
            solver.turns() + 1,
            render_feedback(&guess, code),
            solver.remaining()
        );

        solver.apply_feedback(&code.to_string())?;

        if solver.is_solved() {
            println!(
                "\nSolved {} in {} guess{}\n",
                target.text().to_uppercase().green().bold(),
                solver.turns(),
                if solver.turns() == 1 { "" } else { "es" }
            );
            return Ok(());
        }
    }
}

/// Get user input with a prompt
fn read_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read stdin")?;

    Ok(input.trim().to_string())
}
