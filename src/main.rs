// sortreplay: step-by-step sort replay in the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortreplay::engine::constants::CLI_SNAPSHOT_LIMIT;
use sortreplay::engine::{Engine, EngineConfig, Replay, RunOutcome};
use sortreplay::input::{normalize, random_digits};
use sortreplay::record::{MemoryRunStore, NewRunRecord, RunStore};
use sortreplay::sorting::Algorithm;
use sortreplay::ui::App;

/// Parsed command line
struct Options {
    algorithm: String,
    digits: Option<String>,
    max_shuffles: Option<usize>,
    print: bool,
}

fn usage(program_name: &str) {
    eprintln!(
        "Usage: {} <algorithm> [digits] [--random] [--max-shuffles N] [--print]",
        program_name
    );
    eprintln!("       {} --list", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} bubble 31415926      # Replay bubble sort", program_name);
    eprintln!("  {} stalin               # Random digits 1-8", program_name);
    eprintln!(
        "  {} bogo 4321 --max-shuffles 10000 --print",
        program_name
    );
}

fn fail(program_name: &str, message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!();
    usage(program_name);
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> Options {
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortreplay");

    let mut positional = Vec::new();
    let mut random = false;
    let mut max_shuffles = None;
    let mut print = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => {
                for algorithm in Algorithm::ALL {
                    println!("{:<10} {}", algorithm.name(), algorithm.description());
                }
                std::process::exit(0);
            }
            "--help" | "-h" => {
                usage(program_name);
                std::process::exit(0);
            }
            "--random" => random = true,
            "--print" => print = true,
            "--max-shuffles" => {
                let value = iter
                    .next()
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or_else(|| fail(program_name, "--max-shuffles needs a number"));
                max_shuffles = Some(value);
            }
            flag if flag.starts_with("--") => {
                fail(program_name, &format!("Unknown option '{}'", flag))
            }
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(algorithm) = positional.next() else {
        fail(program_name, "No algorithm provided");
    };
    let digits = if random { None } else { positional.next() };
    if positional.next().is_some() {
        fail(program_name, "Too many arguments");
    }

    Options {
        algorithm,
        digits,
        max_shuffles,
        print,
    }
}

fn print_frames(outcome: &RunOutcome) {
    for (step, snapshot) in outcome.snapshots.iter().enumerate() {
        println!("{:>5}  {}", step, snapshot);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortreplay");
    let options = parse_args(&args);

    let text = options
        .digits
        .unwrap_or_else(|| random_digits(&mut rand::thread_rng()));

    let engine = Engine::new(EngineConfig {
        snapshot_memory_limit: Some(CLI_SNAPSHOT_LIMIT),
        max_shuffles: options.max_shuffles,
    });

    eprintln!("Input {:?} -> {:?}", text, normalize(&text));
    eprintln!("Running {}...", options.algorithm);
    if options.algorithm == Algorithm::Bogo.name() && options.max_shuffles.is_none() {
        eprintln!("Warning: bogo sort has no shuffle limit and may run indefinitely");
    }

    let outcome = match engine.run(&options.algorithm, &text) {
        Ok(outcome) => outcome,
        Err(e) if e.is_input_error() => fail(program_name, &e.to_string()),
        Err(e) => {
            eprintln!("Run failed: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!(
        "Run completed. Total snapshots: {} (~{} bytes)",
        outcome.snapshots.len(),
        outcome.estimated_size()
    );

    let mut store = MemoryRunStore::new();
    let record = store.save(NewRunRecord::from_outcome(&outcome));
    eprintln!(
        "Saved run #{}: {} {} -> {}",
        record.id, record.algorithm, record.original_input, record.sorted_digits
    );

    if options.print {
        print_frames(&outcome);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Replay::new(outcome));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
