// src/lib.rs

pub mod cli;
pub mod config;
pub mod cursor;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod sequence;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::PlanFile;
use crate::graph::DependencyGraph;
use crate::sequence::{Direction, Outcome, Sequencer, SequencerOptions};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading and validation
/// - dependency graph construction
/// - the sequencer and the interactive operator walk (or a dry run)
pub fn run(args: CliArgs) -> Result<()> {
    let plan_path = PathBuf::from(&args.plan);
    let plan = load_and_validate(&plan_path)?;
    let mut graph = DependencyGraph::from_plan(&plan)?;

    if args.dry_run {
        print_dry_run(&plan, &mut graph)?;
        return Ok(());
    }

    info!(plan = %plan_path.display(), items = plan.len(), "starting operator session");

    let options = SequencerOptions {
        category: args.category,
    };
    let sequencer = Sequencer::new(graph, options)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    interactive_walk(sequencer, &plan, &mut input)
}

/// One step of operator input, as parsed from a prompt line.
enum Command {
    Assign(Outcome, String),
    Back,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("");
    let comment = parts.next().unwrap_or("").trim().to_string();

    match verb {
        "p" | "pass" => Some(Command::Assign(Outcome::Pass, comment)),
        "f" | "fail" => Some(Command::Assign(Outcome::Fail, comment)),
        "s" | "skip" => Some(Command::Assign(Outcome::Skip, comment)),
        "b" | "back" => Some(Command::Back),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Present items one at a time, reading outcomes from `input`.
///
/// `b` walks backward (clearing cascaded skips on the way), `q` ends the
/// session early; anything else re-prompts.
fn interactive_walk(
    mut sequencer: Sequencer,
    plan: &PlanFile,
    input: &mut impl BufRead,
) -> Result<()> {
    let descriptions: HashMap<&str, &str> = plan
        .items()
        .iter()
        .filter_map(|i| i.description.as_deref().map(|d| (i.name.as_str(), d)))
        .collect();

    let mut direction = Direction::Forward;
    'session: loop {
        let Some(item) = sequencer.advance(direction) else {
            if direction == Direction::Backward {
                println!("Already at the first check.");
                direction = Direction::Forward;
                continue;
            }
            break;
        };

        println!();
        if item.tags.is_empty() {
            println!("{}", item.id);
        } else {
            println!("{} [{}]", item.id, item.tags.join(", "));
        }
        if let Some(description) = descriptions.get(item.id.as_str()) {
            println!("  {description}");
        }
        if let Some(entry) = sequencer.outcome_of(&item.id) {
            let auto = if entry.auto { " (auto)" } else { "" };
            println!("  current outcome: {}{auto}", entry.outcome);
        }

        loop {
            print!("[p]ass/[f]ail/[s]kip [comment], [b]ack, [q]uit> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF behaves like quit.
                break 'session;
            }

            match parse_command(&line) {
                Some(Command::Assign(outcome, comment)) => {
                    sequencer.set_outcome(&item.id, outcome, comment)?;
                    direction = Direction::Forward;
                    break;
                }
                Some(Command::Back) => {
                    direction = Direction::Backward;
                    break;
                }
                Some(Command::Quit) => break 'session,
                None => println!("Unrecognized input."),
            }
        }
    }

    print_summary(&sequencer);
    Ok(())
}

/// Final per-item report plus totals.
fn print_summary(sequencer: &Sequencer) {
    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut skipped = 0usize;
    let mut unanswered = 0usize;

    println!();
    println!("results:");
    for id in sequencer.order() {
        match sequencer.outcome_of(id) {
            Some(entry) => {
                match entry.outcome {
                    Outcome::Pass => passed += 1,
                    Outcome::Fail => failed += 1,
                    Outcome::Skip => skipped += 1,
                }
                let auto = if entry.auto { " (auto)" } else { "" };
                if entry.data.is_empty() {
                    println!("  {id}: {}{auto}", entry.outcome);
                } else {
                    println!("  {id}: {}{auto} - {}", entry.outcome, entry.data);
                }
            }
            None => {
                unanswered += 1;
                println!("  {id}: unanswered");
            }
        }
    }
    println!();
    println!("{passed} passed, {failed} failed, {skipped} skipped, {unanswered} unanswered");
}

/// Simple dry-run output: print the resolved order with deps and tags.
fn print_dry_run(plan: &PlanFile, graph: &mut DependencyGraph) -> Result<()> {
    let order = graph.resolve()?.to_vec();

    println!("certseq dry-run");
    println!("items ({}), resolved order:", plan.len());
    for id in &order {
        println!("  - {id}");
        if let Some(item) = graph.get(id) {
            if !item.depends.is_empty() {
                println!("      depends: {:?}", item.depends);
            }
            if !item.tags.is_empty() {
                println!("      tags: {:?}", item.tags);
            }
        }
    }

    Ok(())
}
