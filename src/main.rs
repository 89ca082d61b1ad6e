use std::fmt;
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use clap::{value_t, App, Arg, SubCommand};
use lazy_static::lazy_static;
use thiserror::Error;

use maze::{generate, Grid, Situation};
use river::Crossing;
use solver::{comparison, SearchState, Solution};

type Error = anyhow::Error;

/// Maze strategies are generic over the grid's lifetime, so the registry
/// holds plain function pointers rather than boxed closures.
type MazeSolver = fn(Situation<'_>) -> solver::Result<Solution>;
type RiverSolver = fn(Crossing) -> solver::Result<Solution>;

fn maze_bfs(situation: Situation<'_>) -> solver::Result<Solution> {
    solver::bfs(situation)
}

fn maze_dfs(situation: Situation<'_>) -> solver::Result<Solution> {
    solver::dfs(situation)
}

fn maze_dfs_ordered(situation: Situation<'_>) -> solver::Result<Solution> {
    solver::dfs_ordered(situation)
}

fn maze_ucs(situation: Situation<'_>) -> solver::Result<Solution> {
    solver::ucs(situation)
}

fn maze_best_bound(situation: Situation<'_>) -> solver::Result<Solution> {
    solver::best_bound(situation)
}

fn maze_branch_and_bound(situation: Situation<'_>) -> solver::Result<Solution> {
    solver::branch_and_bound(situation)
}

fn maze_bidirectional(situation: Situation<'_>) -> solver::Result<Solution> {
    let goal = situation.at_goal();
    solver::bidirectional(situation, goal)
}

lazy_static! {
    static ref MAZE_SOLVERS: Vec<(&'static str, &'static str, MazeSolver)> = vec![
        ("bfs", "Breadth-first search", maze_bfs as MazeSolver),
        ("dfs", "Depth-first search", maze_dfs as MazeSolver),
        (
            "dfs-ordered",
            "DFS with comparison",
            maze_dfs_ordered as MazeSolver
        ),
        ("ucs", "Uniform-cost search", maze_ucs as MazeSolver),
        (
            "best-bound",
            "Branch and bound (best bound)",
            maze_best_bound as MazeSolver
        ),
        (
            "bnb",
            "Branch and bound (backtracking)",
            maze_branch_and_bound as MazeSolver
        ),
        (
            "bidirectional",
            "Bidirectional search",
            maze_bidirectional as MazeSolver
        ),
    ];

    // The river crossing has no action inverses, so bidirectional search
    // is not on offer for it.
    static ref RIVER_SOLVERS: Vec<(&'static str, &'static str, RiverSolver)> = vec![
        ("bfs", "Breadth-first search", solver::bfs as RiverSolver),
        ("dfs", "Depth-first search", solver::dfs as RiverSolver),
        (
            "dfs-ordered",
            "DFS with comparison",
            solver::dfs_ordered as RiverSolver
        ),
        ("ucs", "Uniform-cost search", solver::ucs as RiverSolver),
        (
            "best-bound",
            "Branch and bound (best bound)",
            solver::best_bound as RiverSolver
        ),
        (
            "bnb",
            "Branch and bound (backtracking)",
            solver::branch_and_bound as RiverSolver
        ),
    ];
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("unknown strategy {key:?}; expected one of {known}")]
    UnknownStrategy { key: String, known: String },
}

fn main() {
    env_logger::init();
    if let Err(error) = driver() {
        eprintln!("{:#}", error);
        std::process::exit(1);
    }
}

fn driver() -> Result<(), Error> {
    let matches = App::new("wayfinder")
        .version("1.0")
        .about("Search strategies over maze and river-crossing puzzles")
        .subcommand(
            SubCommand::with_name("maze")
                .about("Solve a maze loaded from a grid file")
                .arg(
                    Arg::with_name("file")
                        .short("f")
                        .value_name("FILE")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("strategy")
                        .short("s")
                        .value_name("STRATEGY")
                        .takes_value(true)
                        .help("Strategy key; omit to compare all of them"),
                )
                .arg(
                    Arg::with_name("watch")
                        .long("watch")
                        .help("Replay the solution step by step"),
                ),
        )
        .subcommand(
            SubCommand::with_name("river")
                .about("Solve the wolf, goat and cabbage puzzle")
                .arg(
                    Arg::with_name("strategy")
                        .short("s")
                        .value_name("STRATEGY")
                        .takes_value(true)
                        .help("Strategy key; omit to compare all of them"),
                )
                .arg(
                    Arg::with_name("watch")
                        .long("watch")
                        .help("Replay the solution step by step"),
                ),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Generate a random maze file")
                .arg(
                    Arg::with_name("out")
                        .short("o")
                        .value_name("FILE")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("width")
                        .short("w")
                        .value_name("WIDTH")
                        .default_value("10"),
                )
                .arg(
                    Arg::with_name("height")
                        .short("g")
                        .value_name("HEIGHT")
                        .default_value("10"),
                )
                .arg(
                    Arg::with_name("passes")
                        .short("p")
                        .value_name("PASSES")
                        .default_value("3"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("maze", Some(args)) => maze_command(args),
        ("river", Some(args)) => river_command(args),
        ("generate", Some(args)) => generate_command(args),
        _ => Err(anyhow!("no subcommand given; try --help")),
    }
}

fn maze_command(args: &clap::ArgMatches<'_>) -> Result<(), Error> {
    let path = args
        .value_of("file")
        .ok_or_else(|| anyhow!("a maze file is required"))?;
    let grid = Grid::load(Path::new(path))?;
    println!(
        "Loaded {}x{} maze from {}",
        grid.width(),
        grid.height(),
        path
    );

    match args.value_of("strategy") {
        Some(key) => {
            let (_, name, solve) = lookup(&MAZE_SOLVERS, key)?;
            println!("{}", name);
            run(Situation::across(&grid), solve, args.is_present("watch"))
        }
        None => {
            let mut rows = Vec::new();
            for (_, name, solve) in MAZE_SOLVERS.iter() {
                let stats = match solve(Situation::across(&grid)) {
                    Ok(solution) => solution.stats().clone(),
                    Err(error) => error.stats().clone(),
                };
                rows.push((*name, stats));
            }
            print!(
                "{}",
                comparison(rows.iter().map(|(name, stats)| (*name, stats)))
            );
            Ok(())
        }
    }
}

fn river_command(args: &clap::ArgMatches<'_>) -> Result<(), Error> {
    match args.value_of("strategy") {
        Some(key) => {
            let (_, name, solve) = lookup(&RIVER_SOLVERS, key)?;
            println!("{}", name);
            run(Crossing::start(), solve, args.is_present("watch"))
        }
        None => {
            let mut rows = Vec::new();
            for (_, name, solve) in RIVER_SOLVERS.iter() {
                let stats = match solve(Crossing::start()) {
                    Ok(solution) => solution.stats().clone(),
                    Err(error) => error.stats().clone(),
                };
                rows.push((*name, stats));
            }
            print!(
                "{}",
                comparison(rows.iter().map(|(name, stats)| (*name, stats)))
            );
            Ok(())
        }
    }
}

fn generate_command(args: &clap::ArgMatches<'_>) -> Result<(), Error> {
    let out = args
        .value_of("out")
        .ok_or_else(|| anyhow!("an output file is required"))?;
    let width = value_t!(args, "width", usize)?;
    let height = value_t!(args, "height", usize)?;
    let passes = value_t!(args, "passes", usize)?;

    let grid = generate(width, height, passes, &mut rand::thread_rng());
    grid.save(Path::new(out))?;
    println!("Wrote {}x{} maze to {}", width, height, out);
    Ok(())
}

/// Solve from `origin` and replay the winning action sequence, rendering
/// every state along the way.
fn run<S, F>(origin: S, solve: &F, watch: bool) -> Result<(), Error>
where
    S: SearchState + fmt::Display,
    F: Fn(S) -> solver::Result<Solution>,
{
    match solve(origin.clone()) {
        Ok(solution) => {
            println!("Solved: {}", solution.stats());
            replay(origin, &solution, watch)
        }
        Err(error) => {
            println!("{}", error);
            Ok(())
        }
    }
}

fn replay<S>(origin: S, solution: &Solution, watch: bool) -> Result<(), Error>
where
    S: SearchState + fmt::Display,
{
    let mut state = origin;
    for &action in solution.actions() {
        state = state
            .make_move(action)
            .ok_or_else(|| anyhow!("solver returned an inapplicable action: {}", action))?;
        if watch {
            println!("{}", state);
            thread::sleep(Duration::from_millis(100));
        }
    }
    println!("{}", state);
    Ok(())
}

fn lookup<'r, S>(
    solvers: &'r [(&'static str, &'static str, S)],
    key: &str,
) -> Result<&'r (&'static str, &'static str, S), Error> {
    solvers
        .iter()
        .find(|(known, _, _)| *known == key)
        .ok_or_else(|| {
            let known: Vec<&str> = solvers.iter().map(|(key, _, _)| *key).collect();
            Error::from(DriverError::UnknownStrategy {
                key: key.to_string(),
                known: known.join(", "),
            })
        })
}
