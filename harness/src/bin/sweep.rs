//! `sweep`: solve vacuum-world and route problems with A*.
//!
//! Reports go to stdout; logs go to stderr (`RUST_LOG` overrides the
//! default `sweep=info` filter).
//!
//! Exit codes: 0 solved, 2 no solution or aborted, 1 error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use sweep_harness::config::{ProblemFile, ProblemSpec, RouteProblem, SearchSection, VacuumProblem};
use sweep_harness::runner::{demo_problems, run_problem, RunError, RunReport};
use tracing::error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deterministic A* over vacuum worlds and road maps")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Cap on node expansions (overrides a problem file's [search] section)
    #[arg(long, global = true)]
    max_expansions: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a TOML problem file
    Solve {
        /// Path to the problem file
        path: PathBuf,
    },
    /// Clean a corridor of rooms
    Vacuum {
        /// Room the agent starts in
        #[arg(long)]
        agent: String,
        /// Comma-separated rooms that start dirty
        #[arg(long, value_delimiter = ',')]
        dirty: Vec<String>,
        /// Comma-separated rooms, left to right
        #[arg(long, value_delimiter = ',', default_value = "A,B")]
        locations: Vec<String>,
    },
    /// Shortest route on the built-in culinary map
    Route {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Run the classic two-room scenarios
    Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sweep=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every problem was solved.
fn run(cli: &Cli) -> Result<bool, RunError> {
    let problems: Vec<(Option<&str>, ProblemFile)> = match &cli.command {
        Command::Solve { path } => vec![(None, ProblemFile::load(path)?)],
        Command::Vacuum {
            agent,
            dirty,
            locations,
        } => vec![(
            None,
            inline(ProblemSpec::Vacuum(VacuumProblem {
                locations: locations.clone(),
                agent: agent.clone(),
                dirty: dirty.clone(),
            })),
        )],
        Command::Route { from, to } => vec![(
            None,
            inline(ProblemSpec::Route(RouteProblem {
                from: from.clone(),
                to: to.clone(),
                metres_per_unit: None,
                nodes: Vec::new(),
                roads: Vec::new(),
            })),
        )],
        Command::Demo => demo_problems()
            .into_iter()
            .map(|(title, file)| (Some(title), file))
            .collect(),
    };

    let mut all_solved = true;
    for (title, mut file) in problems {
        if cli.max_expansions.is_some() {
            file.search.max_expansions = cli.max_expansions;
        }
        let run = run_problem(&file)?;
        all_solved &= run.is_solved();
        print_run(cli.format, title, &run);
    }
    Ok(all_solved)
}

fn inline(problem: ProblemSpec) -> ProblemFile {
    ProblemFile {
        search: SearchSection::default(),
        problem,
    }
}

fn print_run(format: Format, title: Option<&str>, run: &RunReport) {
    match format {
        Format::Text => {
            if let Some(title) = title {
                println!("== {title} ==");
            }
            print!("{}", run.rendered);
            println!("{}", run.summary);
            println!("report {}", run.report.digest);
        }
        Format::Json => println!("{}", run.report.as_json_str()),
    }
}
