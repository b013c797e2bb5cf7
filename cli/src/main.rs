//! Pathfinder CLI — shortest paths between (random) nodes of a graph
//!
//! `pathfinder <VERTEX_FILE> <EDGE_FILE> [useIntermediateNode]`

use clap::Parser;
use pathfinder::{EarlyExit, EdgeMode, FinderConfig, PathFinder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, Level};

/// Positional mode that routes the path through a third node
const USE_INTERMEDIATE_NODE: &str = "useIntermediateNode";

#[derive(Parser)]
#[command(
    name = "pathfinder",
    version = pathfinder::version(),
    about = "Shortest paths between named graph nodes"
)]
struct Cli {
    /// Vertex list: one percent-encoded name per line
    vertex_file: PathBuf,

    /// Edge list: `name<TAB>name` per line
    edge_file: PathBuf,

    /// Pass `useIntermediateNode` to force the path through a third node
    mode: Option<String>,

    /// Start node (random if omitted)
    #[arg(long)]
    from: Option<String>,

    /// End node (random if omitted)
    #[arg(long)]
    to: Option<String>,

    /// Intermediate node; implies `useIntermediateNode` (random if omitted)
    #[arg(long)]
    via: Option<String>,

    /// Seed for random node selection
    #[arg(long, env = "PATHFINDER_SEED")]
    seed: Option<u64>,

    /// How edge-list lines become adjacency
    #[arg(long, default_value = "directed", env = "PATHFINDER_EDGE_MODE")]
    edge_mode: EdgeModeArg,

    /// When breadth-first search stops early
    #[arg(long, default_value = "target", env = "PATHFINDER_EARLY_EXIT")]
    early_exit: EarlyExitArg,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EdgeModeArg {
    Directed,
    Undirected,
}

impl From<EdgeModeArg> for EdgeMode {
    fn from(arg: EdgeModeArg) -> Self {
        match arg {
            EdgeModeArg::Directed => EdgeMode::Directed,
            EdgeModeArg::Undirected => EdgeMode::Undirected,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EarlyExitArg {
    Target,
    /// Legacy behaviour: stop once the start node is seen again
    Source,
    Never,
}

impl From<EarlyExitArg> for EarlyExit {
    fn from(arg: EarlyExitArg) -> Self {
        match arg {
            EarlyExitArg::Target => EarlyExit::Target,
            EarlyExitArg::Source => EarlyExit::Source,
            EarlyExitArg::Never => EarlyExit::Never,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One answered query
#[derive(Debug, Serialize, PartialEq)]
struct PathReport {
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    via: Option<String>,
    /// Edge count, -1 when no path exists
    length: i64,
    path: Vec<String>,
}

impl PathReport {
    fn new(from: &str, to: &str, via: Option<&str>, path: Vec<String>) -> Self {
        let length = if path.is_empty() {
            pathfinder::NO_PATH
        } else {
            path.len() as i64 - 1
        };
        PathReport {
            from: from.to_string(),
            to: to.to_string(),
            via: via.map(str::to_string),
            length,
            path,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let use_intermediate = query_mode(cli)?;

    let config = FinderConfig::new()
        .with_edge_mode(cli.edge_mode.into())
        .with_early_exit(cli.early_exit.into());
    let finder = PathFinder::load_with_config(&cli.vertex_file, &cli.edge_file, config)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = build_report(cli, &finder, &mut rng, use_intermediate)?;

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Whether the query is forced through an intermediate node
fn query_mode(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match cli.mode.as_deref() {
        None => Ok(cli.via.is_some()),
        Some(USE_INTERMEDIATE_NODE) => Ok(true),
        Some(other) => Err(format!(
            "unknown mode {:?}; usage: pathfinder <VERTEX_FILE> <EDGE_FILE> [{}]",
            other, USE_INTERMEDIATE_NODE
        )
        .into()),
    }
}

/// Resolve the query nodes and answer it
fn build_report(
    cli: &Cli,
    finder: &PathFinder,
    rng: &mut StdRng,
    use_intermediate: bool,
) -> Result<PathReport, Box<dyn std::error::Error>> {
    // Pick order: start, end, then intermediate
    let from = pick(finder, cli.from.as_deref(), rng)?;
    let to = pick(finder, cli.to.as_deref(), rng)?;

    if use_intermediate {
        let via = pick(finder, cli.via.as_deref(), rng)?;
        debug!("Query {:?} -> {:?} via {:?}", from, to, via);
        let path = finder.shortest_path_via(&from, &via, &to)?;
        Ok(PathReport::new(&from, &to, Some(&via), path))
    } else {
        debug!("Query {:?} -> {:?}", from, to);
        let path = finder.shortest_path(&from, &to)?;
        Ok(PathReport::new(&from, &to, None, path))
    }
}

fn pick(
    finder: &PathFinder,
    fixed: Option<&str>,
    rng: &mut StdRng,
) -> Result<String, Box<dyn std::error::Error>> {
    match fixed {
        Some(name) => Ok(name.to_string()),
        None => finder
            .random_node(rng)
            .map(str::to_string)
            .ok_or_else(|| "graph has no nodes to choose from".into()),
    }
}

fn render_text(report: &PathReport) -> String {
    if report.path.is_empty() {
        return match &report.via {
            Some(via) => format!(
                "There is no path between {} and {} going through {}.",
                report.from, report.to, via
            ),
            None => format!("There is no path between {} and {}.", report.from, report.to),
        };
    }

    let header = match &report.via {
        Some(via) => format!(
            "Path from {} to {} going through {} has length = {}:",
            report.from, report.to, via, report.length
        ),
        None => format!(
            "Path from {} to {} length = {}:",
            report.from, report.to, report.length
        ),
    };
    format!("{}\n{}", header, report.path.join(" --> "))
}
