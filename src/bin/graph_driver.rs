//! graph_driver - runs the graph scenarios and prints what each algorithm produced.

use core::fmt;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use keygraph::{Graph, GraphError, GraphStatistics, MatrixKind, PathReport};

/// graph_driver - construction, traversal, cycle and shortest-path scenarios
#[derive(Debug, Parser)]
#[command(name = "graph_driver", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ten-vertex undirected graph: traversals, cycle check and hop-count paths.
    Undirected,

    /// Ten-vertex directed graph: traversals and cycle check.
    Directed,

    /// Import a symmetric 5x5 adjacency matrix.
    Matrix,

    /// Cycle detection on four small matrices, directed and undirected.
    Cycles,

    /// Weighted shortest paths on the nine-vertex example graph.
    ShortestPath {
        /// Engine to run.
        #[arg(short, long, value_enum, default_value_t = Engine::Dijkstra)]
        algorithm: Engine,

        /// Source key; together with `--to` replaces the built-in queries.
        #[arg(long, requires = "to")]
        from: Option<u64>,

        /// Destination key.
        #[arg(long, requires = "from")]
        to: Option<u64>,
    },

    /// Every scenario in order.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Engine {
    Dijkstra,
    BellmanFord,
    Unweighted,
}

#[derive(Debug, Serialize)]
struct Traversal {
    start: u64,
    dfs: Vec<u64>,
    bfs: Vec<u64>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
enum PathOutcome {
    Computed(PathReport),
    NegativeCycle { source: u64, destination: u64 },
}

#[derive(Debug, Default, Serialize)]
struct ScenarioReport {
    name: &'static str,
    #[serde(skip)]
    dump: String,
    statistics: GraphStatistics,
    is_directed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    traversals: Vec<Traversal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_cycle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected_cycle: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    paths: Vec<PathOutcome>,
}

impl ScenarioReport {
    fn new(name: &'static str, graph: &Graph) -> Self {
        Self {
            name,
            dump: graph.to_string(),
            statistics: graph.statistics(),
            is_directed: graph.is_directed(),
            ..Self::default()
        }
    }

    fn traverse(&mut self, graph: &Graph, start: u64) -> anyhow::Result<()> {
        self.traversals.push(Traversal {
            start,
            dfs: graph.dfs_order(start)?,
            bfs: graph.bfs_order(start)?,
        });
        Ok(())
    }
}

fn write_keys(f: &mut fmt::Formatter<'_>, label: &str, start: u64, keys: &[u64]) -> fmt::Result {
    write!(f, "{label} from {start}:")?;
    for key in keys {
        write!(f, " {key}")?;
    }
    writeln!(f)
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        write!(f, "{}", self.dump)?;
        let stats = &self.statistics;
        writeln!(
            f,
            "Out-degree: min {}, max {}, median {}, average {:.2}",
            stats.min_degree, stats.max_degree, stats.median_degree, stats.average_degree
        )?;
        for t in &self.traversals {
            write_keys(f, "DFS", t.start, &t.dfs)?;
            write_keys(f, "BFS", t.start, &t.bfs)?;
        }
        if let Some(found) = self.has_cycle {
            write!(f, "Has cycle: {found}")?;
            match self.expected_cycle {
                Some(expected) if expected == found => write!(f, " (as expected)")?,
                Some(expected) => write!(f, " (expected {expected})")?,
                None => {}
            }
            writeln!(f)?;
        }
        for outcome in &self.paths {
            match outcome {
                PathOutcome::Computed(report) => write!(f, "{report}")?,
                PathOutcome::NegativeCycle {
                    source,
                    destination,
                } => writeln!(
                    f,
                    "Shortest path from {source} to {destination}: negative cycle detected"
                )?,
            }
        }
        writeln!(f)
    }
}

fn keyed_graph(n: u64, is_directed: bool, edges: &[(u64, u64, i64)]) -> anyhow::Result<Graph> {
    let capacity = usize::try_from(n)?;
    let mut graph = Graph::create(capacity, is_directed)?;
    for key in 0..n {
        graph.add_vertex(key)?;
    }
    for &(src, dst, weight) in edges {
        graph
            .add_edge(src, dst, weight)
            .with_context(|| format!("adding edge {src} -> {dst}"))?;
    }
    Ok(graph)
}

fn undirected() -> anyhow::Result<ScenarioReport> {
    let graph = keyed_graph(
        10,
        false,
        &[
            (0, 5, 0),
            (0, 4, 0),
            (0, 3, 0),
            (1, 5, 0),
            (1, 6, 0),
            (1, 2, 0),
            (2, 7, 0),
            (2, 3, 0),
            (3, 4, 0),
            (3, 9, 0),
            (5, 6, 0),
            (5, 8, 0),
            (6, 7, 0),
            (8, 9, 0),
        ],
    )?;
    let mut report = ScenarioReport::new("undirected", &graph);
    report.traverse(&graph, 0)?;
    report.traverse(&graph, 8)?;
    report.has_cycle = Some(graph.has_cycle()?);
    for (src, dst) in [(9, 6), (5, 0), (0, 7), (1, 4)] {
        let path = graph.shortest_path_unweighted(src, dst)?;
        report.paths.push(PathOutcome::Computed(path));
    }
    Ok(report)
}

fn directed() -> anyhow::Result<ScenarioReport> {
    let graph = keyed_graph(
        10,
        true,
        &[
            (0, 5, 0),
            (0, 4, 0),
            (1, 5, 0),
            (1, 2, 0),
            (2, 7, 0),
            (3, 0, 0),
            (3, 2, 0),
            (4, 3, 0),
            (5, 6, 0),
            (5, 8, 0),
            (6, 1, 0),
            (7, 6, 0),
            (9, 3, 0),
            (9, 8, 0),
        ],
    )?;
    let mut report = ScenarioReport::new("directed", &graph);
    report.traverse(&graph, 0)?;
    report.traverse(&graph, 8)?;
    report.has_cycle = Some(graph.has_cycle()?);
    Ok(report)
}

fn matrix() -> anyhow::Result<ScenarioReport> {
    let adjm = [
        [0i64, 0, 1, 0, 0],
        [0, 0, 0, 1, 1],
        [1, 0, 0, 1, 0],
        [0, 1, 1, 0, 1],
        [0, 1, 0, 1, 0],
    ];
    let graph = Graph::from_adjacency_matrix(&adjm, MatrixKind::Binary, false)?;
    let mut report = ScenarioReport::new("matrix", &graph);
    report.traverse(&graph, 0)?;
    Ok(report)
}

fn cycles() -> anyhow::Result<Vec<ScenarioReport>> {
    let cases: [(&'static str, bool, bool, [[i64; 5]; 5]); 4] = [
        (
            "cycle-undirected-yes",
            false,
            true,
            [
                [0, 0, 1, 0, 0],
                [0, 0, 0, 1, 1],
                [1, 0, 0, 1, 0],
                [0, 1, 1, 0, 1],
                [0, 1, 0, 1, 0],
            ],
        ),
        (
            "cycle-undirected-no",
            false,
            false,
            [
                [0, 0, 1, 0, 0],
                [0, 0, 0, 1, 1],
                [1, 0, 0, 1, 0],
                [0, 1, 1, 0, 0],
                [0, 1, 0, 0, 0],
            ],
        ),
        (
            "cycle-directed-yes",
            true,
            true,
            [
                [0, 0, 1, 0, 0],
                [0, 0, 0, 1, 0],
                [0, 0, 0, 0, 0],
                [0, 0, 1, 0, 1],
                [0, 1, 0, 0, 0],
            ],
        ),
        (
            "cycle-directed-no",
            true,
            false,
            [
                [0, 0, 1, 0, 0],
                [0, 0, 0, 1, 0],
                [0, 0, 0, 0, 0],
                [0, 0, 1, 0, 1],
                [0, 0, 0, 0, 0],
            ],
        ),
    ];

    let mut reports = Vec::with_capacity(cases.len());
    for (name, is_directed, expected, adjm) in cases {
        let graph = Graph::from_adjacency_matrix(&adjm, MatrixKind::Binary, is_directed)?;
        let found = graph.has_cycle()?;
        if found != expected {
            log::warn!("{name}: cycle detection returned {found}, expected {expected}");
        }
        let mut report = ScenarioReport::new(name, &graph);
        report.has_cycle = Some(found);
        report.expected_cycle = Some(expected);
        reports.push(report);
    }
    Ok(reports)
}

fn run_engine(graph: &Graph, engine: Engine, src: u64, dst: u64) -> anyhow::Result<PathOutcome> {
    let result = match engine {
        Engine::Dijkstra => graph.shortest_path_dijkstra(src, dst),
        Engine::BellmanFord => graph.shortest_path_bellman_ford(src, dst),
        Engine::Unweighted => graph.shortest_path_unweighted(src, dst),
    };
    match result {
        Ok(report) => Ok(PathOutcome::Computed(report)),
        Err(GraphError::NegativeCycle) => Ok(PathOutcome::NegativeCycle {
            source: src,
            destination: dst,
        }),
        Err(err) => Err(err).with_context(|| format!("shortest path {src} -> {dst}")),
    }
}

fn shortest_path(engine: Engine, query: Option<(u64, u64)>) -> anyhow::Result<Vec<ScenarioReport>> {
    let graph = keyed_graph(
        9,
        false,
        &[
            (0, 1, 4),
            (0, 7, 8),
            (1, 2, 8),
            (1, 7, 11),
            (2, 3, 7),
            (2, 8, 2),
            (2, 5, 4),
            (3, 5, 14),
            (3, 4, 9),
            (4, 5, 10),
            (5, 6, 2),
            (6, 8, 6),
            (6, 7, 1),
            (7, 8, 7),
        ],
    )?;
    let queries = match query {
        Some(q) => vec![q],
        None => vec![(0, 4), (0, 2), (7, 3), (4, 1), (8, 0)],
    };

    let mut report = ScenarioReport::new("shortest-path", &graph);
    for (src, dst) in queries {
        report.paths.push(run_engine(&graph, engine, src, dst)?);
    }
    let mut reports = vec![report];

    if engine == Engine::BellmanFord && query.is_none() {
        let cyclic = keyed_graph(4, true, &[(0, 1, 1), (1, 2, -1), (2, 3, -1), (3, 1, -1)])?;
        let mut report = ScenarioReport::new("negative-cycle", &cyclic);
        report.paths.push(run_engine(&cyclic, engine, 0, 3)?);
        reports.push(report);
    }
    Ok(reports)
}

fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        let json = serde_json::to_string_pretty(data)?;
        println!("{json}");
    } else {
        display_fn(data);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Library diagnostics go to stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("keygraph", level)
            .filter_module("graph_driver", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_target(false)
            .init();
    }

    let reports = match cli.command {
        Command::Undirected => vec![undirected()?],
        Command::Directed => vec![directed()?],
        Command::Matrix => vec![matrix()?],
        Command::Cycles => cycles()?,
        Command::ShortestPath {
            algorithm,
            from,
            to,
        } => shortest_path(algorithm, from.zip(to))?,
        Command::All => {
            let mut all = vec![undirected()?, directed()?, matrix()?];
            all.extend(cycles()?);
            all.extend(shortest_path(Engine::Dijkstra, None)?);
            all
        }
    };

    print_output(&reports, &cli.global, |reports| {
        for report in reports {
            print!("{report}");
        }
    })
}
