//! Line-oriented command driver used by the `adjgraph` binary.
//!
//! A [`Session`] holds at most one graph. Each input line parses into a
//! [`Command`]; executing it yields an [`Output`] that renders either as
//! the classic text report (`Display`) or as JSON (`serde`).

use core::fmt;
use core::str::FromStr;

use clap::{ColorChoice, CommandFactory, Parser, Subcommand};
use serde::Serialize;

use crate::error::GraphError;
use crate::graph::adjacency::write_vertex_line;
use crate::graph::{checked_vertex_count, Edge, Graph, ShortestPaths, DEFAULT_WEIGHT};

/// One input line: the first word names the command.
#[derive(Debug, Parser)]
#[command(
    name = "adjgraph",
    multicall = true,
    disable_help_subcommand = true,
    color = ColorChoice::Never,
    help_template = "{all-args}"
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a graph with N vertices
    Create {
        /// Requested vertex count, validated on execution
        #[arg(value_name = "N", allow_negative_numbers = true)]
        vertices: i64,
    },
    /// Add a directed edge
    #[command(name = "add")]
    AddEdge {
        /// Source vertex
        #[arg(allow_negative_numbers = true)]
        src: i64,
        /// Destination vertex
        #[arg(allow_negative_numbers = true)]
        dest: i64,
        /// Edge weight
        #[arg(default_value_t = DEFAULT_WEIGHT, allow_negative_numbers = true)]
        weight: i64,
    },
    /// Add edges in both directions
    #[command(name = "undirected")]
    AddUndirected {
        /// First endpoint
        #[arg(allow_negative_numbers = true)]
        a: i64,
        /// Second endpoint
        #[arg(allow_negative_numbers = true)]
        b: i64,
        /// Weight of both directed entries
        #[arg(default_value_t = DEFAULT_WEIGHT, allow_negative_numbers = true)]
        weight: i64,
    },
    /// Remove the first edge SRC -> DEST
    #[command(name = "remove")]
    RemoveEdge {
        /// Source vertex
        #[arg(allow_negative_numbers = true)]
        src: i64,
        /// Destination vertex
        #[arg(allow_negative_numbers = true)]
        dest: i64,
    },
    /// Print the adjacency lists
    #[command(alias = "display")]
    Show,
    /// Breadth-first traversal
    Bfs {
        /// Start vertex
        #[arg(allow_negative_numbers = true)]
        start: i64,
    },
    /// Depth-first traversal
    Dfs {
        /// Start vertex
        #[arg(allow_negative_numbers = true)]
        start: i64,
    },
    /// Shortest distances from START
    Dijkstra {
        /// Start vertex
        #[arg(allow_negative_numbers = true)]
        start: i64,
    },
    /// Drop the current graph
    Clear,
    /// Show this message
    #[command(alias = "?")]
    Help,
    /// Leave
    #[command(alias = "quit")]
    Exit,
}

impl FromStr for Command {
    type Err = clap::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        CommandLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

/// Usage summary listing every command, as printed by `help`.
pub fn usage() -> String {
    CommandLine::command().render_help().to_string()
}

/// Which traversal produced an [`Output::Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
}

/// The result of executing one [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    /// A status line.
    Message {
        /// Human-readable text.
        text: String,
    },
    /// Adjacency lists, outer index is the source vertex.
    Adjacency {
        /// Outgoing edges per vertex in iteration order.
        vertices: Vec<Vec<Edge>>,
    },
    /// A BFS or DFS visit order.
    Traversal {
        /// Traversal that ran.
        algorithm: Algorithm,
        /// Start vertex.
        start: usize,
        /// Visited vertices in order.
        order: Vec<usize>,
    },
    /// Dijkstra's distance table.
    Distances {
        /// The full report.
        paths: ShortestPaths,
    },
    /// Usage text.
    Help {
        /// The rendered command list.
        text: String,
    },
    /// The session should end.
    Exit,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message { text } => f.write_str(text),
            Self::Adjacency { vertices } => {
                writeln!(f, "=== Graph Adjacency List ===")?;
                for (v, edges) in vertices.iter().enumerate() {
                    write_vertex_line(f, v, edges)?;
                    writeln!(f)?;
                }
                f.write_str("=============================")
            }
            Self::Traversal {
                algorithm,
                start,
                order,
            } => {
                let name = match algorithm {
                    Algorithm::Bfs => "BFS",
                    Algorithm::Dfs => "DFS",
                };
                writeln!(f, "=== {name} Traversal starting from vertex {start} ===")?;
                f.write_str("Visit order:")?;
                for v in order {
                    write!(f, " {v}")?;
                }
                Ok(())
            }
            Self::Distances { paths } => {
                writeln!(f, "=== Dijkstra's Shortest Path from vertex {} ===", paths.start())?;
                write!(f, "{paths}")
            }
            Self::Help { text } => f.write_str(text.trim_end()),
            Self::Exit => Ok(()),
        }
    }
}

/// Why a command could not be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The command needs a graph and none has been created.
    NoGraph,
    /// The graph rejected the operation.
    Graph(GraphError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGraph => f.write_str("no graph yet, run `create N` first"),
            Self::Graph(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoGraph => None,
            Self::Graph(err) => Some(err),
        }
    }
}

impl From<GraphError> for SessionError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}

/// Interactive state: the current graph, if any.
#[derive(Debug, Default)]
pub struct Session {
    graph: Option<Graph>,
}

impl Session {
    /// Creates a session without a graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current graph.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    fn require(&self) -> Result<&Graph, SessionError> {
        self.graph.as_ref().ok_or(SessionError::NoGraph)
    }

    fn require_mut(&mut self) -> Result<&mut Graph, SessionError> {
        self.graph.as_mut().ok_or(SessionError::NoGraph)
    }

    /// Executes one command against the session.
    ///
    /// A failed command leaves the session unchanged; `create` replaces any
    /// existing graph only once the new one has been built.
    ///
    /// # Errors
    /// Returns [`SessionError::NoGraph`] for graph commands issued before
    /// `create`, and [`SessionError::Graph`] for anything the graph rejects.
    pub fn execute(&mut self, command: Command) -> Result<Output, SessionError> {
        let output = match command {
            Command::Create { vertices } => {
                let graph = checked_vertex_count(vertices).and_then(Graph::new)?;
                self.graph = Some(graph);
                message(format!("Graph created successfully with {vertices} vertices"))
            }
            Command::AddEdge { src, dest, weight } => {
                let graph = self.require_mut()?;
                let (s, d) = (graph.checked_vertex(src)?, graph.checked_vertex(dest)?);
                graph.add_edge(s, d, weight)?;
                message(format!("Edge added: {s} -> {d} (weight: {weight})"))
            }
            Command::AddUndirected { a, b, weight } => {
                let graph = self.require_mut()?;
                let (a, b) = (graph.checked_vertex(a)?, graph.checked_vertex(b)?);
                graph.add_undirected_edge(a, b, weight)?;
                message(format!("Edge added: {a} <-> {b} (weight: {weight})"))
            }
            Command::RemoveEdge { src, dest } => {
                let graph = self.require_mut()?;
                let (s, d) = (graph.checked_vertex(src)?, graph.checked_vertex(dest)?);
                graph.remove_edge(s, d)?;
                message(format!("Edge removed: {s} -> {d}"))
            }
            Command::Show => {
                let graph = self.require()?;
                let vertices = (0..graph.vertex_count())
                    .map(|v| graph.edge_list(v).iter().copied().collect())
                    .collect();
                Output::Adjacency { vertices }
            }
            Command::Bfs { start } => {
                let graph = self.require()?;
                let start = graph.checked_vertex(start)?;
                Output::Traversal {
                    algorithm: Algorithm::Bfs,
                    start,
                    order: graph.bfs(start)?,
                }
            }
            Command::Dfs { start } => {
                let graph = self.require()?;
                let start = graph.checked_vertex(start)?;
                Output::Traversal {
                    algorithm: Algorithm::Dfs,
                    start,
                    order: graph.dfs(start)?,
                }
            }
            Command::Dijkstra { start } => {
                let graph = self.require()?;
                let start = graph.checked_vertex(start)?;
                Output::Distances {
                    paths: graph.dijkstra(start)?,
                }
            }
            Command::Clear => {
                self.graph = None;
                message("Graph cleared".to_owned())
            }
            Command::Help => Output::Help { text: usage() },
            Command::Exit => Output::Exit,
        };
        Ok(output)
    }
}

fn message(text: String) -> Output {
    Output::Message { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> Result<Output, SessionError> {
        session.execute(line.parse().unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!("create 5".parse::<Command>().unwrap(), Command::Create { vertices: 5 });
        assert_eq!(
            "add 0 1".parse::<Command>().unwrap(),
            Command::AddEdge { src: 0, dest: 1, weight: 1 }
        );
        assert_eq!(
            "  add 2 3 -7 ".parse::<Command>().unwrap(),
            Command::AddEdge { src: 2, dest: 3, weight: -7 }
        );
        assert_eq!(
            "undirected 1 4".parse::<Command>().unwrap(),
            Command::AddUndirected { a: 1, b: 4, weight: DEFAULT_WEIGHT }
        );
        assert_eq!(
            "remove 1 2".parse::<Command>().unwrap(),
            Command::RemoveEdge { src: 1, dest: 2 }
        );
        assert_eq!("create -3".parse::<Command>().unwrap(), Command::Create { vertices: -3 });
        assert_eq!("display".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("dijkstra 0".parse::<Command>().unwrap(), Command::Dijkstra { start: 0 });
    }

    #[test]
    fn rejects_malformed_lines() {
        use clap::error::ErrorKind;

        assert!("jump 1".parse::<Command>().is_err());
        assert!("show now".parse::<Command>().is_err());
        assert_eq!(
            "add 1".parse::<Command>().unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            "bfs x".parse::<Command>().unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn usage_lists_every_command() {
        let text = usage();
        for name in ["create", "add", "undirected", "remove", "show", "bfs", "dfs", "dijkstra", "clear", "exit"] {
            assert!(text.contains(name), "usage is missing `{name}`:\n{text}");
        }
    }

    #[test]
    fn session_requires_a_graph() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "bfs 0"), Err(SessionError::NoGraph));
        assert_eq!(
            run(&mut session, "create 0"),
            Err(SessionError::Graph(GraphError::InvalidVertexCount { requested: 0 }))
        );
        assert!(session.graph().is_none());
    }

    #[test]
    fn session_runs_a_full_workflow() {
        let mut session = Session::new();
        run(&mut session, "create 4").unwrap();
        for line in ["add 0 1", "add 0 2", "add 1 3", "add 2 3"] {
            run(&mut session, line).unwrap();
        }

        let bfs = run(&mut session, "bfs 0").unwrap();
        assert_eq!(
            bfs,
            Output::Traversal {
                algorithm: Algorithm::Bfs,
                start: 0,
                order: vec![0, 2, 1, 3]
            }
        );
        assert_eq!(
            bfs.to_string(),
            "=== BFS Traversal starting from vertex 0 ===\nVisit order: 0 2 1 3"
        );

        assert_eq!(
            run(&mut session, "remove 3 0"),
            Err(SessionError::Graph(GraphError::EdgeNotFound { src: 3, dest: 0 }))
        );
        assert_eq!(
            run(&mut session, "add 0 9"),
            Err(SessionError::Graph(GraphError::VertexOutOfRange { vertex: 9, vertex_count: 4 }))
        );

        let show = run(&mut session, "show").unwrap();
        assert_eq!(
            show.to_string(),
            "=== Graph Adjacency List ===\n\
             Vertex 0: -> 2(w:1) -> 1(w:1)\n\
             Vertex 1: -> 3(w:1)\n\
             Vertex 2: -> 3(w:1)\n\
             Vertex 3: No connections\n\
             ============================="
        );

        run(&mut session, "clear").unwrap();
        assert!(session.graph().is_none());
    }

    #[test]
    fn outputs_serialize_with_a_kind_tag() {
        let mut session = Session::new();
        run(&mut session, "create 2").unwrap();
        run(&mut session, "add 0 1 3").unwrap();

        let json = serde_json::to_value(run(&mut session, "dfs 0").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "traversal", "algorithm": "dfs", "start": 0, "order": [0, 1] })
        );

        let json = serde_json::to_value(run(&mut session, "show").unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "adjacency", "vertices": [[{ "to": 1, "weight": 3 }], []] })
        );

        let help = run(&mut session, "help").unwrap();
        let json = serde_json::to_value(&help).unwrap();
        assert_eq!(json["kind"], "help");
        let text = json["text"].as_str().unwrap();
        assert!(text.contains("create") && text.contains("dijkstra"));
        assert_eq!(help.to_string(), usage().trim_end());
    }
}
