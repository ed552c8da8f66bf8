// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::str::{FromStr, Lines, SplitWhitespace};

use rand::Rng;

use crate::algorithms::AlgorithmKind;
use crate::config::consts::{DEFAULT_MAX_EDGES, DEFAULT_MAX_VERTICES};
use crate::errors::RequestError;
use crate::graph::{Digraph, Graph, DEFAULT_WEIGHT};
use crate::protocol::random::random_graph;

/// A parsed client request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `GRAPH` or `RANDOM`: run every pipeline stage.
    Pipeline { graph: Graph },
    /// `ALG <name>` for one undirected algorithm.
    Single { algorithm: AlgorithmKind, graph: Graph },
    /// `ALG SCC`: edge lines are arcs.
    Directed { graph: Digraph },
}

/// Upper bounds on the header counts a request may declare.
///
/// Checked before any graph storage is allocated, so an oversized header is
/// rejected as a parse failure instead of being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_edges: DEFAULT_MAX_EDGES,
        }
    }
}

enum RequestKind {
    Graph,
    Random,
    Algorithm(AlgorithmKind),
}

/// Walks the header token by token, then the edge section line by line.
struct Cursor<'a> {
    lines: Lines<'a>,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            tokens: "".split_whitespace(),
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        loop {
            if let Some(token) = self.tokens.next() {
                return Some(token);
            }
            self.tokens = self.lines.next()?.split_whitespace();
        }
    }

    fn expect_keyword(&mut self, keyword: &str, detail: &str) -> Result<(), RequestError> {
        match self.next_token() {
            Some(token) if token == keyword => Ok(()),
            _ => Err(RequestError::parse(detail)),
        }
    }

    /// Next non-blank line, parsed as `<u> <v> [<w>]`.
    fn next_edge(&mut self) -> Result<EdgeLine, RequestError> {
        let line = self
            .lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| RequestError::parse("not enough edge lines"))?;
        parse_edge_line(line)
    }
}

/// Parses a whole request; `RANDOM` graphs draw from the thread RNG.
pub fn parse_request(text: &str, limits: RequestLimits) -> Result<Request, RequestError> {
    parse_request_with_rng(text, limits, &mut rand::thread_rng())
}

pub fn parse_request_with_rng<R: Rng>(
    text: &str,
    limits: RequestLimits,
    rng: &mut R,
) -> Result<Request, RequestError> {
    let mut cursor = Cursor::new(text);

    let kind = match cursor.next_token() {
        None => return Err(RequestError::parse("missing request type")),
        Some("GRAPH") => RequestKind::Graph,
        Some("RANDOM") => RequestKind::Random,
        Some("ALG") => {
            let name = cursor
                .next_token()
                .ok_or_else(|| RequestError::parse("expected 'ALG <name>'"))?;
            RequestKind::Algorithm(AlgorithmKind::from_str(name)?)
        }
        Some(_) => return Err(RequestError::parse("expected 'GRAPH', 'RANDOM' or 'ALG'")),
    };

    cursor.expect_keyword("V", "expected 'V <num_vertices>'")?;
    let vertex_count = cursor
        .next_token()
        .and_then(|token| token.parse::<usize>().ok())
        .filter(|&count| count > 0)
        .ok_or_else(|| RequestError::parse("invalid vertex count"))?;
    if vertex_count > limits.max_vertices {
        return Err(RequestError::parse(format!(
            "vertex count exceeds limit {}",
            limits.max_vertices
        )));
    }

    cursor.expect_keyword("E", "expected 'E <num_edges>'")?;
    let edge_count = cursor
        .next_token()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(|| RequestError::parse("invalid edge count"))?;
    if edge_count > limits.max_edges {
        return Err(RequestError::parse(format!(
            "edge count exceeds limit {}",
            limits.max_edges
        )));
    }

    match kind {
        RequestKind::Random => Ok(Request::Pipeline {
            graph: random_graph(vertex_count, edge_count, rng)?,
        }),
        RequestKind::Graph => Ok(Request::Pipeline {
            graph: read_graph(&mut cursor, vertex_count, edge_count, None)?,
        }),
        RequestKind::Algorithm(AlgorithmKind::Scc) => Ok(Request::Directed {
            graph: read_digraph(&mut cursor, vertex_count, edge_count)?,
        }),
        RequestKind::Algorithm(algorithm) => Ok(Request::Single {
            algorithm,
            graph: read_graph(&mut cursor, vertex_count, edge_count, Some(algorithm))?,
        }),
    }
}

struct EdgeLine {
    from: usize,
    to: usize,
    weight: Option<i64>,
}

fn parse_edge_line(line: &str) -> Result<EdgeLine, RequestError> {
    let invalid = || RequestError::parse("invalid edge line format");
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (from, to, weight) = match tokens.as_slice() {
        [from, to] => (from, to, None),
        [from, to, weight] => (from, to, Some(weight.parse::<i64>().map_err(|_| invalid())?)),
        _ => return Err(invalid()),
    };
    let from = from.parse::<usize>().map_err(|_| invalid())?;
    let to = to.parse::<usize>().map_err(|_| invalid())?;
    if weight.is_some_and(|weight| weight < 0) {
        return Err(RequestError::parse("negative weight"));
    }
    Ok(EdgeLine { from, to, weight })
}

fn read_graph(
    cursor: &mut Cursor<'_>,
    vertex_count: usize,
    edge_count: usize,
    algorithm: Option<AlgorithmKind>,
) -> Result<Graph, RequestError> {
    let mut graph = Graph::new(vertex_count)?;
    for _ in 0..edge_count {
        let edge = cursor.next_edge()?;
        let weight = match (edge.weight, algorithm) {
            (Some(weight), _) => weight,
            (None, Some(algorithm)) if algorithm.requires_weights() => {
                return Err(RequestError::parse(format!("missing weight for {}", algorithm)));
            }
            (None, _) => DEFAULT_WEIGHT,
        };
        graph.add_weighted_edge(edge.from, edge.to, weight)?;
    }
    Ok(graph)
}

fn read_digraph(
    cursor: &mut Cursor<'_>,
    vertex_count: usize,
    edge_count: usize,
) -> Result<Digraph, RequestError> {
    let mut graph = Digraph::new(vertex_count)?;
    for _ in 0..edge_count {
        let edge = cursor.next_edge()?;
        graph.add_arc(edge.from, edge.to)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Request, RequestError> {
        parse_request(text, RequestLimits::default())
    }

    #[test]
    fn test_graph_request() {
        let request = parse("GRAPH V 3 E 2\n0 1 4\n1 2\n").unwrap();
        let Request::Pipeline { graph } = request else {
            panic!("expected pipeline request");
        };
        assert_eq!(graph.edges(), vec![(0, 1, 4), (1, 2, 1)]);
    }

    #[test]
    fn test_header_may_span_lines() {
        let request = parse("GRAPH\nV 2\nE 1\n0 1\n").unwrap();
        assert!(matches!(request, Request::Pipeline { graph } if graph.edge_count() == 1));
    }

    #[test]
    fn test_blank_lines_between_edges_are_skipped() {
        let request = parse("GRAPH V 3 E 2\n\n0 1\n   \n1 2\n").unwrap();
        assert!(matches!(request, Request::Pipeline { graph } if graph.edge_count() == 2));
    }

    #[test]
    fn test_random_request_builds_requested_edges() {
        let request = parse("RANDOM V 8 E 10\n").unwrap();
        let Request::Pipeline { graph } = request else {
            panic!("expected pipeline request");
        };
        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn test_legacy_single_algorithm_request() {
        let request = parse("ALG EULER V 3 E 3\n0 1\n1 2\n2 0\n").unwrap();
        let Request::Single { algorithm, graph } = request else {
            panic!("expected single-algorithm request");
        };
        assert_eq!(algorithm, AlgorithmKind::Euler);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_scc_request_reads_arcs() {
        let request = parse("ALG SCC V 3 E 2\n0 1\n1 0\n").unwrap();
        let Request::Directed { graph } = request else {
            panic!("expected directed request");
        };
        assert_eq!(graph.adj(0), &[1]);
        assert_eq!(graph.adj(1), &[0]);
        assert!(graph.adj(2).is_empty());
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = parse("ALG DIJKSTRA V 2 E 0\n").unwrap_err();
        assert_eq!(err.to_string(), "ERR UNKNOWN ALGORITHM DIJKSTRA");
    }

    #[test]
    fn test_weighted_algorithms_require_weights() {
        let err = parse("ALG MST V 2 E 1\n0 1\n").unwrap_err();
        assert_eq!(err.to_string(), "ERR PARSE_FAILED: missing weight for MST");

        let ok = parse("ALG MAXFLOW V 2 E 1\n0 1 5\n").unwrap();
        assert!(matches!(ok, Request::Single { algorithm: AlgorithmKind::MaxFlow, .. }));
    }

    #[test]
    fn test_parse_failures() {
        struct TestCase {
            request: &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { request: "", expected: "missing request type" },
            TestCase { request: "   \n", expected: "missing request type" },
            TestCase { request: "PLOT V 2 E 0", expected: "expected 'GRAPH', 'RANDOM' or 'ALG'" },
            TestCase { request: "ALG", expected: "expected 'ALG <name>'" },
            TestCase { request: "GRAPH X 2 E 0", expected: "expected 'V <num_vertices>'" },
            TestCase { request: "GRAPH V 0 E 0", expected: "invalid vertex count" },
            TestCase { request: "GRAPH V -3 E 0", expected: "invalid vertex count" },
            TestCase { request: "GRAPH V two E 0", expected: "invalid vertex count" },
            TestCase { request: "GRAPH V 2 0", expected: "expected 'E <num_edges>'" },
            TestCase { request: "GRAPH V 2 E -1", expected: "invalid edge count" },
            TestCase { request: "GRAPH V 2 E 1\n0\n", expected: "invalid edge line format" },
            TestCase {
                request: "GRAPH V 2 E 1\n0 1 2 3\n",
                expected: "invalid edge line format",
            },
            TestCase { request: "GRAPH V 2 E 1\n0 x\n", expected: "invalid edge line format" },
            TestCase {
                request: "GRAPH V 2 E 1\n0 1 heavy\n",
                expected: "invalid edge line format",
            },
            TestCase { request: "GRAPH V 2 E 2\n0 1\n", expected: "not enough edge lines" },
            TestCase { request: "GRAPH V 2 E 1\n0 1 -4\n", expected: "negative weight" },
            TestCase { request: "GRAPH V 2 E 1\n0 5\n", expected: "vertex 5 out of range [0, 2)" },
            TestCase {
                request: "ALG SCC V 2 E 1\n2 0\n",
                expected: "vertex 2 out of range [0, 2)",
            },
            TestCase { request: "RANDOM V 3 E 4", expected: "too many edges for random graph" },
        ];

        for case in cases {
            let err = parse(case.request).unwrap_err();
            assert_eq!(
                err,
                RequestError::Parse(case.expected.to_string()),
                "request {:?}",
                case.request
            );
        }
    }

    #[test]
    fn test_header_counts_are_bounded_by_limits() {
        let limits = RequestLimits { max_vertices: 4, max_edges: 3 };

        let cases = [
            ("GRAPH V 5 E 0\n", "vertex count exceeds limit 4"),
            ("GRAPH V 4 E 4\n0 1\n", "edge count exceeds limit 3"),
            ("RANDOM V 18446744073709551615 E 1\n", "vertex count exceeds limit 4"),
            ("ALG SCC V 2 E 999999999999\n", "edge count exceeds limit 3"),
        ];
        for (request, expected) in cases {
            assert_eq!(
                parse_request(request, limits).unwrap_err(),
                RequestError::Parse(expected.to_string()),
                "request {:?}",
                request
            );
        }

        let at_limit = parse_request("GRAPH V 4 E 3\n0 1\n1 2\n2 3\n", limits).unwrap();
        assert!(matches!(at_limit, Request::Pipeline { graph } if graph.edge_count() == 3));
    }

    #[test]
    fn test_default_limits_reject_oversized_header() {
        let request = format!("GRAPH V {} E 0\n", DEFAULT_MAX_VERTICES + 1);
        assert_eq!(
            parse(&request).unwrap_err(),
            RequestError::Parse(format!("vertex count exceeds limit {}", DEFAULT_MAX_VERTICES))
        );
    }
}
