//! # EdgeList
//!
//! The EdgeList-Format consists of a header, followed by `m` non-comment-lines
//! `u v [w]` representing a directed edge `WeightedEdge(u - 1, v - 1, w)`.
//! A missing weight defaults to `1`; negative weights are rejected.

use std::io::Lines;

use tracing::debug;

use super::*;
use crate::{config::GraphLimits, error::check_node};

/// Upper bound on the edge buffer reserved from the header alone
const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// A GraphReader for the EdgeList-Format
///
/// # Examples
/// ```
/// use spgraphs::{prelude::*, io::*};
///
/// let input = "p sp 3 2\nc undirected, weighted\n1 2 4\n2 3\n";
/// let graph: ArenaGraph = EdgeListReader::new()
///     .undirected(true)
///     .try_read_graph(input.as_bytes())
///     .unwrap();
///
/// assert_eq!(graph.number_of_edges(), 4);
/// assert_eq!(graph.dijkstra_tree(2).distance_to(0), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// If set, every non-loop edge is also inserted in reverse direction
    undirected: bool,
    /// Limits of the created graph
    limits: GraphLimits,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
            undirected: false,
            limits: GraphLimits::default(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Treats every edge line as an undirected edge
    pub fn undirected(mut self, undirected: bool) -> EdgeListReader {
        self.undirected = undirected;
        self
    }

    /// Updates the limits of the created graph
    pub fn limits(mut self, limits: GraphLimits) -> EdgeListReader {
        self.limits = limits;
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    /// The header is checked against the configured limits before any edge is read;
    /// every edge line yields at least one edge, so `m` is a lower bound on the graph size.
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader =
            EdgeListEdgesReader::try_new(reader, &self.header, &self.comment_identifier)?;
        let n = edges_reader.number_of_nodes();
        let m = edges_reader.number_of_edges();

        self.limits.check_nodes(n)?;
        self.limits.check_edges(m as u64)?;

        let directions = if self.undirected { 2 } else { 1 };
        let mut edges = Vec::with_capacity(MAX_PREALLOCATED_EDGES.min(directions * m as usize));
        let mut lines = 0;
        while let Some(edge) = edges_reader.next() {
            let edge = edge?;
            lines += 1;
            raise_error_unless!(
                lines <= m as usize,
                edges_reader.line_number(),
                "Header announces {m} edges, but more were found"
            );

            edges.push(edge);
            if self.undirected && !edge.is_loop() {
                edges.push(edge.reverse());
            }
            self.limits.check_edges(edges.len() as u64)?;
        }

        raise_error_unless!(
            lines == m as usize,
            edges_reader.line_number(),
            "Header announces {m} edges, but {lines} were found"
        );

        debug!(
            n,
            m,
            undirected = self.undirected,
            "read edge list"
        );

        G::try_from_edges_with_limits(n, edges, self.limits)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator over the (0-based) edges of an edge list; consumes the reader
pub struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of lines consumed so far
    line_number: usize,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, header_format: &Header, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            line_number: 0,
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
        };

        let Some(header) = edge_list_reader.next_non_comment_line()? else {
            return Err(parse_error!(edge_list_reader.line_number, "Header not found"));
        };

        (
            edge_list_reader.number_of_nodes,
            edge_list_reader.number_of_edges,
        ) = header_format.parse_header(&header, edge_list_reader.line_number)?;

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the (1-based) number of the last line that was read
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for EdgeListEdgesReader<'_, R> {
    type Item = Result<WeightedEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

impl<R: BufRead> EdgeListEdgesReader<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            if line.trim().is_empty() || line.starts_with(self.comment_identifier) {
                continue;
            }
            return Ok(Some(line));
        }
        Ok(None)
    }

    /// Converts a 1-based node from the file into a 0-based node
    fn parse_node(&self, node: Node) -> Result<Node> {
        raise_error_unless!(node > 0, self.line_number, "Nodes are 1-based, found 0");
        check_node(node - 1, self.number_of_nodes)?;
        Ok(node - 1)
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<WeightedEdge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };
        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, self.line_number, "source node");
        let dest: Node = parse_next_value!(parts, self.line_number, "target node");
        let (u, v) = (self.parse_node(from)?, self.parse_node(dest)?);

        let weight: i64 = match parts.next() {
            None => UNIT_WEIGHT as i64,
            Some(token) => token.parse().map_err(|_| {
                parse_error!(self.line_number, "Cannot parse weight from {token:?}")
            })?,
        };
        raise_error_unless!(
            parts.next().is_none(),
            self.line_number,
            "Unexpected tokens after edge"
        );

        if weight < 0 {
            return Err(GraphError::NegativeWeight { u, v, weight });
        }
        let weight =
            Weight::try_from(weight).map_err(|_| GraphError::WeightOutOfRange { u, v, weight })?;

        Ok(Some(WeightedEdge(u, v, weight)))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// HeaderFormat
    header: Header,
}

impl Default for EdgeListWriter {
    /// Writes `p sp {n} {m}` headers
    fn default() -> Self {
        Self {
            header: Header::new_problem("sp"),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListWriter {
        self.header = format;
        self
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    /// Writes every directed edge of the graph; undirected graphs thus produce
    /// both directions of each edge.
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header.write_header(
            &mut writer,
            graph.number_of_nodes(),
            graph.number_of_edges(),
        )?;

        for WeightedEdge(u, v, w) in graph.edges() {
            writeln!(writer, "{} {} {}", u + 1, v + 1, w)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        EdgeListWriter::default().try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Resource;
    use itertools::Itertools;

    const WEIGHTED_UNDIRECTED: &str = "p sp 5 5
c vertices are 1-based
1 2 4
1 3 1
3 2 2
2 4 1
3 5 5
";

    fn read<G: GraphFromScratch>(input: &str) -> Result<G> {
        EdgeListReader::new().try_read_graph(input.as_bytes())
    }

    #[test]
    fn weighted_undirected_shortest_paths() {
        let graph: ArenaGraph = EdgeListReader::new()
            .undirected(true)
            .try_read_graph(WEIGHTED_UNDIRECTED.as_bytes())
            .unwrap();
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.number_of_edges(), 10);

        let tree = graph.dijkstra_tree(0);
        assert_eq!(tree.raw_distances(), &[0, 3, 1, 4, 6]);

        let path = tree.path_to(3).into_iter().map(|u| u + 1).collect_vec();
        assert_eq!(path, vec![1, 3, 2, 4]);
    }

    #[test]
    fn directed_with_default_weights() {
        let graph: CsrGraph = read("p sp 3 3\n1 2\n\n2 3 0\nc trailing comment\n3 3 9\n").unwrap();
        assert_eq!(
            graph.ordered_edges(),
            vec![
                WeightedEdge(0, 1, 1),
                WeightedEdge(1, 2, 0),
                WeightedEdge(2, 2, 9)
            ]
        );
    }

    #[test]
    fn custom_settings() {
        let graph: CsrGraph = EdgeListReader::new()
            .header_format(HeaderFormat::new().number_of_nodes().number_of_edges().end())
            .comment_identifier("%")
            .try_read_graph("% comment\n2 1\n% another\n2 1 3\n".as_bytes())
            .unwrap();
        assert_eq!(graph.ordered_edges(), vec![WeightedEdge(1, 0, 3)]);
    }

    #[test]
    fn invalid_content() {
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n1 4 2\n"),
            Err(GraphError::OutOfRangeVertex { node: 3, n: 3 })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n0 1\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n1 2 -5\n"),
            Err(GraphError::NegativeWeight { u: 0, v: 1, weight: -5 })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n1 2 5000000000\n"),
            Err(GraphError::WeightOutOfRange { .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n1 2 x\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n1 2 1 1\n"),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\nc only comments\n1\n"),
            Err(GraphError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn invalid_structure() {
        assert!(matches!(
            read::<ArenaGraph>("c nothing\n"),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 2\n1 2\n"),
            Err(GraphError::Parse { .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 3 1\n1 2\n2 3\n"),
            Err(GraphError::Parse { .. })
        ));
        assert!(matches!(
            read::<ArenaGraph>("p sp 0 0\n"),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn limits() {
        let reader = EdgeListReader::new()
            .undirected(true)
            .limits(GraphLimits::new().max_edges(9));
        let result: Result<ArenaGraph> = reader.try_read_graph(WEIGHTED_UNDIRECTED.as_bytes());
        assert!(matches!(result, Err(GraphError::CapacityExceeded { .. })));
    }

    #[test]
    fn header_exceeding_limits() {
        let reader = EdgeListReader::new()
            .undirected(true)
            .limits(GraphLimits::new().max_nodes(10).max_edges(10));

        let result: Result<ArenaGraph> =
            reader.try_read_graph("p sp 3 4000000000\n1 2 1\n".as_bytes());
        assert!(matches!(
            result,
            Err(GraphError::CapacityExceeded {
                resource: Resource::Edges,
                requested: 4000000000,
                limit: 10
            })
        ));

        let result: Result<ArenaGraph> = reader.try_read_graph("p sp 11 0\n".as_bytes());
        assert!(matches!(
            result,
            Err(GraphError::CapacityExceeded {
                resource: Resource::Nodes,
                ..
            })
        ));
    }

    #[test]
    fn stops_at_first_surplus_edge() {
        let input = format!("p sp 3 2\n1 2\n2 3\n3 1\n{}", "1 1 x\n".repeat(100));
        assert!(matches!(
            read::<ArenaGraph>(&input),
            Err(GraphError::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn mirrored_edges_count_against_limits() {
        let reader = EdgeListReader::new()
            .undirected(true)
            .limits(GraphLimits::new().max_edges(3));

        let result: Result<CsrGraph> = reader.try_read_graph("p sp 3 2\n1 2\n3 3\n".as_bytes());
        assert_eq!(result.unwrap().number_of_edges(), 3);

        let result: Result<CsrGraph> = reader.try_read_graph("p sp 3 2\n1 2\n2 3\n".as_bytes());
        assert!(matches!(
            result,
            Err(GraphError::CapacityExceeded { requested: 4, limit: 3, .. })
        ));
    }

    #[test]
    fn write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.sp");

        let graph = ArenaGraph::from_edges(
            5,
            [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 4, 5)],
        );
        graph.try_write_edge_list_file(&path).unwrap();

        let read_back = CsrGraph::try_read_edge_list_file(&path).unwrap();
        assert_eq!(read_back.ordered_edges(), graph.ordered_edges());

        let undirected: ArenaGraph = EdgeListReader::new()
            .undirected(true)
            .try_read_graph_file(&path)
            .unwrap();
        assert_eq!(undirected.number_of_edges(), 10);
        assert_eq!(undirected.dijkstra_tree(3).distance_to(0), Some(4));

        let copy = dir.path().join("copy.sp");
        EdgeListWriter::new()
            .try_write_graph_file(&undirected, &copy)
            .unwrap();
        assert!(std::fs::read_to_string(&copy).unwrap().starts_with("p sp 5 10\n"));

        assert!(matches!(
            ArenaGraph::try_read_edge_list_file(dir.path().join("missing.sp")),
            Err(GraphError::Io(_))
        ));
    }

    #[test]
    fn write_then_read() {
        let graph = ArenaGraph::from_edges(4, [(0, 1, 3), (1, 2, 0), (3, 0, 7), (0, 1, 1)]);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.starts_with("p sp 4 4\n"));

        let read_back = CsrGraph::try_read_edge_list(buffer.as_slice()).unwrap();
        assert_eq!(read_back.ordered_edges(), graph.ordered_edges());
    }
}
