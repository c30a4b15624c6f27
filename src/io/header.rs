//! # Headers
//!
//! A header(-line) for a graph file is defined by a series of whitespace-separated tokens
//! giving the size of the graph and possibly the problem the graph was created for.
//!
//! For example, shortest-path instances commonly use
//!     "p sp {n} {m}"
//! where n is the number of nodes and m the number of edge lines in the file.

use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Ignore entry
    Any,
    /// Match entry to str
    Str(String),
    /// Parse number of nodes
    NumNodes,
    /// Parse number of edges
    NumEdges,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

impl HeaderToken {
    /// When writing a header, this is the representation for HeaderToken::Any
    const ANY_STRING: &'static str = "0";
}

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format. Const parameters make sure that a format
/// can only be used once it contains both sizes and is terminated:
/// ```
/// use spgraphs::io::*;
///
/// let format: Header = HeaderFormat::new()
///     .str("p").str("sp").number_of_nodes().number_of_edges().end();
/// assert_eq!(format, Header::new_problem("sp"));
///
/// assert_eq!(format.parse_header("p sp 5 7", 1).unwrap(), (5, 7));
/// assert!(format.parse_header("p ds 5 7", 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat<
    // Set to *true* if the position for number of nodes was set
    const NODES_SET: bool = false,
    // Set to *true* if the position for number of edges was set
    const EDGES_SET: bool = false,
    // Set to *true* if `NODES_SET = true & EDGES_SET = true` and
    // the last entry matches `HeaderToken::End | HeaderToken::Rest`
    const END: bool = false,
>(SmallVec<[HeaderToken; 6]>);

/// A header is defined as a format that satisfies all prerequisites.
pub type Header = HeaderFormat<true, true, true>;

impl Default for HeaderFormat<true, true, true> {
    /// Number of nodes and edges are the third and fourth token in the header.
    /// Every other entry is ignored to not hard-code problem definitions.
    fn default() -> Self {
        Self(smallvec![
            HeaderToken::Any,
            HeaderToken::Any,
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::Rest,
        ])
    }
}

impl Header {
    /// Creates a new HeaderFormat `p {problem} {n} {m}` which is always valid
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }

    /// Tries to parse the header and extract the number of nodes and edges.
    /// `line_number` is only used for error reporting.
    ///
    /// # Errors
    /// Returns [`GraphError::Parse`] if `line` does not follow the format.
    pub fn parse_header(&self, line: &str, line_number: usize) -> Result<(NumNodes, NumEdges)> {
        let mut number_of_nodes = 0;
        let mut number_of_edges = 0;

        let mut parts = line.split_whitespace();

        for token in &self.0 {
            match token {
                HeaderToken::Any => {
                    raise_error_unless!(
                        parts.next().is_some(),
                        line_number,
                        "Header is shorter than expected"
                    );
                }
                HeaderToken::Str(expected) => {
                    let entry = parts.next();
                    raise_error_unless!(
                        entry == Some(expected.as_str()),
                        line_number,
                        "Expected {expected:?} in header, found {entry:?}"
                    );
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = parse_next_value!(parts, line_number, "number of nodes");
                }
                HeaderToken::NumEdges => {
                    number_of_edges = parse_next_value!(parts, line_number, "number of edges");
                }
                HeaderToken::End => {
                    raise_error_unless!(
                        parts.next().is_none(),
                        line_number,
                        "Header is longer than expected"
                    );
                }
                // We don't care about the rest
                HeaderToken::Rest => break,
            }
        }

        Ok((number_of_nodes, number_of_edges))
    }

    /// Writes the header line for a graph with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let header_str = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::Any => Some(HeaderToken::ANY_STRING.to_string()),
                HeaderToken::Str(s) => Some(s.to_string()),
                HeaderToken::NumNodes => Some(n.to_string()),
                HeaderToken::NumEdges => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .join(" ");
        writeln!(writer, "{header_str}")?;

        Ok(())
    }
}

impl HeaderFormat<false, false, false> {
    /// Creates a new empty format
    pub fn new() -> Self {
        HeaderFormat(smallvec![])
    }
}

impl<const NODES_SET: bool, const EDGES_SET: bool> HeaderFormat<NODES_SET, EDGES_SET, false> {
    /// Pushes a token that can be ignored onto the stack
    pub fn any(mut self) -> Self {
        self.0.push(HeaderToken::Any);
        self
    }

    /// Pushes a token that should match a string onto the stack
    pub fn str<S: Into<String>>(mut self, s: S) -> Self {
        self.0.push(HeaderToken::Str(s.into()));
        self
    }
}

impl<const EDGES_SET: bool> HeaderFormat<false, EDGES_SET, false> {
    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> HeaderFormat<true, EDGES_SET, false> {
        self.0.push(HeaderToken::NumNodes);
        HeaderFormat(self.0)
    }
}

impl<const NODES_SET: bool> HeaderFormat<NODES_SET, false, false> {
    /// Adds the number of edges token onto the stack
    pub fn number_of_edges(mut self) -> HeaderFormat<NODES_SET, true, false> {
        self.0.push(HeaderToken::NumEdges);
        HeaderFormat(self.0)
    }
}

impl HeaderFormat<true, true, false> {
    /// Marks the header as finished ensuring that no further tokens follow
    pub fn end(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::End);
        HeaderFormat(self.0)
    }

    /// Marks the header as finished ignoring all further tokens
    pub fn ignore_rest(mut self) -> HeaderFormat<true, true, true> {
        self.0.push(HeaderToken::Rest);
        HeaderFormat(self.0)
    }
}
