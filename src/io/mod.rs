/*!
# IO

Utilities for reading and writing weighted graphs as **edge lists**.

An edge list starts with a header line (see [`HeaderFormat`]), followed by one line
`u v [w]` per edge with **1-based** nodes and an optional integer weight (default `1`).
Lines starting with the comment identifier (default: `c`) and blank lines are skipped:
```text
p sp 4 3
c a comment
1 2 7
2 3
3 4 2
```

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands using the default settings.

All errors are reported as [`GraphError`]: [`GraphError::Io`] if the underlying reader or
writer fails, [`GraphError::Parse`] for malformed content, and the usual graph errors
(e.g. [`GraphError::OutOfRangeVertex`]) for content that violates the graph's invariants.
*/

pub mod edge_list;
pub mod header;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use header::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for creating a new [`GraphError::Parse`]
macro_rules! parse_error {
    ($line: expr, $($reason: tt)*) => {
        GraphError::Parse {
            line: $line,
            reason: format!($($reason)*),
        }
    };
}

/// Shorthand for returning `Err(GraphError::Parse)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond: expr, $line: expr, $($reason: tt)*) => {
        if !($cond) {
            return Err(parse_error!($line, $($reason)*));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator: expr, $line: expr, $name: expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(parse_error!($line, "Premature end of line when parsing {}", $name));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => return Err(parse_error!($line, "Cannot parse {} from {:?}", $name, token)),
        }
    }};
}

use parse_error;
use parse_next_value;
use raise_error_unless;
