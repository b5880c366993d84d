//! Plain text edge lists.
//!
//! The input is a whitespace separated token stream of records `<source> <destination> <distance>`.
//! Line breaks carry no meaning besides error positions.
//! The list ends with the tokens `END OF`; everything after them is ignored.
//! Each record becomes one undirected connection.
//!
//! ```text
//! Berlin Potsdam 35
//! Potsdam Leipzig 160
//! END OF
//! ```

use super::*;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not read edge list: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: distance `{token}` is not a number")]
    InvalidDistance { line: usize, token: String },
    #[error("line {line}: negative distance {distance}")]
    NegativeDistance { line: usize, distance: i64 },
    #[error("line {line}: distance {distance} exceeds the maximum of {max}")]
    DistanceTooLarge { line: usize, distance: i64, max: Weight },
    #[error("line {line}: record is cut off by the end of the input")]
    TruncatedRecord { line: usize },
}

/// What a successful import read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub num_connections: usize,
    /// Whether the list was closed by `END OF` rather than by the end of the input.
    pub terminated: bool,
}

/// Whitespace separated tokens read line by line, tracking the current line number.
pub struct Tokens<R> {
    reader: R,
    line: String,
    line_number: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens {
            reader,
            line: String::new(),
            line_number: 0,
            pending: Vec::new().into_iter(),
        }
    }

    /// The next token or `None` at the end of the input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.next() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.pending = self.line.split_whitespace().map(str::to_string).collect::<Vec<_>>().into_iter();
        }
    }

    /// Line of the most recently read token, starting at 1.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

fn parse_distance(token: &str, line: usize) -> Result<Weight, ImportError> {
    let distance: i64 = token.parse().map_err(|_| ImportError::InvalidDistance {
        line,
        token: token.to_string(),
    })?;

    if distance < 0 {
        return Err(ImportError::NegativeDistance { line, distance });
    }
    if distance > i64::from(MAX_WEIGHT) {
        return Err(ImportError::DistanceTooLarge { line, distance, max: MAX_WEIGHT });
    }

    Ok(distance as Weight)
}

/// Read all records from `reader` into `graph`.
///
/// Locations are resolved in the order they first appear, source before destination.
/// Records read before an error stay in the graph.
pub fn read_edge_list<R: BufRead>(reader: R, graph: &mut LocationGraph) -> Result<ImportSummary, ImportError> {
    let mut tokens = Tokens::new(reader);
    let mut num_connections = 0;

    loop {
        let source = match tokens.next_token()? {
            Some(token) => token,
            None => {
                return Ok(ImportSummary {
                    num_connections,
                    terminated: false,
                })
            }
        };
        let destination = tokens.next_token()?.ok_or(ImportError::TruncatedRecord { line: tokens.line_number() })?;

        if source == "END" && destination == "OF" {
            return Ok(ImportSummary {
                num_connections,
                terminated: true,
            });
        }

        let distance = tokens.next_token()?.ok_or(ImportError::TruncatedRecord { line: tokens.line_number() })?;
        let distance = parse_distance(&distance, tokens.line_number())?;

        let from = graph.resolve_location(&source);
        let to = graph.resolve_location(&destination);
        graph.add_undirected(from, to, distance);
        num_connections += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(input: &str) -> (LocationGraph, Result<ImportSummary, ImportError>) {
        let mut graph = LocationGraph::new();
        let result = read_edge_list(input.as_bytes(), &mut graph);
        (graph, result)
    }

    fn links(graph: &LocationGraph, name: &str) -> Vec<(String, Weight)> {
        let id = graph.location_id(name).unwrap();
        graph.link_iter(id).map(|link| (graph.name(link.node).to_string(), link.weight)).collect()
    }

    #[test]
    fn reads_records_until_terminator() {
        let (graph, result) = import("A B 5\nB C 3\nA C 10\nEND OF\n");
        assert_eq!(
            result.unwrap(),
            ImportSummary {
                num_connections: 3,
                terminated: true
            }
        );
        assert_eq!(graph.locations().collect::<Vec<_>>(), vec![(0, "A"), (1, "B"), (2, "C")]);
        assert_eq!(graph.num_arcs(), 6);
        assert_eq!(links(&graph, "A"), vec![("B".to_string(), 5), ("C".to_string(), 10)]);
        assert_eq!(links(&graph, "C"), vec![("B".to_string(), 3), ("A".to_string(), 10)]);
    }

    #[test]
    fn line_breaks_do_not_matter() {
        let (graph, result) = import("A B\n 5 B\tC 3\n\nEND\nOF");
        assert_eq!(result.unwrap().num_connections, 2);
        assert_eq!(graph.num_nodes(), 3);
    }

    #[test]
    fn ignores_everything_after_terminator() {
        let (graph, result) = import("A B 5\nEND OF 0\nC D 7\ngarbage");
        assert!(result.unwrap().terminated);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.location_id("C"), None);
    }

    #[test]
    fn terminator_only_is_an_empty_graph() {
        let (graph, result) = import("END OF\n");
        assert_eq!(
            result.unwrap(),
            ImportSummary {
                num_connections: 0,
                terminated: true
            }
        );
        assert_eq!(graph.num_nodes(), 0);
    }

    #[test]
    fn end_needs_to_be_followed_by_of() {
        let (graph, result) = import("END B 4\nEND OF");
        assert_eq!(result.unwrap().num_connections, 1);
        assert_eq!(links(&graph, "END"), vec![("B".to_string(), 4)]);
    }

    #[test]
    fn missing_terminator_is_accepted() {
        let (graph, result) = import("A B 5\n");
        assert_eq!(
            result.unwrap(),
            ImportSummary {
                num_connections: 1,
                terminated: false
            }
        );
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn self_loops_and_parallel_connections_are_kept() {
        let (graph, result) = import("A A 2\nA B 5\nA B 4\nEND OF");
        assert!(result.is_ok());
        assert_eq!(graph.degree(0), 4);
        assert_eq!(lightest_link(&graph, 0, 1), Some(4));
    }

    #[test]
    fn rejects_non_numeric_distance() {
        let (_, result) = import("A B 5\nB C far\nEND OF");
        match result {
            Err(ImportError::InvalidDistance { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "far");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_distance() {
        let (_, result) = import("A B -5\nEND OF");
        assert!(matches!(result, Err(ImportError::NegativeDistance { line: 1, distance: -5 })));
    }

    #[test]
    fn rejects_too_large_distance() {
        let (_, result) = import(&format!("A B {}\nEND OF", u64::from(MAX_WEIGHT) + 1));
        assert!(matches!(result, Err(ImportError::DistanceTooLarge { line: 1, .. })));

        let (graph, result) = import(&format!("A B {}\nEND OF", MAX_WEIGHT));
        assert!(result.is_ok());
        assert_eq!(lightest_link(&graph, 0, 1), Some(MAX_WEIGHT));
    }

    #[test]
    fn rejects_truncated_records() {
        let (_, result) = import("A B 5\nC D");
        assert!(matches!(result, Err(ImportError::TruncatedRecord { line: 2 })));

        let (_, result) = import("A B 5\n\nC\n");
        assert!(matches!(result, Err(ImportError::TruncatedRecord { line: 3 })));
    }

    #[test]
    fn tokens_track_lines() {
        let mut tokens = Tokens::new("a b\n\n  c\n".as_bytes());
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(tokens.line_number(), 1);
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("b"));
        assert_eq!(tokens.next_token().unwrap().as_deref(), Some("c"));
        assert_eq!(tokens.line_number(), 3);
        assert_eq!(tokens.next_token().unwrap(), None);
    }

    #[test]
    fn error_messages_name_the_line() {
        let (_, result) = import("A B x");
        assert_eq!(result.unwrap_err().to_string(), "line 1: distance `x` is not a number");
    }
}
