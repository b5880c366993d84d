//! Utility module for command line interfaces

use crate::datastr::graph::*;
use std::{env, fmt, fmt::Display, str::FromStr};
use thiserror::Error;

pub const USAGE: &str = "Usage: find_route <edge file> <debug|normal>";

/// Selects the priority queue engine when set to `heap`.
pub const ENGINE_VAR: &str = "ROUTE_FINDER_ENGINE";
/// Rejects query endpoints which never appeared in the edge list when set.
pub const STRICT_VAR: &str = "ROUTE_FINDER_STRICT";

/// An error struct to wrap simple static error messages
#[derive(Debug)]
pub struct CliErr(pub &'static str);

impl Display for CliErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for CliErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List the parsed graph and skip the query.
    Debug,
    Normal,
}

impl FromStr for Mode {
    type Err = CliErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Mode::Debug),
            "normal" => Ok(Mode::Normal),
            _ => Err(CliErr("Mode has to be either debug or normal")),
        }
    }
}

/// Positional arguments of `find_route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub edge_file: String,
    pub mode: Mode,
}

/// Parse the arguments after the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, CliErr> {
    let mut args = args.into_iter();
    let edge_file = args.next().ok_or(CliErr("No edge file arg given"))?;
    let mode = args.next().ok_or(CliErr("No mode arg given"))?.parse()?;
    if args.next().is_some() {
        return Err(CliErr("Too many args given"));
    }

    Ok(Args { edge_file, mode })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    ArrayScan,
    Heap,
}

impl Engine {
    pub fn from_env() -> Self {
        Self::from_setting(env::var(ENGINE_VAR).ok().as_deref())
    }

    fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some("heap") => Engine::Heap,
            _ => Engine::ArrayScan,
        }
    }
}

pub fn strict_endpoints() -> bool {
    env::var_os(STRICT_VAR).is_some()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("unknown location `{0}`")]
    UnknownLocation(String),
}

/// Map a query endpoint name to its location.
///
/// In strict mode unknown names are an error.
/// Otherwise they become a new location without any connections.
pub fn resolve_endpoint(graph: &mut LocationGraph, name: &str, strict: bool) -> Result<NodeId, EndpointError> {
    if strict {
        graph.location_id(name).ok_or_else(|| EndpointError::UnknownLocation(name.to_string()))
    } else {
        Ok(graph.resolve_location(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Result<Args, CliErr> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn parses_file_and_mode() {
        assert_eq!(
            args(&["graph.txt", "normal"]).unwrap(),
            Args {
                edge_file: "graph.txt".to_string(),
                mode: Mode::Normal
            }
        );
        assert_eq!(args(&["graph.txt", "debug"]).unwrap().mode, Mode::Debug);
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert!(args(&[]).is_err());
        assert!(args(&["graph.txt"]).is_err());
        assert!(args(&["graph.txt", "normal", "more"]).is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert_eq!(args(&["graph.txt", "Debug"]).unwrap_err().to_string(), "Mode has to be either debug or normal");
    }

    #[test]
    fn engine_defaults_to_array_scan() {
        assert_eq!(Engine::from_setting(None), Engine::ArrayScan);
        assert_eq!(Engine::from_setting(Some("scan")), Engine::ArrayScan);
        assert_eq!(Engine::from_setting(Some("heap")), Engine::Heap);
    }

    #[test]
    fn lenient_endpoints_become_isolated_locations() {
        let mut graph = LocationGraph::new();
        let a = graph.resolve_location("A");
        assert_eq!(resolve_endpoint(&mut graph, "A", false), Ok(a));

        let z = resolve_endpoint(&mut graph, "Z", false).unwrap();
        assert_eq!(z, 1);
        assert_eq!(graph.degree(z), 0);
        assert_eq!(graph.name(z), "Z");
    }

    #[test]
    fn strict_endpoints_have_to_be_known() {
        let mut graph = LocationGraph::new();
        let a = graph.resolve_location("A");
        assert_eq!(resolve_endpoint(&mut graph, "A", true), Ok(a));
        assert_eq!(resolve_endpoint(&mut graph, "Z", true), Err(EndpointError::UnknownLocation("Z".to_string())));
        assert_eq!(graph.num_nodes(), 1);
    }
}
