//! Plain text output of routes and location graphs.

use crate::algo::*;
use crate::datastr::graph::*;
use std::io::{Result, Write};

/// Write the answer to a query.
///
/// ```text
/// distance: 8
/// route:
/// A to B, 5
/// B to C, 3
/// ```
///
/// Unreachable destinations are written as `distance: infinity`, `route:`, `none`.
/// Leg weights are looked up in `graph`, names in `locations`.
pub fn write_route<W: Write, G: LinkIterable<Link>>(out: &mut W, graph: &G, locations: &LocationGraph, result: &QueryResult) -> Result<()> {
    match result {
        QueryResult::Unreachable => {
            writeln!(out, "distance: infinity")?;
            writeln!(out, "route:")?;
            writeln!(out, "none")?;
        }
        QueryResult::Found { distance, path } => {
            writeln!(out, "distance: {}", distance)?;
            writeln!(out, "route:")?;
            for Leg { from, to, weight } in route_legs(graph, path) {
                writeln!(out, "{} to {}, {}", locations.name(from), locations.name(to), weight)?;
            }
        }
    }

    Ok(())
}

/// One `<id>: <name>` line per location, in id order.
pub fn write_locations<W: Write>(out: &mut W, locations: &LocationGraph) -> Result<()> {
    for (id, name) in locations.locations() {
        writeln!(out, "{}: {}", id, name)?;
    }
    Ok(())
}

/// Every location with its outgoing links, each block followed by an empty line.
pub fn write_adjacency<W: Write>(out: &mut W, locations: &LocationGraph) -> Result<()> {
    for (id, name) in locations.locations() {
        writeln!(out, "City: {}", name)?;
        for Link { node, weight } in locations.link_iter(id) {
            writeln!(out, "  -> {} (Distance: {})", locations.name(node), weight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
