//! Query Server wrappers for the heap based dijkstra

use super::*;

pub mod dijkstra;
