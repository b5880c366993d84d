//! Reading location graphs from files.

use crate::datastr::graph::*;

pub mod edge_list;
