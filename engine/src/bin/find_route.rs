#[macro_use]
extern crate route_finder;
use route_finder::{
    algo::{dijkstra::*, *},
    cli::*,
    datastr::graph::*,
    export::*,
    import::edge_list::*,
    report::*,
};
use std::{
    env,
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    process,
};

fn main() {
    let result = {
        let _reporter = enable_reporting("find_route");
        run()
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Args { edge_file, mode } = parse_args(env::args().skip(1)).map_err(|err| {
        eprintln!("{}", USAGE);
        err
    })?;
    report!("edge_file", edge_file);
    report!("mode", format!("{:?}", mode));

    let file = File::open(&edge_file).map_err(|err| format!("Could not open the file {}: {}", edge_file, err))?;

    let mut graph = LocationGraph::new();
    let summary = {
        let _import_ctxt = push_context("import".to_string());
        report_time("import", || read_edge_list(BufReader::new(file), &mut graph))?
    };
    if !summary.terminated {
        report!("missing_terminator", true);
        eprintln!("warning: {} ends without END OF, using all records read", edge_file);
    }
    report!("graph", { "num_nodes": graph.num_nodes(), "num_arcs": graph.num_arcs(), "num_connections": summary.num_connections });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Debug => {
            write_adjacency(&mut out, &graph)?;
            write_locations(&mut out, &graph)?;
        }
        Mode::Normal => {
            let stdin = io::stdin();
            let mut tokens = Tokens::new(stdin.lock());
            let from = prompt(&mut out, &mut tokens, "Enter origin city: ")?;
            let to = prompt(&mut out, &mut tokens, "Enter destination city: ")?;

            let strict = strict_endpoints();
            report!("strict_endpoints", strict);
            let query = Query {
                from: resolve_endpoint(&mut graph, &from, strict)?,
                to: resolve_endpoint(&mut graph, &to, strict)?,
            };

            answer(&mut out, &graph, query)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn prompt<W: Write, R: BufRead>(out: &mut W, tokens: &mut Tokens<R>, text: &str) -> Result<String, Box<dyn Error>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let name = tokens.next_token()?.ok_or(CliErr("No location name given"))?;
    writeln!(out)?;
    Ok(name)
}

fn answer<W: Write>(out: &mut W, graph: &LocationGraph, query: Query) -> Result<(), Box<dyn Error>> {
    // no more locations from here on
    let frozen = graph.to_owned_graph();

    let engine = Engine::from_env();
    report!("engine", format!("{:?}", engine));
    let mut server: Box<dyn QueryServer + '_> = match engine {
        Engine::ArrayScan => Box::new(array_scan::Server::new(&frozen)),
        Engine::Heap => Box::new(query::dijkstra::Server::new(&frozen)),
    };

    let result = {
        let _query_ctxt = push_context("query".to_string());
        report!("from", graph.name(query.from));
        report!("to", graph.name(query.to));
        let result = report_time("query", || server.query(query));

        match &result {
            QueryResult::Found { distance, path } => {
                report!("distance", distance);
                report!("path_length", path.len());

                let mut legs_ctxt = push_collection_context("legs".to_string());
                for Leg { from, to, weight } in route_legs(&frozen, path) {
                    let _leg = legs_ctxt.push_collection_item();
                    report!("from", graph.name(from));
                    report!("to", graph.name(to));
                    report!("weight", weight);
                }
            }
            QueryResult::Unreachable => report!("distance", null),
        }

        result
    };

    write_route(out, &frozen, graph, &result)?;
    Ok(())
}
