use std::process::ExitCode;

use oriented_graph::{Error, Graph};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: oriented-graph <graph-file> [complete-graph-size]");
            return ExitCode::FAILURE;
        }
    };
    let size = args.next().and_then(|raw| raw.parse().ok()).unwrap_or(5);

    match run(&path, size) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, size: usize) -> Result<(), Error> {
    let mut graph = Graph::from_path(path)?;
    print!("{graph}");
    println!("{}\n", graph.loop_report());

    graph.delete_node("a");
    print!("{graph}");
    println!("{}\n", graph.loop_report());

    let mut copy = graph.clone();
    copy.delete_edge("b", "b")?;
    copy.delete_edge("b", "c")?;
    print!("{copy}");
    println!("{}\n", copy.loop_report());

    print!("{}", Graph::complete(size));
    Ok(())
}
