use graph_html::{run, Config};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let result = Config::from_env().and_then(|config| run(&config));

    match result {
        Ok(summary) => {
            tracing::info!(
                lines = summary.lines,
                nodes = summary.nodes,
                edges = summary.edges,
                output = %summary.output.display(),
                "done"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
