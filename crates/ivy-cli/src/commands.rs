//! CLI command implementations.

use colored::Colorize;
use ivy_graph::load_graph;
use ivy_recognizer::IntervalRecognizer;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Checks whether a fixture describes an interval graph.
///
/// Returns the verdict so main can turn it into the exit code.
pub fn check(file: &Path, json: bool) -> Result<bool> {
    let graph = load_graph(file)?;
    let analysis = IntervalRecognizer::new().analyze(&graph);
    debug!("analysis complete, interval = {}", analysis.interval);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else if analysis.interval {
        println!("{} {} is an interval graph", "✓".green(), file.display());
    } else {
        let reason = if analysis.chordal {
            "no consecutive clique arrangement"
        } else {
            "not chordal"
        };
        println!(
            "{} {} is not an interval graph ({})",
            "✗".red(),
            file.display(),
            reason
        );
    }

    Ok(analysis.interval)
}

/// Prints the intermediate artifacts of a recognition run.
pub fn inspect(file: &Path) -> Result<()> {
    let graph = load_graph(file)?;
    let analysis = IntervalRecognizer::new().analyze(&graph);

    println!(
        "{} {} vertices, {} edges",
        "graph:".cyan(),
        graph.vertex_count(),
        graph.edge_count()
    );
    println!(
        "{} {:?}",
        "elimination order:".cyan(),
        analysis.elimination_order
    );
    println!("{} {}", "chordal:".cyan(), analysis.chordal);

    if analysis.chordal {
        println!("{}", "maximal cliques:".cyan());
        for (i, clique) in analysis.cliques.iter().enumerate() {
            println!("  [{}] {:?}", i, clique);
        }
        match &analysis.arrangement {
            Some(arrangement) => println!("{} {:?}", "arrangement:".cyan(), arrangement),
            None => println!("{} none", "arrangement:".cyan()),
        }
    }

    if analysis.interval {
        println!("{} {}", "interval:".cyan(), "yes".green());
    } else {
        println!("{} {}", "interval:".cyan(), "no".red());
    }

    Ok(())
}
