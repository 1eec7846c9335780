use crate::cli::OutputFormat;
use crate::core::types::{Algorithm, Direction};

/// Execute algorithms subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let algorithms = Algorithm::all();

    match format {
        OutputFormat::Text => {
            let name_width = algorithms
                .iter()
                .map(|a| a.name().len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Available algorithms ({})\n", algorithms.len());
            println!(
                "{:<name_w$} {:<8} {:<6} Description",
                "Name",
                "Score",
                "Better",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 80));

            for algorithm in algorithms {
                println!(
                    "{:<name_w$} {:<8} {:<6} {}",
                    algorithm.name(),
                    algorithm.score_label(),
                    better(algorithm),
                    algorithm.description(),
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = algorithms
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name(),
                        "display_name": a.display_name(),
                        "score_label": a.score_label(),
                        "better": better(*a),
                        "description": a.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tdisplay_name\tscore_label\tbetter\tdescription");
            for algorithm in algorithms {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    algorithm.name(),
                    algorithm.display_name(),
                    algorithm.score_label(),
                    better(algorithm),
                    algorithm.description(),
                );
            }
        }
    }

    Ok(())
}

const fn better(algorithm: Algorithm) -> &'static str {
    match algorithm.direction() {
        Direction::Minimize => "lower",
        Direction::Maximize => "higher",
    }
}
