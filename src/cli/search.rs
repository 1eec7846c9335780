use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::{Database, Query};
use crate::core::types::{Algorithm, ScoringScheme};
use crate::matching::engine::{BestMatch, MatchEngine};
use crate::parsing::fasta;

#[derive(Args)]
pub struct SearchArgs {
    /// Database file with candidate records (plain text or .gz)
    #[arg(required = true)]
    pub database: PathBuf,

    /// Query file; the first record is the query, later records are ignored
    /// Use '-' for stdin
    #[arg(required = true)]
    pub query: PathBuf,

    /// Comparison algorithm
    #[arg(short, long, value_enum, default_value = "edit_distance")]
    pub algorithm: Algorithm,

    // === Alignment weight options (needleman_wunsch only) ===
    /// Score awarded when two residues match
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub match_score: i64,

    /// Penalty for a residue substitution
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub mismatch: i64,

    /// Penalty for a gap
    #[arg(long, default_value = "-1", allow_hyphen_values = true)]
    pub gap: i64,

    /// Number of threads for candidate scoring (1 = sequential)
    #[arg(short, long, default_value = "1")]
    pub threads: usize,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, or if the scan
/// fails (empty database, empty query, no candidate beating the bound).
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let database = fasta::read_database_file(&args.database)?;

    if verbose {
        eprintln!(
            "Loaded database with {} records ({} residues)",
            database.len(),
            database.total_residues()
        );
    }

    let query = load_query(&args)?;

    if verbose {
        eprintln!(
            "Query '{}' with {} residues",
            query.record().display_label(),
            query.residues().len()
        );
    }

    let scheme = ScoringScheme {
        match_score: args.match_score,
        mismatch: args.mismatch,
        gap: args.gap,
    };
    let engine = MatchEngine::with_scheme(&database, scheme);

    let best = if args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()?;
        pool.install(|| engine.best_match_parallel(&query, args.algorithm))?
    } else {
        engine.best_match(&query, args.algorithm)?
    };

    match format {
        OutputFormat::Text => print_text_result(&best, &database, &query, verbose),
        OutputFormat::Json => print_json_result(&best, &database, &query)?,
        OutputFormat::Tsv => print_tsv_result(&best),
    }

    Ok(())
}

fn load_query(args: &SearchArgs) -> anyhow::Result<Query> {
    use std::io::Read;

    // Handle stdin
    if args.query.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        let records = fasta::parse_text(&buffer)?;
        return Ok(fasta::query_from_records(records)?);
    }

    Ok(fasta::read_query_file(&args.query)?)
}

fn print_text_result(best: &BestMatch, database: &Database, query: &Query, verbose: bool) {
    println!(
        "\nBest match: {} (record {} of {})",
        best.record.display_label(),
        best.index + 1,
        database.len()
    );
    println!("   Algorithm: {}", best.algorithm.display_name());
    println!(
        "   Score:     {} ({})",
        best.score,
        best.algorithm.score_label()
    );
    if let Some(ratio) = best.ratio {
        println!("   Ratio:     {ratio:.3} (run length / candidate length)");
    }
    println!("   Length:    {} residues", best.record.len());
    println!("   Preview:   {}", best.record.preview());

    if verbose {
        println!(
            "\n   Query: {} ({} residues)",
            query.record().display_label(),
            query.residues().len()
        );
    }

    println!();
}

fn print_json_result(best: &BestMatch, database: &Database, query: &Query) -> anyhow::Result<()> {
    let mut json = serde_json::json!({
        "query": {
            "label": query.label(),
            "length": query.residues().len(),
        },
        "database": {
            "records": database.len(),
        },
        "algorithm": best.algorithm,
        "score": best.score,
        "score_label": best.algorithm.score_label(),
        "best_match": {
            "index": best.index,
            "label": best.record.label,
            "length": best.record.len(),
            "preview": best.record.preview(),
        },
    });

    // Ratio only exists for the substring algorithm
    if let Some(ratio) = best.ratio {
        json["ratio"] = serde_json::json!(ratio);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_tsv_result(best: &BestMatch) {
    println!("algorithm\tscore\tratio\tindex\tlabel\tlength\tpreview");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        best.algorithm,
        best.score,
        best.ratio.map(|r| format!("{r:.4}")).unwrap_or_default(),
        best.index,
        best.record.label,
        best.record.len(),
        best.record.preview(),
    );
}
