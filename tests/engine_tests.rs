//! Library-level behavior tests for the matching engine and record store.

use seqmatch::parsing::fasta;
use seqmatch::{Algorithm, Database, MatchEngine, MatchError, Query, Record, ScoringScheme};

fn database(entries: &[(&str, &str)]) -> Database {
    Database::new(
        entries
            .iter()
            .map(|(label, seq)| Record::new(*label, *seq))
            .collect(),
    )
}

fn query(seq: &str) -> Query {
    Query::new(Record::new("query", seq))
}

/// A record identical to the query is optimal under every algorithm
#[test]
fn test_identity_scores() {
    let db = database(&[("self", "ACGT")]);
    let engine = MatchEngine::new(&db);
    let q = query("ACGT");

    let best = engine.best_match(&q, Algorithm::EditDistance).unwrap();
    assert_eq!(best.score, 0);

    let best = engine
        .best_match(&q, Algorithm::LongestCommonSubsequence)
        .unwrap();
    assert_eq!(best.score, 4);

    let best = engine
        .best_match(&q, Algorithm::LongestCommonSubstring)
        .unwrap();
    assert_eq!(best.score, 4);
    assert_eq!(best.ratio, Some(1.0));

    let best = engine.best_match(&q, Algorithm::NeedlemanWunsch).unwrap();
    assert_eq!(best.score, 4);
}

/// Disjoint alphabets split the all-zero case: the subsequence scan has no
/// winner, while the substring scan returns the first record at ratio zero.
#[test]
fn test_disjoint_alphabet_asymmetry() {
    let db = database(&[("t", "TTTT"), ("g", "GGGG")]);
    let engine = MatchEngine::new(&db);
    let q = query("AAAA");

    let subsequence = engine.best_match(&q, Algorithm::LongestCommonSubsequence);
    assert_eq!(subsequence.unwrap_err(), MatchError::DegenerateResult);

    let substring = engine
        .best_match(&q, Algorithm::LongestCommonSubstring)
        .unwrap();
    assert_eq!(substring.index, 0);
    assert_eq!(substring.record.label, "t");
    assert_eq!(substring.score, 0);
    assert_eq!(substring.ratio, Some(0.0));
}

/// Duplicate records tie on every algorithm and the first one wins
#[test]
fn test_first_record_tie_break() {
    let db = database(&[("first", "ACGT"), ("second", "ACGT")]);
    let engine = MatchEngine::new(&db);
    let q = query("ACGT");

    for algorithm in Algorithm::all() {
        let best = engine.best_match(&q, algorithm).unwrap();
        assert_eq!(best.index, 0, "{algorithm}");
        assert_eq!(best.record.label, "first", "{algorithm}");
    }
}

/// Alignment worked examples under default weights
#[test]
fn test_alignment_examples() {
    let engine_input = [
        ("AC", "AC", 2),   // two matches
        ("AC", "AG", 0),   // match + mismatch
        ("ACG", "ACGT", 2), // three matches + one gap
        ("TTTT", "AAAA", -4), // four mismatches beat eight gaps
    ];

    for (candidate, q, expected) in engine_input {
        let db = database(&[("c", candidate)]);
        let engine = MatchEngine::new(&db);
        let best = engine.best_match(&query(q), Algorithm::NeedlemanWunsch).unwrap();
        assert_eq!(best.score, expected, "{q} vs {candidate}");
    }
}

/// Gap weight scales both border rows of the alignment grid
#[test]
fn test_alignment_gap_scaling() {
    let db = database(&[("short", "A")]);
    let scheme = ScoringScheme {
        match_score: 1,
        mismatch: -1,
        gap: -3,
    };
    let engine = MatchEngine::with_scheme(&db, scheme);

    // One match plus three gap positions
    let best = engine
        .best_match(&query("AGGG"), Algorithm::NeedlemanWunsch)
        .unwrap();
    assert_eq!(best.score, 1 - 9);
}

/// The 3/9 substring ratio example
#[test]
fn test_substring_ratio_example() {
    let db = database(&[("hit", "TTTACGTTT")]);
    let engine = MatchEngine::new(&db);

    let best = engine
        .best_match(&query("ACG"), Algorithm::LongestCommonSubstring)
        .unwrap();
    assert_eq!(best.score, 3);
    let ratio = best.ratio.unwrap();
    assert!((ratio - 1.0 / 3.0).abs() < 1e-9);
}

/// Every algorithm refuses an empty database before scoring
#[test]
fn test_empty_database_all_algorithms() {
    let db = Database::new(vec![]);
    let engine = MatchEngine::new(&db);
    let q = query("ACGT");

    for algorithm in Algorithm::all() {
        let result = engine.best_match(&q, algorithm);
        assert_eq!(result.unwrap_err(), MatchError::EmptyDatabase, "{algorithm}");
    }
}

/// Edit distance counts insertions when lengths differ
#[test]
fn test_edit_distance_length_gap() {
    let db = database(&[("tt", "TT")]);
    let engine = MatchEngine::new(&db);

    // Two deletions plus one substitution
    let best = engine
        .best_match(&query("ACGT"), Algorithm::EditDistance)
        .unwrap();
    assert_eq!(best.score, 3);
}

/// Messy whitespace and case survive a round trip through the record store
#[test]
fn test_record_store_whitespace_round_trip() {
    let text = "  >db entry one  \n  acgt  \nACGT\n\n>db entry two\n\tgg\ngg\n";
    let records = fasta::parse_text(text).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label, "db entry one");
    assert_eq!(records[0].sequence, "ACGTACGT");
    assert_eq!(records[1].label, "db entry two");
    assert_eq!(records[1].sequence, "GGGG");

    // The parsed records behave identically to directly constructed ones
    let db = Database::new(records);
    let engine = MatchEngine::new(&db);
    let best = engine
        .best_match(&query("ACGTACGT"), Algorithm::EditDistance)
        .unwrap();
    assert_eq!(best.index, 0);
    assert_eq!(best.score, 0);
}

/// Sequential and parallel scans agree on a larger database, ties included
#[test]
fn test_parallel_scan_matches_sequential() {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut records = Vec::new();
    for i in 0..60 {
        let sequence: String = (0..12)
            .map(|j| bases[(i * 7 + j * 3) % 4] as char)
            .collect();
        records.push(Record::new(format!("r{i}"), sequence));
    }
    let db = Database::new(records);
    let engine = MatchEngine::new(&db);
    let q = query("ACGTACGTACGT");

    for algorithm in Algorithm::all() {
        let sequential = engine.best_match(&q, algorithm).unwrap();
        let parallel = engine.best_match_parallel(&q, algorithm).unwrap();
        assert_eq!(sequential.index, parallel.index, "{algorithm}");
        assert_eq!(sequential.score, parallel.score, "{algorithm}");
        assert_eq!(sequential.ratio, parallel.ratio, "{algorithm}");
    }
}

/// Later strictly better candidates replace the incumbent in every direction
#[test]
fn test_strict_improvement_replaces() {
    let db = database(&[("worse", "AATT"), ("better", "ACGT")]);
    let engine = MatchEngine::new(&db);
    let q = query("ACGT");

    for algorithm in Algorithm::all() {
        let best = engine.best_match(&q, algorithm).unwrap();
        assert_eq!(best.record.label, "better", "{algorithm}");
    }
}

/// An empty query is rejected with its own error
#[test]
fn test_empty_query_rejected() {
    let db = database(&[("a", "ACGT")]);
    let engine = MatchEngine::new(&db);

    let result = engine.best_match(&query(""), Algorithm::EditDistance);
    assert_eq!(result.unwrap_err(), MatchError::EmptyQuery);
}
