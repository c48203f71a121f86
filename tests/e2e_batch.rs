//! End-to-end tests for the file-driven batch path: edge list and topic
//! JSON on disk → loaded inputs → parallel reports.

use std::fs;
use std::path::Path;

use nstd_indices::{
    batch, load, EntropyCache, IndexEngine, RunConfig, TransitivityType, UserId,
};

// ============================================================================
// Helper: write the three input files into a temp dir.
// ============================================================================

fn write_inputs(dir: &Path) {
    fs::write(
        dir.join("network.csv"),
        "1001,1002\n1002,1001\n1001,1003\n1004,1003\n1004,1002\nbroken line\n",
    )
    .unwrap();
    fs::write(
        dir.join("user_topic.json"),
        r#"{
            "1001": [0.70, 0.20, 0.10],
            "1002": [0.60, 0.30, 0.10],
            "1003": [0.10, 0.10, 0.80],
            "1004": [0.25, 0.50, 0.25],
            "flat": [0.50, 0.50, 0.50]
        }"#,
    )
    .unwrap();
    fs::write(dir.join("pairs.csv"), "1001,1004\n1004,1001\n1001,flat\n").unwrap();
}

// ============================================================================
// 1. Load → batch: failed indices are collected, the rest completes
// ============================================================================

#[test]
fn test_batch_from_files() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let graph = load::load_social_graph(&dir.path().join("network.csv")).unwrap();
    assert_eq!(graph.edge_count(), 5);

    let topics = load::load_topic_store(&dir.path().join("user_topic.json")).unwrap();
    let cache = EntropyCache::build(&topics, Default::default()).unwrap();
    let engine = IndexEngine::new(&graph, &topics, &cache);

    let pairs = load::load_pairs(&dir.path().join("pairs.csv")).unwrap();
    let outcome = batch::evaluate_pairs(&engine, &pairs);

    assert_eq!(outcome.reports.len(), 3);
    assert!(!outcome.failures.is_empty());
    assert!(outcome.failures.iter().all(|f| f.user_j == UserId::from("flat")));
    assert!(outcome.failures.iter().any(|f| f.index == "homophily"));

    // The flat pair still carries its transitivity records.
    let flat = &outcome.reports[2];
    assert_eq!(flat.user_j.as_str(), "flat");
    assert_eq!(flat.homophily, None);
    assert_eq!(flat.transitivity.len(), 4);

    // 1001 and 1004 both follow 1002 and 1003.
    let first = &outcome.reports[0];
    assert_eq!(first.user_i.as_str(), "1001");
    let t1 = first.transitivity(TransitivityType::Type1).unwrap();
    assert_eq!(t1.common_friends, 2);
    let expected = (cache.get("1002").unwrap() + cache.get("1003").unwrap()) / 2.0;
    assert!((t1.mean_entropy.unwrap() - expected).abs() < 1e-12);
}

// ============================================================================
// 2. Run config from JSON points at the same files
// ============================================================================

#[test]
fn test_run_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let config_path = dir.path().join("run.json");
    let config_json = serde_json::json!({
        "graph_path": dir.path().join("network.csv"),
        "topics_path": dir.path().join("user_topic.json"),
        "pairs_path": dir.path().join("pairs.csv"),
        "threads": 2,
    });
    fs::write(&config_path, config_json.to_string()).unwrap();

    let config = RunConfig::from_file(&config_path).unwrap();
    assert_eq!(config.threads, Some(2));

    let graph = load::load_social_graph(config.graph_path().unwrap()).unwrap();
    let topics = load::load_topic_store(config.topics_path().unwrap()).unwrap();
    let cache = EntropyCache::build(&topics, config.engine.entropy_policy).unwrap();
    let engine = IndexEngine::new(&graph, &topics, &cache);
    let pairs = load::load_pairs(config.pairs_path().unwrap()).unwrap();

    let pool = batch::thread_pool(config.threads).unwrap();
    let outcome = pool.install(|| batch::evaluate_pairs(&engine, &pairs));
    assert_eq!(outcome.len(), 3);
}

// ============================================================================
// 3. Reports serialize with undefined values as null
// ============================================================================

#[test]
fn test_report_json_uses_null_for_undefined() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let graph = load::load_social_graph(&dir.path().join("network.csv")).unwrap();
    let topics = load::load_topic_store(&dir.path().join("user_topic.json")).unwrap();
    let cache = EntropyCache::build(&topics, Default::default()).unwrap();
    let engine = IndexEngine::new(&graph, &topics, &cache);

    let report = engine.report("1003", "1001");
    let json = serde_json::to_value(&report).unwrap();
    // Followers of 1003 are {1001, 1004}, of 1001 only {1002}: no type_4 overlap.
    assert_eq!(json["transitivity"][3]["kind"], "type_4");
    assert!(json["transitivity"][3]["mean_entropy"].is_null());
    assert!(json.get("homophily_error").is_none());
}
