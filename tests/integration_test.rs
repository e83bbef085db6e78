// Integration tests for seqneff
use seqneff::prelude::*;
use seqneff::RawTensor;
use std::io::Write;

fn flat_store(records: Vec<RawTensor>) -> FeatureStore {
    FeatureStore {
        data: Some(records),
        ..Default::default()
    }
}

#[test]
fn test_two_cluster_scenario() {
    // threshold_abs = 2 columns * 0.5 = 1.0: records 0/1 and 2/3 pair up.
    let store = flat_store(vec![
        vec![vec![0.0, 0.0]],
        vec![vec![0.0, 0.0]],
        vec![vec![5.0, 5.0]],
        vec![vec![5.0, 5.0]],
    ]);
    let config = WeightingConfig {
        threshold_fraction: 0.5,
        ..Default::default()
    };
    let mut sink = VecSink::new();
    let summary = generate_weights(store, "c", &config, &mut sink).unwrap();

    assert_eq!(summary.weights, vec![0.5, 0.5, 0.5, 0.5]);
    assert_eq!(summary.n_total, 4);
    assert!((summary.n_effective - 2.0).abs() < 1e-12);
}

#[test]
fn test_structural_mode_end_to_end() {
    // Two identical structural records plus one far away in every tensor.
    let near = (
        vec![vec![0.0, f32::NAN]],
        vec![vec![0.0]],
        vec![vec![0.0, 0.0, 0.0]],
    );
    let far = (
        vec![vec![9.0, 9.0]],
        vec![vec![9.0]],
        vec![vec![9.0, 9.0, 9.0]],
    );
    let store = FeatureStore {
        tr: Some(vec![near.0.clone(), near.0.clone(), far.0]),
        s: Some(vec![near.1.clone(), near.1.clone(), far.1]),
        p: Some(vec![near.2.clone(), near.2.clone(), far.2]),
        data: None,
    };
    let mut sink = VecSink::new();
    let summary = generate_weights(store, "cm", &WeightingConfig::default(), &mut sink).unwrap();

    // NaN in the traceback tensor counts as zero, so records 0 and 1 are
    // exact duplicates.
    assert_eq!(summary.weights, vec![0.5, 0.5, 1.0]);
    assert!((summary.n_effective - 2.0).abs() < 1e-12);
}

#[test]
fn test_single_record_dataset() {
    let store = flat_store(vec![vec![vec![1.0, 2.0, 3.0]]]);
    let mut sink = VecSink::new();
    let summary = generate_weights(store, "g", &WeightingConfig::default(), &mut sink).unwrap();
    assert_eq!(summary.weights, vec![1.0]);
    assert_eq!(summary.n_effective, 1.0);
}

#[test]
fn test_invalid_mode_fails_before_loading() {
    // The store is unusable on purpose: if the mode check came after the
    // load, this would fail with a missing-column error instead.
    let store = FeatureStore::default();
    let mut sink = VecSink::new();
    let result = generate_weights(store, "xyz", &WeightingConfig::default(), &mut sink);
    assert!(matches!(result, Err(Error::InvalidMode(m)) if m == "xyz"));
}

#[test]
fn test_weight_invariants_hold() {
    let records: Vec<RawTensor> = (0..25)
        .map(|i| vec![vec![(i % 6) as f32, (i % 4) as f32, 1.0]])
        .collect();
    let store = flat_store(records);
    let config = WeightingConfig {
        threshold_fraction: 0.4,
        ..Default::default()
    };
    let mut sink = VecSink::new();
    let summary = generate_weights(store, "c", &config, &mut sink).unwrap();

    let sum: f64 = summary.weights.iter().sum();
    assert!((sum - summary.n_effective).abs() < 1e-12);
    for w in &summary.weights {
        assert!(*w > 0.0 && *w <= 1.0);
    }
    assert!(summary.n_effective >= 1.0);
    assert!(summary.n_effective <= summary.n_total as f64);
}

#[test]
fn test_exact_mode_ignores_seed() {
    let records: Vec<RawTensor> = (0..10)
        .map(|i| vec![vec![(i % 3) as f32, (i % 2) as f32]])
        .collect();
    let store = flat_store(records);

    let mut with_seed_1 = VecSink::new();
    let mut with_seed_2 = VecSink::new();
    let base = WeightingConfig {
        threshold_fraction: 0.6,
        ..Default::default()
    };
    let a = generate_weights(
        store.clone(),
        "c",
        &WeightingConfig {
            random_seed: 1,
            ..base.clone()
        },
        &mut with_seed_1,
    )
    .unwrap();
    let b = generate_weights(
        store,
        "c",
        &WeightingConfig {
            random_seed: 99,
            ..base
        },
        &mut with_seed_2,
    )
    .unwrap();
    assert_eq!(a.weights, b.weights);
    assert_eq!(a.n_effective, b.n_effective);
}

#[test]
fn test_subsampled_mode_reproducible_with_seed() {
    let records: Vec<RawTensor> = (0..30)
        .map(|i| vec![vec![(i % 5) as f32, (i % 7) as f32]])
        .collect();
    let store = flat_store(records);
    let config = WeightingConfig {
        sample_size_threshold: 10,
        sample_ratio_over_threshold: 0.3,
        threshold_fraction: 0.8,
        random_seed: 1234,
        ..Default::default()
    };

    let mut sink_a = VecSink::new();
    let mut sink_b = VecSink::new();
    let a = generate_weights(store.clone(), "c", &config, &mut sink_a).unwrap();
    let b = generate_weights(store, "c", &config, &mut sink_b).unwrap();
    assert_eq!(a.weights, b.weights);
    assert_eq!(a.n_effective, b.n_effective);
}

#[test]
fn test_store_roundtrip_through_file() {
    let store = flat_store(vec![
        vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        vec![vec![1.0, 0.0], vec![0.0, 1.0]],
    ]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&store).unwrap().as_bytes())
        .unwrap();

    let parsed: FeatureStore =
        serde_json::from_reader(std::fs::File::open(file.path()).unwrap()).unwrap();
    let mut sink = VecSink::new();
    let summary = generate_weights(parsed, "c", &WeightingConfig::default(), &mut sink).unwrap();
    assert_eq!(summary.weights, vec![0.5, 0.5, 1.0]);
}

#[test]
fn test_progress_messages_reach_the_caller() {
    let store = flat_store(vec![vec![vec![0.0, 0.0]]; 9]);
    let config = WeightingConfig {
        progress_interval: 3,
        ..Default::default()
    };
    let mut sink = VecSink::new();
    generate_weights(store, "c", &config, &mut sink).unwrap();
    assert_eq!(sink.messages.len(), 2);
    assert!(sink.messages[0].starts_with("3/9, sampling 9"));
    assert!(sink.messages[1].starts_with("6/9, sampling 9"));
}
