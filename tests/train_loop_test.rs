use std::sync::mpsc;

use ferrite_perceptron::data::synthetic;
use ferrite_perceptron::{
    train_loop, Dataset, Perceptron, PerceptronError, PerceptronSpec, TrainConfig,
};

fn xor_dataset() -> Dataset {
    Dataset::new(
        vec![vec![1, 1], vec![1, 0], vec![0, 1], vec![0, 0]],
        vec![vec![-1], vec![1], vec![1], vec![-1]],
    )
    .unwrap()
}

#[test]
fn test_epoch_cap_reports_non_convergence() {
    let mut model = Perceptron::new(2, 1, 1.0, 0.2).unwrap();
    let config = TrainConfig::new(Some(50));

    let result = train_loop(&mut model, &xor_dataset(), &config);

    assert!(matches!(result, Err(PerceptronError::NotConverged { epochs: 50 })));
}

#[test]
fn test_zero_epoch_cap_is_rejected_before_training() {
    let mut model = Perceptron::new(2, 1, 1.0, 0.2).unwrap();

    let result = train_loop(&mut model, &xor_dataset(), &TrainConfig::new(Some(0)));

    assert!(matches!(result, Err(PerceptronError::InvalidConfig(_))));
    assert_eq!(model.weights()[0], vec![0.0, 0.0]);
    assert_eq!(model.biases()[0], 0.0);
}

#[test]
fn test_epoch_cap_does_not_affect_separable_data() {
    let dataset = Dataset::new(
        vec![vec![1, 1], vec![1, 0], vec![0, 1], vec![0, 0]],
        vec![vec![1, 1], vec![1, -1], vec![-1, 1], vec![-1, -1]],
    )
    .unwrap();
    let mut model = Perceptron::new(2, 2, 1.0, 0.2).unwrap();

    let report = train_loop(&mut model, &dataset, &TrainConfig::new(Some(3))).unwrap();

    assert_eq!(report.epochs, 3);
}

#[test]
fn test_progress_channel_receives_each_epoch() {
    let dataset = Dataset::new(
        vec![vec![1, 1], vec![1, 0], vec![0, 1], vec![0, 0]],
        vec![vec![1, 1], vec![1, -1], vec![-1, 1], vec![-1, -1]],
    )
    .unwrap();
    let mut model = Perceptron::new(2, 2, 1.0, 0.2).unwrap();
    let (tx, rx) = mpsc::channel();
    let config = TrainConfig::unbounded().with_progress(tx);

    let report = train_loop(&mut model, &dataset, &config).unwrap();
    drop(config);

    let stats: Vec<_> = rx.iter().collect();
    assert_eq!(stats.len(), report.epochs);
    assert_eq!(stats.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(stats.last().unwrap().updates, 0);
    assert_eq!(stats.iter().map(|s| s.updates).sum::<usize>(), report.updates);
}

#[test]
fn test_dropped_receiver_does_not_stop_training() {
    let mut model = Perceptron::new(2, 1, 1.0, 0.2).unwrap();
    let dataset = Dataset::new(vec![vec![1, 0], vec![0, 1]], vec![vec![1], vec![-1]]).unwrap();
    let (tx, rx) = mpsc::channel();
    drop(rx);

    let report = train_loop(&mut model, &dataset, &TrainConfig::unbounded().with_progress(tx)).unwrap();

    assert_eq!(model.predict(&[1, 0]).unwrap(), vec![1]);
    assert_eq!(model.predict(&[0, 1]).unwrap(), vec![-1]);
    assert!(report.epochs >= 2);
}

#[test]
fn test_synthetic_data_is_learned_exactly() {
    let dataset = synthetic::linearly_separable(40, 10, 3, 7).unwrap();
    let mut model = Perceptron::new(10, 3, 1.0, 0.2).unwrap();

    train_loop(&mut model, &dataset, &TrainConfig::new(Some(1000))).unwrap();

    for (sample, target) in dataset.iter() {
        assert_eq!(model.predict(sample).unwrap(), target);
    }
}

#[test]
fn test_synthetic_data_with_single_feature() {
    let dataset = synthetic::linearly_separable(12, 1, 1, 3).unwrap();
    let mut model = Perceptron::new(1, 1, 1.0, 0.2).unwrap();

    train_loop(&mut model, &dataset, &TrainConfig::new(Some(1000))).unwrap();

    assert_eq!(dataset.len(), 12);
    for (sample, target) in dataset.iter() {
        assert_eq!(model.predict(sample).unwrap(), target);
    }
}

#[test]
fn test_synthetic_data_is_deterministic_per_seed() {
    let a = synthetic::linearly_separable(20, 5, 2, 11).unwrap();
    let b = synthetic::linearly_separable(20, 5, 2, 11).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 20);
    assert_eq!(a.feature_width(), Some(5));
    assert_eq!(a.label_width(), Some(2));
    assert!(a.samples().iter().flatten().all(|&x| x == 1 || x == -1));
    assert!(a.targets().iter().flatten().all(|&t| t == 1 || t == -1));
}

#[test]
fn test_spec_json_round_trip_and_build() {
    let spec = PerceptronSpec::new(63, 7, 1.0, 0.2).with_max_epochs(500);
    let path = std::env::temp_dir().join(format!("ferrite_perceptron_spec_{}.json", std::process::id()));
    let path = path.to_str().unwrap();

    spec.save_json(path).unwrap();
    let loaded = PerceptronSpec::load_json(path).unwrap();
    std::fs::remove_file(path).unwrap();

    assert_eq!(loaded, spec);
    let model = loaded.build().unwrap();
    assert_eq!(model.dimension(), 63);
    assert_eq!(model.num_classes(), 7);
    assert_eq!(loaded.train_config().max_epochs, Some(500));
}

#[test]
fn test_spec_without_max_epochs_is_unbounded() {
    let spec: PerceptronSpec = serde_json::from_str(
        r#"{ "dimension": 2, "num_classes": 2, "learning_rate": 1.0, "theta": 0.2 }"#,
    )
    .unwrap();

    assert_eq!(spec.max_epochs, None);
    assert!(spec.train_config().max_epochs.is_none());
}
