//! ferrite-perceptron command line.
//!
//! Usage:
//!   ferrite-perceptron
//!       Trains the 2-input toy problem and prints weights and predictions.
//!   ferrite-perceptron csv <train.csv> <test.csv> [--features N] [--spec FILE] [--json]
//!       Character recognition: the first N columns (default 63) are pixels,
//!       the rest are one-vs-rest labels.
//!   ferrite-perceptron synthetic [--samples N] [--features N] [--classes N] [--seed N]
//!       Trains on a generated linearly separable dataset.
//!
//! Set RUST_LOG=debug to see per-epoch progress.

use std::env;

use anyhow::{bail, Context};
use log::info;

use ferrite_perceptron::data::{load_csv, synthetic};
use ferrite_perceptron::{Dataset, Perceptron, PerceptronSpec};

const LEARNING_RATE: f64 = 1.0;
const THETA: f64 = 0.2;
const CHARACTER_FEATURES: usize = 63;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("toy") => run_toy(),
        Some("csv") => run_csv(&args[1..]),
        Some("synthetic") => run_synthetic(&args[1..]),
        Some(other) => bail!("unknown command '{other}' (expected toy, csv or synthetic)"),
    }
}

fn run_toy() -> anyhow::Result<()> {
    let dataset = Dataset::new(
        vec![vec![1, 1], vec![1, 0], vec![0, 1], vec![0, 0]],
        vec![vec![1, 1], vec![1, -1], vec![-1, 1], vec![-1, -1]],
    )?;

    let mut model = Perceptron::new(2, 2, LEARNING_RATE, THETA)?;
    print!("{model}");
    let report = model.train(&dataset)?;
    info!("toy problem converged in {} epochs", report.epochs);
    print!("{model}");

    report_predictions(&model, &dataset)
}

fn run_csv(args: &[String]) -> anyhow::Result<()> {
    let (train_path, test_path) = match args {
        [train, test, ..] => (train, test),
        _ => bail!("usage: csv <train.csv> <test.csv> [--features N] [--spec FILE] [--json]"),
    };
    let features = flag_value(args, "--features")?.unwrap_or(CHARACTER_FEATURES);
    let json = args.iter().any(|a| a == "--json");

    let train = load_csv(train_path, features)
        .with_context(|| format!("loading training data from {train_path}"))?;
    let test = load_csv(test_path, features)
        .with_context(|| format!("loading test data from {test_path}"))?;
    let classes = train
        .label_width()
        .context("training data has no rows")?;

    let spec = match args.iter().position(|a| a == "--spec") {
        Some(i) => {
            let path = args.get(i + 1).context("--spec needs a file path")?;
            PerceptronSpec::load_json(path).with_context(|| format!("reading spec {path}"))?
        }
        None => PerceptronSpec::new(features, classes, LEARNING_RATE, THETA),
    };
    if spec.dimension != features || spec.num_classes != classes {
        bail!(
            "spec expects {}x{} but the data is {}x{}",
            spec.dimension, spec.num_classes, features, classes
        );
    }

    let mut model = spec.build()?;
    let report = ferrite_perceptron::train_loop(&mut model, &train, &spec.train_config())?;
    println!("Converged after {} epochs ({} corrections)", report.epochs, report.updates);

    if json {
        println!("{}", model.describe_json()?);
    } else {
        print!("{}", model.describe());
    }

    report_predictions(&model, &test)
}

fn run_synthetic(args: &[String]) -> anyhow::Result<()> {
    let samples = flag_value(args, "--samples")?.unwrap_or(40);
    let features = flag_value(args, "--features")?.unwrap_or(10);
    let classes = flag_value(args, "--classes")?.unwrap_or(3);
    let seed = flag_value(args, "--seed")?.unwrap_or(42);

    let dataset = synthetic::linearly_separable(samples, features, classes, seed as u64)?;
    let mut model = Perceptron::new(features, classes, LEARNING_RATE, THETA)?;
    let report = model.train(&dataset)?;
    println!("Converged after {} epochs ({} corrections)", report.epochs, report.updates);
    print!("{model}");

    report_predictions(&model, &dataset)
}

/// Prints predicted vs expected labels for every row and a final tally.
fn report_predictions(model: &Perceptron, dataset: &Dataset) -> anyhow::Result<()> {
    let mut correct = 0;
    for (i, (sample, expected)) in dataset.iter().enumerate() {
        let predicted = model.predict(sample)?;
        let ok = predicted == expected;
        if ok {
            correct += 1;
        }
        println!(
            "Sample {:>3}: predicted {:?} expected {:?}{}",
            i + 1,
            predicted,
            expected,
            if ok { "" } else { "  <- mismatch" }
        );
    }
    println!("{correct}/{} samples matched", dataset.len());
    Ok(())
}

/// Reads `--name N` from `args`, if present.
fn flag_value(args: &[String], name: &str) -> anyhow::Result<Option<usize>> {
    match args.iter().position(|a| a == name) {
        None => Ok(None),
        Some(i) => {
            let raw = args.get(i + 1).with_context(|| format!("{name} needs a value"))?;
            let value = raw
                .parse::<usize>()
                .with_context(|| format!("{name} expects a non-negative integer, got '{raw}'"))?;
            Ok(Some(value))
        }
    }
}
