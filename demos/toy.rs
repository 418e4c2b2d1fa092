use ferrite_perceptron::{Dataset, Perceptron};

fn main() -> ferrite_perceptron::Result<()> {
    let dataset = Dataset::new(
        vec![
            vec![1, 1],
            vec![1, 0],
            vec![0, 1],
            vec![0, 0],
        ],
        vec![
            vec![1, 1],
            vec![1, -1],
            vec![-1, 1],
            vec![-1, -1],
        ],
    )?;

    let mut model = Perceptron::new(2, 2, 1.0, 0.2)?;
    print!("{}", model.describe());

    let report = model.train(&dataset)?;
    println!("Converged after {} epochs", report.epochs);
    print!("{}", model.describe());

    for (sample, target) in dataset.iter() {
        println!("Input: {:?} -> Output: {:?} (target {:?})", sample, model.predict(sample)?, target);
    }
    Ok(())
}
