use ratshape::{Classifier, describe};
use tracing_subscriber::EnvFilter;

const SAMPLES: &[&str] = &[
    "4x^3 - 2x^2 + x - 7",
    "-x^2 + 3x - 5",
    "2x + 5",
    "7",
    "7/(-x-2)",
    "-5/(y+4)",
    "100/(z-50)",
    "8/((-x+3)^4)",
    "-9/((x-7)^2)",
    "12/((z+1)^3)",
    "(5x+1)/(x^2-4x+4)",
    "(-2x+7)/(x^2+3x+2)",
    "(10y+5)/(y^2-6y+9)",
    "(y+5)/(y^2-6y+9)",
    "(3x-4)/((x^2+2x+1)^3)",
    "(x+5)/((x^2-5x+6)^2)",
    "(2y+8)/((y^2-3y+1)^5)",
    "(x+1)/(x^3+2x+1)",
    "7/x^3",
    "(x^2+3x+5)/(2x+1)",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        SAMPLES.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    for input in inputs {
        let mut classifier = Classifier::new(input.as_str());
        match classifier.classify() {
            Ok(shape) => println!("✅ {input} → {}", describe(shape)),
            Err(err) => println!("❌ {input} → {err}"),
        }
    }
}
