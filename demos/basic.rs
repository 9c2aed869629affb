use microex::{Evaluator, StringComparison};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=microex=trace shows each group reduction and operator split.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let evaluator = Evaluator::builder()
        .string_comparison(StringComparison::CaseInsensitive)
        .build()
        .expect("valid configuration");

    let expressions = [
        r#"("text123" == "TEXT123") && (7 <= 8)"#,
        "(false || (true == (false || (true == (false || true)))))",
        "-7 < 7",
        "2 < 3 < 4",
        "()",
    ];

    for expr in expressions {
        match evaluator.evaluate(expr) {
            Ok(result) => println!("{expr} => {result}"),
            Err(err) => println!("{expr} => error: {err}"),
        }
    }
}
