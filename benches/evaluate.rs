use criterion::{black_box, criterion_group, criterion_main, Criterion};
use microex::{evaluate, Evaluator, StringComparison};

/// Build `(... ((true == (false || true)) ...)` nested `depth` groups deep.
fn nested_expression(depth: usize) -> String {
    let mut expr = String::from("false || true");
    for i in 0..depth {
        expr = if i % 2 == 0 {
            format!("true == ({expr})")
        } else {
            format!("false || ({expr})")
        };
    }
    format!("({expr})")
}

/// Build `g && g && ...` over `n` distinct parenthesised comparisons.
fn flat_expression(n: usize) -> String {
    (0..n)
        .map(|i| format!("({i} <= {})", i + 1))
        .collect::<Vec<_>>()
        .join(" && ")
}

fn bench_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("literals");

    for expr in ["true", "!!false", "-7 <= 7", "\"text123\" == \"text123\""] {
        group.bench_function(expr, |b| {
            b.iter(|| evaluate(black_box(expr)));
        });
    }

    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested");

    for &depth in &[4, 16, 64] {
        let expr = nested_expression(depth);
        group.bench_function(&format!("{depth}_deep"), |b| {
            b.iter(|| evaluate(black_box(&expr)));
        });
    }

    group.finish();
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");

    for &n in &[5, 20, 50] {
        let expr = flat_expression(n);
        group.bench_function(&format!("{n}_groups"), |b| {
            b.iter(|| evaluate(black_box(&expr)));
        });
    }

    group.finish();
}

fn bench_comparison_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_comparison");
    let expr = "(\"Stra\u{df}e\" == \"STRASSE\") || (\"caf\u{e9}\" == \"cafe\u{301}\")";

    for mode in [
        StringComparison::Ordinal,
        StringComparison::CaseInsensitive,
        StringComparison::CultureAware,
    ] {
        let evaluator = Evaluator::builder()
            .string_comparison(mode)
            .build()
            .unwrap();
        group.bench_function(&mode.to_string(), |b| {
            b.iter(|| evaluator.evaluate(black_box(expr)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_literals,
    bench_nested,
    bench_flat,
    bench_comparison_modes
);
criterion_main!(benches);
