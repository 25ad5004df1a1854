use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use frbs_rs::{build_rule_base, Dataset, TConorm, TNorm, WangMendelLearner};

/// Training-set sizes we benchmark.
const SIZES: &[usize] = &[100, 1_000, 10_000];

fn create_dataset(seed: u64, examples: usize, inputs: usize) -> Dataset {
    // Simple LCG for reproducible pseudo-random data
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / ((1u64 << 31) as f64)
    };
    let mut x = Vec::with_capacity(examples);
    let mut labels = Vec::with_capacity(examples);
    for _ in 0..examples {
        let row: Vec<f64> = (0..inputs).map(|_| next()).collect();
        let mean = row.iter().sum::<f64>() / inputs as f64;
        labels.push(usize::from(mean > 0.5));
        x.push(row);
    }
    Dataset::new(x, labels, 2).unwrap()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("Wang-Mendel fit");

    for &examples in SIZES {
        let train = create_dataset(42, examples, 4);

        group.throughput(Throughput::Elements(examples as u64));
        group.bench_with_input(
            BenchmarkId::new("fit", examples),
            &examples,
            |bencher, &_| {
                bencher.iter(|| {
                    let mut base =
                        build_rule_base(&train, 5, TNorm::Product, TConorm::Sum).unwrap();
                    let summary = WangMendelLearner::new()
                        .fit(&mut base, black_box(&train))
                        .unwrap();
                    black_box(summary.num_rules)
                })
            },
        );
    }

    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("Wang-Mendel predict");

    for &examples in SIZES {
        let train = create_dataset(42, examples, 4);
        let mut base = build_rule_base(&train, 5, TNorm::Product, TConorm::Sum).unwrap();
        WangMendelLearner::new().fit(&mut base, &train).unwrap();
        let probe = [0.3, 0.7, 0.5, 0.1];

        group.bench_with_input(
            BenchmarkId::new("predict", examples),
            &examples,
            |bencher, &_| bencher.iter(|| black_box(&base).predict(black_box(&probe)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_predict);
criterion_main!(benches);
