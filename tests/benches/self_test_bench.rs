use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use blscheck_keys::{derive_public_key, seed_from_phrase, DerivationPath};
use blscheck_params::MNEMONIC;
use blscheck_selftest::{BlstEngine, Fixture, Harness, HarnessConfig, Runner};

fn bench_derivation(c: &mut Criterion) {
    let seed = seed_from_phrase(MNEMONIC).unwrap();
    let path = DerivationPath::validator(0).to_string();

    c.bench_function("derive validator pubkey", |b| {
        b.iter(|| derive_public_key(seed.as_slice(), &path).unwrap());
    });
    c.bench_function("mnemonic to seed", |b| {
        b.iter(|| seed_from_phrase(MNEMONIC).unwrap());
    });
}

fn bench_self_test(c: &mut Criterion) {
    let fixture = Fixture::reference();
    c.bench_function("run once", |b| {
        let runner = Runner::new(&BlstEngine);
        b.iter(|| runner.run_once(&fixture));
    });

    let mut group = c.benchmark_group("harness");
    group.sample_size(10);
    for runs in [1usize, 10, 50].iter() {
        group.bench_with_input(BenchmarkId::new("runs", runs), runs, |b, &runs| {
            let harness = Harness::new(&BlstEngine, HarnessConfig::default().with_runs(runs));
            b.iter(|| harness.run(&fixture));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_derivation, bench_self_test);
criterion_main!(benches);
