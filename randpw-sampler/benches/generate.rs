use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::{SmallRng, StdRng};
use randpw_sampler::{Alphabet, CancelFlag, DEFAULT_ALPHABET, generate_with, sample_password, validate};

/// Mixed-width alphabet: ASCII, Latin-1, and characters outside the BMP.
const WIDE_ALPHABET: &str = "abcdefXYZ0123\u{00E9}\u{00DF}\u{1F600}\u{1F680}\u{1D11E}";

fn bench_sample_password(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_password");

    let ascii = Alphabet::decode(DEFAULT_ALPHABET).unwrap();
    let wide = Alphabet::decode(WIDE_ALPHABET).unwrap();

    // Fixed seed for reproducible results
    let mut rng = SmallRng::seed_from_u64(42);

    group.bench_function("default_alphabet_len_10", |b| {
        b.iter(|| sample_password(black_box(&ascii), 10, &mut rng))
    });

    group.bench_function("default_alphabet_len_100", |b| {
        b.iter(|| sample_password(black_box(&ascii), 100, &mut rng))
    });

    group.bench_function("wide_alphabet_len_10", |b| {
        b.iter(|| sample_password(black_box(&wide), 10, &mut rng))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let request = validate(DEFAULT_ALPHABET, 10, 500, 0).unwrap();

    group.bench_function("500_passwords_smallrng", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| generate_with(black_box(&request), &mut rng, &mut CancelFlag::new()))
    });

    group.bench_function("500_passwords_stdrng", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| generate_with(black_box(&request), &mut rng, &mut CancelFlag::new()))
    });

    group.finish();
}

criterion_group!(benches, bench_sample_password, bench_generate);
criterion_main!(benches);
