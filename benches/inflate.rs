use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use numinflate::{inflate, Inflator};

const SENTENCE: &str = "Step one: mix ingredients. Step two: bake for ten minutes. \
                        Anyone up for tennis? Thirteen, NINETEEN, ninetynine. ";

fn bench_inflate(c: &mut Criterion) {
    let mut group = c.benchmark_group("inflate");
    for repeat in [1usize, 16, 256] {
        let text = SENTENCE.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", repeat), &text, |b, text| {
            b.iter(|| inflate(text))
        });
    }
    group.finish();
}

fn bench_no_matches(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(256);
    let inflator = Inflator::default();
    c.bench_function("inflate/no_matches", |b| b.iter(|| inflator.inflate(&text)));
}

fn bench_short_input(c: &mut Criterion) {
    // Shorter than most keys: candidate filtering leaves only 3-letter words.
    c.bench_function("inflate/short", |b| b.iter(|| inflate("one")));
}

criterion_group!(benches, bench_inflate, bench_no_matches, bench_short_input);
criterion_main!(benches);
