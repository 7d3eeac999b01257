use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slugcraft::{idify, slugify};

const SHORT: &str = "Hello, World!";
const ACCENTED: &str = "Æther—Øyvind visits Łódź and the Café au Lait on Straße 12";
const MIXED: &str = "日本語 テキスト / ﬁle names ~ v1.2.3 \u{200b} İstanbul ½ x²";

fn bench_slugify(c: &mut Criterion) {
    let mut group = c.benchmark_group("slugify");
    for (name, input) in [("short", SHORT), ("accented", ACCENTED), ("mixed", MIXED)] {
        group.bench_function(name, |b| b.iter(|| slugify(black_box(input))));
    }
    group.finish();
}

fn bench_idify(c: &mut Criterion) {
    let mut group = c.benchmark_group("idify");
    for (name, input) in [("short", SHORT), ("accented", ACCENTED), ("mixed", MIXED)] {
        group.bench_function(name, |b| b.iter(|| idify(black_box(input))));
    }
    group.finish();
}

criterion_group!(benches, bench_slugify, bench_idify);
criterion_main!(benches);
