use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_categories_benches::{sample_ucd, synthetic_ucd};
use unicode_categories_prepare::{generate_from_reader, output, EmitterConfig};
use unicode_categories_source::{Classifier, Records};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// разбор и классификация без вывода
fn classify(c: &mut Criterion)
{
    let mut group = c.benchmark_group("classify");
    let classifier = Classifier::default();

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for count in [1_000, 35_000] {
        let data = synthetic_ucd(count);

        group.bench_with_input(BenchmarkId::new("synthetic", count), &data, |b, data| {
            b.iter(|| {
                classifier
                    .classify(Records::from_reader(Cursor::new(black_box(data.as_bytes()))))
                    .unwrap()
            })
        });
    }

    group.finish();
}

/// вывод уже собранных таблиц
fn render(c: &mut Criterion)
{
    let config = EmitterConfig::default();
    let table = Classifier::default()
        .classify(Records::from_reader(Cursor::new(synthetic_ucd(35_000))))
        .unwrap();

    c.bench_function("render/synthetic", |b| {
        b.iter(|| output::render(black_box(&table), &config).unwrap())
    });
}

/// весь путь от текста до сгенерированного файла
fn pipeline(c: &mut Criterion)
{
    let classifier = Classifier::default();
    let config = EmitterConfig::default();
    let data = sample_ucd();

    c.bench_function("pipeline/sample", |b| {
        b.iter(|| {
            let mut sink = Vec::new();
            generate_from_reader(Cursor::new(black_box(data.as_bytes())), &classifier, &config, &mut sink)
                .unwrap();
            sink
        })
    });
}

criterion_group!(benches, classify, render, pipeline);
criterion_main!(benches);
