use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use posixpath::path::{self, PathRecord};
use posixpath::registry;

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for (name, input) in [
        ("short", "f1.txt"),
        ("nested", "/usr/local/share/doc/index.coffee.md"),
        ("trailing", "/usr/local/share///"),
        ("hidden", "/home/user/.profile"),
    ] {
        group.bench_with_input(BenchmarkId::new("basename", name), &input, |b, &p| {
            b.iter(|| path::basename(black_box(p), Some(".md")));
        });
        group.bench_with_input(BenchmarkId::new("dirname", name), &input, |b, &p| {
            b.iter(|| path::dirname(black_box(p)));
        });
        group.bench_with_input(BenchmarkId::new("extname", name), &input, |b, &p| {
            b.iter(|| path::extname(black_box(p)));
        });
    }

    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");

    group.bench_function("two_segments", |b| {
        b.iter(|| path::join(black_box(["a", "b"])));
    });

    group.bench_function("leading_collapse", |b| {
        b.iter(|| path::join(black_box(["/", "//", "a"])));
    });

    group.bench_function("trailing_collapse", |b| {
        b.iter(|| path::join(black_box(["a", "b///"])));
    });

    let many: Vec<String> = (0..32).map(|i| format!("segment-{i}")).collect();
    group.bench_function("many_segments", |b| {
        b.iter(|| path::join(black_box(&many)));
    });

    group.finish();
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");

    group.bench_function("parse", |b| {
        b.iter(|| path::parse(black_box("/home/user/dir/file.txt")));
    });

    let record = PathRecord {
        root: "/".to_string(),
        name: "file".to_string(),
        ext: "txt".to_string(),
        ..Default::default()
    };
    group.bench_function("format", |b| {
        b.iter(|| path::format(black_box(&record)));
    });

    group.bench_function("parse_format_round_trip", |b| {
        b.iter(|| path::format(&path::parse(black_box("b/c/file.ext"))));
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("lookup_hit", |b| {
        b.iter(|| registry::global().lookup(black_box("node:path")));
    });

    group.bench_function("lookup_miss", |b| {
        b.iter(|| registry::global().lookup(black_box("node:fs")));
    });

    group.finish();
}

criterion_group!(benches, bench_split, bench_join, bench_record, bench_registry);
criterion_main!(benches);
