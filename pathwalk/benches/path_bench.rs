use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathwalk::path::grammar;
use pathwalk::{DirectoryOptions, MemoryFilesystem, Path, RecursiveDirectoryIterator};

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    let text = "C:\\Users\\someone\\projects\\deep\\nested\\file.tar.gz";

    // Benchmark root extraction
    group.bench_function("root_path", |b| {
        b.iter(|| grammar::root_path(black_box(text)));
    });

    // Benchmark parent extraction
    group.bench_function("parent_path", |b| {
        b.iter(|| grammar::parent_path(black_box(text)));
    });

    // Benchmark filename extraction
    group.bench_function("filename", |b| {
        b.iter(|| grammar::filename(black_box(text)));
    });

    // Benchmark extension extraction
    group.bench_function("extension", |b| {
        b.iter(|| grammar::extension(black_box(text)));
    });

    // Benchmark with different path shapes
    for (name, input) in [
        ("drive_rooted", "C:\\Windows\\System32\\"),
        ("slash_rooted", "/foo/bar.txt"),
        ("relative", "foo/bar/baz"),
        ("irregular_runs", "C:\\\\foo\\bar\\\\\\meow\\\\\\\\\\"),
    ] {
        group.bench_with_input(BenchmarkId::new("filename_varied", name), &input, |b, &text| {
            b.iter(|| grammar::filename(black_box(text)));
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    // Benchmark separator-aware append
    group.bench_function("push", |b| {
        b.iter(|| {
            let mut path = Path::from("C:\\Users\\someone");
            path.push(black_box("projects\\deep\\file.txt"));
            path
        });
    });

    // Benchmark extension replacement
    group.bench_function("replace_extension", |b| {
        b.iter(|| {
            let mut path = Path::from("C:\\Users\\someone\\archive.tar.gz");
            path.replace_extension(black_box(".zip"));
            path
        });
    });

    // Benchmark separator normalization
    group.bench_function("make_preferred", |b| {
        b.iter(|| {
            let mut path = Path::from("C:/Users/someone/projects/deep/file.txt");
            path.make_preferred();
            path
        });
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");

    let clean = Path::from("C:\\Users\\someone\\projects\\deep\\nested\\file.txt");
    let dirty = Path::from("C:\\\\foo\\bar\\\\\\meow\\\\\\\\\\");

    // Benchmark full element iteration
    group.bench_function("clean", |b| {
        b.iter(|| black_box(&clean).components().count());
    });

    // Benchmark iteration over irregular separator runs
    group.bench_function("irregular_runs", |b| {
        b.iter(|| black_box(&dirty).components().count());
    });

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    // A fixed in-memory tree keeps the measurement free of OS noise
    let fs = MemoryFilesystem::new();
    for dir in 0..10 {
        for file in 0..10 {
            fs.create_file(format!("C:\\tree\\dir{dir}\\file{file}"));
        }
    }

    // Benchmark a full pre-order walk
    group.bench_function("recursive_walk", |b| {
        b.iter(|| {
            RecursiveDirectoryIterator::with_filesystem(
                black_box(fs.clone()),
                "C:\\tree",
                DirectoryOptions::default(),
            )
            .count()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decompose,
    bench_compose,
    bench_components,
    bench_traversal
);
criterion_main!(benches);
