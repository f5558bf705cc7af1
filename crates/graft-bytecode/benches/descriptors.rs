use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graft_bytecode::{Signature, Type};

fn bench_type_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_descriptors");

    for (label, descriptor) in [
        ("primitive", "I"),
        ("reference", "Lgraft/mirror/Widget;"),
        ("array", "[[Lgraft/mirror/Widget;"),
    ] {
        group.bench_with_input(
            BenchmarkId::new("parse", label),
            &descriptor,
            |b, descriptor| {
                b.iter(|| Type::from_descriptor(black_box(descriptor)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_signature_parsing(c: &mut Criterion) {
    let descriptor = "(I[JLClient;Lgraft/mirror/Widget;)Lgraft/api/Widget;";

    c.bench_function("parse_signature", |b| {
        b.iter(|| Signature::from_descriptor(black_box(descriptor)).unwrap());
    });
}

fn bench_signature_printing(c: &mut Criterion) {
    let sig =
        Signature::from_descriptor("(I[JLClient;Lgraft/mirror/Widget;)Lgraft/api/Widget;").unwrap();

    c.bench_function("print_signature", |b| {
        b.iter(|| black_box(&sig).to_string());
    });
}

criterion_group!(
    benches,
    bench_type_parsing,
    bench_signature_parsing,
    bench_signature_printing
);
criterion_main!(benches);
