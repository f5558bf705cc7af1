use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graft_bytecode::{ClassDef, ClassGroup, Field, Method, Signature, Type};
use graft_inject::{resolve, SymbolBridge};

/// A bridge with `n` mapped classes; the interesting method/field sit in the
/// last class so full scans pay the worst case.
fn fixture(n: usize) -> SymbolBridge {
    let mut shipped = ClassGroup::new();
    let mut readable = ClassGroup::new();
    let sig = Signature::from_descriptor("()V").unwrap();

    for i in 0..n {
        let ob = format!("c{i}");
        let mut shipped_class = ClassDef::new(ob.clone());
        let mut readable_class = ClassDef::new(format!("Class{i}")).with_obfuscated_name(ob);

        if i == n - 1 {
            shipped_class = shipped_class
                .with_method(Method::new_static("g", sig.clone()))
                .with_field(Field::new_static("q", Type::INT));
            readable_class = readable_class
                .with_method(Method::new_static("tick", sig.clone()).with_obfuscated_name("g"))
                .with_field(Field::new_static("cameraX", Type::INT).with_obfuscated_name("q"));
        }

        shipped.add_class(shipped_class);
        readable.add_class(readable_class);
    }

    SymbolBridge::new(shipped, readable, ClassGroup::new(), ClassGroup::new()).unwrap()
}

fn bench_full_scan_method(c: &mut Criterion) {
    let bridge = fixture(1000);

    c.bench_function("find_static_method_full_scan", |b| {
        b.iter(|| resolve::find_static_method(&bridge, black_box("tick"), None, None).unwrap());
    });
}

fn bench_hinted_method(c: &mut Criterion) {
    let bridge = fixture(1000);

    c.bench_function("find_static_method_hinted", |b| {
        b.iter(|| {
            resolve::find_static_method(&bridge, black_box("tick"), Some("Class999"), None)
                .unwrap()
        });
    });
}

fn bench_full_scan_field(c: &mut Criterion) {
    let bridge = fixture(1000);

    c.bench_function("find_static_field_full_scan", |b| {
        b.iter(|| {
            resolve::find_static_field_with(&bridge, black_box("cameraX"), None, None).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_full_scan_method,
    bench_hinted_method,
    bench_full_scan_field
);
criterion_main!(benches);
