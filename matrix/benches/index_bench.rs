use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix::index::{forward, inverse, n_entries};
use matrix::SymmetricMatrix;

pub fn forward_index(c: &mut Criterion) {
    let n = 22184;
    c.bench_function("forward", |b| {
        b.iter(|| forward(black_box(1234), black_box(20000), n, false))
    });
}

pub fn inverse_index(c: &mut Criterion) {
    let n = 22184;
    let last = n_entries(n, false).unwrap() - 1;
    c.bench_function("inverse", |b| {
        b.iter(|| inverse(black_box(last / 3), n, false))
    });
}

pub fn get_set(c: &mut Criterion) {
    let n = 500;
    let mut m = black_box(SymmetricMatrix::new(n, true).unwrap());

    c.bench_function("get_set", |b| {
        b.iter(|| {
            let v = m.get(black_box(17), black_box(301)).unwrap();
            m.set(301, 17, v + 1.).unwrap();
        })
    });
}

pub fn get_set_by_offset(c: &mut Criterion) {
    let n = 500;
    let mut m = black_box(SymmetricMatrix::new(n, true).unwrap());
    let i = m.offset(17, 301).unwrap();

    c.bench_function("get_set_by_offset", |b| {
        b.iter(|| {
            let v = m.get_by_offset(black_box(i)).unwrap();
            m.set_by_offset(i, v + 1.).unwrap();
        })
    });
}

criterion_group!(
    benches,
    forward_index,
    inverse_index,
    get_set,
    get_set_by_offset
);
criterion_main!(benches);
