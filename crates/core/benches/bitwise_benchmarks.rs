use bitcoerce_core::{bitwise_and, evaluate, to_int32, BinaryOperation, Object, Value};
use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use std::hint::black_box;

fn bitwise_benchmark(c: &mut Criterion) {
    c.bench_function("ToInt32: 1e21", |b| b.iter(|| to_int32(black_box(1e21))));

    c.bench_function("Number: 3 & 5", |b| {
        b.iter(|| {
            let lhs: Value = black_box(3).into();
            let rhs: Value = black_box(5).into();
            bitwise_and(&lhs, &rhs)
        })
    });

    c.bench_function("String: \"0xff\" & \" 42 \"", |b| {
        let lhs: Value = "0xff".into();
        let rhs: Value = " 42 ".into();
        b.iter(|| bitwise_and(black_box(&lhs), black_box(&rhs)))
    });

    c.bench_function("Array: 3 & [[[[13]]]]", |b| {
        let lhs: Value = 3.into();
        let rhs: Value = vec![vec![vec![vec![13]]]].into();
        b.iter(|| bitwise_and(black_box(&lhs), black_box(&rhs)))
    });

    c.bench_function("Hook: valueOf & 7", |b| {
        let lhs: Value = Object::new()
            .with_method("valueOf", |_: &Value, _: &[Value]| Ok(12.into()))
            .into();
        let rhs: Value = 7.into();
        b.iter(|| bitwise_and(black_box(&lhs), black_box(&rhs)))
    });

    c.bench_function("BigInt: 2^100 | 1", |b| {
        let lhs: Value = (BigInt::from(1) << 100usize).into();
        let rhs: Value = BigInt::from(1).into();
        b.iter(|| evaluate(BinaryOperation::BitOr, black_box(&lhs), black_box(&rhs)))
    });
}

criterion_group!(benches, bitwise_benchmark);
criterion_main!(benches);
