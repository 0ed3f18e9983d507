use boleto_core::{module10, module11, PaymentCode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const LINE: &str = "00190.50095 40144.816069 06809.350314 3 37370000000100";
const BAR: &str = "00193373700000001000500940144816060680935031";

fn bench_module10(c: &mut Criterion) {
    let window = [0u8, 6, 8, 0, 9, 3, 5, 0, 3, 1];
    c.bench_function("module10_block", |b| b.iter(|| module10(black_box(&window))));
}

fn bench_module11(c: &mut Criterion) {
    let window = [7u8; 43];
    c.bench_function("module11_bar", |b| b.iter(|| module11(black_box(&window))));
}

fn bench_parse_and_validate_line(c: &mut Criterion) {
    c.bench_function("parse_validate_line", |b| {
        b.iter(|| PaymentCode::new(black_box(LINE)).map(|code| code.validate()))
    });
}

fn bench_bar_to_line(c: &mut Criterion) {
    let code = PaymentCode::new(BAR).unwrap();
    c.bench_function("bar_to_line", |b| b.iter(|| black_box(&code).line(false)));
}

criterion_group!(
    benches,
    bench_module10,
    bench_module11,
    bench_parse_and_validate_line,
    bench_bar_to_line
);
criterion_main!(benches);
