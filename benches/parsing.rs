use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridsv::{from_str, parse_float, parse_integer, MAGIC};

fn table_blob(rows: usize) -> String {
    let mut blob = String::from(MAGIC);
    blob.push_str("id,name,score,city\n");
    for i in 0..rows {
        blob.push_str(&format!("{},user{},{}.5,\"City, {}\"\n", i, i, i, i));
    }
    blob
}

fn benchmark_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_view");

    for size in [10, 100, 1000, 10000].iter() {
        let blob = table_blob(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &blob, |b, blob| {
            b.iter(|| from_str(black_box(blob)))
        });
    }
    group.finish();
}

fn benchmark_field_lookup(c: &mut Criterion) {
    let blob = table_blob(1000);
    let view = from_str(&blob).unwrap();

    c.bench_function("get_field_by_index", |b| {
        b.iter(|| view.get_field(black_box(500), black_box(2)))
    });

    c.bench_function("get_field_by_name", |b| {
        b.iter(|| view.get_named_field(black_box(500), black_box("score")))
    });

    c.bench_function("find_row_last", |b| {
        b.iter(|| view.find_row(|row| row.get(0) == Some("999")))
    });
}

fn benchmark_numeric_conversion(c: &mut Criterion) {
    c.bench_function("parse_integer_decimal", |b| {
        b.iter(|| parse_integer(black_box("123456789"), 10))
    });

    c.bench_function("parse_integer_hex", |b| {
        b.iter(|| parse_integer(black_box("-0x75BCD15"), 10))
    });

    c.bench_function("parse_float_fraction", |b| {
        b.iter(|| parse_float(black_box("3.14159265")))
    });

    c.bench_function("parse_float_exponent", |b| {
        b.iter(|| parse_float(black_box("-1.5e12")))
    });
}

fn benchmark_iteration(c: &mut Criterion) {
    let blob = table_blob(1000);
    let view = from_str(&blob).unwrap();

    c.bench_function("iterate_all_fields", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for field in view.fields() {
                total += field.len();
            }
            black_box(total)
        })
    });
}

criterion_group!(
    benches,
    benchmark_construct,
    benchmark_field_lookup,
    benchmark_numeric_conversion,
    benchmark_iteration
);
criterion_main!(benches);
