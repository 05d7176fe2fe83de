use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use freightdesk_core::JobId;
use freightdesk_freight::{
    DimensionAxis, FieldValue, ItemDimensions, JobItemTable, RowEdit, calculate_cbm,
};

fn bench_calculate_cbm(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_cbm");

    // One representative item per billing band.
    let cases = [
        ("within_thresholds", ItemDimensions::new(2.0, 1.0, 1.0, 1.0)),
        ("length_only", ItemDimensions::new(1.0, 2.0, 1.0, 1.0)),
        ("width_only", ItemDimensions::new(3.0, 1.0, 1.5, 1.0)),
        ("all_exceeded", ItemDimensions::new(1.0, 8.5, 1.5, 2.0)),
    ];

    for (name, dims) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &dims, |b, dims| {
            b.iter(|| calculate_cbm(black_box(dims)));
        });
    }

    group.bench_function("from_free_text", |b| {
        let fields = [
            FieldValue::from("4"),
            FieldValue::from("240cm"),
            FieldValue::from("abc"),
            FieldValue::from(" 1.45"),
        ];
        b.iter(|| {
            let dims = ItemDimensions::from_fields(
                black_box(&fields[0]),
                black_box(&fields[1]),
                black_box(&fields[2]),
                black_box(&fields[3]),
            );
            calculate_cbm(&dims)
        });
    });

    group.finish();
}

fn bench_table_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("job_item_table");

    for rows in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("edit_and_total", rows), &rows, |b, &rows| {
            let mut table = JobItemTable::new(JobId::new());
            for _ in 1..rows {
                table.add_row();
            }
            let edit = RowEdit::Dimension {
                axis: DimensionAxis::Height,
                centimeters: FieldValue::from("250"),
            };
            b.iter(|| {
                for index in 0..rows {
                    table.edit_row(index, black_box(&edit)).unwrap();
                }
                table.totals()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_cbm, bench_table_edits);
criterion_main!(benches);
