//! Performance benchmarks for the payroll deduction engine.
//!
//! Covers single breakdowns, audited breakdowns, and report rendering for
//! rosters of increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_deductions::calculation::{DeductionCalculator, compute_breakdown};
use payroll_deductions::models::EmployeeRecord;
use payroll_deductions::report::{ReportFormat, ReportGenerator};

/// Builds a roster whose salaries sweep every bracket.
fn create_roster(size: usize) -> Vec<EmployeeRecord> {
    (0..size)
        .map(|i| {
            // 10,000.00 up to about 1.6M in uneven steps
            let cents = 1_000_000 + (i as i64 * 7_919_113) % 160_000_000;
            EmployeeRecord::new(format!("Employee {:05}", i), Decimal::new(cents, 2))
        })
        .collect()
}

fn bench_single_breakdown(c: &mut Criterion) {
    let salary = Decimal::new(5_340_000, 2);

    c.bench_function("single_breakdown", |b| {
        b.iter(|| black_box(compute_breakdown(black_box(salary))))
    });
}

fn bench_audited_breakdown(c: &mut Criterion) {
    let calculator = DeductionCalculator::statutory();
    let salary = Decimal::new(88_000_000, 2);

    c.bench_function("audited_breakdown", |b| {
        b.iter(|| black_box(calculator.breakdown_with_audit(black_box(salary))))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_report");

    for size in [12usize, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));

        for format in [ReportFormat::Csv, ReportFormat::Table] {
            let generator = ReportGenerator::default().with_format(format);
            group.bench_with_input(
                BenchmarkId::new(format.to_string(), size),
                &roster,
                |b, roster| b.iter(|| black_box(generator.render(roster).unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_breakdown,
    bench_audited_breakdown,
    bench_render,
);
criterion_main!(benches);
