//! Performance benchmarks for the Rescission Engine.
//!
//! Covers the pure calculator on its own and the full HTTP round trip:
//! - Single settlement through the library entry point
//! - Single settlement through POST /calculate
//! - Batch of 100 settlements across every termination type
//! - Scaling by tenure, which drives notice days and accrual months
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use rescission_engine::api::{AppState, CalculationRequest, create_router};
use rescission_engine::calculation::{BracketWithholding, RescissionCalculator};
use rescission_engine::config::{ConfigLoader, TaxTables};
use rescission_engine::models::{CalculationInput, TerminationType};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/br2025").expect("Failed to load config");
    AppState::new(config)
}

/// Creates an input for an employee hired `tenure_years` before 2025-08-15.
fn create_input(termination_type: TerminationType, tenure_years: i32) -> CalculationInput {
    CalculationInput {
        termination_type,
        monthly_salary: Decimal::new(450000, 2),
        hire_date: NaiveDate::from_ymd_opt(2025 - tenure_years, 3, 1).unwrap(),
        termination_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
        indemnified_notice: true,
        unused_vacation_days: 10,
        fgts_balance: Some(Decimal::new(1200000, 2)),
        dependents: 1,
        months_worked_this_year: None,
    }
}

fn create_request(termination_type: TerminationType, tenure_years: i32) -> CalculationRequest {
    let input = create_input(termination_type, tenure_years);
    CalculationRequest {
        reference: None,
        termination_type: input.termination_type,
        monthly_salary: input.monthly_salary,
        hire_date: input.hire_date,
        termination_date: input.termination_date,
        indemnified_notice: input.indemnified_notice,
        unused_vacation_days: input.unused_vacation_days,
        fgts_balance: input.fgts_balance,
        dependents: input.dependents,
        months_worked_this_year: input.months_worked_this_year,
    }
}

/// Benchmark: single settlement, library only.
fn bench_single_calculation(c: &mut Criterion) {
    let tables = TaxTables::brazil_2025().unwrap();
    let calculator = RescissionCalculator::new(BracketWithholding::new(tables));
    let input = create_input(TerminationType::WithoutCause, 5);

    c.bench_function("single_calculation", |b| {
        b.iter(|| black_box(calculator.calculate(black_box(&input)).unwrap()))
    });
}

/// Benchmark: single settlement through the HTTP handler.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::to_string(&create_request(TerminationType::WithoutCause, 5)).unwrap();

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 settlements, cycling termination types.
fn bench_batch_100(c: &mut Criterion) {
    let tables = TaxTables::brazil_2025().unwrap();
    let calculator = RescissionCalculator::new(BracketWithholding::new(tables));
    let inputs: Vec<CalculationInput> = (0..100)
        .map(|i| {
            let termination_type = TerminationType::ALL[i % TerminationType::ALL.len()];
            create_input(termination_type, (i % 30) as i32)
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.iter(|| {
            let results: Vec<_> = inputs
                .iter()
                .map(|input| calculator.calculate(input).unwrap())
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: tenure scaling.
fn bench_scaling(c: &mut Criterion) {
    let tables = TaxTables::brazil_2025().unwrap();
    let calculator = RescissionCalculator::new(BracketWithholding::new(tables));
    let mut group = c.benchmark_group("scaling");

    for tenure_years in [0, 1, 5, 20, 40].iter() {
        let input = create_input(TerminationType::WithoutCause, *tenure_years);
        group.bench_with_input(
            BenchmarkId::new("tenure_years", tenure_years),
            &input,
            |b, input| b.iter(|| black_box(calculator.calculate(input).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_single_request,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
