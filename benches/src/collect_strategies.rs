mod common;

use std::hint::black_box;

use common::{generate_csv_dataset, generate_mall};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use futures::io::Cursor;
use mall::prelude::*;
use tokio::runtime::Runtime;

/// Grouping customers by wanted item under each execution strategy
fn bench_grouping_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_strategies");

    for num_customers in [1_000, 10_000, 100_000] {
        let mall = generate_mall(num_customers, 20);

        for (name, execution) in [
            ("serial", Execution::Serial),
            ("partitioned_4", Execution::Partitioned(4)),
            ("partitioned_16", Execution::Partitioned(16)),
            ("work_stealing", Execution::WorkStealing),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, num_customers),
                &mall,
                |b, mall| b.iter(|| black_box(customers_by_wanted_item(mall, execution).unwrap())),
            );
        }
    }

    group.finish();
}

/// Ordered joining stays correct but pays for contiguous partitions
fn bench_joining_partitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("joining_partitions");
    let names: Vec<String> = (0..50_000).map(|i| format!("customer{i}")).collect();

    for partitions in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(partitions),
            &partitions,
            |b, &partitions| {
                b.iter(|| {
                    black_box(
                        collect_with(
                            names.clone(),
                            &Joining::comma(),
                            Execution::Partitioned(partitions),
                        )
                        .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

/// Bit tokens folded serially versus on the rayon pool
fn bench_bit_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_tokens");
    let tokens: Vec<String> = (0..100_000)
        .map(|i| match i % 3 {
            0 => format!("{}", i % 64 + 1),
            _ => format!("{}-{}", i % 32 + 1, i % 32 + 33),
        })
        .collect();

    for (name, execution) in [
        ("serial", Execution::Serial),
        ("work_stealing", Execution::WorkStealing),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(collect_with(tokens.clone(), &BitString, execution).unwrap()))
        });
    }

    group.finish();
}

/// Full pipeline: parse fixture CSV, build the report, render it
fn bench_report_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_pipeline");
    let runtime = Runtime::new().unwrap();

    for num_customers in [1_000, 10_000] {
        let csv = generate_csv_dataset(num_customers, 20);

        group.bench_with_input(BenchmarkId::from_parameter(num_customers), &csv, |b, csv| {
            b.iter(|| {
                runtime.block_on(async {
                    let reader = Cursor::new(csv.clone().into_bytes());
                    let mall = CsvFixtureStream::new(reader).into_mall().await.unwrap();
                    let report = Report::build(&mall, Execution::Auto).unwrap();

                    let mut output = Vec::new();
                    write_report(&report, &mut output).await.unwrap();
                    black_box(output)
                })
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_grouping_strategies,
    bench_joining_partitions,
    bench_bit_tokens,
    bench_report_pipeline
);
criterion_main!(benches);
