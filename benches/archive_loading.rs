use std::hint::black_box;

use chat_archive_explorer::parse_archive;
use chat_archive_explorer::transcript::reconstruct;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Synthetic export: `conversations` records with `messages` nodes each
fn generate_export(conversations: usize, messages: usize) -> String {
    let records: Vec<String> = (0..conversations)
        .map(|c| {
            let nodes: Vec<String> = (0..messages)
                .map(|m| {
                    let role = if m % 2 == 0 { "user" } else { "assistant" };
                    format!(
                        r#""node-{c}-{m}":{{"parent":null,"children":[],"create_time":{},"message":{{"author":{{"role":"{role}"}},"content":{{"content_type":"text","parts":["message {m} of conversation {c} with some filler text"]}}}}}}"#,
                        (messages - m) as f64
                    )
                })
                .collect();
            format!(r#"{{"title":"Conversation {c}","create_time":{c},"mapping":{{{}}}}}"#, nodes.join(","))
        })
        .collect();
    format!("[{}]", records.join(","))
}

fn bench_parse_archive(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_archive");

    for size in [100, 1_000, 5_000].iter() {
        let export = generate_export(*size, 10);
        group.throughput(Throughput::Bytes(export.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| parse_archive(black_box(export.as_bytes())).unwrap());
        });
    }

    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for messages in [10, 100, 1_000].iter() {
        let archive = parse_archive(generate_export(1, *messages).as_bytes()).unwrap();
        let conversation = archive.get(0).unwrap().clone();
        group.throughput(Throughput::Elements(*messages as u64));
        group.bench_with_input(BenchmarkId::from_parameter(messages), &conversation, |b, conv| {
            b.iter(|| reconstruct(black_box(conv)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_archive, bench_reconstruct);
criterion_main!(benches);
