use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fanjoin::{BatchEnricher, Enrich, EnrichConfig, Record, ShortTokenGenerator};
use std::convert::Infallible;
use tokio::runtime::Builder;

#[derive(Clone)]
struct Row {
    id: u64,
}

impl Record for Row {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

struct TokenTagger {
    tokens: ShortTokenGenerator,
}

impl Enrich<Row> for TokenTagger {
    type Output = (u64, String);
    type Error = Infallible;

    async fn enrich(&self, row: &Row) -> Result<(u64, String), Infallible> {
        Ok((row.id, self.tokens.generate()))
    }
}

fn enrich_bench(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    let mut group = c.benchmark_group("enrich_all");
    for &batch in &[1_000_usize, 10_000] {
        for &workers in &[4_usize, 16, 64] {
            group.throughput(Throughput::Elements(batch as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("workers_{workers}"), batch),
                &batch,
                |b, &batch| {
                    let enricher = BatchEnricher::with_config(
                        TokenTagger {
                            tokens: ShortTokenGenerator::new(),
                        },
                        EnrichConfig::new().max_concurrency(workers),
                    );
                    b.to_async(&rt).iter(|| {
                        let records: Vec<_> = (0..batch as u64).map(|id| Row { id }).collect();
                        let enricher = &enricher;
                        async move {
                            let out = enricher.enrich_all(records).await.expect("enrich failed");
                            black_box(out);
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, enrich_bench);
criterion_main!(benches);
