use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use price_sim::TickerConfig;
use runtime::GameSession;

const BENCH_STEPS: u64 = 10_000;

fn bench_tick_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_throughput");
    group.throughput(Throughput::Elements(BENCH_STEPS));

    group.bench_function(BenchmarkId::new("step_once", BENCH_STEPS), |b| {
        b.iter(|| {
            let mut session = GameSession::new(7, TickerConfig::default());
            for t in 0..BENCH_STEPS {
                let event = session.step_once(t as i64 * 500);
                black_box(event);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tick_throughput);
criterion_main!(benches);
